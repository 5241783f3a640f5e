// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ExtendGroupPredicate - Grows the candidate group one row per round.
//!
//! Round r decides the (r+1)-th member of the group. Rows are only ever
//! appended in ascending index order, so every combination of rows is
//! reached by exactly one path.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::statistics::Counters;

/// ExtendGroupPredicate enumerates candidate groups depth first.
///
/// # Choices
///
/// With `next = last member + 1` (or 0 for an empty group) and N rows:
/// - Choice 0 → close the group here and hand it to the next predicate
///   (fails for the empty group)
/// - Choice k ≥ 1 → append row `next + k - 1`, unless it shares an occupied
///   column with the group
///
/// Closing comes first, so a group is tested before any of its extensions.
/// A group that is already complete can still be extended by rows with no
/// present cells; each such extension is a distinct group.
#[derive(Debug)]
pub struct ExtendGroupPredicate;

impl Predicate for ExtendGroupPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        debug_assert_eq!(round, ctx.group().len(), "One round per group member");
        let remaining = ctx.memo.len() - ctx.next_candidate();
        PredicateResult::Choices(remaining + 1)
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        _round: usize,
        choice: usize,
    ) -> PredicateResult {
        if choice == 0 {
            return if ctx.group().is_empty() {
                PredicateResult::Failure
            } else {
                PredicateResult::Success
            };
        }

        let row = ctx.next_candidate() + choice - 1;
        if ctx.conflicts_with(row) {
            ctx.statistics.increment_counter(Counters::Conflicts);
            return PredicateResult::Failure;
        }

        ctx.add_row(row);
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "ExtendGroup"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineBuilder;
    use crate::predicates::{FailPredicate, SuspendPredicate};
    use crate::rows::{Row, RowTable};

    fn context() -> SearchContext {
        let table = RowTable::new(vec![
            Row::from(vec![Some("a1"), Some("a2")]),
            Row::from(vec![Some("b1"), None]),
            Row::from(vec![None, Some("c2")]),
        ])
        .unwrap();
        SearchContext::new(table)
    }

    #[test]
    fn test_root_offers_every_row() {
        let mut ctx = context();
        let mut pred = ExtendGroupPredicate;
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Choices(4));
    }

    #[test]
    fn test_cannot_close_empty_group() {
        let mut ctx = context();
        let mut pred = ExtendGroupPredicate;
        assert_eq!(pred.retry_pred(&mut ctx, 0, 0), PredicateResult::Failure);
    }

    #[test]
    fn test_retry_adds_row() {
        let mut ctx = context();
        let mut pred = ExtendGroupPredicate;

        assert_eq!(
            pred.retry_pred(&mut ctx, 0, 2),
            PredicateResult::SuccessSamePredicate
        );
        assert_eq!(ctx.group(), &[1]);

        // Only row 2 is left after row 1
        assert_eq!(pred.try_pred(&mut ctx, 1), PredicateResult::Choices(2));
        assert_eq!(pred.retry_pred(&mut ctx, 1, 0), PredicateResult::Success);
    }

    #[test]
    fn test_conflicting_row_fails() {
        let mut ctx = context();
        let mut pred = ExtendGroupPredicate;

        pred.retry_pred(&mut ctx, 0, 1);
        assert_eq!(ctx.group(), &[0]);
        assert_eq!(pred.retry_pred(&mut ctx, 1, 1), PredicateResult::Failure);
        assert_eq!(ctx.group(), &[0]);
        assert_eq!(ctx.statistics.get(Counters::Conflicts), 1);
    }

    #[test]
    fn test_enumerates_disjoint_groups() {
        let mut ctx = context();
        let engine = EngineBuilder::new()
            .add(Box::new(ExtendGroupPredicate))
            .add(crate::state::Statistics::counting_predicate(
                Counters::GroupsClosed,
                None,
            ))
            .terminal(Box::new(FailPredicate))
            .build();
        engine.search(&mut ctx);

        // {0}, {1}, {1,2}, {2}
        assert_eq!(ctx.statistics.get(Counters::GroupsClosed), 4);
        assert!(ctx.group().is_empty());
    }

    #[test]
    fn test_first_closed_group_is_row_zero() {
        let mut ctx = context();
        let engine = EngineBuilder::new()
            .add(Box::new(ExtendGroupPredicate))
            .terminal(Box::new(SuspendPredicate))
            .build();
        assert!(engine.search(&mut ctx).suspended().is_some());
        assert_eq!(ctx.group(), &[0]);
    }
}
