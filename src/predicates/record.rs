// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! RecordCoverPredicate - Accepts complete groups.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};

/// Succeeds, after recording the group, iff the candidate group covers every
/// column exactly once.
///
/// Disjointness is already guaranteed by `ExtendGroupPredicate`, so the test
/// is only mask equality with the reference mask.
#[derive(Debug)]
pub struct RecordCoverPredicate;

impl Predicate for RecordCoverPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if !ctx.is_complete() {
            return PredicateResult::Failure;
        }
        ctx.record_cover();
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "RecordCover"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rows::{Row, RowTable};
    use crate::state::statistics::Counters;

    fn context() -> SearchContext {
        let table = RowTable::new(vec![
            Row::from(vec![Some("b1"), None]),
            Row::from(vec![None, Some("c2")]),
        ])
        .unwrap();
        SearchContext::new(table)
    }

    #[test]
    fn test_incomplete_group_fails() {
        let mut ctx = context();
        let mut pred = RecordCoverPredicate;
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Failure);

        ctx.add_row(0);
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Failure);
        assert!(ctx.covers().is_empty());
    }

    #[test]
    fn test_complete_group_recorded() {
        let mut ctx = context();
        let mut pred = RecordCoverPredicate;
        ctx.add_row(0);
        ctx.add_row(1);

        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Success);
        assert!(ctx.covers().contains(&vec![0, 1]));
        assert_eq!(ctx.statistics.get(Counters::CoversFound), 1);
    }
}
