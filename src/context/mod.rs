// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO and DYNAMIC state.
//!
//! The SearchContext is the core data structure that combines:
//! - Tier 1 (MEMO): the validated row table with precomputed masks
//! - Tier 2 (DYNAMIC): the candidate group, tracked on the trail, and the
//!   accepted covers
//!
//! Predicates only change the candidate group through [`SearchContext::add_row`],
//! so that [`SearchContext::rewind_to`] can always restore an earlier state.

mod dynamic;

pub use dynamic::DynamicState;

use crate::rows::{OccupancyMask, RowTable};
use crate::state::statistics::{Counters, Statistics};
use crate::trail::{Trail, TrailEntry};
use std::collections::BTreeSet;

/// Search context combining MEMO and DYNAMIC state.
///
/// # Memory Model
///
/// ```text
/// SearchContext {
///     memo: RowTable,            // Tier 1: Immutable, owned copy
///     trail: Trail,              // Tier 2: Mutable, owned
///     state: DynamicState,       // Tier 2: Mutable, owned
///     statistics: Statistics,    // Counters, never rewound
/// }
/// ```
///
/// # Example
///
/// ```
/// use complement_search::context::SearchContext;
/// use complement_search::rows::{Row, RowTable};
///
/// let table = RowTable::new(vec![
///     Row::from(vec![Some("b1"), None]),
///     Row::from(vec![None, Some("c2")]),
/// ])
/// .unwrap();
/// let mut ctx = SearchContext::new(table);
///
/// let checkpoint = ctx.trail.checkpoint();
/// ctx.add_row(0);
/// ctx.add_row(1);
/// assert!(ctx.is_complete());
///
/// ctx.rewind_to(checkpoint);
/// assert!(ctx.group().is_empty());
/// ```
#[derive(Debug)]
pub struct SearchContext {
    /// Immutable row data (Tier 1)
    pub memo: RowTable,
    /// Undo log for the candidate group (Tier 2)
    pub trail: Trail,
    /// Mutable search state (Tier 2)
    pub state: DynamicState,
    /// Search counters
    pub statistics: Statistics,
}

impl SearchContext {
    /// Create a search context over a validated table.
    pub fn new(memo: RowTable) -> Self {
        let state = DynamicState::new(&memo);
        Self {
            memo,
            trail: Trail::new(),
            state,
            statistics: Statistics::new(),
        }
    }

    /// Rows of the candidate group, ascending.
    pub fn group(&self) -> &[usize] {
        &self.state.group
    }

    pub fn accumulated_mask(&self) -> &OccupancyMask {
        &self.state.accumulated
    }

    /// First row index that may extend the candidate group.
    ///
    /// Groups are built in ascending index order, so each combination of
    /// rows is explored once rather than once per permutation.
    pub fn next_candidate(&self) -> usize {
        self.state.group.last().map_or(0, |&last| last + 1)
    }

    /// True if the row shares an occupied column with the candidate group.
    pub fn conflicts_with(&self, row: usize) -> bool {
        !self.state.accumulated.is_disjoint(self.memo.mask(row))
    }

    /// Append a row to the candidate group (trail-tracked).
    ///
    /// # Panics
    ///
    /// Panics if the row conflicts with the group or breaks ascending order.
    pub fn add_row(&mut self, row: usize) {
        assert!(
            row >= self.next_candidate() && row < self.memo.len(),
            "Row {} cannot extend group {:?}",
            row,
            self.state.group
        );
        assert!(
            !self.conflicts_with(row),
            "Row {} conflicts with group {:?}",
            row,
            self.state.group
        );
        self.state.accumulated.toggle_all(self.memo.mask(row));
        self.state.group.push(row);
        self.trail.record(TrailEntry::RowAdded(row));
        self.statistics.increment_counter(Counters::RowsAdded);
    }

    /// Undo every change recorded after `checkpoint`.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        while let Some(entry) = self.trail.pop_since(checkpoint) {
            match entry {
                TrailEntry::RowAdded(row) => {
                    let removed = self.state.group.pop();
                    debug_assert_eq!(removed, Some(row), "Trail out of step with group");
                    self.state.accumulated.toggle_all(self.memo.mask(row));
                }
            }
        }
    }

    /// True if the candidate group is non-empty and covers every column.
    pub fn is_complete(&self) -> bool {
        !self.state.group.is_empty() && &self.state.accumulated == self.memo.reference_mask()
    }

    /// Add a copy of the candidate group to the covers.
    ///
    /// Returns false if the same set of rows was already recorded.
    pub fn record_cover(&mut self) -> bool {
        let inserted = self.state.covers.insert(self.state.group.clone());
        if inserted {
            log::trace!("Cover found: rows {:?}", self.state.group);
            self.statistics.increment_counter(Counters::CoversFound);
        } else {
            self.statistics.increment_counter(Counters::DuplicateCovers);
        }
        inserted
    }

    /// Accepted groups so far, in canonical order.
    pub fn covers(&self) -> &BTreeSet<Vec<usize>> {
        &self.state.covers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rows::Row;

    fn scenario() -> SearchContext {
        let table = RowTable::new(vec![
            Row::from(vec![Some("a1"), Some("a2")]),
            Row::from(vec![Some("b1"), None]),
            Row::from(vec![None, Some("c2")]),
        ])
        .unwrap();
        SearchContext::new(table)
    }

    #[test]
    fn test_search_context_new() {
        let ctx = scenario();
        assert!(ctx.trail.is_empty());
        assert!(ctx.group().is_empty());
        assert!(ctx.accumulated_mask().is_empty());
        assert!(ctx.covers().is_empty());
        assert_eq!(ctx.next_candidate(), 0);
        assert!(!ctx.is_complete());
    }

    #[test]
    fn test_add_and_rewind() {
        let mut ctx = scenario();
        let checkpoint = ctx.trail.checkpoint();

        ctx.add_row(1);
        assert_eq!(ctx.next_candidate(), 2);
        assert!(ctx.conflicts_with(0));
        assert!(!ctx.conflicts_with(2));

        let inner = ctx.trail.checkpoint();
        ctx.add_row(2);
        assert!(ctx.is_complete());
        assert_eq!(ctx.group(), &[1, 2]);

        ctx.rewind_to(inner);
        assert_eq!(ctx.group(), &[1]);
        assert_eq!(format!("{}", ctx.accumulated_mask()), "10");

        ctx.rewind_to(checkpoint);
        assert!(ctx.group().is_empty());
        assert!(ctx.accumulated_mask().is_empty());
        assert_eq!(ctx.statistics.get(Counters::RowsAdded), 2);
    }

    #[test]
    #[should_panic(expected = "conflicts with group")]
    fn test_add_conflicting_row_panics() {
        let mut ctx = scenario();
        ctx.add_row(0);
        ctx.add_row(1);
    }

    #[test]
    #[should_panic(expected = "cannot extend group")]
    fn test_add_out_of_order_panics() {
        let mut ctx = scenario();
        ctx.add_row(2);
        ctx.add_row(1);
    }

    #[test]
    fn test_record_cover_dedups() {
        let mut ctx = scenario();
        ctx.add_row(0);
        assert!(ctx.record_cover());
        assert!(!ctx.record_cover());

        assert_eq!(ctx.covers().len(), 1);
        assert_eq!(ctx.statistics.get(Counters::CoversFound), 1);
        assert_eq!(ctx.statistics.get(Counters::DuplicateCovers), 1);
    }

    #[test]
    fn test_covers_survive_rewind() {
        let mut ctx = scenario();
        ctx.add_row(0);
        ctx.record_cover();
        ctx.rewind_to(0);
        assert!(ctx.group().is_empty());
        assert!(ctx.covers().contains(&vec![0]));
    }
}
