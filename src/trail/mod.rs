// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the cover search.
//!
//! Every change to the candidate group is recorded on the trail. When the
//! engine backtracks it rewinds the trail to a checkpoint, and each entry
//! popped on the way is undone by the search context.

use crate::config::TRAIL_CAPACITY;

/// A single entry in the trail, recording one state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailEntry {
    /// A row was appended to the candidate group and its mask was folded
    /// into the accumulated mask.
    RowAdded(usize),
}

/// The trail: an undo log for the candidate group.
///
/// Checkpoints are plain trail lengths. The engine stores one per stack
/// entry, which gives the nested add-then-remove discipline of a recursive
/// search without recursion.
#[derive(Debug)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(TRAIL_CAPACITY),
        }
    }

    /// Current position, usable as a checkpoint.
    pub fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    /// Record a state change.
    pub fn record(&mut self, entry: TrailEntry) {
        self.entries.push(entry);
    }

    /// Pop the most recent entry if it was recorded after `checkpoint`.
    ///
    /// Callers undo the returned entry and call again until `None`.
    pub fn pop_since(&mut self, checkpoint: usize) -> Option<TrailEntry> {
        if self.entries.len() > checkpoint {
            self.entries.pop()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_new() {
        let trail = Trail::new();
        assert_eq!(trail.len(), 0);
        assert!(trail.is_empty());
        assert_eq!(trail.checkpoint(), 0);
    }

    #[test]
    fn test_checkpoint_and_pop() {
        let mut trail = Trail::new();
        trail.record(TrailEntry::RowAdded(1));
        let checkpoint = trail.checkpoint();
        assert_eq!(checkpoint, 1);

        trail.record(TrailEntry::RowAdded(3));
        trail.record(TrailEntry::RowAdded(4));

        // Newest first, stopping at the checkpoint
        assert_eq!(trail.pop_since(checkpoint), Some(TrailEntry::RowAdded(4)));
        assert_eq!(trail.pop_since(checkpoint), Some(TrailEntry::RowAdded(3)));
        assert_eq!(trail.pop_since(checkpoint), None);
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn test_nested_checkpoints() {
        let mut trail = Trail::new();
        let outer = trail.checkpoint();
        trail.record(TrailEntry::RowAdded(0));
        let inner = trail.checkpoint();
        trail.record(TrailEntry::RowAdded(2));

        assert_eq!(trail.pop_since(inner), Some(TrailEntry::RowAdded(2)));
        assert_eq!(trail.pop_since(inner), None);
        assert_eq!(trail.len(), 1);

        while trail.pop_since(outer).is_some() {}
        assert!(trail.is_empty());
    }

    #[test]
    fn test_pop_past_end() {
        let mut trail = Trail::new();
        trail.record(TrailEntry::RowAdded(0));
        // A checkpoint beyond the trail never pops anything
        assert_eq!(trail.pop_since(5), None);
        assert_eq!(trail.len(), 1);
    }
}
