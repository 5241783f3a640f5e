// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state (Tier 2: DYNAMIC).

use crate::rows::{OccupancyMask, RowTable};
use std::collections::BTreeSet;

/// Mutable search state (Tier 2: DYNAMIC).
///
/// The candidate group and its accumulated mask change during search and
/// every change is recorded on the trail. The cover set only ever grows.
#[derive(Debug)]
pub struct DynamicState {
    /// Rows of the candidate group, in ascending order.
    pub group: Vec<usize>,

    /// XOR (equivalently OR, since members are disjoint) of the group's masks.
    pub accumulated: OccupancyMask,

    /// Accepted groups, each in canonical ascending order.
    ///
    /// Not trail-tracked: results survive backtracking.
    pub covers: BTreeSet<Vec<usize>>,
}

impl DynamicState {
    /// Create the initial state: empty group, empty mask, no covers.
    pub fn new(memo: &RowTable) -> Self {
        Self {
            group: Vec::with_capacity(memo.len()),
            accumulated: OccupancyMask::empty(memo.column_count()),
            covers: BTreeSet::new(),
        }
    }
}
