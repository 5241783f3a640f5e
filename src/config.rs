// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search configuration and sizing constants.

/// Initial capacity of the engine's predicate stack.
pub(crate) const STACK_CAPACITY: usize = 64;

/// Initial capacity of the trail.
pub(crate) const TRAIL_CAPACITY: usize = 64;

/// Options for one cover search.
///
/// # Example
///
/// ```
/// use complement_search::config::SearchConfig;
///
/// let config = SearchConfig::default().with_step_budget(10_000);
/// assert_eq!(config.step_budget, Some(10_000));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of predicate calls (`try_pred` plus `retry_pred`).
    ///
    /// `None` searches exhaustively. When the budget runs out the search
    /// stops and reports the covers found so far as incomplete.
    pub step_budget: Option<u64>,
}

impl SearchConfig {
    pub fn with_step_budget(mut self, steps: u64) -> Self {
        self.step_budget = Some(steps);
        self
    }
}
