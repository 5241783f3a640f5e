// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence. The engine coordinates with the trail to restore the
//! candidate group automatically on backtracking.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! Execution follows a WAM-like model:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to previous stack entry
//! 6. If Suspend: pause and return control to caller
//!
//! Because the stack is explicit, search depth is bounded by memory rather
//! than by the native call stack.
//!
//! # Example
//!
//! ```
//! use complement_search::context::SearchContext;
//! use complement_search::engine::{EngineBuilder, SearchOutcome};
//! use complement_search::predicates::{
//!     ExtendGroupPredicate, FailPredicate, RecordCoverPredicate,
//! };
//! use complement_search::rows::{Row, RowTable};
//!
//! let table = RowTable::new(vec![
//!     Row::from(vec![Some("a1"), Some("a2")]),
//!     Row::from(vec![Some("b1"), None]),
//!     Row::from(vec![None, Some("c2")]),
//! ])
//! .unwrap();
//! let mut ctx = SearchContext::new(table);
//!
//! let engine = EngineBuilder::new()
//!     .add(Box::new(ExtendGroupPredicate))
//!     .add(Box::new(RecordCoverPredicate))
//!     .terminal(Box::new(FailPredicate))
//!     .build();
//!
//! assert!(matches!(engine.search(&mut ctx), SearchOutcome::Exhausted));
//! assert_eq!(ctx.covers().len(), 2);
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::config::STACK_CAPACITY;
use crate::context::SearchContext;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,

    /// Trail checkpoint for this stack entry.
    trail_checkpoint: usize,
}

impl StackEntry {
    fn new(predicate_index: usize, round: usize, trail_checkpoint: usize) -> Self {
        Self {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
            trail_checkpoint,
        }
    }
}

/// How a call to [`SearchEngine::search`] ended.
#[derive(Debug)]
pub enum SearchOutcome {
    /// A predicate returned Suspend. The engine can be resumed with `search`.
    Suspended(SearchEngine),

    /// Every choice was explored and the search backtracked past the first
    /// predicate.
    Exhausted,

    /// The step budget ran out before the search space was exhausted.
    BudgetExhausted,
}

impl SearchOutcome {
    /// The suspended engine, if any.
    pub fn suspended(self) -> Option<SearchEngine> {
        match self {
            SearchOutcome::Suspended(engine) => Some(engine),
            _ => None,
        }
    }
}

/// Search engine that coordinates predicate execution and backtracking.
///
/// The engine runs predicates in sequence, managing rounds, choices, and
/// backtracking automatically via the trail system.
#[derive(Debug)]
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Maximum try_count + retry_count before giving up, if any.
    step_budget: Option<u64>,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls (backtracks).
    retry_count: u64,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Prefer [`EngineBuilder`], which ensures the sequence ends with a
    /// terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(STACK_CAPACITY),
            step_budget: None,
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search until it suspends, exhausts, or runs out of budget.
    ///
    /// Consumes the engine; a suspended engine is handed back inside
    /// [`SearchOutcome::Suspended`] and continues from where it stopped when
    /// `search` is called again. Results are delivered through side effects on
    /// `ctx`, not through the return value.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence is invalid (reaches the end without FAIL or SUSPEND),
    /// or if a predicate's retry_pred returns Choices or Suspend.
    pub fn search(mut self, ctx: &mut SearchContext) -> SearchOutcome {
        if self.predicates.is_empty() {
            return SearchOutcome::Exhausted;
        }

        if self.stack.is_empty() {
            // Fresh start (not a resumption)
            self.try_count = 0;
            self.retry_count = 0;
            self.stack.push(StackEntry::new(0, 0, ctx.trail.checkpoint()));
        } else {
            // Resuming after Suspend: the suspending entry is done, so carry
            // on by backtracking from it.
            self.stack.pop();
        }

        loop {
            // Check if we've backtracked past the first predicate
            let Some(entry) = self.stack.last_mut() else {
                return SearchOutcome::Exhausted;
            };

            if let Some(budget) = self.step_budget {
                if self.try_count + self.retry_count >= budget {
                    log::warn!("Search step budget of {} exhausted", budget);
                    return SearchOutcome::BudgetExhausted;
                }
            }

            // Rewind trail to this entry's checkpoint
            ctx.rewind_to(entry.trail_checkpoint);

            if !entry.in_choice_mode {
                // Call mode: try_pred
                let pred_idx = entry.predicate_index;
                let round = entry.round;
                self.try_count += 1;
                let result = self.predicates[pred_idx].try_pred(ctx, round);

                match result {
                    PredicateResult::Success => {
                        self.mark_done();
                        self.push_next_predicate(ctx);
                    }
                    PredicateResult::SuccessSamePredicate => {
                        self.mark_done();
                        self.push_same_predicate(ctx);
                    }
                    PredicateResult::Failure => {
                        self.stack.pop();
                    }
                    PredicateResult::Choices(n) => {
                        if let Some(entry) = self.stack.last_mut() {
                            entry.in_choice_mode = true;
                            entry.current_choice = 0;
                            entry.num_choices = n;
                            entry.trail_checkpoint = ctx.trail.checkpoint();
                        }
                    }
                    PredicateResult::Suspend => {
                        return SearchOutcome::Suspended(self);
                    }
                }
            } else {
                // Choice mode: retry_pred
                if entry.current_choice >= entry.num_choices {
                    self.stack.pop();
                    continue;
                }

                let pred_idx = entry.predicate_index;
                let round = entry.round;
                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result = self.predicates[pred_idx].retry_pred(ctx, round, choice);

                match result {
                    PredicateResult::Success => self.push_next_predicate(ctx),
                    PredicateResult::SuccessSamePredicate => self.push_same_predicate(ctx),
                    PredicateResult::Failure => {
                        // Try next choice (loop continues)
                    }
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        panic!(
                            "{}::retry_pred returned invalid result: {:?}",
                            self.predicates[pred_idx].name(),
                            result
                        );
                    }
                }
            }
        }
    }

    /// A deterministic success has no alternatives: when the search
    /// backtracks into this entry it must pop it, not call try_pred again.
    fn mark_done(&mut self) {
        if let Some(entry) = self.stack.last_mut() {
            entry.in_choice_mode = true;
            entry.current_choice = 0;
            entry.num_choices = 0;
        }
    }

    /// Push a new stack entry for the next predicate in sequence.
    ///
    /// Panics if we've reached the end of the predicate sequence, as this indicates
    /// an invalid program (all valid programs must end with FAIL or SUSPEND).
    fn push_next_predicate(&mut self, ctx: &SearchContext) {
        let next_index = self.stack.last().map_or(0, |e| e.predicate_index + 1);

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All WAM programs must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.stack.push(StackEntry::new(next_index, 0, ctx.trail.checkpoint()));
    }

    /// Push a new stack entry for the same predicate with incremented round.
    fn push_same_predicate(&mut self, ctx: &SearchContext) {
        let (pred_index, next_round) = self
            .stack
            .last()
            .map_or((0, 0), |e| (e.predicate_index, e.round + 1));

        self.stack
            .push(StackEntry::new(pred_index, next_round, ctx.trail.checkpoint()));
    }

    /// Get statistics about the search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builder that assembles a predicate sequence ending in a terminal predicate.
///
/// # Example
///
/// ```
/// use complement_search::engine::EngineBuilder;
/// use complement_search::predicates::{ExtendGroupPredicate, SuspendPredicate};
///
/// let engine = EngineBuilder::new()
///     .add(Box::new(ExtendGroupPredicate))
///     .terminal(Box::new(SuspendPredicate))
///     .with_step_budget(Some(1_000))
///     .build();
/// assert_eq!(engine.statistics(), (0, 0));
/// ```
#[derive(Debug, Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
    step_budget: Option<u64>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the sequence.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Append the terminal predicate and close the sequence.
    pub fn terminal<T>(mut self, predicate: Box<T>) -> TerminatedBuilder
    where
        T: TerminalPredicate + 'static,
    {
        self.predicates.push(predicate);
        TerminatedBuilder { inner: self }
    }
}

/// An [`EngineBuilder`] whose sequence already ends in a terminal predicate.
#[derive(Debug)]
pub struct TerminatedBuilder {
    inner: EngineBuilder,
}

impl TerminatedBuilder {
    /// Limit the number of predicate calls. `None` means unlimited.
    pub fn with_step_budget(mut self, budget: Option<u64>) -> Self {
        self.inner.step_budget = budget;
        self
    }

    pub fn build(self) -> SearchEngine {
        let mut engine = SearchEngine::new(self.inner.predicates);
        engine.step_budget = self.inner.step_budget;
        engine
    }
}
