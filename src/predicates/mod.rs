// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! This module contains the predicates used in the cover search.
//! Each predicate represents a choice point in the search space.
//!
//! # Organization
//!
//! - `extend`: ExtendGroupPredicate, which grows candidate groups row by row
//! - `record`: RecordCoverPredicate, the acceptance test
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`
//!
//! A full enumeration is `ExtendGroup, RecordCover, Fail`: every candidate
//! group is generated, tested, and then rejected to force the next one.

pub mod extend;
pub mod record;

pub use extend::ExtendGroupPredicate;
pub use record::RecordCoverPredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. As the last predicate
/// of a sequence it makes the engine explore every alternative.
///
/// # Example
///
/// ```
/// use complement_search::context::SearchContext;
/// use complement_search::engine::{EngineBuilder, SearchOutcome};
/// use complement_search::predicates::{ExtendGroupPredicate, FailPredicate};
/// use complement_search::rows::{Row, RowTable};
///
/// let table = RowTable::new(vec![Row::from(vec![Some("x")])]).unwrap();
/// let mut ctx = SearchContext::new(table);
/// let engine = EngineBuilder::new()
///     .add(Box::new(ExtendGroupPredicate))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// // Engine will exhaust all groups then fail
/// assert!(matches!(engine.search(&mut ctx), SearchOutcome::Exhausted));
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn retry_pred(
        &mut self,
        _ctx: &mut SearchContext,
        _round: usize,
        _choice: usize,
    ) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl TerminalPredicate for FailPredicate {}

/// Predicate that suspends execution.
///
/// As the last predicate of a sequence it stops the engine at the first
/// solution, leaving that solution in the context.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn retry_pred(
        &mut self,
        _ctx: &mut SearchContext,
        _round: usize,
        _choice: usize,
    ) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
