// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cover search over a table of sparse rows.
//!
//! A cover is a group of rows whose present cells never share a column and
//! together fill every column. [`ComplementFinder`] validates the input once
//! and then runs the predicate engine over it.
//!
//! # Example
//!
//! ```
//! use complement_search::cover::ComplementFinder;
//! use complement_search::rows::Row;
//!
//! let finder = ComplementFinder::new(vec![
//!     Row::from(vec![Some("a1"), Some("a2")]),
//!     Row::from(vec![Some("b1"), None]),
//!     Row::from(vec![None, Some("c2")]),
//! ])
//! .unwrap();
//!
//! let report = finder.find_all();
//! let groups: Vec<&[usize]> = report.covers.iter().map(|c| c.rows.as_slice()).collect();
//! assert_eq!(groups, vec![&[0][..], &[1, 2][..]]);
//! assert_eq!(report.covers[1].merged, vec!["b1", "c2"]);
//! ```

use crate::config::SearchConfig;
use crate::context::SearchContext;
use crate::engine::{EngineBuilder, SearchOutcome, TerminalPredicate};
use crate::predicates::{
    ExtendGroupPredicate, FailPredicate, RecordCoverPredicate, SuspendPredicate,
};
use crate::rows::{Row, RowError, RowTable};
use crate::state::statistics::{Counters, Statistics};

/// One accepted group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cover {
    /// Member rows, 0-based, ascending.
    pub rows: Vec<usize>,

    /// The members merged into one row; every column has a value.
    pub merged: Vec<String>,
}

impl Cover {
    /// Build the cover for a group, or `None` if some column is left empty.
    pub fn resolve(table: &RowTable, rows: Vec<usize>) -> Option<Self> {
        let merged = table
            .merge(&rows)
            .into_cells()
            .into_iter()
            .collect::<Option<Vec<String>>>()?;
        Some(Self { rows, merged })
    }
}

/// Everything a full search produced.
#[derive(Debug, Clone)]
pub struct CoverReport {
    /// Accepted groups ordered by their row indices.
    pub covers: Vec<Cover>,

    /// False if the step budget stopped the search early.
    pub complete: bool,

    /// Counters collected during the search.
    pub statistics: Statistics,
}

impl CoverReport {
    pub fn is_empty(&self) -> bool {
        self.covers.is_empty()
    }
}

/// How [`ComplementFinder::find_first`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FirstCover {
    /// The first cover in search order.
    Found(Cover),

    /// The whole search space was explored without finding a cover.
    NoCover,

    /// The step budget ran out before any cover was found.
    StoppedEarly,
}

impl FirstCover {
    pub fn cover(&self) -> Option<&Cover> {
        match self {
            FirstCover::Found(cover) => Some(cover),
            FirstCover::NoCover | FirstCover::StoppedEarly => None,
        }
    }

    pub fn into_cover(self) -> Option<Cover> {
        match self {
            FirstCover::Found(cover) => Some(cover),
            FirstCover::NoCover | FirstCover::StoppedEarly => None,
        }
    }
}

/// Finds every group of rows that complement each other into a full row.
#[derive(Debug, Clone)]
pub struct ComplementFinder {
    table: RowTable,
    config: SearchConfig,
}

impl ComplementFinder {
    /// Validate the rows and precompute their masks.
    ///
    /// # Errors
    ///
    /// `RowError::EmptyInput` or `RowError::InconsistentColumnCount`; no
    /// search is possible on such input.
    pub fn new(rows: Vec<Row>) -> Result<Self, RowError> {
        Ok(Self::from_table(RowTable::new(rows)?))
    }

    pub fn from_table(table: RowTable) -> Self {
        Self {
            table,
            config: SearchConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn table(&self) -> &RowTable {
        &self.table
    }

    /// Enumerate all covers.
    pub fn find_all(&self) -> CoverReport {
        let mut ctx = SearchContext::new(self.table.clone());
        let outcome = self.run(&mut ctx, FailPredicate);
        let complete = !matches!(outcome, SearchOutcome::BudgetExhausted);

        let covers: Vec<Cover> = ctx
            .state
            .covers
            .iter()
            .filter_map(|group| self.resolve(group.clone()))
            .collect();

        log::debug!(
            "Search {}: {} covers, {} rows added, {} conflicts",
            if complete { "complete" } else { "stopped early" },
            covers.len(),
            ctx.statistics.get(Counters::RowsAdded),
            ctx.statistics.get(Counters::Conflicts)
        );

        CoverReport {
            covers,
            complete,
            statistics: ctx.statistics,
        }
    }

    /// Find the first cover in search order.
    ///
    /// Groups are explored depth first in ascending row order, so this is
    /// the cover whose row list is lexicographically smallest. A search cut
    /// short by the step budget is reported as `StoppedEarly`, never as
    /// `NoCover`.
    pub fn find_first(&self) -> FirstCover {
        let mut ctx = SearchContext::new(self.table.clone());
        match self.run(&mut ctx, SuspendPredicate) {
            SearchOutcome::Suspended(_) => match self.resolve(ctx.group().to_vec()) {
                Some(cover) => FirstCover::Found(cover),
                None => FirstCover::NoCover,
            },
            SearchOutcome::Exhausted => FirstCover::NoCover,
            SearchOutcome::BudgetExhausted => FirstCover::StoppedEarly,
        }
    }

    fn run<T>(&self, ctx: &mut SearchContext, terminal: T) -> SearchOutcome
    where
        T: TerminalPredicate + 'static,
    {
        log::debug!(
            "Searching {} rows x {} columns",
            self.table.len(),
            self.table.column_count()
        );
        EngineBuilder::new()
            .add(Box::new(ExtendGroupPredicate))
            .add(Statistics::counting_predicate(Counters::GroupsClosed, None))
            .add(Box::new(RecordCoverPredicate))
            .terminal(Box::new(terminal))
            .with_step_budget(self.config.step_budget)
            .build()
            .search(ctx)
    }

    fn resolve(&self, rows: Vec<usize>) -> Option<Cover> {
        let cover = Cover::resolve(&self.table, rows.clone());
        if cover.is_none() {
            log::error!("Accepted group {:?} leaves a column empty", rows);
        }
        cover
    }
}
