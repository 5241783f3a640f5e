// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for groups of sparse rows that complement each other.
//!
//! Every row of a table is a sequence of cells that are either present or
//! absent. A *cover* is a group of rows whose present cells never fall in the
//! same column and together fill every column, i.e. an exact cover of the
//! columns by row occupancy patterns.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Computed once per run, never changed during search:
//! - The validated rows ([`rows::RowTable`])
//! - One occupancy mask per row, of arbitrary width
//! - The reference mask with every column set
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Search state tracked on the trail:
//! - Trail - records each row added to the candidate group
//! - Candidate group and its accumulated mask
//! - Accepted covers (never rewound)
//!
//! # Search Algorithm
//!
//! The search runs three predicates on a backtracking engine:
//!
//! 1. **ExtendGroupPredicate**: grow a group by one row with a higher index
//!    than every current member, skipping rows that share a column with it
//! 2. **RecordCoverPredicate**: accept the group if its mask equals the
//!    reference mask
//! 3. **FailPredicate**: backtrack, so every group is visited
//!
//! # Example
//!
//! ```
//! use complement_search::cover::ComplementFinder;
//! use complement_search::table::parse_rows;
//!
//! let rows = parse_rows(r#"
//!     [ "a1", null, null ]
//!     [ null, "b2", "b3" ]
//!     [ "c1", "c2", "c3" ]
//! "#).unwrap();
//!
//! let report = ComplementFinder::new(rows).unwrap().find_all();
//! assert_eq!(report.covers.len(), 2);
//! ```

pub mod config;
pub mod context;
pub mod cover;
pub mod engine;
pub mod logger;
pub mod predicates;
pub mod report;
pub mod rows;
pub mod state;
pub mod table;
pub mod trail;

// Re-export commonly used types
pub use context::SearchContext;
pub use cover::{ComplementFinder, Cover, CoverReport, FirstCover};
pub use engine::{EngineBuilder, Predicate, PredicateResult, SearchEngine, SearchOutcome};
pub use rows::{OccupancyMask, Row, RowError, RowTable};
pub use trail::Trail;
