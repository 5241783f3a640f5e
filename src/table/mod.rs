// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reader for the textual row-table format.
//!
//! A table is written one row per line, each row a JSON array of strings and
//! nulls. The reader is lenient about everything around the arrays:
//!
//! ```text
//! {
//!     [ "a1",   null,   null   ],     <- first row
//!     [ null,   "b2",   "b3"   ]
//! }
//! ```
//!
//! - `{` and `}` are removed wherever they appear
//! - blank lines are skipped
//! - on each line, only the array starting at the first `[` is read
//!
//! # Example
//!
//! ```
//! use complement_search::table::parse_rows;
//!
//! let rows = parse_rows("{ [\"a1\", null],\n  [null, \"b2\"] <- note\n}").unwrap();
//! assert_eq!(rows.len(), 2);
//! assert_eq!(rows[0].get(0), Some("a1"));
//! assert_eq!(rows[1].get(0), None);
//! ```

use crate::rows::{Cell, Row};
use serde_json::Value;
use std::fmt;

/// The two built-in demo tables.
pub const DEMO_TABLES: [&str; 2] = [
    r#"[ "a1",   "a2",   "a3",   "a4"   ],     <- first row
  [ "b1",   null,   null,   "b4"   ],
  [ null,   "c2",   "c3",   null   ],     <- third row
  [ "d1",   null,   null,   "d4"   ],
  [ null,   "e2",   "e3",   null   ],     <- fifth row
  [ null,   "f2",   "f3",   "f4"   ],
  [ "h1",   null ,  null,   null   ],     <- seventh row
  [ "g1",   null ,  null,   null   ]"#,
    r#"{ [ "a1",   null,   null,   null   ],
  [ null,   "b2",   null,   "b4"   ],
  [ null,   null,   "c3",   null   ]
}"#,
];

/// Errors reading a textual table.
#[derive(Debug)]
pub enum TableError {
    /// A non-blank line without a `[...]` array.
    MissingArray { line: usize },

    /// The bracketed text is not a JSON array.
    Json { line: usize, source: serde_json::Error },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::MissingArray { line } => {
                write!(f, "Line {}: expected a [...] row", line)
            }
            TableError::Json { line, source } => {
                write!(f, "Line {}: malformed row: {}", line, source)
            }
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableError::MissingArray { .. } => None,
            TableError::Json { source, .. } => Some(source),
        }
    }
}

/// Parse a whole table, preserving row order.
///
/// Line numbers in errors are 1-based and count blank lines too.
pub fn parse_rows(text: &str) -> Result<Vec<Row>, TableError> {
    let stripped: String = text.chars().filter(|&c| c != '{' && c != '}').collect();

    stripped
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_row(line, index + 1))
        .collect()
}

/// Parse one line holding one row.
///
/// Reading starts at the first `[` and stops at the end of that array, so
/// anything after it (a trailing comma, a comment, even one with brackets)
/// is ignored.
pub fn parse_row(line: &str, line_number: usize) -> Result<Row, TableError> {
    let start = line
        .find('[')
        .ok_or(TableError::MissingArray { line: line_number })?;
    let values = serde_json::Deserializer::from_str(&line[start..])
        .into_iter::<Vec<Value>>()
        .next()
        .ok_or(TableError::MissingArray { line: line_number })?
        .map_err(|source| TableError::Json {
            line: line_number,
            source,
        })?;
    Ok(Row::new(values.into_iter().map(cell).collect()))
}

fn cell(value: Value) -> Cell {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}
