// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for row table validation.

use std::fmt;

/// Structural defects in the input rows.
///
/// Both are raised before any mask is computed, so a failed validation never
/// produces partial results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    /// No rows at all, or rows with no cells.
    EmptyInput,

    /// A row whose length differs from the first row's.
    InconsistentColumnCount {
        /// 0-based index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowError::EmptyInput => write!(f, "No cells in input"),
            RowError::InconsistentColumnCount {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Row {} has {} cells, but previous rows have {}",
                    row, found, expected
                )
            }
        }
    }
}

impl std::error::Error for RowError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(RowError::EmptyInput.to_string(), "No cells in input");
        let err = RowError::InconsistentColumnCount {
            row: 2,
            expected: 4,
            found: 3,
        };
        assert_eq!(err.to_string(), "Row 2 has 3 cells, but previous rows have 4");
    }
}
