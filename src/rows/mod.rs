// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Row model: input rows, their occupancy masks, and table validation.
//!
//! - Row: an ordered sequence of cells, each present (`Some`) or absent (`None`)
//! - OccupancyMask: bitset of the columns a row occupies
//! - RowTable: a validated list of rows together with their masks
//!
//! # Examples
//!
//! ```
//! use complement_search::rows::{Row, RowTable};
//!
//! let table = RowTable::new(vec![
//!     Row::from(vec![Some("b1"), None]),
//!     Row::from(vec![None, Some("c2")]),
//! ])
//! .unwrap();
//!
//! assert_eq!(table.column_count(), 2);
//! assert_eq!(format!("{}", table.mask(0)), "10");
//! assert_eq!(format!("{}", table.mask(1)), "01");
//! assert!(table.mask(0).is_disjoint(table.mask(1)));
//! ```

pub mod errors;
pub mod mask;

pub use errors::RowError;
pub use mask::OccupancyMask;

/// One cell of a row: `None` when the cell is absent (null).
pub type Cell = Option<String>;

/// One input row.
///
/// Rows are identified by their 0-based position in the input list and are
/// never modified once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row(Vec<Cell>);

impl Row {
    /// Create a row from its cells.
    pub fn new(cells: Vec<Cell>) -> Self {
        Self(cells)
    }

    /// Number of cells, present or not.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    /// Value of the cell at `column`, if present.
    pub fn get(&self, column: usize) -> Option<&str> {
        self.0.get(column).and_then(|cell| cell.as_deref())
    }

    /// Compute this row's occupancy mask: bit i set iff cell i is present.
    pub fn occupancy(&self) -> OccupancyMask {
        let mut mask = OccupancyMask::empty(self.len());
        for (column, cell) in self.0.iter().enumerate() {
            if cell.is_some() {
                mask.insert(column);
            }
        }
        mask
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.0
    }
}

impl<S: Into<String>> From<Vec<Option<S>>> for Row {
    fn from(cells: Vec<Option<S>>) -> Self {
        Self(cells.into_iter().map(|cell| cell.map(Into::into)).collect())
    }
}

/// Check that all rows have the same, non-zero length.
///
/// Returns the common length (the column count).
///
/// # Errors
///
/// - `RowError::EmptyInput` if there are no rows or the rows have no cells.
/// - `RowError::InconsistentColumnCount` for the first row whose length
///   differs from the first row's length.
pub fn validate_column_count(rows: &[Row]) -> Result<usize, RowError> {
    let Some(first) = rows.first() else {
        return Err(RowError::EmptyInput);
    };
    let expected = first.len();

    if let Some((row, found)) = rows
        .iter()
        .map(Row::len)
        .enumerate()
        .find(|&(_, len)| len != expected)
    {
        return Err(RowError::InconsistentColumnCount {
            row,
            expected,
            found,
        });
    }

    if expected == 0 {
        return Err(RowError::EmptyInput);
    }
    Ok(expected)
}

/// Immutable per-run data: the rows, their masks and the reference mask.
///
/// This is computed once before the search and never changes during it.
#[derive(Debug, Clone)]
pub struct RowTable {
    rows: Vec<Row>,
    masks: Vec<OccupancyMask>,
    reference: OccupancyMask,
    column_count: usize,
}

impl RowTable {
    /// Validate the rows and precompute every mask.
    pub fn new(rows: Vec<Row>) -> Result<Self, RowError> {
        let column_count = validate_column_count(&rows)?;
        let masks = rows.iter().map(Row::occupancy).collect();
        let reference = OccupancyMask::full(column_count);

        log::debug!(
            "Row table ready: {} rows, {} columns",
            rows.len(),
            column_count
        );

        Ok(Self {
            rows,
            masks,
            reference,
            column_count,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false: validation rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> &Row {
        &self.rows[index]
    }

    /// Occupancy mask of the row at `index`.
    pub fn mask(&self, index: usize) -> &OccupancyMask {
        &self.masks[index]
    }

    /// Mask with every column set.
    pub fn reference_mask(&self) -> &OccupancyMask {
        &self.reference
    }

    /// Merge a group of rows into one.
    ///
    /// Column c takes the value of the first listed row that has a present
    /// cell at c. For a disjoint group there is at most one such row; a
    /// column no row covers stays absent.
    pub fn merge(&self, group: &[usize]) -> Row {
        let cells = (0..self.column_count)
            .map(|column| {
                group
                    .iter()
                    .find_map(|&index| self.rows[index].get(column))
                    .map(str::to_owned)
            })
            .collect();
        Row(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[Option<&str>]) -> Row {
        Row::from(cells.to_vec())
    }

    #[test]
    fn test_occupancy() {
        let r = row(&[None, Some("e2"), Some("e3"), None]);
        assert_eq!(format!("{}", r.occupancy()), "0110");
        assert_eq!(r.occupancy().len(), 2);
    }

    #[test]
    fn test_occupancy_all_absent() {
        let r = row(&[None, None]);
        assert!(r.occupancy().is_empty());
        assert_eq!(r.occupancy().width(), 2);
    }

    #[test]
    fn test_validate_returns_common_length() {
        let rows = vec![row(&[Some("a"), None]), row(&[None, Some("b")])];
        assert_eq!(validate_column_count(&rows), Ok(2));
    }

    #[test]
    fn test_validate_no_rows() {
        assert_eq!(validate_column_count(&[]), Err(RowError::EmptyInput));
    }

    #[test]
    fn test_validate_zero_width_rows() {
        let rows = vec![Row::default(), Row::default()];
        assert_eq!(validate_column_count(&rows), Err(RowError::EmptyInput));
    }

    #[test]
    fn test_validate_inconsistent() {
        let rows = vec![
            row(&[Some("a"), None, None]),
            row(&[None, Some("b"), None]),
            row(&[None, Some("c")]),
            row(&[None]),
        ];
        assert_eq!(
            validate_column_count(&rows),
            Err(RowError::InconsistentColumnCount {
                row: 2,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_validate_empty_first_row_is_inconsistent() {
        let rows = vec![Row::default(), row(&[Some("a")])];
        assert_eq!(
            validate_column_count(&rows),
            Err(RowError::InconsistentColumnCount {
                row: 1,
                expected: 0,
                found: 1
            })
        );
    }

    #[test]
    fn test_table_masks() {
        let table = RowTable::new(vec![
            row(&[Some("a1"), Some("a2")]),
            row(&[Some("b1"), None]),
            row(&[None, Some("c2")]),
        ])
        .unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.mask(0), table.reference_mask());
        assert_eq!(format!("{}", table.mask(1)), "10");
        assert_eq!(format!("{}", table.mask(2)), "01");
    }

    #[test]
    fn test_merge() {
        let table = RowTable::new(vec![
            row(&[Some("b1"), None, None, Some("b4")]),
            row(&[None, Some("c2"), Some("c3"), None]),
        ])
        .unwrap();

        let merged = table.merge(&[0, 1]);
        assert_eq!(merged, row(&[Some("b1"), Some("c2"), Some("c3"), Some("b4")]));
    }

    #[test]
    fn test_merge_leaves_uncovered_columns_absent() {
        let table = RowTable::new(vec![row(&[Some("a"), None]), row(&[None, None])]).unwrap();
        assert_eq!(table.merge(&[0, 1]), row(&[Some("a"), None]));
    }
}
