// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! OccupancyMask type for representing which columns of a row are present.
//!
//! An OccupancyMask is a bitset over the columns of a table, where bit i is
//! set if column i holds a value. The width is chosen per table, so there is
//! no upper bound on the number of columns other than available memory.
//!
//! # Examples
//!
//! ```
//! use complement_search::rows::OccupancyMask;
//!
//! let mut left = OccupancyMask::empty(4);
//! left.insert(0);
//! left.insert(3);
//!
//! let mut right = OccupancyMask::empty(4);
//! right.insert(1);
//! right.insert(2);
//!
//! assert!(left.is_disjoint(&right));
//! assert_eq!(format!("{}", left), "1001");
//!
//! left.toggle_all(&right);
//! assert_eq!(left, OccupancyMask::full(4));
//! ```

use fixedbitset::FixedBitSet;
use std::fmt;

/// A set of columns represented as an arbitrary-width bitset.
///
/// Bit i is set if column i is occupied. Two masks are only comparable when
/// they were built with the same width; every mask in a `RowTable` shares the
/// table's column count.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OccupancyMask(FixedBitSet);

impl OccupancyMask {
    /// Create a mask of the given width with no columns set.
    pub fn empty(width: usize) -> Self {
        Self(FixedBitSet::with_capacity(width))
    }

    /// Create the reference mask: every column in `0..width` set.
    pub fn full(width: usize) -> Self {
        let mut bits = FixedBitSet::with_capacity(width);
        bits.insert_range(..);
        Self(bits)
    }

    /// Number of columns this mask ranges over.
    pub fn width(&self) -> usize {
        self.0.len()
    }

    /// Check if the given column is set.
    ///
    /// Columns outside the mask's width are never set.
    pub fn contains(&self, column: usize) -> bool {
        self.0.contains(column)
    }

    /// Mark a column as occupied.
    ///
    /// # Panics
    ///
    /// Panics if `column >= width`.
    pub fn insert(&mut self, column: usize) {
        assert!(
            column < self.width(),
            "Column out of range: {} >= {}",
            column,
            self.width()
        );
        self.0.insert(column);
    }

    /// Number of occupied columns (population count).
    pub fn len(&self) -> usize {
        self.0.count_ones(..)
    }

    /// Check if no column is occupied.
    pub fn is_empty(&self) -> bool {
        self.0.ones().next().is_none()
    }

    /// True when the two masks share no occupied column.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.0.is_disjoint(&other.0)
    }

    /// Flip every column that is set in `other`.
    ///
    /// Adding a disjoint mask and removing a previously added one are the
    /// same operation, which is what lets the trail undo a row addition.
    pub fn toggle_all(&mut self, other: &Self) {
        self.0.symmetric_difference_with(&other.0);
    }

    /// Iterate over the occupied columns in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.ones()
    }
}

impl fmt::Display for OccupancyMask {
    /// Format a mask column by column, leftmost column first: "1001".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for column in 0..self.width() {
            let bit = if self.contains(column) { '1' } else { '0' };
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let mask = OccupancyMask::empty(5);
        assert!(mask.is_empty());
        assert_eq!(mask.len(), 0);
        assert_eq!(mask.width(), 5);
        assert_eq!(format!("{}", mask), "00000");
    }

    #[test]
    fn test_full() {
        let mask = OccupancyMask::full(3);
        assert_eq!(mask.len(), 3);
        assert!((0..3).all(|c| mask.contains(c)));
        assert!(!mask.contains(3));
    }

    #[test]
    fn test_full_is_wider_than_a_machine_word() {
        let mask = OccupancyMask::full(200);
        assert_eq!(mask.len(), 200);
        assert!(mask.contains(0));
        assert!(mask.contains(64));
        assert!(mask.contains(199));
    }

    #[test]
    fn test_insert_contains() {
        let mut mask = OccupancyMask::empty(130);
        mask.insert(0);
        mask.insert(129);
        assert!(mask.contains(0));
        assert!(mask.contains(129));
        assert!(!mask.contains(64));
        assert_eq!(mask.len(), 2);
        assert_eq!(mask.iter().collect::<Vec<_>>(), vec![0, 129]);
    }

    #[test]
    #[should_panic(expected = "Column out of range")]
    fn test_insert_out_of_range() {
        let mut mask = OccupancyMask::empty(2);
        mask.insert(2);
    }

    #[test]
    fn test_disjoint() {
        let mut a = OccupancyMask::empty(4);
        a.insert(0);
        let mut b = OccupancyMask::empty(4);
        b.insert(1);
        assert!(a.is_disjoint(&b));

        b.insert(0);
        assert!(!a.is_disjoint(&b));

        // An all-absent mask is disjoint from everything, itself included.
        let none = OccupancyMask::empty(4);
        assert!(none.is_disjoint(&OccupancyMask::full(4)));
        assert!(none.is_disjoint(&none));
    }

    #[test]
    fn test_toggle_all_is_self_inverse() {
        let mut acc = OccupancyMask::empty(70);
        let mut row = OccupancyMask::empty(70);
        row.insert(3);
        row.insert(66);

        acc.toggle_all(&row);
        assert_eq!(acc, row);

        acc.toggle_all(&row);
        assert!(acc.is_empty());
    }

    #[test]
    fn test_equality_depends_on_bits() {
        let mut a = OccupancyMask::empty(3);
        a.insert(0);
        a.insert(2);
        let mut b = OccupancyMask::empty(3);
        b.insert(2);
        b.insert(0);
        assert_eq!(a, b);
        assert_ne!(a, OccupancyMask::full(3));
    }
}
