// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use complement_search::rows::Row;
use rand::rngs::StdRng;
use rand::Rng;
use std::collections::BTreeSet;

/// Build a row from string cells, `None` for absent.
pub fn row(cells: &[Option<&str>]) -> Row {
    Row::from(cells.to_vec())
}

/// Every non-empty subset of rows that is pairwise disjoint and covers all
/// columns, found by checking all 2^n subsets directly.
pub fn brute_force_covers(rows: &[Row]) -> BTreeSet<Vec<usize>> {
    let n = rows.len();
    let width = rows[0].len();
    assert!(n < 20, "brute force only for small inputs");

    let mut covers = BTreeSet::new();
    for subset in 1u32..(1 << n) {
        let members: Vec<usize> = (0..n).filter(|i| subset & (1 << i) != 0).collect();
        let mut counts = vec![0usize; width];
        for &m in &members {
            for (column, cell) in rows[m].cells().iter().enumerate() {
                if cell.is_some() {
                    counts[column] += 1;
                }
            }
        }
        if counts.iter().all(|&c| c == 1) {
            covers.insert(members);
        }
    }
    covers
}

/// A random table where each cell is present with probability `density`.
pub fn random_rows(rng: &mut StdRng, n: usize, width: usize, density: f64) -> Vec<Row> {
    (0..n)
        .map(|r| {
            Row::new(
                (0..width)
                    .map(|c| rng.gen_bool(density).then(|| format!("r{}c{}", r, c)))
                    .collect(),
            )
        })
        .collect()
}
