// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text rendering of search results.
//!
//! Each cover is printed as its merged row, in JSON array notation, followed
//! by the 1-based numbers of the rows it was merged from:
//!
//! ```text
//! Complementary lines results:
//! ["b1","c2","c3","b4"]; <-- lines: 2 3
//! ```

use crate::cover::{Cover, CoverReport, FirstCover};

pub const HEADER: &str = "Complementary lines results:";
pub const NO_RESULTS: &str = "No results.";
pub const STOPPED_EARLY: &str =
    "(search stopped early: step budget exhausted, results may be partial)";

/// One output line for a cover.
pub fn render_cover(cover: &Cover) -> String {
    let merged = serde_json::Value::from(cover.merged.clone());
    let lines = cover
        .rows
        .iter()
        .map(|row| (row + 1).to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("{}; <-- lines: {}", merged, lines)
}

/// The full report: header, one line per cover (or a no-results line), and a
/// note if the search was cut short.
pub fn render(report: &CoverReport) -> String {
    let mut lines = vec![HEADER.to_string()];
    if report.covers.is_empty() {
        lines.push(NO_RESULTS.to_string());
    }
    lines.extend(report.covers.iter().map(render_cover));
    if !report.complete {
        lines.push(STOPPED_EARLY.to_string());
    }
    terminated(lines)
}

/// The header and the first cover. A search stopped by the budget prints the
/// stopped-early note, since a cover may still exist.
pub fn render_first(first: &FirstCover) -> String {
    let body = match first {
        FirstCover::Found(cover) => render_cover(cover),
        FirstCover::NoCover => NO_RESULTS.to_string(),
        FirstCover::StoppedEarly => STOPPED_EARLY.to_string(),
    };
    terminated(vec![HEADER.to_string(), body])
}

fn terminated(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}
