// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state that is not part of the candidate group itself.

pub mod statistics;

pub use statistics::{Counters, Statistics};
