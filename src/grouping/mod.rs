//! Grouping strategy.
//!
//! Splits the unseated guest pool into criterion groups (by category or by
//! tag) and orders them largest first. Placing the biggest homogeneous
//! clusters first reduces fragmentation across tables.

mod strategy;
mod types;

pub use strategy::{available_criteria, build_groups};
pub use types::{CriterionCount, GroupMode, GuestGroup};
