//! Pairwise exclusion checks.
//!
//! Exclusions come from `Avoid:<name>` relationship directives and are
//! matched by substring against display names, in both directions. Two
//! guests with similar names can therefore exclude each other by accident,
//! and renaming a guest silently drops the rule.

mod checker;
mod scan;

pub use checker::{excludes, ConflictChecker};
pub use scan::{find_seat_conflicts, SeatConflict};
