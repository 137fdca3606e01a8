//! Seat finding.
//!
//! Combines the table ranking with the conflict check: the first ranked
//! table with an empty, strict-compatible, conflict-free seat wins. This is
//! first-fit, not best-fit.

mod finder;

pub use finder::{violates_strict, Placement, SeatFinder};
