//! Seating plan store.
//!
//! [`SeatingPlan`] owns an event's tables and guests and is the only place
//! bindings are written: auto-assign results via
//! [`SeatingPlan::apply_assignments`], and manual edits (drag-and-drop
//! moves, removals, table resizing) via the other mutators.

mod integrity;
mod store;

pub use integrity::IntegrityViolation;
pub use store::SeatingPlan;
