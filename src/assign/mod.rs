//! Auto-assign engine.
//!
//! The entry point the surrounding application calls. A run takes a
//! snapshot of tables and guests plus an [`AssignConfig`] and proposes
//! seats for the unseated guests matching the selected criterion values:
//!
//! - groups are seated largest first ([`crate::grouping`])
//! - each guest goes to the first ranked table ([`crate::ranking`]) with an
//!   empty, conflict-free seat ([`crate::placement`])
//! - guests that cannot be placed are reported with a [`SkipReason`]
//!
//! The run is a pure function of its inputs. Results are committed
//! separately through [`SeatingPlan::apply_assignments`](crate::plan::SeatingPlan::apply_assignments),
//! or through an [`AutoAssignSession`].
//!
//! This is a greedy heuristic. It does not backtrack and may skip guests
//! even when a complete seating exists.

mod config;
mod runner;
mod session;
mod types;

pub use config::AssignConfig;
pub use runner::{run_auto_assign, AutoAssigner};
pub use session::{AutoAssignSession, SessionState};
pub use types::{AssignResult, AssignSummary, Assignment, SkipReason, SkippedGuest};
