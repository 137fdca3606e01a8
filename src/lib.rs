//! Constraint-aware auto-seating engine.
//!
//! Assigns event guests to numbered table seats, clustering guests that
//! share a category or tag while never seating two mutually-exclusive
//! guests at the same table:
//!
//! - **Grouping**: partitions unseated guests by category or tag,
//!   largest group first.
//! - **Conflict**: symmetric `Avoid:<name>` exclusion checks, per seat
//!   and across a whole layout.
//! - **Ranking**: orders tables by affinity to the group, then vacancy,
//!   via composable table rules.
//! - **Placement**: first-fit seat search with optional strict grouping.
//! - **Assign**: the simulation engine, its results, and the interactive
//!   collect → preview → apply session.
//! - **Plan**: the seating store that commits results and manual edits
//!   while keeping seats and guests consistent.
//!
//! # Architecture
//!
//! The engine is a pure function of a `(tables, guests, config)` snapshot.
//! It proposes assignments and never mutates its inputs; only
//! [`plan::SeatingPlan`] writes bindings. It is a greedy heuristic with no
//! backtracking, so it can leave guests unplaced when a full seating
//! exists.
//!
//! # Example
//!
//! ```
//! use u_seating::assign::{AssignConfig, AutoAssigner, SkipReason};
//! use u_seating::grouping::GroupMode;
//! use u_seating::model::{Guest, Table};
//! use u_seating::plan::SeatingPlan;
//!
//! let mut plan = SeatingPlan::new(
//!     vec![Table::new("t1", "Table 1", 2)],
//!     vec![
//!         Guest::new("a", "Alice", "Family").with_avoid("Bob"),
//!         Guest::new("b", "Bob", "Family"),
//!     ],
//! );
//!
//! let config = AssignConfig::new(GroupMode::Category).with_criterion("Family");
//! let result = AutoAssigner::new().run(&plan.tables, &plan.guests, &config).unwrap();
//! assert_eq!(result.assignments.len(), 1);
//! assert_eq!(result.skipped[0].reason, SkipReason::Conflict);
//!
//! plan.apply_assignments(&result.assignments).unwrap();
//! assert!(plan.check_integrity().is_empty());
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the model, configuration and
//!   results, using the camelCase `{ tables, guests }` project layout.
//! - `wasm`: `wasm-bindgen` exports for browser front ends.

pub mod assign;
pub mod conflict;
pub mod error;
pub mod grouping;
pub mod model;
pub mod placement;
pub mod plan;
pub mod ranking;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Result, SeatingError};
