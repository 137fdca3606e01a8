//! Affinity table ranking.
//!
//! Candidate tables are ordered by composable [`TableRule`]s evaluated
//! sequentially, later rules breaking ties of earlier ones. The default
//! ranking used by the engine is:
//!
//! 1. [`AffinityFirst`]: tables already hosting a guest with the group's
//!    criterion value.
//! 2. [`MostVacancy`]: more empty seats first.
//!
//! Tables tied on both keep their input order.

mod engine;
mod rules;
mod types;

pub use engine::TableRanker;
pub use rules::{AffinityFirst, MostVacancy};
pub use types::{AffinitySource, RankContext, TableRule};
