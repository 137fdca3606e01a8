//! Built-in table rules.

use super::types::{RankContext, TableRule};
use crate::model::Table;

/// Tables already hosting a guest with the group's criterion value come
/// first (score 0), all others after (score 1).
#[derive(Debug, Clone, Copy, Default)]
pub struct AffinityFirst;

impl TableRule for AffinityFirst {
    fn name(&self) -> &str {
        "AffinityFirst"
    }

    fn score(&self, table: &Table, ctx: &RankContext<'_>) -> f64 {
        if ctx.has_affinity(table) {
            0.0
        } else {
            1.0
        }
    }
}

/// More empty seats rank earlier, so a group is not split across
/// near-full tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct MostVacancy;

impl TableRule for MostVacancy {
    fn name(&self) -> &str {
        "MostVacancy"
    }

    fn score(&self, table: &Table, _ctx: &RankContext<'_>) -> f64 {
        -(table.empty_seat_count() as f64)
    }
}
