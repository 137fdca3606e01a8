//! Ranking context and the table rule trait.

use std::collections::HashMap;

use crate::grouping::GroupMode;
use crate::model::{GuestIndex, Table};

/// Where the affinity signal is read from.
///
/// Vacancy always comes from the run's simulated tables; only the
/// "does this table already host a matching guest" check is affected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AffinitySource {
    /// Guests seated before the run started. Placements made during the
    /// run do not create affinity until the result is applied.
    Original,
    /// The run's simulated tables, including its own placements, so a
    /// group gathers at the table its first member was given.
    #[default]
    Simulated,
}

/// Everything a [`TableRule`] may consult while scoring a table.
#[derive(Debug, Clone)]
pub struct RankContext<'a> {
    pub mode: GroupMode,
    /// Criterion value of the group being placed.
    pub key: &'a str,
    pub guests: &'a GuestIndex<'a>,
    pub source: AffinitySource,
    original: HashMap<&'a str, &'a Table>,
}

impl<'a> RankContext<'a> {
    /// `original` are the caller's tables as they were before the run.
    pub fn new(
        mode: GroupMode,
        key: &'a str,
        guests: &'a GuestIndex<'a>,
        original: &'a [Table],
        source: AffinitySource,
    ) -> Self {
        let original = original.iter().map(|t| (t.id.as_str(), t)).collect();
        Self {
            mode,
            key,
            guests,
            source,
            original,
        }
    }

    /// The version of `table` that affinity is judged on.
    ///
    /// `None` when reading originals and the table did not exist before
    /// the run.
    pub fn affinity_view<'t>(&self, table: &'t Table) -> Option<&'t Table>
    where
        'a: 't,
    {
        match self.source {
            AffinitySource::Simulated => Some(table),
            AffinitySource::Original => self.original.get(table.id.as_str()).copied(),
        }
    }

    /// Whether `table` hosts at least one guest matching the key.
    pub fn has_affinity(&self, table: &Table) -> bool {
        self.affinity_view(table).is_some_and(|view| {
            view.occupant_ids()
                .filter_map(|id| self.guests.get(id))
                .any(|g| g.matches(self.mode, self.key))
        })
    }
}

/// A scoring rule for ordering candidate tables.
///
/// Lower scores rank earlier.
///
/// # Examples
///
/// ```
/// use u_seating::model::Table;
/// use u_seating::ranking::{RankContext, TableRule};
///
/// // Prefer smaller tables.
/// struct Cozy;
///
/// impl TableRule for Cozy {
///     fn name(&self) -> &str { "Cozy" }
///     fn score(&self, table: &Table, _ctx: &RankContext<'_>) -> f64 {
///         table.capacity() as f64
///     }
/// }
/// ```
pub trait TableRule: Send + Sync {
    fn name(&self) -> &str;

    fn score(&self, table: &Table, ctx: &RankContext<'_>) -> f64;
}
