//! Auto-assign simulation.
//!
//! # Algorithm
//!
//! 1. Copy the caller's tables into a private snapshot
//! 2. Build criterion groups from the unseated guests, largest first
//! 3. For each guest of each group:
//!    a. Rank the snapshot's tables (affinity, then vacancy)
//!    b. Take the first ranked table with an empty, allowed,
//!       conflict-free seat
//!    c. On success, occupy the seat in the snapshot and record it;
//!       otherwise record a skip (`no_space` if the snapshot is full,
//!       `conflict` otherwise)
//! 4. Return the assignments and skips; the caller's tables are untouched

use std::collections::HashSet;

use tracing::{debug, info, info_span, warn};

use super::config::AssignConfig;
use super::types::{AssignResult, Assignment, SkipReason, SkippedGuest};
use crate::error::{Result, SeatingError};
use crate::grouping::{build_groups, GroupMode};
use crate::model::{Guest, GuestIndex, Table};
use crate::placement::SeatFinder;
use crate::ranking::{RankContext, TableRanker};

/// Runs the greedy seating simulation.
///
/// # Usage
///
/// ```
/// use u_seating::assign::{AssignConfig, AutoAssigner};
/// use u_seating::grouping::GroupMode;
/// use u_seating::model::{Guest, Table};
///
/// let tables = vec![Table::new("t1", "Table 1", 4)];
/// let guests = vec![
///     Guest::new("g1", "Ann", "Family"),
///     Guest::new("g2", "Ben", "Family"),
/// ];
/// let config = AssignConfig::new(GroupMode::Category).with_criterion("Family");
///
/// let result = AutoAssigner::new().run(&tables, &guests, &config).unwrap();
/// assert_eq!(result.assignments.len(), 2);
/// assert!(result.is_complete());
/// ```
#[derive(Debug, Default)]
pub struct AutoAssigner {
    ranker: TableRanker,
}

impl AutoAssigner {
    /// Creates an assigner with the standard affinity ranking.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the table ranking rules.
    pub fn with_ranker(mut self, ranker: TableRanker) -> Self {
        self.ranker = ranker;
        self
    }

    /// Proposes seats for the unseated guests matching the selection.
    ///
    /// Neither `tables` nor `guests` is modified.
    ///
    /// # Errors
    ///
    /// - [`SeatingError::EmptySelection`] if no criterion value is selected.
    /// - [`SeatingError::InvalidInput`] on duplicate table ids, duplicate
    ///   guest ids, duplicate seat indices within a table, or a seat held
    ///   by a guest whose `assigned_seat_id` is empty.
    ///
    /// A guest that cannot be placed is never an error; it is reported in
    /// [`AssignResult::skipped`].
    pub fn run(&self, tables: &[Table], guests: &[Guest], config: &AssignConfig) -> Result<AssignResult> {
        config.validate()?;
        validate_input(tables, guests)?;

        let span = info_span!(
            "auto_assign",
            mode = %config.mode,
            strict = config.strict_mode,
            tables = tables.len(),
            guests = guests.len(),
        );
        let _guard = span.enter();

        let index = GuestIndex::new(guests);
        warn_unknown_occupants(tables, &index);

        let groups = build_groups(
            guests.iter().filter(|g| !g.is_seated()),
            config.mode,
            &config.selected_criteria,
        );
        debug!(groups = groups.len(), "built criterion groups");

        let mut snapshot: Vec<Table> = tables.to_vec();
        let mut placed: Vec<Vec<&Guest>> = vec![Vec::new(); snapshot.len()];
        let finder = SeatFinder::new(&index, config.mode, config.strict_mode);
        let mut result = AssignResult::default();

        for group in &groups {
            let ctx = RankContext::new(config.mode, &group.key, &index, tables, config.affinity_source);

            for &guest in &group.guests {
                // Re-ranked per guest: vacancy (and live affinity) shift as
                // the snapshot fills.
                let ranked = self.ranker.rank(&snapshot, &ctx);
                match finder.find_seat(guest, &group.key, &ranked, &snapshot, &placed) {
                    Some(hit) => {
                        let table = &mut snapshot[hit.table_index];
                        if let Some(seat) = table.seat_mut(hit.seat_index) {
                            seat.guest_id = Some(guest.id.clone());
                        }
                        placed[hit.table_index].push(guest);
                        debug!(
                            guest = %guest.id,
                            table = %table.id,
                            seat = hit.seat_index,
                            criterion = %group.key,
                            "placed guest"
                        );
                        result.assignments.push(Assignment {
                            guest_id: guest.id.clone(),
                            table_id: table.id.clone(),
                            seat_index: hit.seat_index,
                            criterion: group.key.clone(),
                        });
                    }
                    None => {
                        let reason = if snapshot.iter().any(Table::has_vacancy) {
                            SkipReason::Conflict
                        } else {
                            SkipReason::NoSpace
                        };
                        debug!(guest = %guest.id, %reason, criterion = %group.key, "skipped guest");
                        result.skipped.push(SkippedGuest {
                            guest_id: guest.id.clone(),
                            reason,
                            criterion: group.key.clone(),
                        });
                    }
                }
            }
        }

        let summary = result.summary();
        info!(
            assigned = summary.assigned,
            skipped = summary.skipped,
            tables_used = summary.tables_used,
            "auto-assign finished"
        );
        Ok(result)
    }
}

/// Runs one auto-assign simulation with the default ranking.
///
/// Shorthand for building an [`AssignConfig`] and calling
/// [`AutoAssigner::run`].
pub fn run_auto_assign(
    tables: &[Table],
    guests: &[Guest],
    mode: GroupMode,
    selected_criteria: &[String],
    strict_mode: bool,
) -> Result<AssignResult> {
    let config = AssignConfig::new(mode)
        .with_criteria(selected_criteria.iter().cloned())
        .with_strict_mode(strict_mode);
    AutoAssigner::new().run(tables, guests, &config)
}

fn validate_input(tables: &[Table], guests: &[Guest]) -> Result<()> {
    let mut table_ids = HashSet::with_capacity(tables.len());
    for table in tables {
        if !table_ids.insert(table.id.as_str()) {
            return Err(SeatingError::InvalidInput(format!(
                "duplicate table id '{}'",
                table.id
            )));
        }
        let mut seat_indices = HashSet::with_capacity(table.seats.len());
        for seat in &table.seats {
            if !seat_indices.insert(seat.index) {
                return Err(SeatingError::InvalidInput(format!(
                    "table '{}' has seat index {} twice",
                    table.id, seat.index
                )));
            }
        }
    }

    let mut guest_ids = HashSet::with_capacity(guests.len());
    for guest in guests {
        if !guest_ids.insert(guest.id.as_str()) {
            return Err(SeatingError::InvalidInput(format!(
                "duplicate guest id '{}'",
                guest.id
            )));
        }
    }

    // Every known occupant must carry a seat reference.
    let index = GuestIndex::new(guests);
    for table in tables {
        for seat in &table.seats {
            let Some(id) = seat.guest_id.as_deref() else {
                continue;
            };
            if index.get(id).is_some_and(|g| !g.is_seated()) {
                return Err(SeatingError::InvalidInput(format!(
                    "guest '{id}' occupies {}-{} but has no seat reference",
                    table.id, seat.index
                )));
            }
        }
    }
    Ok(())
}

fn warn_unknown_occupants(tables: &[Table], index: &GuestIndex<'_>) {
    for table in tables {
        for id in table.occupant_ids().filter(|id| index.get(id).is_none()) {
            warn!(table = %table.id, guest = %id, "seat references unknown guest, ignoring");
        }
    }
}
