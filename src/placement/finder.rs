//! First-fit seat search over ranked tables.

use crate::conflict::ConflictChecker;
use crate::grouping::GroupMode;
use crate::model::{Guest, GuestIndex, Table};

/// A proposed seat: the table's position in the snapshot slice and the
/// seat's `index` within that table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub table_index: usize,
    pub seat_index: usize,
}

/// Whether strict mode forbids seating a `key` guest at `table`.
///
/// True if any current occupant differs on the criterion: another
/// category, or (tag mode) lacking the tag.
pub fn violates_strict(table: &Table, guests: &GuestIndex<'_>, mode: GroupMode, key: &str) -> bool {
    table
        .occupant_ids()
        .filter_map(|id| guests.get(id))
        .any(|occupant| !occupant.matches(mode, key))
}

/// Picks the first eligible empty seat for one guest.
#[derive(Debug, Clone)]
pub struct SeatFinder<'a> {
    guests: &'a GuestIndex<'a>,
    checker: ConflictChecker<'a>,
    mode: GroupMode,
    strict: bool,
}

impl<'a> SeatFinder<'a> {
    /// Creates a finder; `strict` forbids mixing criterion values at a table.
    pub fn new(guests: &'a GuestIndex<'a>, mode: GroupMode, strict: bool) -> Self {
        Self {
            guests,
            checker: ConflictChecker::new(guests),
            mode,
            strict,
        }
    }

    /// Walks `ranked` (indices into `tables`) and returns the first table
    /// offering an empty, strict-compatible, conflict-free seat.
    ///
    /// `placed` is parallel to `tables` and holds the guests this run has
    /// already put at each table. Only a table's lowest empty seat is
    /// considered; if it conflicts, the whole table is passed over.
    pub fn find_seat(
        &self,
        guest: &Guest,
        key: &str,
        ranked: &[usize],
        tables: &[Table],
        placed: &[Vec<&Guest>],
    ) -> Option<Placement> {
        ranked.iter().copied().find_map(|table_index| {
            let table = &tables[table_index];
            if self.strict && violates_strict(table, self.guests, self.mode, key) {
                return None;
            }
            let seat_index = table.first_empty_seat()?;
            let run_placed = placed.get(table_index).map_or(&[][..], Vec::as_slice);
            if self.checker.has_conflict(guest, table, run_placed) {
                return None;
            }
            Some(Placement {
                table_index,
                seat_index,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Guest> {
        vec![
            Guest::new("a", "Ann", "Family").with_avoid("Bea"),
            Guest::new("b", "Bea", "Family"),
            Guest::new("c", "Cid", "Colleague"),
            Guest::new("d", "Dot", "Family"),
        ]
    }

    #[test]
    fn test_first_fit_in_ranked_order() {
        let guests = roster();
        let index = GuestIndex::new(&guests);
        let finder = SeatFinder::new(&index, GroupMode::Category, false);
        let tables = vec![Table::new("t1", "One", 2), Table::new("t2", "Two", 2)];
        let placed = vec![Vec::new(), Vec::new()];

        let hit = finder.find_seat(&guests[3], "Family", &[1, 0], &tables, &placed);
        assert_eq!(
            hit,
            Some(Placement {
                table_index: 1,
                seat_index: 0
            })
        );
    }

    #[test]
    fn test_skips_full_tables() {
        let guests = roster();
        let index = GuestIndex::new(&guests);
        let finder = SeatFinder::new(&index, GroupMode::Category, false);
        let tables = vec![
            Table::new("t1", "One", 1).with_occupant(0, "c"),
            Table::new("t2", "Two", 3).with_occupant(0, "c"),
        ];
        let placed = vec![Vec::new(), Vec::new()];

        let hit = finder.find_seat(&guests[3], "Family", &[0, 1], &tables, &placed);
        assert_eq!(
            hit,
            Some(Placement {
                table_index: 1,
                seat_index: 1
            })
        );
    }

    #[test]
    fn test_conflict_moves_to_next_table() {
        let guests = roster();
        let index = GuestIndex::new(&guests);
        let finder = SeatFinder::new(&index, GroupMode::Category, false);
        let tables = vec![
            Table::new("t1", "One", 4).with_occupant(0, "b"),
            Table::new("t2", "Two", 4),
        ];
        let placed = vec![Vec::new(), Vec::new()];

        let hit = finder.find_seat(&guests[0], "Family", &[0, 1], &tables, &placed);
        assert_eq!(hit.map(|p| p.table_index), Some(1));
    }

    #[test]
    fn test_run_placements_count_as_occupants() {
        let guests = roster();
        let index = GuestIndex::new(&guests);
        let finder = SeatFinder::new(&index, GroupMode::Category, false);
        let tables = vec![Table::new("t1", "One", 4)];
        let placed = vec![vec![&guests[1]]];

        assert_eq!(finder.find_seat(&guests[0], "Family", &[0], &tables, &placed), None);
    }

    #[test]
    fn test_strict_mode_skips_mixed_tables() {
        let guests = roster();
        let index = GuestIndex::new(&guests);
        let tables = vec![
            Table::new("t1", "One", 4).with_occupant(0, "c"),
            Table::new("t2", "Two", 4),
        ];
        let placed = vec![Vec::new(), Vec::new()];

        let lenient = SeatFinder::new(&index, GroupMode::Category, false);
        let hit = lenient.find_seat(&guests[3], "Family", &[0, 1], &tables, &placed);
        assert_eq!(hit.map(|p| p.table_index), Some(0));

        let strict = SeatFinder::new(&index, GroupMode::Category, true);
        let hit = strict.find_seat(&guests[3], "Family", &[0, 1], &tables, &placed);
        assert_eq!(hit.map(|p| p.table_index), Some(1));

        let only_mixed = strict.find_seat(&guests[3], "Family", &[0], &tables, &placed);
        assert_eq!(only_mixed, None);
    }

    #[test]
    fn test_strict_tag_mode_requires_tag() {
        let guests = vec![
            Guest::new("v1", "Vic", "Family").with_tags(["VIP", "Kid"]),
            Guest::new("v2", "Val", "Friend").with_tags(["VIP"]),
        ];
        let index = GuestIndex::new(&guests);
        let table = Table::new("t1", "One", 4).with_occupant(0, "v1");
        assert!(!violates_strict(&table, &index, GroupMode::Tag, "VIP"));
        assert!(violates_strict(&table, &index, GroupMode::Tag, "Vegan"));
        assert!(violates_strict(&table, &index, GroupMode::Category, "Friend"));
    }
}
