//! Whole-layout scan for excluded pairs already sharing a table.

use super::checker::excludes;
use crate::model::{GuestIndex, Table};

/// Two guests seated at the same table although one avoids the other.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SeatConflict {
    pub table_id: String,
    /// The guest in the lower seat position of the pair.
    pub guest_a: String,
    pub seat_a: usize,
    pub guest_b: String,
    pub seat_b: usize,
}

/// Lists every excluded pair seated together, table by table in seat
/// order. Seats naming unknown guests are skipped.
pub fn find_seat_conflicts(tables: &[Table], guests: &GuestIndex<'_>) -> Vec<SeatConflict> {
    let mut conflicts = Vec::new();
    for table in tables {
        let seated: Vec<_> = table
            .seats
            .iter()
            .filter_map(|seat| {
                let guest = guests.get(seat.guest_id.as_deref()?)?;
                Some((seat.index, guest))
            })
            .collect();

        for (i, &(seat_a, a)) in seated.iter().enumerate() {
            for &(seat_b, b) in &seated[i + 1..] {
                if a.id != b.id && excludes(a, b) {
                    conflicts.push(SeatConflict {
                        table_id: table.id.clone(),
                        guest_a: a.id.clone(),
                        seat_a,
                        guest_b: b.id.clone(),
                        seat_b,
                    });
                }
            }
        }
    }
    conflicts
}
