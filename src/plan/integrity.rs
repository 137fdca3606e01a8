//! Consistency checks between seats and guests.

use std::collections::HashMap;

use thiserror::Error;

use crate::model::{Guest, SeatRef, Table};

/// A broken seat/guest binding found by
/// [`SeatingPlan::check_integrity`](super::SeatingPlan::check_integrity).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityViolation {
    /// The guest's seat reference names a table or seat that does not exist.
    #[error("guest {guest_id} references missing seat {seat}")]
    DanglingSeatRef { guest_id: String, seat: SeatRef },

    /// The guest's seat reference points at a seat holding someone else.
    #[error("guest {guest_id} references seat {seat}, which holds {occupant:?}")]
    SeatMismatch {
        guest_id: String,
        seat: SeatRef,
        occupant: Option<String>,
    },

    /// A seat holds an id that matches no guest.
    #[error("seat {seat} holds unknown guest {guest_id}")]
    UnknownOccupant { seat: SeatRef, guest_id: String },

    /// A seat holds a guest whose own seat reference points elsewhere.
    #[error("seat {seat} holds guest {guest_id}, who references {assigned:?}")]
    UnboundOccupant {
        seat: SeatRef,
        guest_id: String,
        assigned: Option<SeatRef>,
    },

    /// The same guest sits in more than one seat.
    #[error("guest {guest_id} occupies {} seats", .seats.len())]
    DoubleBooked { guest_id: String, seats: Vec<SeatRef> },
}

pub(crate) fn check(tables: &[Table], guests: &[Guest]) -> Vec<IntegrityViolation> {
    let mut violations = Vec::new();
    let guests_by_id: HashMap<&str, &Guest> = guests.iter().map(|g| (g.id.as_str(), g)).collect();
    let tables_by_id: HashMap<&str, &Table> = tables.iter().map(|t| (t.id.as_str(), t)).collect();

    for guest in guests {
        let Some(seat_ref) = &guest.assigned_seat_id else {
            continue;
        };
        let seat = tables_by_id
            .get(seat_ref.table_id.as_str())
            .and_then(|t| t.seat(seat_ref.seat_index));
        match seat {
            None => violations.push(IntegrityViolation::DanglingSeatRef {
                guest_id: guest.id.clone(),
                seat: seat_ref.clone(),
            }),
            Some(seat) if seat.guest_id.as_deref() != Some(guest.id.as_str()) => {
                violations.push(IntegrityViolation::SeatMismatch {
                    guest_id: guest.id.clone(),
                    seat: seat_ref.clone(),
                    occupant: seat.guest_id.clone(),
                })
            }
            Some(_) => {}
        }
    }

    let mut seats_by_guest: HashMap<&str, Vec<SeatRef>> = HashMap::new();
    for table in tables {
        for seat in &table.seats {
            let Some(guest_id) = seat.guest_id.as_deref() else {
                continue;
            };
            let here = SeatRef::new(table.id.clone(), seat.index);
            match guests_by_id.get(guest_id) {
                None => violations.push(IntegrityViolation::UnknownOccupant {
                    seat: here.clone(),
                    guest_id: guest_id.to_string(),
                }),
                Some(guest) if guest.assigned_seat_id.as_ref() != Some(&here) => {
                    violations.push(IntegrityViolation::UnboundOccupant {
                        seat: here.clone(),
                        guest_id: guest_id.to_string(),
                        assigned: guest.assigned_seat_id.clone(),
                    })
                }
                Some(_) => {}
            }
            seats_by_guest.entry(guest_id).or_default().push(here);
        }
    }

    // Report double bookings in guest order for stable output.
    for guest in guests {
        if let Some(seats) = seats_by_guest.get(guest.id.as_str()) {
            if seats.len() > 1 {
                violations.push(IntegrityViolation::DoubleBooked {
                    guest_id: guest.id.clone(),
                    seats: seats.clone(),
                });
            }
        }
    }
    violations
}
