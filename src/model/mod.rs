//! Seating data model.
//!
//! [`Guest`]s are bound to [`Seat`]s on [`Table`]s. The binding is stored
//! twice and must agree: the seat's `guest_id` and the guest's
//! `assigned_seat_id` ([`SeatRef`]). Keeping both sides consistent is the
//! job of [`SeatingPlan`](crate::plan::SeatingPlan); the auto-assign engine
//! only reads this model.
//!
//! Exclusions are name based: a guest with the directive `Avoid:Bob`
//! must not share a table with any guest whose name contains `Bob`.

mod guest;
mod seat_ref;
mod table;

pub use guest::{parse_avoid, Guest, GuestIndex, RsvpStatus, AVOID_PREFIX};
pub use seat_ref::SeatRef;
pub use table::{Seat, Table, TableShape};
