//! Error types.
//!
//! Guest-level placement failures are data (see
//! [`SkippedGuest`](crate::assign::SkippedGuest)), never errors. The
//! variants here cover invalid configuration, malformed input snapshots,
//! and store operations that would break seat/guest consistency.

use thiserror::Error;

/// Errors raised by the seating engine and the seating plan store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatingError {
    /// No criterion values were selected for an auto-assign run.
    #[error("no criterion values selected")]
    EmptySelection,

    /// A grouping mode string was neither `category` nor `tag`.
    #[error("unknown grouping mode: {0}")]
    UnknownMode(String),

    /// A seat reference did not have the `<tableId>-<seatIndex>` shape.
    #[error("invalid seat reference '{0}'")]
    InvalidSeatRef(String),

    /// The input snapshot violates a structural precondition.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown guest: {0}")]
    UnknownGuest(String),

    #[error("unknown table: {0}")]
    UnknownTable(String),

    #[error("table {table_id} has no seat {seat_index}")]
    UnknownSeat { table_id: String, seat_index: usize },

    /// The target seat is already taken by another guest.
    #[error("seat {table_id}-{seat_index} is occupied by {occupant}")]
    SeatOccupied {
        table_id: String,
        seat_index: usize,
        occupant: String,
    },

    /// The guest already holds a seat and the operation does not move guests.
    #[error("guest {0} is already seated")]
    AlreadySeated(String),

    /// The table has no empty seat left.
    #[error("table {0} is full")]
    TableFull(String),

    /// A session operation was called in a state that does not allow it.
    #[error("cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SeatingError>;
