//! `<tableId>-<seatIndex>` seat references.

use std::fmt;
use std::str::FromStr;

use crate::error::SeatingError;

/// A reference from a guest to the seat it occupies.
///
/// Rendered as `<tableId>-<seatIndex>`. Parsing splits on the last `-`,
/// so table ids may themselves contain dashes.
///
/// ```
/// use u_seating::model::SeatRef;
///
/// let seat: SeatRef = "head-table-3".parse().unwrap();
/// assert_eq!(seat.table_id, "head-table");
/// assert_eq!(seat.seat_index, 3);
/// assert_eq!(seat.to_string(), "head-table-3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct SeatRef {
    pub table_id: String,
    pub seat_index: usize,
}

impl SeatRef {
    /// Creates a reference to seat `seat_index` of `table_id`.
    pub fn new(table_id: impl Into<String>, seat_index: usize) -> Self {
        Self {
            table_id: table_id.into(),
            seat_index,
        }
    }
}

impl fmt::Display for SeatRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.table_id, self.seat_index)
    }
}

impl FromStr for SeatRef {
    type Err = SeatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SeatingError::InvalidSeatRef(s.to_string());
        let (table_id, index) = s.rsplit_once('-').ok_or_else(invalid)?;
        if table_id.is_empty() {
            return Err(invalid());
        }
        let seat_index = index.parse::<usize>().map_err(|_| invalid())?;
        Ok(Self::new(table_id, seat_index))
    }
}

impl TryFrom<String> for SeatRef {
    type Error = SeatingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SeatRef> for String {
    fn from(seat: SeatRef) -> Self {
        seat.to_string()
    }
}
