//! Tables and seats.

/// Table outline. Only used for layout; seating logic ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum TableShape {
    #[default]
    Round,
    Rectangle,
}

/// One indexed occupancy slot at a table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Seat {
    pub id: String,
    /// Stable 0-based position within the table.
    pub index: usize,
    pub guest_id: Option<String>,
}

impl Seat {
    /// Whether no guest holds this seat.
    pub fn is_empty(&self) -> bool {
        self.guest_id.is_none()
    }
}

/// A table with a fixed list of seats.
///
/// # Examples
///
/// ```
/// use u_seating::model::Table;
///
/// let mut table = Table::new("t1", "Table 1", 4);
/// assert_eq!(table.capacity(), 4);
/// assert_eq!(table.seats[2].id, "t1-2");
///
/// table.seats[0].guest_id = Some("g1".into());
/// assert_eq!(table.empty_seat_count(), 3);
/// assert_eq!(table.first_empty_seat(), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Table {
    pub id: String,
    pub label: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub x: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub y: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub shape: TableShape,
    pub seats: Vec<Seat>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub width: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub height: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub radius: Option<f64>,
    /// Rotation in degrees.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub rotation: Option<f64>,
}

impl Table {
    /// Creates a round table at the origin with `capacity` empty seats.
    pub fn new(id: impl Into<String>, label: impl Into<String>, capacity: usize) -> Self {
        let id = id.into();
        let seats = (0..capacity).map(|i| Self::make_seat(&id, i)).collect();
        Self {
            id,
            label: label.into(),
            x: 0.0,
            y: 0.0,
            shape: TableShape::Round,
            seats,
            width: None,
            height: None,
            radius: None,
            rotation: None,
        }
    }

    /// Sets the outline shape.
    pub fn with_shape(mut self, shape: TableShape) -> Self {
        self.shape = shape;
        self
    }

    /// Sets the canvas position.
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Seats `guest_id` at `index`. Intended for building fixtures;
    /// does nothing if the index does not exist.
    pub fn with_occupant(mut self, index: usize, guest_id: impl Into<String>) -> Self {
        if let Some(seat) = self.seat_mut(index) {
            seat.guest_id = Some(guest_id.into());
        }
        self
    }

    pub(crate) fn make_seat(table_id: &str, index: usize) -> Seat {
        Seat {
            id: format!("{table_id}-{index}"),
            index,
            guest_id: None,
        }
    }

    /// Total number of seats.
    pub fn capacity(&self) -> usize {
        self.seats.len()
    }

    /// Number of seats without a guest.
    pub fn empty_seat_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_empty()).count()
    }

    /// Whether at least one seat is free.
    pub fn has_vacancy(&self) -> bool {
        self.seats.iter().any(Seat::is_empty)
    }

    /// Lowest seat `index` with no guest, regardless of vector order.
    pub fn first_empty_seat(&self) -> Option<usize> {
        self.seats
            .iter()
            .filter(|s| s.is_empty())
            .map(|s| s.index)
            .min()
    }

    /// The seat with the given `index`, wherever it sits in `seats`.
    pub fn seat(&self, index: usize) -> Option<&Seat> {
        self.seats.iter().find(|s| s.index == index)
    }

    /// Mutable access to the seat with the given `index`.
    pub fn seat_mut(&mut self, index: usize) -> Option<&mut Seat> {
        self.seats.iter_mut().find(|s| s.index == index)
    }

    /// Ids of the guests currently sitting here, in seat vector order.
    pub fn occupant_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.seats.iter().filter_map(|s| s.guest_id.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_seats() {
        let table = Table::new("t9", "Nine", 3);
        let indices: Vec<usize> = table.seats.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert!(table.seats.iter().all(Seat::is_empty));
        assert_eq!(table.empty_seat_count(), 3);
    }

    #[test]
    fn test_first_empty_seat_uses_index_not_position() {
        let mut table = Table::new("t1", "One", 3);
        table.seats.reverse();
        table.seats[2].guest_id = Some("g0".into()); // index 0
        assert_eq!(table.first_empty_seat(), Some(1));
    }

    #[test]
    fn test_full_table() {
        let table = Table::new("t1", "One", 2)
            .with_occupant(0, "g1")
            .with_occupant(1, "g2");
        assert!(!table.has_vacancy());
        assert_eq!(table.first_empty_seat(), None);
        assert_eq!(table.occupant_ids().collect::<Vec<_>>(), vec!["g1", "g2"]);
    }

    #[test]
    fn test_zero_capacity() {
        let table = Table::new("t0", "Empty", 0);
        assert_eq!(table.capacity(), 0);
        assert!(!table.has_vacancy());
    }
}
