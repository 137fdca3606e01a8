//! The seating plan store.

use std::collections::HashSet;

use tracing::{debug, info};

use super::integrity::{self, IntegrityViolation};
use crate::assign::Assignment;
use crate::conflict::{find_seat_conflicts, SeatConflict};
use crate::error::{Result, SeatingError};
use crate::model::{Guest, GuestIndex, SeatRef, Table};

/// Tables and guests of one event, kept mutually consistent.
///
/// Every mutation keeps both sides of a binding in step: a seat's
/// `guest_id` and the guest's `assigned_seat_id`.
///
/// # Examples
///
/// ```
/// use u_seating::model::{Guest, SeatRef, Table};
/// use u_seating::plan::SeatingPlan;
///
/// let mut plan = SeatingPlan::new(
///     vec![Table::new("t1", "Table 1", 2)],
///     vec![Guest::new("g1", "Ann", "Family"), Guest::new("g2", "Ben", "Family")],
/// );
/// plan.assign_guest_to_seat("g1", "t1", 0).unwrap();
///
/// // Moving onto an occupied seat swaps the two guests.
/// plan.assign_guest_to_seat("g2", "t1", 0).unwrap();
/// assert_eq!(plan.guest("g2").unwrap().assigned_seat_id, Some(SeatRef::new("t1", 0)));
/// assert_eq!(plan.guest("g1").unwrap().assigned_seat_id, None);
/// assert!(plan.check_integrity().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SeatingPlan {
    pub tables: Vec<Table>,
    pub guests: Vec<Guest>,
}

impl SeatingPlan {
    /// Wraps existing tables and guests as they are.
    pub fn new(tables: Vec<Table>, guests: Vec<Guest>) -> Self {
        Self { tables, guests }
    }

    /// Looks up a guest by id.
    pub fn guest(&self, id: &str) -> Option<&Guest> {
        self.guests.iter().find(|g| g.id == id)
    }

    /// Looks up a table by id.
    pub fn table(&self, id: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    /// Guests without a seat reference, in list order.
    pub fn unseated_guests(&self) -> impl Iterator<Item = &Guest> + '_ {
        self.guests.iter().filter(|g| !g.is_seated())
    }

    /// Seats across all tables.
    pub fn total_seats(&self) -> usize {
        self.tables.iter().map(Table::capacity).sum()
    }

    /// Free seats across all tables.
    pub fn empty_seats(&self) -> usize {
        self.tables.iter().map(Table::empty_seat_count).sum()
    }

    /// Adds an unseated guest. Any seat reference on `guest` is cleared.
    pub fn add_guest(&mut self, mut guest: Guest) -> Result<()> {
        if self.guest(&guest.id).is_some() {
            return Err(SeatingError::InvalidInput(format!(
                "duplicate guest id '{}'",
                guest.id
            )));
        }
        guest.assigned_seat_id = None;
        self.guests.push(guest);
        Ok(())
    }

    /// Adds a table. Its seats start empty.
    pub fn add_table(&mut self, mut table: Table) -> Result<()> {
        if self.table(&table.id).is_some() {
            return Err(SeatingError::InvalidInput(format!(
                "duplicate table id '{}'",
                table.id
            )));
        }
        for seat in &mut table.seats {
            seat.guest_id = None;
        }
        self.tables.push(table);
        Ok(())
    }

    /// Commits auto-assign proposals.
    ///
    /// The whole batch is checked before anything is written: every guest,
    /// table and seat must exist, every target seat must be empty, no guest
    /// may already be seated, and no guest or seat may appear twice. On
    /// success returns the number of guests seated.
    pub fn apply_assignments(&mut self, assignments: &[Assignment]) -> Result<usize> {
        let mut positions = Vec::with_capacity(assignments.len());
        let mut batch_guests = HashSet::new();
        let mut batch_seats = HashSet::new();

        for a in assignments {
            let guest_pos = self.guest_position(&a.guest_id)?;
            if self.guests[guest_pos].is_seated() || self.seat_of(&a.guest_id).is_some() {
                return Err(SeatingError::AlreadySeated(a.guest_id.clone()));
            }
            if !batch_guests.insert(a.guest_id.as_str()) {
                return Err(SeatingError::InvalidInput(format!(
                    "guest '{}' assigned twice",
                    a.guest_id
                )));
            }
            let (table_pos, seat_pos) = self.seat_position(&a.table_id, a.seat_index)?;
            if let Some(occupant) = &self.tables[table_pos].seats[seat_pos].guest_id {
                return Err(SeatingError::SeatOccupied {
                    table_id: a.table_id.clone(),
                    seat_index: a.seat_index,
                    occupant: occupant.clone(),
                });
            }
            if !batch_seats.insert((table_pos, seat_pos)) {
                return Err(SeatingError::InvalidInput(format!(
                    "seat {}-{} assigned twice",
                    a.table_id, a.seat_index
                )));
            }
            positions.push((guest_pos, table_pos, seat_pos));
        }

        for (a, &(guest_pos, table_pos, seat_pos)) in assignments.iter().zip(&positions) {
            self.tables[table_pos].seats[seat_pos].guest_id = Some(a.guest_id.clone());
            self.guests[guest_pos].assigned_seat_id = Some(a.seat_ref());
        }
        info!(seated = positions.len(), "applied assignments");
        Ok(positions.len())
    }

    /// Seats a guest at a specific seat, the way a manual drag-and-drop does.
    ///
    /// If the seat is taken, its occupant moves to the mover's previous
    /// seat, or becomes unseated if the mover had none.
    pub fn assign_guest_to_seat(&mut self, guest_id: &str, table_id: &str, seat_index: usize) -> Result<()> {
        let guest_pos = self.guest_position(guest_id)?;
        let (table_pos, seat_pos) = self.seat_position(table_id, seat_index)?;
        let displaced = self.tables[table_pos].seats[seat_pos].guest_id.clone();
        if displaced.as_deref() == Some(guest_id) {
            return Ok(());
        }
        let source = self.seat_of(guest_id);

        if let Some((src_table, src_seat)) = source {
            self.tables[src_table].seats[src_seat].guest_id = displaced.clone();
        }
        self.tables[table_pos].seats[seat_pos].guest_id = Some(guest_id.to_string());
        self.guests[guest_pos].assigned_seat_id = Some(SeatRef::new(table_id, seat_index));

        if let Some(other) = displaced {
            let moved_to = source.map(|(t, s)| self.seat_ref_at(t, s));
            if let Some(other_guest) = self.guests.iter_mut().find(|g| g.id == other) {
                other_guest.assigned_seat_id = moved_to;
            }
            debug!(guest = %guest_id, displaced = %other, "swapped seats");
        }
        Ok(())
    }

    /// Seats a guest at the table's first empty seat. Returns the seat index.
    pub fn seat_at_table(&mut self, guest_id: &str, table_id: &str) -> Result<usize> {
        let table = self
            .table(table_id)
            .ok_or_else(|| SeatingError::UnknownTable(table_id.to_string()))?;
        let seat_index = table
            .first_empty_seat()
            .ok_or_else(|| SeatingError::TableFull(table_id.to_string()))?;
        self.assign_guest_to_seat(guest_id, table_id, seat_index)?;
        Ok(seat_index)
    }

    /// Frees the guest's seat. Unseated guests are left as they are.
    pub fn unassign_guest(&mut self, guest_id: &str) -> Result<()> {
        let guest_pos = self.guest_position(guest_id)?;
        self.clear_seats_of(guest_id);
        self.guests[guest_pos].assigned_seat_id = None;
        Ok(())
    }

    /// Deletes a guest and frees any seat they hold.
    pub fn remove_guest(&mut self, guest_id: &str) -> Result<Guest> {
        let guest_pos = self.guest_position(guest_id)?;
        self.clear_seats_of(guest_id);
        Ok(self.guests.remove(guest_pos))
    }

    /// Deletes a table and unseats everyone sitting at it.
    pub fn remove_table(&mut self, table_id: &str) -> Result<Table> {
        let table_pos = self
            .tables
            .iter()
            .position(|t| t.id == table_id)
            .ok_or_else(|| SeatingError::UnknownTable(table_id.to_string()))?;
        let table = self.tables.remove(table_pos);
        let occupants: HashSet<&str> = table.occupant_ids().collect();
        for guest in &mut self.guests {
            let seated_here = guest
                .assigned_seat_id
                .as_ref()
                .is_some_and(|s| s.table_id == table_id);
            if seated_here || occupants.contains(guest.id.as_str()) {
                guest.assigned_seat_id = None;
            }
        }
        Ok(table)
    }

    /// Appends an empty seat to a table. Returns the new seat's index.
    pub fn add_seat(&mut self, table_id: &str) -> Result<usize> {
        let table = self.table_mut(table_id)?;
        let index = table.seats.iter().map(|s| s.index + 1).max().unwrap_or(0);
        table.seats.push(Table::make_seat(&table.id, index));
        Ok(index)
    }

    /// Removes the table's highest-index seat, unseating its occupant.
    /// Returns the unseated guest's id, if any. A table keeps at least one
    /// seat.
    pub fn remove_last_seat(&mut self, table_id: &str) -> Result<Option<String>> {
        let table = self.table_mut(table_id)?;
        if table.seats.len() <= 1 {
            return Err(SeatingError::InvalidInput(format!(
                "table '{table_id}' must keep at least one seat"
            )));
        }
        let last = table
            .seats
            .iter()
            .enumerate()
            .max_by_key(|(_, s)| s.index)
            .map(|(pos, _)| pos)
            .unwrap_or(table.seats.len() - 1);
        let removed = table.seats.remove(last);
        if let Some(guest_id) = &removed.guest_id {
            if let Some(guest) = self.guests.iter_mut().find(|g| &g.id == guest_id) {
                guest.assigned_seat_id = None;
            }
        }
        Ok(removed.guest_id)
    }

    /// Lists excluded pairs currently sharing a table. Manual moves are not
    /// checked against `Avoid:` rules, so this is how callers find them.
    pub fn conflicts(&self) -> Vec<SeatConflict> {
        find_seat_conflicts(&self.tables, &GuestIndex::new(&self.guests))
    }

    /// Lists every broken seat/guest binding. Empty means consistent.
    pub fn check_integrity(&self) -> Vec<IntegrityViolation> {
        integrity::check(&self.tables, &self.guests)
    }

    fn guest_position(&self, guest_id: &str) -> Result<usize> {
        self.guests
            .iter()
            .position(|g| g.id == guest_id)
            .ok_or_else(|| SeatingError::UnknownGuest(guest_id.to_string()))
    }

    fn table_mut(&mut self, table_id: &str) -> Result<&mut Table> {
        self.tables
            .iter_mut()
            .find(|t| t.id == table_id)
            .ok_or_else(|| SeatingError::UnknownTable(table_id.to_string()))
    }

    /// (table position, seat position) of a seat, by ids.
    fn seat_position(&self, table_id: &str, seat_index: usize) -> Result<(usize, usize)> {
        let table_pos = self
            .tables
            .iter()
            .position(|t| t.id == table_id)
            .ok_or_else(|| SeatingError::UnknownTable(table_id.to_string()))?;
        let seat_pos = self.tables[table_pos]
            .seats
            .iter()
            .position(|s| s.index == seat_index)
            .ok_or_else(|| SeatingError::UnknownSeat {
                table_id: table_id.to_string(),
                seat_index,
            })?;
        Ok((table_pos, seat_pos))
    }

    /// (table position, seat position) of the seat holding `guest_id`.
    fn seat_of(&self, guest_id: &str) -> Option<(usize, usize)> {
        self.tables.iter().enumerate().find_map(|(t, table)| {
            table
                .seats
                .iter()
                .position(|s| s.guest_id.as_deref() == Some(guest_id))
                .map(|s| (t, s))
        })
    }

    fn seat_ref_at(&self, table_pos: usize, seat_pos: usize) -> SeatRef {
        let table = &self.tables[table_pos];
        SeatRef::new(table.id.clone(), table.seats[seat_pos].index)
    }

    fn clear_seats_of(&mut self, guest_id: &str) {
        for seat in self.tables.iter_mut().flat_map(|t| t.seats.iter_mut()) {
            if seat.guest_id.as_deref() == Some(guest_id) {
                seat.guest_id = None;
            }
        }
    }
}
