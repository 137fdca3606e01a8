//! Exclusion checks between a guest and a table's occupants.

use crate::model::{Guest, GuestIndex, Table};

/// Whether `a` and `b` must not share a table.
///
/// Symmetric: true when either guest has an `Avoid:` directive whose name
/// fragment is contained in the other guest's name.
///
/// ```
/// use u_seating::conflict::excludes;
/// use u_seating::model::Guest;
///
/// let alice = Guest::new("g1", "Alice Wang", "Family").with_avoid("Bob");
/// let bob = Guest::new("g2", "Bob Chen", "Family");
/// assert!(excludes(&alice, &bob));
/// assert!(excludes(&bob, &alice));
/// ```
pub fn excludes(a: &Guest, b: &Guest) -> bool {
    avoids(a, b) || avoids(b, a)
}

fn avoids(guest: &Guest, other: &Guest) -> bool {
    guest
        .avoid_targets()
        .any(|fragment| other.name.contains(fragment))
}

/// Decides whether seating a guest at a table breaks an exclusion rule.
///
/// Co-occupants are the guests referenced by the table's seats plus the
/// guests placed there earlier in the current run. The second source
/// covers callers whose seat state lags behind their placements.
#[derive(Debug, Clone)]
pub struct ConflictChecker<'a> {
    guests: &'a GuestIndex<'a>,
}

impl<'a> ConflictChecker<'a> {
    /// Creates a checker resolving occupant ids through `guests`.
    pub fn new(guests: &'a GuestIndex<'a>) -> Self {
        Self { guests }
    }

    /// Returns `true` on the first co-occupant that excludes `guest`.
    ///
    /// Seat references to unknown guest ids are ignored. An empty table
    /// never conflicts.
    pub fn has_conflict(&self, guest: &Guest, table: &Table, placed_this_run: &[&Guest]) -> bool {
        let clashes = |other: &Guest| other.id != guest.id && excludes(guest, other);
        table
            .occupant_ids()
            .filter_map(|id| self.guests.get(id))
            .any(clashes)
            || placed_this_run.iter().any(|&other| clashes(other))
    }
}
