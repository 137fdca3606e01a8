//! Guests and their relationship directives.

use std::collections::HashMap;

use super::seat_ref::SeatRef;
use crate::grouping::GroupMode;

/// Prefix of the only relationship directive the engine interprets.
pub const AVOID_PREFIX: &str = "Avoid:";

/// Extracts the name fragment of an `Avoid:<name>` directive.
///
/// Returns `None` for any other directive, and for an `Avoid:` directive
/// whose remainder is blank: an empty fragment would be a substring of
/// every name.
///
/// ```
/// use u_seating::model::parse_avoid;
///
/// assert_eq!(parse_avoid("Avoid: Bob "), Some("Bob"));
/// assert_eq!(parse_avoid("Must sit with Bob"), None);
/// assert_eq!(parse_avoid("Avoid:"), None);
/// ```
pub fn parse_avoid(directive: &str) -> Option<&str> {
    let fragment = directive.strip_prefix(AVOID_PREFIX)?.trim();
    (!fragment.is_empty()).then_some(fragment)
}

/// RSVP state of a guest. Carried for display; the engine seats every
/// unseated guest regardless of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RsvpStatus {
    Confirmed,
    #[default]
    Pending,
    Declined,
}

/// An event guest.
///
/// # Examples
///
/// ```
/// use u_seating::model::Guest;
///
/// let guest = Guest::new("g1", "Alice", "Family")
///     .with_tags(["VIP", "Vegetarian"])
///     .with_avoid("Bob");
/// assert!(guest.has_tag("VIP"));
/// assert_eq!(guest.avoid_targets().collect::<Vec<_>>(), vec!["Bob"]);
/// assert!(!guest.is_seated());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Guest {
    pub id: String,
    pub name: String,
    /// Single free-text grouping label.
    pub category: String,
    /// Free-text labels; insertion order is kept for display.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rsvp_status: RsvpStatus,
    /// Free-text directives. Only `Avoid:<name>` entries affect seating.
    #[cfg_attr(feature = "serde", serde(default))]
    pub relationships: Vec<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub notes: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub assigned_seat_id: Option<SeatRef>,
}

impl Guest {
    /// Creates an unseated guest with no tags or relationships.
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            tags: Vec::new(),
            rsvp_status: RsvpStatus::default(),
            relationships: Vec::new(),
            notes: None,
            assigned_seat_id: None,
        }
    }

    /// Replaces the tag list.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one tag unless already present.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    /// Appends a free-text relationship directive.
    pub fn with_relationship(mut self, directive: impl Into<String>) -> Self {
        self.relationships.push(directive.into());
        self
    }

    /// Appends an `Avoid:<name>` directive.
    pub fn with_avoid(self, name: impl AsRef<str>) -> Self {
        let directive = format!("{AVOID_PREFIX}{}", name.as_ref().trim());
        self.with_relationship(directive)
    }

    /// Sets the RSVP status.
    pub fn with_rsvp(mut self, status: RsvpStatus) -> Self {
        self.rsvp_status = status;
        self
    }

    /// Sets the free-text notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets the seat reference. Does not touch any table.
    pub fn with_assigned_seat(mut self, seat: SeatRef) -> Self {
        self.assigned_seat_id = Some(seat);
        self
    }

    /// Whether the guest carries a seat reference.
    pub fn is_seated(&self) -> bool {
        self.assigned_seat_id.is_some()
    }

    /// Exact, case-sensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Whether the guest carries `key` under the given grouping mode:
    /// category equality, or tag membership.
    pub fn matches(&self, mode: GroupMode, key: &str) -> bool {
        match mode {
            GroupMode::Category => self.category == key,
            GroupMode::Tag => self.has_tag(key),
        }
    }

    /// Name fragments of this guest's `Avoid:` directives, in list order.
    pub fn avoid_targets(&self) -> impl Iterator<Item = &str> + '_ {
        self.relationships.iter().filter_map(|r| parse_avoid(r))
    }
}

/// Read-only id lookup over a guest slice.
///
/// Built once per run so seat occupants resolve in O(1).
#[derive(Debug, Clone)]
pub struct GuestIndex<'a> {
    by_id: HashMap<&'a str, &'a Guest>,
}

impl<'a> GuestIndex<'a> {
    /// Indexes the guests. On duplicate ids the first guest wins.
    pub fn new(guests: &'a [Guest]) -> Self {
        let mut by_id = HashMap::with_capacity(guests.len());
        for guest in guests {
            by_id.entry(guest.id.as_str()).or_insert(guest);
        }
        Self { by_id }
    }

    /// Looks up a guest by id.
    pub fn get(&self, id: &str) -> Option<&'a Guest> {
        self.by_id.get(id).copied()
    }

    /// Number of distinct ids indexed.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether no guest is indexed.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_avoid() {
        assert_eq!(parse_avoid("Avoid:Bob"), Some("Bob"));
        assert_eq!(parse_avoid("Avoid:  王大明 "), Some("王大明"));
        assert_eq!(parse_avoid("avoid:Bob"), None);
        assert_eq!(parse_avoid("Prefer:Bob"), None);
        assert_eq!(parse_avoid("Avoid:   "), None);
    }

    #[test]
    fn test_with_tag_deduplicates() {
        let guest = Guest::new("g1", "Alice", "Family")
            .with_tag("VIP")
            .with_tag("Kid")
            .with_tag("VIP");
        assert_eq!(guest.tags, vec!["VIP", "Kid"]);
    }

    #[test]
    fn test_matches_by_mode() {
        let guest = Guest::new("g1", "Alice", "Family").with_tags(["VIP"]);
        assert!(guest.matches(GroupMode::Category, "Family"));
        assert!(!guest.matches(GroupMode::Category, "VIP"));
        assert!(guest.matches(GroupMode::Tag, "VIP"));
        assert!(!guest.matches(GroupMode::Tag, "Family"));
    }

    #[test]
    fn test_avoid_targets_skip_other_directives() {
        let guest = Guest::new("g1", "Alice", "Family")
            .with_relationship("Must sit with Carol")
            .with_avoid("Bob")
            .with_relationship("Avoid:")
            .with_avoid("Dave");
        assert_eq!(guest.avoid_targets().collect::<Vec<_>>(), vec!["Bob", "Dave"]);
    }

    #[test]
    fn test_guest_index_first_wins() {
        let guests = vec![
            Guest::new("g1", "Alice", "Family"),
            Guest::new("g1", "Impostor", "Family"),
            Guest::new("g2", "Bob", "Friend"),
        ];
        let index = GuestIndex::new(&guests);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("g1").map(|g| g.name.as_str()), Some("Alice"));
        assert!(index.get("g3").is_none());
    }
}
