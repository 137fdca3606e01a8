//! Grouping mode and group types.

use std::fmt;
use std::str::FromStr;

use crate::error::SeatingError;
use crate::model::Guest;

/// Which guest attribute acts as the clustering criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GroupMode {
    /// Group by the single `category` label.
    #[default]
    Category,
    /// Group by `tags`; each guest joins at most one group.
    Tag,
}

impl GroupMode {
    /// Lowercase name, as accepted by `FromStr`.
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupMode::Category => "category",
            GroupMode::Tag => "tag",
        }
    }
}

impl fmt::Display for GroupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupMode {
    type Err = SeatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "category" => Ok(GroupMode::Category),
            "tag" => Ok(GroupMode::Tag),
            other => Err(SeatingError::UnknownMode(other.to_string())),
        }
    }
}

/// Guests sharing one criterion value, in pool order.
#[derive(Debug, Clone, PartialEq)]
pub struct GuestGroup<'a> {
    /// The category or tag that formed this group.
    pub key: String,
    pub guests: Vec<&'a Guest>,
}

impl GuestGroup<'_> {
    /// Number of guests in the group.
    pub fn len(&self) -> usize {
        self.guests.len()
    }

    /// Whether the group has no guests.
    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }
}

/// A selectable criterion value and how many unseated guests carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CriterionCount {
    pub value: String,
    pub guests: usize,
}
