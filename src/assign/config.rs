//! Auto-assign configuration.
//!
//! [`AssignConfig`] holds the user's choices for one run: grouping mode,
//! which criterion values to seat, strictness, and the affinity policy.

use crate::error::{Result, SeatingError};
use crate::grouping::{available_criteria, GroupMode};
use crate::model::Guest;
use crate::ranking::AffinitySource;

/// Configuration for an auto-assign run.
///
/// # Defaults
///
/// ```
/// use u_seating::assign::AssignConfig;
/// use u_seating::grouping::GroupMode;
/// use u_seating::ranking::AffinitySource;
///
/// let config = AssignConfig::default();
/// assert_eq!(config.mode, GroupMode::Category);
/// assert!(config.selected_criteria.is_empty());
/// assert!(!config.strict_mode);
/// assert_eq!(config.affinity_source, AffinitySource::Simulated);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_seating::assign::AssignConfig;
/// use u_seating::grouping::GroupMode;
///
/// let config = AssignConfig::new(GroupMode::Tag)
///     .with_criteria(["VIP", "Vegetarian"])
///     .with_strict_mode(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct AssignConfig {
    /// Category or tag grouping.
    pub mode: GroupMode,

    /// Criterion values to include, in selection order.
    ///
    /// In tag mode the order matters: a guest carrying several selected
    /// tags joins the group of the first one listed.
    pub selected_criteria: Vec<String>,

    /// Never seat a guest at a table whose current occupants differ on
    /// the criterion, even if that leaves seats empty.
    pub strict_mode: bool,

    /// Which tables the affinity ranking reads.
    pub affinity_source: AffinitySource,
}

impl AssignConfig {
    /// Creates an empty selection for `mode`.
    pub fn new(mode: GroupMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Preset selecting every criterion value carried by an unseated
    /// guest, in first-appearance order.
    pub fn all_available(guests: &[Guest], mode: GroupMode) -> Self {
        Self::new(mode).with_criteria(available_criteria(guests, mode).into_iter().map(|c| c.value))
    }

    /// Sets the grouping mode. The selection is kept as is.
    pub fn with_mode(mut self, mode: GroupMode) -> Self {
        self.mode = mode;
        self
    }

    /// Replaces the selection. Repeated values are kept once.
    pub fn with_criteria<I, S>(mut self, criteria: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_criteria.clear();
        for value in criteria {
            self = self.with_criterion(value);
        }
        self
    }

    /// Appends one criterion value unless already selected.
    pub fn with_criterion(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        if !self.selected_criteria.contains(&value) {
            self.selected_criteria.push(value);
        }
        self
    }

    /// Enables strict grouping.
    pub fn with_strict_mode(mut self, strict: bool) -> Self {
        self.strict_mode = strict;
        self
    }

    /// Sets where table affinity is read from.
    pub fn with_affinity_source(mut self, source: AffinitySource) -> Self {
        self.affinity_source = source;
        self
    }

    /// Selects `value` if absent, deselects it otherwise. Returns whether
    /// it is selected afterwards.
    pub fn toggle_criterion(&mut self, value: &str) -> bool {
        if let Some(pos) = self.selected_criteria.iter().position(|v| v == value) {
            self.selected_criteria.remove(pos);
            false
        } else {
            self.selected_criteria.push(value.to_string());
            true
        }
    }

    /// Whether `value` is in the selection.
    pub fn is_selected(&self, value: &str) -> bool {
        self.selected_criteria.iter().any(|v| v == value)
    }

    /// Checks that a run is possible.
    ///
    /// # Errors
    ///
    /// [`SeatingError::EmptySelection`] when no criterion value is selected.
    pub fn validate(&self) -> Result<()> {
        if self.selected_criteria.is_empty() {
            return Err(SeatingError::EmptySelection);
        }
        Ok(())
    }
}
