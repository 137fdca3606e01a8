//! Assignment proposals and run results.

use std::collections::HashSet;
use std::fmt;

use crate::model::SeatRef;

/// A proposed binding of one guest to one seat.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Assignment {
    pub guest_id: String,
    pub table_id: String,
    pub seat_index: usize,
    /// Criterion value of the group the guest was placed with.
    pub criterion: String,
}

impl Assignment {
    /// The proposed seat as a `SeatRef`.
    pub fn seat_ref(&self) -> SeatRef {
        SeatRef::new(self.table_id.clone(), self.seat_index)
    }
}

/// Why a guest could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SkipReason {
    /// Free seats existed, but an exclusion or strict-mode rule blocked
    /// every candidate table.
    Conflict,
    /// Every seat of every table was taken.
    NoSpace,
}

impl SkipReason {
    /// Wire name: `"conflict"` or `"no_space"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::Conflict => "conflict",
            SkipReason::NoSpace => "no_space",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A guest the run could not seat.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SkippedGuest {
    pub guest_id: String,
    pub reason: SkipReason,
    pub criterion: String,
}

/// Counts shown alongside a preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AssignSummary {
    pub assigned: usize,
    pub skipped: usize,
    pub conflict_skips: usize,
    pub no_space_skips: usize,
    /// Distinct tables receiving at least one assignment.
    pub tables_used: usize,
}

/// Outcome of an auto-assign run.
///
/// Every guest in the run's groups appears exactly once, either in
/// `assignments` or in `skipped`. Nothing is seated until the result is
/// applied to a [`SeatingPlan`](crate::plan::SeatingPlan).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AssignResult {
    /// Placements in the order they were made.
    pub assignments: Vec<Assignment>,
    /// Failures in the order they occurred.
    pub skipped: Vec<SkippedGuest>,
}

impl AssignResult {
    /// Number of guests the run considered.
    pub fn total(&self) -> usize {
        self.assignments.len() + self.skipped.len()
    }

    /// Whether every considered guest got a seat.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Assignments proposed at one table, in placement order.
    pub fn assignments_for_table<'a>(
        &'a self,
        table_id: &'a str,
    ) -> impl Iterator<Item = &'a Assignment> + 'a {
        self.assignments.iter().filter(move |a| a.table_id == table_id)
    }

    /// The proposal for one guest, if the guest was placed.
    pub fn assignment_for_guest(&self, guest_id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.guest_id == guest_id)
    }

    /// The skip record for one guest, if the guest was not placed.
    pub fn skipped_for_guest(&self, guest_id: &str) -> Option<&SkippedGuest> {
        self.skipped.iter().find(|s| s.guest_id == guest_id)
    }

    /// `(guest id, seat reference)` pairs in placement order.
    pub fn to_seat_refs(&self) -> Vec<(String, SeatRef)> {
        self.assignments
            .iter()
            .map(|a| (a.guest_id.clone(), a.seat_ref()))
            .collect()
    }

    /// Counts for the preview header.
    pub fn summary(&self) -> AssignSummary {
        let conflict_skips = self
            .skipped
            .iter()
            .filter(|s| s.reason == SkipReason::Conflict)
            .count();
        let tables_used = self
            .assignments
            .iter()
            .map(|a| a.table_id.as_str())
            .collect::<HashSet<_>>()
            .len();
        AssignSummary {
            assigned: self.assignments.len(),
            skipped: self.skipped.len(),
            conflict_skips,
            no_space_skips: self.skipped.len() - conflict_skips,
            tables_used,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(guest: &str, table: &str, seat: usize) -> Assignment {
        Assignment {
            guest_id: guest.into(),
            table_id: table.into(),
            seat_index: seat,
            criterion: "Family".into(),
        }
    }

    fn skip(guest: &str, reason: SkipReason) -> SkippedGuest {
        SkippedGuest {
            guest_id: guest.into(),
            reason,
            criterion: "Family".into(),
        }
    }

    #[test]
    fn test_summary_counts() {
        let result = AssignResult {
            assignments: vec![
                assignment("g1", "t1", 0),
                assignment("g2", "t1", 1),
                assignment("g3", "t2", 0),
            ],
            skipped: vec![
                skip("g4", SkipReason::Conflict),
                skip("g5", SkipReason::NoSpace),
                skip("g6", SkipReason::NoSpace),
            ],
        };
        let summary = result.summary();
        assert_eq!(summary.assigned, 3);
        assert_eq!(summary.skipped, 3);
        assert_eq!(summary.conflict_skips, 1);
        assert_eq!(summary.no_space_skips, 2);
        assert_eq!(summary.tables_used, 2);
        assert_eq!(result.total(), 6);
        assert!(!result.is_complete());
    }

    #[test]
    fn test_lookups() {
        let result = AssignResult {
            assignments: vec![assignment("g1", "t1", 0), assignment("g2", "t2", 3)],
            skipped: vec![skip("g3", SkipReason::Conflict)],
        };
        assert_eq!(result.assignments_for_table("t2").count(), 1);
        assert_eq!(
            result.assignment_for_guest("g2").map(Assignment::seat_ref),
            Some(SeatRef::new("t2", 3))
        );
        assert!(result.assignment_for_guest("g3").is_none());
        assert_eq!(
            result.skipped_for_guest("g3").map(|s| s.reason),
            Some(SkipReason::Conflict)
        );
        assert_eq!(
            result.to_seat_refs(),
            vec![
                ("g1".to_string(), SeatRef::new("t1", 0)),
                ("g2".to_string(), SeatRef::new("t2", 3)),
            ]
        );
    }

    #[test]
    fn test_skip_reason_strings() {
        assert_eq!(SkipReason::Conflict.to_string(), "conflict");
        assert_eq!(SkipReason::NoSpace.to_string(), "no_space");
    }
}
