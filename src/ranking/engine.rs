//! Sequential rule composition for table ordering.

use std::cmp::Ordering;

use super::rules::{AffinityFirst, MostVacancy};
use super::types::{RankContext, TableRule};
use crate::model::Table;

/// Orders candidate tables by a list of rules.
///
/// Rules are consulted in order; a later rule only decides between tables
/// the earlier rules scored equal (within epsilon). Tables tied on every
/// rule keep their input order.
///
/// # Examples
///
/// ```
/// use u_seating::grouping::GroupMode;
/// use u_seating::model::{Guest, GuestIndex, Table};
/// use u_seating::ranking::{AffinitySource, RankContext, TableRanker};
///
/// let guests = vec![Guest::new("g1", "Ann", "Family")];
/// let index = GuestIndex::new(&guests);
/// let tables = vec![
///     Table::new("t1", "One", 8),
///     Table::new("t2", "Two", 4).with_occupant(0, "g1"),
/// ];
/// let ctx = RankContext::new(GroupMode::Category, "Family", &index, &tables, AffinitySource::Original);
///
/// // t2 already hosts a Family guest, so it wins despite being smaller.
/// assert_eq!(TableRanker::affinity().rank(&tables, &ctx), vec![1, 0]);
/// ```
pub struct TableRanker {
    rules: Vec<Box<dyn TableRule>>,
    epsilon: f64,
}

impl TableRanker {
    /// Creates a ranker with no rules (input order is kept).
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            epsilon: 1e-9,
        }
    }

    /// Affinity first, then most empty seats.
    pub fn affinity() -> Self {
        Self::new().with_rule(AffinityFirst).with_rule(MostVacancy)
    }

    /// Appends a rule consulted after the existing ones.
    pub fn with_rule<R: TableRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Sets the tolerance under which two scores count as equal.
    pub fn with_epsilon(mut self, eps: f64) -> Self {
        self.epsilon = eps;
        self
    }

    /// Number of rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns indices into `tables`, best candidate first.
    pub fn rank(&self, tables: &[Table], ctx: &RankContext<'_>) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..tables.len()).collect();
        if self.rules.is_empty() {
            return indices;
        }

        let scores: Vec<Vec<f64>> = tables
            .iter()
            .map(|table| self.rules.iter().map(|r| r.score(table, ctx)).collect())
            .collect();

        // sort_by is stable, so full ties fall back to input order.
        indices.sort_by(|&a, &b| {
            for (va, vb) in scores[a].iter().zip(&scores[b]) {
                if (va - vb).abs() > self.epsilon {
                    return va.partial_cmp(vb).unwrap_or(Ordering::Equal);
                }
            }
            Ordering::Equal
        });
        indices
    }
}

impl Default for TableRanker {
    fn default() -> Self {
        Self::affinity()
    }
}

impl std::fmt::Debug for TableRanker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableRanker")
            .field("rules", &self.rule_names())
            .field("epsilon", &self.epsilon)
            .finish()
    }
}
