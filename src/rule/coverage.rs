//! Read-only coverage snapshots of finished rules.

use super::rule::Rule;
use crate::table::{InformationTable, Value};

/// A snapshot of a rule's coverage against a learning table, derived
/// on demand for downstream quality statistics.
///
/// Records which objects the rule covers, their decision values, which
/// covered objects fail to support the rule's decision part, and the
/// table's total object count.
#[derive(Debug, Clone)]
pub struct RuleCoverageInformation {
    covered: Vec<usize>,
    covered_decisions: Vec<Value>,
    non_supporting: Vec<usize>,
    total_objects: usize,
}

impl RuleCoverageInformation {
    /// Computes the snapshot of `rule` against `table`.
    pub fn new(rule: &Rule, table: &InformationTable) -> Self {
        let mut covered = Vec::new();
        let mut covered_decisions = Vec::new();
        let mut non_supporting = Vec::new();
        for object in 0..table.object_count() {
            if rule.covers(object, table) {
                covered.push(object);
                if let Ok(decision) = table.decision(object) {
                    covered_decisions.push(decision.clone());
                }
                if !rule.supported_by(object, table) {
                    non_supporting.push(object);
                }
            }
        }
        Self {
            covered,
            covered_decisions,
            non_supporting,
            total_objects: table.object_count(),
        }
    }

    /// Indices of covered objects, sorted ascending.
    pub fn covered_objects(&self) -> &[usize] {
        &self.covered
    }

    /// Decision values of the covered objects, parallel to
    /// [`covered_objects`](Self::covered_objects).
    pub fn covered_decisions(&self) -> &[Value] {
        &self.covered_decisions
    }

    /// Covered objects whose decision does not satisfy the rule's
    /// decision part.
    pub fn non_supporting_objects(&self) -> &[usize] {
        &self.non_supporting
    }

    /// Number of covered objects supporting the rule.
    pub fn support(&self) -> usize {
        self.covered.len() - self.non_supporting.len()
    }

    /// Total number of objects in the table the snapshot was taken on.
    pub fn total_objects(&self) -> usize {
        self.total_objects
    }
}
