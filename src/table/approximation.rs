//! Approximated decision-class regions and the negative-object policy.

use super::information::InformationTable;
use super::value::Value;
use crate::error::InductionError;
use crate::rule::RuleSemantics;

/// Which negative objects a rule's condition part may still cover
/// without violating consistency.
///
/// "Negative" means: not a member of the approximated set and not
/// neutral. The policy widens or narrows the set of tolerable covered
/// objects checked by the stopping condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AllowedNegatives {
    /// No object outside the approximation itself may be covered.
    Approximation,
    /// Objects of the set's positive region may additionally be covered.
    PositiveRegion,
    /// Objects of the positive and boundary regions may be covered.
    PositiveAndBoundaryRegions,
    /// Any object may be covered; consistency is bounded only by the
    /// evaluation threshold.
    AnyRegion,
}

/// An approximated set: the target region whose members are the
/// positive examples of one rule-induction concept.
///
/// Carries the member objects together with the region index sets the
/// negative-object policy refers to, the limiting decision value, and
/// the rule semantics the concept calls for. Index sets are stored
/// sorted and deduplicated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApproximatedSet {
    label: String,
    semantics: RuleSemantics,
    limiting_decision: Value,
    objects: Vec<usize>,
    positive_region: Vec<usize>,
    boundary_region: Vec<usize>,
    neutral: Vec<usize>,
}

fn normalized(mut indices: Vec<usize>) -> Vec<usize> {
    indices.sort_unstable();
    indices.dedup();
    indices
}

impl ApproximatedSet {
    /// Creates an approximated set from explicit member indices.
    ///
    /// The positive region defaults to the members themselves and the
    /// boundary region and neutral set default to empty; override them
    /// with the `with_*` builders when the approximation was computed
    /// under a variable-consistency model.
    pub fn new(
        label: impl Into<String>,
        semantics: RuleSemantics,
        limiting_decision: Value,
        objects: Vec<usize>,
    ) -> Self {
        let objects = normalized(objects);
        Self {
            label: label.into(),
            semantics,
            limiting_decision,
            positive_region: objects.clone(),
            boundary_region: Vec::new(),
            neutral: Vec::new(),
            objects,
        }
    }

    /// Sets the positive-region index set.
    pub fn with_positive_region(mut self, indices: Vec<usize>) -> Self {
        self.positive_region = normalized(indices);
        self
    }

    /// Sets the boundary-region index set.
    pub fn with_boundary_region(mut self, indices: Vec<usize>) -> Self {
        self.boundary_region = normalized(indices);
        self
    }

    /// Sets the neutral-object index set.
    ///
    /// Neutral objects are never counted for consistency measurement.
    pub fn with_neutral(mut self, indices: Vec<usize>) -> Self {
        self.neutral = normalized(indices);
        self
    }

    /// Builds the upward union of decision classes at the given rank:
    /// all objects whose decision is at least `rank`.
    pub fn upward_union(
        table: &InformationTable,
        rank: Value,
    ) -> Result<Self, InductionError> {
        let mut objects = Vec::new();
        for object in 0..table.object_count() {
            if table.decision(object)?.at_least(&rank) {
                objects.push(object);
            }
        }
        Ok(Self::new(
            format!("at least {rank}"),
            RuleSemantics::AtLeast,
            rank,
            objects,
        ))
    }

    /// Builds the downward union of decision classes at the given rank:
    /// all objects whose decision is at most `rank`.
    pub fn downward_union(
        table: &InformationTable,
        rank: Value,
    ) -> Result<Self, InductionError> {
        let mut objects = Vec::new();
        for object in 0..table.object_count() {
            if table.decision(object)?.at_most(&rank) {
                objects.push(object);
            }
        }
        Ok(Self::new(
            format!("at most {rank}"),
            RuleSemantics::AtMost,
            rank,
            objects,
        ))
    }

    /// Concept label used in diagnostics and errors.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The rule semantics this concept calls for.
    pub fn semantics(&self) -> RuleSemantics {
        self.semantics
    }

    /// The limiting decision value of the concept.
    pub fn limiting_decision(&self) -> &Value {
        &self.limiting_decision
    }

    /// Member objects (the positive examples), sorted ascending.
    pub fn objects(&self) -> &[usize] {
        &self.objects
    }

    /// Positive-region objects, sorted ascending.
    pub fn positive_region(&self) -> &[usize] {
        &self.positive_region
    }

    /// Boundary-region objects, sorted ascending.
    pub fn boundary_region(&self) -> &[usize] {
        &self.boundary_region
    }

    /// Neutral objects, sorted ascending.
    pub fn neutral_objects(&self) -> &[usize] {
        &self.neutral
    }

    /// Whether `object` is a member of this set.
    pub fn contains(&self, object: usize) -> bool {
        self.objects.binary_search(&object).is_ok()
    }

    /// Member-inclusion relation used for decision-specificity
    /// comparisons: `self` includes `other` when every member of
    /// `other` is a member of `self`.
    pub fn includes(&self, other: &ApproximatedSet) -> bool {
        other.objects.iter().all(|&object| self.contains(object))
    }

    /// Validates that every stored index addresses an object of `table`.
    pub fn validate(&self, table: &InformationTable) -> Result<(), InductionError> {
        let len = table.object_count();
        for indices in [
            &self.objects,
            &self.positive_region,
            &self.boundary_region,
            &self.neutral,
        ] {
            if let Some(&index) = indices.iter().find(|&&index| index >= len) {
                return Err(InductionError::IndexOutOfRange {
                    what: "object",
                    index,
                    len,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Attribute;

    fn table() -> InformationTable {
        // decisions: 1, 2, 3, 2, 1
        InformationTable::new(
            vec![Attribute::gain("a1")],
            (1..=5).map(|v| vec![Value::Int(v)]).collect(),
            vec![
                Value::Int(1),
                Value::Int(2),
                Value::Int(3),
                Value::Int(2),
                Value::Int(1),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_upward_union_by_rank() {
        let set = ApproximatedSet::upward_union(&table(), Value::Int(2)).unwrap();
        assert_eq!(set.objects(), &[1, 2, 3]);
        assert_eq!(set.semantics(), RuleSemantics::AtLeast);
        assert_eq!(set.label(), "at least 2");
        assert!(set.contains(2));
        assert!(!set.contains(0));
    }

    #[test]
    fn test_downward_union_by_rank() {
        let set = ApproximatedSet::downward_union(&table(), Value::Int(1)).unwrap();
        assert_eq!(set.objects(), &[0, 4]);
        assert_eq!(set.semantics(), RuleSemantics::AtMost);
    }

    #[test]
    fn test_includes_is_member_inclusion() {
        let t = table();
        let wide = ApproximatedSet::upward_union(&t, Value::Int(2)).unwrap();
        let narrow = ApproximatedSet::upward_union(&t, Value::Int(3)).unwrap();
        assert!(wide.includes(&narrow));
        assert!(!narrow.includes(&wide));
        assert!(wide.includes(&wide));
    }

    #[test]
    fn test_indices_normalized() {
        let set = ApproximatedSet::new(
            "c",
            RuleSemantics::AtLeast,
            Value::Int(1),
            vec![4, 1, 4, 2],
        );
        assert_eq!(set.objects(), &[1, 2, 4]);
        assert_eq!(set.positive_region(), &[1, 2, 4]);
    }

    #[test]
    fn test_validate_rejects_foreign_indices() {
        let set = ApproximatedSet::new(
            "c",
            RuleSemantics::AtLeast,
            Value::Int(1),
            vec![0, 99],
        );
        assert!(matches!(
            set.validate(&table()),
            Err(InductionError::IndexOutOfRange { index: 99, .. })
        ));
    }
}
