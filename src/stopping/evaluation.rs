//! Threshold-plus-coverage stopping condition.

use std::sync::Arc;

use super::types::StoppingConditionChecker;
use crate::error::InductionError;
use crate::measure::RuleConditionsEvaluator;
use crate::rule::RuleConditions;

/// Satisfied when the evaluator's score meets the threshold under the
/// evaluator's own measure type AND every covered object belongs to the
/// allowed set derived from the allowed-negative-objects policy.
///
/// Both parts must hold; an inconsistent rule that happens to cover only
/// allowed objects is as unacceptable as a consistent one leaking into
/// a forbidden region.
#[derive(Clone)]
pub struct EvaluationAndCoverageChecker {
    evaluator: Arc<dyn RuleConditionsEvaluator>,
    threshold: f64,
}

impl std::fmt::Debug for EvaluationAndCoverageChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvaluationAndCoverageChecker")
            .field("evaluator", &self.evaluator.name())
            .field("threshold", &self.threshold)
            .finish()
    }
}

impl EvaluationAndCoverageChecker {
    /// Creates a checker. A NaN threshold is rejected.
    pub fn new(
        evaluator: Arc<dyn RuleConditionsEvaluator>,
        threshold: f64,
    ) -> Result<Self, InductionError> {
        if threshold.is_nan() {
            return Err(InductionError::InvalidConfiguration {
                reason: "stopping threshold must not be NaN".into(),
            });
        }
        Ok(Self {
            evaluator,
            threshold,
        })
    }

    /// The current threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// A structurally identical checker with a different threshold,
    /// for sweeping threshold values without re-wiring the pipeline.
    pub fn with_threshold(&self, threshold: f64) -> Self {
        Self {
            evaluator: Arc::clone(&self.evaluator),
            threshold,
        }
    }
}

impl StoppingConditionChecker for EvaluationAndCoverageChecker {
    fn is_satisfied(&self, conditions: &RuleConditions<'_>) -> bool {
        self.evaluator.satisfies_threshold(conditions, self.threshold)
            && conditions
                .covered_objects()
                .iter()
                .all(|&object| conditions.is_allowed(object))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::EpsilonConsistency;
    use crate::rule::{Condition, Relation, RuleSemantics};
    use crate::table::{AllowedNegatives, ApproximatedSet, Attribute, InformationTable, Value};

    fn fixture() -> (InformationTable, ApproximatedSet) {
        let table = InformationTable::new(
            vec![Attribute::gain("a1")],
            (1..=4).map(|v| vec![Value::Int(v)]).collect(),
            vec![Value::Int(0), Value::Int(0), Value::Int(1), Value::Int(1)],
        )
        .unwrap();
        let set = ApproximatedSet::new(
            "at least 1",
            RuleSemantics::AtLeast,
            Value::Int(1),
            vec![2, 3],
        );
        (table, set)
    }

    fn checker(threshold: f64) -> EvaluationAndCoverageChecker {
        EvaluationAndCoverageChecker::new(Arc::new(EpsilonConsistency), threshold).unwrap()
    }

    #[test]
    fn test_requires_both_threshold_and_coverage() {
        let (table, set) = fixture();
        let mut rc =
            RuleConditions::new(&table, &set, AllowedNegatives::Approximation, 2).unwrap();

        // empty conjunction covers both negatives: neither part holds
        assert!(!checker(0.0).is_satisfied(&rc));
        // generous threshold alone is not enough while forbidden
        // objects stay covered
        assert!(!checker(1.0).is_satisfied(&rc));

        rc.add_condition(Condition::new(0, Relation::AtLeast, Value::Int(3)));
        assert!(checker(0.0).is_satisfied(&rc));
    }

    #[test]
    fn test_threshold_tolerates_allowed_negatives() {
        let (table, set) = fixture();
        let rc = RuleConditions::new(&table, &set, AllowedNegatives::AnyRegion, 2).unwrap();
        // everything is allowed under AnyRegion; epsilon is 1.0
        assert!(!checker(0.5).is_satisfied(&rc));
        assert!(checker(1.0).is_satisfied(&rc));
    }

    #[test]
    fn test_with_threshold_produces_twin() {
        let original = checker(0.0);
        let relaxed = original.with_threshold(0.25);
        assert_eq!(original.threshold(), 0.0);
        assert_eq!(relaxed.threshold(), 0.25);
    }

    #[test]
    fn test_nan_threshold_rejected() {
        let err =
            EvaluationAndCoverageChecker::new(Arc::new(EpsilonConsistency), f64::NAN).unwrap_err();
        assert!(matches!(err, InductionError::InvalidConfiguration { .. }));
    }
}
