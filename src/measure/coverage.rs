//! Coverage measure.

use super::types::{
    ConditionAdditionEvaluator, ConditionRemovalEvaluator, MeasureType, Monotonicity,
    RuleConditionsEvaluator,
};
use crate::error::InductionError;
use crate::rule::{Condition, RuleConditions};

/// Number of covered positive objects.
///
/// Gain-type; improves monotonically as coverage grows. Used as a
/// tie-breaker after a consistency measure so that, among equally
/// consistent candidates, the most widely covering one wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct Coverage;

impl ConditionAdditionEvaluator for Coverage {
    fn name(&self) -> &str {
        "coverage"
    }

    fn measure_type(&self) -> MeasureType {
        MeasureType::Gain
    }

    fn evaluate_with_condition(
        &self,
        conditions: &RuleConditions<'_>,
        condition: &Condition,
    ) -> f64 {
        conditions
            .covered_objects()
            .iter()
            .filter(|&&object| {
                conditions.is_positive(object) && condition.covers(object, conditions.table())
            })
            .count() as f64
    }

    fn monotonicity(&self) -> Option<Monotonicity> {
        Some(Monotonicity::ImprovesWithCoverage)
    }
}

impl ConditionRemovalEvaluator for Coverage {
    fn name(&self) -> &str {
        "coverage"
    }

    fn measure_type(&self) -> MeasureType {
        MeasureType::Gain
    }

    fn evaluate_without_condition(
        &self,
        conditions: &RuleConditions<'_>,
        index: usize,
    ) -> Result<f64, InductionError> {
        let covered = conditions.covered_without(index)?;
        Ok(conditions.positive_count_in(&covered) as f64)
    }
}

impl RuleConditionsEvaluator for Coverage {
    fn name(&self) -> &str {
        "coverage"
    }

    fn measure_type(&self) -> MeasureType {
        MeasureType::Gain
    }

    fn evaluate(&self, conditions: &RuleConditions<'_>) -> f64 {
        conditions.covered_positive_count() as f64
    }
}
