//! Consistency measures of the variable-consistency family.

use super::types::{
    ConditionAdditionEvaluator, ConditionRemovalEvaluator, MeasureType, Monotonicity,
    RuleConditionsEvaluator,
};
use crate::error::InductionError;
use crate::rule::{Condition, RuleConditions};

fn ratio(covered_negatives: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        covered_negatives as f64 / denominator as f64
    }
}

/// The epsilon consistency measure: covered negative objects divided
/// by the total number of negative objects of the concept.
///
/// Cost-type; 0.0 means no negative object is covered. Deteriorates
/// monotonically as coverage grows, since growing a covered set can
/// only add covered negatives.
#[derive(Debug, Clone, Copy, Default)]
pub struct EpsilonConsistency;

impl EpsilonConsistency {
    fn of(&self, conditions: &RuleConditions<'_>, covered_negatives: usize) -> f64 {
        ratio(covered_negatives, conditions.negative_total())
    }
}

impl ConditionAdditionEvaluator for EpsilonConsistency {
    fn name(&self) -> &str {
        "epsilon"
    }

    fn measure_type(&self) -> MeasureType {
        MeasureType::Cost
    }

    fn evaluate_with_condition(
        &self,
        conditions: &RuleConditions<'_>,
        condition: &Condition,
    ) -> f64 {
        let covered_negatives = conditions
            .covered_objects()
            .iter()
            .filter(|&&object| {
                conditions.is_negative(object) && condition.covers(object, conditions.table())
            })
            .count();
        self.of(conditions, covered_negatives)
    }

    fn monotonicity(&self) -> Option<Monotonicity> {
        Some(Monotonicity::DeterioratesWithCoverage)
    }
}

impl ConditionRemovalEvaluator for EpsilonConsistency {
    fn name(&self) -> &str {
        "epsilon"
    }

    fn measure_type(&self) -> MeasureType {
        MeasureType::Cost
    }

    fn evaluate_without_condition(
        &self,
        conditions: &RuleConditions<'_>,
        index: usize,
    ) -> Result<f64, InductionError> {
        let covered = conditions.covered_without(index)?;
        Ok(self.of(conditions, conditions.negative_count_in(&covered)))
    }
}

impl RuleConditionsEvaluator for EpsilonConsistency {
    fn name(&self) -> &str {
        "epsilon"
    }

    fn measure_type(&self) -> MeasureType {
        MeasureType::Cost
    }

    fn evaluate(&self, conditions: &RuleConditions<'_>) -> f64 {
        self.of(conditions, conditions.covered_negative_count())
    }
}

/// The epsilon-prime consistency measure: covered negative objects
/// divided by the number of positive objects of the concept.
///
/// Cost-type; unlike [`EpsilonConsistency`] its value is relative to
/// the concept's size, so it may exceed 1.0. Deteriorates monotonically
/// as coverage grows.
#[derive(Debug, Clone, Copy, Default)]
pub struct EpsilonPrimeConsistency;

impl EpsilonPrimeConsistency {
    fn of(&self, conditions: &RuleConditions<'_>, covered_negatives: usize) -> f64 {
        ratio(covered_negatives, conditions.positive_total())
    }
}

impl ConditionAdditionEvaluator for EpsilonPrimeConsistency {
    fn name(&self) -> &str {
        "epsilon-prime"
    }

    fn measure_type(&self) -> MeasureType {
        MeasureType::Cost
    }

    fn evaluate_with_condition(
        &self,
        conditions: &RuleConditions<'_>,
        condition: &Condition,
    ) -> f64 {
        let covered_negatives = conditions
            .covered_objects()
            .iter()
            .filter(|&&object| {
                conditions.is_negative(object) && condition.covers(object, conditions.table())
            })
            .count();
        self.of(conditions, covered_negatives)
    }

    fn monotonicity(&self) -> Option<Monotonicity> {
        Some(Monotonicity::DeterioratesWithCoverage)
    }
}

impl ConditionRemovalEvaluator for EpsilonPrimeConsistency {
    fn name(&self) -> &str {
        "epsilon-prime"
    }

    fn measure_type(&self) -> MeasureType {
        MeasureType::Cost
    }

    fn evaluate_without_condition(
        &self,
        conditions: &RuleConditions<'_>,
        index: usize,
    ) -> Result<f64, InductionError> {
        let covered = conditions.covered_without(index)?;
        Ok(self.of(conditions, conditions.negative_count_in(&covered)))
    }
}

impl RuleConditionsEvaluator for EpsilonPrimeConsistency {
    fn name(&self) -> &str {
        "epsilon-prime"
    }

    fn measure_type(&self) -> MeasureType {
        MeasureType::Cost
    }

    fn evaluate(&self, conditions: &RuleConditions<'_>) -> f64 {
        self.of(conditions, conditions.covered_negative_count())
    }
}
