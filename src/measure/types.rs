//! Core trait definitions for the evaluator family.
//!
//! The three evaluator traits score a [`RuleConditions`] from different
//! angles: hypothetically extended by one condition, hypothetically
//! reduced by one condition, or exactly as it stands. Every evaluator
//! declares a [`MeasureType`] that is the single source of truth for
//! which direction is "better" in every comparison and threshold test.
//!
//! Evaluators hold no mutable evaluation context: anything they need is
//! injected at construction, so an instance can be shared freely across
//! components (and threads) of one induction run.

use std::cmp::Ordering;

use crate::error::InductionError;
use crate::rule::{Condition, RuleConditions};

/// Optimization direction of a measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureType {
    /// Higher values are better.
    Gain,
    /// Lower values are better.
    Cost,
}

impl MeasureType {
    /// The sentinel value no real evaluation can be worse than.
    ///
    /// Used to seed best-so-far tracking so that an unscorable
    /// candidate never wins a comparison.
    pub fn worst(self) -> f64 {
        match self {
            MeasureType::Gain => f64::NEG_INFINITY,
            MeasureType::Cost => f64::INFINITY,
        }
    }

    /// Three-way comparison of two evaluations under this type.
    ///
    /// `Ordering::Greater` means `a` is strictly better than `b`.
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        let natural = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match self {
            MeasureType::Gain => natural,
            MeasureType::Cost => natural.reverse(),
        }
    }

    /// Whether `a` is strictly better than `b` under this type.
    pub fn better(self, a: f64, b: f64) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    /// Whether `value` satisfies `threshold` under this type: at least
    /// the threshold for gain measures, at most for cost measures.
    pub fn satisfies_threshold(self, value: f64, threshold: f64) -> bool {
        match self {
            MeasureType::Gain => value >= threshold,
            MeasureType::Cost => value <= threshold,
        }
    }
}

/// How a monotonic evaluator's value moves as the covered-object set
/// grows.
///
/// Declared monotonicity licenses search-space reductions in the
/// condition generator; it is a promise about the evaluator over
/// nested coverage sets, not something the engine can verify cheaply
/// at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Monotonicity {
    /// The evaluation gets better (or stays equal) as coverage grows.
    ImprovesWithCoverage,
    /// The evaluation gets worse (or stays equal) as coverage grows.
    DeterioratesWithCoverage,
}

/// Scores the hypothetical extension of a condition set by one
/// candidate condition. Must not mutate the condition set.
pub trait ConditionAdditionEvaluator: Send + Sync {
    /// Short evaluator name for diagnostics.
    fn name(&self) -> &str;

    /// Optimization direction governing all comparisons.
    fn measure_type(&self) -> MeasureType;

    /// The evaluation the conditions would have after appending
    /// `condition`.
    fn evaluate_with_condition(
        &self,
        conditions: &RuleConditions<'_>,
        condition: &Condition,
    ) -> f64;

    /// Declared monotonicity over nested coverage sets, if any.
    ///
    /// Returning `Some` licenses the generator's monotonicity-based
    /// search-space reduction for this evaluator.
    fn monotonicity(&self) -> Option<Monotonicity> {
        None
    }
}

/// Scores the hypothetical removal of the condition at an index.
pub trait ConditionRemovalEvaluator: Send + Sync {
    /// Short evaluator name for diagnostics.
    fn name(&self) -> &str;

    /// Optimization direction governing all comparisons.
    fn measure_type(&self) -> MeasureType;

    /// The evaluation the conditions would have after removing the
    /// condition at `index`. An out-of-range index is an error.
    fn evaluate_without_condition(
        &self,
        conditions: &RuleConditions<'_>,
        index: usize,
    ) -> Result<f64, InductionError>;
}

/// Scores a condition set exactly as it stands.
pub trait RuleConditionsEvaluator: Send + Sync {
    /// Short evaluator name for diagnostics.
    fn name(&self) -> &str;

    /// Optimization direction governing all comparisons.
    fn measure_type(&self) -> MeasureType;

    /// The evaluation of the conditions as they stand.
    fn evaluate(&self, conditions: &RuleConditions<'_>) -> f64;

    /// Three-way confrontation of two condition sets under this
    /// evaluator's type; `Ordering::Greater` means `a` is better.
    fn confront(&self, a: &RuleConditions<'_>, b: &RuleConditions<'_>) -> Ordering {
        self.measure_type().compare(self.evaluate(a), self.evaluate(b))
    }

    /// Whether the conditions' evaluation satisfies `threshold` under
    /// this evaluator's type.
    fn satisfies_threshold(&self, conditions: &RuleConditions<'_>, threshold: f64) -> bool {
        self.measure_type()
            .satisfies_threshold(self.evaluate(conditions), threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worst_sentinels_lose_every_comparison() {
        assert_eq!(
            MeasureType::Gain.compare(0.0, MeasureType::Gain.worst()),
            Ordering::Greater
        );
        assert_eq!(
            MeasureType::Cost.compare(0.0, MeasureType::Cost.worst()),
            Ordering::Greater
        );
    }

    #[test]
    fn test_compare_respects_type() {
        assert_eq!(MeasureType::Gain.compare(0.8, 0.3), Ordering::Greater);
        assert_eq!(MeasureType::Cost.compare(0.8, 0.3), Ordering::Less);
        assert_eq!(MeasureType::Cost.compare(0.3, 0.3), Ordering::Equal);
        assert!(MeasureType::Cost.better(0.1, 0.3));
        assert!(!MeasureType::Gain.better(0.1, 0.3));
    }

    #[test]
    fn test_threshold_satisfaction() {
        assert!(MeasureType::Gain.satisfies_threshold(0.8, 0.5));
        assert!(!MeasureType::Gain.satisfies_threshold(0.4, 0.5));
        assert!(MeasureType::Cost.satisfies_threshold(0.0, 0.0));
        assert!(!MeasureType::Cost.satisfies_threshold(0.2, 0.0));
    }
}
