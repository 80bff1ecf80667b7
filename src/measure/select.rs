//! Named selection of the built-in measures, for configuration.

use std::sync::Arc;

use super::consistency::{EpsilonConsistency, EpsilonPrimeConsistency};
use super::coverage::Coverage;
use super::types::{
    ConditionAdditionEvaluator, ConditionRemovalEvaluator, RuleConditionsEvaluator,
};

/// One of the built-in measures, selectable from a configuration the
/// way an operator strategy is selected by name.
///
/// Custom evaluators bypass this enum: construct the components with
/// your own trait implementations instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    /// [`EpsilonConsistency`]: covered negatives / total negatives.
    EpsilonConsistency,
    /// [`EpsilonPrimeConsistency`]: covered negatives / concept size.
    EpsilonPrimeConsistency,
    /// [`Coverage`]: number of covered positive objects.
    Coverage,
}

impl Measure {
    /// The measure as a condition-addition evaluator.
    pub fn addition_evaluator(self) -> Box<dyn ConditionAdditionEvaluator> {
        match self {
            Measure::EpsilonConsistency => Box::new(EpsilonConsistency),
            Measure::EpsilonPrimeConsistency => Box::new(EpsilonPrimeConsistency),
            Measure::Coverage => Box::new(Coverage),
        }
    }

    /// The measure as a condition-removal evaluator.
    pub fn removal_evaluator(self) -> Box<dyn ConditionRemovalEvaluator> {
        match self {
            Measure::EpsilonConsistency => Box::new(EpsilonConsistency),
            Measure::EpsilonPrimeConsistency => Box::new(EpsilonPrimeConsistency),
            Measure::Coverage => Box::new(Coverage),
        }
    }

    /// The measure as a whole-conditions evaluator.
    pub fn rule_conditions_evaluator(self) -> Arc<dyn RuleConditionsEvaluator> {
        match self {
            Measure::EpsilonConsistency => Arc::new(EpsilonConsistency),
            Measure::EpsilonPrimeConsistency => Arc::new(EpsilonPrimeConsistency),
            Measure::Coverage => Arc::new(Coverage),
        }
    }
}
