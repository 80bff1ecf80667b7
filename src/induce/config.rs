//! Induction configuration.
//!
//! [`InductionConfig`] holds all parameters that control the covering
//! loop and names the built-in strategy for each pluggable seam.

use crate::error::InductionError;
use crate::generator::CandidateSearch;
use crate::measure::Measure;
use crate::rule::RuleType;
use crate::table::AllowedNegatives;

/// Local pruning strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PruningStrategy {
    /// Attempt removals oldest-condition-first.
    Fifo,
    /// Attempt removals in attribute declaration order.
    AttributeOrder,
    /// Do not prune.
    None,
}

/// Minimality-checking strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinimalityStrategy {
    /// Reject candidates dominated under the rule measure.
    SingleEvaluation,
    /// Accept every candidate (disables the check).
    AcceptAll,
}

/// Configuration for sequential-covering rule induction.
///
/// # Defaults
///
/// ```
/// use domlem::induce::InductionConfig;
///
/// let config = InductionConfig::default();
/// assert_eq!(config.consistency_threshold, 0.0);
/// assert!(config.set_pruning);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use domlem::induce::InductionConfig;
/// use domlem::table::AllowedNegatives;
///
/// let config = InductionConfig::default()
///     .with_consistency_threshold(0.05)
///     .with_allowed_negatives(AllowedNegatives::PositiveAndBoundaryRegions);
/// ```
#[derive(Debug, Clone)]
pub struct InductionConfig {
    /// Kind of rules to produce.
    pub rule_type: RuleType,

    /// Threshold the rule measure must satisfy for the stopping
    /// condition to hold. With the default cost-type epsilon measure,
    /// 0.0 demands rules covering no negative object at all.
    pub consistency_threshold: f64,

    /// Measure used by the stopping condition, the set pruner and the
    /// minimality checker.
    pub rule_measure: Measure,

    /// Measures scoring candidate conditions, compared
    /// lexicographically in this order.
    pub addition_measures: Vec<Measure>,

    /// Which negative objects a rule may still cover.
    pub allowed_negatives: AllowedNegatives,

    /// Local pruning strategy applied to each accepted condition set.
    pub pruning: PruningStrategy,

    /// Whether to widen ordinal thresholds after pruning.
    pub generalization: bool,

    /// Whether to prune each concept's candidate list globally.
    pub set_pruning: bool,

    /// Minimality-checking strategy across concepts.
    pub minimality: MinimalityStrategy,

    /// Candidate-condition search mode.
    pub candidate_search: CandidateSearch,

    /// Whether the generator scores attributes in parallel using rayon.
    pub parallel: bool,
}

impl Default for InductionConfig {
    fn default() -> Self {
        Self {
            rule_type: RuleType::Certain,
            consistency_threshold: 0.0,
            rule_measure: Measure::EpsilonConsistency,
            addition_measures: vec![Measure::EpsilonConsistency, Measure::Coverage],
            allowed_negatives: AllowedNegatives::PositiveRegion,
            pruning: PruningStrategy::Fifo,
            generalization: false,
            set_pruning: true,
            minimality: MinimalityStrategy::SingleEvaluation,
            candidate_search: CandidateSearch::Exhaustive,
            parallel: false,
        }
    }
}

impl InductionConfig {
    /// Sets the rule type.
    pub fn with_rule_type(mut self, rule_type: RuleType) -> Self {
        self.rule_type = rule_type;
        self
    }

    /// Sets the consistency threshold.
    pub fn with_consistency_threshold(mut self, threshold: f64) -> Self {
        self.consistency_threshold = threshold;
        self
    }

    /// Sets the rule measure.
    pub fn with_rule_measure(mut self, measure: Measure) -> Self {
        self.rule_measure = measure;
        self
    }

    /// Sets the condition-addition measures.
    pub fn with_addition_measures(mut self, measures: Vec<Measure>) -> Self {
        self.addition_measures = measures;
        self
    }

    /// Sets the allowed-negative-objects policy.
    pub fn with_allowed_negatives(mut self, policy: AllowedNegatives) -> Self {
        self.allowed_negatives = policy;
        self
    }

    /// Sets the local pruning strategy.
    pub fn with_pruning(mut self, pruning: PruningStrategy) -> Self {
        self.pruning = pruning;
        self
    }

    /// Enables or disables threshold generalization.
    pub fn with_generalization(mut self, on: bool) -> Self {
        self.generalization = on;
        self
    }

    /// Enables or disables per-concept set pruning.
    pub fn with_set_pruning(mut self, on: bool) -> Self {
        self.set_pruning = on;
        self
    }

    /// Sets the minimality-checking strategy.
    pub fn with_minimality(mut self, minimality: MinimalityStrategy) -> Self {
        self.minimality = minimality;
        self
    }

    /// Sets the candidate-condition search mode.
    pub fn with_candidate_search(mut self, search: CandidateSearch) -> Self {
        self.candidate_search = search;
        self
    }

    /// Enables or disables parallel candidate scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), InductionError> {
        if !self.consistency_threshold.is_finite() {
            return Err(InductionError::InvalidConfiguration {
                reason: format!(
                    "consistency_threshold must be finite, got {}",
                    self.consistency_threshold
                ),
            });
        }
        if self.addition_measures.is_empty() {
            return Err(InductionError::EmptyComponent {
                component: "induction configuration",
                element: "condition-addition measure",
            });
        }
        Ok(())
    }
}
