//! Dominance tests across the accepted rule set.

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::debug;

use crate::measure::RuleConditionsEvaluator;
use crate::rule::{RuleConditions, RuleConditionsWithApproximatedSet};

/// Gates admission of a finished candidate into the accepted rule set.
pub trait RuleMinimalityChecker: Send + Sync {
    /// Whether `candidate` is minimal with respect to `accepted`.
    fn check(
        &self,
        accepted: &[&RuleConditionsWithApproximatedSet<'_>],
        candidate: &RuleConditionsWithApproximatedSet<'_>,
    ) -> bool;
}

/// Whether every condition of `general` is implied by some condition of
/// `specific`, i.e. every object satisfying `specific` also satisfies
/// `general`.
fn conditions_at_least_as_general(
    general: &RuleConditions<'_>,
    specific: &RuleConditions<'_>,
) -> bool {
    general.conditions().iter().all(|g| {
        specific
            .conditions()
            .iter()
            .any(|s| s.at_most_as_general_as(g) == Some(true))
    })
}

/// Minimality on a single evaluator.
///
/// A candidate is rejected when some accepted rule has conditions at
/// least as general, a decision at least as specific (its approximated
/// set is included in the candidate's), and an evaluation not worse
/// under the evaluator's measure type.
pub struct SingleEvaluationChecker {
    evaluator: Arc<dyn RuleConditionsEvaluator>,
}

impl SingleEvaluationChecker {
    /// Creates a checker comparing on `evaluator`.
    pub fn new(evaluator: Arc<dyn RuleConditionsEvaluator>) -> Self {
        Self { evaluator }
    }
}

impl RuleMinimalityChecker for SingleEvaluationChecker {
    fn check(
        &self,
        accepted: &[&RuleConditionsWithApproximatedSet<'_>],
        candidate: &RuleConditionsWithApproximatedSet<'_>,
    ) -> bool {
        for rule in accepted {
            let decision_at_least_as_specific = candidate
                .approximated_set()
                .includes(rule.approximated_set());
            if !decision_at_least_as_specific {
                continue;
            }
            if !conditions_at_least_as_general(rule.conditions(), candidate.conditions()) {
                continue;
            }
            let not_worse = self
                .evaluator
                .confront(rule.conditions(), candidate.conditions())
                != Ordering::Less;
            if not_worse {
                debug!(
                    dominating = %rule.conditions(),
                    candidate = %candidate.conditions(),
                    "candidate rejected as non-minimal"
                );
                return false;
            }
        }
        true
    }
}

/// Accepts every candidate; disables minimality checking.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAllChecker;

impl RuleMinimalityChecker for AcceptAllChecker {
    fn check(
        &self,
        _accepted: &[&RuleConditionsWithApproximatedSet<'_>],
        _candidate: &RuleConditionsWithApproximatedSet<'_>,
    ) -> bool {
        true
    }
}
