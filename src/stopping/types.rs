//! Core trait of stopping-condition evaluation.

use crate::rule::RuleConditions;

/// Decides whether a condition set is acceptable as it stands.
///
/// The covering driver stops appending conditions as soon as the
/// checker reports satisfaction; the pruner and generalizer re-run the
/// same checker to confirm that their edits keep it satisfied.
pub trait StoppingConditionChecker: Send + Sync {
    /// Whether the conditions satisfy the stopping criterion.
    fn is_satisfied(&self, conditions: &RuleConditions<'_>) -> bool;
}
