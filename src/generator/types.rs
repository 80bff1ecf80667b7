//! Core trait of the condition search.

use crate::error::InductionError;
use crate::rule::{Condition, RuleConditions};

/// Proposes the single best elementary condition to append next.
///
/// `candidates` are the positive objects the rule under construction
/// should still try to cover; implementations derive candidate limiting
/// values from their evaluations. A generator never mutates the
/// condition set it scores against.
pub trait ConditionGenerator: Send + Sync {
    /// Returns the best condition, or an error when the candidate pool
    /// is empty or no condition strictly shrinks the covered set (the
    /// "cannot separate objects" dead-end, fatal for the attempt).
    fn best_condition(
        &self,
        candidates: &[usize],
        conditions: &RuleConditions<'_>,
    ) -> Result<Condition, InductionError>;
}
