//! Stopping conditions for the covering search.
//!
//! A [`StoppingConditionChecker`] decides when a growing condition set
//! has reached an acceptable consistency/coverage state. The provided
//! [`EvaluationAndCoverageChecker`] combines an evaluator threshold
//! with the allowed-negative-objects coverage constraint.

mod evaluation;
mod types;

pub use evaluation::EvaluationAndCoverageChecker;
pub use types::StoppingConditionChecker;
