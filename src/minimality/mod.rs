//! Cross-rule minimality checking.
//!
//! A candidate rule is minimal when no already-accepted rule dominates
//! it: conditions at least as general, decision at least as specific,
//! and an evaluation that is not worse. The [`SingleEvaluationChecker`]
//! compares on one configured evaluator; [`AcceptAllChecker`] disables
//! the check.

mod checker;

pub use checker::{AcceptAllChecker, RuleMinimalityChecker, SingleEvaluationChecker};
