//! Conditions, the mutable condition accumulator, and finished rules.
//!
//! An elementary [`Condition`] is an immutable attribute–relation–limit
//! predicate. During the covering search conditions accumulate in a
//! [`RuleConditions`], which maintains the invariant that its covered
//! set is exactly the intersection of the per-condition satisfaction
//! sets. Accepted condition sets are wrapped into
//! [`RuleConditionsWithApproximatedSet`] for dominance comparisons and
//! finally frozen into immutable [`Rule`]s.
//!
//! # Key Types
//!
//! - [`Condition`] / [`Relation`]: elementary predicates and their generality order
//! - [`RuleConditions`]: the mutable conjunction with coverage bookkeeping
//! - [`Rule`] / [`RuleType`] / [`RuleSemantics`]: the immutable result
//! - [`RuleCoverageInformation`]: on-demand coverage snapshots

mod condition;
mod conditions;
mod coverage;
#[allow(clippy::module_inception)]
mod rule;

pub use condition::{Condition, Relation};
pub use conditions::{RuleConditions, RuleConditionsWithApproximatedSet};
pub use coverage::RuleCoverageInformation;
pub use rule::{Rule, RuleSemantics, RuleType};
