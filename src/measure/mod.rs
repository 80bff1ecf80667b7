//! The evaluator family: measures scoring condition sets.
//!
//! Three trait-based evaluation angles share one typing discipline:
//!
//! - [`ConditionAdditionEvaluator`]: score a hypothetical extension
//! - [`ConditionRemovalEvaluator`]: score a hypothetical reduction
//! - [`RuleConditionsEvaluator`]: score the conditions as they stand
//!
//! Every evaluator declares a [`MeasureType`] (gain or cost) that is
//! the single source of truth for comparisons and threshold tests, and
//! may declare a [`Monotonicity`] over nested coverage sets, which the
//! condition generator can exploit to reduce its search space.
//!
//! # Built-in measures
//!
//! - [`EpsilonConsistency`], [`EpsilonPrimeConsistency`]: cost-type
//!   consistency measures of the variable-consistency family
//! - [`Coverage`]: gain-type count of covered positive objects
//!
//! # References
//!
//! - Błaszczyński, Greco, Słowiński, Szeląg (2009), *Monotonic
//!   variable consistency rough set approaches*
//! - Błaszczyński, Słowiński, Szeląg (2011), *Sequential covering rule
//!   induction algorithm for variable consistency rough set approaches*

mod consistency;
mod coverage;
mod select;
mod types;

pub use consistency::{EpsilonConsistency, EpsilonPrimeConsistency};
pub use coverage::Coverage;
pub use select::Measure;
pub use types::{
    ConditionAdditionEvaluator, ConditionRemovalEvaluator, MeasureType, Monotonicity,
    RuleConditionsEvaluator,
};
