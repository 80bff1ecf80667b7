//! Local pruning, generalization, and per-concept set pruning.
//!
//! Three post-processing stages act on accepted condition sets:
//!
//! - [`RuleConditionsPruner`]: drop individually redundant conditions
//!   while the stopping condition stays satisfied (local minimality)
//! - [`RuleConditionsGeneralizer`]: widen ordinal thresholds that later
//!   conditions made needlessly tight
//! - [`RuleConditionsSetPruner`]: drop whole redundant condition sets
//!   from one concept's candidate list (global minimality within one
//!   concept)
//!
//! Each stage has a no-op variant for calibration and testing.

mod generalize;
mod local;
mod set;

pub use generalize::{NoopGeneralizer, RuleConditionsGeneralizer, ThresholdGeneralizer};
pub use local::{NoopPruner, PruningOrder, RuleConditionsPruner, SequentialPruner};
pub use set::{EvaluationsSetPruner, NoopSetPruner, RuleConditionsSetPruner};
