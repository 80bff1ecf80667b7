//! Local pruning of one condition set.

use std::sync::Arc;

use tracing::debug;

use crate::rule::{Condition, RuleConditions};
use crate::stopping::StoppingConditionChecker;

/// Removes redundant conditions from one condition set while the given
/// stopping condition stays satisfied (local minimality).
pub trait RuleConditionsPruner: Send + Sync {
    /// Returns the pruned condition set.
    fn prune<'a>(&self, conditions: RuleConditions<'a>) -> RuleConditions<'a>;
}

/// Traversal order of removal attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PruningOrder {
    /// Oldest condition first (insertion order).
    Fifo,
    /// Attribute declaration order; insertion order within an attribute.
    AttributeOrder,
}

/// Removes conditions one at a time in the configured traversal order.
///
/// Each removal is tested by re-running the stopping checker on the
/// hypothetical reduced set; a confirmed removal is permanent.
pub struct SequentialPruner {
    order: PruningOrder,
    checker: Arc<dyn StoppingConditionChecker>,
}

impl SequentialPruner {
    /// Creates a pruner guarding removals with `checker`.
    pub fn new(order: PruningOrder, checker: Arc<dyn StoppingConditionChecker>) -> Self {
        Self { order, checker }
    }

    fn try_remove<'a>(&self, conditions: &mut RuleConditions<'a>, index: usize) -> bool {
        let mut trial = conditions.clone();
        if trial.remove_condition(index).is_ok() && self.checker.is_satisfied(&trial) {
            *conditions = trial;
            true
        } else {
            false
        }
    }
}

impl RuleConditionsPruner for SequentialPruner {
    fn prune<'a>(&self, conditions: RuleConditions<'a>) -> RuleConditions<'a> {
        let mut conditions = conditions;
        let before = conditions.len();
        match self.order {
            PruningOrder::Fifo => {
                let mut index = 0;
                while index < conditions.len() {
                    if !self.try_remove(&mut conditions, index) {
                        index += 1;
                    }
                }
            }
            PruningOrder::AttributeOrder => {
                let mut order: Vec<Condition> = conditions.conditions().to_vec();
                order.sort_by_key(|condition| condition.attribute());
                for target in order {
                    if let Some(position) =
                        conditions.conditions().iter().position(|c| *c == target)
                    {
                        self.try_remove(&mut conditions, position);
                    }
                }
            }
        }
        if conditions.len() < before {
            debug!(
                removed = before - conditions.len(),
                remaining = conditions.len(),
                "pruned conditions"
            );
        }
        conditions
    }
}

/// Pruner that removes nothing, for calibration and testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPruner;

impl RuleConditionsPruner for NoopPruner {
    fn prune<'a>(&self, conditions: RuleConditions<'a>) -> RuleConditions<'a> {
        conditions
    }
}
