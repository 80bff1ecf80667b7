//! Global pruning of a candidate condition-set list for one concept.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::InductionError;
use crate::measure::RuleConditionsEvaluator;
use crate::rule::RuleConditions;

/// Removes whole redundant condition sets from the candidate list built
/// for one approximated set, while the remaining entries still jointly
/// cover every object that must stay covered.
pub trait RuleConditionsSetPruner: Send + Sync {
    /// Returns the reduced list, in the original declaration order.
    fn prune<'a>(
        &self,
        conditions_list: Vec<RuleConditions<'a>>,
        must_stay_covered: &[usize],
    ) -> Vec<RuleConditions<'a>>;
}

/// Greedy set pruner ordered by evaluations.
///
/// While any entry is removable (every must-stay object it covers is
/// covered by at least one other remaining entry), the worst entry is
/// removed: worst by the configured evaluators compared
/// lexicographically, then the entry with more conditions (the more
/// specific one), then the later-declared one.
pub struct EvaluationsSetPruner {
    evaluators: Vec<Arc<dyn RuleConditionsEvaluator>>,
}

impl EvaluationsSetPruner {
    /// Creates a set pruner. Fails when `evaluators` is empty.
    pub fn new(
        evaluators: Vec<Arc<dyn RuleConditionsEvaluator>>,
    ) -> Result<Self, InductionError> {
        if evaluators.is_empty() {
            return Err(InductionError::EmptyComponent {
                component: "set pruner",
                element: "rule-conditions evaluator",
            });
        }
        Ok(Self { evaluators })
    }

    /// `Greater` means `a` should be removed before `b`.
    fn removal_order(&self, a: &RuleConditions<'_>, b: &RuleConditions<'_>) -> Ordering {
        for evaluator in &self.evaluators {
            match evaluator.confront(a, b) {
                // worse-evaluated entries go first
                Ordering::Less => return Ordering::Greater,
                Ordering::Greater => return Ordering::Less,
                Ordering::Equal => {}
            }
        }
        a.len().cmp(&b.len())
    }
}

impl RuleConditionsSetPruner for EvaluationsSetPruner {
    fn prune<'a>(
        &self,
        conditions_list: Vec<RuleConditions<'a>>,
        must_stay_covered: &[usize],
    ) -> Vec<RuleConditions<'a>> {
        let entry_count = conditions_list.len();
        // which must-stay objects each entry covers
        let covers: Vec<Vec<usize>> = conditions_list
            .iter()
            .map(|conditions| {
                must_stay_covered
                    .iter()
                    .copied()
                    .filter(|&object| conditions.is_covered(object))
                    .collect()
            })
            .collect();
        let mut cover_count: HashMap<usize, usize> = HashMap::new();
        for covered in &covers {
            for &object in covered {
                *cover_count.entry(object).or_insert(0) += 1;
            }
        }

        let mut alive = vec![true; entry_count];
        loop {
            let removable: Vec<usize> = (0..entry_count)
                .filter(|&i| {
                    alive[i]
                        && covers[i]
                            .iter()
                            .all(|object| cover_count.get(object).copied().unwrap_or(0) >= 2)
                })
                .collect();
            let Some((&first, rest)) = removable.split_first() else {
                break;
            };
            let mut victim = first;
            for &i in rest {
                // ties fall to the later-declared entry
                if self.removal_order(&conditions_list[i], &conditions_list[victim])
                    != Ordering::Less
                {
                    victim = i;
                }
            }
            alive[victim] = false;
            for object in &covers[victim] {
                if let Some(count) = cover_count.get_mut(object) {
                    *count -= 1;
                }
            }
        }

        let kept: Vec<RuleConditions<'a>> = conditions_list
            .into_iter()
            .zip(alive)
            .filter_map(|(conditions, keep)| keep.then_some(conditions))
            .collect();
        if kept.len() < entry_count {
            debug!(
                removed = entry_count - kept.len(),
                remaining = kept.len(),
                "pruned condition-set list"
            );
        }
        kept
    }
}

/// Set pruner that removes nothing, for calibration and testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSetPruner;

impl RuleConditionsSetPruner for NoopSetPruner {
    fn prune<'a>(
        &self,
        conditions_list: Vec<RuleConditions<'a>>,
        _must_stay_covered: &[usize],
    ) -> Vec<RuleConditions<'a>> {
        conditions_list
    }
}
