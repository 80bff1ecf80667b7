//! Post-hoc widening of ordinal conditions.

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::debug;

use crate::rule::{Condition, Relation, RuleConditions};
use crate::stopping::StoppingConditionChecker;
use crate::table::Value;

/// Widens individual conditions after the fact, when later-added
/// conditions already exclude the negative objects that forced the
/// earlier, tighter threshold.
pub trait RuleConditionsGeneralizer: Send + Sync {
    /// Widens conditions in place and returns how many were widened.
    fn generalize(&self, conditions: &mut RuleConditions<'_>) -> usize;
}

/// Relaxes each at-least/at-most condition toward the least restrictive
/// limit under which no previously excluded negative object becomes
/// covered and the stopping condition stays satisfied.
///
/// Candidate limits are scanned from the most general end, so the first
/// admissible limit is committed. Equality conditions are never widened.
pub struct ThresholdGeneralizer {
    checker: Arc<dyn StoppingConditionChecker>,
}

impl ThresholdGeneralizer {
    /// Creates a generalizer guarding widenings with `checker`.
    pub fn new(checker: Arc<dyn StoppingConditionChecker>) -> Self {
        Self { checker }
    }

    /// Distinct limits of `attribute` over the whole table that are
    /// strictly more general than `current`, most general first.
    fn wider_limits(
        conditions: &RuleConditions<'_>,
        attribute: usize,
        relation: Relation,
        current: &Value,
    ) -> Vec<Value> {
        let keep = |value: &Value| match relation {
            Relation::AtLeast => value.compare(current) == Some(Ordering::Less),
            Relation::AtMost => value.compare(current) == Some(Ordering::Greater),
            Relation::Equal => false,
        };
        let mut limits: Vec<Value> = Vec::new();
        for object in 0..conditions.table().object_count() {
            if let Ok(value) = conditions.table().evaluation(object, attribute) {
                if keep(value) && !limits.contains(value) {
                    limits.push(value.clone());
                }
            }
        }
        match relation {
            Relation::AtLeast => {
                limits.sort_by(|a, b| a.compare(b).unwrap_or(Ordering::Equal));
            }
            Relation::AtMost => {
                limits.sort_by(|a, b| b.compare(a).unwrap_or(Ordering::Equal));
            }
            Relation::Equal => {}
        }
        limits
    }

    fn try_widen(&self, conditions: &mut RuleConditions<'_>, index: usize) -> bool {
        let current = match conditions.condition(index) {
            Ok(condition) => condition.clone(),
            Err(_) => return false,
        };
        if current.relation() == Relation::Equal {
            return false;
        }
        let limits = Self::wider_limits(
            conditions,
            current.attribute(),
            current.relation(),
            current.limit(),
        );
        for limit in limits {
            let wider = Condition::new(current.attribute(), current.relation(), limit);
            let mut trial = conditions.clone();
            if trial.replace_condition(index, wider).is_err() {
                return false;
            }
            let admits_new_negative = trial
                .covered_objects()
                .iter()
                .any(|&object| trial.is_negative(object) && !conditions.is_covered(object));
            if !admits_new_negative && self.checker.is_satisfied(&trial) {
                *conditions = trial;
                return true;
            }
        }
        false
    }
}

impl RuleConditionsGeneralizer for ThresholdGeneralizer {
    fn generalize(&self, conditions: &mut RuleConditions<'_>) -> usize {
        let mut widened = 0;
        for index in 0..conditions.len() {
            if self.try_widen(conditions, index) {
                widened += 1;
            }
        }
        if widened > 0 {
            debug!(widened, "generalized conditions");
        }
        widened
    }
}

/// Generalizer that widens nothing, for calibration and testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopGeneralizer;

impl RuleConditionsGeneralizer for NoopGeneralizer {
    fn generalize(&self, _conditions: &mut RuleConditions<'_>) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::EpsilonConsistency;
    use crate::rule::RuleSemantics;
    use crate::stopping::EvaluationAndCoverageChecker;
    use crate::table::{AllowedNegatives, ApproximatedSet, Attribute, InformationTable, Value};

    fn checker() -> Arc<dyn StoppingConditionChecker> {
        Arc::new(
            EvaluationAndCoverageChecker::new(Arc::new(EpsilonConsistency), 0.0).unwrap(),
        )
    }

    #[test]
    fn test_widens_when_later_condition_blocks_the_negatives() {
        // the negative object 0 is excluded by the a2 condition, so the
        // tight a1 threshold can relax to its most general useful value
        let table = InformationTable::new(
            vec![Attribute::gain("a1"), Attribute::gain("a2")],
            vec![
                vec![Value::Int(3), Value::Int(1)],
                vec![Value::Int(4), Value::Int(5)],
                vec![Value::Int(6), Value::Int(7)],
            ],
            vec![Value::Int(0), Value::Int(1), Value::Int(1)],
        )
        .unwrap();
        let set = ApproximatedSet::new(
            "at least 1",
            RuleSemantics::AtLeast,
            Value::Int(1),
            vec![1, 2],
        );
        let mut rc =
            RuleConditions::new(&table, &set, AllowedNegatives::Approximation, 2).unwrap();
        rc.add_condition(Condition::new(0, Relation::AtLeast, Value::Int(6)));
        rc.add_condition(Condition::new(1, Relation::AtLeast, Value::Int(5)));
        assert_eq!(rc.covered_objects(), &[2]);

        let widened = ThresholdGeneralizer::new(checker()).generalize(&mut rc);
        assert_eq!(widened, 1);
        assert_eq!(
            rc.conditions()[0],
            Condition::new(0, Relation::AtLeast, Value::Int(3))
        );
        // widening recovered the second positive object
        assert_eq!(rc.covered_objects(), &[1, 2]);
    }

    #[test]
    fn test_keeps_threshold_when_widening_admits_a_negative() {
        let table = InformationTable::new(
            vec![Attribute::gain("a1")],
            vec![vec![Value::Int(5)], vec![Value::Int(4)], vec![Value::Int(6)]],
            vec![Value::Int(0), Value::Int(1), Value::Int(1)],
        )
        .unwrap();
        let set = ApproximatedSet::new(
            "at least 1",
            RuleSemantics::AtLeast,
            Value::Int(1),
            vec![1, 2],
        );
        let mut rc =
            RuleConditions::new(&table, &set, AllowedNegatives::Approximation, 2).unwrap();
        rc.add_condition(Condition::new(0, Relation::AtLeast, Value::Int(6)));

        // any wider limit (4 or 5) would cover the negative object 0
        let widened = ThresholdGeneralizer::new(checker()).generalize(&mut rc);
        assert_eq!(widened, 0);
        assert_eq!(
            rc.conditions()[0],
            Condition::new(0, Relation::AtLeast, Value::Int(6))
        );
    }

    #[test]
    fn test_noop_generalizer_returns_zero() {
        let table = InformationTable::new(
            vec![Attribute::gain("a1")],
            vec![vec![Value::Int(5)]],
            vec![Value::Int(1)],
        )
        .unwrap();
        let set = ApproximatedSet::new(
            "at least 1",
            RuleSemantics::AtLeast,
            Value::Int(1),
            vec![0],
        );
        let mut rc =
            RuleConditions::new(&table, &set, AllowedNegatives::Approximation, 0).unwrap();
        rc.add_condition(Condition::new(0, Relation::AtLeast, Value::Int(5)));
        let before = rc.conditions().to_vec();
        assert_eq!(NoopGeneralizer.generalize(&mut rc), 0);
        assert_eq!(rc.conditions(), before.as_slice());
    }
}
