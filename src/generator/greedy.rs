//! Best-condition search with lexicographic multi-evaluator scoring.

use std::cmp::Ordering;

use rayon::prelude::*;
use tracing::trace;

use super::ConditionGenerator;
use crate::error::InductionError;
use crate::measure::{ConditionAdditionEvaluator, Monotonicity};
use crate::rule::{Condition, Relation, RuleConditions, RuleSemantics};
use crate::table::{Preference, Value};

/// How the candidate-condition space is traversed.
///
/// The modes differ only in which candidates they bother to score;
/// under their stated assumptions they select the same condition the
/// exhaustive search selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSearch {
    /// Score every non-redundant (attribute, candidate object) pair.
    Exhaustive,
    /// Skip attributes already constrained by an accepted condition.
    ///
    /// Valid only when re-constraining a used attribute cannot strictly
    /// improve the rule; that property holds for the built-in measures
    /// over ordinal conditions but is a caller obligation for custom
    /// evaluators.
    SkipUsedAttributes,
    /// Sweep each attribute's distinct thresholds in nested-coverage
    /// order and stop as soon as the primary evaluator can only
    /// deteriorate.
    ///
    /// Requires every addition evaluator to declare a monotonicity;
    /// construction fails otherwise.
    MonotonicBounds,
}

/// Greedy generator returning the single best condition to append next.
///
/// Builds one candidate elementary condition per (attribute, remaining
/// candidate object) pair, skips candidates that are already present or
/// do not strictly shrink the covered set, and scores the rest with the
/// configured addition evaluators compared lexicographically: the first
/// evaluator decides, ties fall through to the next. Ties on every
/// evaluator are resolved toward the more general condition, so all
/// search modes agree on the selected condition.
pub struct GreedyConditionGenerator {
    evaluators: Vec<Box<dyn ConditionAdditionEvaluator>>,
    search: CandidateSearch,
    parallel: bool,
}

impl std::fmt::Debug for GreedyConditionGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GreedyConditionGenerator")
            .field(
                "evaluators",
                &self.evaluators.iter().map(|e| e.name()).collect::<Vec<_>>(),
            )
            .field("search", &self.search)
            .field("parallel", &self.parallel)
            .finish()
    }
}

type Scored = (Condition, Vec<f64>);

impl GreedyConditionGenerator {
    /// Creates a generator.
    ///
    /// Fails when `evaluators` is empty, or when `search` is
    /// [`CandidateSearch::MonotonicBounds`] and some evaluator does not
    /// declare a monotonicity.
    pub fn new(
        evaluators: Vec<Box<dyn ConditionAdditionEvaluator>>,
        search: CandidateSearch,
    ) -> Result<Self, InductionError> {
        if evaluators.is_empty() {
            return Err(InductionError::EmptyComponent {
                component: "condition generator",
                element: "addition evaluator",
            });
        }
        if search == CandidateSearch::MonotonicBounds {
            if let Some(evaluator) = evaluators.iter().find(|e| e.monotonicity().is_none()) {
                return Err(InductionError::InvalidConfiguration {
                    reason: format!(
                        "monotonic-bounds search requires monotonic evaluators, \
                         but '{}' declares none",
                        evaluator.name()
                    ),
                });
            }
        }
        Ok(Self {
            evaluators,
            search,
            parallel: false,
        })
    }

    /// Enables rayon-parallel per-attribute scoring. The reduction over
    /// attributes stays sequential, so the selected condition does not
    /// depend on scheduling.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Lexicographic comparison of two score vectors; `Greater` means
    /// `a` wins.
    fn confront(&self, a: &[f64], b: &[f64]) -> Ordering {
        for (i, evaluator) in self.evaluators.iter().enumerate() {
            match evaluator.measure_type().compare(a[i], b[i]) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }
        Ordering::Equal
    }

    /// Whether `challenger` should replace `best`: strictly better
    /// lexicographically, or an exact tie broken toward generality.
    fn supersedes(&self, challenger: &Scored, best: &Scored) -> bool {
        match self.confront(&challenger.1, &best.1) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => challenger.0.at_most_as_general_as(&best.0) == Some(false),
        }
    }

    fn relation_for(preference: Preference, semantics: RuleSemantics) -> Relation {
        match (preference, semantics) {
            (Preference::None, _) | (_, RuleSemantics::Equal) => Relation::Equal,
            (Preference::Gain, RuleSemantics::AtLeast) => Relation::AtLeast,
            (Preference::Gain, RuleSemantics::AtMost) => Relation::AtMost,
            (Preference::Cost, RuleSemantics::AtLeast) => Relation::AtMost,
            (Preference::Cost, RuleSemantics::AtMost) => Relation::AtLeast,
        }
    }

    /// Distinct candidate limits on `attribute`, ordered from most
    /// general to most restrictive for ordinal relations.
    fn candidate_limits(
        attribute: usize,
        relation: Relation,
        candidates: &[usize],
        conditions: &RuleConditions<'_>,
    ) -> Vec<Value> {
        let mut limits: Vec<Value> = Vec::new();
        for &object in candidates {
            if let Ok(value) = conditions.table().evaluation(object, attribute) {
                if !limits.contains(value) {
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

    /// Best scored condition on one attribute, or `None` when no
    /// candidate on this attribute strictly shrinks the covered set.
    fn best_for_attribute(
        &self,
        attribute: usize,
        candidates: &[usize],
        conditions: &RuleConditions<'_>,
    ) -> Option<Scored> {
        let preference = conditions.table().attribute(attribute).ok()?.preference;
        let relation =
            Self::relation_for(preference, conditions.approximated_set().semantics());
        let mut limits = Self::candidate_limits(attribute, relation, candidates, conditions);

        // Along an ordinal sweep the covered sets are nested, so a
        // monotonic primary evaluator never reverses direction. Sweep
        // from the end where it is best and stop at the first strict
        // deterioration.
        let bounded = self.search == CandidateSearch::MonotonicBounds
            && relation != Relation::Equal;
        if bounded
            && self.evaluators[0].monotonicity()
                == Some(Monotonicity::DeterioratesWithCoverage)
        {
            limits.reverse();
        }

        let covered_before = conditions.covered_objects().len();
        let primary_type = self.evaluators[0].measure_type();
        let mut best: Option<Scored> = None;

        for limit in limits {
            let condition = Condition::new(attribute, relation, limit);
            if conditions.contains(&condition) {
                continue;
            }
            if conditions.covered_with(&condition).len() == covered_before {
                continue;
            }
            let scores: Vec<f64> = self
                .evaluators
                .iter()
                .map(|e| e.evaluate_with_condition(conditions, &condition))
                .collect();
            match &best {
                None => best = Some((condition, scores)),
                Some(current) => {
                    if bounded && primary_type.compare(scores[0], current.1[0]) == Ordering::Less
                    {
                        break;
                    }
                    let challenger = (condition, scores);
                    if self.supersedes(&challenger, current) {
                        best = Some(challenger);
                    }
                }
            }
        }
        best
    }
}

impl ConditionGenerator for GreedyConditionGenerator {
    fn best_condition(
        &self,
        candidates: &[usize],
        conditions: &RuleConditions<'_>,
    ) -> Result<Condition, InductionError> {
        if candidates.is_empty() {
            return Err(InductionError::NoCandidateObjects);
        }

        let attributes: Vec<usize> = (0..conditions.table().attribute_count())
            .filter(|&attribute| {
                self.search != CandidateSearch::SkipUsedAttributes
                    || !conditions.constrains_attribute(attribute)
            })
            .collect();

        let per_attribute: Vec<Option<Scored>> = if self.parallel {
            attributes
                .par_iter()
                .map(|&attribute| self.best_for_attribute(attribute, candidates, conditions))
                .collect()
        } else {
            attributes
                .iter()
                .map(|&attribute| self.best_for_attribute(attribute, candidates, conditions))
                .collect()
        };

        let mut best: Option<Scored> = None;
        for scored in per_attribute.into_iter().flatten() {
            match &best {
                None => best = Some(scored),
                Some(current) => {
                    if self.supersedes(&scored, current) {
                        best = Some(scored);
                    }
                }
            }
        }

        match best {
            Some((condition, scores)) => {
                trace!(%condition, ?scores, "selected condition");
                Ok(condition)
            }
            None => Err(InductionError::CannotSeparate {
                concept: conditions.approximated_set().label().to_string(),
                seed: conditions.seed(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::{Coverage, EpsilonConsistency, MeasureType};
    use crate::table::{AllowedNegatives, ApproximatedSet, Attribute, InformationTable};

    fn fixture() -> (InformationTable, ApproximatedSet) {
        // gain attribute: 1, 2, 5, 6; positives are objects 2 and 3
        let table = InformationTable::new(
            vec![Attribute::gain("a1")],
            vec![
                vec![Value::Int(1)],
                vec![Value::Int(2)],
                vec![Value::Int(5)],
                vec![Value::Int(6)],
            ],
            vec![Value::Int(0), Value::Int(0), Value::Int(1), Value::Int(1)],
        )
        .unwrap();
        let set = ApproximatedSet::new(
            "at least 1",
            RuleSemantics::AtLeast,
            Value::Int(1),
            vec![2, 3],
        );
        (table, set)
    }

    fn default_generator(search: CandidateSearch) -> GreedyConditionGenerator {
        GreedyConditionGenerator::new(
            vec![Box::new(EpsilonConsistency), Box::new(Coverage)],
            search,
        )
        .unwrap()
    }

    #[test]
    fn test_empty_evaluators_rejected() {
        let err =
            GreedyConditionGenerator::new(Vec::new(), CandidateSearch::Exhaustive).unwrap_err();
        assert!(matches!(err, InductionError::EmptyComponent { .. }));
    }

    #[test]
    fn test_empty_candidates_rejected() {
        let (table, set) = fixture();
        let rc = RuleConditions::new(&table, &set, AllowedNegatives::PositiveRegion, 2).unwrap();
        let generator = default_generator(CandidateSearch::Exhaustive);
        assert!(matches!(
            generator.best_condition(&[], &rc),
            Err(InductionError::NoCandidateObjects)
        ));
    }

    #[test]
    fn test_selects_consistent_and_widest_condition() {
        let (table, set) = fixture();
        let rc = RuleConditions::new(&table, &set, AllowedNegatives::PositiveRegion, 2).unwrap();
        let generator = default_generator(CandidateSearch::Exhaustive);
        let condition = generator.best_condition(&[2, 3], &rc).unwrap();
        // ">= 5" excludes both negatives and keeps both positives;
        // ">= 6" is equally consistent but covers one positive fewer
        assert_eq!(condition, Condition::new(0, Relation::AtLeast, Value::Int(5)));
    }

    #[test]
    fn test_lexicographic_tie_breaking() {
        // E1 (gain) ties on purpose; E2 (cost) prefers the lower score,
        // which is wired to the more restrictive limit here
        struct Flat;
        impl ConditionAdditionEvaluator for Flat {
            fn name(&self) -> &str {
                "flat"
            }
            fn measure_type(&self) -> MeasureType {
                MeasureType::Gain
            }
            fn evaluate_with_condition(
                &self,
                _conditions: &RuleConditions<'_>,
                _condition: &Condition,
            ) -> f64 {
                0.8
            }
        }
        struct LimitCost;
        impl ConditionAdditionEvaluator for LimitCost {
            fn name(&self) -> &str {
                "limit-cost"
            }
            fn measure_type(&self) -> MeasureType {
                MeasureType::Cost
            }
            fn evaluate_with_condition(
                &self,
                _conditions: &RuleConditions<'_>,
                condition: &Condition,
            ) -> f64 {
                match condition.limit() {
                    Value::Int(5) => 0.1,
                    _ => 0.3,
                }
            }
        }

        let (table, set) = fixture();
        let rc = RuleConditions::new(&table, &set, AllowedNegatives::PositiveRegion, 2).unwrap();
        let generator = GreedyConditionGenerator::new(
            vec![Box::new(Flat), Box::new(LimitCost)],
            CandidateSearch::Exhaustive,
        )
        .unwrap();
        let condition = generator.best_condition(&[2, 3], &rc).unwrap();
        assert_eq!(condition.limit(), &Value::Int(5));
    }

    #[test]
    fn test_skip_used_attributes() {
        // second attribute separates nothing better, but is the only
        // one left once a1 is constrained
        let table = InformationTable::new(
            vec![Attribute::gain("a1"), Attribute::gain("a2")],
            vec![
                vec![Value::Int(1), Value::Int(1)],
                vec![Value::Int(2), Value::Int(4)],
                vec![Value::Int(5), Value::Int(2)],
                vec![Value::Int(6), Value::Int(3)],
            ],
            vec![Value::Int(0), Value::Int(0), Value::Int(1), Value::Int(1)],
        )
        .unwrap();
        let set = ApproximatedSet::new(
            "at least 1",
            RuleSemantics::AtLeast,
            Value::Int(1),
            vec![2, 3],
        );
        let mut rc =
            RuleConditions::new(&table, &set, AllowedNegatives::PositiveRegion, 2).unwrap();
        rc.add_condition(Condition::new(0, Relation::AtLeast, Value::Int(2)));

        let generator = default_generator(CandidateSearch::SkipUsedAttributes);
        let condition = generator.best_condition(&[2, 3], &rc).unwrap();
        assert_eq!(condition.attribute(), 1);
    }

    #[test]
    fn test_monotonic_bounds_requires_declared_monotonicity() {
        struct Undeclared;
        impl ConditionAdditionEvaluator for Undeclared {
            fn name(&self) -> &str {
                "undeclared"
            }
            fn measure_type(&self) -> MeasureType {
                MeasureType::Gain
            }
            fn evaluate_with_condition(
                &self,
                _conditions: &RuleConditions<'_>,
                _condition: &Condition,
            ) -> f64 {
                0.0
            }
        }
        let err = GreedyConditionGenerator::new(
            vec![Box::new(Undeclared)],
            CandidateSearch::MonotonicBounds,
        )
        .unwrap_err();
        assert!(matches!(err, InductionError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_monotonic_bounds_matches_exhaustive() {
        let table = InformationTable::new(
            vec![Attribute::gain("a1"), Attribute::cost("a2")],
            vec![
                vec![Value::Int(1), Value::Int(9)],
                vec![Value::Int(2), Value::Int(8)],
                vec![Value::Int(3), Value::Int(4)],
                vec![Value::Int(5), Value::Int(3)],
                vec![Value::Int(6), Value::Int(7)],
            ],
            vec![
                Value::Int(0),
                Value::Int(0),
                Value::Int(1),
                Value::Int(1),
                Value::Int(1),
            ],
        )
        .unwrap();
        let set = ApproximatedSet::new(
            "at least 1",
            RuleSemantics::AtLeast,
            Value::Int(1),
            vec![2, 3, 4],
        );
        let rc = RuleConditions::new(&table, &set, AllowedNegatives::PositiveRegion, 2).unwrap();

        let exhaustive = default_generator(CandidateSearch::Exhaustive)
            .best_condition(&[2, 3, 4], &rc)
            .unwrap();
        let bounded = default_generator(CandidateSearch::MonotonicBounds)
            .best_condition(&[2, 3, 4], &rc)
            .unwrap();
        assert_eq!(exhaustive, bounded);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let (table, set) = fixture();
        let rc = RuleConditions::new(&table, &set, AllowedNegatives::PositiveRegion, 2).unwrap();
        let sequential = default_generator(CandidateSearch::Exhaustive)
            .best_condition(&[2, 3], &rc)
            .unwrap();
        let parallel = default_generator(CandidateSearch::Exhaustive)
            .with_parallel(true)
            .best_condition(&[2, 3], &rc)
            .unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_cost_attribute_flips_relation() {
        let table = InformationTable::new(
            vec![Attribute::cost("price")],
            vec![vec![Value::Int(9)], vec![Value::Int(3)]],
            vec![Value::Int(0), Value::Int(1)],
        )
        .unwrap();
        let set = ApproximatedSet::new(
            "at least 1",
            RuleSemantics::AtLeast,
            Value::Int(1),
            vec![1],
        );
        let rc = RuleConditions::new(&table, &set, AllowedNegatives::PositiveRegion, 1).unwrap();
        let condition = default_generator(CandidateSearch::Exhaustive)
            .best_condition(&[1], &rc)
            .unwrap();
        assert_eq!(condition.relation(), Relation::AtMost);
        assert_eq!(condition.limit(), &Value::Int(3));
    }

    #[test]
    fn test_cannot_separate_identical_objects() {
        let table = InformationTable::new(
            vec![Attribute::gain("a1")],
            vec![vec![Value::Int(4)], vec![Value::Int(4)]],
            vec![Value::Int(1), Value::Int(0)],
        )
        .unwrap();
        let set = ApproximatedSet::new(
            "at least 1",
            RuleSemantics::AtLeast,
            Value::Int(1),
            vec![0],
        );
        let rc = RuleConditions::new(&table, &set, AllowedNegatives::Approximation, 0).unwrap();
        let err = default_generator(CandidateSearch::Exhaustive)
            .best_condition(&[0], &rc)
            .unwrap_err();
        assert!(matches!(err, InductionError::CannotSeparate { seed: 0, .. }));
    }

    #[test]
    fn test_nominal_attribute_produces_equality_condition() {
        let table = InformationTable::new(
            vec![Attribute::nominal("color")],
            vec![
                vec![Value::from("red")],
                vec![Value::from("blue")],
                vec![Value::from("red")],
            ],
            vec![Value::Int(1), Value::Int(0), Value::Int(1)],
        )
        .unwrap();
        let set = ApproximatedSet::new(
            "at least 1",
            RuleSemantics::AtLeast,
            Value::Int(1),
            vec![0, 2],
        );
        let rc = RuleConditions::new(&table, &set, AllowedNegatives::PositiveRegion, 0).unwrap();
        let condition = default_generator(CandidateSearch::Exhaustive)
            .best_condition(&[0, 2], &rc)
            .unwrap();
        assert_eq!(condition.relation(), Relation::Equal);
        assert_eq!(condition.limit(), &Value::from("red"));
    }
}
