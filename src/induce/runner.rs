//! The sequential-covering driver.
//!
//! [`InductionRunner`] orchestrates the complete induction:
//! seed selection → growth → stopping check → pruning/generalization →
//! minimality check → acceptance, per approximated set, followed by
//! per-concept set pruning and final minimality filtering.

use tracing::debug;

use super::components::InductionComponents;
use super::config::InductionConfig;
use crate::error::InductionError;
use crate::rule::{Rule, RuleConditions, RuleConditionsWithApproximatedSet};
use crate::table::{ApproximatedSet, InformationTable};

/// Counters describing one induction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InductionStats {
    /// Rules in the final result.
    pub rules_accepted: usize,
    /// Candidates rejected by the minimality checker.
    pub rules_discarded: usize,
    /// Condition sets removed by per-concept set pruning.
    pub rules_removed_by_set_pruning: usize,
    /// Conditions removed by local pruning.
    pub conditions_pruned: usize,
    /// Conditions widened by generalization.
    pub conditions_generalized: usize,
}

/// Result of an induction run.
#[derive(Debug, Clone)]
pub struct InductionResult {
    /// The accepted rules, grouped by concept in input order.
    pub rules: Vec<Rule>,
    /// Run statistics.
    pub stats: InductionStats,
}

/// Executes sequential-covering rule induction.
///
/// # Usage
///
/// ```
/// use domlem::induce::{InductionConfig, InductionRunner};
/// use domlem::table::{ApproximatedSet, Attribute, InformationTable, Value};
///
/// let table = InformationTable::new(
///     vec![Attribute::gain("quality")],
///     vec![vec![Value::Int(1)], vec![Value::Int(3)]],
///     vec![Value::Int(0), Value::Int(1)],
/// ).unwrap();
/// let union = ApproximatedSet::upward_union(&table, Value::Int(1)).unwrap();
///
/// let result = InductionRunner::run(&table, &[union], &InductionConfig::default()).unwrap();
/// assert_eq!(result.rules.len(), 1);
/// ```
pub struct InductionRunner;

impl InductionRunner {
    /// Runs induction with the built-in components named by `config`.
    pub fn run(
        table: &InformationTable,
        sets: &[ApproximatedSet],
        config: &InductionConfig,
    ) -> Result<InductionResult, InductionError> {
        let components = InductionComponents::from_config(config)?;
        Self::run_with(table, sets, &components, config)
    }

    /// Runs induction with explicitly supplied components.
    ///
    /// One approximated set and one condition set are processed at a
    /// time; components are only ever handed shared references, so a
    /// caller parallelizing across independent runs must give each run
    /// its own components.
    pub fn run_with(
        table: &InformationTable,
        sets: &[ApproximatedSet],
        components: &InductionComponents,
        config: &InductionConfig,
    ) -> Result<InductionResult, InductionError> {
        config.validate()?;
        for set in sets {
            set.validate(table)?;
        }

        let mut stats = InductionStats::default();
        let mut grouped: Vec<Vec<RuleConditionsWithApproximatedSet<'_>>> =
            Vec::with_capacity(sets.len());

        for set in sets {
            debug!(
                concept = set.label(),
                positives = set.objects().len(),
                "inducing rules for concept"
            );
            let mut list: Vec<RuleConditionsWithApproximatedSet<'_>> = Vec::new();
            let mut uncovered: Vec<usize> = set.objects().to_vec();

            while let Some(&seed) = uncovered.first() {
                let mut conditions =
                    RuleConditions::new(table, set, config.allowed_negatives, seed)?;
                let mut candidates = uncovered.clone();

                while !components.checker.is_satisfied(&conditions) {
                    let condition =
                        components.generator.best_condition(&candidates, &conditions)?;
                    conditions.add_condition(condition);
                    candidates.retain(|&object| conditions.is_covered(object));
                }

                let grown = conditions.len();
                let mut conditions = components.pruner.prune(conditions);
                stats.conditions_pruned += grown - conditions.len();
                stats.conditions_generalized +=
                    components.generalizer.generalize(&mut conditions);

                let covered: Vec<usize> = conditions.covered_objects().to_vec();
                let candidate = RuleConditionsWithApproximatedSet::new(conditions);
                let accepted: Vec<&RuleConditionsWithApproximatedSet<'_>> =
                    grouped.iter().flatten().chain(list.iter()).collect();
                if components.minimality.check(&accepted, &candidate) {
                    debug!(conditions = %candidate.conditions(), seed, "accepted rule conditions");
                    list.push(candidate);
                } else {
                    // the dominating rule covers everything this one
                    // covered, so its positives are discharged anyway
                    debug!(conditions = %candidate.conditions(), seed, "discarded as non-minimal");
                    stats.rules_discarded += 1;
                }
                uncovered.retain(|object| covered.binary_search(object).is_err());
            }
            grouped.push(list);
        }

        for (index, set) in sets.iter().enumerate() {
            let entries = std::mem::take(&mut grouped[index]);
            let before = entries.len();
            let conditions_list: Vec<RuleConditions<'_>> = entries
                .into_iter()
                .map(RuleConditionsWithApproximatedSet::into_conditions)
                .collect();
            let must_stay_covered: Vec<usize> = set
                .objects()
                .iter()
                .copied()
                .filter(|&object| conditions_list.iter().any(|c| c.is_covered(object)))
                .collect();
            let kept = components
                .set_pruner
                .prune(conditions_list, &must_stay_covered);
            stats.rules_removed_by_set_pruning += before - kept.len();
            grouped[index] = kept
                .into_iter()
                .map(RuleConditionsWithApproximatedSet::new)
                .collect();
        }

        let mut accepted: Vec<RuleConditionsWithApproximatedSet<'_>> = Vec::new();
        let mut rules = Vec::new();
        for list in grouped {
            for candidate in list {
                let view: Vec<&RuleConditionsWithApproximatedSet<'_>> =
                    accepted.iter().collect();
                if components.minimality.check(&view, &candidate) {
                    let set = candidate.approximated_set();
                    rules.push(Rule::new(
                        config.rule_type,
                        set.semantics(),
                        set.limiting_decision().clone(),
                        candidate.conditions().conditions().to_vec(),
                        components.decisions.decision_conditions(set),
                    ));
                    accepted.push(candidate);
                } else {
                    stats.rules_discarded += 1;
                }
            }
        }
        stats.rules_accepted = rules.len();

        debug!(
            rules = stats.rules_accepted,
            discarded = stats.rules_discarded,
            "induction finished"
        );
        Ok(InductionResult { rules, stats })
    }
}
