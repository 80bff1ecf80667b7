//! Strategy wiring for one induction run.

use std::sync::Arc;

use super::config::{InductionConfig, MinimalityStrategy, PruningStrategy};
use crate::error::InductionError;
use crate::generator::{ConditionGenerator, GreedyConditionGenerator};
use crate::measure::Measure;
use crate::minimality::{AcceptAllChecker, RuleMinimalityChecker, SingleEvaluationChecker};
use crate::prune::{
    EvaluationsSetPruner, NoopGeneralizer, NoopPruner, NoopSetPruner, PruningOrder,
    RuleConditionsGeneralizer, RuleConditionsPruner, RuleConditionsSetPruner,
    SequentialPruner, ThresholdGeneralizer,
};
use crate::rule::Condition;
use crate::stopping::{EvaluationAndCoverageChecker, StoppingConditionChecker};
use crate::table::ApproximatedSet;

/// Maps an approximated set to the decision condition(s) placed on a
/// rule's right-hand side.
pub trait RuleDecisionsProvider: Send + Sync {
    /// The OR-connected decision conditions for a rule describing `set`.
    fn decision_conditions(&self, set: &ApproximatedSet) -> Vec<Condition>;
}

/// Default provider: one decision condition built from the set's
/// semantics and limiting decision value, addressing the decision
/// column (attribute index 0 on the right-hand side).
#[derive(Debug, Clone, Copy, Default)]
pub struct LimitingDecisionProvider;

impl RuleDecisionsProvider for LimitingDecisionProvider {
    fn decision_conditions(&self, set: &ApproximatedSet) -> Vec<Condition> {
        vec![Condition::new(
            0,
            set.semantics().relation(),
            set.limiting_decision().clone(),
        )]
    }
}

/// The pluggable strategies of one induction run, bundled.
///
/// [`from_config`](Self::from_config) wires the built-in defaults; a
/// caller with custom trait implementations fills the fields directly.
/// Every component is injected fully constructed, so there is no
/// late-bound evaluation context to misuse.
pub struct InductionComponents {
    /// Proposes the next condition during growth.
    pub generator: Box<dyn ConditionGenerator>,
    /// Decides when a condition set is acceptable.
    pub checker: Arc<dyn StoppingConditionChecker>,
    /// Locally prunes accepted condition sets.
    pub pruner: Box<dyn RuleConditionsPruner>,
    /// Widens thresholds after pruning.
    pub generalizer: Box<dyn RuleConditionsGeneralizer>,
    /// Globally prunes each concept's candidate list.
    pub set_pruner: Box<dyn RuleConditionsSetPruner>,
    /// Gates admission into the accepted rule set.
    pub minimality: Box<dyn RuleMinimalityChecker>,
    /// Supplies rule right-hand sides.
    pub decisions: Box<dyn RuleDecisionsProvider>,
}

impl InductionComponents {
    /// Wires the built-in strategies named by `config`.
    pub fn from_config(config: &InductionConfig) -> Result<Self, InductionError> {
        config.validate()?;

        let evaluators = config
            .addition_measures
            .iter()
            .map(|measure| measure.addition_evaluator())
            .collect();
        let generator = GreedyConditionGenerator::new(evaluators, config.candidate_search)?
            .with_parallel(config.parallel);

        let checker: Arc<dyn StoppingConditionChecker> =
            Arc::new(EvaluationAndCoverageChecker::new(
                config.rule_measure.rule_conditions_evaluator(),
                config.consistency_threshold,
            )?);

        let pruner: Box<dyn RuleConditionsPruner> = match config.pruning {
            PruningStrategy::Fifo => Box::new(SequentialPruner::new(
                PruningOrder::Fifo,
                Arc::clone(&checker),
            )),
            PruningStrategy::AttributeOrder => Box::new(SequentialPruner::new(
                PruningOrder::AttributeOrder,
                Arc::clone(&checker),
            )),
            PruningStrategy::None => Box::new(NoopPruner),
        };

        let generalizer: Box<dyn RuleConditionsGeneralizer> = if config.generalization {
            Box::new(ThresholdGeneralizer::new(Arc::clone(&checker)))
        } else {
            Box::new(NoopGeneralizer)
        };

        let set_pruner: Box<dyn RuleConditionsSetPruner> = if config.set_pruning {
            Box::new(EvaluationsSetPruner::new(vec![
                config.rule_measure.rule_conditions_evaluator(),
                Measure::Coverage.rule_conditions_evaluator(),
            ])?)
        } else {
            Box::new(NoopSetPruner)
        };

        let minimality: Box<dyn RuleMinimalityChecker> = match config.minimality {
            MinimalityStrategy::SingleEvaluation => Box::new(SingleEvaluationChecker::new(
                config.rule_measure.rule_conditions_evaluator(),
            )),
            MinimalityStrategy::AcceptAll => Box::new(AcceptAllChecker),
        };

        Ok(Self {
            generator: Box::new(generator),
            checker,
            pruner,
            generalizer,
            set_pruner,
            minimality,
            decisions: Box::new(LimitingDecisionProvider),
        })
    }
}
