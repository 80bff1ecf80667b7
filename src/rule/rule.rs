//! Immutable decision rules.

use std::fmt;

use super::condition::{Condition, Relation};
use crate::table::{InformationTable, Value};

/// Kind of approximation a rule was induced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuleType {
    /// Induced from a lower approximation.
    Certain,
    /// Induced from an upper approximation.
    Possible,
    /// Induced from a boundary region.
    Approximate,
}

/// Semantics of a rule's decision part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuleSemantics {
    /// Concludes membership of an upward union of decision classes.
    AtLeast,
    /// Concludes membership of a downward union of decision classes.
    AtMost,
    /// Concludes membership of a single decision class.
    Equal,
}

impl RuleSemantics {
    /// The relation a decision condition with this semantics uses.
    pub fn relation(self) -> Relation {
        match self {
            RuleSemantics::AtLeast => Relation::AtLeast,
            RuleSemantics::AtMost => Relation::AtMost,
            RuleSemantics::Equal => Relation::Equal,
        }
    }
}

/// An immutable decision rule: AND-connected elementary conditions on
/// the left, OR-connected decision conditions on the right.
///
/// Built once from an accepted condition set plus a decisions supplier;
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    rule_type: RuleType,
    semantics: RuleSemantics,
    inherent_decision: Value,
    conditions: Vec<Condition>,
    decisions: Vec<Condition>,
}

impl Rule {
    /// Assembles a rule.
    pub fn new(
        rule_type: RuleType,
        semantics: RuleSemantics,
        inherent_decision: Value,
        conditions: Vec<Condition>,
        decisions: Vec<Condition>,
    ) -> Self {
        Self {
            rule_type,
            semantics,
            inherent_decision,
            conditions,
            decisions,
        }
    }

    /// Kind of approximation the rule was induced from.
    pub fn rule_type(&self) -> RuleType {
        self.rule_type
    }

    /// Semantics of the decision part.
    pub fn semantics(&self) -> RuleSemantics {
        self.semantics
    }

    /// The limiting decision value the rule was induced toward.
    pub fn inherent_decision(&self) -> &Value {
        &self.inherent_decision
    }

    /// The AND-connected elementary conditions, in induction order.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// The OR-connected decision conditions.
    pub fn decisions(&self) -> &[Condition] {
        &self.decisions
    }

    /// Whether every condition is satisfied by `object` in `table`.
    pub fn covers(&self, object: usize, table: &InformationTable) -> bool {
        self.conditions.iter().all(|c| c.covers(object, table))
    }

    /// Whether `object` is covered and its decision satisfies at least
    /// one decision condition.
    pub fn supported_by(&self, object: usize, table: &InformationTable) -> bool {
        if !self.covers(object, table) {
            return false;
        }
        match table.decision(object) {
            Ok(decision) => self.decisions.iter().any(|d| d.satisfied_by(decision)),
            Err(_) => false,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, condition) in self.conditions.iter().enumerate() {
            if i > 0 {
                write!(f, " & ")?;
            }
            write!(f, "({condition})")?;
        }
        write!(f, " => ")?;
        for (i, decision) in self.decisions.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            write!(f, "(decision {} {})", decision.relation(), decision.limit())?;
        }
        Ok(())
    }
}
