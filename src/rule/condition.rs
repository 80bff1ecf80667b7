//! Elementary conditions.

use std::cmp::Ordering;
use std::fmt;

use crate::table::{InformationTable, Value};

/// Relation of an elementary condition (and of a rule's decision part).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relation {
    /// Value must be at least the limit.
    AtLeast,
    /// Value must be at most the limit.
    AtMost,
    /// Value must equal the limit.
    Equal,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::AtLeast => write!(f, ">="),
            Relation::AtMost => write!(f, "<="),
            Relation::Equal => write!(f, "="),
        }
    }
}

/// An immutable elementary predicate: attribute, relation, limiting value.
///
/// On the left-hand side of a rule the attribute index addresses a
/// condition attribute of the learning table; on the right-hand side it
/// addresses the decision column (index 0 for the single-decision
/// tables this crate works with).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Condition {
    attribute: usize,
    relation: Relation,
    limit: Value,
}

impl Condition {
    /// Creates a condition.
    pub fn new(attribute: usize, relation: Relation, limit: Value) -> Self {
        Self {
            attribute,
            relation,
            limit,
        }
    }

    /// Index of the constrained attribute.
    pub fn attribute(&self) -> usize {
        self.attribute
    }

    /// The condition's relation.
    pub fn relation(&self) -> Relation {
        self.relation
    }

    /// The limiting value.
    pub fn limit(&self) -> &Value {
        &self.limit
    }

    /// Whether `value` satisfies this condition.
    ///
    /// A value incomparable with the limit satisfies nothing.
    pub fn satisfied_by(&self, value: &Value) -> bool {
        match self.relation {
            Relation::AtLeast => value.at_least(&self.limit),
            Relation::AtMost => value.at_most(&self.limit),
            Relation::Equal => matches!(value.compare(&self.limit), Some(Ordering::Equal)),
        }
    }

    /// Whether the condition is satisfied by `object`'s evaluation in
    /// `table`. An out-of-range attribute or object covers nothing.
    pub fn covers(&self, object: usize, table: &InformationTable) -> bool {
        table
            .evaluation(object, self.attribute)
            .map(|value| self.satisfied_by(value))
            .unwrap_or(false)
    }

    /// Pairwise generality comparison.
    ///
    /// Returns `Some(true)` when every value satisfying `self` also
    /// satisfies `other` (so `self` is at most as general), `Some(false)`
    /// when `self` is comparable but strictly more general, and `None`
    /// when the two conditions are uncomparable: different attribute,
    /// different relation kind, or limiting values of incompatible kinds.
    pub fn at_most_as_general_as(&self, other: &Condition) -> Option<bool> {
        if self.attribute != other.attribute || self.relation != other.relation {
            return None;
        }
        let ordering = self.limit.compare(&other.limit)?;
        match self.relation {
            // A higher at-least limit admits fewer values.
            Relation::AtLeast => Some(ordering != Ordering::Less),
            // A lower at-most limit admits fewer values.
            Relation::AtMost => Some(ordering != Ordering::Greater),
            // Equality conditions on distinct values are disjoint.
            Relation::Equal => (ordering == Ordering::Equal).then_some(true),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "attr{} {} {}", self.attribute, self.relation, self.limit)
    }
}
