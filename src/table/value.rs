//! Attribute evaluation values and their comparison semantics.

use std::cmp::Ordering;
use std::fmt;

/// A single evaluation of an object on one attribute.
///
/// Values of different kinds are never comparable; within a kind,
/// comparison follows the natural order, except that nominal text
/// values only support equality.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// An integer evaluation (ordinal scale).
    Int(i64),
    /// A real-valued evaluation (cardinal scale).
    Real(f64),
    /// A nominal evaluation. Supports equality only.
    Text(String),
}

impl Value {
    /// Three-way comparison against another value of the same kind.
    ///
    /// Returns `None` when the two values are incomparable: the kinds
    /// differ, a real value is NaN, or two nominal values are unequal.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Real(a), Value::Real(b)) => a.partial_cmp(b),
            (Value::Text(a), Value::Text(b)) => (a == b).then_some(Ordering::Equal),
            _ => None,
        }
    }

    /// Whether this value is at least `other` under [`compare`](Self::compare).
    pub fn at_least(&self, other: &Value) -> bool {
        matches!(
            self.compare(other),
            Some(Ordering::Greater | Ordering::Equal)
        )
    }

    /// Whether this value is at most `other` under [`compare`](Self::compare).
    pub fn at_most(&self, other: &Value) -> bool {
        matches!(self.compare(other), Some(Ordering::Less | Ordering::Equal))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Real(v) => write!(f, "{v}"),
            Value::Text(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}
