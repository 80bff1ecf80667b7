//! The in-memory learning table.

use super::attribute::Attribute;
use super::value::Value;
use crate::error::InductionError;

/// A rectangular learning table: objects evaluated on condition
/// attributes, plus one decision value per object.
///
/// The table is immutable after construction. Rule induction reads it
/// through shared references; nothing in the engine ever mutates it.
///
/// # Examples
///
/// ```
/// use domlem::table::{Attribute, InformationTable, Value};
///
/// let table = InformationTable::new(
///     vec![Attribute::gain("quality"), Attribute::cost("price")],
///     vec![
///         vec![Value::Int(3), Value::Int(120)],
///         vec![Value::Int(1), Value::Int(80)],
///     ],
///     vec![Value::Int(1), Value::Int(0)],
/// ).unwrap();
/// assert_eq!(table.object_count(), 2);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InformationTable {
    attributes: Vec<Attribute>,
    rows: Vec<Vec<Value>>,
    decisions: Vec<Value>,
}

impl InformationTable {
    /// Builds a table, validating its shape.
    ///
    /// Fails when a row's width differs from the attribute count or the
    /// decision vector's length differs from the row count.
    pub fn new(
        attributes: Vec<Attribute>,
        rows: Vec<Vec<Value>>,
        decisions: Vec<Value>,
    ) -> Result<Self, InductionError> {
        if attributes.is_empty() {
            return Err(InductionError::MalformedTable {
                reason: "table has no condition attributes".into(),
            });
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != attributes.len() {
                return Err(InductionError::MalformedTable {
                    reason: format!(
                        "row {i} has {} evaluations, expected {}",
                        row.len(),
                        attributes.len()
                    ),
                });
            }
        }
        if decisions.len() != rows.len() {
            return Err(InductionError::MalformedTable {
                reason: format!(
                    "{} decisions for {} objects",
                    decisions.len(),
                    rows.len()
                ),
            });
        }
        Ok(Self {
            attributes,
            rows,
            decisions,
        })
    }

    /// Number of objects.
    pub fn object_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of condition attributes.
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// The condition attributes, in declaration order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// The attribute at `index`.
    pub fn attribute(&self, index: usize) -> Result<&Attribute, InductionError> {
        self.attributes
            .get(index)
            .ok_or(InductionError::IndexOutOfRange {
                what: "attribute",
                index,
                len: self.attributes.len(),
            })
    }

    /// The evaluation of `object` on `attribute`.
    ///
    /// Both indices are validated; requesting an out-of-range index is
    /// an error, never a silent default.
    pub fn evaluation(&self, object: usize, attribute: usize) -> Result<&Value, InductionError> {
        let row = self.rows.get(object).ok_or(InductionError::IndexOutOfRange {
            what: "object",
            index: object,
            len: self.rows.len(),
        })?;
        row.get(attribute).ok_or(InductionError::IndexOutOfRange {
            what: "attribute",
            index: attribute,
            len: self.attributes.len(),
        })
    }

    /// The decision value of `object`.
    pub fn decision(&self, object: usize) -> Result<&Value, InductionError> {
        self.decisions
            .get(object)
            .ok_or(InductionError::IndexOutOfRange {
                what: "object",
                index: object,
                len: self.decisions.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Preference;

    fn table() -> InformationTable {
        InformationTable::new(
            vec![Attribute::gain("a1"), Attribute::nominal("a2")],
            vec![
                vec![Value::Int(1), Value::from("x")],
                vec![Value::Int(2), Value::from("y")],
            ],
            vec![Value::Int(0), Value::Int(1)],
        )
        .unwrap()
    }

    #[test]
    fn test_accessors() {
        let t = table();
        assert_eq!(t.object_count(), 2);
        assert_eq!(t.attribute_count(), 2);
        assert_eq!(t.attribute(0).unwrap().preference, Preference::Gain);
        assert_eq!(t.evaluation(1, 0).unwrap(), &Value::Int(2));
        assert_eq!(t.decision(1).unwrap(), &Value::Int(1));
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let err = InformationTable::new(
            vec![Attribute::gain("a1"), Attribute::gain("a2")],
            vec![vec![Value::Int(1)]],
            vec![Value::Int(0)],
        )
        .unwrap_err();
        assert!(matches!(err, InductionError::MalformedTable { .. }));
    }

    #[test]
    fn test_rejects_wrong_decision_length() {
        let err = InformationTable::new(
            vec![Attribute::gain("a1")],
            vec![vec![Value::Int(1)], vec![Value::Int(2)]],
            vec![Value::Int(0)],
        )
        .unwrap_err();
        assert!(matches!(err, InductionError::MalformedTable { .. }));
    }

    #[test]
    fn test_rejects_empty_attributes() {
        let err = InformationTable::new(vec![], vec![], vec![]).unwrap_err();
        assert!(matches!(err, InductionError::MalformedTable { .. }));
    }

    #[test]
    fn test_out_of_range_lookups() {
        let t = table();
        assert!(matches!(
            t.evaluation(5, 0),
            Err(InductionError::IndexOutOfRange { what: "object", .. })
        ));
        assert!(matches!(
            t.evaluation(0, 5),
            Err(InductionError::IndexOutOfRange {
                what: "attribute",
                ..
            })
        ));
        assert!(t.decision(9).is_err());
    }
}
