//! The mutable rule-condition accumulator.

use std::collections::HashSet;
use std::fmt;

use super::condition::Condition;
use crate::error::InductionError;
use crate::table::{AllowedNegatives, ApproximatedSet, InformationTable};

/// A mutable, ordered conjunction of elementary conditions with
/// incrementally maintained coverage bookkeeping.
///
/// This is the central working object of the covering search. It is
/// created around one seed positive object of an approximated set and
/// mutated exclusively through [`add_condition`](Self::add_condition),
/// [`remove_condition`](Self::remove_condition) and
/// [`replace_condition`](Self::replace_condition), each of which keeps
/// the derived covered-object set equal to the intersection of the
/// per-condition satisfaction sets. An empty conjunction covers every
/// object of the learning table.
#[derive(Debug, Clone)]
pub struct RuleConditions<'a> {
    table: &'a InformationTable,
    set: &'a ApproximatedSet,
    policy: AllowedNegatives,
    seed: usize,
    conditions: Vec<Condition>,
    covered: Vec<usize>,
    positive: HashSet<usize>,
    neutral: HashSet<usize>,
    // None means every object is tolerable (AnyRegion policy).
    allowed: Option<HashSet<usize>>,
    negative_total: usize,
}

impl<'a> RuleConditions<'a> {
    /// Creates an empty condition set for one concept, seeded on one
    /// positive object.
    ///
    /// Fails when `seed` does not address an object of `table`.
    pub fn new(
        table: &'a InformationTable,
        set: &'a ApproximatedSet,
        policy: AllowedNegatives,
        seed: usize,
    ) -> Result<Self, InductionError> {
        let object_count = table.object_count();
        if seed >= object_count {
            return Err(InductionError::IndexOutOfRange {
                what: "object",
                index: seed,
                len: object_count,
            });
        }
        let positive: HashSet<usize> = set.objects().iter().copied().collect();
        let neutral: HashSet<usize> = set.neutral_objects().iter().copied().collect();
        let negative_total = (0..object_count)
            .filter(|object| !positive.contains(object) && !neutral.contains(object))
            .count();
        let allowed = match policy {
            AllowedNegatives::AnyRegion => None,
            _ => {
                let mut allowed: HashSet<usize> = positive.union(&neutral).copied().collect();
                match policy {
                    AllowedNegatives::Approximation => {}
                    AllowedNegatives::PositiveRegion => {
                        allowed.extend(set.positive_region().iter().copied());
                    }
                    AllowedNegatives::PositiveAndBoundaryRegions => {
                        allowed.extend(set.positive_region().iter().copied());
                        allowed.extend(set.boundary_region().iter().copied());
                    }
                    AllowedNegatives::AnyRegion => unreachable!(),
                }
                Some(allowed)
            }
        };
        Ok(Self {
            table,
            set,
            policy,
            seed,
            conditions: Vec::new(),
            covered: (0..object_count).collect(),
            positive,
            neutral,
            allowed,
            negative_total,
        })
    }

    /// The learning table this condition set reads.
    pub fn table(&self) -> &'a InformationTable {
        self.table
    }

    /// The approximated set this condition set is grown for.
    pub fn approximated_set(&self) -> &'a ApproximatedSet {
        self.set
    }

    /// The allowed-negative-objects policy in force.
    pub fn policy(&self) -> AllowedNegatives {
        self.policy
    }

    /// The seed positive object this condition set was created around.
    pub fn seed(&self) -> usize {
        self.seed
    }

    /// The accepted conditions, in insertion order.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Number of conditions.
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Whether no condition has been accepted yet.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// The condition at `index`.
    pub fn condition(&self, index: usize) -> Result<&Condition, InductionError> {
        self.conditions
            .get(index)
            .ok_or(InductionError::IndexOutOfRange {
                what: "condition",
                index,
                len: self.conditions.len(),
            })
    }

    /// Whether an identical condition is already present.
    pub fn contains(&self, condition: &Condition) -> bool {
        self.conditions.iter().any(|c| c == condition)
    }

    /// Whether any accepted condition constrains `attribute`.
    pub fn constrains_attribute(&self, attribute: usize) -> bool {
        self.conditions.iter().any(|c| c.attribute() == attribute)
    }

    /// Objects currently covered by the conjunction, sorted ascending.
    pub fn covered_objects(&self) -> &[usize] {
        &self.covered
    }

    /// Whether `object` is currently covered.
    pub fn is_covered(&self, object: usize) -> bool {
        self.covered.binary_search(&object).is_ok()
    }

    /// The covered set as it would be after appending `condition`,
    /// without mutating anything.
    pub fn covered_with(&self, condition: &Condition) -> Vec<usize> {
        self.covered
            .iter()
            .copied()
            .filter(|&object| condition.covers(object, self.table))
            .collect()
    }

    /// The covered set as it would be after removing the condition at
    /// `index`, recomputed from the remaining conditions over the whole
    /// table, without mutating anything.
    pub fn covered_without(&self, index: usize) -> Result<Vec<usize>, InductionError> {
        if index >= self.conditions.len() {
            return Err(InductionError::IndexOutOfRange {
                what: "condition",
                index,
                len: self.conditions.len(),
            });
        }
        Ok((0..self.table.object_count())
            .filter(|&object| {
                self.conditions
                    .iter()
                    .enumerate()
                    .all(|(i, c)| i == index || c.covers(object, self.table))
            })
            .collect())
    }

    /// Appends a condition; the covered set shrinks to its intersection
    /// with the condition's satisfaction set.
    pub fn add_condition(&mut self, condition: Condition) {
        let table = self.table;
        self.covered
            .retain(|&object| condition.covers(object, table));
        self.conditions.push(condition);
    }

    /// Removes and returns the condition at `index`; the covered set is
    /// recomputed from the remaining conditions.
    pub fn remove_condition(&mut self, index: usize) -> Result<Condition, InductionError> {
        if index >= self.conditions.len() {
            return Err(InductionError::IndexOutOfRange {
                what: "condition",
                index,
                len: self.conditions.len(),
            });
        }
        let removed = self.conditions.remove(index);
        self.recompute_covered();
        Ok(removed)
    }

    /// Replaces the condition at `index` (used when widening a
    /// threshold in place) and returns the previous condition; the
    /// covered set is recomputed.
    pub fn replace_condition(
        &mut self,
        index: usize,
        condition: Condition,
    ) -> Result<Condition, InductionError> {
        if index >= self.conditions.len() {
            return Err(InductionError::IndexOutOfRange {
                what: "condition",
                index,
                len: self.conditions.len(),
            });
        }
        let previous = std::mem::replace(&mut self.conditions[index], condition);
        self.recompute_covered();
        Ok(previous)
    }

    fn recompute_covered(&mut self) {
        self.covered = (0..self.table.object_count())
            .filter(|&object| {
                self.conditions
                    .iter()
                    .all(|c| c.covers(object, self.table))
            })
            .collect();
    }

    /// Whether `object` supports the target decision.
    pub fn is_positive(&self, object: usize) -> bool {
        self.positive.contains(&object)
    }

    /// Whether `object` is neutral (never counted for consistency).
    pub fn is_neutral(&self, object: usize) -> bool {
        self.neutral.contains(&object)
    }

    /// Whether `object` is negative: neither positive nor neutral.
    pub fn is_negative(&self, object: usize) -> bool {
        !self.is_positive(object) && !self.is_neutral(object)
    }

    /// Whether covering `object` is tolerable under the policy.
    pub fn is_allowed(&self, object: usize) -> bool {
        match &self.allowed {
            None => true,
            Some(allowed) => allowed.contains(&object),
        }
    }

    /// Total number of positive objects of the concept.
    pub fn positive_total(&self) -> usize {
        self.positive.len()
    }

    /// Total number of negative objects in the learning table.
    pub fn negative_total(&self) -> usize {
        self.negative_total
    }

    /// Number of currently covered positive objects.
    pub fn covered_positive_count(&self) -> usize {
        self.covered
            .iter()
            .filter(|&&object| self.is_positive(object))
            .count()
    }

    /// Number of currently covered negative objects.
    pub fn covered_negative_count(&self) -> usize {
        self.covered
            .iter()
            .filter(|&&object| self.is_negative(object))
            .count()
    }

    /// Number of negative objects in `covered`, for hypothetical sets
    /// produced by [`covered_with`](Self::covered_with) or
    /// [`covered_without`](Self::covered_without).
    pub fn negative_count_in(&self, covered: &[usize]) -> usize {
        covered
            .iter()
            .filter(|&&object| self.is_negative(object))
            .count()
    }

    /// Number of positive objects in `covered`.
    pub fn positive_count_in(&self, covered: &[usize]) -> usize {
        covered
            .iter()
            .filter(|&&object| self.is_positive(object))
            .count()
    }
}

impl fmt::Display for RuleConditions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, condition) in self.conditions.iter().enumerate() {
            if i > 0 {
                write!(f, " & ")?;
            }
            write!(f, "{condition}")?;
        }
        Ok(())
    }
}

/// A finished condition set paired with the approximated set it was
/// grown for: the unit compared by the set pruner and the minimality
/// checker, since dominance needs both the condition geometry and the
/// decision specificity.
#[derive(Debug, Clone)]
pub struct RuleConditionsWithApproximatedSet<'a> {
    conditions: RuleConditions<'a>,
}

impl<'a> RuleConditionsWithApproximatedSet<'a> {
    /// Wraps a finished condition set. The conditions are read-only
    /// from here on.
    pub fn new(conditions: RuleConditions<'a>) -> Self {
        Self { conditions }
    }

    /// The wrapped condition set.
    pub fn conditions(&self) -> &RuleConditions<'a> {
        &self.conditions
    }

    /// The concept the conditions were grown for.
    pub fn approximated_set(&self) -> &'a ApproximatedSet {
        self.conditions.approximated_set()
    }

    /// Unwraps the condition set.
    pub fn into_conditions(self) -> RuleConditions<'a> {
        self.conditions
    }
}
