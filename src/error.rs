//! Error taxonomy for rule induction.
//!
//! Every failure the engine can produce is a variant of [`InductionError`].
//! Construction-time validation failures (empty component lists, malformed
//! tables), index-range failures, and algorithmic dead-ends all propagate
//! synchronously to the immediate caller; the engine performs no retries
//! and never produces a partial rule from a failed construction attempt.

use thiserror::Error;

/// All errors surfaced by the induction engine.
///
/// Variants carry enough context (component, index, bound, concept label)
/// to diagnose a failure without re-running the induction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InductionError {
    /// A component was constructed with an empty list of required parts.
    #[error("{component} requires at least one {element}")]
    EmptyComponent {
        /// The component being constructed.
        component: &'static str,
        /// The kind of element that was missing.
        element: &'static str,
    },

    /// An index-based lookup was out of range.
    #[error("{what} index {index} is out of range for length {len}")]
    IndexOutOfRange {
        /// What was being indexed (condition, object, attribute, ...).
        what: &'static str,
        /// The requested index.
        index: usize,
        /// The valid length.
        len: usize,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Human-readable description of the offending value.
        reason: String,
    },

    /// A learning table failed shape validation.
    #[error("malformed information table: {reason}")]
    MalformedTable {
        /// Human-readable description of the shape violation.
        reason: String,
    },

    /// The condition generator found no condition that separates the
    /// currently covered objects from disallowed negative objects.
    ///
    /// Fatal for the current rule-construction attempt; the driver
    /// aborts induction for the seed rather than accepting a rule that
    /// violates its stopping condition.
    #[error(
        "no condition separates covered objects from disallowed negatives \
         for concept '{concept}' (seed object {seed})"
    )]
    CannotSeparate {
        /// Label of the approximated set being described.
        concept: String,
        /// The seed object of the failed attempt.
        seed: usize,
    },

    /// The condition generator was invoked with an empty candidate pool.
    #[error("condition generator called with no candidate positive objects")]
    NoCandidateObjects,
}
