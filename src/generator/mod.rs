//! Best-condition search.
//!
//! A [`ConditionGenerator`] proposes the next elementary condition for
//! a growing rule. The provided [`GreedyConditionGenerator`] scores one
//! candidate per (attribute, candidate object) pair with a vector of
//! addition evaluators compared lexicographically, and supports three
//! [`CandidateSearch`] modes that trade evaluated candidates for the
//! assumptions they are allowed to make.

mod greedy;
mod types;

pub use greedy::{CandidateSearch, GreedyConditionGenerator};
pub use types::ConditionGenerator;
