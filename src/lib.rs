//! Sequential-covering decision rule induction for dominance-based
//! rough set approximations (the VC-DomLEM family).
//!
//! Given a learning table and one or more approximated sets (target
//! regions whose members are the positive examples of a concept), the
//! engine repeatedly grows a conjunction of elementary conditions
//! around an uncovered seed object until a consistency/coverage
//! stopping condition holds, prunes and optionally generalizes it, and
//! admits it only if no already-accepted rule dominates it.
//!
//! # Components
//!
//! - **[`table`]**: the tabular data model — evaluation values,
//!   attributes with preference direction, the learning table,
//!   approximated sets and the allowed-negative-objects policy.
//! - **[`rule`]**: elementary conditions, the mutable condition
//!   accumulator with coverage bookkeeping, and immutable rules.
//! - **[`measure`]**: the evaluator family (gain/cost typed, optionally
//!   monotonic) with the built-in consistency and coverage measures.
//! - **[`generator`]**: best-condition search with lexicographic
//!   multi-evaluator scoring and optional search-space reductions.
//! - **[`stopping`]**: stopping-condition checkers.
//! - **[`prune`]**: local pruning, threshold generalization, and
//!   per-concept set pruning.
//! - **[`minimality`]**: dominance checks across the accepted rule set.
//! - **[`induce`]**: configuration and the covering driver.
//!
//! # Example
//!
//! ```
//! use domlem::induce::{InductionConfig, InductionRunner};
//! use domlem::table::{ApproximatedSet, Attribute, InformationTable, Value};
//!
//! let table = InformationTable::new(
//!     vec![Attribute::gain("math"), Attribute::gain("physics")],
//!     vec![
//!         vec![Value::Int(1), Value::Int(1)],
//!         vec![Value::Int(2), Value::Int(2)],
//!         vec![Value::Int(3), Value::Int(3)],
//!     ],
//!     vec![Value::Int(1), Value::Int(2), Value::Int(3)],
//! )?;
//! let unions = vec![
//!     ApproximatedSet::upward_union(&table, Value::Int(2))?,
//!     ApproximatedSet::upward_union(&table, Value::Int(3))?,
//! ];
//!
//! let result = InductionRunner::run(&table, &unions, &InductionConfig::default())?;
//! for rule in &result.rules {
//!     println!("{rule}");
//! }
//! # Ok::<(), domlem::error::InductionError>(())
//! ```
//!
//! # Concurrency
//!
//! Induction is single-threaded and deterministic. The generator can
//! score attributes in parallel (rayon) behind the `parallel`
//! configuration flag without changing the selected conditions. Callers
//! parallelizing across independent runs must give each run its own
//! [`induce::InductionComponents`].
//!
//! # References
//!
//! - Błaszczyński, Słowiński, Szeląg (2011), *Sequential covering rule
//!   induction algorithm for variable consistency rough set approaches*
//! - Greco, Matarazzo, Słowiński (2001), *Rough sets theory for
//!   multicriteria decision analysis*

pub mod error;
pub mod generator;
pub mod induce;
pub mod measure;
pub mod minimality;
pub mod prune;
pub mod rule;
pub mod stopping;
pub mod table;
