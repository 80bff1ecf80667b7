//! The covering driver and its configuration.
//!
//! # Key Types
//!
//! - [`InductionConfig`]: parameters and named built-in strategies
//! - [`InductionComponents`]: the boxed strategy bundle of one run
//! - [`InductionRunner`]: executes the covering loop
//! - [`InductionResult`] / [`InductionStats`]: rules plus run counters
//! - [`RuleDecisionsProvider`]: supplies rule right-hand sides
//!
//! # References
//!
//! - Błaszczyński, Słowiński, Szeląg (2011), *Sequential covering rule
//!   induction algorithm for variable consistency rough set approaches*,
//!   Information Sciences 181(5)
//! - Greco, Matarazzo, Słowiński (2001), *Rough sets theory for
//!   multicriteria decision analysis*, EJOR 129(1)

mod components;
mod config;
mod runner;

pub use components::{InductionComponents, LimitingDecisionProvider, RuleDecisionsProvider};
pub use config::{InductionConfig, MinimalityStrategy, PruningStrategy};
pub use runner::{InductionResult, InductionRunner, InductionStats};
