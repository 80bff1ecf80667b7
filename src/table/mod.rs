//! The tabular data model consumed by the induction engine.
//!
//! Rule induction reads a rectangular [`InformationTable`] (objects
//! evaluated on condition attributes, one decision value per object)
//! and one or more [`ApproximatedSet`]s naming the target regions to
//! describe. Evaluations are [`Value`]s compared three-way or reported
//! incomparable; attributes carry a [`Preference`] direction that
//! decides which elementary-condition relation applies.
//!
//! # Key Types
//!
//! - [`Value`]: a single evaluation, with three-way-or-incomparable comparison
//! - [`Attribute`] / [`Preference`]: condition attributes and their direction
//! - [`InformationTable`]: the immutable learning table
//! - [`ApproximatedSet`]: a target region with its region index sets
//! - [`AllowedNegatives`]: which negative objects a rule may still cover

mod approximation;
mod attribute;
mod information;
mod value;

pub use approximation::{AllowedNegatives, ApproximatedSet};
pub use attribute::{Attribute, Preference};
pub use information::InformationTable;
pub use value::Value;
