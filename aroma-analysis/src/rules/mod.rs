//! The static combination rule table.

pub mod base;
pub mod types;

pub use base::RuleBase;
pub use types::{Quantifier, Rule};
