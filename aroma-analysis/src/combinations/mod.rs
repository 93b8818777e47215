//! The multi-oil combination matching engine.

pub mod engine;
pub mod types;

pub use engine::CombinationEngine;
pub use types::Finding;
