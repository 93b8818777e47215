//! Fact ingestion and indexing.

pub mod index;
pub mod ingestion;

pub use index::FactIndex;
pub use ingestion::{ingest, revalidate_ranks, Ingestion};
