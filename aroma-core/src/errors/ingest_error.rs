//! Ingestion validation errors.
//!
//! These are advisory: the offending cell is discarded and the batch
//! continues. They surface as per-row diagnostics, never as `Err` returns
//! from the engine layers.

use crate::types::{Rank, RowRef};

/// A validation failure detected at the ingestion boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IngestError {
    #[error("Row {row}: rank must be 1, 2 or 3 (got \"{value}\")")]
    InvalidRank { row: RowRef, value: String },

    #[error("Row {row}: rank {rank} is already assigned in the +++ zone")]
    DuplicateRank { row: RowRef, rank: Rank },
}

impl IngestError {
    /// The input row the failure belongs to.
    pub fn row(&self) -> RowRef {
        match self {
            IngestError::InvalidRank { row, .. } => *row,
            IngestError::DuplicateRank { row, .. } => *row,
        }
    }
}
