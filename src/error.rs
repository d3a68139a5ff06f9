use thiserror::Error;

use crate::normalize::NormalizeError;

/// Unified error type for the crate
///
/// Aggregates the per-module errors into one surface so callers can hold a
/// single error type across normalization and document serialization.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Normalization error: {0}")]
    Normalize(#[from] NormalizeError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
