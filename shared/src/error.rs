//! Errors raised when classification is invoked with data that breaks its contract

use thiserror::Error;

/// Classification contract violations. None of these are retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassificationError {
    #[error("Invalid batch {batch_number}: {reason}")]
    InvalidBatch {
        batch_number: String,
        reason: &'static str,
    },

    #[error("Product has no stock batches")]
    EmptyProduct,
}

impl ClassificationError {
    pub(crate) fn invalid_batch(batch_number: &str, reason: &'static str) -> Self {
        ClassificationError::InvalidBatch {
            batch_number: batch_number.to_string(),
            reason,
        }
    }
}
