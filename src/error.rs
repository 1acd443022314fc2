//! Error types for filter construction and deletion.

use thiserror::Error;

/// Errors returned by filter constructors and `delete`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("Invalid capacity: {capacity} (must be at least 1)")]
    InvalidCapacity { capacity: usize },

    #[error("Invalid false positive rate: {fp_rate} (must be between 0.0 and 1.0, exclusive)")]
    InvalidFalsePositiveRate { fp_rate: f64 },

    #[error("Invalid operation: cannot delete {value:?}, it has no outstanding insert")]
    InvalidOperation { value: String },

    #[error("Delete is not supported by this filter")]
    DeleteNotSupported,
}

pub type Result<T> = std::result::Result<T, Error>;
