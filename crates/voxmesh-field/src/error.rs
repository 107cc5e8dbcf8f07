//! Error types for field construction and thread pools.

use thiserror::Error;

use crate::field::Dims;

/// Errors that can occur while building or addressing a field.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    /// Sample buffer length does not match the requested dimensions.
    #[error("sample buffer holds {len} values but {dims} needs {expected}")]
    ShapeMismatch {
        /// Requested dimensions.
        dims: Dims,
        /// Number of samples the dimensions require.
        expected: usize,
        /// Number of samples supplied.
        len: usize,
    },

    /// Worker pool could not be created.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(String),
}

/// Result type for field operations.
pub type Result<T> = std::result::Result<T, FieldError>;
