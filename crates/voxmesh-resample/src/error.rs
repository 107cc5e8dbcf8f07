//! Error types for resampling.

use thiserror::Error;
use voxmesh_field::{Dims, FieldError};

/// Errors that can occur while resampling a field.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResampleError {
    /// Input field has zero volume.
    #[error("field is empty ({0})")]
    EmptyField(Dims),

    /// Downscale factor must be at least 1.
    #[error("invalid downscale factor: {0}")]
    InvalidFactor(usize),

    /// Cutoff range with `lo > hi` (or NaN bounds).
    #[error("invalid cutoff range [{lo}, {hi}]")]
    InvalidCutoff {
        /// Lower bound.
        lo: f64,
        /// Upper bound.
        hi: f64,
    },

    /// Field or worker pool failure.
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Result type for resampling operations.
pub type Result<T> = std::result::Result<T, ResampleError>;
