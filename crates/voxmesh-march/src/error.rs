//! Error types for isosurface extraction.

use thiserror::Error;
use voxmesh_field::{Dims, FieldError};

/// Errors that can occur during extraction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractError {
    /// Input field has zero volume.
    #[error("field is empty ({0})")]
    EmptyField(Dims),

    /// Invalid extraction settings.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Field or worker pool failure.
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
