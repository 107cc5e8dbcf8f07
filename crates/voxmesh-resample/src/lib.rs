#![warn(missing_docs)]

//! Resampling passes that prepare fields for isosurface extraction.
//!
//! - [`downscale`] keeps every n-th sample to trade detail for speed.
//! - [`interpolate_to_vertices`] and friends move cell-centred data onto the
//!   dual grid of cell corners.
//!
//! Every pass writes disjoint z-planes of its output in parallel on a
//! per-call worker pool.

pub mod downscale;
pub mod dual;
pub mod error;

pub use downscale::{downscale, downscale_in_place};
pub use dual::{
    interpolate_mask_to_vertices, interpolate_to_vertices, interpolate_to_vertices_categorical,
    BINARY_CUTOFF,
};
pub use error::{ResampleError, Result};
