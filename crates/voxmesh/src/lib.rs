#![warn(missing_docs)]

//! voxmesh: parallel isosurface extraction for dense voxel fields.
//!
//! Re-exports the field container, the marching cubes extractor and the
//! resampling passes, and adds [`extract_mask_surface`] for segmented
//! volumes.
//!
//! # Example
//!
//! ```
//! use voxmesh::{extract_isosurface, Dims, ScalarField3D, TriangleBuffer};
//!
//! let field = ScalarField3D::from_fn(Dims::new(8, 8, 8), |i, j, k| {
//!     let d = [i, j, k].iter().map(|&v| (v as f64 - 3.5).powi(2)).sum::<f64>();
//!     (9.0 - d) as f32
//! });
//!
//! let mut mesh = TriangleBuffer::new();
//! extract_isosurface(&mut mesh, &field, 0.0, false, 0)?;
//! assert!(!mesh.is_empty());
//! # Ok::<(), voxmesh::Error>(())
//! ```

use thiserror::Error;

pub use voxmesh_field::{
    build_pool, reflect_index, CutoffRange, Dims, FieldError, Point3, Sample, ScalarField3D,
    ThreadCount, Vec3,
};
pub use voxmesh_march::{
    extract_isosurface, extract_isosurface_with, ExtractError, ExtractSettings, IndexedMesh,
    Triangle, TriangleBuffer,
};
pub use voxmesh_resample::{
    downscale, downscale_in_place, interpolate_mask_to_vertices, interpolate_to_vertices,
    interpolate_to_vertices_categorical, ResampleError,
};

/// Lower-level building blocks.
pub mod field {
    pub use voxmesh_field::*;
}

/// Marching cubes internals: tables, classification, slabs, assembly.
pub mod march {
    pub use voxmesh_march::*;
}

/// Resampling passes.
pub mod resample {
    pub use voxmesh_resample::*;
}

/// Any error produced by voxmesh.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Field or pool failure.
    #[error(transparent)]
    Field(#[from] FieldError),
    /// Extraction failure.
    #[error(transparent)]
    Extract(#[from] ExtractError),
    /// Resampling failure.
    #[error(transparent)]
    Resample(#[from] ResampleError),
}

/// Result type for the facade.
pub type Result<T> = std::result::Result<T, Error>;

/// Extract the surface of the material selected by `cutoff` from a
/// cell-centred label volume.
///
/// Labels are moved to the vertex grid with [`interpolate_mask_to_vertices`]
/// and the result is extracted at the lower bound of the cutoff it returns.
/// `settings.iso_value` is ignored.
///
/// A single-category cutoff is binarized first, so the surface separates
/// labels in `[lo, hi]` from everything else. A wider cutoff averages the
/// raw labels and extracts only at `lo`; `hi` does not bound the material,
/// and labels above it still count as inside.
pub fn extract_mask_surface<T: Sample>(
    out: &mut TriangleBuffer,
    labels: &ScalarField3D<T>,
    cutoff: CutoffRange,
    settings: &ExtractSettings,
) -> Result<usize> {
    let (vertices, cutoff) = interpolate_mask_to_vertices(labels, cutoff, settings.num_threads)?;
    let settings = ExtractSettings {
        iso_value: cutoff.lo,
        ..settings.clone()
    };
    Ok(extract_isosurface_with(out, &vertices, &settings)?)
}
