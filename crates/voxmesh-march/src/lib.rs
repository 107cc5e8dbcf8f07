#![warn(missing_docs)]

//! Parallel marching cubes for the voxmesh engine.
//!
//! This crate turns a dense scalar field into a triangle soup at a chosen
//! iso-value. Work is split into x-slabs that run on a per-call rayon pool,
//! each writing to a private list, and the lists are then merged into the
//! caller's buffer with a count-then-copy pass.
//!
//! # Example
//!
//! ```
//! use voxmesh_field::{Dims, ScalarField3D};
//! use voxmesh_march::{extract_isosurface, TriangleBuffer};
//!
//! let mut field = ScalarField3D::new(Dims::new(2, 2, 2), 0u8);
//! field.set(0, 0, 0, 200);
//!
//! let mut mesh = TriangleBuffer::new();
//! let added = extract_isosurface(&mut mesh, &field, 128.0, false, 1)?;
//! assert_eq!(added, 1);
//! # Ok::<(), voxmesh_march::ExtractError>(())
//! ```

pub mod assemble;
pub mod boundary;
pub mod classify;
pub mod error;
pub mod interpolate;
pub mod mesh;
pub mod slab;
pub mod tables;
pub mod triangle;

pub use assemble::{assemble, slab_offsets};
pub use boundary::{CellRange, CornerSource, OpenBoundary, PaddedBoundary};
pub use classify::{configuration_index, edge_mask, triangle_edges, CornerSample, Cube};
pub use error::{ExtractError, Result};
pub use interpolate::{edge_crossing, interpolate_edge};
pub use mesh::{IndexedMesh, TriangleBuffer};
pub use slab::{march_cube, march_slab, march_slabs};
pub use triangle::Triangle;

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use voxmesh_field::{build_pool, Sample, ScalarField3D};

/// Extraction parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractSettings {
    /// Threshold; a sample is below the surface when strictly less than this.
    pub iso_value: f64,
    /// Close surfaces that touch the field boundary.
    pub closed_edges: bool,
    /// Worker threads. Values outside `[1, 1000]` use every hardware thread.
    pub num_threads: i64,
    /// Value of the virtual shell used when `closed_edges` is set.
    /// Must be below `iso_value`. Any finite value is safe to interpolate
    /// against; the default places the shell on the outer sample planes.
    pub boundary_value: f64,
}

impl Default for ExtractSettings {
    fn default() -> Self {
        Self {
            iso_value: 0.5,
            closed_edges: false,
            num_threads: 0,
            boundary_value: f64::MIN,
        }
    }
}

impl ExtractSettings {
    /// Settings for an iso-value, everything else default.
    pub fn at(iso_value: f64) -> Self {
        Self {
            iso_value,
            ..Default::default()
        }
    }

    /// Parse settings from TOML; missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let settings: Self =
            toml::from_str(s).map_err(|e| ExtractError::InvalidSettings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        if !self.iso_value.is_finite() {
            return Err(ExtractError::InvalidSettings(
                "iso_value must be finite".into(),
            ));
        }
        if self.closed_edges && !(self.boundary_value < self.iso_value) {
            return Err(ExtractError::InvalidSettings(format!(
                "boundary_value {} must be below iso_value {}",
                self.boundary_value, self.iso_value
            )));
        }
        Ok(())
    }
}

/// Extract the isosurface of `field` at `iso_value` and append it to `out`.
///
/// Returns the number of triangles appended. Fails with
/// [`ExtractError::EmptyField`] when the field has zero volume, leaving
/// `out` unchanged.
pub fn extract_isosurface<T: Sample>(
    out: &mut TriangleBuffer,
    field: &ScalarField3D<T>,
    iso_value: f64,
    closed_edges: bool,
    num_threads: i64,
) -> Result<usize> {
    let settings = ExtractSettings {
        iso_value,
        closed_edges,
        num_threads,
        ..Default::default()
    };
    extract_isosurface_with(out, field, &settings)
}

/// Extract with explicit [`ExtractSettings`].
pub fn extract_isosurface_with<T: Sample>(
    out: &mut TriangleBuffer,
    field: &ScalarField3D<T>,
    settings: &ExtractSettings,
) -> Result<usize> {
    settings.validate()?;
    if field.is_empty() {
        return Err(ExtractError::EmptyField(field.dims()));
    }

    debug!(
        "extracting isosurface: dims={} iso={} closed={} threads={}",
        field.dims(),
        settings.iso_value,
        settings.closed_edges,
        settings.num_threads
    );

    let pool = build_pool(settings.num_threads)?;
    let slabs = if settings.closed_edges {
        let source = PaddedBoundary::new(field, settings.boundary_value);
        march_slabs(&pool, &source, settings.iso_value)
    } else {
        march_slabs(&pool, &OpenBoundary::new(field), settings.iso_value)
    };
    trace!("generated {} slabs", slabs.len());

    let added = assemble(&pool, out, &slabs);
    info!("extracted {added} triangles ({} total)", out.len());
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxmesh_field::Dims;

    #[test]
    fn test_default_settings_validate() {
        assert!(ExtractSettings::default().validate().is_ok());
        assert!(ExtractSettings::at(128.0).validate().is_ok());
    }

    #[test]
    fn test_invalid_settings() {
        let settings = ExtractSettings {
            iso_value: f64::NAN,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        let settings = ExtractSettings {
            iso_value: 1.0,
            closed_edges: true,
            boundary_value: 2.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ExtractError::InvalidSettings(_))
        ));
    }

    #[test]
    fn test_settings_from_toml() {
        let settings = ExtractSettings::from_toml_str(
            r#"
            iso_value = 128.0
            closed_edges = true
            num_threads = 4
            "#,
        )
        .unwrap();
        assert_eq!(settings.iso_value, 128.0);
        assert!(settings.closed_edges);
        assert_eq!(settings.num_threads, 4);
        assert_eq!(settings.boundary_value, f64::MIN);

        assert!(ExtractSettings::from_toml_str("iso_value = \"high\"").is_err());
    }

    #[test]
    fn test_settings_json_round_trip() {
        let settings = ExtractSettings {
            iso_value: 0.25,
            closed_edges: true,
            num_threads: 2,
            boundary_value: -1.0,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: ExtractSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_empty_field_is_rejected() {
        let field = ScalarField3D::new(Dims::new(0, 0, 0), 0.0f32);
        let mut out = TriangleBuffer::new();
        let err = extract_isosurface(&mut out, &field, 0.5, false, 1).unwrap_err();
        assert_eq!(err, ExtractError::EmptyField(Dims::new(0, 0, 0)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_huge_samples_close_symmetrically() {
        let field = ScalarField3D::new(Dims::new(2, 2, 2), 1e308f64);
        let mut out = TriangleBuffer::new();
        extract_isosurface(&mut out, &field, 0.5, true, 1).unwrap();
        assert_eq!(out.boundary_edge_count(), 0);

        let (min, max) = out.bounds().unwrap();
        for axis in 0..3 {
            assert!(min[axis] > -1.0 && max[axis] < 2.0);
            assert!((min[axis] + max[axis] - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sphere_closes_without_padding() {
        let n = 16;
        let c = (n as f64 - 1.0) / 2.0;
        let field = ScalarField3D::from_fn(Dims::new(n, n, n), |i, j, k| {
            let d = ((i as f64 - c).powi(2) + (j as f64 - c).powi(2) + (k as f64 - c).powi(2))
                .sqrt();
            (5.0 - d) as f32
        });

        let mut out = TriangleBuffer::new();
        let added = extract_isosurface(&mut out, &field, 0.0, false, 4).unwrap();
        assert!(added > 100);
        assert_eq!(out.boundary_edge_count(), 0);

        let (min, max) = out.bounds().unwrap();
        for axis in 0..3 {
            assert!(min[axis] > c - 5.5 && max[axis] < c + 5.5);
        }
    }
}
