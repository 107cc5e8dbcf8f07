#![warn(missing_docs)]

//! Volume types for the voxmesh isosurface engine.
//!
//! Thin wrappers providing the dense scalar field the extractor and the
//! resamplers read from, the sample-type abstraction that lets one
//! algorithm serve integral and floating volumes, reflective index mapping
//! for dual-grid construction, and per-call thread pool construction.
//!
//! # Example
//!
//! ```
//! use voxmesh_field::{Dims, ScalarField3D};
//!
//! let mut field = ScalarField3D::new(Dims::new(4, 4, 4), 0u8);
//! field.set(1, 2, 3, 200);
//! assert_eq!(field.get(1, 2, 3), Some(200));
//! assert_eq!(field.get(4, 0, 0), None);
//! ```

pub mod cutoff;
pub mod error;
pub mod field;
pub mod index;
pub mod pool;
pub mod sample;

pub use cutoff::CutoffRange;
pub use error::{FieldError, Result};
pub use field::{Dims, ScalarField3D};
pub use index::reflect_index;
pub use pool::{build_pool, ThreadCount};
pub use sample::Sample;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = nalgebra::Vector3<f64>;
