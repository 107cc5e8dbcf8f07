//! Dense 3D scalar fields.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FieldError, Result};
use crate::sample::Sample;

/// Extent of a field along x, y and z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dims {
    /// Samples along x (the primary, slab axis).
    pub x: usize,
    /// Samples along y.
    pub y: usize,
    /// Samples along z.
    pub z: usize,
}

impl Dims {
    /// Create new dimensions.
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Total number of samples.
    pub fn volume(&self) -> usize {
        self.x * self.y * self.z
    }

    /// True if any extent is zero.
    pub fn is_empty(&self) -> bool {
        self.x == 0 || self.y == 0 || self.z == 0
    }

    /// Dimensions grown by `n` along every axis.
    pub fn grown(&self, n: usize) -> Self {
        Self::new(self.x + n, self.y + n, self.z + n)
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.x, self.y, self.z)
    }
}

/// A dense, x-fastest 3D array of samples.
///
/// Sample `(i, j, k)` lives at offset `i + X * (j + Y * k)`. The field is
/// owned by the caller and only read by the extractor.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField3D<T> {
    dims: Dims,
    data: Vec<T>,
}

impl<T: Sample> ScalarField3D<T> {
    /// Create a field with every sample set to `fill`.
    pub fn new(dims: Dims, fill: T) -> Self {
        Self {
            dims,
            data: vec![fill; dims.volume()],
        }
    }

    /// Wrap an existing x-fastest sample buffer.
    pub fn from_vec(dims: Dims, data: Vec<T>) -> Result<Self> {
        if data.len() != dims.volume() {
            return Err(FieldError::ShapeMismatch {
                dims,
                expected: dims.volume(),
                len: data.len(),
            });
        }
        Ok(Self { dims, data })
    }

    /// Build a field by evaluating `f(i, j, k)` at every sample.
    pub fn from_fn<F>(dims: Dims, mut f: F) -> Self
    where
        F: FnMut(usize, usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(dims.volume());
        for k in 0..dims.z {
            for j in 0..dims.y {
                for i in 0..dims.x {
                    data.push(f(i, j, k));
                }
            }
        }
        Self { dims, data }
    }

    /// Field dimensions.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the field has zero volume.
    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// Linear offset of `(i, j, k)`, or `None` when out of bounds.
    #[inline]
    pub fn linear_index(&self, i: usize, j: usize, k: usize) -> Option<usize> {
        if i < self.dims.x && j < self.dims.y && k < self.dims.z {
            Some(i + self.dims.x * (j + self.dims.y * k))
        } else {
            None
        }
    }

    /// Sample at `(i, j, k)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize, k: usize) -> Option<T> {
        self.linear_index(i, j, k).map(|idx| self.data[idx])
    }

    /// Mutable sample at `(i, j, k)`.
    pub fn get_mut(&mut self, i: usize, j: usize, k: usize) -> Option<&mut T> {
        self.linear_index(i, j, k).map(move |idx| &mut self.data[idx])
    }

    /// Overwrite the sample at `(i, j, k)`. Returns false when out of bounds.
    pub fn set(&mut self, i: usize, j: usize, k: usize, value: T) -> bool {
        match self.get_mut(i, j, k) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Sample at `(i, j, k)` for callers that already validated the index.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[inline]
    pub fn at(&self, i: usize, j: usize, k: usize) -> T {
        self.data[i + self.dims.x * (j + self.dims.y * k)]
    }

    /// Samples in x-fastest order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable samples in x-fastest order.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the field, returning its sample buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Convert every sample with `f`, keeping dimensions.
    pub fn map<U: Sample, F: Fn(T) -> U>(&self, f: F) -> ScalarField3D<U> {
        ScalarField3D {
            dims: self.dims,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }
}
