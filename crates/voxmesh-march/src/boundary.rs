//! Corner value sources: the raw field, or the field wrapped in one virtual
//! layer of sentinel samples so surfaces touching the boundary close.

use voxmesh_field::{Sample, ScalarField3D};

/// The block of cells a source exposes, as a start corner and a per-axis count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    /// Index of the first cell along each axis.
    pub start: [i64; 3],
    /// Number of cells along each axis.
    pub count: [usize; 3],
}

impl CellRange {
    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.count.iter().product()
    }

    /// True if there are no cells to classify.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Supplies sample values at integer grid coordinates.
pub trait CornerSource: Sync {
    /// Cells to classify.
    fn cells(&self) -> CellRange;

    /// Value at grid point `(i, j, k)`. Only called for corners of cells in
    /// [`cells`](Self::cells).
    fn value(&self, i: i64, j: i64, k: i64) -> f64;
}

/// Reads the field directly; cells end one sample before each far face.
#[derive(Debug, Clone, Copy)]
pub struct OpenBoundary<'a, T> {
    field: &'a ScalarField3D<T>,
}

impl<'a, T: Sample> OpenBoundary<'a, T> {
    /// Wrap a field.
    pub fn new(field: &'a ScalarField3D<T>) -> Self {
        Self { field }
    }
}

impl<T: Sample> CornerSource for OpenBoundary<'_, T> {
    fn cells(&self) -> CellRange {
        let d = self.field.dims();
        CellRange {
            start: [0, 0, 0],
            count: [
                d.x.saturating_sub(1),
                d.y.saturating_sub(1),
                d.z.saturating_sub(1),
            ],
        }
    }

    #[inline]
    fn value(&self, i: i64, j: i64, k: i64) -> f64 {
        self.field.at(i as usize, j as usize, k as usize).to_f64()
    }
}

/// Surrounds the field with one layer of `sentinel` samples.
///
/// Cells run from `-1` to `X - 1` on each axis, one extra layer on both
/// sides. Grid points outside `[0, X - 1]` read the sentinel, which must lie
/// below the iso-value so the shell always classifies on the low side.
#[derive(Debug, Clone, Copy)]
pub struct PaddedBoundary<'a, T> {
    field: &'a ScalarField3D<T>,
    sentinel: f64,
}

impl<'a, T: Sample> PaddedBoundary<'a, T> {
    /// Wrap a field with the given sentinel.
    pub fn new(field: &'a ScalarField3D<T>, sentinel: f64) -> Self {
        Self { field, sentinel }
    }

    /// The value used for the virtual shell.
    pub fn sentinel(&self) -> f64 {
        self.sentinel
    }
}

impl<T: Sample> CornerSource for PaddedBoundary<'_, T> {
    fn cells(&self) -> CellRange {
        let d = self.field.dims();
        if d.is_empty() {
            return CellRange {
                start: [-1, -1, -1],
                count: [0, 0, 0],
            };
        }
        CellRange {
            start: [-1, -1, -1],
            count: [d.x + 1, d.y + 1, d.z + 1],
        }
    }

    #[inline]
    fn value(&self, i: i64, j: i64, k: i64) -> f64 {
        if i < 0 || j < 0 || k < 0 {
            return self.sentinel;
        }
        self.field
            .get(i as usize, j as usize, k as usize)
            .map_or(self.sentinel, T::to_f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxmesh_field::Dims;

    #[test]
    fn test_open_cells() {
        let field = ScalarField3D::new(Dims::new(4, 3, 2), 1u8);
        let src = OpenBoundary::new(&field);
        assert_eq!(
            src.cells(),
            CellRange {
                start: [0, 0, 0],
                count: [3, 2, 1]
            }
        );
        assert_eq!(src.value(3, 2, 1), 1.0);
    }

    #[test]
    fn test_single_layer_field_has_no_open_cells() {
        let field = ScalarField3D::new(Dims::new(4, 4, 1), 1u8);
        assert!(OpenBoundary::new(&field).cells().is_empty());
        assert_eq!(PaddedBoundary::new(&field, -1.0).cells().len(), 5 * 5 * 2);
    }

    #[test]
    fn test_padded_shell_reads_sentinel() {
        let field = ScalarField3D::new(Dims::new(2, 2, 2), 9.0f32);
        let src = PaddedBoundary::new(&field, -100.0);
        assert_eq!(src.value(-1, 0, 0), -100.0);
        assert_eq!(src.value(0, 2, 0), -100.0);
        assert_eq!(src.value(1, 1, 1), 9.0);
        assert_eq!(src.cells().start, [-1, -1, -1]);
        assert_eq!(src.cells().count, [3, 3, 3]);
    }
}
