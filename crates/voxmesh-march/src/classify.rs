//! Cube gathering and configuration classification.

use voxmesh_field::Point3;

use crate::boundary::CornerSource;
use crate::tables::{CORNER_OFFSETS, EDGE_TABLE, TRI_END, TRI_TABLE};

/// One cube corner: grid position and sample value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerSample {
    /// Grid position.
    pub position: Point3,
    /// Sample value.
    pub value: f64,
}

/// The 8 corners of one grid cell in [`CORNER_OFFSETS`] order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube {
    /// Corner samples.
    pub corners: [CornerSample; 8],
}

impl Cube {
    /// Gather the cell whose lowest corner is grid point `(i, j, k)`.
    pub fn gather<S: CornerSource + ?Sized>(source: &S, i: i64, j: i64, k: i64) -> Self {
        let corners = std::array::from_fn(|c| {
            let [dx, dy, dz] = CORNER_OFFSETS[c];
            let (x, y, z) = (i + dx, j + dy, k + dz);
            CornerSample {
                position: Point3::new(x as f64, y as f64, z as f64),
                value: source.value(x, y, z),
            }
        });
        Self { corners }
    }

    /// Build a cube from explicit corner values at the unit cell `[0, 1]^3`.
    pub fn unit(values: [f64; 8]) -> Self {
        let corners = std::array::from_fn(|c| {
            let [dx, dy, dz] = CORNER_OFFSETS[c];
            CornerSample {
                position: Point3::new(dx as f64, dy as f64, dz as f64),
                value: values[c],
            }
        });
        Self { corners }
    }

    /// Corner values in classification order.
    pub fn values(&self) -> [f64; 8] {
        self.corners.map(|c| c.value)
    }

    /// Configuration index of this cube at `iso_value`.
    pub fn configuration(&self, iso_value: f64) -> u8 {
        configuration_index(&self.values(), iso_value)
    }
}

/// 8-bit configuration index: bit `c` is set iff corner `c` is below `iso_value`.
#[inline]
pub fn configuration_index(values: &[f64; 8], iso_value: f64) -> u8 {
    let mut index = 0u8;
    for (c, &v) in values.iter().enumerate() {
        if v < iso_value {
            index |= 1 << c;
        }
    }
    index
}

/// 12-bit mask of the edges crossed by the surface for `index`.
#[inline]
pub fn edge_mask(index: u8) -> u16 {
    EDGE_TABLE[index as usize]
}

/// Edge-index triples of the triangles emitted for `index`.
pub fn triangle_edges(index: u8) -> impl Iterator<Item = [usize; 3]> {
    TRI_TABLE[index as usize]
        .chunks_exact(3)
        .take_while(|tri| tri[0] != TRI_END)
        .map(|tri| [tri[0] as usize, tri[1] as usize, tri[2] as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_cubes_have_no_edges() {
        assert_eq!(configuration_index(&[0.0; 8], 0.5), 255);
        assert_eq!(configuration_index(&[1.0; 8], 0.5), 0);
        assert_eq!(edge_mask(0), 0);
        assert_eq!(edge_mask(255), 0);
        assert_eq!(triangle_edges(0).count(), 0);
    }

    #[test]
    fn test_threshold_is_strict() {
        // equal to the iso-value counts as not below
        assert_eq!(configuration_index(&[0.5; 8], 0.5), 0);
    }

    #[test]
    fn test_single_corner_below() {
        let mut values = [1.0; 8];
        values[0] = 0.0;
        let idx = configuration_index(&values, 0.5);
        assert_eq!(idx, 1);
        // edges 0, 3, 8 meet at corner 0
        assert_eq!(edge_mask(idx), 0b1_0000_1001);
        assert_eq!(triangle_edges(idx).collect::<Vec<_>>(), vec![[0, 8, 3]]);
    }

    #[test]
    fn test_single_corner_above() {
        let mut values = [0.0; 8];
        values[0] = 200.0;
        let cube = Cube::unit(values);
        let idx = cube.configuration(128.0);
        assert_eq!(idx, 0xFE);
        assert_eq!(triangle_edges(idx).collect::<Vec<_>>(), vec![[0, 3, 8]]);
    }

    #[test]
    fn test_gather_positions() {
        struct Ramp;
        impl CornerSource for Ramp {
            fn cells(&self) -> crate::boundary::CellRange {
                crate::boundary::CellRange {
                    start: [0, 0, 0],
                    count: [1, 1, 1],
                }
            }
            fn value(&self, i: i64, j: i64, k: i64) -> f64 {
                (i + 10 * j + 100 * k) as f64
            }
        }

        let cube = Cube::gather(&Ramp, 2, 3, 4);
        assert_eq!(cube.corners[0].position, Point3::new(2.0, 3.0, 4.0));
        assert_eq!(cube.corners[6].position, Point3::new(3.0, 4.0, 5.0));
        assert_eq!(cube.corners[6].value, 3.0 + 40.0 + 500.0);
    }
}
