//! Per-slab triangle generation.
//!
//! A slab is every cell sharing one x index. Each slab writes only to its
//! own triangle list, so slabs run in parallel without synchronization.

use rayon::prelude::*;
use rayon::ThreadPool;
use voxmesh_field::Point3;

use crate::boundary::CornerSource;
use crate::classify::{edge_mask, triangle_edges, Cube};
use crate::interpolate::edge_crossing;
use crate::triangle::Triangle;

/// Append the triangles of one cube to `out`. Returns how many were added.
pub fn march_cube(cube: &Cube, iso_value: f64, out: &mut Vec<Triangle>) -> usize {
    let index = cube.configuration(iso_value);
    let mask = edge_mask(index);
    if mask == 0 {
        return 0;
    }

    let mut points = [Point3::origin(); 12];
    for (edge, point) in points.iter_mut().enumerate() {
        if mask & (1 << edge) != 0 {
            *point = edge_crossing(cube, edge, iso_value);
        }
    }

    let before = out.len();
    out.extend(
        triangle_edges(index).map(|[e0, e1, e2]| Triangle::new(points[e0], points[e1], points[e2])),
    );
    out.len() - before
}

/// Triangles of every cell in slab `i`, in z-major, y-minor order.
pub fn march_slab<S: CornerSource + ?Sized>(source: &S, i: i64, iso_value: f64) -> Vec<Triangle> {
    let cells = source.cells();
    let [_, y0, z0] = cells.start;
    let [_, ny, nz] = cells.count;

    let mut triangles = Vec::new();
    for k in z0..z0 + nz as i64 {
        for j in y0..y0 + ny as i64 {
            let cube = Cube::gather(source, i, j, k);
            march_cube(&cube, iso_value, &mut triangles);
        }
    }
    triangles
}

/// Run every slab of `source` on `pool`, returning one list per slab in x order.
pub fn march_slabs<S: CornerSource + ?Sized>(
    pool: &ThreadPool,
    source: &S,
    iso_value: f64,
) -> Vec<Vec<Triangle>> {
    let cells = source.cells();
    if cells.is_empty() {
        return Vec::new();
    }
    let x0 = cells.start[0];

    pool.install(|| {
        (0..cells.count[0])
            .into_par_iter()
            .map(|s| march_slab(source, x0 + s as i64, iso_value))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::OpenBoundary;
    use voxmesh_field::{build_pool, Dims, ScalarField3D};

    #[test]
    fn test_march_cube_uniform() {
        let mut out = Vec::new();
        assert_eq!(march_cube(&Cube::unit([1.0; 8]), 0.5, &mut out), 0);
        assert_eq!(march_cube(&Cube::unit([0.0; 8]), 0.5, &mut out), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_march_cube_half_split() {
        // bottom face below, top face above: one quad of two triangles at z = 0.5
        let cube = Cube::unit([0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
        let mut out = Vec::new();
        assert_eq!(march_cube(&cube, 0.5, &mut out), 2);
        for t in &out {
            for p in t.vertices() {
                assert!((p.z - 0.5).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_slab_count_matches_cells() {
        let field = ScalarField3D::from_fn(Dims::new(5, 4, 3), |i, _, _| i as f32);
        let pool = build_pool(2).unwrap();
        let slabs = march_slabs(&pool, &OpenBoundary::new(&field), 1.5);
        assert_eq!(slabs.len(), 4);
        // the plane x = 1.5 only cuts slab 1
        assert!(slabs[0].is_empty());
        assert_eq!(slabs[1].len(), 3 * 2 * 2);
        assert!(slabs[2].is_empty());
        assert!(slabs[3].is_empty());
    }
}
