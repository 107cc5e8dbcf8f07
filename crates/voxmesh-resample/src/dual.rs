//! Cell-to-vertex interpolation.
//!
//! The output grid has one more sample per axis than the input. Vertex
//! `(i, j, k)` combines the eight cells `(i-1..=i, j-1..=j, k-1..=k)`, with
//! out-of-range cell indices mirrored back into the field.

use log::debug;
use rayon::prelude::*;
use voxmesh_field::{build_pool, reflect_index, CutoffRange, Sample, ScalarField3D};

use crate::error::{ResampleError, Result};

/// Cutoff returned when a mask was binarized to `{0, 1}`.
pub const BINARY_CUTOFF: CutoffRange = CutoffRange { lo: 0.5, hi: 1.0 };

/// The two mirrored cell indices around each vertex along one axis.
fn neighbour_pairs(n: usize) -> Vec<[usize; 2]> {
    (0..=n as i64)
        .map(|v| [reflect_index(v - 1, n), reflect_index(v, n)])
        .collect()
}

/// Apply `combine` to the eight cells around every vertex.
fn vertex_pass<T, U, F>(
    field: &ScalarField3D<T>,
    num_threads: i64,
    combine: F,
) -> Result<ScalarField3D<U>>
where
    T: Sample,
    U: Sample,
    F: Fn(&[T; 8]) -> U + Sync,
{
    if field.is_empty() {
        return Err(ResampleError::EmptyField(field.dims()));
    }

    let d = field.dims();
    let out_dims = d.grown(1);
    debug!("interpolating {d} cells to {out_dims} vertices");

    let xs = neighbour_pairs(d.x);
    let ys = neighbour_pairs(d.y);
    let zs = neighbour_pairs(d.z);

    let mut out = ScalarField3D::new(out_dims, U::default());
    let plane = out_dims.x * out_dims.y;
    let pool = build_pool(num_threads)?;
    pool.install(|| {
        out.as_mut_slice()
            .par_chunks_mut(plane)
            .enumerate()
            .for_each(|(k, slab)| {
                let [k0, k1] = zs[k];
                for (j, &[j0, j1]) in ys.iter().enumerate() {
                    for (i, &[i0, i1]) in xs.iter().enumerate() {
                        let cells = [
                            field.at(i0, j0, k0),
                            field.at(i1, j0, k0),
                            field.at(i0, j1, k0),
                            field.at(i1, j1, k0),
                            field.at(i0, j0, k1),
                            field.at(i1, j0, k1),
                            field.at(i0, j1, k1),
                            field.at(i1, j1, k1),
                        ];
                        slab[i + out_dims.x * j] = combine(&cells);
                    }
                }
            });
    });

    Ok(out)
}

fn mean<T: Sample>(cells: &[T; 8]) -> f32 {
    let sum: f64 = cells.iter().map(|v| v.to_f64()).sum();
    f32::from_f64(sum / 8.0)
}

/// Average each vertex's eight neighbouring cells.
///
/// A constant field stays constant.
pub fn interpolate_to_vertices<T: Sample>(
    field: &ScalarField3D<T>,
    num_threads: i64,
) -> Result<ScalarField3D<f32>> {
    vertex_pass(field, num_threads, mean)
}

/// Vertex interpolation for a material mask.
///
/// When `cutoff` spans a single category (`0 <= hi - lo <= 1`), cells whose
/// value falls in `[lo, hi]` count as 1 and all others as 0; the
/// averaged field is then a coverage fraction and the returned cutoff is
/// [`BINARY_CUTOFF`]. Wider ranges average the raw values and return
/// `cutoff` unchanged.
pub fn interpolate_mask_to_vertices<T: Sample>(
    field: &ScalarField3D<T>,
    cutoff: CutoffRange,
    num_threads: i64,
) -> Result<(ScalarField3D<f32>, CutoffRange)> {
    if !cutoff.is_ordered() {
        return Err(ResampleError::InvalidCutoff {
            lo: cutoff.lo,
            hi: cutoff.hi,
        });
    }

    if cutoff.spans_single_category() {
        debug!("binarizing mask for category {}", cutoff.lo);
        let binary = field.map(|v| {
            if cutoff.contains(v.to_f64()) {
                1.0f32
            } else {
                0.0
            }
        });
        let out = vertex_pass(&binary, num_threads, mean)?;
        Ok((out, BINARY_CUTOFF))
    } else {
        let out = vertex_pass(field, num_threads, mean)?;
        Ok((out, cutoff))
    }
}

/// Sum each vertex's eight neighbouring labels.
///
/// Sums beyond the `i32` range saturate.
pub fn interpolate_to_vertices_categorical(
    field: &ScalarField3D<i32>,
    num_threads: i64,
) -> Result<ScalarField3D<i32>> {
    vertex_pass(field, num_threads, |cells| {
        let sum: i64 = cells.iter().map(|&v| i64::from(v)).sum();
        i32::from_f64(sum as f64)
    })
}
