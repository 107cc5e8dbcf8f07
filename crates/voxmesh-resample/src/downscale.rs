//! Stride downscaling.

use log::debug;
use rayon::prelude::*;
use voxmesh_field::{build_pool, Dims, Sample, ScalarField3D};

use crate::error::{ResampleError, Result};

/// Keep every `factor`-th sample along each axis.
///
/// The result is `floor(X / factor) x floor(Y / factor) x floor(Z / factor)`
/// with `out(i, j, k) == field(i * factor, j * factor, k * factor)`.
pub fn downscale<T: Sample>(
    field: &ScalarField3D<T>,
    factor: usize,
    num_threads: i64,
) -> Result<ScalarField3D<T>> {
    if factor == 0 {
        return Err(ResampleError::InvalidFactor(factor));
    }
    if field.is_empty() {
        return Err(ResampleError::EmptyField(field.dims()));
    }

    let d = field.dims();
    let out_dims = Dims::new(d.x / factor, d.y / factor, d.z / factor);
    debug!("downscaling {d} by {factor} -> {out_dims}");

    let mut out = ScalarField3D::new(out_dims, T::default());
    if out_dims.is_empty() {
        return Ok(out);
    }

    let plane = out_dims.x * out_dims.y;
    let pool = build_pool(num_threads)?;
    pool.install(|| {
        out.as_mut_slice()
            .par_chunks_mut(plane)
            .enumerate()
            .for_each(|(k, slab)| {
                for j in 0..out_dims.y {
                    for i in 0..out_dims.x {
                        slab[i + out_dims.x * j] = field.at(i * factor, j * factor, k * factor);
                    }
                }
            });
    });

    Ok(out)
}

/// Downscale `field` and replace it with the result.
///
/// On error the field is left unchanged.
pub fn downscale_in_place<T: Sample>(
    field: &mut ScalarField3D<T>,
    factor: usize,
    num_threads: i64,
) -> Result<()> {
    *field = downscale(field, factor, num_threads)?;
    Ok(())
}
