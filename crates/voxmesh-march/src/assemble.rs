//! Merge per-slab triangle lists into the output buffer.
//!
//! Two phases: an exclusive prefix sum over slab counts gives each slab its
//! target offset, then the buffer grows once and every slab copies into its
//! own disjoint range in parallel. Output is slab-major regardless of how
//! many threads ran.

use log::trace;
use rayon::prelude::*;
use rayon::ThreadPool;

use crate::mesh::TriangleBuffer;
use crate::triangle::Triangle;

/// Exclusive prefix sum of `counts`, plus the total.
pub fn slab_offsets(counts: &[usize]) -> (Vec<usize>, usize) {
    let mut offsets = Vec::with_capacity(counts.len());
    let mut running = 0;
    for &n in counts {
        offsets.push(running);
        running += n;
    }
    (offsets, running)
}

/// Append every slab to `out` in slab order. Returns the number of triangles added.
pub fn assemble(pool: &ThreadPool, out: &mut TriangleBuffer, slabs: &[Vec<Triangle>]) -> usize {
    let counts: Vec<usize> = slabs.iter().map(Vec::len).collect();
    let (offsets, total) = slab_offsets(&counts);
    trace!("assembling {} slabs, {} triangles", slabs.len(), total);
    if total == 0 {
        return 0;
    }

    let storage = out.storage_mut();
    let base = storage.len();
    storage.resize(base + total, Triangle::degenerate());

    let mut rest = &mut storage[base..];
    let mut start = 0;
    let mut targets: Vec<&mut [Triangle]> = Vec::with_capacity(slabs.len());
    for &end in offsets.iter().skip(1).chain(std::iter::once(&total)) {
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(end - start);
        targets.push(head);
        rest = tail;
        start = end;
    }

    pool.install(|| {
        targets
            .into_par_iter()
            .zip(slabs.par_iter())
            .for_each(|(dst, src)| dst.copy_from_slice(src));
    });

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxmesh_field::{build_pool, Point3};

    fn marker(x: f64) -> Triangle {
        Triangle::new(
            Point3::new(x, 0.0, 0.0),
            Point3::new(x, 1.0, 0.0),
            Point3::new(x, 0.0, 1.0),
        )
    }

    #[test]
    fn test_slab_offsets() {
        let (offsets, total) = slab_offsets(&[3, 0, 2, 5]);
        assert_eq!(offsets, vec![0, 3, 3, 5]);
        assert_eq!(total, 10);
        assert_eq!(slab_offsets(&[]), (vec![], 0));
    }

    #[test]
    fn test_assemble_appends_in_slab_order() {
        let pool = build_pool(3).unwrap();
        let mut out = TriangleBuffer::from(vec![marker(-1.0)]);
        let slabs = vec![
            vec![marker(0.0), marker(0.1)],
            vec![],
            vec![marker(2.0)],
            vec![marker(3.0), marker(3.1), marker(3.2)],
        ];

        let added = assemble(&pool, &mut out, &slabs);
        assert_eq!(added, 6);

        let xs: Vec<f64> = out.iter().map(|t| t.p0.x).collect();
        assert_eq!(xs, vec![-1.0, 0.0, 0.1, 2.0, 3.0, 3.1, 3.2]);
    }

    #[test]
    fn test_assemble_with_empty_leading_and_trailing_slabs() {
        let pool = build_pool(2).unwrap();
        let mut out = TriangleBuffer::new();
        let slabs = vec![vec![], vec![marker(1.0)], vec![], vec![marker(3.0), marker(3.5)], vec![]];

        assert_eq!(assemble(&pool, &mut out, &slabs), 3);
        let xs: Vec<f64> = out.iter().map(|t| t.p0.x).collect();
        assert_eq!(xs, vec![1.0, 3.0, 3.5]);
    }

    #[test]
    fn test_assemble_nothing_leaves_buffer_untouched() {
        let pool = build_pool(1).unwrap();
        let mut out = TriangleBuffer::from(vec![marker(7.0)]);
        assert_eq!(assemble(&pool, &mut out, &[vec![], vec![]]), 0);
        assert_eq!(out.len(), 1);
    }
}
