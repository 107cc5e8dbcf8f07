use approx::assert_relative_eq;
use voxmesh::resample::BINARY_CUTOFF;
use voxmesh::{
    downscale, downscale_in_place, extract_isosurface, extract_mask_surface,
    interpolate_mask_to_vertices, interpolate_to_vertices, interpolate_to_vertices_categorical,
    CutoffRange, Dims, Error, ExtractSettings, ResampleError, ScalarField3D, TriangleBuffer,
};

/// Label 2 in the cells `[lo, hi)` on every axis, 0 elsewhere.
fn labelled_block(n: usize, lo: usize, hi: usize) -> ScalarField3D<u8> {
    ScalarField3D::from_fn(Dims::new(n, n, n), |i, j, k| {
        let inside = [i, j, k].iter().all(|v| (lo..hi).contains(v));
        if inside {
            2
        } else {
            0
        }
    })
}

#[test]
fn downscale_keeps_strided_samples() {
    let field = ScalarField3D::from_fn(Dims::new(9, 8, 7), |i, j, k| (i * 64 + j * 8 + k) as u16);
    let small = downscale(&field, 3, 2).unwrap();
    assert_eq!(small.dims(), Dims::new(3, 2, 2));
    for k in 0..2 {
        for j in 0..2 {
            for i in 0..3 {
                assert_eq!(small.at(i, j, k), field.at(3 * i, 3 * j, 3 * k));
            }
        }
    }
}

#[test]
fn downscale_errors() {
    let mut field = ScalarField3D::new(Dims::new(4, 4, 4), 1.0f32);
    assert_eq!(
        downscale_in_place(&mut field, 0, 1).unwrap_err(),
        ResampleError::InvalidFactor(0)
    );
    assert_eq!(field.dims(), Dims::new(4, 4, 4));

    let empty = ScalarField3D::new(Dims::new(0, 0, 0), 1.0f32);
    let err: Error = downscale(&empty, 2, 1).unwrap_err().into();
    assert_eq!(
        err,
        Error::Resample(ResampleError::EmptyField(Dims::new(0, 0, 0)))
    );
}

#[test]
fn vertex_interpolation_of_constants() {
    let field = ScalarField3D::new(Dims::new(5, 3, 4), 2.5f64);
    let out = interpolate_to_vertices(&field, 0).unwrap();
    assert_eq!(out.dims(), Dims::new(6, 4, 5));
    for &v in out.as_slice() {
        assert_relative_eq!(v, 2.5);
    }

    let labels = ScalarField3D::new(Dims::new(3, 3, 3), 5i32);
    let sums = interpolate_to_vertices_categorical(&labels, 2).unwrap();
    assert!(sums.as_slice().iter().all(|&v| v == 40));
}

#[test]
fn single_category_mask_becomes_binary() {
    let labels = labelled_block(8, 2, 6);
    let (mask, cutoff) = interpolate_mask_to_vertices(&labels, CutoffRange::single(2.0), 1).unwrap();
    assert_eq!(cutoff, BINARY_CUTOFF);
    assert_relative_eq!(mask.at(4, 4, 4), 1.0);
    assert_relative_eq!(mask.at(0, 0, 0), 0.0);
    assert!(mask.as_slice().iter().all(|&v| (0.0..=1.0).contains(&v)));
}

#[test]
fn mask_surface_wraps_the_block() {
    let labels = labelled_block(8, 2, 6);
    let settings = ExtractSettings {
        num_threads: 2,
        ..Default::default()
    };

    let mut out = TriangleBuffer::new();
    let added = extract_mask_surface(&mut out, &labels, CutoffRange::single(2.0), &settings).unwrap();
    assert!(added > 0);

    let (min, max) = out.bounds().unwrap();
    for axis in 0..3 {
        assert!(min[axis] >= 2.0 - 1e-9);
        assert!(max[axis] <= 6.0 + 1e-9);
    }

    let mut other = TriangleBuffer::new();
    extract_mask_surface(&mut other, &labels, CutoffRange::single(7.0), &settings).unwrap();
    assert!(other.is_empty());
}

#[test]
fn wide_cutoff_extracts_at_lower_bound() {
    let labels = labelled_block(8, 2, 6);
    let settings = ExtractSettings {
        num_threads: 1,
        ..Default::default()
    };

    let mut via_mask = TriangleBuffer::new();
    extract_mask_surface(&mut via_mask, &labels, CutoffRange::new(1.0, 2.5), &settings)
        .unwrap();

    let vertices = interpolate_to_vertices(&labels, 1).unwrap();
    let mut direct = TriangleBuffer::new();
    extract_isosurface(&mut direct, &vertices, 1.0, false, 1).unwrap();

    assert!(!direct.is_empty());
    assert_eq!(via_mask, direct);
}

#[test]
fn reversed_cutoff_fails_before_extraction() {
    let labels = labelled_block(4, 1, 3);
    let mut out = TriangleBuffer::new();
    let err = extract_mask_surface(
        &mut out,
        &labels,
        CutoffRange::new(3.0, 1.0),
        &ExtractSettings::default(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        Error::Resample(ResampleError::InvalidCutoff { lo: 3.0, hi: 1.0 })
    );
    assert!(out.is_empty());
}

#[test]
fn downscaled_field_still_extracts() {
    let n = 24;
    let c = (n as f64 - 1.0) / 2.0;
    let field = ScalarField3D::from_fn(Dims::new(n, n, n), |i, j, k| {
        let d2 = (i as f64 - c).powi(2) + (j as f64 - c).powi(2) + (k as f64 - c).powi(2);
        (64.0 - d2) as f32
    });

    let mut full = TriangleBuffer::new();
    extract_isosurface(&mut full, &field, 0.0, false, 0).unwrap();

    let small = downscale(&field, 2, 0).unwrap();
    let mut coarse = TriangleBuffer::new();
    extract_isosurface(&mut coarse, &small, 0.0, false, 0).unwrap();

    assert!(!coarse.is_empty());
    assert!(coarse.len() < full.len());
    assert_eq!(coarse.boundary_edge_count(), 0);
}
