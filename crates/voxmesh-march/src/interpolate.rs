//! Edge crossing interpolation.

use voxmesh_field::Point3;

use crate::classify::Cube;
use crate::tables::{CORNER_OFFSETS, EDGE_CORNERS};

/// Corner values closer than this are treated as equal.
pub const FLAT_EDGE_EPSILON: f64 = 1e-30;

/// Point where the iso-value crosses the edge `(p0, v0) -> (p1, v1)`.
///
/// Linear interpolation `p0 + (p1 - p0) * (iso - v0) / (v1 - v0)`. When the
/// two values are numerically equal the edge is flat and `p0` is returned.
///
/// Differences are taken on halved values so they stay finite for any pair
/// of finite samples, including a shell of `f64::MIN`.
#[inline]
pub fn interpolate_edge(p0: &Point3, v0: f64, p1: &Point3, v1: f64, iso_value: f64) -> Point3 {
    let denom = v1 * 0.5 - v0 * 0.5;
    if denom.abs() <= FLAT_EDGE_EPSILON * 0.5 {
        return *p0;
    }
    p0 + (p1 - p0) * ((iso_value * 0.5 - v0 * 0.5) / denom)
}

/// Crossing point on cube edge `edge` (0..12).
///
/// The edge is always walked from its lower grid corner to its upper one,
/// so neighbouring cubes sharing the edge produce bit-identical points.
#[inline]
pub fn edge_crossing(cube: &Cube, edge: usize, iso_value: f64) -> Point3 {
    let [a, b] = EDGE_CORNERS[edge];
    let (a, b) = if CORNER_OFFSETS[a] <= CORNER_OFFSETS[b] {
        (a, b)
    } else {
        (b, a)
    };
    let (ca, cb) = (&cube.corners[a], &cube.corners[b]);
    interpolate_edge(&ca.position, ca.value, &cb.position, cb.value, iso_value)
}
