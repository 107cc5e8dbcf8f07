//! Output triangles.

use voxmesh_field::{Point3, Vec3};

/// Per-axis weights of the combined directional weight, `(2, 1, 3) / sqrt(14)`.
const WEIGHT_AXES: [f64; 3] = [2.0, 1.0, 3.0];

/// One extracted triangle.
///
/// Vertex order is the winding given by the connectivity table. `weight`
/// is a derived scalar mixing the components of the unit face normal with
/// fixed unequal weights; it is not a normal and exists for consumers that
/// expect it next to each facet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First vertex.
    pub p0: Point3,
    /// Second vertex.
    pub p1: Point3,
    /// Third vertex.
    pub p2: Point3,
    /// Combined directional weight of the face normal.
    pub weight: f64,
}

impl Triangle {
    /// Build a triangle and compute its directional weight.
    pub fn new(p0: Point3, p1: Point3, p2: Point3) -> Self {
        let weight = directional_weight(&face_normal(&p0, &p1, &p2));
        Self { p0, p1, p2, weight }
    }

    /// A zero-area triangle at the origin, used to pre-size buffers.
    pub fn degenerate() -> Self {
        Self {
            p0: Point3::origin(),
            p1: Point3::origin(),
            p2: Point3::origin(),
            weight: 0.0,
        }
    }

    /// Vertices in winding order.
    pub fn vertices(&self) -> [Point3; 3] {
        [self.p0, self.p1, self.p2]
    }

    /// Unit face normal following the right-hand rule, or zero if degenerate.
    pub fn normal(&self) -> Vec3 {
        face_normal(&self.p0, &self.p1, &self.p2)
    }

    /// Surface area.
    pub fn area(&self) -> f64 {
        (self.p1 - self.p0).cross(&(self.p2 - self.p0)).norm() * 0.5
    }
}

fn face_normal(p0: &Point3, p1: &Point3, p2: &Point3) -> Vec3 {
    let n = (p1 - p0).cross(&(p2 - p0));
    let len = n.norm();
    if len > 0.0 {
        n / len
    } else {
        Vec3::zeros()
    }
}

fn directional_weight(n: &Vec3) -> f64 {
    let norm = WEIGHT_AXES.iter().map(|w| w * w).sum::<f64>().sqrt();
    (WEIGHT_AXES[0] * n.x + WEIGHT_AXES[1] * n.y + WEIGHT_AXES[2] * n.z) / norm
}
