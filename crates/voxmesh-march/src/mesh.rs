//! Triangle buffers and indexed meshes.

use std::collections::HashMap;

use voxmesh_field::Point3;

use crate::triangle::Triangle;

/// Append-only, ordered triangle sequence.
///
/// Extraction appends to an existing buffer, so several passes (per
/// material, per sub-volume) can accumulate into one mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleBuffer {
    triangles: Vec<Triangle>,
}

impl TriangleBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with room for `capacity` triangles.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    /// Number of triangles.
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// True if the buffer holds no triangles.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Triangles in insertion order.
    pub fn as_slice(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Iterate over triangles in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    /// Append triangles.
    pub fn extend_from_slice(&mut self, triangles: &[Triangle]) {
        self.triangles.extend_from_slice(triangles);
    }

    /// Append one triangle.
    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Remove every triangle.
    pub fn clear(&mut self) {
        self.triangles.clear();
    }

    /// Consume the buffer.
    pub fn into_vec(self) -> Vec<Triangle> {
        self.triangles
    }

    pub(crate) fn storage_mut(&mut self) -> &mut Vec<Triangle> {
        &mut self.triangles
    }

    /// Axis-aligned bounds of all vertices as `(min, max)`.
    pub fn bounds(&self) -> Option<([f64; 3], [f64; 3])> {
        if self.triangles.is_empty() {
            return None;
        }

        let mut min = [f64::MAX; 3];
        let mut max = [f64::MIN; 3];
        for p in self.triangles.iter().flat_map(|t| t.vertices()) {
            for axis in 0..3 {
                min[axis] = min[axis].min(p[axis]);
                max[axis] = max[axis].max(p[axis]);
            }
        }

        Some((min, max))
    }

    /// Weld coincident vertices into an indexed mesh.
    ///
    /// Vertices are merged only when their coordinates are bit-identical
    /// (after folding `-0.0` into `0.0`).
    pub fn to_indexed_mesh(&self) -> IndexedMesh {
        let mut lookup: HashMap<[u64; 3], u32> = HashMap::new();
        let mut mesh = IndexedMesh::default();

        for tri in &self.triangles {
            for p in tri.vertices() {
                let key = vertex_key(&p);
                let next = (mesh.vertices.len() / 3) as u32;
                let idx = *lookup.entry(key).or_insert_with(|| {
                    mesh.vertices.extend([p.x as f32, p.y as f32, p.z as f32]);
                    next
                });
                mesh.indices.push(idx);
            }
        }

        mesh
    }

    /// Number of welded edges used by exactly one triangle.
    ///
    /// Zero means the mesh is closed (watertight).
    pub fn boundary_edge_count(&self) -> usize {
        self.to_indexed_mesh().boundary_edge_count()
    }
}

impl<'a> IntoIterator for &'a TriangleBuffer {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}

impl From<Vec<Triangle>> for TriangleBuffer {
    fn from(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }
}

fn vertex_key(p: &Point3) -> [u64; 3] {
    [
        (p.x + 0.0).to_bits(),
        (p.y + 0.0).to_bits(),
        (p.z + 0.0).to_bits(),
    ]
}

/// A welded triangle mesh in flat-array form, ready for mesh writers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexedMesh {
    /// Flat array of vertex positions: `[x0, y0, z0, x1, y1, z1, ...]`.
    pub vertices: Vec<f32>,
    /// Flat array of triangle indices: `[i0, i1, i2, ...]`.
    pub indices: Vec<u32>,
}

impl IndexedMesh {
    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Number of undirected edges used by exactly one triangle.
    pub fn boundary_edge_count(&self) -> usize {
        let mut uses: HashMap<(u32, u32), usize> = HashMap::new();
        for tri in self.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                if a == b {
                    continue;
                }
                *uses.entry((a.min(b), a.max(b))).or_insert(0) += 1;
            }
        }
        uses.values().filter(|&&n| n == 1).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tetrahedron() -> TriangleBuffer {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(0.0, 1.0, 0.0);
        let d = Point3::new(0.0, 0.0, 1.0);
        TriangleBuffer::from(vec![
            Triangle::new(a, c, b),
            Triangle::new(a, b, d),
            Triangle::new(a, d, c),
            Triangle::new(b, c, d),
        ])
    }

    #[test]
    fn test_weld_shares_vertices() {
        let mesh = tetrahedron().to_indexed_mesh();
        assert_eq!(mesh.num_vertices(), 4);
        assert_eq!(mesh.num_triangles(), 4);
    }

    #[test]
    fn test_closed_and_open_boundaries() {
        let mut buf = tetrahedron();
        assert_eq!(buf.boundary_edge_count(), 0);

        let open: Vec<Triangle> = buf.iter().take(3).copied().collect();
        assert_eq!(TriangleBuffer::from(open).boundary_edge_count(), 3);

        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.boundary_edge_count(), 0);
    }

    #[test]
    fn test_negative_zero_welds_with_zero() {
        let t1 = Triangle::new(
            Point3::new(-0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        );
        let t2 = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        );
        let mesh = TriangleBuffer::from(vec![t1, t2]).to_indexed_mesh();
        assert_eq!(mesh.num_vertices(), 4);
    }

    #[test]
    fn test_bounds() {
        let buf = tetrahedron();
        assert_eq!(buf.bounds(), Some(([0.0; 3], [1.0; 3])));
        assert_eq!(TriangleBuffer::new().bounds(), None);
    }
}
