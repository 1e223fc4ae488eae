use skirt_math::aabb::Aabb3;
use skirt_math::{Point3, Vector3};
use skirt_topology::PolyData;

/// Triangle soup over the 2D cells of a [`PolyData`], with per-vertex normals.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    pub positions: Vec<Point3>,
    pub normals: Vec<Vector3>,
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Triangulate the polygons (as fans) and triangle strips of `data`,
    /// keeping each cell's winding. Points are shared with `data` one-to-one;
    /// vertices and lines are ignored.
    pub fn from_poly_data(data: &PolyData) -> Self {
        let mut mesh = TriangleMesh {
            positions: data.points.clone(),
            ..Default::default()
        };

        for poly in &data.polys {
            for i in 1..poly.len().saturating_sub(1) {
                mesh.indices.extend_from_slice(&[poly[0], poly[i], poly[i + 1]]);
            }
        }

        for strip in &data.strips {
            for (j, w) in strip.windows(3).enumerate() {
                if j % 2 == 0 {
                    mesh.indices.extend_from_slice(&[w[0], w[1], w[2]]);
                } else {
                    mesh.indices.extend_from_slice(&[w[1], w[0], w[2]]);
                }
            }
        }

        mesh.compute_normals();
        mesh
    }

    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Unnormalised normal of triangle `t` by the right-hand rule.
    pub fn triangle_normal(&self, t: usize) -> Vector3 {
        let tri = &self.indices[3 * t..3 * t + 3];
        let p0 = self.positions[tri[0] as usize];
        let p1 = self.positions[tri[1] as usize];
        let p2 = self.positions[tri[2] as usize];
        (p1 - p0).cross(p2 - p0)
    }

    /// Accumulate face normals onto their vertices and normalise.
    ///
    /// Vertices that belong to no triangle keep a zero normal.
    pub fn compute_normals(&mut self) {
        let n = self.positions.len();
        self.normals.clear();
        self.normals.resize(n, Vector3::ZERO);

        for t in 0..self.triangle_count() {
            let normal = self.triangle_normal(t);
            for &i in &self.indices[3 * t..3 * t + 3] {
                self.normals[i as usize] += normal;
            }
        }

        for n in &mut self.normals {
            let len = n.length();
            if len > 1e-12 {
                *n /= len;
            }
        }
    }

    /// Compute the axis-aligned bounding box of all positions.
    pub fn bounding_box(&self) -> Aabb3 {
        Aabb3::from_points(&self.positions).unwrap_or(Aabb3::new(Point3::ZERO, Point3::ZERO))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirt_math::DVec3;

    fn unit_square() -> PolyData {
        let mut pd = PolyData::with_points(vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        ]);
        pd.insert_polygon(&[0, 1, 2, 3]);
        pd
    }

    #[test]
    fn test_polygon_fan() {
        let mesh = TriangleMesh::from_poly_data(&unit_square());
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn test_strip_keeps_winding() {
        let mut pd = PolyData::with_points(vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
        ]);
        pd.insert_strip(&[0, 1, 2, 3]);
        let mesh = TriangleMesh::from_poly_data(&pd);
        assert_eq!(mesh.indices, vec![0, 1, 2, 2, 1, 3]);
        for t in 0..mesh.triangle_count() {
            assert!(mesh.triangle_normal(t).z > 0.0, "triangle {} flipped", t);
        }
    }

    #[test]
    fn test_compute_normals() {
        let mesh = TriangleMesh::from_poly_data(&unit_square());
        assert_eq!(mesh.normals.len(), 4);
        for n in &mesh.normals {
            assert!((n.z - 1.0).abs() < 1e-10, "Expected +Z normal, got {:?}", n);
        }
    }

    #[test]
    fn test_bounding_box() {
        let mesh = TriangleMesh::from_poly_data(&unit_square());
        let bb = mesh.bounding_box();
        assert_eq!(bb.min, DVec3::new(0.0, 0.0, 0.0));
        assert_eq!(bb.max, DVec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = TriangleMesh::from_poly_data(&PolyData::new());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        let bb = mesh.bounding_box();
        assert_eq!(bb.min, DVec3::ZERO);
        assert_eq!(bb.max, DVec3::ZERO);
    }
}
