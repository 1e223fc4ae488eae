use skirt_core::traits::BoundingBox;
use skirt_math::{Aabb3, Point3};

use super::mesh::PolyData;

impl PolyData {
    /// Bounds of all points, or `None` for a dataset without points.
    pub fn bounds(&self) -> Option<Aabb3> {
        Aabb3::from_points(&self.points)
    }
}

impl BoundingBox for PolyData {
    type Point = Point3;

    fn bounding_box(&self) -> (Point3, Point3) {
        self.bounds()
            .map(|b| (b.min, b.max))
            .unwrap_or((Point3::ZERO, Point3::ZERO))
    }
}
