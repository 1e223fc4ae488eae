use crate::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Axis-Aligned Bounding Box in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb3 {
    pub min: Point3,
    pub max: Point3,
}

impl Aabb3 {
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Box around `points`, or `None` for an empty slice.
    pub fn from_points(points: &[Point3]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;
        let mut aabb = Self::new(first, first);
        for &p in rest {
            aabb.min = aabb.min.min(p);
            aabb.max = aabb.max.max(p);
        }
        Some(aabb)
    }

    pub fn center(&self) -> Point3 {
        (self.min + self.max) * 0.5
    }

    pub fn extents(&self) -> Vector3 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec3;

    #[test]
    fn test_from_points() {
        let pts = vec![dvec3(1.0, 0.0, 0.0), dvec3(-1.0, 0.0, 1.0), dvec3(0.0, 1.0, 0.5)];
        let aabb = Aabb3::from_points(&pts).unwrap();
        assert_eq!(aabb.min, dvec3(-1.0, 0.0, 0.0));
        assert_eq!(aabb.max, dvec3(1.0, 1.0, 1.0));
        assert_eq!(aabb.center(), dvec3(0.0, 0.5, 0.5));
        assert_eq!(aabb.extents(), dvec3(2.0, 1.0, 1.0));
    }

    #[test]
    fn test_from_no_points() {
        assert!(Aabb3::from_points(&[]).is_none());
    }
}
