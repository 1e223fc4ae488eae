pub mod aabb;
pub mod ring;

pub use glam::DVec3;
pub use aabb::Aabb3;
pub use ring::{RadialChange, RingTransform};

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
