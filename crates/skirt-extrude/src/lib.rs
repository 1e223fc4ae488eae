//! Rotational extrusion of polygonal data about the z-axis.
//!
//! Free edges of polygons and triangle strips, and every line segment, sweep
//! into quadrilateral "skirts"; vertices sweep into polylines. Open sweeps can
//! be capped with copies of the generating cells at the first and last ring.

pub mod cap;
pub mod filter;
pub mod params;
pub mod stitch;
pub mod sweep;
pub mod triangulate;

pub use filter::rotational_extrude;
pub use params::{RadialMode, RotationalExtrusion};
pub use sweep::SweepSchedule;
pub use triangulate::TriangleMesh;
