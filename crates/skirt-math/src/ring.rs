//! Per-step transform of a rotational sweep about the z-axis.

use crate::Point3;

/// How the distance from the z-axis changes at one sweep step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RadialChange {
    /// Multiply x and y by the factor.
    Scale(f64),
    /// Add the amount to each point's distance from the axis.
    /// Points on the axis stay on the axis.
    Offset(f64),
}

/// Rotation about +z, followed by a radial change in the xy-plane and a
/// translation along z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingTransform {
    sin: f64,
    cos: f64,
    radial: RadialChange,
    dz: f64,
}

impl RingTransform {
    pub fn identity() -> Self {
        Self::new(0.0, RadialChange::Scale(1.0), 0.0)
    }

    /// `angle` is in radians; positive angles turn +x towards +y.
    pub fn new(angle: f64, radial: RadialChange, dz: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            sin,
            cos,
            radial,
            dz,
        }
    }

    pub fn transform_point(&self, p: Point3) -> Point3 {
        let rx = p.x * self.cos - p.y * self.sin;
        let ry = p.x * self.sin + p.y * self.cos;
        let factor = match self.radial {
            RadialChange::Scale(s) => s,
            RadialChange::Offset(d) => {
                let r = p.x.hypot(p.y);
                if r > 0.0 {
                    (r + d) / r
                } else {
                    0.0
                }
            }
        };
        Point3::new(factor * rx, factor * ry, p.z + self.dz)
    }

    pub fn transform_points(&self, points: &[Point3], out: &mut Vec<Point3>) {
        out.extend(points.iter().map(|&p| self.transform_point(p)));
    }
}

impl Default for RingTransform {
    fn default() -> Self {
        Self::identity()
    }
}
