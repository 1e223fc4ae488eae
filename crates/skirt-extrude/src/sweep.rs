//! Sweep schedule: which rings exist, where each one sits, and how ring
//! points are numbered in the output.

use skirt_core::error::{Result, SkirtError};
use skirt_math::{Point3, RadialChange, RingTransform};

use crate::params::{RadialMode, RotationalExtrusion};

/// Resolved sweep parameters for one execution.
///
/// Step `k` of `0..=resolution` maps to a ring. On a closed sweep the final
/// step maps back onto ring 0, so only `resolution` rings are stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepSchedule {
    resolution: u32,
    angle: f64,
    translation: f64,
    delta_radius: f64,
    radial_mode: RadialMode,
    closed: bool,
}

impl SweepSchedule {
    pub fn new(params: &RotationalExtrusion) -> Self {
        Self {
            resolution: params.resolution(),
            angle: params.angle(),
            translation: params.translation(),
            delta_radius: params.delta_radius(),
            radial_mode: params.radial_mode(),
            closed: params.is_closed_sweep(),
        }
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of distinct rings written to the output.
    pub fn ring_count(&self) -> Result<u32> {
        if self.closed {
            return Ok(self.resolution);
        }
        self.resolution.checked_add(1).ok_or_else(|| {
            SkirtError::InvalidOperation(format!(
                "resolution {} leaves no room for the last ring",
                self.resolution
            ))
        })
    }

    /// Ring holding the points of sweep step `step`.
    pub fn ring_of_step(&self, step: u32) -> u32 {
        if self.closed && step == self.resolution {
            0
        } else {
            step
        }
    }

    /// Output id of input point `id` at sweep step `step`, for `n` input points.
    pub fn point_id(&self, step: u32, id: u32, n: u32) -> u32 {
        self.ring_of_step(step) * n + id
    }

    /// Transform taking ring 0 to ring `step`.
    pub fn ring_transform(&self, step: u32) -> RingTransform {
        let r = f64::from(self.resolution);
        let k = f64::from(step);
        let angle = (self.angle * k / r).to_radians();
        let dz = self.translation * k / r;
        let delta = self.delta_radius * k / r;
        let radial = match self.radial_mode {
            RadialMode::Scale => RadialChange::Scale(1.0 + delta),
            RadialMode::Offset => RadialChange::Offset(delta),
        };
        RingTransform::new(angle, radial, dz)
    }

    /// All ring points, ring-major. Ring 0 is a verbatim copy of `points`.
    ///
    /// Fails when the ring points could not all be addressed with `u32` ids.
    pub fn generate_points(&self, points: &[Point3]) -> Result<Vec<Point3>> {
        let rings = self.ring_count()?;
        let total = points
            .len()
            .checked_mul(rings as usize)
            .filter(|&t| t <= u32::MAX as usize)
            .ok_or_else(|| {
                SkirtError::InvalidOperation(format!(
                    "{} points x {} rings exceeds the u32 point id range",
                    points.len(),
                    rings
                ))
            })?;

        let mut out = Vec::new();
        out.try_reserve_exact(total).map_err(|e| {
            SkirtError::InvalidOperation(format!("cannot allocate {} ring points: {}", total, e))
        })?;
        out.extend_from_slice(points);
        for step in 1..rings {
            self.ring_transform(step).transform_points(points, &mut out);
        }
        Ok(out)
    }
}
