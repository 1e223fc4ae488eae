use std::fmt;

use serde::{Deserialize, Serialize};

/// How `delta_radius` changes the distance of swept points from the z-axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RadialMode {
    /// xy is scaled by `1 + delta_radius * k / resolution` at step `k`.
    #[default]
    Scale,
    /// `delta_radius * k / resolution` is added to each point's radius.
    Offset,
}

/// Parameters of the rotational extrusion filter.
///
/// The sweep turns the input about +z by `angle` degrees in `resolution`
/// steps, while moving it `translation` along z and changing its radius by
/// `delta_radius`. Missing fields take their defaults when deserialised.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationalExtrusion {
    resolution: u32,
    capping: bool,
    angle: f64,
    translation: f64,
    delta_radius: f64,
    radial_mode: RadialMode,
}

impl RotationalExtrusion {
    pub const DEFAULT_RESOLUTION: u32 = 12;
    pub const DEFAULT_ANGLE: f64 = 360.0;
    pub const MAX_RESOLUTION: u32 = i32::MAX as u32;

    /// Capping on, a full turn in 12 steps, no translation or radius change.
    pub fn new() -> Self {
        Self {
            resolution: Self::DEFAULT_RESOLUTION,
            capping: true,
            angle: Self::DEFAULT_ANGLE,
            translation: 0.0,
            delta_radius: 0.0,
            radial_mode: RadialMode::Scale,
        }
    }

    /// Number of sweep steps, in `1..=MAX_RESOLUTION`.
    pub fn resolution(&self) -> u32 {
        self.resolution.clamp(1, Self::MAX_RESOLUTION)
    }

    /// Clamped to `1..=MAX_RESOLUTION`.
    pub fn set_resolution(&mut self, resolution: u32) {
        self.resolution = resolution.clamp(1, Self::MAX_RESOLUTION);
    }

    pub fn capping(&self) -> bool {
        self.capping
    }

    pub fn set_capping(&mut self, capping: bool) {
        self.capping = capping;
    }

    /// Sweep angle in degrees. Negative angles sweep clockwise seen from +z.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn set_angle(&mut self, angle: f64) {
        self.angle = angle;
    }

    /// Total displacement along z over the sweep.
    pub fn translation(&self) -> f64 {
        self.translation
    }

    pub fn set_translation(&mut self, translation: f64) {
        self.translation = translation;
    }

    /// Total radial change over the sweep, see [`RadialMode`].
    pub fn delta_radius(&self) -> f64 {
        self.delta_radius
    }

    pub fn set_delta_radius(&mut self, delta_radius: f64) {
        self.delta_radius = delta_radius;
    }

    pub fn radial_mode(&self) -> RadialMode {
        self.radial_mode
    }

    pub fn set_radial_mode(&mut self, radial_mode: RadialMode) {
        self.radial_mode = radial_mode;
    }

    pub fn with_resolution(mut self, resolution: u32) -> Self {
        self.set_resolution(resolution);
        self
    }

    pub fn with_capping(mut self, capping: bool) -> Self {
        self.capping = capping;
        self
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_translation(mut self, translation: f64) -> Self {
        self.translation = translation;
        self
    }

    pub fn with_delta_radius(mut self, delta_radius: f64) -> Self {
        self.delta_radius = delta_radius;
        self
    }

    pub fn with_radial_mode(mut self, radial_mode: RadialMode) -> Self {
        self.radial_mode = radial_mode;
        self
    }

    /// True when the last ring lands on the first: a whole number of turns
    /// with no translation and no radius change.
    pub fn is_closed_sweep(&self) -> bool {
        self.angle.abs() % 360.0 == 0.0 && self.translation == 0.0 && self.delta_radius == 0.0
    }
}

impl Default for RotationalExtrusion {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RotationalExtrusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Resolution: {}", self.resolution())?;
        writeln!(f, "Capping: {}", if self.capping { "On" } else { "Off" })?;
        writeln!(f, "Angle: {}", self.angle)?;
        writeln!(f, "Translation: {}", self.translation)?;
        writeln!(f, "Delta Radius: {}", self.delta_radius)?;
        write!(f, "Radial Mode: {:?}", self.radial_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = RotationalExtrusion::default();
        assert_eq!(p.resolution(), 12);
        assert!(p.capping());
        assert_eq!(p.angle(), 360.0);
        assert_eq!(p.translation(), 0.0);
        assert_eq!(p.delta_radius(), 0.0);
        assert_eq!(p.radial_mode(), RadialMode::Scale);
        assert!(p.is_closed_sweep());
    }

    #[test]
    fn test_resolution_is_clamped() {
        let mut p = RotationalExtrusion::new();
        p.set_resolution(0);
        assert_eq!(p.resolution(), 1);
        assert_eq!(RotationalExtrusion::new().with_resolution(0).resolution(), 1);
        p.set_resolution(40);
        assert_eq!(p.resolution(), 40);
        p.set_resolution(u32::MAX);
        assert_eq!(p.resolution(), RotationalExtrusion::MAX_RESOLUTION);
    }

    #[test]
    fn test_closed_sweep_predicate() {
        let p = RotationalExtrusion::new();
        assert!(p.with_angle(-360.0).is_closed_sweep());
        assert!(p.with_angle(720.0).is_closed_sweep());
        assert!(!p.with_angle(180.0).is_closed_sweep());
        assert!(!p.with_angle(720.0).with_translation(1.0).is_closed_sweep());
        assert!(!p.with_delta_radius(-0.5).is_closed_sweep());
    }

    #[test]
    fn test_partial_json_config_fills_defaults() {
        let p: RotationalExtrusion =
            serde_json::from_str(r#"{ "angle": 180.0, "capping": false }"#).unwrap();
        assert_eq!(p.angle(), 180.0);
        assert!(!p.capping());
        assert_eq!(p.resolution(), 12);
        assert_eq!(p.radial_mode(), RadialMode::Scale);
    }

    #[test]
    fn test_resolution_from_json_is_clamped() {
        let p: RotationalExtrusion = serde_json::from_str(r#"{ "resolution": 0 }"#).unwrap();
        assert_eq!(p.resolution(), 1);
        let p: RotationalExtrusion = serde_json::from_str(r#"{ "resolution": 4294967295 }"#).unwrap();
        assert_eq!(p.resolution(), RotationalExtrusion::MAX_RESOLUTION);
    }

    #[test]
    fn test_display() {
        let p = RotationalExtrusion::new().with_capping(false).with_translation(1.5);
        let text = p.to_string();
        assert!(text.contains("Resolution: 12"));
        assert!(text.contains("Capping: Off"));
        assert!(text.contains("Translation: 1.5"));
        assert!(text.ends_with("Radial Mode: Scale"));
    }
}
