//! Velocity-driven squash and stretch
//!
//! A moving indicator squashes along its direction of travel and stretches
//! across it. The two coefficients are small and linear so the product of the
//! scale factors stays close to 1 (area is roughly preserved).

use glaze_core::{Affine2D, Point, Vec2};
use serde::{Deserialize, Serialize};

/// Squash coefficient along the axis of motion
const SQUASH: f32 = 0.5;
/// Stretch coefficient across the axis of motion
const STRETCH: f32 = 0.3;

/// Tunables for the jelly deformation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JellyConfig {
    /// Distortion reached at (and above) `velocity_scale`
    pub max_distortion: f32,
    /// Speed, in pixels/sec, that produces full distortion
    pub velocity_scale: f32,
}

impl Default for JellyConfig {
    fn default() -> Self {
        Self {
            max_distortion: 0.7,
            velocity_scale: 1000.0,
        }
    }
}

/// Anisotropic scale factors produced by a velocity
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JellyTransform {
    pub scale_x: f32,
    pub scale_y: f32,
}

impl JellyTransform {
    pub const IDENTITY: JellyTransform = JellyTransform {
        scale_x: 1.0,
        scale_y: 1.0,
    };

    /// Compute the deformation for a velocity in pixels/sec
    pub fn from_velocity(velocity: Vec2, config: &JellyConfig) -> Self {
        let speed = velocity.length();
        if speed == 0.0 || !speed.is_finite() || !(config.velocity_scale > 0.0) {
            return Self::IDENTITY;
        }

        let direction = Vec2::new(velocity.x / speed, velocity.y / speed);
        let distortion = (speed / config.velocity_scale).clamp(0.0, 1.0) * config.max_distortion;

        let squash_x = 1.0 - direction.x.abs() * distortion * SQUASH;
        let squash_y = 1.0 - direction.y.abs() * distortion * SQUASH;
        let stretch_x = 1.0 + direction.y.abs() * distortion * STRETCH;
        let stretch_y = 1.0 + direction.x.abs() * distortion * STRETCH;

        Self {
            scale_x: squash_x * stretch_x,
            scale_y: squash_y * stretch_y,
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Scale factor product (1.0 = area preserved)
    pub fn area_ratio(&self) -> f32 {
        self.scale_x * self.scale_y
    }

    /// The deformation as a 2D affine matrix about the shape's own centre
    pub fn to_affine(&self, center: Point) -> Affine2D {
        if self.is_identity() {
            return Affine2D::IDENTITY;
        }
        Affine2D::scale_about(center, self.scale_x, self.scale_y)
    }
}

impl Default for JellyTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
