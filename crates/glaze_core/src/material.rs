//! Glass material parameters
//!
//! A [`GlassMaterial`] is an immutable description of how a glass surface
//! looks. It carries no geometry; the same material is reused across frames
//! and shape sizes, which is why `corner_radius` is clamped against the
//! current [`ShapeFrame`](crate::ShapeFrame) at evaluation time instead of
//! being rejected here.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{GlazeError, Result};
use crate::geometry::Vec2;

/// Glass appearance configuration
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlassMaterial {
    /// Material weight (arbitrary positive unit, 10 = neutral sharpness)
    pub thickness: f32,
    /// Backdrop blur radius in logical units
    pub blur_radius: f32,
    /// Tint applied to the glass body
    pub tint: Color,
    /// Light source angle in radians (0 = from the right, PI/2 = from above)
    pub light_angle: f32,
    /// Specular intensity of the light source
    pub light_intensity: f32,
    /// Ambient contribution to the glass body
    pub ambient_strength: f32,
    /// Final color saturation (1.0 = unchanged, 0.0 = grayscale)
    pub saturation: f32,
    /// Rim prominence, typically 0.7 to 2.0
    pub refractive_index: f32,
    /// Chromatic split of refracted samples (0..1)
    pub chromatic_aberration: f32,
    /// Corner radius in logical units
    pub corner_radius: f32,
}

impl Default for GlassMaterial {
    fn default() -> Self {
        Self {
            thickness: 20.0,
            blur_radius: 20.0,
            tint: Color::rgba(1.0, 1.0, 1.0, 0.12),
            light_angle: std::f32::consts::FRAC_PI_4,
            light_intensity: 0.6,
            ambient_strength: 0.35,
            saturation: 1.5,
            refractive_index: 1.2,
            chromatic_aberration: 0.0,
            corner_radius: 16.0,
        }
    }
}

impl GlassMaterial {
    /// Create a new glass material with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn blur(mut self, radius: f32) -> Self {
        self.blur_radius = radius;
        self
    }

    pub fn tint(mut self, color: Color) -> Self {
        self.tint = color;
        self
    }

    pub fn light_angle(mut self, radians: f32) -> Self {
        self.light_angle = radians;
        self
    }

    pub fn light_intensity(mut self, intensity: f32) -> Self {
        self.light_intensity = intensity;
        self
    }

    pub fn ambient_strength(mut self, strength: f32) -> Self {
        self.ambient_strength = strength;
        self
    }

    pub fn saturation(mut self, saturation: f32) -> Self {
        self.saturation = saturation;
        self
    }

    pub fn refractive_index(mut self, index: f32) -> Self {
        self.refractive_index = index;
        self
    }

    pub fn chromatic_aberration(mut self, amount: f32) -> Self {
        self.chromatic_aberration = amount;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Fully rounded ends; clamped to half the shorter side when evaluated
    pub fn pill(self) -> Self {
        self.corner_radius(f32::MAX)
    }

    // Presets

    /// Ultra-thin glass (subtle blur, faint rim)
    pub fn ultra_thin() -> Self {
        Self::new().thickness(6.0).blur(10.0).refractive_index(0.8)
    }

    /// Thin glass
    pub fn thin() -> Self {
        Self::new().thickness(12.0).blur(15.0).refractive_index(1.0)
    }

    /// Regular glass (default)
    pub fn regular() -> Self {
        Self::new()
    }

    /// Thick glass (heavy blur, pronounced rim)
    pub fn thick() -> Self {
        Self::new()
            .thickness(30.0)
            .blur(30.0)
            .refractive_index(1.6)
            .ambient_strength(0.45)
    }

    /// Clear glass with visible prism split and no tint
    pub fn clear() -> Self {
        Self::new()
            .tint(Color::rgba(1.0, 1.0, 1.0, 0.0))
            .blur(4.0)
            .chromatic_aberration(0.6)
            .saturation(1.0)
    }

    /// Light direction as a unit vector in y-down screen space
    pub fn light_direction(&self) -> Vec2 {
        Vec2::new(self.light_angle.cos(), -self.light_angle.sin())
    }

    /// Check that every scalar is finite
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("thickness", self.thickness),
            ("blur_radius", self.blur_radius),
            ("tint.r", self.tint.r),
            ("tint.g", self.tint.g),
            ("tint.b", self.tint.b),
            ("tint.a", self.tint.a),
            ("light_angle", self.light_angle),
            ("light_intensity", self.light_intensity),
            ("ambient_strength", self.ambient_strength),
            ("saturation", self.saturation),
            ("refractive_index", self.refractive_index),
            ("chromatic_aberration", self.chromatic_aberration),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(GlazeError::InvalidMaterial { field, value });
            }
        }
        // f32::MAX is the pill sentinel; only NaN is rejected for the radius
        if self.corner_radius.is_nan() {
            return Err(GlazeError::InvalidMaterial {
                field: "corner_radius",
                value: self.corner_radius,
            });
        }
        Ok(())
    }
}
