//! Glaze configuration file handling
//!
//! A single TOML document (conventionally `glaze.toml`) configures quality,
//! the default material, and every physics tunable. Every section is optional:
//!
//! ```toml
//! quality = "standard"
//!
//! [material]
//! thickness = 24.0
//! corner_radius = 22.0
//!
//! [indicator.drag]
//! velocity_threshold = 0.6
//!
//! [morph.spring]
//! stiffness = 200.0
//! ```
//!
//! Values outside their meaningful range are clamped with a warning rather than
//! rejected.

use std::fs;
use std::path::Path;

use glaze_animation::{IndicatorConfig, MorphConfig};
use glaze_core::{GlassMaterial, GlazeError, Result};
use glaze_shading::{RefractionConfig, RenderQuality};
use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlazeConfig {
    pub quality: RenderQuality,
    /// Density factor applied to every surface (0 = standalone, 1 = nested)
    pub density: f32,
    pub material: GlassMaterial,
    pub refraction: RefractionConfig,
    pub indicator: IndicatorConfig,
    pub morph: MorphConfig,
}

impl GlazeConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: GlazeConfig =
            toml::from_str(text).map_err(|e| GlazeError::ConfigParse(e.to_string()))?;
        config.material.validate()?;
        Ok(config.sanitized())
    }

    /// Load configuration from a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading glaze config");
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serialize to pretty TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| GlazeError::ConfigParse(e.to_string()))
    }

    /// Clamp out-of-range tunables, warning about each change
    pub fn sanitized(mut self) -> Self {
        self.density = clamp_field("density", self.density, 0.0, 1.0);

        let m = &mut self.material;
        m.chromatic_aberration =
            clamp_field("material.chromatic_aberration", m.chromatic_aberration, 0.0, 1.0);
        m.thickness = clamp_field("material.thickness", m.thickness, 0.0, f32::MAX);
        m.blur_radius = clamp_field("material.blur_radius", m.blur_radius, 0.0, f32::MAX);
        m.saturation = clamp_field("material.saturation", m.saturation, 0.0, f32::MAX);

        let r = &mut self.refraction;
        r.edge_zone = clamp_field("refraction.edge_zone", r.edge_zone, 0.0, f32::MAX);
        r.rest_strength = clamp_field("refraction.rest_strength", r.rest_strength, 0.0, 1.0);
        r.height_ratio = clamp_field("refraction.height_ratio", r.height_ratio, 0.0, f32::MAX);
        r.max_displacement =
            clamp_field("refraction.max_displacement", r.max_displacement, 0.0, f32::MAX);
        r.chromatic_spread =
            clamp_field("refraction.chromatic_spread", r.chromatic_spread, 0.0, f32::MAX);

        let d = &mut self.indicator.drag;
        d.resistance = clamp_field("indicator.drag.resistance", d.resistance, 0.0, 1.0);
        d.max_overdrag = clamp_field("indicator.drag.max_overdrag", d.max_overdrag, 0.0, 1.0);
        d.velocity_threshold = clamp_field(
            "indicator.drag.velocity_threshold",
            d.velocity_threshold,
            0.0,
            f32::MAX,
        );
        d.projection_time =
            clamp_field("indicator.drag.projection_time", d.projection_time, 0.0, f32::MAX);

        let j = &mut self.indicator.jelly;
        j.max_distortion = clamp_field("indicator.jelly.max_distortion", j.max_distortion, 0.0, 1.0);
        j.velocity_scale =
            clamp_field("indicator.jelly.velocity_scale", j.velocity_scale, 1.0, f32::MAX);

        let morph = &mut self.morph;
        morph.height_release = clamp_field("morph.height_release", morph.height_release, 0.0, 1.0);
        morph.menu_reveal_start =
            clamp_field("morph.menu_reveal_start", morph.menu_reveal_start, 0.0, 0.99);
        morph.button_fade_end = clamp_field(
            "morph.button_fade_end",
            morph.button_fade_end,
            0.0,
            morph.menu_reveal_start,
        );
        morph.closed_epsilon = clamp_field("morph.closed_epsilon", morph.closed_epsilon, 0.0, 0.1);

        self
    }
}

fn clamp_field(name: &'static str, value: f32, min: f32, max: f32) -> f32 {
    let clamped = if value.is_nan() { min } else { value.clamp(min, max) };
    if clamped != value {
        tracing::warn!(field = name, value, clamped, "config value out of range, clamped");
    }
    clamped
}
