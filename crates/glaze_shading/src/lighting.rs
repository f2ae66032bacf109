//! Dual-lobe glass lighting
//!
//! A key highlight faces the light; a weaker, tighter "kick" lobe faces away
//! from it (back-reflection off the far rim). Both ride on a rim whose
//! brightness never drops below a minimum, so the edge stays readable on any
//! backdrop. The body is a dim tinted fill that must never outshine the rim.
//!
//! The output is straight-alpha and unsaturated; saturation is applied by the
//! caller as the very last step (see [`apply_saturation`]).

use glaze_core::{smoothstep, Color, GlassMaterial, Vec2};

use crate::quality::RenderQuality;
use crate::refraction::DensityCorrection;
use crate::sdf::ShapeSample;

pub const KEY_EXPONENT: f32 = 14.0;
pub const KICK_EXPONENT: f32 = 20.0;
pub const KICK_WEIGHT: f32 = 0.4;
pub const MIN_RIM_VISIBILITY: f32 = 0.5;
/// Hairline band around the boundary whose alpha is pushed toward 1
pub const BORDER_WIDTH: f32 = 0.5;

const RIM_BASE_OPACITY: f32 = 0.35;
const RIM_SCALE: f32 = 1.6;
/// Rim falloff width at the reference thickness
const RIM_WIDTH: f32 = 2.0;
const AMBIENT_BOOST: f32 = 0.1;
const AMBIENT_BOOST_CAP: f32 = 0.08;
const COMPOSITE_WEIGHT: f32 = 0.85;
const REFERENCE_THICKNESS: f32 = 20.0;

/// Thickness-derived exponent multiplier: `1 + (thickness / 10 - 1) * 0.15`
pub fn sharpness(thickness: f32) -> f32 {
    (1.0 + (thickness / 10.0 - 1.0) * 0.15).max(0.1)
}

/// Rim multiplier for deviation from the reference thickness
fn thickness_term(thickness: f32) -> f32 {
    (1.0 + (thickness / REFERENCE_THICKNESS - 1.0) * 0.1).clamp(0.5, 1.5)
}

/// Key and kick highlight strengths
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpecularLobes {
    pub key: f32,
    pub kick: f32,
}

impl SpecularLobes {
    pub fn total(&self) -> f32 {
        self.key + self.kick
    }
}

/// Evaluate both lobes for a surface normal
///
/// A zero normal (flat interior) yields no highlight.
pub fn specular(
    normal: Vec2,
    light_dir: Vec2,
    intensity: f32,
    exponent_scale: f32,
    kick_enabled: bool,
) -> SpecularLobes {
    let key = normal.dot(light_dir).max(0.0).powf(KEY_EXPONENT * exponent_scale) * intensity;
    let kick = if kick_enabled {
        normal.dot(-light_dir).max(0.0).powf(KICK_EXPONENT * exponent_scale)
            * intensity
            * KICK_WEIGHT
    } else {
        0.0
    };
    SpecularLobes { key, kick }
}

/// Intermediate lighting terms, exposed for inspection and tests
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceLight {
    pub body: Color,
    pub rim_brightness: f32,
    pub rim_alpha: f32,
    pub lobes: SpecularLobes,
}

/// Lighting terms for one shape sample
pub fn light_surface(
    material: &GlassMaterial,
    shape: &ShapeSample,
    density: &DensityCorrection,
    quality: RenderQuality,
) -> SurfaceLight {
    let sharp = sharpness(material.thickness) * density.specular_sharpness();
    let intensity = material.light_intensity;
    let lobes = specular(
        shape.normal,
        material.light_direction(),
        intensity,
        sharp,
        quality.kick_enabled(),
    );

    let boost = (intensity * AMBIENT_BOOST).clamp(0.0, AMBIENT_BOOST_CAP);
    let body_light = material.ambient_strength * density.ambient() + boost;
    let tint = material.tint;
    let body = Color::rgba(
        tint.r * body_light,
        tint.g * body_light,
        tint.b * body_light,
        (tint.a * density.alpha()).clamp(0.0, 1.0),
    );

    let rim_brightness = (MIN_RIM_VISIBILITY.max(RIM_BASE_OPACITY * intensity * RIM_SCALE)
        + lobes.total())
        * material.refractive_index
        * thickness_term(material.thickness)
        * density.rim();

    let rim_width = RIM_WIDTH * (material.thickness / REFERENCE_THICKNESS).clamp(0.5, 2.0);
    let falloff = 1.0 - smoothstep(0.0, rim_width, shape.inner_distance());
    let rim_alpha = falloff * rim_brightness.clamp(0.0, 1.0);

    SurfaceLight {
        body,
        rim_brightness,
        rim_alpha,
        lobes,
    }
}

/// Composite body and rim into the glass layer's color (before saturation)
pub fn shade_surface(
    material: &GlassMaterial,
    shape: &ShapeSample,
    density: &DensityCorrection,
    quality: RenderQuality,
) -> Color {
    let light = light_surface(material, shape, density, quality);
    let rim = Color::gray(light.rim_brightness);

    let mixed = Color::lerp(&light.body, &rim, light.rim_alpha);
    let mut alpha = light.body.a.max(light.rim_alpha * COMPOSITE_WEIGHT);

    let border = 1.0 - smoothstep(0.0, BORDER_WIDTH, shape.distance.abs());
    alpha = alpha * (1.0 - border) + border;

    mixed.with_alpha(alpha.clamp(0.0, 1.0))
}

/// Final saturation adjustment and clamp
pub fn apply_saturation(color: Color, saturation: f32) -> Color {
    color.saturate(saturation).clamped()
}
