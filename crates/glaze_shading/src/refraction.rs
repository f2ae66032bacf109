//! Edge refraction and nested-glass density correction
//!
//! Near the boundary, the backdrop seen through the glass is sampled from a
//! point pushed inward along the surface normal. The push grows quadratically
//! toward the edge, with the press/drag interaction, and with the shape's
//! height. When the host cannot provide a backdrop, a constant frost color
//! stands in so the composite keeps the same shape.

use glaze_core::{smoothstep, Color, Point, Vec2};
use serde::{Deserialize, Serialize};

use crate::quality::RenderQuality;
use crate::sdf::ShapeSample;

/// Source of scene color behind a glass surface
///
/// Points are in the same frame space the shape is evaluated in. Samplers are
/// expected to return the already-blurred backdrop.
pub trait BackdropSampler {
    fn sample(&self, point: Point) -> Color;
}

impl<F> BackdropSampler for F
where
    F: Fn(Point) -> Color,
{
    fn sample(&self, point: Point) -> Color {
        self(point)
    }
}

/// A backdrop of one flat color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolidBackdrop(pub Color);

impl BackdropSampler for SolidBackdrop {
    fn sample(&self, _point: Point) -> Color {
        self.0
    }
}

/// Tunables for edge refraction
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefractionConfig {
    /// Width of the band along the edge where refraction applies
    pub edge_zone: f32,
    /// Displacement per unit of shape height at full influence
    pub height_ratio: f32,
    /// Upper bound on displacement, in logical units
    pub max_displacement: f32,
    /// Share of the displacement present with no interaction
    pub rest_strength: f32,
    /// Channel separation at full chromatic aberration, in logical units
    pub chromatic_spread: f32,
    /// Stand-in backdrop when no sampler is available
    pub frost: Color,
}

impl Default for RefractionConfig {
    fn default() -> Self {
        Self {
            edge_zone: 14.0,
            height_ratio: 0.25,
            max_displacement: 18.0,
            rest_strength: 0.4,
            chromatic_spread: 4.0,
            frost: Color::rgba(0.16, 0.16, 0.18, 0.55),
        }
    }
}

/// `smoothstep(edge_zone, 0, inner_distance)^2`: 1 on the edge, 0 past the zone
pub fn edge_influence(inner_distance: f32, edge_zone: f32) -> f32 {
    if !(edge_zone > 0.0) {
        return 0.0;
    }
    let s = smoothstep(edge_zone, 0.0, inner_distance);
    s * s
}

/// Inward displacement for a shape sample, in logical units
pub fn displacement(
    shape: &ShapeSample,
    interaction: f32,
    height: f32,
    config: &RefractionConfig,
) -> f32 {
    let influence = edge_influence(shape.inner_distance(), config.edge_zone);
    if influence <= 0.0 {
        return 0.0;
    }
    let rest = config.rest_strength.clamp(0.0, 1.0);
    let strength = rest + (1.0 - rest) * interaction.clamp(0.0, 1.0);
    let reach = (height.max(0.0) * config.height_ratio).min(config.max_displacement);
    influence * reach * strength
}

/// Backdrop lookup for one glass surface
#[derive(Clone, Copy)]
pub struct RefractionModel<'a> {
    pub config: &'a RefractionConfig,
    pub quality: RenderQuality,
    pub backdrop: Option<&'a dyn BackdropSampler>,
}

impl<'a> RefractionModel<'a> {
    pub fn new(config: &'a RefractionConfig, quality: RenderQuality) -> Self {
        Self {
            config,
            quality,
            backdrop: None,
        }
    }

    pub fn with_backdrop(mut self, backdrop: &'a dyn BackdropSampler) -> Self {
        self.backdrop = Some(backdrop);
        self
    }

    pub fn has_backdrop(&self) -> bool {
        self.backdrop.is_some()
    }

    /// Color seen through the glass at `point`
    pub fn sample(
        &self,
        point: Point,
        shape: &ShapeSample,
        chromatic_aberration: f32,
        interaction: f32,
        height: f32,
    ) -> Color {
        let Some(backdrop) = self.backdrop else {
            return self.config.frost;
        };
        if !self.quality.refraction_enabled() || shape.normal == Vec2::ZERO {
            return backdrop.sample(point);
        }

        let amount = displacement(shape, interaction, height, self.config);
        if amount <= 0.0 {
            return backdrop.sample(point);
        }

        let inward = -shape.normal;
        let center = point.offset(inward * amount);

        let spread = if self.quality.chromatic_enabled() {
            chromatic_aberration.clamp(0.0, 1.0)
                * self.config.chromatic_spread
                * edge_influence(shape.inner_distance(), self.config.edge_zone)
        } else {
            0.0
        };
        if spread <= 0.0 {
            return backdrop.sample(center);
        }

        let red = backdrop.sample(point.offset(inward * (amount + spread)));
        let green = backdrop.sample(center);
        let blue = backdrop.sample(point.offset(inward * (amount - spread)));
        Color::rgba(red.r, green.g, blue.b, green.a)
    }
}

/// Analytic stand-in for rendering glass nested inside another glass surface
///
/// `factor` 0 is a standalone surface, 1 is fully nested. Every multiplier is
/// monotonic in the factor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DensityCorrection {
    factor: f32,
}

impl DensityCorrection {
    pub const STANDALONE: DensityCorrection = DensityCorrection { factor: 0.0 };

    pub fn new(factor: f32) -> Self {
        let factor = if factor.is_nan() { 0.0 } else { factor.clamp(0.0, 1.0) };
        Self { factor }
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }

    /// Multiplier on the specular exponents (sharper highlights)
    pub fn specular_sharpness(&self) -> f32 {
        1.0 + 0.2 * self.factor
    }

    /// Multiplier on ambient body light (darker body)
    pub fn ambient(&self) -> f32 {
        1.0 - 0.3 * self.factor
    }

    /// Multiplier on body alpha
    pub fn alpha(&self) -> f32 {
        1.0 + 0.15 * self.factor
    }

    /// Multiplier on rim brightness
    pub fn rim(&self) -> f32 {
        1.0 + 0.05 * self.factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge_sample(inner: f32) -> ShapeSample {
        ShapeSample {
            distance: -inner,
            mask: 1.0,
            normal: Vec2::new(1.0, 0.0),
        }
    }

    fn gradient(p: Point) -> Color {
        Color::gray(p.x / 200.0)
    }

    #[test]
    fn test_edge_influence_profile() {
        assert_eq!(edge_influence(0.0, 14.0), 1.0);
        assert_eq!(edge_influence(14.0, 14.0), 0.0);
        assert_eq!(edge_influence(30.0, 14.0), 0.0);
        assert!((edge_influence(7.0, 14.0) - 0.25).abs() < 1e-6);
        assert!(edge_influence(3.0, 14.0) > edge_influence(5.0, 14.0));
        assert_eq!(edge_influence(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_missing_backdrop_uses_frost() {
        let config = RefractionConfig::default();
        let model = RefractionModel::new(&config, RenderQuality::Premium);
        assert!(!model.has_backdrop());
        for inner in [0.0, 3.0, 40.0] {
            let c = model.sample(Point::new(100.0, 20.0), &edge_sample(inner), 1.0, 1.0, 48.0);
            assert_eq!(c, config.frost);
        }
    }

    #[test]
    fn test_premium_displaces_inward() {
        let config = RefractionConfig::default();
        let backdrop = gradient;
        let model = RefractionModel::new(&config, RenderQuality::Premium).with_backdrop(&backdrop);
        let point = Point::new(100.0, 20.0);

        let c = model.sample(point, &edge_sample(1.0), 0.0, 1.0, 48.0);
        assert!(c.r < gradient(point).r);

        // Past the edge zone nothing moves
        let c = model.sample(point, &edge_sample(20.0), 0.0, 1.0, 48.0);
        assert_eq!(c, gradient(point));
    }

    #[test]
    fn test_standard_quality_samples_straight_through() {
        let config = RefractionConfig::default();
        let backdrop = gradient;
        let model = RefractionModel::new(&config, RenderQuality::Standard).with_backdrop(&backdrop);
        let point = Point::new(100.0, 20.0);
        assert_eq!(model.sample(point, &edge_sample(0.5), 1.0, 1.0, 48.0), gradient(point));
    }

    #[test]
    fn test_chromatic_split_orders_channels() {
        let config = RefractionConfig::default();
        let backdrop = gradient;
        let model = RefractionModel::new(&config, RenderQuality::Premium).with_backdrop(&backdrop);
        let c = model.sample(Point::new(100.0, 20.0), &edge_sample(0.5), 1.0, 1.0, 48.0);
        // Red is pushed further inward (toward smaller x) than blue
        assert!(c.r < c.g && c.g < c.b);

        let plain = model.sample(Point::new(100.0, 20.0), &edge_sample(0.5), 0.0, 1.0, 48.0);
        assert_eq!(plain.r, plain.b);
    }

    #[test]
    fn test_interaction_and_height_increase_displacement() {
        let config = RefractionConfig::default();
        let s = edge_sample(2.0);
        assert!(displacement(&s, 1.0, 48.0, &config) > displacement(&s, 0.0, 48.0, &config));
        assert!(displacement(&s, 0.5, 60.0, &config) > displacement(&s, 0.5, 30.0, &config));
        // Reach is capped
        assert_eq!(
            displacement(&s, 1.0, 1000.0, &config),
            displacement(&s, 1.0, 2000.0, &config)
        );
    }

    #[test]
    fn test_density_monotonic() {
        let mut prev = DensityCorrection::new(0.0);
        assert_eq!(prev, DensityCorrection::STANDALONE);
        for i in 1..=10 {
            let d = DensityCorrection::new(i as f32 / 10.0);
            assert!(d.specular_sharpness() > prev.specular_sharpness());
            assert!(d.ambient() < prev.ambient());
            assert!(d.alpha() > prev.alpha());
            assert!(d.rim() > prev.rim());
            prev = d;
        }
        let full = DensityCorrection::new(5.0);
        assert!((full.ambient() - 0.7).abs() < 1e-6);
        assert!((full.alpha() - 1.15).abs() < 1e-6);
        assert_eq!(DensityCorrection::new(f32::NAN).factor(), 0.0);
    }
}
