//! Per-point glass evaluation
//!
//! CPU reference of the full pipeline for one glass surface:
//!
//! 1. SDF, mask and normal ([`crate::sdf`]); points with no coverage stop here
//! 2. Body, rim and highlights ([`crate::lighting`])
//! 3. Glass layer composited over the refracted backdrop or frost
//!    ([`crate::refraction`])
//! 4. Saturation, clamp, then coverage

use glaze_core::{Color, GlassMaterial, Point, Result, ShapeFrame};

use crate::lighting::{apply_saturation, shade_surface};
use crate::quality::RenderQuality;
use crate::refraction::{BackdropSampler, DensityCorrection, RefractionConfig, RefractionModel};
use crate::sdf::sample_shape;

/// Evaluates one glass material at arbitrary points
#[derive(Clone, Debug, PartialEq)]
pub struct GlassShader {
    material: GlassMaterial,
    refraction: RefractionConfig,
    quality: RenderQuality,
    density: DensityCorrection,
}

impl GlassShader {
    /// Create a shader for `material`, rejecting non-finite parameters
    pub fn new(material: GlassMaterial) -> Result<Self> {
        if let Err(err) = material.validate() {
            tracing::warn!(%err, "rejected glass material");
            return Err(err);
        }
        Ok(Self {
            material,
            refraction: RefractionConfig::default(),
            quality: RenderQuality::default(),
            density: DensityCorrection::STANDALONE,
        })
    }

    pub fn with_quality(mut self, quality: RenderQuality) -> Self {
        self.quality = quality;
        self
    }

    /// 0 = standalone surface, 1 = nested inside another glass surface
    pub fn with_density(mut self, factor: f32) -> Self {
        self.density = DensityCorrection::new(factor);
        self
    }

    pub fn with_refraction(mut self, config: RefractionConfig) -> Self {
        self.refraction = config;
        self
    }

    /// Override the material's corner radius (e.g. with an animated one)
    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.material.corner_radius = radius;
        self
    }

    pub fn material(&self) -> &GlassMaterial {
        &self.material
    }

    pub fn quality(&self) -> RenderQuality {
        self.quality
    }

    pub fn density(&self) -> DensityCorrection {
        self.density
    }

    pub fn refraction(&self) -> &RefractionConfig {
        &self.refraction
    }

    /// Straight-alpha color at a frame-space point
    ///
    /// `interaction` is the press/drag intensity in [0, 1]. Without a backdrop
    /// the glass is composited over the frost color.
    pub fn evaluate(
        &self,
        frame: &ShapeFrame,
        point: Point,
        interaction: f32,
        backdrop: Option<&dyn BackdropSampler>,
    ) -> Color {
        let Some(shape) = sample_shape(frame, self.material.corner_radius, point) else {
            return Color::TRANSPARENT;
        };

        let glass = shade_surface(&self.material, &shape, &self.density, self.quality);

        let model = RefractionModel {
            config: &self.refraction,
            quality: self.quality,
            backdrop,
        };
        let behind = model.sample(
            point,
            &shape,
            self.material.chromatic_aberration,
            interaction,
            frame.size.height,
        );

        let color = apply_saturation(glass.over(behind), self.material.saturation);
        color.with_alpha(color.a * shape.mask)
    }
}
