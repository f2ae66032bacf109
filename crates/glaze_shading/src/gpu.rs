//! GPU instance layout
//!
//! Hosts that run the glass model in a shader upload one [`GpuGlassInstance`]
//! per surface. The layout mirrors the parameters [`crate::GlassShader`]
//! consumes so both paths produce the same image.

use glaze_core::{GlassMaterial, ShapeFrame};

use crate::quality::RenderQuality;
use crate::refraction::DensityCorrection;

/// A glass surface instance (matches the shader `GlassInstance` struct)
///
/// Memory layout:
/// - bounds: `vec4<f32>`     (16 bytes)
/// - tint_color: `vec4<f32>` (16 bytes)
/// - material: `vec4<f32>`   (16 bytes)
/// - lighting: `vec4<f32>`   (16 bytes)
/// - state: `vec4<f32>`      (16 bytes)
/// - type_info: `vec4<u32>`  (16 bytes)
/// Total: 96 bytes
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuGlassInstance {
    /// Bounds (x, y, width, height)
    pub bounds: [f32; 4],
    /// Tint color (RGBA)
    pub tint_color: [f32; 4],
    /// (thickness, blur_radius, saturation, refractive_index)
    pub material: [f32; 4],
    /// (light_angle, light_intensity, ambient_strength, chromatic_aberration)
    pub lighting: [f32; 4],
    /// (corner_radius, interaction, density, device_scale)
    /// - corner_radius is already clamped to the bounds
    pub state: [f32; 4],
    /// Type info (quality, has_backdrop, 0, 0)
    pub type_info: [u32; 4],
}

impl GpuGlassInstance {
    pub fn new(material: &GlassMaterial, frame: &ShapeFrame) -> Self {
        let bounds = frame.bounds();
        Self {
            bounds: [bounds.x(), bounds.y(), bounds.width(), bounds.height()],
            tint_color: material.tint.to_array(),
            material: [
                material.thickness,
                material.blur_radius,
                material.saturation,
                material.refractive_index,
            ],
            lighting: [
                material.light_angle,
                material.light_intensity,
                material.ambient_strength,
                material.chromatic_aberration,
            ],
            state: [
                frame.clamped_corner_radius(material.corner_radius),
                0.0,
                0.0,
                frame.device_scale,
            ],
            type_info: [RenderQuality::default().as_u32(), 0, 0, 0],
        }
    }

    /// Set press/drag interaction intensity (0..1)
    pub fn with_interaction(mut self, intensity: f32) -> Self {
        self.state[1] = intensity.clamp(0.0, 1.0);
        self
    }

    /// Set nested-glass density factor (0..1)
    pub fn with_density(mut self, density: DensityCorrection) -> Self {
        self.state[2] = density.factor();
        self
    }

    pub fn with_quality(mut self, quality: RenderQuality) -> Self {
        self.type_info[0] = quality.as_u32();
        self
    }

    /// Whether the renderer binds a backdrop texture (otherwise frost is used)
    pub fn with_backdrop(mut self, has_backdrop: bool) -> Self {
        self.type_info[1] = has_backdrop as u32;
        self
    }

    pub fn quality(&self) -> RenderQuality {
        if self.type_info[0] == RenderQuality::Standard.as_u32() {
            RenderQuality::Standard
        } else {
            RenderQuality::Premium
        }
    }
}

/// View a slice of instances as bytes for buffer upload
pub fn instance_bytes(instances: &[GpuGlassInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
