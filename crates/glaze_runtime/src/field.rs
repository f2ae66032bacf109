//! Rasterised glass fields
//!
//! A [`GlassField`] is the shader evaluated at every device pixel centre of a
//! shape frame. It is the CPU output a host can upload as a texture or inspect
//! in tests.

use glaze_core::{Color, Point, ShapeFrame};
use glaze_shading::{BackdropSampler, GlassShader};

/// Per-device-pixel straight-alpha colors, row-major
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlassField {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl GlassField {
    /// Evaluate `shader` over `frame`
    ///
    /// Backdrop points are in frame space, like every other evaluation point.
    pub fn rasterize(
        shader: &GlassShader,
        frame: &ShapeFrame,
        interaction: f32,
        backdrop: Option<&dyn BackdropSampler>,
    ) -> Self {
        let (width, height) = frame.pixel_dimensions();
        let px = frame.pixel_size();

        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let point = Point::new((x as f32 + 0.5) * px, (y as f32 + 0.5) * px);
                pixels.push(shader.evaluate(frame, point, interaction, backdrop));
            }
        }

        tracing::trace!(width, height, "rasterized glass field");
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    /// Mean alpha over the field (0 for an empty field)
    pub fn coverage(&self) -> f32 {
        if self.pixels.is_empty() {
            return 0.0;
        }
        self.pixels.iter().map(|c| c.a).sum::<f32>() / self.pixels.len() as f32
    }

    /// Premultiplied RGBA8, row-major
    pub fn to_rgba8(&self) -> Vec<u8> {
        let to_byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for c in &self.pixels {
            bytes.extend_from_slice(&[
                to_byte(c.r * c.a),
                to_byte(c.g * c.a),
                to_byte(c.b * c.a),
                to_byte(c.a),
            ]);
        }
        bytes
    }
}
