//! Glaze Shading
//!
//! The liquid glass material as a pure function of a point.
//!
//! # Pipeline
//!
//! - **SDF**: rounded-rect signed distance, anti-aliased mask, skeleton normal
//! - **Lighting**: key and kick specular lobes, rim, tinted body, hairline border
//! - **Refraction**: edge-localised backdrop displacement with chromatic split,
//!   frost fallback, nested-glass density correction
//! - **Quality**: explicit Standard/Premium capability flag
//! - **GPU**: `bytemuck` instance layout carrying the same parameters
//!
//! # Example
//!
//! ```rust
//! use glaze_core::{Color, GlassMaterial, Point, ShapeFrame, Size};
//! use glaze_shading::{GlassShader, RenderQuality, SolidBackdrop};
//!
//! let shader = GlassShader::new(GlassMaterial::regular())
//!     .unwrap()
//!     .with_quality(RenderQuality::Premium);
//! let frame = ShapeFrame::new(Size::new(160.0, 48.0)).with_device_scale(2.0);
//! let backdrop = SolidBackdrop(Color::rgb(0.2, 0.4, 0.8));
//!
//! let inside = shader.evaluate(&frame, Point::new(80.0, 24.0), 0.0, Some(&backdrop));
//! assert!(inside.a > 0.0);
//!
//! let outside = shader.evaluate(&frame, Point::new(-4.0, 24.0), 0.0, Some(&backdrop));
//! assert_eq!(outside, Color::TRANSPARENT);
//! ```

pub mod gpu;
pub mod lighting;
pub mod quality;
pub mod refraction;
pub mod sdf;
pub mod shader;

pub use gpu::{instance_bytes, GpuGlassInstance};
pub use lighting::{apply_saturation, sharpness, specular, SpecularLobes};
pub use quality::RenderQuality;
pub use refraction::{
    BackdropSampler, DensityCorrection, RefractionConfig, RefractionModel, SolidBackdrop,
};
pub use sdf::{mask, sample_shape, sdf_rounded_rect, surface_normal, ShapeSample};
pub use shader::GlassShader;
