//! Glaze Core
//!
//! Foundational value types shared by every Glaze crate:
//!
//! - **Geometry**: points, sizes, 2D vectors, and affine transforms
//! - **Color**: linear RGBA with interpolation and luminance helpers
//! - **Glass Material**: the immutable parameter set describing a glass surface
//! - **Shape Frame**: per-frame geometry a host supplies for evaluation
//!
//! # Example
//!
//! ```rust
//! use glaze_core::{GlassMaterial, ShapeFrame, Size};
//!
//! let material = GlassMaterial::regular().corner_radius(16.0);
//! let frame = ShapeFrame::new(Size::new(200.0, 64.0)).with_device_scale(2.0);
//!
//! // Radius is clamped to the shape's shorter half-side at evaluation time
//! assert_eq!(frame.clamped_corner_radius(material.corner_radius), 16.0);
//! assert_eq!(frame.clamped_corner_radius(999.0), 32.0);
//! ```

pub mod color;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod material;

pub use color::Color;
pub use error::{GlazeError, Result};
pub use frame::ShapeFrame;
pub use geometry::{smoothstep, Affine2D, Point, Rect, Size, Vec2};
pub use material::GlassMaterial;
