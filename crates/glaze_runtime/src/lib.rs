//! Glaze Runtime
//!
//! Ties glass shading and control physics together for a host UI layer.
//!
//! # Features
//!
//! - **Configuration**: one TOML document for quality, material and physics
//! - **Handles**: indicators and morphs registered by slotmap key
//! - **Input Routing**: drag, tap and selection events dispatched per target
//! - **Frame Ticking**: explicit `dt` stepping with an "anything moving" result
//! - **Glass Fields**: CPU-rasterised glass plus packed GPU instances
//!
//! # Example
//!
//! ```
//! use glaze_core::{ShapeFrame, Size};
//! use glaze_runtime::{FrameOrchestrator, GlazeConfig, InputEvent};
//!
//! let mut glaze = FrameOrchestrator::new(GlazeConfig::default()).unwrap();
//! let tabs = glaze.add_indicator(3, 0, 300.0);
//!
//! glaze.handle_event(tabs, InputEvent::Select { index: 2 }).unwrap();
//! while glaze.tick(1.0 / 60.0) {}
//!
//! let track = ShapeFrame::new(Size::new(300.0, 40.0));
//! let frame = glaze.render_indicator(tabs, &track, None).unwrap();
//! assert_eq!(frame.selected_index, 2);
//! ```

pub mod config;
pub mod field;
pub mod input;
pub mod orchestrator;

pub use config::GlazeConfig;
pub use field::GlassField;
pub use input::{EventResponse, EventTarget, InputEvent};
pub use orchestrator::{FrameOrchestrator, IndicatorFrame, IndicatorId, MorphFrame, MorphId};
