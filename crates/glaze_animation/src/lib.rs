//! Glaze Animation
//!
//! Frame-driven physics for glass controls.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Drag Physics**: rubber-band overdrag, index/alignment mapping, flick resolution
//! - **Jelly**: velocity-driven squash and stretch about a shape's centre
//! - **Morph**: spring-driven button-to-menu shape interpolation with crossfade
//! - **Indicators**: draggable selection pills for tab bars and segmented controls
//! - **Interruptible**: every motion inherits velocity when retargeted
//!
//! Nothing here owns a clock; hosts advance state with an explicit `dt`.

pub mod drag;
pub mod indicator;
pub mod jelly;
pub mod morph;
pub mod spring;

pub use drag::{
    alignment_to_fraction, fraction_to_alignment, global_position_to_alignment,
    index_to_alignment, nearest_index, pixel_velocity_to_alignment, resolve_target_index,
    rubber_band, DragPhysicsConfig,
};
pub use indicator::{DragState, IndicatorConfig, IndicatorController};
pub use jelly::{JellyConfig, JellyTransform};
pub use morph::{ContentVisibility, MorphConfig, MorphEngine, MorphGeometry, MorphPhase, MorphState};
pub use spring::{Spring, SpringConfig};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: IndicatorConfig = toml::from_str(
            r#"
            [drag]
            velocity_threshold = 0.8

            [alignment_spring]
            stiffness = 250.0
            "#,
        )
        .unwrap();

        assert_eq!(config.drag.velocity_threshold, 0.8);
        assert_eq!(config.drag.resistance, 0.4);
        assert_eq!(config.alignment_spring.stiffness, 250.0);
        assert_eq!(config.alignment_spring.damping, SpringConfig::stiff().damping);
        assert_eq!(config.jelly, JellyConfig::default());
    }

    #[test]
    fn test_morph_config_round_trips_through_toml() {
        let text = toml::to_string(&MorphConfig::default()).unwrap();
        let parsed: MorphConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, MorphConfig::default());
    }
}
