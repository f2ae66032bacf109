//! Cross-crate properties of the drag, jelly, morph and shape math

mod common;

use glaze_animation::{
    alignment_to_fraction, index_to_alignment, resolve_target_index, rubber_band,
    DragPhysicsConfig, JellyConfig, JellyTransform, Spring, SpringConfig,
};
use glaze_core::{Affine2D, Point, Vec2};
use glaze_shading::sdf_rounded_rect;

use common::FRAME;

#[test]
fn test_rubber_band_bounds() {
    let config = DragPhysicsConfig::default();
    let mut value = -50.0f32;
    while value <= 50.0 {
        let banded = rubber_band(value, config.resistance, config.max_overdrag);
        assert!(
            (-config.max_overdrag..=1.0 + config.max_overdrag).contains(&banded),
            "{value} -> {banded}"
        );
        if (0.0..=1.0).contains(&value) {
            assert_eq!(banded, value);
        }
        value += 0.125;
    }
}

#[test]
fn test_index_alignment_endpoints_and_order() {
    for n in 2..=12 {
        assert_eq!(index_to_alignment(0, n), -1.0);
        assert_eq!(index_to_alignment(n - 1, n), 1.0);
        for i in 1..n {
            assert!(index_to_alignment(i, n) > index_to_alignment(i - 1, n));
        }
    }
}

#[test]
fn test_high_velocity_forward_reaches_last_index() {
    let config = DragPhysicsConfig::default();
    assert_eq!(resolve_target_index(0.4, 2.0, 1.0 / 3.0, 3, &config), 2);
}

#[test]
fn test_threshold_velocity_does_not_force_advance() {
    let config = DragPhysicsConfig::default();
    let at_threshold = config.velocity_threshold;
    assert_eq!(resolve_target_index(0.1, at_threshold, 1.0 / 3.0, 3, &config), 0);
    assert_eq!(resolve_target_index(0.1, at_threshold + 0.01, 1.0 / 3.0, 3, &config), 1);
}

#[test]
fn test_index_round_trip_at_rest() {
    let config = DragPhysicsConfig::default();
    for n in 2..=10 {
        for index in 0..n {
            let fraction = alignment_to_fraction(index_to_alignment(index, n));
            let resolved = resolve_target_index(fraction, 0.0, 1.0 / n as f32, n, &config);
            assert_eq!(resolved, index, "{index} of {n}");
        }
    }
}

#[test]
fn test_still_jelly_is_exact_identity() {
    let jelly = JellyTransform::from_velocity(Vec2::new(0.0, 0.0), &JellyConfig::default());
    assert!(jelly.is_identity());
    assert_eq!(jelly.to_affine(Point::new(12.0, 80.0)), Affine2D::IDENTITY);
}

#[test]
fn test_sdf_centre_of_square_cornered_rect() {
    let half = Vec2::new(60.0, 20.0);
    assert_eq!(sdf_rounded_rect(Vec2::ZERO, half, 0.0), -20.0);

    // The corner radius cancels at the centre
    for r in [4.0, 10.0, 20.0] {
        assert!((sdf_rounded_rect(Vec2::ZERO, half, r) + 20.0).abs() < 1e-5);
    }
}

#[test]
fn test_morph_spring_settles_without_oscillation() {
    let mut spring = Spring::new(SpringConfig::morph(), 0.0);
    spring.set_target(1.0);

    for _ in 0..240 {
        spring.step(FRAME);
    }
    assert!((spring.value() - 1.0).abs() < 0.01);

    for _ in 0..240 {
        spring.step(FRAME);
        assert!((spring.value() - 1.0).abs() < 0.01);
    }
}
