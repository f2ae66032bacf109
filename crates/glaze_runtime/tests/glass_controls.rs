//! End-to-end behaviour of indicators and morphs driven through the orchestrator

mod common;

use common::{gradient, init_tracing, FRAME};
use glaze_animation::MorphPhase;
use glaze_core::{GlassMaterial, GlazeError, Point, ShapeFrame, Size};
use glaze_runtime::{EventResponse, FrameOrchestrator, GlazeConfig, InputEvent};
use glaze_shading::RenderQuality;

fn orchestrator() -> FrameOrchestrator {
    init_tracing();
    FrameOrchestrator::new(GlazeConfig::default()).unwrap()
}

fn settle(glaze: &mut FrameOrchestrator) {
    let mut frames = 0;
    while glaze.tick(FRAME) {
        frames += 1;
        assert!(frames < 600, "controls never settled");
    }
}

fn track() -> ShapeFrame {
    ShapeFrame::new(Size::new(300.0, 40.0))
        .with_origin(Point::new(20.0, 700.0))
        .with_device_scale(2.0)
}

#[test]
fn test_flick_jumps_to_last_tab() {
    let mut glaze = orchestrator();
    let tabs = glaze.add_indicator(3, 0, 300.0);

    assert_eq!(
        glaze.handle_event(tabs, InputEvent::DragDown { position: 50.0 }).unwrap(),
        EventResponse::Handled
    );
    glaze.tick(FRAME);
    glaze.handle_event(tabs, InputEvent::DragUpdate { position: 110.0 }).unwrap();
    assert!((glaze.indicator(tabs).unwrap().state().fraction() - 0.3).abs() < 1e-4);

    let response = glaze
        .handle_event(tabs, InputEvent::DragEnd { velocity: 3.0 })
        .unwrap();
    assert_eq!(response, EventResponse::Settling { target_index: 2 });

    settle(&mut glaze);
    let indicator = glaze.indicator(tabs).unwrap();
    assert_eq!(indicator.selected_index(), 2);
    assert_eq!(indicator.alignment(), 1.0);
    assert_eq!(indicator.interaction_intensity(), 0.0);
}

#[test]
fn test_slow_release_snaps_to_nearest_tab() {
    let mut glaze = orchestrator();
    let tabs = glaze.add_indicator(3, 0, 300.0);

    glaze.handle_event(tabs, InputEvent::DragDown { position: 50.0 }).unwrap();
    glaze.handle_event(tabs, InputEvent::DragUpdate { position: 140.0 }).unwrap();
    let response = glaze
        .handle_event(tabs, InputEvent::DragEnd { velocity: 0.2 })
        .unwrap();
    assert_eq!(response, EventResponse::Settling { target_index: 1 });

    settle(&mut glaze);
    assert_eq!(glaze.indicator(tabs).unwrap().alignment(), 0.0);
}

#[test]
fn test_cancel_returns_to_committed_tab() {
    let mut glaze = orchestrator();
    let tabs = glaze.add_indicator(4, 1, 400.0);
    let committed = glaze.indicator(tabs).unwrap().alignment();

    glaze.handle_event(tabs, InputEvent::DragDown { position: 150.0 }).unwrap();
    glaze.handle_event(tabs, InputEvent::DragUpdate { position: 330.0 }).unwrap();
    glaze.tick(FRAME);
    assert_ne!(glaze.indicator(tabs).unwrap().alignment(), committed);

    glaze.handle_event(tabs, InputEvent::DragCancel).unwrap();
    let indicator = glaze.indicator(tabs).unwrap();
    assert!(!indicator.state().is_pressed && !indicator.state().is_dragging);
    assert_eq!(indicator.alignment(), committed);
    assert_eq!(indicator.selected_index(), 1);
}

#[test]
fn test_indicator_frame_tracks_drag() {
    let mut glaze = orchestrator();
    let tabs = glaze.add_indicator(3, 0, 300.0);

    let rest = glaze.render_indicator(tabs, &track(), None).unwrap();
    assert_eq!(rest.rect.origin, Point::new(20.0, 700.0));
    assert_eq!(rest.rect.size, Size::new(100.0, 40.0));
    assert!(rest.transform.is_identity());
    assert_eq!((rest.field.width(), rest.field.height()), (200, 80));
    assert_eq!(rest.instance.type_info[1], 0);

    glaze.handle_event(tabs, InputEvent::DragDown { position: 50.0 }).unwrap();
    glaze.tick(FRAME);
    glaze.handle_event(tabs, InputEvent::DragUpdate { position: 80.0 }).unwrap();
    glaze.tick(FRAME);
    glaze.handle_event(tabs, InputEvent::DragUpdate { position: 120.0 }).unwrap();

    let backdrop = gradient(300.0);
    let dragging = glaze.render_indicator(tabs, &track(), Some(&backdrop)).unwrap();
    assert!(dragging.rect.origin.x > rest.rect.origin.x);
    assert!(dragging.interaction > 0.0);
    assert!(!dragging.jelly.is_identity());
    assert!(dragging.jelly.scale_x < 1.0 && dragging.jelly.scale_y > 1.0);
    assert_eq!(dragging.instance.type_info[1], 1);
    assert_eq!(dragging.instance.state[1], dragging.interaction);

    glaze.handle_event(tabs, InputEvent::DragEnd { velocity: 0.0 }).unwrap();
    settle(&mut glaze);
    let settled = glaze.render_indicator(tabs, &track(), None).unwrap();
    assert!(settled.jelly.is_identity());
    assert_eq!(settled.interaction, 0.0);
}

#[test]
fn test_tap_selects_tab() {
    let mut glaze = orchestrator();
    let tabs = glaze.add_indicator(5, 0, 500.0);

    glaze.handle_event(tabs, InputEvent::Select { index: 3 }).unwrap();
    assert_eq!(glaze.indicator(tabs).unwrap().selected_index(), 3);
    assert!(glaze.tick(FRAME));
    settle(&mut glaze);
    assert!((glaze.indicator(tabs).unwrap().alignment() - 0.5).abs() < 1e-3);
}

#[test]
fn test_morph_tap_cycle() {
    let mut glaze = orchestrator();
    let trigger = Size::new(44.0, 44.0);
    let menu_size = Size::new(220.0, 260.0);
    let menu = glaze.add_morph(trigger, 22.0, menu_size, 24.0);
    let anchor = Point::new(300.0, 60.0);

    let closed = glaze.render_morph(menu, anchor, 1.0, None).unwrap();
    assert_eq!(closed.phase, MorphPhase::Closed);
    assert_eq!(closed.bounds.size, trigger);
    assert_eq!(closed.geometry.corner_radius, 22.0);
    assert_eq!(closed.content.button_opacity, 1.0);
    assert_eq!(closed.content.menu_opacity, 0.0);

    assert_eq!(
        glaze.handle_event(menu, InputEvent::TapToggle).unwrap(),
        EventResponse::Morphing {
            phase: MorphPhase::Opening
        }
    );

    let mut saw_dead_zone = false;
    while glaze.tick(FRAME) {
        let frame = glaze.render_morph(menu, anchor, 1.0, None).unwrap();
        assert!((0.0..=1.0).contains(&frame.progress));
        assert!(frame.geometry.width >= trigger.width);
        if !frame.content.button_visible() && !frame.content.menu_visible() {
            saw_dead_zone = true;
        }
    }
    assert!(saw_dead_zone);

    let open = glaze.render_morph(menu, anchor, 1.0, None).unwrap();
    assert_eq!(open.phase, MorphPhase::Open);
    assert_eq!(open.bounds.size, menu_size);
    assert_eq!(open.geometry.corner_radius, 24.0);
    assert_eq!(open.content.menu_opacity, 1.0);
    assert_eq!(open.instance.state[0], 24.0);
    assert_eq!(open.field.width(), 220);

    glaze.handle_event(menu, InputEvent::TapToggle).unwrap();
    settle(&mut glaze);
    assert_eq!(glaze.morph(menu).unwrap().phase(), MorphPhase::Closed);
    assert_eq!(glaze.morph(menu).unwrap().progress(), 0.0);
}

#[test]
fn test_morph_reopen_mid_close_keeps_progress() {
    let mut glaze = orchestrator();
    let menu = glaze.add_morph(Size::new(44.0, 44.0), 22.0, Size::new(200.0, 200.0), 20.0);

    glaze.handle_event(menu, InputEvent::Open).unwrap();
    settle(&mut glaze);
    glaze.handle_event(menu, InputEvent::Close).unwrap();
    for _ in 0..6 {
        glaze.tick(FRAME);
    }
    let mid = glaze.morph(menu).unwrap().progress();
    assert!(mid > 0.0 && mid < 1.0);

    glaze.handle_event(menu, InputEvent::Open).unwrap();
    assert_eq!(glaze.morph(menu).unwrap().phase(), MorphPhase::Opening);
    assert_eq!(glaze.morph(menu).unwrap().progress(), mid);
    settle(&mut glaze);
    assert_eq!(glaze.morph(menu).unwrap().phase(), MorphPhase::Open);
}

#[test]
fn test_quality_flag_reaches_rendering() {
    let mut glaze = orchestrator();
    let tabs = glaze
        .add_indicator_with_material(
            3,
            1,
            300.0,
            GlassMaterial::regular().chromatic_aberration(0.6).pill(),
        )
        .unwrap();
    let backdrop = gradient(300.0);

    let premium = glaze.render_indicator(tabs, &track(), Some(&backdrop)).unwrap();
    glaze.set_quality(RenderQuality::Standard);
    assert_eq!(glaze.quality(), RenderQuality::Standard);
    let standard = glaze.render_indicator(tabs, &track(), Some(&backdrop)).unwrap();

    assert_eq!(premium.instance.quality(), RenderQuality::Premium);
    assert_eq!(standard.instance.quality(), RenderQuality::Standard);
    assert_ne!(premium.field, standard.field);
    assert_eq!(premium.rect, standard.rect);
}

#[test]
fn test_frost_fallback_renders_without_backdrop() {
    let mut glaze = orchestrator();
    let tabs = glaze.add_indicator(2, 0, 200.0);
    let frame = glaze.render_indicator(tabs, &track(), None).unwrap();

    assert!(frame.field.coverage() > 0.3);
    for c in frame.field.pixels() {
        assert!(c.is_finite());
        assert!((0.0..=1.0).contains(&c.a));
    }
}

#[test]
fn test_stale_handles_are_rejected() {
    let mut glaze = orchestrator();
    let tabs = glaze.add_indicator(3, 0, 300.0);
    let menu = glaze.add_morph(Size::new(40.0, 40.0), 10.0, Size::new(160.0, 120.0), 16.0);

    glaze.remove_indicator(tabs).unwrap();
    glaze.remove_morph(menu).unwrap();
    assert_eq!((glaze.indicator_count(), glaze.morph_count()), (0, 0));

    assert!(matches!(
        glaze.handle_event(menu, InputEvent::Open),
        Err(GlazeError::UnknownHandle { kind: "morph" })
    ));
    assert!(matches!(
        glaze.render_indicator(tabs, &track(), None),
        Err(GlazeError::UnknownHandle { kind: "indicator" })
    ));
    assert!(glaze.set_indicator_width(tabs, 320.0).is_err());
    assert!(!glaze.tick(FRAME));
}

#[test]
#[should_panic(expected = "out of range")]
fn test_select_out_of_range_panics() {
    let mut glaze = orchestrator();
    let tabs = glaze.add_indicator(3, 0, 300.0);
    let _ = glaze.handle_event(tabs, InputEvent::Select { index: 3 });
}

#[test]
#[should_panic(expected = "at least 2 items")]
fn test_single_item_indicator_panics() {
    let mut glaze = orchestrator();
    glaze.add_indicator(1, 0, 300.0);
}

#[test]
fn test_config_file_drives_orchestrator() {
    init_tracing();
    let path = std::env::temp_dir().join(format!("glaze-test-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        r#"
        quality = "standard"
        density = 1.0

        [material]
        corner_radius = 20.0

        [morph.spring]
        stiffness = 400.0
        damping = 40.0
        "#,
    )
    .unwrap();

    let config = GlazeConfig::from_path(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let mut glaze = FrameOrchestrator::new(config).unwrap();
    assert_eq!(glaze.quality(), RenderQuality::Standard);
    assert_eq!(glaze.config().morph.spring.stiffness, 400.0);

    let menu = glaze.add_morph(Size::new(40.0, 40.0), 20.0, Size::new(200.0, 200.0), 20.0);
    glaze.handle_event(menu, InputEvent::Open).unwrap();
    glaze.tick(FRAME);
    let frame = glaze.render_morph(menu, Point::ZERO, 1.0, None).unwrap();
    assert_eq!(frame.instance.state[2], 1.0);
    assert_eq!(frame.instance.quality(), RenderQuality::Standard);
}
