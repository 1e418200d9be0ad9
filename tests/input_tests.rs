// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use folio_core::ProjectId;
use glam::Vec2;
use input::*;

#[test]
fn pointer_ndc_centre_and_corners() {
    assert_eq!(pointer_ndc(400.0, 300.0, 800.0, 600.0), Vec2::ZERO);
    assert_eq!(pointer_ndc(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
    assert_eq!(pointer_ndc(800.0, 600.0, 800.0, 600.0), Vec2::new(1.0, -1.0));
}

#[test]
fn pointer_ndc_y_points_up() {
    let top = pointer_ndc(400.0, 100.0, 800.0, 600.0);
    let bottom = pointer_ndc(400.0, 500.0, 800.0, 600.0);
    assert!(top.y > 0.0);
    assert!(bottom.y < 0.0);
}

#[test]
fn pointer_ndc_clamps_outside_viewport() {
    let p = pointer_ndc(-200.0, 900.0, 800.0, 600.0);
    assert_eq!(p, Vec2::new(-1.0, -1.0));
}

#[test]
fn pointer_ndc_zero_viewport_is_centre() {
    assert_eq!(pointer_ndc(10.0, 10.0, 0.0, 600.0), Vec2::ZERO);
    assert_eq!(pointer_ndc(10.0, 10.0, 800.0, 0.0), Vec2::ZERO);
    assert_eq!(pointer_ndc(10.0, 10.0, f32::NAN, 600.0), Vec2::ZERO);
}

#[test]
fn offset_from_center_is_signed_css_px() {
    // 100x40 box at (50, 20); centre (100, 40)
    let o = offset_from_center(110.0, 30.0, 50.0, 20.0, 100.0, 40.0);
    assert_eq!(o, Vec2::new(10.0, -10.0));
    assert_eq!(
        offset_from_center(100.0, 40.0, 50.0, 20.0, 100.0, 40.0),
        Vec2::ZERO
    );
}

#[test]
fn scroll_metrics_maps_window_values() {
    let m = scroll_metrics(250.0, 3000.0, 800.0);
    assert_eq!(m.offset_px, 250.0);
    assert_eq!(m.scroll_height_px, 3000.0);
    assert_eq!(m.viewport_height_px, 800.0);
}

#[test]
fn hover_enter_selects_known_project() {
    let mut h = HoverState::default();
    assert_eq!(h.active(), None);
    h.enter(Some("qs"));
    assert_eq!(h.active(), Some(ProjectId::Qs));
    h.enter(Some("airable"));
    assert_eq!(h.active(), Some(ProjectId::Airable));
}

#[test]
fn hover_unknown_or_missing_id_is_no_selection() {
    let mut h = HoverState::default();
    h.enter(Some("i12"));
    h.enter(Some("unknown"));
    assert_eq!(h.active(), None);
    h.enter(Some("i12"));
    h.enter(None);
    assert_eq!(h.active(), None);
}

#[test]
fn hover_leave_clears_matching_selection() {
    let mut h = HoverState::default();
    h.enter(Some("i12"));
    h.leave(Some("i12"));
    assert_eq!(h.active(), None);
}

#[test]
fn hover_late_leave_keeps_newer_selection() {
    // Pointer moves airable -> qs; the enter on qs fires before airable's leave.
    let mut h = HoverState::default();
    h.enter(Some("airable"));
    h.enter(Some("qs"));
    h.leave(Some("airable"));
    assert_eq!(h.active(), Some(ProjectId::Qs));
}

#[test]
fn magnetic_strength_reads_the_attribute() {
    assert_eq!(magnetic_strength(Some("0.5")), 0.5);
    assert_eq!(magnetic_strength(Some(" 0.2 ")), 0.2);
    assert_eq!(magnetic_strength(Some("0")), 0.0);
}

#[test]
fn magnetic_strength_falls_back_to_default() {
    for bad in [None, Some(""), Some("strong"), Some("-1"), Some("NaN"), Some("inf")] {
        assert_eq!(magnetic_strength(bad), folio_core::MAGNETIC_STRENGTH, "{:?}", bad);
    }
}

#[test]
fn skill_level_parses_percent() {
    assert_eq!(skill_level(Some("85")), Some(85.0));
    assert_eq!(skill_level(Some("85%")), Some(85.0));
    assert_eq!(skill_level(Some("120")), Some(100.0));
    assert_eq!(skill_level(Some("-3")), Some(0.0));
    assert_eq!(skill_level(Some("high")), None);
    assert_eq!(skill_level(None), None);
}

#[test]
fn in_viewport_checks_box_overlap() {
    assert!(in_viewport(100.0, 200.0, 800.0));
    assert!(in_viewport(-10.0, 10.0, 800.0));
    assert!(in_viewport(790.0, 900.0, 800.0));
    assert!(!in_viewport(-300.0, -10.0, 800.0));
    assert!(!in_viewport(800.0, 900.0, 800.0));
}
