// Host-side tests for host constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn dom_hooks_are_consistent() {
    for id in [CANVAS_ID, ORB_ID, HERO_TEXT_ID] {
        assert!(!id.is_empty());
        assert!(!id.contains(' '));
    }
    assert_eq!(PROJECT_SELECTOR, format!("[{}]", PROJECT_ATTR));
    assert!(MAGNETIC_SELECTOR.starts_with('[') && MAGNETIC_SELECTOR.ends_with(']'));
}

#[test]
fn clear_colour_is_linear_030303() {
    let expected = folio_core::Rgb::from_srgb_hex(0x030303);
    for (c, e) in CLEAR_RGB.iter().zip(expected.0.to_array()) {
        assert!((*c as f32 - e).abs() < 1e-5, "{} vs {}", c, e);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn geometry_and_materials_are_sane() {
    assert!(TORUS_RADIAL_SEGMENTS >= 3);
    assert!(TORUS_TUBULAR_SEGMENTS >= 16);
    // u16 indices
    assert!((TORUS_RADIAL_SEGMENTS + 1) * (TORUS_TUBULAR_SEGMENTS + 1) < u16::MAX as u32);
    assert!(SATELLITE_SIZE > 0.0);
    for c in SATELLITE_RGB.iter().chain(RIBBON_RGB.iter()) {
        assert!((0.0..=1.0).contains(c));
    }
    assert!(MAX_DEVICE_PIXEL_RATIO >= 1.0);
}
