// Host-side tests for the 3D scene rig: envelope shapes, material blending,
// group scale convergence and the camera follow.

use folio_core::*;
use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

const FRAME: f32 = 1.0 / 60.0;

fn input(progress: f32, active: Option<ProjectId>, dt: f32, elapsed: f32) -> SceneInput {
    SceneInput {
        progress,
        pointer: Vec2::ZERO,
        active,
        dt_sec: dt,
        elapsed_sec: elapsed,
    }
}

#[test]
fn explosion_is_zero_at_and_outside_the_window() {
    assert_eq!(explosion_envelope(0.3), 0.0);
    assert_eq!(explosion_envelope(0.7), 0.0);
    assert_eq!(explosion_envelope(0.0), 0.0);
    assert_eq!(explosion_envelope(0.29), 0.0);
    assert_eq!(explosion_envelope(0.71), 0.0);
    assert_eq!(explosion_envelope(1.0), 0.0);
}

#[test]
fn explosion_peaks_mid_window_and_fades_into_edges() {
    assert!((explosion_envelope(0.5) - 0.5).abs() < 1e-5);
    // Approaches zero continuously from inside the window
    assert!(explosion_envelope(0.3 + 1e-4) < 1e-3);
    assert!(explosion_envelope(0.7 - 1e-4) < 1e-3);
    assert!(explosion_envelope(0.4) > 0.0 && explosion_envelope(0.4) < 0.5);
    // Symmetric about the centre
    assert!((explosion_envelope(0.4) - explosion_envelope(0.6)).abs() < 1e-4);
}

#[test]
fn explosion_has_a_slope_kink_at_the_window_edges() {
    // Value is continuous at both edges, slope is not: flat outside, pi/0.4 *
    // amplitude just inside.
    let h = 1e-3;
    let inner = PI / (EXPLOSION_END - EXPLOSION_START) * EXPLOSION_AMPLITUDE;

    let left_out = (explosion_envelope(EXPLOSION_START) - explosion_envelope(EXPLOSION_START - h)) / h;
    let left_in = (explosion_envelope(EXPLOSION_START + h) - explosion_envelope(EXPLOSION_START)) / h;
    assert_eq!(left_out, 0.0);
    assert!((left_in - inner).abs() < 0.02, "left_in {}", left_in);

    let right_in = (explosion_envelope(EXPLOSION_END) - explosion_envelope(EXPLOSION_END - h)) / h;
    let right_out = (explosion_envelope(EXPLOSION_END + h) - explosion_envelope(EXPLOSION_END)) / h;
    assert!((right_in + inner).abs() < 0.02, "right_in {}", right_in);
    assert_eq!(right_out, 0.0);
}

#[test]
fn turntable_is_a_half_turn_at_mid_scroll() {
    assert_eq!(turntable_yaw(0.5), PI);
    assert_eq!(turntable_yaw(0.0), 0.0);
    assert_eq!(turntable_yaw(1.0), TAU);
}

#[test]
fn tilt_rises_and_falls() {
    assert_eq!(scroll_tilt(0.0), 0.0);
    assert!(scroll_tilt(1.0).abs() < 1e-6);
    assert!((scroll_tilt(0.5) - 0.5).abs() < 1e-6);
    assert!((scroll_tilt(0.25) - scroll_tilt(0.75)).abs() < 1e-6);
}

#[test]
fn breathing_stays_within_five_percent() {
    for i in 0..1000 {
        let b = breathing(i as f32 * 0.05);
        assert!((0.95 - 1e-6..=1.05 + 1e-6).contains(&b));
    }
}

#[test]
fn yaw_is_independent_of_frame_rate() {
    let mut a = SceneRig::new().unwrap();
    let mut b = SceneRig::new().unwrap();
    let fa = a.update(&input(0.5, None, 1.0 / 144.0, 1.0));
    let fb = b.update(&input(0.5, None, 1.0 / 20.0, 1.0));
    assert_eq!(fa.object.yaw, PI);
    assert_eq!(fa.object.yaw, fb.object.yaw);
    assert_eq!(fa.object.tilt, fb.object.tilt);
}

#[test]
fn selection_maps_to_fixed_configs() {
    let d = ArtifactConfig::for_selection(None);
    assert_eq!(d, ArtifactConfig::default());
    assert_eq!(d.color, Rgb::WHITE);

    let qs = ArtifactConfig::for_selection(Some(ProjectId::Qs));
    assert_eq!(qs.emissive_intensity, 1.5);
    assert_eq!(qs.scale, 1.3);
    assert_eq!(qs.color, Rgb::from_srgb_hex(0xff00aa));

    let airable = ArtifactConfig::for_selection(Some(ProjectId::Airable));
    assert_eq!(airable.ring_speed, 2.0);
    assert_eq!(airable.emissive_intensity, d.emissive_intensity);
}

#[test]
fn unknown_project_ids_select_the_default() {
    assert_eq!(ProjectId::parse("nope"), None);
    assert_eq!(ProjectId::parse(""), None);
    assert_eq!(
        ArtifactConfig::for_selection(ProjectId::parse("nope")),
        ArtifactConfig::default()
    );
    for id in ProjectId::ALL {
        assert_eq!(ProjectId::parse(id.as_str()), Some(id));
    }
}

#[test]
fn quick_hover_never_snaps_to_the_target_colour() {
    let mut rig = SceneRig::new().unwrap();
    let qs = ArtifactConfig::for_selection(Some(ProjectId::Qs)).color;
    let mut elapsed = 0.0;
    let mut colours = Vec::new();
    // null -> "qs" for 250 ms -> null for 200 ms
    let schedule = (0..10)
        .map(|_| None)
        .chain((0..15).map(|_| Some(ProjectId::Qs)))
        .chain((0..12).map(|_| None));
    for active in schedule {
        elapsed += FRAME;
        let f = rig.update(&input(0.0, active, FRAME, elapsed));
        assert!(
            f.material.color.max_channel_distance(qs) > 0.05,
            "snapped to {:?}",
            f.material.color
        );
        colours.push(f.material.color);
    }
    // Passed through blended states: moved away from white, then back toward it
    let peak = colours
        .iter()
        .map(|c| c.max_channel_distance(Rgb::WHITE))
        .fold(0.0, f32::max);
    assert!(peak > 0.1);
    let last = colours.last().unwrap().max_channel_distance(Rgb::WHITE);
    assert!(last < peak);
    assert!(last > 0.0);
}

#[test]
fn material_reaches_target_when_held() {
    let mut m = MaterialState::default();
    let target = ArtifactConfig::for_selection(Some(ProjectId::I12));
    for _ in 0..600 {
        m.step(&target, FRAME);
    }
    assert!(m.color.max_channel_distance(target.color) < 1e-3);
    assert!((m.distortion - target.distortion).abs() < 1e-3);
    assert!(m.emissive_color.max_channel_distance(target.color) < 1e-3);
}

fn settle_scale(mode: ScaleConvergence, dt: f32) -> f32 {
    let mut rig = SceneRig::new().unwrap().with_scale_convergence(mode);
    // elapsed held at 0 keeps breathing at exactly 1
    let mut last = 0.0;
    let frames = (1.0 / dt).round() as usize;
    for _ in 0..frames {
        last = rig
            .update(&input(0.0, Some(ProjectId::Qs), dt, 0.0))
            .object
            .scale;
    }
    (1.3 - last).abs()
}

#[test]
fn time_scaled_scale_ignores_frame_rate() {
    let mode = ScaleConvergence::TimeScaled(SCALE_FOLLOW_RATE);
    let gap30 = settle_scale(mode, 1.0 / 30.0);
    let gap60 = settle_scale(mode, 1.0 / 60.0);
    assert!((gap30 - gap60).abs() < 1e-3, "{} vs {}", gap30, gap60);
}

#[test]
fn per_frame_scale_depends_on_frame_rate() {
    let mode = ScaleConvergence::PerFrame(SCALE_FOLLOW_FRACTION);
    let gap30 = settle_scale(mode, 1.0 / 30.0);
    let gap60 = settle_scale(mode, 1.0 / 60.0);
    assert!(gap30 - gap60 > 0.01, "{} vs {}", gap30, gap60);
}

#[test]
fn explosion_swells_the_group() {
    let mut rig = SceneRig::new().unwrap();
    let mut scale = 0.0;
    for _ in 0..300 {
        scale = rig.update(&input(0.5, None, FRAME, 0.0)).object.scale;
    }
    assert!((scale - 1.5).abs() < 1e-3);
}

#[test]
fn ribbons_spin_with_the_active_ring_speed() {
    let mut rig = SceneRig::new().unwrap();
    let f = rig.update(&input(0.0, Some(ProjectId::Airable), 0.01, 0.0));
    // base 0.5 rad/s * ring_speed 2
    assert!((f.ribbon_angles[0] - 0.01).abs() < 1e-6);
    // negative base speed wraps into [0, TAU)
    assert!(f.ribbon_angles[1] > TAU - 0.01 && f.ribbon_angles[1] < TAU);
}

#[test]
fn satellites_are_deterministic() {
    let a = satellite_ring(SATELLITE_SEED);
    let b = satellite_ring(SATELLITE_SEED);
    assert_eq!(a.len(), SATELLITE_COUNT);
    assert_eq!(a, b);
    for s in &a {
        let r = Vec2::new(s.position.x, s.position.z).length();
        assert!((r - SATELLITE_RADIUS).abs() < 1e-4);
        assert!(s.position.y.abs() <= SATELLITE_BOB + 1e-6);
    }
}

#[test]
fn camera_does_not_teleport_on_a_flick() {
    let mut rig = CameraRig::new().unwrap();
    for _ in 0..600 {
        rig.update(0.1, Vec2::ZERO, FRAME);
    }
    let before = rig.pose().eye;
    assert!((before - rig.target(0.1, Vec2::ZERO)).length() < 1e-3);

    let goal = rig.target(0.9, Vec2::ZERO);
    let gap = (goal - before).length();
    let first = rig.update(0.9, Vec2::ZERO, FRAME).eye;
    // One frame covers only rate * dt of the distance
    assert!((first - before).length() <= gap * (2.0 * FRAME) + 1e-4);

    let mut prev = (goal - first).length();
    for _ in 0..300 {
        let d = (goal - rig.update(0.9, Vec2::ZERO, FRAME).eye).length();
        assert!(d <= prev + 1e-5);
        prev = d;
    }
    assert!(prev < 0.01);
}

#[test]
fn camera_parallax_is_bounded() {
    let rig = CameraRig::new().unwrap();
    let base = rig.target(0.5, Vec2::ZERO);
    let pushed = rig.target(0.5, Vec2::new(5.0, -5.0));
    let offset = pushed - base;
    assert!((offset.x - CAMERA_PARALLAX).abs() < 1e-6);
    assert!((offset.y + CAMERA_PARALLAX).abs() < 1e-6);
    assert_eq!(offset.z, 0.0);
}

#[test]
fn camera_always_looks_at_the_origin() {
    let mut rig = CameraRig::new().unwrap();
    let pose = rig.update(0.3, Vec2::new(0.5, 0.5), FRAME);
    let cam = pose.camera(16.0 / 9.0);
    assert_eq!(cam.target, Vec3::ZERO);
    let origin_clip = cam.view_proj() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
    // origin projects to the centre of the screen
    assert!((origin_clip.x / origin_clip.w).abs() < 1e-4);
    assert!((origin_clip.y / origin_clip.w).abs() < 1e-4);
}

#[test]
fn rig_ignores_a_nan_frame() {
    let mut rig = SceneRig::new().unwrap();
    let f = rig.update(&input(0.2, Some(ProjectId::Qs), f32::NAN, 0.0));
    assert_eq!(f.core_spin, Vec3::ZERO);
    assert_eq!(f.ribbon_angles, [0.0; 3]);
    assert!(f.object.scale.is_finite());

    let mut last = f;
    for i in 1..=100 {
        last = rig.update(&input(0.2, Some(ProjectId::Qs), FRAME, i as f32 * FRAME));
    }
    assert!(last.core_spin.is_finite());
    assert!(last.ribbon_angles.iter().all(|a| a.is_finite()));
    assert!(last.core_spin.x > 0.0);
    assert!(last.material.color.0.is_finite());
}

#[test]
fn rig_caps_a_long_frame() {
    let mut spiked = SceneRig::new().unwrap();
    let mut capped = SceneRig::new().unwrap();
    let a = spiked.update(&input(0.5, Some(ProjectId::Airable), 10.0, 10.0));
    let b = capped.update(&input(0.5, Some(ProjectId::Airable), MAX_FRAME_DT, 10.0));
    assert_eq!(a.core_spin, b.core_spin);
    assert_eq!(a.ribbon_angles, b.ribbon_angles);
    assert_eq!(a.object, b.object);
    assert!((a.core_spin.x - CORE_SPIN_RATE.x * MAX_FRAME_DT).abs() < 1e-6);
}
