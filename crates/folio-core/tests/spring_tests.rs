// Host-side tests for the spring smoother and exponential filters.

use folio_core::*;

const FRAME: f32 = 1.0 / 60.0;

fn run(spring: &mut Spring, seconds: f32, dt: f32) {
    let frames = (seconds / dt).round() as usize;
    for _ in 0..frames {
        spring.step(dt);
    }
}

#[test]
fn converges_across_the_supported_range() {
    for k in [50.0, 80.0, 150.0] {
        for c in [15.0, 25.0, 30.0] {
            for m in [0.1, 0.5, 1.0] {
                let cfg = SpringConfig {
                    stiffness: k,
                    damping: c,
                    mass: m,
                };
                let mut s = Spring::new(cfg, 0.0);
                s.set_target(1.0);
                run(&mut s, 10.0, FRAME);
                assert!(
                    (s.value - 1.0).abs() < 1e-3,
                    "k={} c={} m={} ended at {}",
                    k,
                    c,
                    m,
                    s.value
                );
                assert!(s.value.is_finite());
            }
        }
    }
}

#[test]
fn shipped_presets_close_the_gap_monotonically() {
    for cfg in [SpringConfig::ORB, SpringConfig::MAGNETIC, SpringConfig::SKILL_BAR] {
        let mut s = Spring::new(cfg, 0.0);
        s.set_target(100.0);
        // Skip the initial transient while velocity builds up
        run(&mut s, 0.1, FRAME);
        let mut prev = (s.target - s.value).abs();
        for _ in 0..600 {
            s.step(FRAME);
            let err = (s.target - s.value).abs();
            assert!(err <= prev + 1e-4, "{:?}: {} -> {}", cfg, prev, err);
            prev = err;
        }
        assert!(prev < 0.1);
    }
}

#[test]
fn variable_frame_rates_agree() {
    let mut fast = Spring::new(SpringConfig::ORB, 0.0);
    let mut slow = Spring::new(SpringConfig::ORB, 0.0);
    fast.set_target(1.0);
    slow.set_target(1.0);
    run(&mut fast, 0.5, 1.0 / 120.0);
    run(&mut slow, 0.5, 1.0 / 30.0);
    assert!((fast.value - slow.value).abs() < 0.02);
}

#[test]
fn dt_spike_is_clamped_to_one_frame() {
    let mut spiked = Spring::new(SpringConfig::ORB, 0.0);
    spiked.set_target(1.0);
    let mut capped = spiked.clone();
    spiked.step(10.0);
    capped.step(MAX_FRAME_DT);
    assert_eq!(spiked.value, capped.value);
    assert_eq!(spiked.velocity, capped.velocity);
}

#[test]
fn repeated_spikes_stay_bounded() {
    // Stiffest, lightest corner of the range
    let cfg = SpringConfig {
        stiffness: 150.0,
        damping: 30.0,
        mass: 0.1,
    };
    let mut s = Spring::new(cfg, 0.0);
    s.set_target(1.0);
    for _ in 0..200 {
        s.step(10.0);
        assert!(s.value > -1.0 && s.value < 2.0, "diverged to {}", s.value);
    }
    assert!((s.value - 1.0).abs() < 1e-3);
}

#[test]
fn snap_clears_motion() {
    let mut s = Spring::new(SpringConfig::MAGNETIC, 0.0);
    s.set_target(5.0);
    s.step(FRAME);
    s.snap_to(2.0);
    assert_eq!(s.value, 2.0);
    assert_eq!(s.velocity, 0.0);
    assert!(s.is_settled(0.0));
}

#[test]
fn approach_moves_rate_times_dt() {
    let v = approach(0.0_f32, 10.0, 2.0, 0.1);
    assert!((v - 2.0).abs() < 1e-5);
    // Never past the target
    let v = approach(0.0_f32, 10.0, 40.0, MAX_FRAME_DT);
    assert_eq!(v, 10.0);
}

#[test]
fn approach_clamps_long_frames() {
    let spiked = approach(0.0_f32, 10.0, 2.0, 10.0);
    let capped = approach(0.0_f32, 10.0, 2.0, MAX_FRAME_DT);
    assert_eq!(spiked, capped);
    assert!(spiked < 10.0);
}

#[test]
fn approach_fraction_ignores_time() {
    let v = approach_fraction(0.0_f32, 1.0, 0.1);
    assert!((v - 0.1).abs() < 1e-6);
    assert_eq!(approach_fraction(0.0_f32, 1.0, 3.0), 1.0);
}
