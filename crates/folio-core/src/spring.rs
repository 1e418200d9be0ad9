//! Frame-rate independent smoothing filters.
//!
//! [`Spring`] is a damped harmonic oscillator for parameters that should feel
//! physical. [`approach`] is the cheaper exponential filter used where
//! overshoot is unwanted (camera, material blend).

use crate::constants::{MAX_FRAME_DT, SPRING_SUBSTEP_DT};
use crate::keyframe::Lerp;

/// Stiffness / damping / mass triple for a [`Spring`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    /// Floating orb position and scale.
    pub const ORB: SpringConfig = SpringConfig {
        stiffness: 80.0,
        damping: 25.0,
        mass: 0.5,
    };
    /// Magnetic hover pull on navigation elements.
    pub const MAGNETIC: SpringConfig = SpringConfig {
        stiffness: 150.0,
        damping: 15.0,
        mass: 0.1,
    };
    /// Skill bar fill.
    pub const SKILL_BAR: SpringConfig = SpringConfig {
        stiffness: 50.0,
        damping: 20.0,
        mass: 1.0,
    };

    /// `c / (2 sqrt(k m))`; 1 is critical, above 1 never overshoots.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// Sanitise a frame delta: negative or NaN becomes 0, spikes are capped.
#[inline]
pub fn clamp_dt(dt_sec: f32) -> f32 {
    if dt_sec.is_nan() {
        return 0.0;
    }
    dt_sec.clamp(0.0, MAX_FRAME_DT)
}

/// Per-parameter spring state. One instance per animated scalar.
#[derive(Clone, Debug)]
pub struct Spring {
    pub value: f32,
    pub velocity: f32,
    pub target: f32,
    config: SpringConfig,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            value: initial,
            velocity: 0.0,
            target: initial,
            config,
        }
    }

    #[inline]
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump to `value` with no residual motion.
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Advance by `dt_sec` and return the new value.
    ///
    /// The delta is clamped to [`MAX_FRAME_DT`] and integrated with
    /// semi-implicit Euler in sub-steps no longer than [`SPRING_SUBSTEP_DT`];
    /// a single 1/30 s step is unstable once `damping / mass` exceeds ~60.
    pub fn step(&mut self, dt_sec: f32) -> f32 {
        let dt = clamp_dt(dt_sec);
        if dt <= 0.0 {
            return self.value;
        }
        let steps = (dt / SPRING_SUBSTEP_DT).ceil().max(1.0) as u32;
        let h = dt / steps as f32;
        let SpringConfig {
            stiffness: k,
            damping: c,
            mass: m,
        } = self.config;
        for _ in 0..steps {
            let accel = (k * (self.target - self.value) - c * self.velocity) / m;
            self.velocity += accel * h;
            self.value += self.velocity * h;
        }
        self.value
    }

    pub fn is_settled(&self, eps: f32) -> bool {
        (self.target - self.value).abs() <= eps && self.velocity.abs() <= eps
    }
}

/// Exponential approach: `value + (target - value) * min(1, rate * dt)`.
#[inline]
pub fn approach<T: Lerp>(value: T, target: T, rate: f32, dt_sec: f32) -> T {
    let alpha = (rate * clamp_dt(dt_sec)).min(1.0);
    value.lerp(target, alpha)
}

/// Move a fixed fraction of the remaining distance, regardless of elapsed time.
#[inline]
pub fn approach_fraction<T: Lerp>(value: T, target: T, fraction: f32) -> T {
    value.lerp(target, fraction.clamp(0.0, 1.0))
}
