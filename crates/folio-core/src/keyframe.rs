//! Piecewise keyframe tables sampled by scroll progress.
//!
//! A [`WaypointTable`] is validated once at construction and is then total
//! over every input: progress outside [0, 1] clamps to the end values and a
//! NaN progress reads as 0.

use crate::color::Rgb;
use crate::error::ConfigError;
use glam::{Vec2, Vec3};
use smallvec::SmallVec;

/// Values that can be blended component-wise.
pub trait Lerp: Copy {
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Vec2 {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        Vec2::lerp(self, to, t)
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        Vec3::lerp(self, to, t)
    }
}

impl Lerp for Rgb {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        Rgb(self.0.lerp(to.0, t))
    }
}

/// Shape applied to local segment progress before blending.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    /// `p² (3 − 2p)`: zero slope at every waypoint.
    Smoothstep,
    /// Plain piecewise-linear; used for positional tracks.
    Linear,
}

impl Easing {
    #[inline]
    pub fn apply(self, p: f32) -> f32 {
        match self {
            Easing::Smoothstep => smoothstep(p),
            Easing::Linear => p,
        }
    }
}

#[inline]
pub fn smoothstep(p: f32) -> f32 {
    let p = p.clamp(0.0, 1.0);
    p * p * (3.0 - 2.0 * p)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Waypoint<T> {
    pub t: f32,
    pub value: T,
}

impl<T> Waypoint<T> {
    pub const fn new(t: f32, value: T) -> Self {
        Self { t, value }
    }
}

/// Ordered keyframes covering the whole [0, 1] domain.
#[derive(Clone, Debug)]
pub struct WaypointTable<T> {
    points: SmallVec<[Waypoint<T>; 8]>,
    easing: Easing,
}

impl<T: Lerp> WaypointTable<T> {
    /// Validate and build a table. The first waypoint must sit at `t = 0`, the
    /// last at `t = 1`, and `t` must strictly increase in between.
    pub fn new(points: &[Waypoint<T>], easing: Easing) -> Result<Self, ConfigError> {
        if points.len() < 2 {
            return Err(ConfigError::TooFewWaypoints { len: points.len() });
        }
        if let Some(index) = points.iter().position(|w| !w.t.is_finite()) {
            return Err(ConfigError::NonFinite { index });
        }
        let first = points[0].t;
        if first != 0.0 {
            return Err(ConfigError::FirstNotZero { t: first });
        }
        let last = points[points.len() - 1].t;
        if last != 1.0 {
            return Err(ConfigError::LastNotOne { t: last });
        }
        for (index, pair) in points.windows(2).enumerate() {
            if pair[1].t <= pair[0].t {
                return Err(ConfigError::NotIncreasing {
                    index: index + 1,
                    prev: pair[0].t,
                    t: pair[1].t,
                });
            }
        }
        log::debug!(
            "[keyframe] table ok: {} waypoints, {:?}",
            points.len(),
            easing
        );
        Ok(Self {
            points: points.iter().copied().collect(),
            easing,
        })
    }

    /// Sample the table at progress `t`.
    pub fn sample(&self, t: f32) -> T {
        let first = &self.points[0];
        let last = &self.points[self.points.len() - 1];
        let t = if t.is_nan() { 0.0 } else { t };
        if t <= first.t {
            return first.value;
        }
        if t >= last.t {
            return last.value;
        }
        // First waypoint strictly after t; the bracket starts one before it.
        let next = self.points.partition_point(|w| w.t <= t);
        let a = &self.points[next - 1];
        let b = &self.points[next];
        let p = (t - a.t) / (b.t - a.t);
        a.value.lerp(b.value, self.easing.apply(p))
    }
}

/// Free-function form of [`WaypointTable::sample`].
#[inline]
pub fn interpolate<T: Lerp>(t: f32, table: &WaypointTable<T>) -> T {
    table.sample(t)
}
