use thiserror::Error;

/// Rejected waypoint table. Raised while building controllers, never per frame.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("waypoint table needs at least 2 entries, got {len}")]
    TooFewWaypoints { len: usize },
    #[error("waypoint table must start at t=0, starts at t={t}")]
    FirstNotZero { t: f32 },
    #[error("waypoint table must end at t=1, ends at t={t}")]
    LastNotOne { t: f32 },
    #[error("waypoint {index} has t={t}, not after previous t={prev}")]
    NotIncreasing { index: usize, prev: f32, t: f32 },
    #[error("waypoint {index} has a non-finite t")]
    NonFinite { index: usize },
}
