//! Floating 2D orb that wanders between empty regions of the page as the
//! reader scrolls.

use crate::constants::{ORB_ROTATION_DEG, ORB_SCALE, ORB_X_PCT, ORB_Y_PCT};
use crate::error::ConfigError;
use crate::keyframe::{Easing, WaypointTable};
use crate::spring::{Spring, SpringConfig};

/// Per-frame output for the DOM layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbFrame {
    /// Centre as a percentage of viewport width.
    pub x_pct: f32,
    /// Centre as a percentage of viewport height.
    pub y_pct: f32,
    pub scale: f32,
    pub rotation_deg: f32,
}

pub struct OrbController {
    x_table: WaypointTable<f32>,
    y_table: WaypointTable<f32>,
    scale_table: WaypointTable<f32>,
    rotation_table: WaypointTable<f32>,
    x: Spring,
    y: Spring,
    scale: Spring,
}

impl OrbController {
    /// Build the tables and seat the springs at `initial_progress`.
    pub fn new(initial_progress: f32) -> Result<Self, ConfigError> {
        let x_table = WaypointTable::new(&ORB_X_PCT, Easing::Linear)?;
        let y_table = WaypointTable::new(&ORB_Y_PCT, Easing::Linear)?;
        let scale_table = WaypointTable::new(&ORB_SCALE, Easing::Linear)?;
        let rotation_table = WaypointTable::new(&ORB_ROTATION_DEG, Easing::Linear)?;
        let cfg = SpringConfig::ORB;
        let x = Spring::new(cfg, x_table.sample(initial_progress));
        let y = Spring::new(cfg, y_table.sample(initial_progress));
        let scale = Spring::new(cfg, scale_table.sample(initial_progress));
        Ok(Self {
            x_table,
            y_table,
            scale_table,
            rotation_table,
            x,
            y,
            scale,
        })
    }

    /// Position and scale go through the springs; rotation is the raw table value.
    pub fn update(&mut self, progress: f32, dt_sec: f32) -> OrbFrame {
        self.x.set_target(self.x_table.sample(progress));
        self.y.set_target(self.y_table.sample(progress));
        self.scale.set_target(self.scale_table.sample(progress));
        OrbFrame {
            x_pct: self.x.step(dt_sec),
            y_pct: self.y.step(dt_sec),
            scale: self.scale.step(dt_sec),
            rotation_deg: self.rotation_table.sample(progress),
        }
    }

    pub fn is_settled(&self, eps: f32) -> bool {
        self.x.is_settled(eps) && self.y.is_settled(eps) && self.scale.is_settled(eps)
    }
}
