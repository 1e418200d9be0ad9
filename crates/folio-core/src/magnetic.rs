use crate::spring::{Spring, SpringConfig};
use glam::Vec2;

/// Element that leans toward the pointer while hovered and springs back on
/// leave.
#[derive(Clone, Debug)]
pub struct MagneticPull {
    x: Spring,
    y: Spring,
    strength: f32,
}

impl MagneticPull {
    pub fn new(strength: f32) -> Self {
        Self {
            x: Spring::new(SpringConfig::MAGNETIC, 0.0),
            y: Spring::new(SpringConfig::MAGNETIC, 0.0),
            strength,
        }
    }

    /// `offset_px` is the pointer relative to the element's centre.
    pub fn pointer_moved(&mut self, offset_px: Vec2) {
        let t = offset_px * self.strength;
        self.x.set_target(t.x);
        self.y.set_target(t.y);
    }

    pub fn pointer_left(&mut self) {
        self.x.set_target(0.0);
        self.y.set_target(0.0);
    }

    /// Current translation in pixels.
    pub fn update(&mut self, dt_sec: f32) -> Vec2 {
        Vec2::new(self.x.step(dt_sec), self.y.step(dt_sec))
    }

    pub fn is_settled(&self, eps: f32) -> bool {
        self.x.is_settled(eps) && self.y.is_settled(eps)
    }
}
