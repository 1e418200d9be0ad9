use crate::constants::SKILL_STAGGER_SEC;
use crate::spring::{clamp_dt, Spring, SpringConfig};

/// Width of one skill bar. Stays empty until first revealed, then waits its
/// stagger delay and springs out to its level. Never un-reveals.
#[derive(Clone, Debug)]
pub struct SkillFill {
    spring: Spring,
    level_pct: f32,
    delay_sec: f32,
    waited_sec: f32,
    revealed: bool,
}

impl SkillFill {
    /// `index` is the bar's position in its list; each one starts
    /// `SKILL_STAGGER_SEC` after the previous.
    pub fn new(level_pct: f32, index: usize) -> Self {
        let level_pct = if level_pct.is_finite() {
            level_pct.clamp(0.0, 100.0)
        } else {
            0.0
        };
        Self {
            spring: Spring::new(SpringConfig::SKILL_BAR, 0.0),
            level_pct,
            delay_sec: index as f32 * SKILL_STAGGER_SEC,
            waited_sec: 0.0,
            revealed: false,
        }
    }

    pub fn level_pct(&self) -> f32 {
        self.level_pct
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Current width in percent of the track.
    pub fn update(&mut self, dt_sec: f32) -> f32 {
        if !self.revealed {
            return self.spring.value;
        }
        if self.waited_sec < self.delay_sec {
            self.waited_sec += clamp_dt(dt_sec);
            if self.waited_sec < self.delay_sec {
                return self.spring.value;
            }
        }
        self.spring.set_target(self.level_pct);
        self.spring.step(dt_sec)
    }

    pub fn is_settled(&self, eps: f32) -> bool {
        self.revealed && self.waited_sec >= self.delay_sec && self.spring.is_settled(eps)
    }
}
