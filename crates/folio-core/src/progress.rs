//! Scroll position to normalised progress.

use crate::constants::{HERO_FADE_PX, HERO_LIFT_PX};

/// Raw document scroll measurements for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset_px: f32,
    pub scroll_height_px: f32,
    pub viewport_height_px: f32,
}

impl ScrollMetrics {
    /// Pixels the document can actually scroll.
    #[inline]
    pub fn scrollable_px(&self) -> f32 {
        (self.scroll_height_px - self.viewport_height_px).max(0.0)
    }
}

/// The one progress value every consumer sees for a given frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProgressSample {
    /// Normalised progress in [0, 1].
    pub progress: f32,
    /// Raw scroll offset, clamped to be non-negative.
    pub offset_px: f32,
}

impl ProgressSample {
    pub fn from_metrics(m: &ScrollMetrics) -> Self {
        let offset_px = if m.offset_px.is_finite() {
            m.offset_px.max(0.0)
        } else {
            0.0
        };
        let range = m.scrollable_px();
        let progress = if range > 0.0 && range.is_finite() {
            (offset_px / range).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            progress,
            offset_px,
        }
    }
}

/// Hero headline fade-out driven by raw pixels, not progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroFade {
    pub opacity: f32,
    pub offset_y_px: f32,
}

impl HeroFade {
    pub fn from_offset(offset_px: f32) -> Self {
        let f = (offset_px / HERO_FADE_PX).clamp(0.0, 1.0);
        Self {
            opacity: 1.0 - f,
            offset_y_px: f * HERO_LIFT_PX,
        }
    }
}
