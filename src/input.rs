use folio_core::{ProjectId, ScrollMetrics, MAGNETIC_STRENGTH};
use glam::Vec2;

/// Pointer position in [-1, 1]², +y up, relative to the viewport centre.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub ndc: Vec2,
}

#[inline]
pub fn pointer_ndc(client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) -> Vec2 {
    if !(viewport_w > 0.0 && viewport_h > 0.0) {
        return Vec2::ZERO;
    }
    let x = (client_x / viewport_w) * 2.0 - 1.0;
    let y = 1.0 - (client_y / viewport_h) * 2.0;
    Vec2::new(x, y).clamp(Vec2::NEG_ONE, Vec2::ONE)
}

/// Pointer offset from the centre of an element's bounding box, in CSS px.
#[inline]
pub fn offset_from_center(
    client_x: f32,
    client_y: f32,
    left: f32,
    top: f32,
    width: f32,
    height: f32,
) -> Vec2 {
    Vec2::new(
        client_x - (left + width * 0.5),
        client_y - (top + height * 0.5),
    )
}

#[inline]
pub fn scroll_metrics(scroll_y: f64, scroll_height: f64, inner_height: f64) -> ScrollMetrics {
    ScrollMetrics {
        offset_px: scroll_y as f32,
        scroll_height_px: scroll_height as f32,
        viewport_height_px: inner_height as f32,
    }
}

/// Pull strength from a `data-magnetic` value. Empty, negative or
/// unparsable values use the default.
pub fn magnetic_strength(attr: Option<&str>) -> f32 {
    attr.and_then(|v| v.trim().parse::<f32>().ok())
        .filter(|s| s.is_finite() && *s >= 0.0)
        .unwrap_or(MAGNETIC_STRENGTH)
}

/// Fill level in percent from a `data-skill-level` value, clamped to [0, 100].
pub fn skill_level(attr: Option<&str>) -> Option<f32> {
    attr.and_then(|v| v.trim().trim_end_matches('%').parse::<f32>().ok())
        .filter(|l| l.is_finite())
        .map(|l| l.clamp(0.0, 100.0))
}

/// True once any part of the element's box is inside the viewport.
#[inline]
pub fn in_viewport(top: f32, bottom: f32, viewport_h: f32) -> bool {
    bottom > 0.0 && top < viewport_h
}

// ---------------- Hover selection ----------------

/// Tracks which project card is hovered. A late `leave` from a card the
/// pointer already moved off does not clear a newer selection.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct HoverState {
    active: Option<ProjectId>,
}

impl HoverState {
    pub fn active(&self) -> Option<ProjectId> {
        self.active
    }

    pub fn enter(&mut self, attr: Option<&str>) {
        self.active = attr.and_then(ProjectId::parse);
    }

    pub fn leave(&mut self, attr: Option<&str>) {
        if self.active.is_some() && self.active == attr.and_then(ProjectId::parse) {
            self.active = None;
        }
    }
}
