use folio_core::{HeroFade, OrbFrame};
use glam::Vec2;

// Inline-style strings for the DOM layer. Kept free of web APIs so the
// formatting can be checked on the host.

/// `(left, top, transform)` for the orb. The element is centred on its
/// position, then scaled and rotated about its centre.
pub fn orb_style(f: &OrbFrame) -> (String, String, String) {
    (
        format!("{:.3}%", f.x_pct),
        format!("{:.3}%", f.y_pct),
        format!(
            "translate(-50%, -50%) scale({:.4}) rotate({:.2}deg)",
            f.scale, f.rotation_deg
        ),
    )
}

/// `(opacity, transform)` for the hero headline.
pub fn hero_style(h: &HeroFade) -> (String, String) {
    (
        format!("{:.3}", h.opacity),
        format!("translateY({:.2}px)", h.offset_y_px),
    )
}

/// Skill bar fill width.
pub fn skill_width(pct: f32) -> String {
    format!("{:.2}%", pct)
}

pub fn magnetic_transform(offset: Vec2) -> String {
    format!("translate({:.2}px, {:.2}px)", offset.x, offset.y)
}
