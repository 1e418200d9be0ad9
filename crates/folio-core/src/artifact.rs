//! Visual identity of the focal 3D object and its per-project variants.

use crate::color::Rgb;
use crate::constants::CONFIG_BLEND_RATE;
use crate::spring::approach;

/// Projects that can take over the focal object while hovered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectId {
    Airable,
    I12,
    Qs,
}

impl ProjectId {
    pub const ALL: [ProjectId; 3] = [ProjectId::Airable, ProjectId::I12, ProjectId::Qs];

    /// Map a DOM id to a project. Unknown ids select nothing.
    pub fn parse(id: &str) -> Option<Self> {
        match id.trim() {
            "airable" => Some(ProjectId::Airable),
            "i12" => Some(ProjectId::I12),
            "qs" => Some(ProjectId::Qs),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectId::Airable => "airable",
            ProjectId::I12 => "i12",
            ProjectId::Qs => "qs",
        }
    }
}

/// Target look of the focal object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArtifactConfig {
    pub color: Rgb,
    pub distortion: f32,
    /// Multiplier on each ribbon's base spin speed.
    pub ring_speed: f32,
    pub emissive_intensity: f32,
    /// Multiplier on the object group scale.
    pub scale: f32,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ArtifactConfig {
    /// Look with no project selected.
    pub const DEFAULT: Self = Self {
        color: Rgb::WHITE,
        distortion: 0.2,
        ring_speed: 1.0,
        emissive_intensity: 0.5,
        scale: 1.0,
    };

    /// Target config for the current selection; no selection is the default.
    pub fn for_selection(active: Option<ProjectId>) -> Self {
        let base = Self::default();
        match active {
            None => base,
            Some(ProjectId::Airable) => Self {
                color: Rgb::from_srgb_hex(0x00ffee),
                distortion: 0.8,
                ring_speed: 2.0,
                scale: 1.2,
                ..base
            },
            Some(ProjectId::I12) => Self {
                color: Rgb::from_srgb_hex(0x0055ff),
                distortion: 0.1,
                ring_speed: 0.5,
                scale: 1.1,
                ..base
            },
            Some(ProjectId::Qs) => Self {
                color: Rgb::from_srgb_hex(0xff00aa),
                distortion: 1.2,
                ring_speed: 1.5,
                emissive_intensity: 1.5,
                scale: 1.3,
            },
        }
    }
}

/// Material parameters actually handed to the renderer. Never snaps; each
/// field eases toward the active [`ArtifactConfig`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialState {
    pub color: Rgb,
    pub distortion: f32,
    pub emissive_color: Rgb,
    pub emissive_intensity: f32,
}

impl Default for MaterialState {
    fn default() -> Self {
        let cfg = ArtifactConfig::default();
        Self {
            color: cfg.color,
            distortion: cfg.distortion,
            emissive_color: Rgb::WHITE,
            emissive_intensity: cfg.emissive_intensity,
        }
    }
}

impl MaterialState {
    pub fn step(&mut self, target: &ArtifactConfig, dt_sec: f32) -> MaterialState {
        let rate = CONFIG_BLEND_RATE;
        self.color = approach(self.color, target.color, rate, dt_sec);
        self.distortion = approach(self.distortion, target.distortion, rate, dt_sec);
        self.emissive_color = approach(self.emissive_color, target.color, rate, dt_sec);
        self.emissive_intensity =
            approach(self.emissive_intensity, target.emissive_intensity, rate, dt_sec);
        *self
    }
}
