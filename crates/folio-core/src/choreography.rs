//! One-call-per-frame entry point tying both presentation layers to a single
//! progress sample.

use crate::artifact::ProjectId;
use crate::error::ConfigError;
use crate::orb::{OrbController, OrbFrame};
use crate::progress::{HeroFade, ProgressSample, ScrollMetrics};
use crate::scene::{ScaleConvergence, SceneFrame, SceneInput, SceneRig};
use crate::spring::clamp_dt;
use glam::Vec2;

/// Live signals for one rendered frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    pub scroll: ScrollMetrics,
    /// Pointer in [-1, 1]², +y up, relative to the viewport centre.
    pub pointer: Vec2,
    pub active: Option<ProjectId>,
    pub dt_sec: f32,
    /// Wall-clock seconds since the choreography started.
    pub elapsed_sec: f32,
}

#[derive(Clone, Debug)]
pub struct FrameOutput {
    pub progress: ProgressSample,
    pub hero: HeroFade,
    pub orb: OrbFrame,
    pub scene: SceneFrame,
}

pub struct Choreography {
    orb: OrbController,
    scene: SceneRig,
    frames: u64,
}

impl Choreography {
    /// Validates every table up front; no frame runs on a bad configuration.
    pub fn new(initial: ScrollMetrics) -> Result<Self, ConfigError> {
        let start = ProgressSample::from_metrics(&initial);
        let orb = OrbController::new(start.progress)?;
        let scene = SceneRig::new()?;
        log::info!(
            "[choreo] ready at progress {:.3} ({:.0}px)",
            start.progress,
            start.offset_px
        );
        Ok(Self {
            orb,
            scene,
            frames: 0,
        })
    }

    pub fn with_scale_convergence(mut self, mode: ScaleConvergence) -> Self {
        self.scene = self.scene.with_scale_convergence(mode);
        self
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn scene(&self) -> &SceneRig {
        &self.scene
    }

    pub fn frame(&mut self, input: &FrameInput) -> FrameOutput {
        let progress = ProgressSample::from_metrics(&input.scroll);
        let dt = clamp_dt(input.dt_sec);
        let p = progress.progress;

        let orb = self.orb.update(p, dt);
        let scene = self.scene.update(&SceneInput {
            progress: p,
            pointer: input.pointer,
            active: input.active,
            dt_sec: dt,
            elapsed_sec: input.elapsed_sec,
        });
        self.frames += 1;

        FrameOutput {
            progress,
            hero: HeroFade::from_offset(progress.offset_px),
            orb,
            scene,
        }
    }
}
