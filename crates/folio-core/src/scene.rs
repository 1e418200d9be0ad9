//! 3D scene rig: the focal object, its ribbons and satellites, and the camera.
//!
//! Every frame the rig resolves the hovered project to a target
//! [`ArtifactConfig`], eases the material toward it, derives the object
//! transform from scroll progress and wall-clock time, and moves the camera.
//! The resulting [`SceneFrame`] is a plain value handed to the renderer.

use crate::artifact::{ArtifactConfig, MaterialState, ProjectId};
use crate::camera::{CameraPose, CameraRig};
use crate::constants::*;
use crate::error::ConfigError;
use crate::spring::{approach, approach_fraction, clamp_dt};
use glam::{Quat, Vec2, Vec3};
use rand::prelude::*;
use std::f32::consts::{PI, TAU};

/// One full turn across the scroll range.
#[inline]
pub fn turntable_yaw(progress: f32) -> f32 {
    progress * TAU
}

/// Rise-and-fall roll, zero at both ends and peaking mid-scroll.
#[inline]
pub fn scroll_tilt(progress: f32) -> f32 {
    (progress * PI).sin() * SCROLL_TILT_MAX
}

/// Idle breathing, always on, independent of scroll.
#[inline]
pub fn breathing(elapsed_sec: f32) -> f32 {
    1.0 + elapsed_sec.sin() * BREATH_AMPLITUDE
}

/// Extra scale while the projects section is in view. Zero outside
/// `(EXPLOSION_START, EXPLOSION_END)` and at both edges.
#[inline]
pub fn explosion_envelope(progress: f32) -> f32 {
    if progress > EXPLOSION_START && progress < EXPLOSION_END {
        let local = (progress - EXPLOSION_START) / (EXPLOSION_END - EXPLOSION_START);
        (local * PI).sin() * EXPLOSION_AMPLITUDE
    } else {
        0.0
    }
}

/// How the group scale chases its target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleConvergence {
    /// Fixed fraction per frame. Converges faster at higher frame rates.
    PerFrame(f32),
    /// `min(1, rate * dt)` per frame, same as the camera and material.
    TimeScaled(f32),
}

impl Default for ScaleConvergence {
    fn default() -> Self {
        ScaleConvergence::TimeScaled(SCALE_FOLLOW_RATE)
    }
}

impl ScaleConvergence {
    #[inline]
    fn step(self, value: f32, target: f32, dt_sec: f32) -> f32 {
        match self {
            ScaleConvergence::PerFrame(fraction) => approach_fraction(value, target, fraction),
            ScaleConvergence::TimeScaled(rate) => approach(value, target, rate, dt_sec),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

/// Static description of one orbiting ribbon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RibbonSpec {
    pub radius: f32,
    pub width: f32,
    /// Base spin in rad/s before the config's `ring_speed` multiplier.
    pub speed: f32,
    pub spin_axis: Axis,
    /// Fixed mounting rotation of the ribbon's parent.
    pub mount: Quat,
}

pub fn ribbon_specs() -> [RibbonSpec; 3] {
    use std::f32::consts::FRAC_PI_4;
    [
        RibbonSpec {
            radius: 1.4,
            width: 0.05,
            speed: 0.5,
            spin_axis: Axis::Z,
            mount: Quat::from_rotation_x(FRAC_PI_4),
        },
        RibbonSpec {
            radius: 1.8,
            width: 0.02,
            speed: -0.3,
            spin_axis: Axis::Y,
            mount: Quat::from_rotation_y(FRAC_PI_4),
        },
        RibbonSpec {
            radius: 2.2,
            width: 0.08,
            speed: 0.2,
            spin_axis: Axis::X,
            mount: Quat::from_rotation_z(FRAC_PI_4),
        },
    ]
}

/// Satellite placement in the cluster's local frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Satellite {
    pub position: Vec3,
    pub rotation: Quat,
}

/// Ring of small cubes. Orientations are random but fixed for the lifetime
/// of the rig.
pub fn satellite_ring(seed: u64) -> Vec<Satellite> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..SATELLITE_COUNT)
        .map(|i| {
            let angle = (i as f32 / SATELLITE_COUNT as f32) * TAU;
            let position = Vec3::new(
                angle.cos() * SATELLITE_RADIUS,
                (angle * 2.0).sin() * SATELLITE_BOB,
                angle.sin() * SATELLITE_RADIUS,
            );
            let rotation = Quat::from_euler(
                glam::EulerRot::XYZ,
                rng.gen::<f32>(),
                rng.gen::<f32>(),
                rng.gen::<f32>(),
            );
            Satellite { position, rotation }
        })
        .collect()
}

/// Transform of the object group (core, ribbons and satellites move together).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObjectTransform {
    /// Turntable angle around +Y.
    pub yaw: f32,
    /// Tilt around +Z.
    pub tilt: f32,
    pub scale: f32,
}

impl ObjectTransform {
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(glam::EulerRot::XYZ, 0.0, self.yaw, self.tilt)
    }
}

/// Per-frame rig inputs. `progress` must be the frame's single shared sample.
#[derive(Clone, Copy, Debug)]
pub struct SceneInput {
    pub progress: f32,
    pub pointer: Vec2,
    pub active: Option<ProjectId>,
    pub dt_sec: f32,
    pub elapsed_sec: f32,
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug)]
pub struct SceneFrame {
    pub config: ArtifactConfig,
    pub material: MaterialState,
    pub object: ObjectTransform,
    /// Euler angles (x, y) of the core's own continuous spin.
    pub core_spin: Vec3,
    pub ribbon_angles: [f32; 3],
    pub satellite_yaw: f32,
    pub camera: CameraPose,
}

pub struct SceneRig {
    camera: CameraRig,
    material: MaterialState,
    scale_convergence: ScaleConvergence,
    group_scale: f32,
    core_spin: Vec3,
    ribbons: [RibbonSpec; 3],
    ribbon_angles: [f32; 3],
    satellites: Vec<Satellite>,
    last_active: Option<ProjectId>,
}

impl SceneRig {
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            camera: CameraRig::new()?,
            material: MaterialState::default(),
            scale_convergence: ScaleConvergence::default(),
            group_scale: 1.0,
            core_spin: Vec3::ZERO,
            ribbons: ribbon_specs(),
            ribbon_angles: [0.0; 3],
            satellites: satellite_ring(SATELLITE_SEED),
            last_active: None,
        })
    }

    pub fn with_scale_convergence(mut self, mode: ScaleConvergence) -> Self {
        self.scale_convergence = mode;
        self
    }

    pub fn ribbons(&self) -> &[RibbonSpec; 3] {
        &self.ribbons
    }

    pub fn satellites(&self) -> &[Satellite] {
        &self.satellites
    }

    pub fn update(&mut self, input: &SceneInput) -> SceneFrame {
        let dt = clamp_dt(input.dt_sec);
        let progress = input.progress;

        if input.active != self.last_active {
            log::debug!(
                "[scene] active project {:?} -> {:?} (srgb {:?})",
                self.last_active.map(ProjectId::as_str),
                input.active.map(ProjectId::as_str),
                ArtifactConfig::for_selection(input.active).color.to_srgb()
            );
            self.last_active = input.active;
        }
        let config = ArtifactConfig::for_selection(input.active);
        let material = self.material.step(&config, dt);

        let expansion = breathing(input.elapsed_sec) + explosion_envelope(progress);
        let scale_target = config.scale * expansion;
        self.group_scale = self
            .scale_convergence
            .step(self.group_scale, scale_target, dt);
        let object = ObjectTransform {
            yaw: turntable_yaw(progress),
            tilt: scroll_tilt(progress),
            scale: self.group_scale,
        };

        self.core_spin = wrap_angles(self.core_spin + CORE_SPIN_RATE * dt);
        for (angle, spec) in self.ribbon_angles.iter_mut().zip(self.ribbons.iter()) {
            *angle = (*angle + dt * spec.speed * config.ring_speed).rem_euclid(TAU);
        }

        let camera = self.camera.update(progress, input.pointer, dt);

        SceneFrame {
            config,
            material,
            object,
            core_spin: self.core_spin,
            ribbon_angles: self.ribbon_angles,
            satellite_yaw: (input.elapsed_sec * SATELLITE_YAW_RATE).rem_euclid(TAU),
            camera,
        }
    }
}

#[inline]
fn wrap_angles(v: Vec3) -> Vec3 {
    Vec3::new(v.x.rem_euclid(TAU), v.y.rem_euclid(TAU), v.z.rem_euclid(TAU))
}
