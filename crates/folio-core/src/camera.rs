use crate::constants::{
    CAMERA_FOLLOW_RATE, CAMERA_FOVY_DEG, CAMERA_PARALLAX, CAMERA_START_EYE, CAMERA_WAYPOINTS,
    CAMERA_ZFAR, CAMERA_ZNEAR,
};
use crate::error::ConfigError;
use crate::keyframe::{Easing, WaypointTable};
use crate::spring::approach;
use glam::{Mat4, Vec2, Vec3};

/// Eye position for one frame. Orientation is implied: always at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
}

impl CameraPose {
    pub const TARGET: Vec3 = Vec3::ZERO;

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye,
            target: Self::TARGET,
            aspect: aspect.max(1e-3),
        }
    }
}

/// Perspective camera for one viewport. Field of view and clip planes are
/// fixed; only the eye and aspect change per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub aspect: f32,
}

impl Camera {
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            CAMERA_FOVY_DEG.to_radians(),
            self.aspect,
            CAMERA_ZNEAR,
            CAMERA_ZFAR,
        )
    }

    /// World to clip space.
    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }
}

/// Scroll-keyed camera path with pointer parallax and an exponential follow.
pub struct CameraRig {
    table: WaypointTable<Vec3>,
    eye: Vec3,
}

impl CameraRig {
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            table: WaypointTable::new(&CAMERA_WAYPOINTS, Easing::Smoothstep)?,
            eye: CAMERA_START_EYE,
        })
    }

    /// Where the eye wants to be this frame, before smoothing.
    pub fn target(&self, progress: f32, pointer: Vec2) -> Vec3 {
        let p = pointer.clamp(Vec2::NEG_ONE, Vec2::ONE);
        let p = if p.is_nan() { Vec2::ZERO } else { p };
        self.table.sample(progress) + (p * CAMERA_PARALLAX).extend(0.0)
    }

    pub fn update(&mut self, progress: f32, pointer: Vec2, dt_sec: f32) -> CameraPose {
        let target = self.target(progress, pointer);
        self.eye = approach(self.eye, target, CAMERA_FOLLOW_RATE, dt_sec);
        CameraPose { eye: self.eye }
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose { eye: self.eye }
    }
}
