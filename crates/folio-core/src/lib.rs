pub mod artifact;
pub mod camera;
pub mod choreography;
pub mod color;
pub mod constants;
pub mod error;
pub mod keyframe;
pub mod magnetic;
pub mod orb;
pub mod progress;
pub mod scene;
pub mod skill;
pub mod spring;

pub use artifact::*;
pub use camera::*;
pub use choreography::*;
pub use color::*;
pub use constants::*;
pub use error::*;
pub use keyframe::*;
pub use magnetic::*;
pub use orb::*;
pub use progress::*;
pub use scene::*;
pub use skill::*;
pub use spring::*;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
