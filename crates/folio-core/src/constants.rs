use crate::keyframe::Waypoint;
use glam::Vec3;

// Shared choreography tuning. Waypoint tables are validated when the
// controllers are built; everything else is plain data.

// Frame timing
pub const MAX_FRAME_DT: f32 = 1.0 / 30.0; // cap for any single frame delta
pub const SPRING_SUBSTEP_DT: f32 = 1.0 / 240.0; // spring integration step

// Orb: screen-space position (% of viewport) and scale per section
pub const ORB_X_PCT: [Waypoint<f32>; 5] = [
    Waypoint::new(0.0, 70.0), // hero: right of the title
    Waypoint::new(0.2, 15.0), // philosophy: left column
    Waypoint::new(0.5, 85.0), // projects: top right
    Waypoint::new(0.8, 10.0), // skills: bottom left
    Waypoint::new(1.0, 50.0), // contact: centre
];
pub const ORB_Y_PCT: [Waypoint<f32>; 5] = [
    Waypoint::new(0.0, 30.0),
    Waypoint::new(0.2, 45.0),
    Waypoint::new(0.5, 25.0),
    Waypoint::new(0.8, 65.0),
    Waypoint::new(1.0, 50.0),
];
pub const ORB_SCALE: [Waypoint<f32>; 5] = [
    Waypoint::new(0.0, 1.0),
    Waypoint::new(0.2, 1.8),
    Waypoint::new(0.5, 0.8),
    Waypoint::new(0.8, 1.4),
    Waypoint::new(1.0, 0.5),
];
pub const ORB_ROTATION_DEG: [Waypoint<f32>; 2] =
    [Waypoint::new(0.0, 0.0), Waypoint::new(1.0, 360.0)];

// Camera: eye position per section, always looking at the origin
pub const CAMERA_WAYPOINTS: [Waypoint<Vec3>; 5] = [
    Waypoint::new(0.0, Vec3::new(-3.0, 0.0, 6.0)), // hero: angled left
    Waypoint::new(0.25, Vec3::new(-4.0, 2.0, 5.0)), // about: top-left
    Waypoint::new(0.5, Vec3::new(0.0, 0.0, 9.0)),  // projects: wide
    Waypoint::new(0.75, Vec3::new(4.0, -2.0, 5.0)), // skills: bottom-right
    Waypoint::new(1.0, Vec3::new(0.0, 0.0, 3.0)),  // contact: close-up
];
pub const CAMERA_START_EYE: Vec3 = Vec3::new(0.0, 0.0, 6.0);
pub const CAMERA_FOVY_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 200.0;
pub const CAMERA_PARALLAX: f32 = 0.2; // world units at pointer = ±1
pub const CAMERA_FOLLOW_RATE: f32 = 2.0; // per second

// Focal object
pub const CONFIG_BLEND_RATE: f32 = 2.0; // per second, colour/distortion/emission
pub const SCROLL_TILT_MAX: f32 = 0.5; // radians at mid-scroll
pub const BREATH_AMPLITUDE: f32 = 0.05;
pub const EXPLOSION_START: f32 = 0.3;
pub const EXPLOSION_END: f32 = 0.7;
pub const EXPLOSION_AMPLITUDE: f32 = 0.5;
pub const SCALE_FOLLOW_FRACTION: f32 = 0.1; // per frame, legacy behaviour
pub const SCALE_FOLLOW_RATE: f32 = 6.0; // per second; 0.1/frame at 60 fps

// Secondary motion
pub const CORE_SPIN_RATE: Vec3 = Vec3::new(0.2, 0.3, 0.0); // rad/s around x, y
pub const SATELLITE_COUNT: usize = 12;
pub const SATELLITE_RADIUS: f32 = 2.5;
pub const SATELLITE_BOB: f32 = 0.5;
pub const SATELLITE_YAW_RATE: f32 = 0.1; // rad/s of wall-clock time
pub const SATELLITE_SEED: u64 = 0x5A7E_11CE;

// Hero text fade, in raw scroll pixels
pub const HERO_FADE_PX: f32 = 300.0;
pub const HERO_LIFT_PX: f32 = 100.0;

// Magnetic hover
pub const MAGNETIC_STRENGTH: f32 = 1.0;

// Skill bars: delay between consecutive bars starting to fill
pub const SKILL_STAGGER_SEC: f32 = 0.1;
