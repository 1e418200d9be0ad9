// Host-side tuning: DOM hooks and renderer defaults.

// DOM element ids and data attributes
pub const CANVAS_ID: &str = "scene-canvas";
pub const ORB_ID: &str = "orb";
pub const HERO_TEXT_ID: &str = "hero-text";
pub const PROJECT_ATTR: &str = "data-project"; // value is a project id, e.g. "qs"
pub const MAGNETIC_ATTR: &str = "data-magnetic"; // optional strength, e.g. "0.5"
pub const MAGNETIC_SELECTOR: &str = "[data-magnetic]";
pub const SKILL_ATTR: &str = "data-skill-level"; // fill percent, e.g. "85"
pub const SKILL_SELECTOR: &str = "[data-skill-level]";
pub const PROJECT_SELECTOR: &str = "[data-project]";

// Background, linear RGB (#030303)
pub const CLEAR_RGB: [f64; 3] = [0.000_911, 0.000_911, 0.000_911];

// Geometry resolution
pub const TORUS_RADIAL_SEGMENTS: u32 = 4; // flat ribbon cross-section
pub const TORUS_TUBULAR_SEGMENTS: u32 = 64;
pub const SATELLITE_SIZE: f32 = 0.2;

// Satellite and ribbon material (metallic grey; ribbons also glow)
pub const SATELLITE_RGB: [f32; 3] = [0.25, 0.25, 0.25];
pub const RIBBON_RGB: [f32; 3] = [0.006, 0.006, 0.006];

// Frame loop
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;
