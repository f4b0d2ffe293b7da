// Shared layout/visual/interaction tuning constants used by the frontends.

use std::f32::consts::TAU;

// Spatial layout
pub const BASE_RADIUS: f32 = 5.0; // shell radius for a zero-weight word
pub const RADIUS_SPAN: f32 = 3.0; // extra radius granted to a full-weight word
pub const GOLDEN_ANGLE: f32 = 10.166_407; // pi * (1 + sqrt(5)), radians

// Word sizing
pub const SCALE_BASE: f32 = 0.5; // display scale of a zero-weight word
pub const SCALE_SPAN: f32 = 2.0; // extra scale granted to a full-weight word

// Hover emphasis
pub const OUTLINE_WIDTH_BASE: f32 = 0.02;
pub const OUTLINE_WIDTH_HOVER: f32 = 0.04;
pub const OUTLINE_COLOR_BASE: [f32; 3] = [0.0, 0.0, 0.0];
pub const HIGHLIGHT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

// Animation
pub const BOB_AMPLITUDE: f32 = 0.1; // vertical oscillation, world units
pub const SPIN_RATE: f32 = 0.06; // rad/s, one per-node turn every ~105 s

// Camera
pub const MIN_CAMERA_DISTANCE: f32 = 5.0;
pub const MAX_CAMERA_DISTANCE: f32 = 30.0;
pub const DEFAULT_CAMERA_DISTANCE: f32 = 15.0;
pub const CAMERA_FOVY: f32 = 1.308_997; // 75 degrees
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const PITCH_LIMIT: f32 = 1.5; // keep the orbit clear of the poles
pub const AUTO_ROTATE_RATE: f32 = TAU / 120.0; // rad/s, one orbit every two minutes

// Interaction
pub const ROTATE_SENSITIVITY: f32 = 0.005; // rad per dragged pixel
pub const PAN_SENSITIVITY: f32 = 0.001; // world units per pixel per unit distance
pub const ZOOM_STEP: f32 = 1.0; // distance change per scroll line
pub const PICK_RADIUS_FACTOR: f32 = 0.45; // hit-sphere radius as a fraction of display scale

// Scene backdrop
pub const BACKGROUND_COLOR: [f64; 3] = [0.102, 0.102, 0.180];

// Fixed 12-color display palette, assigned to words by index
pub const PALETTE: [[f32; 3]; 12] = [
    [1.000, 0.420, 0.420],
    [0.306, 0.804, 0.769],
    [0.271, 0.718, 0.820],
    [1.000, 0.627, 0.478],
    [0.596, 0.847, 0.784],
    [0.969, 0.863, 0.435],
    [0.733, 0.561, 0.808],
    [0.522, 0.757, 0.886],
    [0.973, 0.718, 0.224],
    [0.322, 0.718, 0.533],
    [0.937, 0.278, 0.435],
    [0.024, 1.000, 0.647],
];
