//! Smoothing rates are expressed as the fraction of the remaining distance
//! covered in one frame at `REFERENCE_FRAME_RATE`.

pub const REFERENCE_FRAME_RATE: f32 = 60.0;

pub const OPACITY_SMOOTHING: f32 = 0.08;
pub const SCALE_SMOOTHING: f32 = 0.1;
pub const POSITION_SMOOTHING: f32 = 0.06;
pub const CAMERA_SMOOTHING: f32 = 0.05;
pub const MARKER_SMOOTHING: f32 = 0.15;

pub const INACTIVE_SCALE: f32 = 0.5;
pub const ACTIVE_SCALE: f32 = 1.0;
pub const HOVER_SCALE: f32 = 1.15;

/// Camera rotation (radians) at the edge of the window
pub const CAMERA_POINTER_SWAY: f32 = 0.1;
/// Camera pitch change per wheel pixel
pub const CAMERA_WHEEL_SENSITIVITY: f32 = 0.0002;
/// Pitch target is clamped to +/- this many radians
pub const CAMERA_PITCH_LIMIT: f32 = 0.3;
