//! Ambient camera drift for the poem scene.
//!
//! Pointer position and mouse wheel nudge the camera's orientation; the
//! camera never translates.

/// Camera drift resource and controller system.
pub mod drift_camera;
