//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration and the
//! loading-to-running transition for both native and WASM targets.

/// Application setup and plugin wiring.
///
/// Creates the main app with the poem, scene, overlay and host bridge
/// plugins plus the loading and runtime schedules.
pub mod app_setup;

/// Application states and the loading screen shown before the scene exists.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
pub mod window_config;
