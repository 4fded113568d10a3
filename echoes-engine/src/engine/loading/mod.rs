//! Loading pipeline that runs before the scene is built.
//!
//! Reads the experience configuration and tracks readiness for the
//! `Loading → Running` transition.

/// Experience configuration loading with fallback to defaults.
///
/// Inserts the resolved `ExperienceConfig` resource once the asset settles.
pub mod config_loader;

/// Loading progress tracking resource for state transitions.
pub mod progress;
