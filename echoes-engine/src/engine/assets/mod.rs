//! Runtime configuration assets.
//!
//! The experience is tuned through a single JSON asset loaded during the
//! `Loading` state; every field has a compiled-in default.

/// Experience configuration asset, its sections and validation.
pub mod experience_config;
