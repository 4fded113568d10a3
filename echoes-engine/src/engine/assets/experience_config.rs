use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("experience config failed to load from {path}: {reason}")]
    LoadFailed { path: String, reason: String },
    #[error("invalid experience config: {0}")]
    Invalid(String),
}

/// Runtime tuning for the scene, read from `assets/experience.json`.
/// Every field falls back to its default when absent.
#[derive(Resource, Asset, TypePath, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceConfig {
    pub camera: CameraSettings,
    pub fog: FogSettings,
    pub bloom: BloomSettings,
    pub lights: LightSettings,
    pub stars: StarfieldSettings,
    pub sparkles: SparkleSettings,
    pub float: FloatSettings,
    pub audio: AudioSettings,
    /// Word font; the engine default is used when unset.
    pub font_path: Option<String>,
    pub stanza_anchor: [f32; 3],
}

impl Default for ExperienceConfig {
    fn default() -> Self {
        Self {
            camera: CameraSettings::default(),
            fog: FogSettings::default(),
            bloom: BloomSettings::default(),
            lights: LightSettings::default(),
            stars: StarfieldSettings::default(),
            sparkles: SparkleSettings::default(),
            float: FloatSettings::default(),
            audio: AudioSettings::default(),
            font_path: None,
            stanza_anchor: [0.0, 0.0, 0.0],
        }
    }
}

impl ExperienceConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1.0..179.0).contains(&self.camera.fov_degrees) {
            return Err(ConfigError::Invalid(format!(
                "camera.fov_degrees must be within 1..179, got {}",
                self.camera.fov_degrees
            )));
        }
        if self.fog.end <= self.fog.start {
            return Err(ConfigError::Invalid(format!(
                "fog.end ({}) must be greater than fog.start ({})",
                self.fog.end, self.fog.start
            )));
        }
        let [low, high] = self.float.floating_range;
        if high < low {
            return Err(ConfigError::Invalid(format!(
                "float.floating_range is reversed: [{low}, {high}]"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub position: [f32; 3],
    pub fov_degrees: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 8.0],
            fov_degrees: 60.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FogSettings {
    /// sRGB hex, e.g. `#050510`
    pub color: String,
    pub start: f32,
    pub end: f32,
}

impl Default for FogSettings {
    fn default() -> Self {
        Self {
            color: "#050510".to_string(),
            start: 5.0,
            end: 30.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BloomSettings {
    pub threshold: f32,
    pub smoothing: f32,
    pub intensity: f32,
}

impl Default for BloomSettings {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            smoothing: 0.9,
            intensity: 0.8,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightSettings {
    pub ambient_brightness: f32,
    pub key_position: [f32; 3],
    pub key_intensity: f32,
    pub fill_position: [f32; 3],
    pub fill_intensity: f32,
    pub fill_color: String,
}

impl Default for LightSettings {
    fn default() -> Self {
        Self {
            ambient_brightness: 0.3,
            key_position: [10.0, 10.0, 10.0],
            key_intensity: 0.5,
            fill_position: [-10.0, -10.0, -10.0],
            fill_intensity: 0.2,
            fill_color: "#4a90d9".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldSettings {
    pub count: usize,
    pub radius: f32,
    pub depth: f32,
    pub factor: f32,
    pub twinkle_speed: f32,
    pub seed: Option<u64>,
}

impl Default for StarfieldSettings {
    fn default() -> Self {
        Self {
            count: 3000,
            radius: 50.0,
            depth: 100.0,
            factor: 3.0,
            twinkle_speed: 0.5,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SparkleSettings {
    pub count: usize,
    pub scale: f32,
    pub size: f32,
    pub speed: f32,
    pub opacity: f32,
    /// Radians per second about the vertical axis
    pub spin: f32,
}

impl Default for SparkleSettings {
    fn default() -> Self {
        Self {
            count: 200,
            scale: 20.0,
            size: 2.0,
            speed: 0.3,
            opacity: 0.5,
            spin: 0.02,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatSettings {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
    pub floating_range: [f32; 2],
}

impl Default for FloatSettings {
    fn default() -> Self {
        Self {
            speed: 1.5,
            rotation_intensity: 0.15,
            float_intensity: 0.25,
            floating_range: [-0.05, 0.05],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    pub track: String,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            track: "audio/ambient.wav".to_string(),
        }
    }
}

/// Parses a `#rrggbb` hex colour, falling back to `fallback` on bad input.
pub fn parse_colour(hex: &str, fallback: Color) -> Color {
    Srgba::hex(hex).map(Color::from).unwrap_or_else(|err| {
        warn!("Invalid colour '{}': {}", hex, err);
        fallback
    })
}
