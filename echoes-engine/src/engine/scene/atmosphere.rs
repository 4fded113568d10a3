use bevy::core_pipeline::bloom::{Bloom, BloomPrefilter};
use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;
use constants::palette::{FILL_LIGHT, VOID};

use crate::engine::assets::experience_config::{ExperienceConfig, parse_colour};
use crate::engine::camera::drift_camera::MainCamera;

/// Light and bloom values in the config use a 0..1 authoring scale;
/// these map them onto Bevy's physical units.
const POINT_LIGHT_LUMENS: f32 = 2_000_000.0;
const AMBIENT_BRIGHTNESS: f32 = 400.0;
const BLOOM_INTENSITY_SCALE: f32 = 0.3;
const POINT_LIGHT_RANGE: f32 = 60.0;

/// Clear colour, camera with fog and bloom, ambient and point lights.
pub fn spawn_atmosphere(commands: &mut Commands, config: &ExperienceConfig) {
    let fog_colour = parse_colour(&config.fog.color, VOID);
    commands.insert_resource(ClearColor(fog_colour));

    commands.spawn((
        Name::new("MainCamera"),
        MainCamera,
        Camera3d::default(),
        Camera {
            hdr: true,
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: config.camera.fov_degrees.to_radians(),
            ..default()
        }),
        Transform::from_translation(Vec3::from_array(config.camera.position)),
        DistanceFog {
            color: fog_colour,
            falloff: FogFalloff::Linear {
                start: config.fog.start,
                end: config.fog.end,
            },
            ..default()
        },
        Bloom {
            intensity: config.bloom.intensity * BLOOM_INTENSITY_SCALE,
            prefilter: BloomPrefilter {
                threshold: config.bloom.threshold,
                threshold_softness: config.bloom.smoothing,
            },
            ..Bloom::NATURAL
        },
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: config.lights.ambient_brightness * AMBIENT_BRIGHTNESS,
        ..default()
    });

    commands.spawn((
        Name::new("KeyLight"),
        PointLight {
            intensity: config.lights.key_intensity * POINT_LIGHT_LUMENS,
            range: POINT_LIGHT_RANGE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(Vec3::from_array(config.lights.key_position)),
    ));

    commands.spawn((
        Name::new("FillLight"),
        PointLight {
            intensity: config.lights.fill_intensity * POINT_LIGHT_LUMENS,
            color: parse_colour(&config.lights.fill_color, FILL_LIGHT),
            range: POINT_LIGHT_RANGE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(Vec3::from_array(config.lights.fill_position)),
    ));
}
