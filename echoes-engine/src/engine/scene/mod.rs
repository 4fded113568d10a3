//! Everything in the 3D scene around the poem.
//!
//! Builds the camera, fog, bloom and lights, plus the decorative starfield
//! and sparkles. Spawned once on entering `AppState::Running`.

/// Camera, fog, bloom, clear colour and lighting.
pub mod atmosphere;

/// Starfield shell and drifting sparkle cloud with their per-frame animation.
pub mod particles;

use bevy::prelude::*;

use crate::engine::assets::experience_config::ExperienceConfig;
use crate::engine::core::app_state::AppState;
use atmosphere::spawn_atmosphere;
use particles::{animate_sparkles, spawn_particles, twinkle_stars};

pub struct PoemScenePlugin;

impl Plugin for PoemScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Running), spawn_scene)
            .add_systems(
                Update,
                (animate_sparkles, twinkle_stars).run_if(in_state(AppState::Running)),
            );
    }
}

fn spawn_scene(
    mut commands: Commands,
    config: Res<ExperienceConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    spawn_atmosphere(&mut commands, &config);
    spawn_particles(&mut commands, &mut meshes, &mut materials, &config);
}
