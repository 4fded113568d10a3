//! Screen-space chrome drawn over the scene.
//!
//! Wordmark and mute toggle across the top, a one-shot instructions line in
//! the middle, progress markers and a scroll hint along the bottom, and a
//! vignette under everything. The overlay never blocks word clicks; only the
//! mute button takes pointer input.

/// Looping ambient track and the player abstraction over its sink.
pub mod audio;

/// Button handling and progress tracking.
pub mod interactions;

/// Overlay resources, components and pure presentation rules.
pub mod state;

/// Overlay node tree and its per-frame visual updates.
pub mod ui;

use bevy::prelude::*;

use crate::engine::assets::experience_config::ExperienceConfig;
use crate::engine::core::app_state::AppState;
use crate::poem::PoemSystems;
use crate::poem::controller::PoemProgress;
use audio::{spawn_ambient_track, start_late_track};
use interactions::{MuteToggleRequested, apply_mute_toggle, mute_button_interaction, track_progress};
use state::{Instructions, MuteState, OverlayClock, ProgressDisplay};
use ui::{
    animate_progress_markers, refresh_mute_button, reveal_overlay, spawn_overlay_ui,
    tick_overlay_clock, update_instructions,
};

pub struct OverlayPlugin;

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<MuteToggleRequested>()
            .init_resource::<MuteState>()
            .add_systems(OnEnter(AppState::Running), spawn_overlay)
            .add_systems(
                Update,
                (
                    tick_overlay_clock,
                    mute_button_interaction,
                    apply_mute_toggle,
                    start_late_track,
                    refresh_mute_button.run_if(resource_changed::<MuteState>),
                    track_progress.after(PoemSystems),
                    reveal_overlay,
                    update_instructions,
                    animate_progress_markers,
                )
                    .chain()
                    .run_if(in_state(AppState::Running)),
            );
    }
}

fn spawn_overlay(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    asset_server: Res<AssetServer>,
    config: Res<ExperienceConfig>,
    progress: Res<PoemProgress>,
) {
    let display = ProgressDisplay {
        current: progress.current(),
        total: progress.total(),
    };
    commands.insert_resource(display);
    commands.insert_resource(Instructions::default());
    commands.insert_resource(OverlayClock::default());

    spawn_overlay_ui(&mut commands, &mut images, display);
    spawn_ambient_track(&mut commands, &asset_server, &config.audio.track);
}
