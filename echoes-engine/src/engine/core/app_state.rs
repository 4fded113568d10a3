use bevy::prelude::*;
use constants::palette::{OVERLAY_TEXT, OVERLAY_TEXT_DIM, VOID};

use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];
const SPINNER_FRAME_SECS: f32 = 0.1;

#[derive(Component)]
pub struct LoadingScreen;

#[derive(Component)]
pub struct LoadingSpinner;

/// 2D camera that only exists to draw the loading screen.
#[derive(Component)]
pub struct LoadingCamera;

pub fn spawn_loading_screen(mut commands: Commands) {
    commands.spawn((LoadingCamera, Camera2d, Name::new("LoadingCamera")));

    commands
        .spawn((
            LoadingScreen,
            Name::new("LoadingScreen"),
            BackgroundColor(VOID),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                row_gap: Val::Px(16.0),
                ..default()
            },
            GlobalZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                LoadingSpinner,
                Text::new(SPINNER_FRAMES[0]),
                TextFont { font_size: 24.0, ..default() },
                TextColor(OVERLAY_TEXT),
            ));
            parent.spawn((
                Text::new("ENTERING THE VOID..."),
                TextFont { font_size: 14.0, ..default() },
                TextColor(OVERLAY_TEXT_DIM),
            ));
        });
}

pub fn spin_loading_indicator(time: Res<Time>, mut q: Query<&mut Text, With<LoadingSpinner>>) {
    let frame = (time.elapsed_secs() / SPINNER_FRAME_SECS) as usize % SPINNER_FRAMES.len();
    for mut text in &mut q {
        if text.0 != SPINNER_FRAMES[frame] {
            text.0 = SPINNER_FRAMES[frame].to_string();
        }
    }
}

pub fn despawn_loading_screen(
    mut commands: Commands,
    screens: Query<Entity, Or<(With<LoadingScreen>, With<LoadingCamera>)>>,
) {
    for entity in &screens {
        commands.entity(entity).despawn();
    }
}

pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.is_complete() {
        if loading_progress.used_fallback_config {
            info!("→ Config unavailable, running with defaults");
        }
        info!("→ Transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
