use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

// Crate engine modules
use crate::engine::assets::experience_config::ExperienceConfig;
use crate::engine::camera::drift_camera::{CameraDrift, camera_drift_controller};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::config_loader::{ConfigLoader, load_config_system, start_loading};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::PoemScenePlugin;
use crate::engine::systems::cursor::{CursorState, apply_cursor_icon, release_despawned_holders};
use crate::engine::systems::label_projection::project_word_labels;
// Transitions
use crate::engine::core::app_state::{
    AppState, despawn_loading_screen, spawn_loading_screen, spin_loading_indicator,
    transition_to_running,
};
// Experience plugins
use crate::overlay::OverlayPlugin;
use crate::poem::{PoemPlugin, PoemSystems};
use crate::rpc::web_rpc::WebRpcPlugin;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        // Registers ExperienceConfig as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<ExperienceConfig>::new(&["json"]))
        .add_plugins(PoemPlugin)
        .add_plugins(PoemScenePlugin)
        .add_plugins(OverlayPlugin)
        .add_plugins(WebRpcPlugin);

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ConfigLoader>()
        .init_resource::<CursorState>()
        .init_resource::<CameraDrift>();

    // State-based system scheduling
    app.add_systems(Startup, (spawn_loading_screen, start_loading).chain())
        .add_systems(
            Update,
            (load_config_system, spin_loading_indicator, transition_to_running)
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(OnEnter(AppState::Running), despawn_loading_screen);

    let runtime_systems = (
        camera_drift_controller,
        project_word_labels.after(PoemSystems),
        release_despawned_holders,
        apply_cursor_icon,
    )
        .chain();

    app.add_systems(Update, runtime_systems.run_if(in_state(AppState::Running)));

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
