use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::assets::experience_config::{ConfigError, ExperienceConfig};
use crate::engine::loading::progress::LoadingProgress;

pub const CONFIG_PATH: &str = "experience.json";

#[derive(Resource, Default)]
pub struct ConfigLoader {
    handle: Option<Handle<ExperienceConfig>>,
}

// Start the loading process
pub fn start_loading(mut config_loader: ResMut<ConfigLoader>, asset_server: Res<AssetServer>) {
    info!("Loading experience config from: {}", CONFIG_PATH);
    config_loader.handle = Some(asset_server.load(CONFIG_PATH));
}

/// Outcome of one poll of the config asset. `Ok(None)` means still loading.
fn poll_config(
    handle: &Handle<ExperienceConfig>,
    configs: &Assets<ExperienceConfig>,
    load_state: Option<LoadState>,
) -> Result<Option<ExperienceConfig>, ConfigError> {
    if let Some(config) = configs.get(handle) {
        config.validate()?;
        return Ok(Some(config.clone()));
    }

    match load_state {
        Some(LoadState::Failed(err)) => Err(ConfigError::LoadFailed {
            path: CONFIG_PATH.to_string(),
            reason: err.to_string(),
        }),
        _ => Ok(None),
    }
}

pub fn load_config_system(
    mut commands: Commands,
    mut loading_progress: ResMut<LoadingProgress>,
    config_loader: Res<ConfigLoader>,
    asset_server: Res<AssetServer>,
    configs: Res<Assets<ExperienceConfig>>,
) {
    if loading_progress.config_ready {
        return;
    }
    let Some(handle) = config_loader.handle.as_ref() else {
        return;
    };

    let config = match poll_config(handle, &configs, asset_server.get_load_state(handle.id())) {
        Ok(Some(config)) => {
            info!("✓ Experience config loaded");
            config
        }
        Ok(None) => return,
        Err(err) => {
            warn!("{}; using built-in defaults", err);
            loading_progress.used_fallback_config = true;
            ExperienceConfig::default()
        }
    };

    commands.insert_resource(config);
    loading_progress.config_ready = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_asset_keeps_waiting() {
        let configs = Assets::<ExperienceConfig>::default();
        let handle = Handle::<ExperienceConfig>::default();
        assert!(matches!(
            poll_config(&handle, &configs, Some(LoadState::Loading)),
            Ok(None)
        ));
        assert!(matches!(poll_config(&handle, &configs, None), Ok(None)));
    }

    #[test]
    fn invalid_loaded_config_is_an_error() {
        let mut configs = Assets::<ExperienceConfig>::default();
        let mut bad = ExperienceConfig::default();
        bad.fog.end = 1.0;
        let handle = configs.add(bad);
        assert!(matches!(
            poll_config(&handle, &configs, Some(LoadState::Loaded)),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn loaded_config_is_returned() {
        let mut configs = Assets::<ExperienceConfig>::default();
        let handle = configs.add(ExperienceConfig::default());
        let polled = poll_config(&handle, &configs, Some(LoadState::Loaded));
        assert!(matches!(polled, Ok(Some(_))));
    }
}
