use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub config_ready: bool,
    pub used_fallback_config: bool,
}

impl LoadingProgress {
    pub fn is_complete(&self) -> bool {
        self.config_ready
    }
}
