use bevy::asset::LoadState;
use bevy::audio::AudioSinkPlayback;
use bevy::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("ambient track is still loading")]
    NotReady,
    #[error("ambient track failed to load: {0}")]
    LoadFailed(String),
}

/// Something that can play or silence the ambient loop.
pub trait AmbientPlayer {
    fn unmute(&mut self) -> Result<(), AudioError>;
    fn mute(&mut self);
}

/// The looping background track entity.
#[derive(Component)]
pub struct AmbientTrack;

/// Bevy audio sink behind [`AmbientPlayer`]. Muting pauses the loop so it
/// resumes where it left off.
pub struct SinkPlayer<'a> {
    pub sink: Option<&'a AudioSink>,
    pub load_state: Option<LoadState>,
}

impl AmbientPlayer for SinkPlayer<'_> {
    fn unmute(&mut self) -> Result<(), AudioError> {
        if let Some(LoadState::Failed(err)) = &self.load_state {
            return Err(AudioError::LoadFailed(err.to_string()));
        }
        let sink = self.sink.ok_or(AudioError::NotReady)?;
        sink.play();
        Ok(())
    }

    fn mute(&mut self) {
        if let Some(sink) = self.sink {
            sink.pause();
        }
    }
}

/// Spawns the track paused; nothing is heard until the listener unmutes.
pub fn spawn_ambient_track(commands: &mut Commands, asset_server: &AssetServer, track: &str) {
    commands.spawn((
        Name::new("AmbientTrack"),
        AmbientTrack,
        AudioPlayer::new(asset_server.load::<AudioSource>(track.to_owned())),
        PlaybackSettings::LOOP.paused(),
    ));
    debug!("Ambient track '{}' queued", track);
}

/// Sinks only exist once the track has loaded. Start a late sink if the
/// listener unmuted before it was ready.
pub fn start_late_track(
    mute: Res<super::state::MuteState>,
    sinks: Query<&AudioSink, (With<AmbientTrack>, Added<AudioSink>)>,
) {
    if mute.muted {
        return;
    }
    for sink in &sinks {
        sink.play();
        info!("Ambient track started after load");
    }
}
