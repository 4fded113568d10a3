use bevy::prelude::*;
use constants::palette::{BUTTON_BORDER, BUTTON_BORDER_HOVER, OVERLAY_TEXT, WORD};

use super::audio::{AmbientTrack, SinkPlayer};
use super::state::*;
use crate::engine::systems::cursor::CursorState;
use crate::poem::controller::StanzaChanged;

/// Ask for the mute flag to flip. Sent by the button and by the host page.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct MuteToggleRequested;

// Mute button: hover brightens the border and label, press requests a toggle
pub fn mute_button_interaction(
    mut q: Query<(Entity, &Interaction, &mut BorderColor), (Changed<Interaction>, With<MuteButton>)>,
    mut labels: Query<&mut TextColor, With<MuteLabel>>,
    mut cursor: ResMut<CursorState>,
    mut requests: EventWriter<MuteToggleRequested>,
) {
    for (entity, interaction, mut border) in &mut q {
        if *interaction == Interaction::Pressed {
            requests.write(MuteToggleRequested);
        }

        let hovered = *interaction != Interaction::None;
        if hovered {
            cursor.acquire(entity);
            *border = BorderColor(BUTTON_BORDER_HOVER);
        } else {
            cursor.release(entity);
            *border = BorderColor(BUTTON_BORDER);
        }
        for mut label in &mut labels {
            label.0 = if hovered { WORD } else { OVERLAY_TEXT };
        }
    }
}

pub fn apply_mute_toggle(
    mut requests: EventReader<MuteToggleRequested>,
    mut mute: ResMut<MuteState>,
    tracks: Query<(&AudioPlayer, Option<&AudioSink>), With<AmbientTrack>>,
    asset_server: Res<AssetServer>,
) {
    for _ in requests.read() {
        let (sink, load_state) = match tracks.single() {
            Ok((player, sink)) => (sink, asset_server.get_load_state(player.0.id())),
            Err(_) => (None, None),
        };
        let mut player = SinkPlayer { sink, load_state };
        let muted = mute.toggle(&mut player);
        info!("Ambient audio {}", if muted { "muted" } else { "unmuted" });
    }
}

pub fn track_progress(mut changes: EventReader<StanzaChanged>, mut display: ResMut<ProgressDisplay>) {
    for change in changes.read() {
        display.current = change.index;
        display.total = change.total;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_follows_announcements() {
        let mut app = App::new();
        app.add_event::<StanzaChanged>()
            .insert_resource(ProgressDisplay { current: 0, total: 5 })
            .add_systems(Update, track_progress);

        app.world_mut().send_event(StanzaChanged { index: 3, total: 5 });
        app.update();

        let display = app.world().resource::<ProgressDisplay>();
        assert_eq!(*display, ProgressDisplay { current: 3, total: 5 });
    }
}
