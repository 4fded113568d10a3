use std::time::Duration;

use bevy::prelude::*;
use constants::palette::{MARKER_ALPHA, MARKER_CURRENT_ALPHA};
use constants::timing::{INSTRUCTIONS_FADE_SECS, INSTRUCTIONS_VISIBLE_MS};

use super::audio::AmbientPlayer;

pub const MARKER_CURRENT_SCALE: f32 = 1.2;

// Resources
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MuteState {
    pub muted: bool,
}

impl Default for MuteState {
    fn default() -> Self {
        Self { muted: true }
    }
}

impl MuteState {
    /// Flips the flag and drives the player to match. A rejected playback is
    /// logged and otherwise ignored. Returns the new muted flag.
    pub fn toggle(&mut self, player: &mut dyn AmbientPlayer) -> bool {
        if self.muted {
            if let Err(err) = player.unmute() {
                warn!("Ambient track did not start: {}", err);
            }
        } else {
            player.mute();
        }
        self.muted = !self.muted;
        self.muted
    }

    pub fn accessible_label(&self) -> &'static str {
        if self.muted { "Unmute audio" } else { "Mute audio" }
    }

    pub fn button_text(&self) -> &'static str {
        if self.muted { "MUTED" } else { "SOUND" }
    }
}

/// One-shot instructions line. Shown from mount, gone for good once the
/// timer runs out.
#[derive(Resource, Debug)]
pub struct Instructions {
    timer: Timer,
}

impl Default for Instructions {
    fn default() -> Self {
        Self {
            timer: Timer::new(
                Duration::from_millis(INSTRUCTIONS_VISIBLE_MS),
                TimerMode::Once,
            ),
        }
    }
}

impl Instructions {
    pub fn tick(&mut self, delta: Duration) {
        self.timer.tick(delta);
    }

    pub fn is_visible(&self) -> bool {
        !self.timer.finished()
    }

    /// Fades in after mount and holds full strength until the deadline.
    pub fn opacity(&self) -> f32 {
        if !self.is_visible() {
            return 0.0;
        }
        (self.timer.elapsed_secs() / INSTRUCTIONS_FADE_SECS).clamp(0.0, 1.0)
    }
}

/// Progress as last announced by the poem.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressDisplay {
    pub current: usize,
    pub total: usize,
}

/// Seconds since the overlay was mounted; drives the entrance animations.
#[derive(Resource, Debug, Default)]
pub struct OverlayClock {
    pub elapsed: f32,
}

// Components
#[derive(Component)]
pub struct OverlayRoot;
#[derive(Component)]
pub struct MuteButton;
#[derive(Component)]
pub struct MuteLabel;
#[derive(Component)]
pub struct InstructionsText;
#[derive(Component)]
pub struct Vignette;

/// Pill in the progress row, with its smoothed look.
#[derive(Component, Debug)]
pub struct ProgressMarker {
    pub index: usize,
    pub alpha: f32,
    pub scale: f32,
}

/// Entrance fade and slide. Removed once finished so hover styling can
/// take over the colours.
#[derive(Component, Debug, Clone)]
pub struct Reveal {
    pub delay: f32,
    /// Vertical start offset in pixels, positive is down
    pub slide_px: f32,
    pub text: Option<Color>,
    pub background: Option<Color>,
    pub border: Option<Color>,
}

/// Eased entrance progress in `[0, 1]`.
pub fn reveal_progress(elapsed: f32, delay: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return if elapsed >= delay { 1.0 } else { 0.0 };
    }
    let t = ((elapsed - delay) / duration).clamp(0.0, 1.0);
    // ease-out cubic
    1.0 - (1.0 - t).powi(3)
}

/// Alpha and scale a marker settles at.
pub fn marker_target(index: usize, current: usize) -> (f32, f32) {
    if index == current {
        (MARKER_CURRENT_ALPHA, MARKER_CURRENT_SCALE)
    } else {
        (MARKER_ALPHA, 1.0)
    }
}
