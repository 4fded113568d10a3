use std::time::Duration;

use bevy::prelude::*;
use constants::timing::EXIT_DELAY_MS;

use super::controller::StanzaCompleted;
use crate::engine::assets::experience_config::FloatSettings;

/// Activation phase of one stanza.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StanzaPhase {
    #[default]
    Inactive,
    Active,
    /// Clicked; words are leaving and completion fires when the exit timer ends.
    Exiting,
}

/// Click on any word of a stanza.
#[derive(Event, Debug, Clone, Copy)]
pub struct StanzaClicked {
    pub stanza: Entity,
}

#[derive(Component, Debug)]
pub struct StanzaPresenter {
    index: usize,
    phase: StanzaPhase,
    exit_timer: Timer,
}

impl StanzaPresenter {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            phase: StanzaPhase::Inactive,
            exit_timer: Timer::new(Duration::from_millis(EXIT_DELAY_MS), TimerMode::Once),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> StanzaPhase {
        self.phase
    }

    /// Words are only shown while active; during the exit window they are
    /// already heading back to their scattered points.
    pub fn shows_words(&self) -> bool {
        self.phase == StanzaPhase::Active
    }

    /// Applies the controller's view of which stanza is current. An exit in
    /// progress always runs to completion first.
    pub fn sync_activity(&mut self, is_current: bool) {
        self.phase = match (self.phase, is_current) {
            (StanzaPhase::Exiting, _) => StanzaPhase::Exiting,
            (_, true) => StanzaPhase::Active,
            (_, false) => StanzaPhase::Inactive,
        };
    }

    /// Returns true if the click started an exit.
    pub fn handle_click(&mut self) -> bool {
        if self.phase != StanzaPhase::Active {
            return false;
        }
        self.phase = StanzaPhase::Exiting;
        self.exit_timer.reset();
        true
    }

    /// Returns true on the frame the exit finishes.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if self.phase != StanzaPhase::Exiting {
            return false;
        }
        self.exit_timer.tick(delta);
        if self.exit_timer.finished() {
            self.phase = StanzaPhase::Inactive;
            return true;
        }
        false
    }
}

/// Gentle bob and sway applied to a whole stanza, whatever its phase.
#[derive(Component, Debug, Clone)]
pub struct AmbientFloat {
    pub offset: f32,
    pub settings: FloatSettings,
}

impl AmbientFloat {
    /// Rotation and vertical offset at `elapsed` seconds.
    pub fn pose(&self, elapsed: f32) -> (Quat, f32) {
        let s = &self.settings;
        let t = (self.offset + elapsed) / 4.0 * s.speed;

        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            t.cos() / 8.0 * s.rotation_intensity,
            t.sin() / 8.0 * s.rotation_intensity,
            t.sin() / 20.0 * s.rotation_intensity,
        );

        // sin(t) / 10 spans [-0.1, 0.1]; remap onto the floating range.
        let raw = t.sin() / 10.0;
        let [low, high] = s.floating_range;
        let y = low + (raw + 0.1) / 0.2 * (high - low);

        (rotation, y * s.float_intensity)
    }
}

pub fn handle_stanza_clicks(
    mut clicks: EventReader<StanzaClicked>,
    mut stanzas: Query<&mut StanzaPresenter>,
) {
    for click in clicks.read() {
        if let Ok(mut presenter) = stanzas.get_mut(click.stanza) {
            if presenter.handle_click() {
                debug!("Stanza {} exiting", presenter.index());
            }
        }
    }
}

pub fn tick_stanza_exits(
    time: Res<Time>,
    mut stanzas: Query<&mut StanzaPresenter>,
    mut completions: EventWriter<StanzaCompleted>,
) {
    for mut presenter in &mut stanzas {
        if presenter.tick(time.delta()) {
            completions.write(StanzaCompleted {
                stanza: presenter.index(),
            });
        }
    }
}

pub fn float_stanzas(time: Res<Time>, mut stanzas: Query<(&AmbientFloat, &mut Transform)>) {
    let elapsed = time.elapsed_secs();
    for (float, mut transform) in &mut stanzas {
        let (rotation, y) = float.pose(elapsed);
        transform.rotation = rotation;
        transform.translation.y = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXIT: Duration = Duration::from_millis(EXIT_DELAY_MS);

    fn active() -> StanzaPresenter {
        let mut p = StanzaPresenter::new(0);
        p.sync_activity(true);
        p
    }

    #[test]
    fn inactive_stanza_ignores_clicks() {
        let mut p = StanzaPresenter::new(0);
        assert!(!p.handle_click());
        assert_eq!(p.phase(), StanzaPhase::Inactive);
    }

    #[test]
    fn click_hides_words_then_completes_once() {
        let mut p = active();
        assert!(p.shows_words());
        assert!(p.handle_click());
        assert!(!p.shows_words());

        assert!(!p.tick(Duration::from_millis(599)));
        assert!(p.tick(Duration::from_millis(1)));
        assert_eq!(p.phase(), StanzaPhase::Inactive);
        assert!(!p.tick(EXIT));
    }

    #[test]
    fn second_click_while_exiting_is_a_no_op() {
        let mut p = active();
        assert!(p.handle_click());
        assert!(!p.tick(Duration::from_millis(400)));
        assert!(!p.handle_click());

        // The original timer is not re-armed by the ignored click.
        assert!(p.tick(Duration::from_millis(200)));
        let completions = (0..10).filter(|_| p.tick(EXIT)).count();
        assert_eq!(completions, 0);
    }

    #[test]
    fn controller_cannot_interrupt_an_exit() {
        let mut p = active();
        p.handle_click();
        p.sync_activity(false);
        assert_eq!(p.phase(), StanzaPhase::Exiting);
        p.sync_activity(true);
        assert_eq!(p.phase(), StanzaPhase::Exiting);
        assert!(p.tick(EXIT));
    }

    #[test]
    fn completed_stanza_reactivates_if_still_current() {
        let mut p = active();
        p.handle_click();
        p.tick(EXIT);
        p.sync_activity(true);
        assert_eq!(p.phase(), StanzaPhase::Active);
        assert!(p.handle_click());
    }

    #[test]
    fn float_stays_inside_range() {
        let float = AmbientFloat {
            offset: 123.0,
            settings: FloatSettings::default(),
        };
        let limit = 0.05 * float.settings.float_intensity + 1e-6;
        for step in 0..2_000 {
            let (_, y) = float.pose(step as f32 * 0.05);
            assert!(y.abs() <= limit, "y = {y}");
        }
    }
}
