use std::time::Duration;

use bevy::prelude::*;
use constants::motion::{
    ACTIVE_SCALE, HOVER_SCALE, INACTIVE_SCALE, OPACITY_SMOOTHING, POSITION_SMOOTHING,
    SCALE_SMOOTHING,
};
use constants::palette::{WORD, WORD_HOVER};

use super::presenter::{StanzaClicked, StanzaPresenter};
use super::scatter::{ScatterRng, ScatterSource, initial_point, scatter_point};
use super::smoothing::Smoothing;
use crate::engine::systems::cursor::CursorState;

const OPACITY: Smoothing = Smoothing::per_reference_frame(OPACITY_SMOOTHING);
const SCALE: Smoothing = Smoothing::per_reference_frame(SCALE_SMOOTHING);
const POSITION: Smoothing = Smoothing::per_reference_frame(POSITION_SMOOTHING);

/// Per-word animation state, advanced once per frame.
#[derive(Debug, Clone)]
pub struct AnimatedWord {
    home: Vec3,
    reveal_delay: Duration,
    target: Vec3,
    reveal: Option<Timer>,
    active: Option<bool>,
    pub opacity: f32,
    pub scale: f32,
    pub position: Vec3,
    pub hovered: bool,
}

impl AnimatedWord {
    pub fn new(home: Vec3, reveal_delay_ms: u32, source: &mut dyn ScatterSource) -> Self {
        let start = initial_point(home, source);
        Self {
            home,
            reveal_delay: Duration::from_millis(u64::from(reveal_delay_ms)),
            target: start,
            reveal: None,
            active: None,
            opacity: 0.0,
            scale: INACTIVE_SCALE,
            position: start,
            hovered: false,
        }
    }

    pub fn home(&self) -> Vec3 {
        self.home
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn is_active(&self) -> bool {
        self.active.unwrap_or(false)
    }

    /// Applies the activity flag coming from the owning stanza.
    ///
    /// Going dormant draws a fresh scatter point and cancels a pending
    /// reveal. Waking up arms the reveal timer; the target stays at the
    /// scatter point until it fires. A word that is active from its very
    /// first frame skips the stagger and heads home straight away.
    pub fn set_active(&mut self, active: bool, source: &mut dyn ScatterSource) {
        let first = self.active.is_none();
        if self.active == Some(active) {
            return;
        }
        self.active = Some(active);

        if active {
            if first || self.reveal_delay.is_zero() {
                self.reveal = None;
                self.target = self.home;
            } else {
                self.reveal = Some(Timer::new(self.reveal_delay, TimerMode::Once));
            }
        } else {
            self.reveal = None;
            self.target = scatter_point(self.home, source);
        }
    }

    /// Returns true when the hover flag actually changed.
    pub fn set_hovered(&mut self, hovered: bool) -> bool {
        let changed = self.hovered != hovered;
        self.hovered = hovered;
        changed
    }

    pub fn advance(&mut self, delta: Duration) {
        if let Some(reveal) = self.reveal.as_mut() {
            reveal.tick(delta);
            if reveal.finished() {
                self.reveal = None;
                self.target = self.home;
            }
        }

        let dt = delta.as_secs_f32();
        let active = self.is_active();

        let target_opacity = if active { 1.0 } else { 0.0 };
        self.opacity = OPACITY.step(self.opacity, target_opacity, dt);

        let target_scale = match (active, self.hovered) {
            (true, true) => HOVER_SCALE,
            (true, false) => ACTIVE_SCALE,
            (false, _) => INACTIVE_SCALE,
        };
        self.scale = SCALE.step(self.scale, target_scale, dt);

        self.position = POSITION.step_vec3(self.position, self.target, dt);
    }

    /// Position to draw this frame. The glitch offset only applies while
    /// hovered and never feeds back into the smoothed state.
    pub fn rendered_position(&self, jitter: Vec2) -> Vec3 {
        if self.hovered {
            self.position + jitter.extend(0.0)
        } else {
            self.position
        }
    }

    pub fn colour(&self) -> Color {
        if self.hovered { WORD_HOVER } else { WORD }
    }
}

/// A clickable word label. Lives on the text node; `frame` is the
/// positioned box around it.
#[derive(Component)]
pub struct InteractiveWord {
    pub stanza: Entity,
    pub frame: Entity,
    pub anim: AnimatedWord,
}

/// Box that centres a word label on its projected screen position.
#[derive(Component)]
pub struct WordFrame;

pub fn animate_words(
    time: Res<Time>,
    stanzas: Query<&StanzaPresenter>,
    mut words: Query<&mut InteractiveWord>,
    mut rng: ResMut<ScatterRng>,
) {
    for mut word in &mut words {
        let show = stanzas
            .get(word.stanza)
            .map(StanzaPresenter::shows_words)
            .unwrap_or(false);
        word.anim.set_active(show, &mut *rng);
        word.anim.advance(time.delta());
    }
}

/// Any pressed word counts as a click on its whole stanza.
pub fn word_pointer_interaction(
    mut words: Query<(Entity, &Interaction, &mut InteractiveWord), Changed<Interaction>>,
    mut cursor: ResMut<CursorState>,
    mut clicks: EventWriter<StanzaClicked>,
) {
    for (entity, interaction, mut word) in &mut words {
        match *interaction {
            Interaction::Pressed => {
                if word.anim.set_hovered(true) {
                    cursor.acquire(entity);
                }
                clicks.write(StanzaClicked {
                    stanza: word.stanza,
                });
            }
            Interaction::Hovered => {
                if word.anim.set_hovered(true) {
                    cursor.acquire(entity);
                }
            }
            Interaction::None => {
                if word.anim.set_hovered(false) {
                    cursor.release(entity);
                }
            }
        }
    }
}
