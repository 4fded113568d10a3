//! The poem itself: stanza data, word layout and the click-to-advance loop.
//!
//! ## Flow
//!
//! ```text
//! word Interaction::Pressed ─> StanzaClicked ─> StanzaPresenter (Active → Exiting)
//!                                                      │ 600 ms
//!                                                      v
//!            StanzaChanged <─ PoemProgress <─ StanzaCompleted
//!                  │
//!                  ├─> overlay progress markers
//!                  └─> host page notification
//! ```
//!
//! Every stanza is spawned once when the app starts running. Activity is
//! re-derived each frame from `PoemProgress`, so exactly one presenter is
//! active outside of an exit window.

/// Static poem text.
pub mod stanza_data;

/// Pure word layout for a stanza.
pub mod layout;

/// Time-scaled exponential smoothing.
pub mod smoothing;

/// Random scatter points behind a seedable source.
pub mod scatter;

/// Per-word animation state and pointer handling.
pub mod word;

/// Per-stanza activation state machine and ambient float.
pub mod presenter;

/// Current-stanza bookkeeping and advancement.
pub mod controller;

use bevy::prelude::*;
use constants::layout::WORD_FONT_SIZE;

use crate::engine::assets::experience_config::ExperienceConfig;
use crate::engine::core::app_state::AppState;
use controller::{PoemProgress, StanzaChanged, StanzaCompleted, advance_poem, sync_stanza_activity};
use layout::layout_stanza;
use presenter::{
    AmbientFloat, StanzaClicked, StanzaPresenter, float_stanzas, handle_stanza_clicks,
    tick_stanza_exits,
};
use scatter::{ScatterRng, ScatterSource};
use stanza_data::POEM;
use word::{AnimatedWord, InteractiveWord, WordFrame, animate_words, word_pointer_interaction};

/// Fixed box each word label is centred in. Large enough for the longest word
/// at the closest depth the camera reaches.
pub const WORD_FRAME_SIZE: Vec2 = Vec2::new(480.0, 160.0);

/// Full-screen UI layer holding every word label.
#[derive(Component)]
pub struct WordLayer;

/// Systems that advance the poem, in the order they must run each frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PoemSystems;

pub struct PoemPlugin;

impl Plugin for PoemPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<StanzaClicked>()
            .add_event::<StanzaCompleted>()
            .add_event::<StanzaChanged>()
            .insert_resource(PoemProgress::new(POEM.len()))
            .init_resource::<ScatterRng>()
            .add_systems(OnEnter(AppState::Running), spawn_poem)
            .add_systems(
                Update,
                (
                    word_pointer_interaction,
                    handle_stanza_clicks,
                    tick_stanza_exits,
                    advance_poem,
                    sync_stanza_activity,
                    float_stanzas,
                    animate_words,
                )
                    .chain()
                    .in_set(PoemSystems)
                    .run_if(in_state(AppState::Running)),
            );
    }
}

fn spawn_poem(
    mut commands: Commands,
    config: Res<ExperienceConfig>,
    asset_server: Res<AssetServer>,
    mut rng: ResMut<ScatterRng>,
) {
    let anchor = Vec3::from_array(config.stanza_anchor);
    let font = config
        .font_path
        .as_deref()
        .map(|path| asset_server.load(path))
        .unwrap_or_default();

    let layer = commands
        .spawn((
            WordLayer,
            Name::new("WordLayer"),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                ..default()
            },
            GlobalZIndex(0),
        ))
        .id();

    let mut word_count = 0;
    for (index, stanza) in POEM.iter().enumerate() {
        let stanza_entity = commands
            .spawn((
                Name::new(format!("Stanza {}", stanza.id)),
                StanzaPresenter::new(index),
                AmbientFloat {
                    offset: rng.next_unit() * 10_000.0,
                    settings: config.float.clone(),
                },
                Transform::default(),
            ))
            .id();

        for placement in layout_stanza(stanza.lines, anchor) {
            let anim = AnimatedWord::new(placement.position, placement.reveal_delay_ms, &mut *rng);

            let frame = commands
                .spawn((
                    WordFrame,
                    Name::new(format!("Frame '{}'", placement.word)),
                    Node {
                        position_type: PositionType::Absolute,
                        width: Val::Px(WORD_FRAME_SIZE.x),
                        height: Val::Px(WORD_FRAME_SIZE.y),
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        ..default()
                    },
                    Visibility::Hidden,
                    ZIndex::default(),
                ))
                .id();
            commands.entity(layer).add_child(frame);

            commands.entity(frame).with_children(|parent| {
                parent.spawn((
                    Name::new(placement.word.clone()),
                    Text::new(placement.word.clone()),
                    TextFont {
                        font: font.clone(),
                        font_size: WORD_FONT_SIZE,
                        ..default()
                    },
                    TextColor(anim.colour().with_alpha(0.0)),
                    Interaction::default(),
                    InteractiveWord {
                        stanza: stanza_entity,
                        frame,
                        anim,
                    },
                ));
            });
            word_count += 1;
        }
    }

    info!("Spawned {} stanzas ({} words)", POEM.len(), word_count);
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bevy::state::app::StatesPlugin;
    use bevy::time::TimeUpdateStrategy;

    use super::*;
    use crate::engine::systems::cursor::CursorState;
    use super::presenter::StanzaPhase;

    const STEP: Duration = Duration::from_millis(50);

    #[derive(Resource, Default)]
    struct Recorded {
        completed: Vec<usize>,
        changed: Vec<StanzaChanged>,
    }

    fn record_poem_events(
        mut completed: EventReader<StanzaCompleted>,
        mut changed: EventReader<StanzaChanged>,
        mut recorded: ResMut<Recorded>,
    ) {
        recorded.completed.extend(completed.read().map(|c| c.stanza));
        recorded.changed.extend(changed.read().copied());
    }

    fn running_poem() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default(), StatesPlugin))
            .insert_resource(TimeUpdateStrategy::ManualDuration(STEP))
            .insert_state(AppState::Running)
            .init_resource::<ExperienceConfig>()
            .init_resource::<CursorState>()
            .init_resource::<Recorded>()
            .add_plugins(PoemPlugin)
            .insert_resource(ScatterRng::seeded(21))
            .add_systems(Update, record_poem_events.after(PoemSystems));
        app.finish();
        app.cleanup();
        app.update();
        app
    }

    fn phase_of(app: &mut App, index: usize) -> StanzaPhase {
        let mut query = app.world_mut().query::<&StanzaPresenter>();
        query
            .iter(app.world())
            .find(|p| p.index() == index)
            .map(StanzaPresenter::phase)
            .unwrap()
    }

    fn words_of(app: &mut App, index: usize) -> Vec<Entity> {
        let mut stanzas = app.world_mut().query::<(Entity, &StanzaPresenter)>();
        let stanza = stanzas
            .iter(app.world())
            .find(|(_, p)| p.index() == index)
            .map(|(entity, _)| entity)
            .unwrap();
        let mut words = app.world_mut().query::<(Entity, &InteractiveWord)>();
        words
            .iter(app.world())
            .filter(|(_, word)| word.stanza == stanza)
            .map(|(entity, _)| entity)
            .collect()
    }

    fn press(app: &mut App, entity: Entity) {
        *app.world_mut().get_mut::<Interaction>(entity).unwrap() = Interaction::Pressed;
    }

    fn step(app: &mut App, frames: usize) {
        for _ in 0..frames {
            app.update();
        }
    }

    #[test]
    fn first_stanza_is_active_once_running() {
        let mut app = running_poem();
        assert_eq!(phase_of(&mut app, 0), StanzaPhase::Active);
        for index in 1..POEM.len() {
            assert_eq!(phase_of(&mut app, index), StanzaPhase::Inactive);
        }
        assert!(!words_of(&mut app, 0).is_empty());
    }

    #[test]
    fn clicking_a_word_moves_the_poem_on_after_the_exit() {
        let mut app = running_poem();
        let words = words_of(&mut app, 0);
        assert!(words.len() >= 2);

        press(&mut app, words[0]);
        step(&mut app, 1);
        assert_eq!(phase_of(&mut app, 0), StanzaPhase::Exiting);

        // A second click halfway through the exit changes nothing.
        step(&mut app, 4);
        press(&mut app, words[1]);
        step(&mut app, 5);
        assert_eq!(phase_of(&mut app, 0), StanzaPhase::Exiting);
        assert!(app.world().resource::<Recorded>().completed.is_empty());
        assert_eq!(app.world().resource::<PoemProgress>().current(), 0);

        step(&mut app, 3);
        let recorded = app.world().resource::<Recorded>();
        assert_eq!(recorded.completed, [0]);
        assert_eq!(
            recorded.changed,
            [StanzaChanged {
                index: 1,
                total: POEM.len()
            }]
        );
        assert_eq!(app.world().resource::<PoemProgress>().current(), 1);
        assert_eq!(phase_of(&mut app, 0), StanzaPhase::Inactive);
        assert_eq!(phase_of(&mut app, 1), StanzaPhase::Active);

        let next = words_of(&mut app, 1);
        assert!(
            next.iter()
                .all(|&entity| app.world().get::<InteractiveWord>(entity).unwrap().anim.is_active())
        );

        step(&mut app, 20);
        assert_eq!(app.world().resource::<Recorded>().completed, [0]);
        assert_eq!(app.world().resource::<PoemProgress>().current(), 1);
    }
}
