use bevy::prelude::*;

use super::presenter::StanzaPresenter;

/// Fired by a presenter when its exit animation has finished.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StanzaCompleted {
    pub stanza: usize,
}

/// Broadcast after every advance with the new current index.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StanzaChanged {
    pub index: usize,
    pub total: usize,
}

/// Single source of truth for which stanza is current.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoemProgress {
    current: usize,
    total: usize,
}

impl PoemProgress {
    pub fn new(total: usize) -> Self {
        Self {
            current: 0,
            total: total.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_current(&self, index: usize) -> bool {
        index == self.current
    }

    /// Index that follows the current one, wrapping after the last stanza.
    pub fn next_index(&self) -> usize {
        (self.current + 1) % self.total
    }

    fn commit(&mut self, index: usize) {
        self.current = index;
    }
}

/// Moves the poem forward once per completion. Listeners hear about the new
/// index before presenters are re-synced.
pub fn advance_poem(
    mut completions: EventReader<StanzaCompleted>,
    mut progress: ResMut<PoemProgress>,
    mut changes: EventWriter<StanzaChanged>,
) {
    for completion in completions.read() {
        let next = progress.next_index();
        changes.write(StanzaChanged {
            index: next,
            total: progress.total(),
        });
        progress.commit(next);
        info!(
            "Stanza {} complete, now showing {}/{}",
            completion.stanza,
            next + 1,
            progress.total()
        );
    }
}

pub fn sync_stanza_activity(progress: Res<PoemProgress>, mut stanzas: Query<&mut StanzaPresenter>) {
    for mut presenter in &mut stanzas {
        let is_current = progress.is_current(presenter.index());
        presenter.sync_activity(is_current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poem::presenter::StanzaPhase;

    #[test]
    fn advancing_total_times_returns_to_start() {
        for total in 1..=8 {
            let mut progress = PoemProgress::new(total);
            for _ in 0..total {
                let next = progress.next_index();
                progress.commit(next);
            }
            assert_eq!(progress.current(), 0, "total = {total}");
        }
    }

    #[test]
    fn zero_stanzas_is_treated_as_one() {
        let progress = PoemProgress::new(0);
        assert_eq!(progress.total(), 1);
        assert_eq!(progress.next_index(), 0);
    }

    fn poem_app(total: usize) -> App {
        let mut app = App::new();
        app.add_event::<StanzaCompleted>()
            .add_event::<StanzaChanged>()
            .insert_resource(PoemProgress::new(total))
            .add_systems(Update, (advance_poem, sync_stanza_activity).chain());
        for index in 0..total {
            app.world_mut().spawn(StanzaPresenter::new(index));
        }
        app
    }

    fn active_indices(app: &mut App) -> Vec<usize> {
        let mut query = app.world_mut().query::<&StanzaPresenter>();
        let mut active: Vec<usize> = query
            .iter(app.world())
            .filter(|p| p.phase() == StanzaPhase::Active)
            .map(StanzaPresenter::index)
            .collect();
        active.sort_unstable();
        active
    }

    #[test]
    fn exactly_one_stanza_is_active_after_mount() {
        let mut app = poem_app(5);
        app.update();
        assert_eq!(active_indices(&mut app), [0]);
    }

    #[test]
    fn completion_advances_and_notifies() {
        let mut app = poem_app(3);
        app.update();

        app.world_mut().send_event(StanzaCompleted { stanza: 0 });
        app.update();

        assert_eq!(app.world().resource::<PoemProgress>().current(), 1);
        assert_eq!(active_indices(&mut app), [1]);

        let events = app.world().resource::<Events<StanzaChanged>>();
        let mut cursor = events.get_cursor();
        let changes: Vec<StanzaChanged> = cursor.read(events).copied().collect();
        assert_eq!(changes, [StanzaChanged { index: 1, total: 3 }]);
    }

    #[test]
    fn last_stanza_wraps_to_first() {
        let mut app = poem_app(2);
        app.update();
        for stanza in [0, 1] {
            app.world_mut().send_event(StanzaCompleted { stanza });
            app.update();
        }
        assert_eq!(app.world().resource::<PoemProgress>().current(), 0);
        assert_eq!(active_indices(&mut app), [0]);
    }
}
