use std::collections::HashSet;

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, SystemCursorIcon};
use bevy::winit::cursor::CursorIcon;

use crate::poem::word::InteractiveWord;

/// Shared pointer-cursor state. Every hovered word or button holds the pointer until
/// it releases it; the cursor goes back to default when nobody holds it.
/// Acquire and release are idempotent per entity.
#[derive(Resource, Default, Debug)]
pub struct CursorState {
    holders: HashSet<Entity>,
}

impl CursorState {
    pub fn acquire(&mut self, holder: Entity) -> bool {
        self.holders.insert(holder)
    }

    pub fn release(&mut self, holder: Entity) -> bool {
        self.holders.remove(&holder)
    }

    pub fn holder_count(&self) -> usize {
        self.holders.len()
    }

    pub fn wants_pointer(&self) -> bool {
        !self.holders.is_empty()
    }
}

/// Despawned words give their hold back.
pub fn release_despawned_holders(
    mut removed: RemovedComponents<InteractiveWord>,
    mut cursor: ResMut<CursorState>,
) {
    for entity in removed.read() {
        cursor.release(entity);
    }
}

pub fn apply_cursor_icon(
    mut commands: Commands,
    cursor: Res<CursorState>,
    window: Query<Entity, With<PrimaryWindow>>,
    mut applied: Local<Option<bool>>,
) {
    let wants_pointer = cursor.wants_pointer();
    if *applied == Some(wants_pointer) {
        return;
    }
    let Ok(window) = window.single() else {
        return;
    };

    let icon = if wants_pointer {
        SystemCursorIcon::Pointer
    } else {
        SystemCursorIcon::Default
    };
    commands.entity(window).insert(CursorIcon::System(icon));
    *applied = Some(wants_pointer);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_hovers_keep_pointer_until_all_leave() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let mut cursor = CursorState::default();

        cursor.acquire(a);
        cursor.acquire(b);
        cursor.release(a);
        assert!(cursor.wants_pointer());

        cursor.release(b);
        assert!(!cursor.wants_pointer());
    }

    #[test]
    fn acquire_and_release_are_idempotent() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let mut cursor = CursorState::default();

        assert!(cursor.acquire(a));
        assert!(!cursor.acquire(a));
        assert_eq!(cursor.holder_count(), 1);

        assert!(cursor.release(a));
        assert!(!cursor.release(a));
        assert_eq!(cursor.holder_count(), 0);
    }
}
