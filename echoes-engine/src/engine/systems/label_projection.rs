use bevy::prelude::*;
use constants::layout::WORD_FONT_SIZE;

use crate::engine::assets::experience_config::{ExperienceConfig, FogSettings};
use crate::engine::camera::drift_camera::MainCamera;
use crate::engine::systems::cursor::CursorState;
use crate::poem::WORD_FRAME_SIZE;
use crate::poem::presenter::StanzaPresenter;
use crate::poem::scatter::{ScatterRng, hover_jitter};
use crate::poem::word::{InteractiveWord, WordFrame};

/// Labels fainter than this are hidden so they stop taking pointer input.
const MIN_VISIBLE_ALPHA: f32 = 0.01;

/// Skip font updates smaller than this to avoid relayout every frame.
const FONT_SIZE_EPSILON: f32 = 0.25;

/// Share of a label left after linear fog at view depth `depth`.
pub fn fog_visibility(depth: f32, fog: &FogSettings) -> f32 {
    if fog.end <= fog.start {
        return 1.0;
    }
    1.0 - ((depth - fog.start) / (fog.end - fog.start)).clamp(0.0, 1.0)
}

/// Screen pixels covered by one world unit at view depth `depth`.
pub fn pixels_per_unit(viewport_height: f32, fov: f32, depth: f32) -> f32 {
    viewport_height / (2.0 * (fov * 0.5).tan() * depth)
}

/// Takes a label off screen. A hidden label can no longer be hovered, so it
/// drops its hover and gives back its pointer hold.
fn hide_label(
    entity: Entity,
    word: &mut InteractiveWord,
    mut visibility: Mut<Visibility>,
    mut interaction: Mut<Interaction>,
    cursor: &mut CursorState,
) {
    visibility.set_if_neq(Visibility::Hidden);
    interaction.set_if_neq(Interaction::None);
    if word.anim.set_hovered(false) {
        cursor.release(entity);
    }
}

/// Places every word label on the screen position of its animated 3D point,
/// sized for its depth and faded by opacity and fog.
pub fn project_word_labels(
    cameras: Query<(&Camera, &GlobalTransform, &Projection), With<MainCamera>>,
    config: Res<ExperienceConfig>,
    stanzas: Query<&Transform, With<StanzaPresenter>>,
    mut words: Query<(
        Entity,
        &mut InteractiveWord,
        &mut TextColor,
        &mut TextFont,
        &mut Interaction,
    )>,
    mut frames: Query<(&mut Node, &mut Visibility, &mut ZIndex), With<WordFrame>>,
    mut rng: ResMut<ScatterRng>,
    mut cursor: ResMut<CursorState>,
) {
    let Ok((camera, camera_transform, projection)) = cameras.single() else {
        return;
    };
    let Some(viewport) = camera.logical_viewport_size() else {
        return;
    };
    let (fov, near) = match projection {
        Projection::Perspective(perspective) => (perspective.fov, perspective.near),
        _ => (config.camera.fov_degrees.to_radians(), 0.1),
    };
    let camera_position = camera_transform.translation();
    let forward = *camera_transform.forward();

    for (entity, mut word, mut colour, mut font, mut interaction) in &mut words {
        let Ok(stanza_transform) = stanzas.get(word.stanza) else {
            continue;
        };
        let Ok((mut node, mut visibility, mut z_index)) = frames.get_mut(word.frame) else {
            continue;
        };

        let jitter = if word.anim.hovered {
            hover_jitter(&mut *rng)
        } else {
            Vec2::ZERO
        };
        let world = stanza_transform.transform_point(word.anim.rendered_position(jitter));
        let depth = (world - camera_position).dot(forward);
        let alpha = word.anim.opacity * fog_visibility(depth, &config.fog);

        let screen = if depth > near && alpha > MIN_VISIBLE_ALPHA {
            camera.world_to_viewport(camera_transform, world).ok()
        } else {
            None
        };

        let Some(screen) = screen else {
            hide_label(entity, &mut word, visibility, interaction, &mut cursor);
            continue;
        };

        visibility.set_if_neq(Visibility::Inherited);
        node.left = Val::Px(screen.x - WORD_FRAME_SIZE.x * 0.5);
        node.top = Val::Px(screen.y - WORD_FRAME_SIZE.y * 0.5);
        z_index.set_if_neq(ZIndex(-(depth * 100.0) as i32));

        let size = WORD_FONT_SIZE * word.anim.scale * pixels_per_unit(viewport.y, fov, depth);
        if (font.font_size - size).abs() > FONT_SIZE_EPSILON {
            font.font_size = size;
        }
        colour.0 = word.anim.colour().with_alpha(alpha);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poem::scatter::ScatterRng;
    use crate::poem::word::AnimatedWord;

    fn hide_every_label(
        mut words: Query<(Entity, &mut InteractiveWord, &mut Visibility, &mut Interaction)>,
        mut cursor: ResMut<CursorState>,
    ) {
        for (entity, mut word, visibility, interaction) in &mut words {
            hide_label(entity, &mut word, visibility, interaction, &mut cursor);
        }
    }

    #[test]
    fn hiding_a_hovered_label_releases_the_pointer() {
        let mut app = App::new();
        app.init_resource::<CursorState>()
            .add_systems(Update, hide_every_label);

        let mut rng = ScatterRng::seeded(4);
        let mut hovered = AnimatedWord::new(Vec3::ZERO, 0, &mut rng);
        hovered.set_hovered(true);
        let resting = AnimatedWord::new(Vec3::X, 0, &mut rng);

        let stanza = app.world_mut().spawn_empty().id();
        let held = app
            .world_mut()
            .spawn((
                Visibility::Inherited,
                Interaction::Hovered,
                InteractiveWord {
                    stanza,
                    frame: Entity::PLACEHOLDER,
                    anim: hovered,
                },
            ))
            .id();
        let idle = app
            .world_mut()
            .spawn((
                Visibility::Inherited,
                Interaction::None,
                InteractiveWord {
                    stanza,
                    frame: Entity::PLACEHOLDER,
                    anim: resting,
                },
            ))
            .id();

        let other_holder = app.world_mut().spawn_empty().id();
        {
            let mut cursor = app.world_mut().resource_mut::<CursorState>();
            cursor.acquire(held);
            cursor.acquire(other_holder);
        }

        app.update();

        let cursor = app.world().resource::<CursorState>();
        assert_eq!(cursor.holder_count(), 1);
        assert!(cursor.wants_pointer());
        for entity in [held, idle] {
            assert_eq!(app.world().get::<Visibility>(entity), Some(&Visibility::Hidden));
            assert_eq!(app.world().get::<Interaction>(entity), Some(&Interaction::None));
            assert!(!app.world().get::<InteractiveWord>(entity).unwrap().anim.hovered);
        }
    }

    #[test]
    fn fog_is_linear_between_start_and_end() {
        let fog = FogSettings::default();
        assert_eq!(fog_visibility(fog.start - 1.0, &fog), 1.0);
        assert_eq!(fog_visibility(fog.end + 1.0, &fog), 0.0);
        let mid = (fog.start + fog.end) * 0.5;
        assert!((fog_visibility(mid, &fog) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn degenerate_fog_leaves_labels_visible() {
        let fog = FogSettings {
            start: 10.0,
            end: 10.0,
            ..FogSettings::default()
        };
        assert_eq!(fog_visibility(50.0, &fog), 1.0);
    }

    #[test]
    fn farther_labels_are_smaller() {
        let fov = 60f32.to_radians();
        let near = pixels_per_unit(1080.0, fov, 4.0);
        let far = pixels_per_unit(1080.0, fov, 8.0);
        assert!((near - 2.0 * far).abs() < 1e-3);
    }
}
