use bevy::asset::RenderAssetUsages;
use bevy::color::ColorToPacked;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy::ui::FocusPolicy;
use constants::motion::MARKER_SMOOTHING;
use constants::palette::{
    BUTTON_BACKGROUND, BUTTON_BORDER, MARKER_ALPHA, OVERLAY_TEXT, OVERLAY_TEXT_DIM,
    OVERLAY_TEXT_FAINT, VOID,
};
use constants::timing::{
    FOOTER_REVEAL_DELAY_SECS, HEADER_REVEAL_DELAY_SECS, OVERLAY_REVEAL_SECS,
    PROGRESS_REVEAL_DELAY_SECS,
};

use super::state::*;
use crate::poem::smoothing::Smoothing;

const EDGE_PADDING: f32 = 32.0;
const BUTTON_SIZE: f32 = 40.0;
const MARKER_SIZE: Vec2 = Vec2::new(24.0, 4.0);
const MARKER_GAP: f32 = 8.0;
const SLIDE_PX: f32 = 20.0;
const VIGNETTE_RESOLUTION: u32 = 128;

const MARKER: Smoothing = Smoothing::per_reference_frame(MARKER_SMOOTHING);

/// Darkening at normalised distance `r` from the centre, where 1 is the
/// corner. Clear in the middle, 0.4 at 70 %, 0.8 at the corners.
pub fn vignette_alpha(r: f32) -> f32 {
    let r = r.clamp(0.0, 1.0);
    if r <= 0.7 {
        r / 0.7 * 0.4
    } else {
        0.4 + (r - 0.7) / 0.3 * 0.4
    }
}

fn vignette_image() -> Image {
    let size = VIGNETTE_RESOLUTION;
    let tint = VOID.to_srgba().to_u8_array();
    let mut data = Vec::with_capacity((size * size * 4) as usize);

    for y in 0..size {
        for x in 0..size {
            let dx = (x as f32 + 0.5) / size as f32 * 2.0 - 1.0;
            let dy = (y as f32 + 0.5) / size as f32 * 2.0 - 1.0;
            let r = (dx * dx + dy * dy).sqrt() / std::f32::consts::SQRT_2;
            let alpha = (vignette_alpha(r) * 255.0).round() as u8;
            data.extend_from_slice(&[tint[0], tint[1], tint[2], alpha]);
        }
    }

    Image::new(
        Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    )
}

fn hidden(color: Color) -> Color {
    color.with_alpha(0.0)
}

// Spawns the full-screen overlay: vignette, header, instructions, progress and footer
pub fn spawn_overlay_ui(commands: &mut Commands, images: &mut Assets<Image>, display: ProgressDisplay) {
    let vignette = images.add(vignette_image());
    let mute = MuteState::default();

    commands
        .spawn((
            OverlayRoot,
            Name::new("Overlay"),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                ..default()
            },
            FocusPolicy::Pass,
            GlobalZIndex(10),
        ))
        .with_children(|root| {
            root.spawn((
                Vignette,
                Name::new("Vignette"),
                ImageNode::new(vignette),
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    position_type: PositionType::Absolute,
                    ..default()
                },
                FocusPolicy::Pass,
            ));

            root.spawn((
                Name::new("Header"),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(0.0),
                    left: Val::Px(0.0),
                    right: Val::Px(0.0),
                    padding: UiRect::all(Val::Px(EDGE_PADDING)),
                    display: Display::Flex,
                    align_items: AlignItems::Center,
                    justify_content: JustifyContent::SpaceBetween,
                    ..default()
                },
                FocusPolicy::Pass,
            ))
            .with_children(|header| {
                header.spawn((
                    Name::new("Wordmark"),
                    Text::new("ECHOES"),
                    TextFont { font_size: 14.0, ..default() },
                    TextColor(hidden(OVERLAY_TEXT)),
                    Node::default(),
                    Reveal {
                        delay: HEADER_REVEAL_DELAY_SECS,
                        slide_px: -SLIDE_PX,
                        text: Some(OVERLAY_TEXT),
                        background: None,
                        border: None,
                    },
                ));

                header
                    .spawn((
                        MuteButton,
                        Name::new(mute.accessible_label()),
                        Button,
                        BackgroundColor(hidden(BUTTON_BACKGROUND)),
                        BorderColor(hidden(BUTTON_BORDER)),
                        BorderRadius::MAX,
                        Node {
                            width: Val::Px(BUTTON_SIZE),
                            height: Val::Px(BUTTON_SIZE),
                            display: Display::Flex,
                            align_items: AlignItems::Center,
                            justify_content: JustifyContent::Center,
                            border: UiRect::all(Val::Px(1.0)),
                            ..default()
                        },
                        Reveal {
                            delay: HEADER_REVEAL_DELAY_SECS,
                            slide_px: -SLIDE_PX,
                            text: None,
                            background: Some(BUTTON_BACKGROUND),
                            border: Some(BUTTON_BORDER),
                        },
                    ))
                    .with_children(|button| {
                        button.spawn((
                            MuteLabel,
                            Text::new(mute.button_text()),
                            TextFont { font_size: 8.0, ..default() },
                            TextColor(hidden(OVERLAY_TEXT)),
                            Reveal {
                                delay: HEADER_REVEAL_DELAY_SECS,
                                slide_px: 0.0,
                                text: Some(OVERLAY_TEXT),
                                background: None,
                                border: None,
                            },
                        ));
                    });
            });

            root.spawn((
                Name::new("InstructionsRow"),
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    position_type: PositionType::Absolute,
                    align_items: AlignItems::Center,
                    justify_content: JustifyContent::Center,
                    ..default()
                },
                FocusPolicy::Pass,
            ))
            .with_children(|row| {
                row.spawn((
                    InstructionsText,
                    Name::new("Instructions"),
                    Text::new("CLICK THE WORDS TO CONTINUE"),
                    TextFont { font_size: 14.0, ..default() },
                    TextColor(hidden(OVERLAY_TEXT_DIM)),
                    FocusPolicy::Pass,
                ));
            });

            root.spawn((
                Name::new("Progress"),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(EDGE_PADDING),
                    left: Val::Px(0.0),
                    right: Val::Px(0.0),
                    display: Display::Flex,
                    align_items: AlignItems::Center,
                    justify_content: JustifyContent::Center,
                    column_gap: Val::Px(MARKER_GAP),
                    ..default()
                },
                FocusPolicy::Pass,
            ))
            .with_children(|row| {
                for index in 0..display.total {
                    let (alpha, scale) = marker_target(index, display.current);
                    row.spawn((
                        ProgressMarker { index, alpha, scale },
                        Name::new(format!("Marker {}", index + 1)),
                        Node {
                            width: Val::Px(MARKER_SIZE.x * scale),
                            height: Val::Px(MARKER_SIZE.y * scale),
                            ..default()
                        },
                        BorderRadius::MAX,
                        BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.0)),
                    ));
                }
            });

            root.spawn((
                Name::new("Footer"),
                Text::new("SCROLL TO EXPLORE"),
                TextFont { font_size: 12.0, ..default() },
                TextColor(hidden(OVERLAY_TEXT_FAINT)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(EDGE_PADDING),
                    right: Val::Px(EDGE_PADDING),
                    ..default()
                },
                Reveal {
                    delay: FOOTER_REVEAL_DELAY_SECS,
                    slide_px: SLIDE_PX,
                    text: Some(OVERLAY_TEXT_FAINT),
                    background: None,
                    border: None,
                },
            ));
        });
}

pub fn tick_overlay_clock(time: Res<Time>, mut clock: ResMut<OverlayClock>, mut instructions: ResMut<Instructions>) {
    clock.elapsed += time.delta_secs();
    instructions.tick(time.delta());
}

pub fn reveal_overlay(
    mut commands: Commands,
    clock: Res<OverlayClock>,
    mut q: Query<(
        Entity,
        &Reveal,
        &mut Node,
        Option<&mut TextColor>,
        Option<&mut BackgroundColor>,
        Option<&mut BorderColor>,
    )>,
) {
    for (entity, reveal, mut node, text, background, border) in &mut q {
        let p = reveal_progress(clock.elapsed, reveal.delay, OVERLAY_REVEAL_SECS);
        let offset = reveal.slide_px * (1.0 - p);
        node.margin.top = Val::Px(offset);
        node.margin.bottom = Val::Px(-offset);

        let fade = |c: Color| c.with_alpha(c.alpha() * p);
        if let (Some(mut text), Some(target)) = (text, reveal.text) {
            text.0 = fade(target);
        }
        if let (Some(mut background), Some(target)) = (background, reveal.background) {
            background.0 = fade(target);
        }
        if let (Some(mut border), Some(target)) = (border, reveal.border) {
            border.0 = fade(target);
        }

        if p >= 1.0 {
            commands.entity(entity).remove::<Reveal>();
        }
    }
}

pub fn update_instructions(
    instructions: Res<Instructions>,
    mut q: Query<(&mut TextColor, &mut Visibility), With<InstructionsText>>,
) {
    for (mut colour, mut visibility) in &mut q {
        if instructions.is_visible() {
            colour.0 = OVERLAY_TEXT_DIM.with_alpha(OVERLAY_TEXT_DIM.alpha() * instructions.opacity());
            visibility.set_if_neq(Visibility::Inherited);
        } else {
            visibility.set_if_neq(Visibility::Hidden);
        }
    }
}

pub fn animate_progress_markers(
    time: Res<Time>,
    clock: Res<OverlayClock>,
    display: Res<ProgressDisplay>,
    mut q: Query<(&mut ProgressMarker, &mut Node, &mut BackgroundColor)>,
) {
    let dt = time.delta_secs();
    let row = reveal_progress(clock.elapsed, PROGRESS_REVEAL_DELAY_SECS, OVERLAY_REVEAL_SECS);

    for (mut marker, mut node, mut background) in &mut q {
        let (alpha, scale) = marker_target(marker.index, display.current);
        marker.alpha = MARKER.step(marker.alpha, alpha, dt);
        marker.scale = MARKER.step(marker.scale, scale, dt);

        node.width = Val::Px(MARKER_SIZE.x * marker.scale);
        node.height = Val::Px(MARKER_SIZE.y * marker.scale);
        background.0 = Color::srgba(1.0, 1.0, 1.0, marker.alpha * row);
    }
}

pub fn refresh_mute_button(
    mute: Res<MuteState>,
    mut buttons: Query<&mut Name, With<MuteButton>>,
    mut labels: Query<&mut Text, With<MuteLabel>>,
) {
    for mut name in &mut buttons {
        name.set(mute.accessible_label());
    }
    for mut text in &mut labels {
        text.0 = mute.button_text().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vignette_clear_centre_dark_corners() {
        assert_eq!(vignette_alpha(0.0), 0.0);
        assert!((vignette_alpha(0.7) - 0.4).abs() < 1e-6);
        assert!((vignette_alpha(1.0) - 0.8).abs() < 1e-6);
        assert!((vignette_alpha(2.0) - 0.8).abs() < 1e-6);
    }

    #[test]
    fn vignette_darkens_monotonically() {
        let mut last = 0.0;
        for step in 0..=100 {
            let a = vignette_alpha(step as f32 / 100.0);
            assert!(a >= last);
            last = a;
        }
    }

    #[test]
    fn vignette_image_is_tinted_void() {
        let image = vignette_image();
        let data = image.data.as_ref().unwrap();
        assert_eq!(data.len(), (VIGNETTE_RESOLUTION * VIGNETTE_RESOLUTION * 4) as usize);
        let void = VOID.to_srgba().to_u8_array();
        assert_eq!(&data[0..3], &void[0..3]);
        assert!(data[3] > 190);
    }

    #[test]
    fn markers_follow_progress() {
        let mut app = App::new();
        app.insert_resource(Time::<()>::default())
            .insert_resource(OverlayClock { elapsed: 10.0 })
            .insert_resource(ProgressDisplay { current: 1, total: 2 })
            .add_systems(Update, animate_progress_markers);
        let first = app
            .world_mut()
            .spawn((
                ProgressMarker { index: 0, alpha: MARKER_ALPHA, scale: 1.0 },
                Node::default(),
                BackgroundColor(Color::NONE),
            ))
            .id();
        app.update();

        let background = app.world().get::<BackgroundColor>(first).unwrap();
        assert!((background.0.alpha() - MARKER_ALPHA).abs() < 1e-6);
    }
}
