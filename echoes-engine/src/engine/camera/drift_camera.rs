use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::motion::{
    CAMERA_PITCH_LIMIT, CAMERA_POINTER_SWAY, CAMERA_SMOOTHING, CAMERA_WHEEL_SENSITIVITY,
};

use crate::poem::smoothing::Smoothing;

/// Pixels per wheel line, matching what browsers report for one notch.
const WHEEL_LINE_PIXELS: f32 = 100.0;

const DRIFT: Smoothing = Smoothing::per_reference_frame(CAMERA_SMOOTHING);

#[derive(Component)]
pub struct MainCamera;

/// Ambient camera orientation driven by pointer position and wheel.
/// `x` is pitch, `y` is yaw, both in radians.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct CameraDrift {
    pub target: Vec2,
    pub current: Vec2,
}

impl CameraDrift {
    /// `ndc` is the pointer position mapped to [-1, 1] with y growing downward.
    pub fn on_pointer(&mut self, ndc: Vec2) {
        self.target.x = ndc.y * CAMERA_POINTER_SWAY;
        self.target.y = ndc.x * CAMERA_POINTER_SWAY;
    }

    /// `delta_y` is in pixels, positive when scrolling down.
    pub fn on_wheel(&mut self, delta_y: f32) {
        self.target.x = (self.target.x + delta_y * CAMERA_WHEEL_SENSITIVITY)
            .clamp(-CAMERA_PITCH_LIMIT, CAMERA_PITCH_LIMIT);
    }

    pub fn step(&mut self, dt: f32) -> Quat {
        self.current = DRIFT.step_vec2(self.current, self.target, dt);
        self.rotation()
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.current.x, self.current.y, 0.0)
    }
}

/// Maps a cursor position in logical pixels to [-1, 1] on both axes.
pub fn pointer_ndc(cursor: Vec2, window_size: Vec2) -> Vec2 {
    if window_size.x <= 0.0 || window_size.y <= 0.0 {
        return Vec2::ZERO;
    }
    cursor / window_size * 2.0 - Vec2::ONE
}

/// Converts a winit wheel event into a browser-style `deltaY`.
fn wheel_delta_pixels(event: &MouseWheel) -> f32 {
    match event.unit {
        MouseScrollUnit::Line => -event.y * WHEEL_LINE_PIXELS,
        MouseScrollUnit::Pixel => -event.y,
    }
}

pub fn camera_drift_controller(
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
    mut drift: ResMut<CameraDrift>,
    mut cursor_moved: EventReader<CursorMoved>,
    mut scroll_events: EventReader<MouseWheel>,
    windows: Query<&Window, With<PrimaryWindow>>,
    time: Res<Time>,
) {
    if let Ok(window) = windows.single() {
        let size = Vec2::new(window.width(), window.height());
        if let Some(cursor) = cursor_moved.read().last() {
            drift.on_pointer(pointer_ndc(cursor.position, size));
        }
    } else {
        cursor_moved.clear();
    }

    for event in scroll_events.read() {
        drift.on_wheel(wheel_delta_pixels(event));
    }

    let rotation = drift.step(time.delta_secs());
    if let Ok(mut transform) = camera_query.single_mut() {
        transform.rotation = rotation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_corners_map_to_unit_square() {
        let size = Vec2::new(800.0, 600.0);
        assert_eq!(pointer_ndc(Vec2::ZERO, size), Vec2::new(-1.0, -1.0));
        assert_eq!(pointer_ndc(size, size), Vec2::ONE);
        assert_eq!(pointer_ndc(size * 0.5, size), Vec2::ZERO);
        assert_eq!(pointer_ndc(Vec2::ONE, Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn pointer_sets_both_axes() {
        let mut drift = CameraDrift::default();
        drift.on_pointer(Vec2::new(1.0, -0.5));
        assert!((drift.target.x + 0.05).abs() < 1e-6);
        assert!((drift.target.y - 0.1).abs() < 1e-6);
    }

    #[test]
    fn wheel_pitch_is_clamped() {
        let mut drift = CameraDrift::default();
        for _ in 0..100 {
            drift.on_wheel(500.0);
        }
        assert_eq!(drift.target.x, CAMERA_PITCH_LIMIT);
        for _ in 0..200 {
            drift.on_wheel(-500.0);
        }
        assert_eq!(drift.target.x, -CAMERA_PITCH_LIMIT);
    }

    #[test]
    fn current_rotation_eases_toward_target() {
        let mut drift = CameraDrift::default();
        drift.on_pointer(Vec2::new(1.0, 1.0));
        drift.step(1.0 / 60.0);
        assert!(drift.current.x > 0.0 && drift.current.x < drift.target.x);
        for _ in 0..1_000 {
            drift.step(1.0 / 60.0);
        }
        assert!((drift.current - drift.target).length() < 1e-4);
    }

    #[test]
    fn line_scroll_down_is_positive() {
        let event = MouseWheel {
            unit: MouseScrollUnit::Line,
            x: 0.0,
            y: -1.0,
            window: Entity::PLACEHOLDER,
        };
        assert_eq!(wheel_delta_pixels(&event), WHEEL_LINE_PIXELS);
    }
}
