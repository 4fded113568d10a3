use bevy::math::{Vec2, Vec3};
use constants::motion::REFERENCE_FRAME_RATE;

/// Exponential approach toward a target.
///
/// The rate is the share of the remaining distance covered in one frame at
/// the reference frame rate. Steps are scaled by elapsed time, so a 144 Hz
/// display and a 60 Hz display converge at the same speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smoothing {
    per_frame: f32,
}

impl Smoothing {
    pub const fn per_reference_frame(per_frame: f32) -> Self {
        Self { per_frame }
    }

    /// Share of the remaining distance to cover after `dt` seconds.
    pub fn factor(self, dt: f32) -> f32 {
        if dt <= 0.0 || self.per_frame <= 0.0 {
            return 0.0;
        }
        if self.per_frame >= 1.0 {
            return 1.0;
        }
        1.0 - (1.0 - self.per_frame).powf(dt * REFERENCE_FRAME_RATE)
    }

    pub fn step(self, current: f32, target: f32, dt: f32) -> f32 {
        current + (target - current) * self.factor(dt)
    }

    pub fn step_vec2(self, current: Vec2, target: Vec2, dt: f32) -> Vec2 {
        current + (target - current) * self.factor(dt)
    }

    pub fn step_vec3(self, current: Vec3, target: Vec3, dt: f32) -> Vec3 {
        current + (target - current) * self.factor(dt)
    }
}
