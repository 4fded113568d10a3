use bevy::math::{Vec2, Vec3};
use bevy::prelude::Resource;
use constants::layout::{HOVER_JITTER, INITIAL_DEPTH, INITIAL_SPREAD, SCATTER_DEPTH, SCATTER_SPREAD};

/// Source of uniform samples in `[0, 1)` for the decorative randomness.
pub trait ScatterSource: Send + Sync {
    fn next_unit(&mut self) -> f32;

    /// Sample in `[-spread / 2, spread / 2)`.
    fn centred(&mut self, spread: f32) -> f32 {
        (self.next_unit() - 0.5) * spread
    }
}

impl ScatterSource for fastrand::Rng {
    fn next_unit(&mut self) -> f32 {
        self.f32()
    }
}

/// Shared random source for word scatter and hover glitch.
#[derive(Resource)]
pub struct ScatterRng {
    source: Box<dyn ScatterSource>,
}

impl ScatterRng {
    pub fn new(source: impl ScatterSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(fastrand::Rng::with_seed(seed))
    }
}

impl Default for ScatterRng {
    fn default() -> Self {
        Self::new(fastrand::Rng::new())
    }
}

impl ScatterSource for ScatterRng {
    fn next_unit(&mut self) -> f32 {
        self.source.next_unit()
    }
}

/// Dormant resting point for a word whose home is `home`.
pub fn scatter_point(home: Vec3, source: &mut dyn ScatterSource) -> Vec3 {
    Vec3::new(
        home.x + source.centred(SCATTER_SPREAD),
        home.y + source.centred(SCATTER_SPREAD),
        home.z - SCATTER_DEPTH,
    )
}

/// Where a word is first drawn when it is spawned.
pub fn initial_point(home: Vec3, source: &mut dyn ScatterSource) -> Vec3 {
    Vec3::new(
        home.x + source.centred(INITIAL_SPREAD),
        home.y + source.centred(INITIAL_SPREAD),
        home.z - INITIAL_DEPTH,
    )
}

pub fn hover_jitter(source: &mut dyn ScatterSource) -> Vec2 {
    Vec2::new(source.centred(HOVER_JITTER), source.centred(HOVER_JITTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scatter_stays_inside_its_box() {
        let mut rng = ScatterRng::seeded(7);
        let home = Vec3::new(1.0, -2.0, 0.5);
        for _ in 0..500 {
            let p = scatter_point(home, &mut rng);
            assert!((p.x - home.x).abs() <= SCATTER_SPREAD / 2.0);
            assert!((p.y - home.y).abs() <= SCATTER_SPREAD / 2.0);
            assert_eq!(p.z, home.z - SCATTER_DEPTH);
        }
    }

    #[test]
    fn same_seed_same_points() {
        let mut a = ScatterRng::seeded(42);
        let mut b = ScatterRng::seeded(42);
        for _ in 0..16 {
            assert_eq!(
                scatter_point(Vec3::ZERO, &mut a),
                scatter_point(Vec3::ZERO, &mut b)
            );
        }
    }

    #[test]
    fn jitter_is_tiny() {
        let mut rng = ScatterRng::seeded(3);
        for _ in 0..200 {
            let j = hover_jitter(&mut rng);
            assert!(j.x.abs() <= 0.015 && j.y.abs() <= 0.015);
        }
    }
}
