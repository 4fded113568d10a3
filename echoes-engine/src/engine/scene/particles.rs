//! Starfield shell and drifting sparkles around the poem.

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::engine::assets::experience_config::{ExperienceConfig, SparkleSettings};

const STAR_BASE_RADIUS: f32 = 0.05;
const STAR_GLOW: f32 = 4.0;
const SPARKLE_BASE_RADIUS: f32 = 0.03;
const SPARKLE_GLOW: f32 = 2.0;
const SPARKLE_WANDER: f32 = 0.2;

/// Shared material of every star; twinkle modulates its emission.
#[derive(Resource)]
pub struct StarMaterial {
    handle: Handle<StandardMaterial>,
    speed: f32,
}

#[derive(Component)]
pub struct SparkleField {
    pub spin: f32,
}

#[derive(Component)]
pub struct Sparkle {
    pub home: Vec3,
    pub speed: f32,
}

/// Star positions on nested spherical shells, outermost first. The shell
/// radius shrinks by a random share of `depth / count` per star.
pub fn star_positions(rng: &mut fastrand::Rng, count: usize, radius: f32, depth: f32) -> Vec<Vec3> {
    let mut r = radius + depth;
    let increment = depth / count.max(1) as f32;

    (0..count)
        .map(|_| {
            r -= increment * rng.f32();
            let theta = (1.0 - rng.f32() * 2.0).acos();
            let phi = rng.f32() * TAU;
            Vec3::new(
                r * theta.sin() * phi.sin(),
                r * theta.cos(),
                r * theta.sin() * phi.cos(),
            )
        })
        .collect()
}

/// Where a sparkle sits at `elapsed` seconds relative to its home.
pub fn sparkle_offset(home: Vec3, elapsed: f32, speed: f32) -> Vec3 {
    let t = elapsed * speed;
    Vec3::new(
        (t + home.x * 100.0).cos(),
        (t + home.y * 100.0).sin(),
        (t + home.z * 100.0).cos(),
    ) * SPARKLE_WANDER
}

/// Emission multiplier for the starfield at `elapsed` seconds.
pub fn twinkle_factor(elapsed: f32, speed: f32) -> f32 {
    (3.0 + (elapsed * speed + 100.0).sin()) / 3.0
}

pub fn spawn_particles(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    config: &ExperienceConfig,
) {
    let mut rng = match config.stars.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let dot = meshes.add(Sphere::new(1.0).mesh().uv(8, 6));

    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::rgb(STAR_GLOW, STAR_GLOW, STAR_GLOW),
        unlit: true,
        fog_enabled: false,
        ..default()
    });

    let stars = &config.stars;
    for position in star_positions(&mut rng, stars.count, stars.radius, stars.depth) {
        let size = (0.5 + 0.5 * rng.f32()) * stars.factor * STAR_BASE_RADIUS;
        commands.spawn((
            Mesh3d(dot.clone()),
            MeshMaterial3d(star_material.clone()),
            Transform::from_translation(position).with_scale(Vec3::splat(size)),
        ));
    }
    commands.insert_resource(StarMaterial {
        handle: star_material,
        speed: stars.twinkle_speed,
    });

    spawn_sparkles(commands, dot, materials, &config.sparkles, &mut rng);
    info!(
        "Spawned {} stars and {} sparkles",
        config.stars.count, config.sparkles.count
    );
}

fn spawn_sparkles(
    commands: &mut Commands,
    mesh: Handle<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    settings: &SparkleSettings,
    rng: &mut fastrand::Rng,
) {
    let material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, settings.opacity),
        emissive: LinearRgba::rgb(SPARKLE_GLOW, SPARKLE_GLOW, SPARKLE_GLOW) * settings.opacity,
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        fog_enabled: false,
        ..default()
    });
    let radius = SPARKLE_BASE_RADIUS * settings.size;

    commands
        .spawn((
            Name::new("Sparkles"),
            SparkleField {
                spin: settings.spin,
            },
            Transform::default(),
            Visibility::default(),
        ))
        .with_children(|parent| {
            for _ in 0..settings.count {
                let home = (Vec3::new(rng.f32(), rng.f32(), rng.f32()) - Vec3::splat(0.5))
                    * settings.scale;
                parent.spawn((
                    Sparkle {
                        home,
                        speed: settings.speed,
                    },
                    Mesh3d(mesh.clone()),
                    MeshMaterial3d(material.clone()),
                    Transform::from_translation(home).with_scale(Vec3::splat(radius)),
                ));
            }
        });
}

pub fn animate_sparkles(
    time: Res<Time>,
    mut fields: Query<(&SparkleField, &mut Transform), Without<Sparkle>>,
    mut sparkles: Query<(&Sparkle, &mut Transform), Without<SparkleField>>,
) {
    let elapsed = time.elapsed_secs();
    for (field, mut transform) in &mut fields {
        transform.rotation = Quat::from_rotation_y(elapsed * field.spin);
    }
    for (sparkle, mut transform) in &mut sparkles {
        transform.translation = sparkle.home + sparkle_offset(sparkle.home, elapsed, sparkle.speed);
    }
}

pub fn twinkle_stars(
    time: Res<Time>,
    star_material: Option<Res<StarMaterial>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(star_material) = star_material else {
        return;
    };
    if let Some(material) = materials.get_mut(&star_material.handle) {
        let glow = STAR_GLOW * twinkle_factor(time.elapsed_secs(), star_material.speed);
        material.emissive = LinearRgba::rgb(glow, glow, glow);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_lie_between_radius_and_outer_shell() {
        let mut rng = fastrand::Rng::with_seed(9);
        let stars = star_positions(&mut rng, 3000, 50.0, 100.0);
        assert_eq!(stars.len(), 3000);
        for star in &stars {
            let r = star.length();
            assert!(r >= 50.0 - 1e-3 && r <= 150.0 + 1e-3, "r = {r}");
        }
    }

    #[test]
    fn sparkles_wander_a_little() {
        let home = Vec3::new(1.0, -2.0, 3.0);
        for step in 0..100 {
            let offset = sparkle_offset(home, step as f32 * 0.1, 0.3);
            assert!(offset.abs().max_element() <= SPARKLE_WANDER + 1e-6);
        }
    }

    #[test]
    fn twinkle_stays_positive() {
        for step in 0..500 {
            let f = twinkle_factor(step as f32 * 0.1, 0.5);
            assert!((2.0 / 3.0 - 1e-6..=4.0 / 3.0 + 1e-6).contains(&f));
        }
    }
}
