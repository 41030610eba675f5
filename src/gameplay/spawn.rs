use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;

use crate::core::components::{Ball, BallCircleVisual, BallRadius, Follower};
use crate::core::config::GameConfig;
use crate::gameplay::arena::{setup_arena, ArenaBounds};

pub struct BallSpawnPlugin;

impl Plugin for BallSpawnPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (spawn_balls, spawn_follower).after(setup_arena),
        );
    }
}

pub fn spawn_balls(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    cfg: Res<GameConfig>,
    bounds: Res<ArenaBounds>,
) {
    let circle_handle = meshes.add(Circle::new(0.5));
    let mut rng = rand::thread_rng();
    let c = &cfg.balls;
    let he = bounds.half_extents();
    let base_radius = bounds.min_dimension() * c.radius_factor;

    for _ in 0..c.count {
        let radius =
            base_radius * rng.gen_range(c.radius_scale_range.min..c.radius_scale_range.max);
        // Uniform over the full window; initial overlap with walls or the pin
        // is resolved by the engine on the first steps.
        let x = rng.gen_range(-he.x..he.x);
        let y = rng.gen_range(-he.y..he.y);
        let vel = Vec2::new(
            rng.gen_range(c.vel_x_range.min..c.vel_x_range.max),
            rng.gen_range(c.vel_y_range.min..c.vel_y_range.max),
        );
        let color = Color::srgb(
            rng.gen::<f32>() * 0.9 + 0.1,
            rng.gen::<f32>() * 0.9 + 0.1,
            rng.gen::<f32>() * 0.9 + 0.1,
        );
        let material = materials.add(color);

        commands
            .spawn((
                Transform::from_translation(Vec3::new(x, y, 1.0)),
                GlobalTransform::default(),
                Visibility::Visible,
                RigidBody::Dynamic,
                Collider::ball(radius),
                Velocity::linear(vel),
                Restitution::coefficient(c.restitution),
                Damping {
                    linear_damping: 0.0,
                    angular_damping: 0.0,
                },
                Ball,
                BallRadius(radius),
            ))
            .with_children(|parent| {
                parent.spawn((
                    Mesh2d::from(circle_handle.clone()),
                    MeshMaterial2d(material),
                    Transform::from_scale(Vec3::splat(radius * 2.0)),
                    BallCircleVisual,
                ));
            });
    }
}

/// The cursor chaser: a normal dynamic body, just without a visual.
pub fn spawn_follower(mut commands: Commands, cfg: Res<GameConfig>, bounds: Res<ArenaBounds>) {
    let f = &cfg.interactions.follow;
    let he = bounds.half_extents();
    // Tucked into the top-left corner until the first cursor sample pulls it out.
    let start = Vec2::new(-he.x + f.radius, he.y - f.radius);
    commands.spawn((
        Name::new("Follower"),
        Follower,
        Transform::from_translation(start.extend(1.0)),
        GlobalTransform::default(),
        RigidBody::Dynamic,
        Collider::ball(f.radius),
        Velocity::zero(),
        Restitution::coefficient(f.restitution),
    ));
}
