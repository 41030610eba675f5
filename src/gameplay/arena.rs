use bevy::prelude::*;
use bevy::window::WindowResized;
use bevy_rapier2d::prelude::*;

use crate::core::components::{Pin, Wall};
use crate::core::config::GameConfig;

/// Current playfield extent in world units (world units = logical pixels,
/// origin at the window center). Seeded from config, kept in sync with the
/// actual window by [`sync_arena_to_window`].
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ArenaBounds {
    pub width: f32,
    pub height: f32,
}

impl ArenaBounds {
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    pub fn min_dimension(&self) -> f32 {
        self.width.min(self.height)
    }

    /// True when `pos` lies inside the arena rectangle.
    pub fn contains(&self, pos: Vec2) -> bool {
        let he = self.half_extents();
        pos.x.abs() <= he.x && pos.y.abs() <= he.y
    }
}

/// Geometry of one boundary slab, centered on a window edge so half the slab
/// lies outside the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSpec {
    pub center: Vec2,
    pub half_extents: Vec2,
}

/// Top, bottom, right, left boundary slabs for the given extent.
pub fn wall_specs(width: f32, height: f32, thickness: f32) -> [WallSpec; 4] {
    let hw = width * 0.5;
    let hh = height * 0.5;
    let ht = thickness * 0.5;
    [
        WallSpec {
            center: Vec2::new(0.0, hh),
            half_extents: Vec2::new(hw, ht),
        },
        WallSpec {
            center: Vec2::new(0.0, -hh),
            half_extents: Vec2::new(hw, ht),
        },
        WallSpec {
            center: Vec2::new(hw, 0.0),
            half_extents: Vec2::new(ht, hh),
        },
        WallSpec {
            center: Vec2::new(-hw, 0.0),
            half_extents: Vec2::new(ht, hh),
        },
    ]
}

pub fn pin_radius(width: f32, height: f32, factor: f32) -> f32 {
    width.min(height) * factor
}

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_arena)
            .add_systems(Update, sync_arena_to_window);
    }
}

/// Seed [`ArenaBounds`] from config and build the initial boundary.
pub fn setup_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    cfg: Res<GameConfig>,
) {
    let bounds = ArenaBounds {
        width: cfg.window.width,
        height: cfg.window.height,
    };
    spawn_boundary(&mut commands, &mut meshes, &mut materials, &cfg, bounds);
    commands.insert_resource(bounds);
}

/// Rebuild walls and pin when the window size changes. Balls and the follower
/// are left alone; an escaped follower comes back through the click respawn.
fn sync_arena_to_window(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut resize_events: EventReader<WindowResized>,
    mut bounds: ResMut<ArenaBounds>,
    cfg: Res<GameConfig>,
    boundary_q: Query<Entity, Or<(With<Wall>, With<Pin>)>>,
) {
    let Some(last) = resize_events.read().last() else {
        return;
    };
    let new_bounds = ArenaBounds {
        width: last.width,
        height: last.height,
    };
    if new_bounds == *bounds {
        return;
    }
    info!(
        "arena resize {}x{} -> {}x{}",
        bounds.width, bounds.height, new_bounds.width, new_bounds.height
    );
    *bounds = new_bounds;
    for entity in boundary_q.iter() {
        commands.entity(entity).despawn();
    }
    spawn_boundary(&mut commands, &mut meshes, &mut materials, &cfg, new_bounds);
}

fn spawn_boundary(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    cfg: &GameConfig,
    bounds: ArenaBounds,
) {
    for (i, spec) in wall_specs(bounds.width, bounds.height, cfg.wall.thickness)
        .into_iter()
        .enumerate()
    {
        commands.spawn((
            Name::new(format!("Wall{i}")),
            Wall,
            RigidBody::Fixed,
            Collider::cuboid(spec.half_extents.x, spec.half_extents.y),
            Transform::from_translation(spec.center.extend(0.0)),
            GlobalTransform::default(),
        ));
    }

    let radius = pin_radius(bounds.width, bounds.height, cfg.pin.radius_factor);
    let mesh = meshes.add(Circle::new(radius));
    let material = materials.add(Color::WHITE);
    commands.spawn((
        Name::new("Pin"),
        Pin,
        RigidBody::Fixed,
        Collider::ball(radius),
        Mesh2d::from(mesh),
        MeshMaterial2d(material),
        Transform::from_translation(Vec3::ZERO),
        GlobalTransform::default(),
        Visibility::Visible,
    ));
}
