use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use bevy_rapier2d::render::{DebugRenderContext, RapierDebugRenderPlugin};

use crate::core::config::GameConfig;

/// Wrapper configuring Rapier. The engine owns the whole simulation step;
/// this plugin only sets gravity and the optional wireframe renderer from
/// config.
pub struct PhysicsSetupPlugin;

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            RapierPhysicsPlugin::<NoUserData>::default(),
            RapierDebugRenderPlugin::default(),
        ))
        .add_systems(Startup, configure_physics);
    }
}

fn configure_physics(
    mut rapier_cfg: Query<&mut RapierConfiguration>,
    mut debug_ctx: Option<ResMut<DebugRenderContext>>,
    game_cfg: Res<GameConfig>,
) {
    for mut cfg in rapier_cfg.iter_mut() {
        cfg.gravity = Vect::new(0.0, game_cfg.gravity.y);
    }
    if let Some(ctx) = debug_ctx.as_deref_mut() {
        ctx.enabled = game_cfg.rapier_debug;
    }
}
