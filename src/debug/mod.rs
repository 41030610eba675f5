//! Debug module: feature gated runtime visualization & stats/logging.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
mod overlay;
#[cfg(feature = "debug")]
pub mod stats;

#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
use crate::core::components::Follower;
#[cfg(feature = "debug")]
use crate::core::config::GameConfig;
#[cfg(feature = "debug")]
use crate::core::system::system_order::PostPhysicsAdjustSet;

#[cfg(feature = "debug")]
#[derive(Resource, Debug)]
pub struct DebugState {
    pub log_interval: f32,
    pub time_accum: f32,
}
#[cfg(feature = "debug")]
impl Default for DebugState {
    fn default() -> Self {
        Self {
            log_interval: 1.0,
            time_accum: 0.0,
        }
    }
}

#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use logging::debug_logging_system;
        #[cfg(not(test))]
        use overlay::{debug_overlay_spawn, debug_overlay_update};
        use stats::debug_stats_collect_system;

        // The follower has no mesh; outline it so its motion is observable.
        fn debug_follower_gizmo(
            cfg: Res<GameConfig>,
            q: Query<&Transform, With<Follower>>,
            mut gizmos: Gizmos,
        ) {
            for tf in q.iter() {
                gizmos.circle_2d(
                    tf.translation.truncate(),
                    cfg.interactions.follow.radius,
                    Color::srgb(1.0, 1.0, 0.2),
                );
            }
        }

        app.init_resource::<DebugState>()
            .init_resource::<stats::DebugStats>();
        #[cfg(not(test))]
        app.add_systems(Startup, debug_overlay_spawn);
        app.add_systems(
            Update,
            (
                debug_stats_collect_system,
                debug_logging_system,
                debug_follower_gizmo,
                #[cfg(not(test))]
                debug_overlay_update,
            )
                .in_set(PostPhysicsAdjustSet),
        );
    }
}

#[cfg(not(feature = "debug"))]
pub struct DebugPlugin;
#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}
