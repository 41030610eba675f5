#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
use crate::core::components::{Ball, Follower};

#[cfg(feature = "debug")]
#[derive(Resource, Debug, Default)]
pub struct DebugStats {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub ball_count: usize,
    pub follower_pos: Vec2,
}

#[cfg(feature = "debug")]
pub fn debug_stats_collect_system(
    time: Res<Time>,
    mut stats: ResMut<DebugStats>,
    q_balls: Query<(), With<Ball>>,
    q_follower: Query<&Transform, With<Follower>>,
) {
    let dt = time.delta_secs();
    if dt > 0.0 {
        let instant_fps = 1.0 / dt;
        // Light exponential smoothing so the overlay is readable.
        stats.fps = if stats.fps == 0.0 {
            instant_fps
        } else {
            stats.fps * 0.9 + instant_fps * 0.1
        };
        stats.frame_time_ms = dt * 1000.0;
    }
    stats.ball_count = q_balls.iter().count();
    if let Some(tf) = q_follower.iter().next() {
        stats.follower_pos = tf.translation.truncate();
    }
}
