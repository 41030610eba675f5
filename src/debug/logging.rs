#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
use super::stats::DebugStats;
#[cfg(feature = "debug")]
use super::DebugState;

#[cfg(feature = "debug")]
pub fn debug_logging_system(time: Res<Time>, mut state: ResMut<DebugState>, stats: Res<DebugStats>) {
    state.time_accum += time.delta_secs();
    if state.time_accum >= state.log_interval {
        state.time_accum = 0.0;
        info!(
            "SIM t={:.3}s fps={:.1} ft_ms={:.1} balls={} follower=({:.0},{:.0})",
            time.elapsed_secs(),
            stats.fps,
            stats.frame_time_ms,
            stats.ball_count,
            stats.follower_pos.x,
            stats.follower_pos.y
        );
    }
}
