use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;

use crate::core::components::Follower;
use crate::core::config::GameConfig;
use crate::core::system::system_order::PrePhysicsSet;

/// Spring force pulling the invisible follower body toward the cursor, with
/// per-frame velocity damping. This is the per-frame update the whole effect
/// hangs off: the follower shoves balls around as it chases the pointer.
pub struct MouseFollowPlugin;

impl Plugin for MouseFollowPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, apply_follow_force.in_set(PrePhysicsSet));
    }
}

fn cursor_world_pos(
    _window: &Window,
    camera_q: &Query<(&Camera, &GlobalTransform)>,
    screen_pos: Vec2,
) -> Option<Vec2> {
    let (camera, cam_tf) = camera_q.iter().next()?;
    camera.viewport_to_world_2d(cam_tf, screen_pos).ok()
}

fn primary_pointer_world_pos(
    window: &Window,
    touches: &Touches,
    camera_q: &Query<(&Camera, &GlobalTransform)>,
) -> Option<Vec2> {
    if let Some(touch) = touches.iter().next() {
        return cursor_world_pos(window, camera_q, touch.position());
    }
    let cursor = window.cursor_position()?;
    cursor_world_pos(window, camera_q, cursor)
}

/// Acceleration toward the pointer: directed along `delta`, magnitude ramping
/// linearly up to `pull_strength` once the pointer is `max_distance` away.
/// Inside `min_distance` the spring is dead and only damping acts.
pub fn follow_accel(delta: Vec2, max_distance: f32, min_distance: f32, pull_strength: f32) -> Vec2 {
    let d = delta.length();
    if d <= min_distance || d <= 0.0 {
        return Vec2::ZERO;
    }
    let saturation = (d / max_distance).min(1.0);
    (delta / d) * saturation * pull_strength
}

fn apply_follow_force(
    time: Res<Time>,
    touches: Res<Touches>,
    windows_q: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    cfg: Res<GameConfig>,
    mut q: Query<(&Transform, &mut Velocity), With<Follower>>,
) {
    let f = &cfg.interactions.follow;
    let pointer = windows_q
        .single()
        .ok()
        .and_then(|window| primary_pointer_world_pos(window, &touches, &camera_q));
    let dt = time.delta_secs();
    for (tf, mut vel) in q.iter_mut() {
        if let Some(target) = pointer {
            let delta = target - tf.translation.truncate();
            vel.linvel += follow_accel(delta, f.max_distance, f.min_distance, f.pull_strength) * dt;
        }
        // Damping runs even with the cursor outside the window.
        vel.linvel *= f.damping;
    }
}
