use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;

use crate::core::components::{Ball, BallRadius, Follower};
use crate::core::config::GameConfig;
use crate::core::system::system_order::PrePhysicsSet;
use crate::gameplay::arena::ArenaBounds;

/// Click handling: every ball under the click point gets knocked away from it,
/// and a follower that escaped the arena is brought back to the center.
pub struct ClickRepulsePlugin;

impl Plugin for ClickRepulsePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (handle_click_repulse, respawn_follower_on_click).in_set(PrePhysicsSet),
        );
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

fn pressed(buttons: &ButtonInput<MouseButton>, touches: &Touches) -> bool {
    buttons.just_pressed(MouseButton::Left) || touches.iter_just_pressed().next().is_some()
}

/// Point-in-disc hit test, boundary inclusive.
pub fn ball_hit(click: Vec2, center: Vec2, radius: f32) -> bool {
    center.distance_squared(click) <= radius * radius
}

/// Velocity kick away from the click point, proportional to the displacement.
/// A click dead on the center moves nothing, same as the original effect.
pub fn repulse_velocity(center: Vec2, click: Vec2, impulse_scale: f32) -> Vec2 {
    (center - click) * impulse_scale
}

/// Teleport home if the body slipped out of the arena; true when it fired.
pub fn respawn_if_escaped(tf: &mut Transform, vel: &mut Velocity, bounds: &ArenaBounds) -> bool {
    if bounds.contains(tf.translation.truncate()) {
        return false;
    }
    tf.translation.x = 0.0;
    tf.translation.y = 0.0;
    vel.linvel = Vec2::ZERO;
    vel.angvel = 0.0;
    true
}

fn handle_click_repulse(
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows_q: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    cfg: Res<GameConfig>,
    mut q: Query<(&Transform, &BallRadius, &mut Velocity), With<Ball>>,
) {
    let rp = &cfg.interactions.repulse;
    if !rp.enabled || !pressed(&buttons, &touches) {
        return;
    }
    let Ok(window) = windows_q.single() else {
        return;
    };
    let Some(click) = primary_pointer_world_pos(window, &touches, &camera_q) else {
        return;
    };
    let mut hits = 0usize;
    for (tf, radius, mut vel) in q.iter_mut() {
        let pos = tf.translation.truncate();
        if !ball_hit(click, pos, radius.0) {
            continue;
        }
        vel.linvel += repulse_velocity(pos, click, rp.impulse_scale);
        hits += 1;
    }
    if hits > 0 {
        debug!("click repulsed {hits} ball(s)");
    }
}

fn respawn_follower_on_click(
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    bounds: Res<ArenaBounds>,
    mut q: Query<(&mut Transform, &mut Velocity), With<Follower>>,
) {
    if !pressed(&buttons, &touches) {
        return;
    }
    for (mut tf, mut vel) in q.iter_mut() {
        if respawn_if_escaped(&mut tf, &mut vel, &bounds) {
            info!("follower escaped the arena; respawned at center");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_is_boundary_inclusive() {
        let center = Vec2::new(10.0, 10.0);
        assert!(ball_hit(center, center, 5.0));
        assert!(ball_hit(Vec2::new(15.0, 10.0), center, 5.0));
        assert!(!ball_hit(Vec2::new(15.1, 10.0), center, 5.0));
    }

    #[test]
    fn repulse_points_away_and_scales_with_offset() {
        let v = repulse_velocity(Vec2::new(12.0, 4.0), Vec2::new(10.0, 4.0), 12.0);
        assert_eq!(v, Vec2::new(24.0, 0.0));
        // Dead-center click -> zero kick.
        let centered = repulse_velocity(Vec2::new(10.0, 4.0), Vec2::new(10.0, 4.0), 12.0);
        assert_eq!(centered, Vec2::ZERO);
    }

    #[test]
    fn respawn_only_fires_outside_bounds() {
        let bounds = ArenaBounds {
            width: 200.0,
            height: 100.0,
        };
        let mut tf = Transform::from_xyz(90.0, 0.0, 1.0);
        let mut vel = Velocity::linear(Vec2::new(5.0, 5.0));
        assert!(!respawn_if_escaped(&mut tf, &mut vel, &bounds));
        assert_eq!(tf.translation.x, 90.0);

        let mut tf = Transform::from_xyz(120.0, 0.0, 1.0);
        let mut vel = Velocity::linear(Vec2::new(5.0, 5.0));
        assert!(respawn_if_escaped(&mut tf, &mut vel, &bounds));
        assert_eq!(tf.translation.truncate(), Vec2::ZERO);
        assert_eq!(tf.translation.z, 1.0); // layer preserved
        assert_eq!(vel.linvel, Vec2::ZERO);
    }
}
