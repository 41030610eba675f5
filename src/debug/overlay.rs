#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
use super::stats::DebugStats;

#[cfg(feature = "debug")]
#[derive(Component)]
pub(crate) struct DebugOverlayText;

#[cfg(feature = "debug")]
#[allow(dead_code)]
pub fn debug_overlay_spawn(mut commands: Commands) {
    // Top-left anchored UI text node using the bundled default font.
    commands.spawn((
        Text::new("(collecting stats...)"),
        TextFont {
            font_size: 14.0,
            ..Default::default()
        },
        TextColor(Color::WHITE),
        bevy::ui::Node {
            position_type: bevy::ui::PositionType::Absolute,
            top: Val::Px(4.0),
            left: Val::Px(6.0),
            ..Default::default()
        },
        DebugOverlayText,
    ));
}

#[cfg(feature = "debug")]
#[allow(dead_code)]
pub fn debug_overlay_update(
    stats: Res<DebugStats>,
    mut q_text: Query<&mut Text, With<DebugOverlayText>>,
) {
    for mut text in q_text.iter_mut() {
        text.0 = format!(
            "fps {:.0}  ft {:.1}ms  balls {}  follower ({:.0},{:.0})",
            stats.fps,
            stats.frame_time_ms,
            stats.ball_count,
            stats.follower_pos.x,
            stats.follower_pos.y
        );
    }
}
