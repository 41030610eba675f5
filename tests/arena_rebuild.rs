use bevy::prelude::*;
use bevy::window::WindowResized;

use pin_bounce::core::components::{Pin, Wall};
use pin_bounce::gameplay::arena::ArenaPlugin;
use pin_bounce::{ArenaBounds, GameConfig};

fn arena_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.init_resource::<Assets<Mesh>>();
    app.init_resource::<Assets<ColorMaterial>>();
    app.insert_resource(GameConfig::default());
    app.add_event::<WindowResized>();
    app.add_plugins(ArenaPlugin);
    app
}

fn wall_count(app: &mut App) -> usize {
    let mut q = app.world_mut().query_filtered::<(), With<Wall>>();
    q.iter(app.world()).count()
}

fn pin_count(app: &mut App) -> usize {
    let mut q = app.world_mut().query_filtered::<(), With<Pin>>();
    q.iter(app.world()).count()
}

#[test]
fn startup_builds_four_walls_and_one_pin() {
    let mut app = arena_app();
    app.update();

    let bounds = *app.world().resource::<ArenaBounds>();
    assert_eq!(bounds.width, GameConfig::default().window.width);
    assert_eq!(bounds.height, GameConfig::default().window.height);
    assert_eq!(wall_count(&mut app), 4);
    assert_eq!(pin_count(&mut app), 1);
}

#[test]
fn resize_rebuilds_boundary_for_new_extent() {
    let mut app = arena_app();
    app.update();

    let window = app.world_mut().spawn_empty().id();
    app.world_mut().send_event(WindowResized {
        window,
        width: 640.0,
        height: 480.0,
    });
    app.update();
    // Despawn of the old boundary and respawn both flushed by now.
    app.update();

    let bounds = *app.world().resource::<ArenaBounds>();
    assert_eq!(bounds.width, 640.0);
    assert_eq!(bounds.height, 480.0);
    assert_eq!(wall_count(&mut app), 4);
    assert_eq!(pin_count(&mut app), 1);

    // Wall extents now track the smaller window.
    let mut q = app
        .world_mut()
        .query_filtered::<&Transform, With<Wall>>();
    let max_x = q
        .iter(app.world())
        .map(|tf| tf.translation.x.abs())
        .fold(0.0f32, f32::max);
    assert_eq!(max_x, 320.0);
}

#[test]
fn same_size_resize_event_is_ignored() {
    let mut app = arena_app();
    app.update();

    let before: Vec<Entity> = {
        let mut q = app.world_mut().query_filtered::<Entity, With<Wall>>();
        q.iter(app.world()).collect()
    };
    let window = app.world_mut().spawn_empty().id();
    let cfg = GameConfig::default();
    app.world_mut().send_event(WindowResized {
        window,
        width: cfg.window.width,
        height: cfg.window.height,
    });
    app.update();

    let after: Vec<Entity> = {
        let mut q = app.world_mut().query_filtered::<Entity, With<Wall>>();
        q.iter(app.world()).collect()
    };
    assert_eq!(before, after, "no rebuild when the extent is unchanged");
}
