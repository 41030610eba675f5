use bevy::prelude::*;

/// Marker component identifying a ball entity (holds physics body & collider).
#[derive(Component)]
pub struct Ball;

/// Logical radius used both for the collider and for click hit-testing.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct BallRadius(pub f32);

/// Tag component for the circle mesh child of a ball.
#[derive(Component)]
pub struct BallCircleVisual;

/// The invisible body that chases the cursor.
#[derive(Component)]
pub struct Follower;

/// The static central disc the balls bounce off.
#[derive(Component)]
pub struct Pin;

/// One of the four static boundary slabs.
#[derive(Component)]
pub struct Wall;
