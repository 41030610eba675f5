// This file is part of Pin Bounce.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::core::system::system_order::{PostPhysicsAdjustSet, PrePhysicsSet};
use crate::debug::DebugPlugin;
use crate::gameplay::arena::ArenaPlugin;
use crate::gameplay::spawn::BallSpawnPlugin;
use crate::interaction::click::ClickRepulsePlugin;
use crate::interaction::follow::MouseFollowPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::interaction::session::config_hot_reload::ConfigHotReloadPlugin;
use crate::physics::rapier_physics::PhysicsSetupPlugin;
use crate::rendering::camera::CameraPlugin;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (PrePhysicsSet, PostPhysicsAdjustSet.after(PrePhysicsSet)),
        )
        .add_plugins((
            CameraPlugin,
            PhysicsSetupPlugin,
            ArenaPlugin,
            BallSpawnPlugin,
            MouseFollowPlugin,
            ClickRepulsePlugin,
            AutoClosePlugin,
            ConfigHotReloadPlugin,
            DebugPlugin,
        ));
    }
}
