pub mod config;

pub use config::{
    BallSpawnConfig, FollowConfig, GameConfig, GravityConfig, InteractionConfig, PinConfig,
    RepulseConfig, SpawnRange, WallConfig, WindowConfig,
};
