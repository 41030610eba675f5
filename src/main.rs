use anyhow::bail;
use bevy::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use pin_bounce::interaction::session::config_hot_reload::ConfigReloadSettings;
use pin_bounce::{GameConfig, GamePlugin};

#[derive(Parser, Debug)]
#[command(name = "pin_bounce", about = "Balls in a pinned arena chasing your cursor")]
struct Cli {
    /// Extra config layer applied on top of the default layers
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override window.autoClose (seconds; 0 disables)
    #[arg(long)]
    auto_close: Option<f32>,
}

/// Collected before the Bevy log subscriber exists; emitted at startup.
#[derive(Resource, Debug, Clone)]
struct ConfigLoadReport {
    used: Vec<String>,
    errors: Vec<String>,
    warnings: Vec<String>,
}

fn log_config_report(report: Res<ConfigLoadReport>) {
    for layer in &report.used {
        info!("config layer: {layer}");
    }
    for e in &report.errors {
        warn!("config load issue: {e}");
    }
    for w in &report.warnings {
        warn!("config warning: {w}");
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut paths = vec![
        PathBuf::from("assets/config/game.ron"),
        PathBuf::from("assets/config/game.local.ron"),
    ];
    if let Some(extra) = cli.config {
        if !extra.is_file() {
            bail!("config layer {} does not exist", extra.display());
        }
        paths.push(extra);
    }

    let (mut cfg, used, errors) = GameConfig::load_layered(paths.iter());
    if let Some(secs) = cli.auto_close {
        cfg.window.auto_close = secs;
    }
    let report = ConfigLoadReport {
        used,
        errors,
        warnings: cfg.validate(),
    };

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(cfg.clone())
        .insert_resource(report)
        .insert_resource(ConfigReloadSettings {
            paths,
            interval_secs: 0.5,
        })
        .add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: cfg.window.title.clone(),
                    resolution: (cfg.window.width, cfg.window.height).into(),
                    resizable: true,
                    ..default()
                }),
                ..default()
            }),
        )
        .add_plugins(GamePlugin)
        .add_systems(Startup, log_config_report)
        .run();
    Ok(())
}
