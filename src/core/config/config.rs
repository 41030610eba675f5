use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Pin Bounce".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    pub y: f32,
}
impl Default for GravityConfig {
    fn default() -> Self {
        // The effect runs weightless; balls drift until walls / pin / clicks act on them.
        Self { y: 0.0 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnRange<T> {
    pub min: T,
    pub max: T,
}
impl<T: Default> Default for SpawnRange<T> {
    fn default() -> Self {
        Self {
            min: Default::default(),
            max: Default::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BallSpawnConfig {
    pub count: usize,
    /// Base radius as a fraction of the smaller arena dimension.
    pub radius_factor: f32,
    /// Random multiplier applied on top of the base radius per ball.
    pub radius_scale_range: SpawnRange<f32>,
    pub vel_x_range: SpawnRange<f32>,
    pub vel_y_range: SpawnRange<f32>,
    pub restitution: f32,
}
impl Default for BallSpawnConfig {
    fn default() -> Self {
        Self {
            count: 18,
            radius_factor: 0.04,
            radius_scale_range: SpawnRange { min: 1.0, max: 2.0 },
            vel_x_range: SpawnRange {
                min: -60.0,
                max: 60.0,
            },
            vel_y_range: SpawnRange {
                min: -60.0,
                max: 60.0,
            },
            restitution: 0.9,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PinConfig {
    /// Disc radius as a fraction of the smaller arena dimension.
    pub radius_factor: f32,
}
impl Default for PinConfig {
    fn default() -> Self {
        Self {
            radius_factor: 0.25,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WallConfig {
    pub thickness: f32,
}
impl Default for WallConfig {
    fn default() -> Self {
        Self { thickness: 20.0 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FollowConfig {
    /// Collider radius of the invisible cursor chaser.
    pub radius: f32,
    pub restitution: f32,
    /// Cursor distance at which the spring force saturates.
    pub max_distance: f32,
    /// Below this cursor distance no force is applied (damping still runs).
    pub min_distance: f32,
    /// Acceleration gain at full saturation, px/s^2.
    pub pull_strength: f32,
    /// Per-frame velocity retention factor.
    pub damping: f32,
}
impl Default for FollowConfig {
    fn default() -> Self {
        Self {
            radius: 30.0,
            restitution: 0.9,
            max_distance: 50.0,
            min_distance: 1.0,
            pull_strength: 2400.0,
            damping: 0.88,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RepulseConfig {
    pub enabled: bool,
    /// Velocity gained per pixel of click-to-center displacement.
    pub impulse_scale: f32,
}
impl Default for RepulseConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            impulse_scale: 12.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct InteractionConfig {
    pub follow: FollowConfig,
    pub repulse: RepulseConfig,
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub gravity: GravityConfig,
    pub balls: BallSpawnConfig,
    pub pin: PinConfig,
    pub wall: WallConfig,
    pub interactions: InteractionConfig,
    pub rapier_debug: bool,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            gravity: Default::default(),
            balls: Default::default(),
            pin: Default::default(),
            wall: Default::default(),
            interactions: Default::default(),
            rapier_debug: false,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load multiple config layers, later files overriding earlier ones (shallow & deep merge).
    /// Missing files are skipped; returns (config, list_of_layer_paths_used, list_of_errors).
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();

        fn merge_value(base: &mut ron::value::Value, overlay: ron::value::Value) {
            use ron::value::Value;
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        let mut replaced = false;
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                let val = incoming.take().unwrap();
                                merge_value(ev, val);
                                replaced = true;
                                break;
                            }
                        }
                        if !replaced {
                            bm.insert(k, incoming.unwrap());
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }

        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }

        if let Some(val) = merged {
            match val.clone().into_rust::<GameConfig>() {
                Ok(cfg) => (cfg, used, errors),
                Err(e) => (GameConfig::default(), used, {
                    let mut evec = errors;
                    evec.push(format!(
                        "failed to deserialize merged config; using defaults: {e}"
                    ));
                    evec
                }),
            }
        } else {
            (GameConfig::default(), used, errors)
        }
    }

    /// Validate the configuration returning a list of human-readable warning strings.
    /// These represent suspicious / potentially unintended values but are not hard errors.
    /// Call at startup and log each warning with `warn!`.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.width * self.window.height > 10_000_000.0 {
            w.push(format!(
                "very large window area: {}x{}",
                self.window.width, self.window.height
            ));
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        } else if self.window.auto_close > 0.0 && self.window.auto_close < 0.01 {
            w.push(format!(
                "window.autoClose {} very small; closes almost immediately",
                self.window.auto_close
            ));
        }
        if self.gravity.y > 0.0 {
            w.push(format!(
                "gravity.y is positive ({}); Y-up world, downward pull needs a negative value",
                self.gravity.y
            ));
        }
        if self.gravity.y < -2000.0 {
            w.push(format!(
                "gravity.y very large magnitude ({}); integration instability possible",
                self.gravity.y
            ));
        }
        if self.balls.count == 0 {
            w.push("balls.count is 0; nothing will spawn".into());
        }
        if self.balls.count > 10_000 {
            w.push(format!(
                "balls.count {} very high; performance may suffer",
                self.balls.count
            ));
        }
        if self.balls.radius_factor <= 0.0 {
            w.push("balls.radius_factor must be > 0".into());
        } else if self.balls.radius_factor > 0.2 {
            w.push(format!(
                "balls.radius_factor {} very large; balls may not fit between pin and walls",
                self.balls.radius_factor
            ));
        }
        if !(0.0..=1.5).contains(&self.balls.restitution) {
            w.push(format!(
                "balls.restitution {} outside recommended 0..1.5",
                self.balls.restitution
            ));
        }
        fn check_range_f32(w: &mut Vec<String>, label: &str, r: &SpawnRange<f32>) {
            if r.min > r.max {
                w.push(format!(
                    "{label} min ({}) greater than max ({})",
                    r.min, r.max
                ));
            }
            if (r.max - r.min).abs() < f32::EPSILON {
                w.push(format!("{label} min == max ({}) -> zero variation", r.min));
            }
        }
        check_range_f32(
            &mut w,
            "balls.radius_scale_range",
            &self.balls.radius_scale_range,
        );
        if self.balls.radius_scale_range.min <= 0.0 {
            w.push("balls.radius_scale_range.min must be > 0".into());
        }
        check_range_f32(&mut w, "balls.vel_x_range", &self.balls.vel_x_range);
        check_range_f32(&mut w, "balls.vel_y_range", &self.balls.vel_y_range);
        if self.pin.radius_factor <= 0.0 {
            w.push("pin.radius_factor must be > 0".into());
        } else if self.pin.radius_factor >= 0.5 {
            w.push(format!(
                "pin.radius_factor {} >= 0.5; the pin spans the whole arena",
                self.pin.radius_factor
            ));
        }
        if self.wall.thickness <= 0.0 {
            w.push("wall.thickness must be > 0".into());
        }
        {
            let f = &self.interactions.follow;
            if f.radius <= 0.0 {
                w.push("follow.radius must be > 0".into());
            }
            if f.max_distance <= 0.0 {
                w.push("follow.max_distance must be > 0".into());
            }
            if f.min_distance < 0.0 {
                w.push("follow.min_distance negative".into());
            }
            if f.max_distance > 0.0 && f.min_distance >= f.max_distance {
                w.push(format!(
                    "follow.min_distance {} >= max_distance {}; the dead zone swallows the spring",
                    f.min_distance, f.max_distance
                ));
            }
            if f.pull_strength <= 0.0 {
                w.push("follow.pull_strength must be > 0".into());
            }
            if !(0.0..=1.0).contains(&f.damping) {
                w.push(format!(
                    "follow.damping {} outside 0..1 (values > 1 amplify velocity every frame)",
                    f.damping
                ));
            }
        }
        if self.interactions.repulse.enabled && self.interactions.repulse.impulse_scale <= 0.0 {
            w.push("repulse.impulse_scale must be > 0 when enabled".into());
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_sample_config() {
        let sample = r#"(
            window: (width: 800.0, height: 600.0, title: "Test"),
            gravity: (y: 0.0),
            balls: (
                count: 10,
                radius_factor: 0.05,
                radius_scale_range: (min: 1.0, max: 2.0),
                vel_x_range: (min: -40.0, max: 40.0),
                vel_y_range: (min: -40.0, max: 40.0),
                restitution: 0.9,
            ),
            pin: (radius_factor: 0.2),
            wall: (thickness: 24.0),
            interactions: (
                follow: (
                    radius: 25.0,
                    restitution: 0.9,
                    max_distance: 60.0,
                    min_distance: 1.0,
                    pull_strength: 2000.0,
                    damping: 0.9,
                ),
                repulse: (enabled: true, impulse_scale: 10.0),
            ),
            rapier_debug: false,
        )"#;
        let mut file = tempfile::NamedTempFile::new().expect("tmp file");
        file.write_all(sample.as_bytes()).unwrap();
        let cfg = GameConfig::load_from_file(file.path()).expect("parse config");
        assert_eq!(cfg.window.width, 800.0);
        assert_eq!(cfg.balls.count, 10);
        assert!((cfg.pin.radius_factor - 0.2).abs() < 1e-6);
        assert!((cfg.interactions.follow.max_distance - 60.0).abs() < 1e-6);
        assert!((cfg.interactions.repulse.impulse_scale - 10.0).abs() < 1e-6);
        // The nominal sample should sail through validation
        assert!(
            cfg.validate().is_empty(),
            "expected no validation warnings for sample config: {:?}",
            cfg.validate()
        );
    }

    #[test]
    fn defaults_are_clean() {
        let cfg = GameConfig::default();
        assert!(
            cfg.validate().is_empty(),
            "defaults must not warn: {:?}",
            cfg.validate()
        );
    }

    #[test]
    fn validate_detects_warnings() {
        // Intentionally craft a config with multiple issues
        let bad = GameConfig {
            window: WindowConfig {
                width: -100.0,
                height: 0.0,
                title: "Bad".into(),
                auto_close: -5.0,
            },
            gravity: GravityConfig { y: 50.0 },
            balls: BallSpawnConfig {
                count: 0,
                radius_factor: 0.0,
                radius_scale_range: SpawnRange { min: 0.0, max: 0.0 },
                vel_x_range: SpawnRange {
                    min: 10.0,
                    max: -10.0,
                },
                vel_y_range: SpawnRange { min: 1.0, max: 1.0 },
                restitution: -0.2,
            },
            pin: PinConfig { radius_factor: 0.7 },
            wall: WallConfig { thickness: 0.0 },
            interactions: InteractionConfig {
                follow: FollowConfig {
                    radius: 0.0,
                    restitution: 0.9,
                    max_distance: 0.0,
                    min_distance: -1.0,
                    pull_strength: 0.0,
                    damping: 1.3,
                },
                repulse: RepulseConfig {
                    enabled: true,
                    impulse_scale: 0.0,
                },
            },
            rapier_debug: false,
        };
        let warnings = bad.validate();
        let joined = warnings.join(" | ");
        assert!(joined.contains("window dimensions must be > 0"));
        assert!(joined.contains("window.autoClose"));
        assert!(joined.contains("gravity.y is positive"));
        assert!(joined.contains("balls.count is 0"));
        assert!(joined.contains("balls.radius_factor must be > 0"));
        assert!(joined.contains("balls.radius_scale_range.min must be > 0"));
        assert!(joined.contains("balls.vel_x_range min (10"));
        assert!(joined.contains("pin.radius_factor 0.7"));
        assert!(joined.contains("wall.thickness must be > 0"));
        assert!(joined.contains("follow.max_distance must be > 0"));
        assert!(joined.contains("follow.damping 1.3"));
        assert!(joined.contains("repulse.impulse_scale must be > 0"));
        assert!(
            warnings.len() >= 12,
            "expected many warnings, got {}: {joined}",
            warnings.len()
        );
    }

    #[test]
    fn load_or_default_missing_file() {
        let (cfg, err) = GameConfig::load_or_default("this/file/does/not/exist.ron");
        assert!(err.is_some());
        // Defaults applied
        assert_eq!(cfg.window.width, WindowConfig::default().width);
    }

    #[test]
    fn layered_merge_overrides() {
        let base = r"(
            window: (width: 900.0),
            gravity: (y: -70.0),
            balls: (count: 24),
        )";
        let override_one = r#"(
            window: (title: "Custom Title"),
            balls: (count: 6),
        )"#;
        let mut f1 = tempfile::NamedTempFile::new().unwrap();
        let mut f2 = tempfile::NamedTempFile::new().unwrap();
        f1.write_all(base.as_bytes()).unwrap();
        f2.write_all(override_one.as_bytes()).unwrap();
        let (cfg, used, errors) = GameConfig::load_layered([f1.path(), f2.path()]);
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        assert_eq!(used.len(), 2);
        assert_eq!(cfg.window.width, 900.0); // from base
        assert_eq!(cfg.window.title, "Custom Title"); // overridden
        assert_eq!(cfg.balls.count, 6); // overridden
        assert_eq!(cfg.gravity.y, -70.0); // untouched by overlay
                                          // Height default still present
        assert_eq!(cfg.window.height, WindowConfig::default().height);
    }

    #[test]
    fn layered_skips_missing_layers() {
        let only = r"(balls: (count: 3))";
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(only.as_bytes()).unwrap();
        let (cfg, used, errors) =
            GameConfig::load_layered([Path::new("does/not/exist.ron"), f.path()]);
        assert_eq!(used.len(), 1);
        assert_eq!(errors.len(), 1);
        assert_eq!(cfg.balls.count, 3);
    }

    #[test]
    fn parse_autoclose_and_validate() {
        let sample = r"(window: (autoClose: 3.25))";
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample.as_bytes()).unwrap();
        let cfg = GameConfig::load_from_file(file.path()).expect("parse config");
        assert!((cfg.window.auto_close - 3.25).abs() < 1e-6);
        // negative -> warning
        let neg_sample = r"(window: (autoClose: -5.0))";
        let mut file2 = tempfile::NamedTempFile::new().unwrap();
        file2.write_all(neg_sample.as_bytes()).unwrap();
        let cfg2 = GameConfig::load_from_file(file2.path()).expect("parse config");
        assert!(
            cfg2.validate()
                .iter()
                .any(|w| w.contains("window.autoClose")),
            "expected warning for negative autoClose"
        );
    }
}
