use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Scene-side tuning: spawn budget and the launch kick that sets the root
/// body in motion at start and after a reset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayConfig {
    #[serde(default = "PlayConfig::default_max_free_bodies")]
    pub max_free_bodies: usize,
    #[serde(default = "PlayConfig::default_launch_min")]
    pub launch_min: i32,
    #[serde(default = "PlayConfig::default_launch_max")]
    pub launch_max: i32,
}

impl PlayConfig {
    fn default_max_free_bodies() -> usize {
        4
    }
    fn default_launch_min() -> i32 {
        40
    }
    fn default_launch_max() -> i32 {
        50
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            max_free_bodies: Self::default_max_free_bodies(),
            launch_min: Self::default_launch_min(),
            launch_max: Self::default_launch_max(),
        }
    }
}

/// Momentum-guard tuning. The defaults are the values the toy was tuned
/// with; raise `threshold` to kick earlier, widen the kick range for a
/// wilder root body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnergizeConfig {
    #[serde(default = "EnergizeConfig::default_threshold")]
    pub threshold: i32,
    #[serde(default = "EnergizeConfig::default_kick_min")]
    pub kick_min: i32,
    #[serde(default = "EnergizeConfig::default_kick_max")]
    pub kick_max: i32,
}

impl EnergizeConfig {
    fn default_threshold() -> i32 {
        30
    }
    fn default_kick_min() -> i32 {
        35
    }
    fn default_kick_max() -> i32 {
        50
    }
}

impl Default for EnergizeConfig {
    fn default() -> Self {
        Self {
            threshold: Self::default_threshold(),
            kick_min: Self::default_kick_min(),
            kick_max: Self::default_kick_max(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub play: PlayConfig,
    #[serde(default)]
    pub energize: EnergizeConfig,
}

impl EngineConfig {
    /// Read the config at `path`, falling back to defaults on any failure.
    /// A missing file is created with the defaults so the knobs are
    /// discoverable.
    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        warn!("failed to parse config {path}: {err}; using defaults");
                    }
                },
                Err(err) => {
                    warn!("failed to read config {path}: {err}; using defaults");
                }
            }
            return Self::default();
        }

        let default_cfg = Self::default();
        match toml::to_string_pretty(&default_cfg) {
            Ok(text) => {
                if let Err(err) = fs::write(path_obj, text) {
                    warn!("failed to write default config to {path}: {err}");
                }
            }
            Err(err) => warn!("failed to serialize default config: {err}"),
        }
        default_cfg
    }
}
