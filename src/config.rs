use crate::domain::stats::DEFAULT_STALE_AFTER_DAYS;
use crate::domain::timer::{DEFAULT_SESSION_MINUTES, MAX_SESSION_MINUTES, MIN_SESSION_MINUTES};
use crate::persistence::files::{atomic_write, read_optional};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// User settings stored in config.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial focus session length in minutes (5-60)
    pub session_minutes: u32,
    /// Days without new tasks or moods before the stale warning shows
    pub stale_after_days: u32,
    /// Log filter used when RUST_LOG is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session_minutes: DEFAULT_SESSION_MINUTES,
            stale_after_days: DEFAULT_STALE_AFTER_DAYS,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Replace out-of-range values with defaults
    fn validated(mut self) -> Self {
        if !(MIN_SESSION_MINUTES..=MAX_SESSION_MINUTES).contains(&self.session_minutes) {
            warn!(
                session_minutes = self.session_minutes,
                "configured session length out of range, using default"
            );
            self.session_minutes = DEFAULT_SESSION_MINUTES;
        }
        self
    }
}

/// Load config from config.json. A missing file gives defaults; so does a malformed one,
/// with a warning.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();

    let Some(content) = read_optional(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?
    else {
        return Ok(Config::default());
    };

    match serde_json::from_str::<Config>(&content) {
        Ok(config) => Ok(config.validated()),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "malformed config, using defaults");
            Ok(Config::default())
        }
    }
}

/// Save config to config.json
pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(config)?;
    atomic_write(path, &json).with_context(|| format!("Failed to write config: {}", path.display()))?;
    Ok(())
}
