//! Engine and session configuration, persisted as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::input::KeyBindings;

/// Timing windows, scheduling bounds, and point values.
///
/// The defaults reproduce the reference behavior: 150/50ms hit and perfect
/// windows, 1000ms look-ahead, 500ms late admit, a 2000ms fall with 300ms
/// grace, and 100/50 point values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Tolerance around the scheduled time within which a press hits.
    pub hit_window_ms: f64,
    /// Inner window classifying a hit as Perfect.
    pub perfect_window_ms: f64,
    /// How early a note is instantiated before its scheduled time.
    pub look_ahead_ms: f64,
    /// How far past its scheduled time a note may still be instantiated.
    pub late_admit_ms: f64,
    /// Fall animation duration; judgement survives this long past schedule.
    pub fall_ms: f64,
    /// Extra slack past the fall before an unmatched note expires.
    pub expire_grace_ms: f64,
    pub perfect_points: u32,
    pub good_points: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hit_window_ms: 150.0,
            perfect_window_ms: 50.0,
            look_ahead_ms: 1000.0,
            late_admit_ms: 500.0,
            fall_ms: 2000.0,
            expire_grace_ms: 300.0,
            perfect_points: 100,
            good_points: 50,
        }
    }
}

/// Host-side options persisted alongside the engine tuning.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionOptions {
    pub engine: EngineConfig,
    pub bindings: KeyBindings,
    /// Endpoint the final summary is posted to, if any.
    pub results_url: Option<String>,
}

impl SessionOptions {
    /// Loads options from the default config path.
    /// Returns defaults if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path())
    }

    /// Loads options from a specified path.
    /// Returns defaults if the file doesn't exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        let options = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config at {}", path.display()))?;
        Ok(options)
    }

    /// Saves options to the default config path.
    pub fn save(&self) -> Result<()> {
        self.save_to(Self::default_path())
    }

    /// Saves options to a specified path, creating parent directories.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        Ok(())
    }

    fn default_path() -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("com", "notebeat", "notebeat") {
            proj_dirs.config_dir().join("options.json")
        } else {
            PathBuf::from(".notebeat-options.json")
        }
    }
}
