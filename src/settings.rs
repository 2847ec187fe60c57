//! Harness settings
//!
//! Persisted as JSON next to the binary (or wherever the caller points).
//! Loading never fails: a missing or malformed file falls back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::math::Tolerance;

/// Verification harness settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Threshold the harness uses when checking scalar results
    pub tolerance: Tolerance,

    // === Randomized sweep ===
    /// Seed for the shape generator
    pub sweep_seed: u64,
    /// Number of shape pairs to test
    pub sweep_count: usize,
    /// Shapes are sampled inside `[-extent, extent]` on both axes
    pub sweep_extent: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::DEFAULT,
            sweep_seed: 12345,
            sweep_count: 10_000,
            sweep_extent: 20.0,
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "collide2d.json";

    /// Parse settings from JSON; absent fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed settings in {}: {}", path.display(), e),
            },
            Err(e) => log::info!("No settings at {} ({}), using defaults", path.display(), e),
        }
        Self::default()
    }

    /// Save settings to `path` as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        match serde_json::to_string_pretty(self) {
            Ok(json) => match std::fs::write(path, json) {
                Ok(()) => log::info!("Settings saved to {}", path.display()),
                Err(e) => log::warn!("Failed to save settings to {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Failed to serialize settings: {}", e),
        }
    }
}
