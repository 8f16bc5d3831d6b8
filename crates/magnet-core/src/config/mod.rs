mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;

pub use loader::{config_dir, config_path, load, try_load};

/// Top-level configuration for WindowMagnet.
///
/// Loaded from `~/.config/window-magnet/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Child placement and bonding feedback.
    pub bond: BondConfig,
    /// File logging.
    pub logging: LogConfig,
    /// Release check on startup.
    pub updates: UpdateConfig,
}

/// Child placement settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BondConfig {
    /// Gap in pixels between a parent's right edge and its children.
    pub gap: i32,
    /// The nudge played on a child right after it is bonded.
    pub shake: ShakeConfig,
}

/// Shake feedback settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShakeConfig {
    pub enabled: bool,
    /// Horizontal nudge distance in pixels.
    pub amplitude: i32,
    /// Number of right/left cycles.
    pub count: u32,
    /// Pause between nudges in milliseconds.
    pub interval_ms: u64,
}

/// Release check settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateConfig {
    /// Whether `magnet run` asks GitHub for a newer release.
    pub check: bool,
}

impl Default for BondConfig {
    fn default() -> Self {
        Self {
            gap: 10,
            shake: ShakeConfig::default(),
        }
    }
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            amplitude: 5,
            count: 3,
            interval_ms: 50,
        }
    }
}

impl ShakeConfig {
    /// A shake that never runs.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self { check: true }
    }
}

impl Config {
    /// Clamps values to safe ranges.
    pub fn validate(&mut self) {
        self.bond.gap = self.bond.gap.clamp(0, 200);
        self.bond.shake.amplitude = self.bond.shake.amplitude.clamp(0, 50);
        self.bond.shake.count = self.bond.shake.count.min(10);
        self.bond.shake.interval_ms = self.bond.shake.interval_ms.min(1000);
    }
}
