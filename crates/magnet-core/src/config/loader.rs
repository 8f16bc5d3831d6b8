use std::io::ErrorKind;
use std::path::PathBuf;

use crate::{MagnetError, WindowResult};

use super::Config;

/// Returns the config directory: `~/.config/window-magnet/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("window-magnet"))
}

/// Returns the config file path: `~/.config/window-magnet/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Reads and parses `config.toml`, clamping values afterwards.
pub fn try_load() -> WindowResult<Config> {
    let path = config_path().ok_or_else(|| {
        MagnetError::Io(std::io::Error::new(
            ErrorKind::NotFound,
            "could not determine home directory",
        ))
    })?;
    let content = std::fs::read_to_string(&path)?;
    parse(&content).map_err(|message| MagnetError::Config { path, message })
}

/// Loads the configuration from disk, falling back to defaults.
///
/// A missing file silently yields defaults; anything else is reported on
/// stderr before falling back.
pub fn load() -> Config {
    match try_load() {
        Ok(config) => config,
        Err(MagnetError::Io(e)) if e.kind() == ErrorKind::NotFound => Config::default(),
        Err(e) => {
            eprintln!("Warning: {e}");
            Config::default()
        }
    }
}

pub(super) fn parse(content: &str) -> Result<Config, String> {
    let mut config: Config = toml::from_str(content).map_err(|e| e.to_string())?;
    config.validate();
    Ok(config)
}
