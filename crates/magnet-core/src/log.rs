//! File logger with size-based rotation.
//!
//! Lines go to `~/.config/window-magnet/logs/magnet.log`. Once the file
//! grows past the configured size it is renamed to `magnet.log.1` (a single
//! backup) and a fresh file is started.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

const LOG_FILE_NAME: &str = "magnet.log";

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether file logging is enabled. Defaults to `false`.
    pub enabled: bool,
    /// Minimum log level: "debug", "info", "warn", or "error".
    pub level: String,
    /// Maximum log file size in megabytes before rotation.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
            max_file_mb: 10,
        }
    }
}

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Parses a level name; anything unrecognised means `Info`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "warn" | "warning" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

struct Logger {
    file: File,
    path: PathBuf,
    min_level: Level,
    max_bytes: u64,
    written: u64,
}

impl Logger {
    fn open(path: PathBuf, config: &LogConfig) -> Option<Self> {
        let file = open_append(&path)?;
        let written = file.metadata().map(|m| m.len()).unwrap_or(0);
        Some(Self {
            file,
            path,
            min_level: Level::from_name(&config.level),
            max_bytes: config.max_file_mb.saturating_mul(1024 * 1024),
            written,
        })
    }

    fn append(&mut self, line: &str) {
        if self.file.write_all(line.as_bytes()).is_ok() {
            self.written += line.len() as u64;
        }
        if self.max_bytes > 0 && self.written >= self.max_bytes {
            self.rotate();
        }
    }

    fn rotate(&mut self) {
        let _ = fs::rename(&self.path, backup_path(&self.path));
        if let Some(file) = open_append(&self.path) {
            self.file = file;
        }
        self.written = 0;
    }
}

/// Initialises the global logger. Call once at startup.
///
/// Does nothing if `config.enabled` is `false` or the log file cannot be
/// opened; logging is never allowed to stop the program.
pub fn init(config: &LogConfig) {
    if !config.enabled {
        return;
    }
    let Some(dir) = crate::config::config_dir() else {
        return;
    };
    let log_dir = dir.join("logs");
    if fs::create_dir_all(&log_dir).is_err() {
        return;
    }
    if let Some(logger) = Logger::open(log_dir.join(LOG_FILE_NAME), config) {
        let _ = LOGGER.set(Mutex::new(logger));
    }
}

/// Writes a log line if the level is at or above the configured minimum.
pub fn write(level: Level, args: fmt::Arguments<'_>) {
    let Some(mutex) = LOGGER.get() else {
        return;
    };
    let Ok(mut logger) = mutex.lock() else {
        return;
    };
    if level < logger.min_level {
        return;
    }
    let line = format!("{} [{}] {args}\n", timestamp(), level.label());
    logger.append(&line);
}

fn open_append(path: &Path) -> Option<File> {
    OpenOptions::new().create(true).append(true).open(path).ok()
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".1");
    PathBuf::from(name)
}

/// UTC wall-clock time of day, `HH:MM:SS`.
fn timestamp() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3600 % 24,
        secs / 60 % 60,
        secs % 60
    )
}

/// Logs at DEBUG level.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Debug, format_args!($($arg)*)) };
}

/// Logs at INFO level.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Info, format_args!($($arg)*)) };
}

/// Logs at WARN level.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Warn, format_args!($($arg)*)) };
}

/// Logs at ERROR level.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Error, format_args!($($arg)*)) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_parse_case_insensitively() {
        assert_eq!(Level::from_name("DEBUG"), Level::Debug);
        assert_eq!(Level::from_name(" warn "), Level::Warn);
        assert_eq!(Level::from_name("warning"), Level::Warn);
        assert_eq!(Level::from_name("Error"), Level::Error);
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        assert_eq!(Level::from_name("verbose"), Level::Info);
        assert_eq!(Level::from_name(""), Level::Info);
    }

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn backup_appends_suffix() {
        let path = PathBuf::from("logs").join("magnet.log");

        assert_eq!(
            backup_path(&path),
            PathBuf::from("logs").join("magnet.log.1")
        );
    }

    #[test]
    fn rotation_moves_full_file_aside() {
        // Arrange
        let dir = std::env::temp_dir().join(format!("magnet-log-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(LOG_FILE_NAME);
        let _ = fs::remove_file(&path);
        let _ = fs::remove_file(backup_path(&path));
        let config = LogConfig {
            enabled: true,
            level: "debug".into(),
            max_file_mb: 1,
        };
        let mut logger = Logger::open(path.clone(), &config).unwrap();
        logger.max_bytes = 16;

        // Act
        logger.append("0123456789abcdef-overflow\n");
        logger.append("fresh\n");

        // Assert
        let backup = fs::read_to_string(backup_path(&path)).unwrap();
        let current = fs::read_to_string(&path).unwrap();
        assert!(backup.contains("overflow"));
        assert_eq!(current, "fresh\n");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn write_without_init_is_a_noop() {
        write(Level::Error, format_args!("nobody is listening"));
    }
}
