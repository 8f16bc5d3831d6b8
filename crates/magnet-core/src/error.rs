use std::path::PathBuf;

/// Errors produced by the bonding engine and its platform backends.
///
/// None of these are fatal: engine call sites log them and move on, so a
/// bond is at worst out of sync until the next geometry notification.
#[derive(Debug, thiserror::Error)]
pub enum MagnetError {
    /// The window behind this handle has been closed.
    #[error("window 0x{0:X} no longer exists")]
    StaleHandle(usize),

    /// Reading a window's rectangle or state failed.
    #[error("failed to query window 0x{hwnd:X}: {message}")]
    Query { hwnd: usize, message: String },

    /// Moving, resizing, minimizing or restoring a window failed.
    #[error("failed to update window 0x{hwnd:X}: {message}")]
    Update { hwnd: usize, message: String },

    /// The OS refused the window event hook.
    #[error("failed to register the window event hook")]
    HookRegistration,

    /// The hook thread exited before it reported readiness.
    #[error("event loop failed: {0}")]
    EventLoop(String),

    /// A configuration file exists but could not be parsed.
    #[error("{}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl MagnetError {
    /// Returns whether this error only says the window went away.
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::StaleHandle(_))
    }
}

/// Result alias used across window and engine operations.
pub type WindowResult<T> = Result<T, MagnetError>;
