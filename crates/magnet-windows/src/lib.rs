#![cfg(windows)]

/// Ctrl+C handling for foreground sessions.
pub mod ctrl_c;

/// The Win32 desktop as a geometry backend for the engine.
pub mod desktop;

/// Per-monitor DPI awareness.
pub mod dpi;

/// Win32 window enumeration for the window picker.
pub mod enumerate;

/// Translation of raw WinEvents.
pub mod event;

/// The WinEvent hook thread.
pub mod event_loop;

/// Minimal WinHTTP client.
pub mod http;

/// Process name lookup.
pub mod process;

/// Engine plus native hook, ready to use.
pub mod service;

/// GitHub release check.
pub mod version_check;

/// Window type wrapping a Win32 `HWND`.
pub mod window;

pub use desktop::Desktop;
pub use enumerate::{WindowInfo, enumerate_windows};
pub use service::MagnetService;
pub use window::Window;
