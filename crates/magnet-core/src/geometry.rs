use crate::{Rect, WindowResult};

/// Window geometry queries and updates, keyed by raw window handle.
///
/// The platform crate implements this over Win32; tests use an in-memory
/// desktop. Handles are weak: every method must return an error (usually
/// [`MagnetError::StaleHandle`](crate::MagnetError::StaleHandle)) rather
/// than panic when the window has gone away.
pub trait Geometry: Send + Sync {
    /// Returns the window's bounding rectangle.
    fn rect(&self, hwnd: usize) -> WindowResult<Rect>;

    /// Returns whether the window is minimized (iconic).
    fn is_minimized(&self, hwnd: usize) -> WindowResult<bool>;

    /// Returns whether the window is maximized (zoomed).
    fn is_maximized(&self, hwnd: usize) -> WindowResult<bool>;

    /// Returns whether the window is visible.
    fn is_visible(&self, hwnd: usize) -> WindowResult<bool>;

    /// Moves and resizes the window without changing z-order or activating it.
    fn set_rect(&self, hwnd: usize, rect: &Rect) -> WindowResult<()>;

    /// Moves the window's top-left corner, keeping its size.
    fn move_to(&self, hwnd: usize, x: i32, y: i32) -> WindowResult<()>;

    /// Shows the window minimized.
    fn minimize(&self, hwnd: usize) -> WindowResult<()>;

    /// Restores the window to its normal (not minimized or maximized) state.
    fn restore(&self, hwnd: usize) -> WindowResult<()>;
}
