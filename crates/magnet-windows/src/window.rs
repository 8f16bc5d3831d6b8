use magnet_core::{MagnetError, Rect, WindowResult};

use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::UI::WindowsAndMessaging::{
    GetWindowRect, GetWindowTextLengthW, GetWindowTextW, GetWindowThreadProcessId, IsIconic,
    IsWindow, IsWindowVisible, IsZoomed, SW_MINIMIZE, SW_RESTORE, SWP_NOACTIVATE, SWP_NOSIZE,
    SWP_NOZORDER, SetWindowPos, ShowWindow,
};

/// A window on the Windows platform, wrapping a Win32 `HWND`.
///
/// `HWND` is an opaque handle: the window can close at any moment and the
/// handle then goes stale. Methods that touch the window check for that
/// first and report [`MagnetError::StaleHandle`] instead of calling Win32
/// with a dead handle.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    hwnd: HWND,
}

impl Window {
    /// Creates a new `Window` from a raw `HWND`.
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    /// Creates a new `Window` from a raw handle value (pointer-sized integer).
    pub fn from_raw(handle: usize) -> Self {
        Self {
            hwnd: HWND(handle as *mut _),
        }
    }

    /// Returns the handle as the integer the engine keys bonds by.
    pub fn handle(&self) -> usize {
        self.hwnd.0 as usize
    }

    /// Returns whether the handle still names an existing window.
    pub fn exists(&self) -> bool {
        // SAFETY: IsWindow accepts any value, including stale handles.
        unsafe { IsWindow(Some(self.hwnd)).as_bool() }
    }

    /// Errors with `StaleHandle` if the window has been closed.
    pub fn ensure_exists(&self) -> WindowResult<()> {
        if self.exists() {
            Ok(())
        } else {
            Err(MagnetError::StaleHandle(self.handle()))
        }
    }

    /// Returns the window title, empty if it has none.
    pub fn title(&self) -> String {
        // SAFETY: both calls only read the window text.
        unsafe {
            let length = GetWindowTextLengthW(self.hwnd);
            if length <= 0 {
                return String::new();
            }
            let mut buffer = vec![0u16; length as usize + 1];
            let copied = GetWindowTextW(self.hwnd, &mut buffer);
            String::from_utf16_lossy(&buffer[..copied.max(0) as usize])
        }
    }

    /// Returns the ID of the process that owns the window.
    pub fn process_id(&self) -> u32 {
        let mut pid = 0u32;
        // SAFETY: GetWindowThreadProcessId writes the PID into our local.
        unsafe { GetWindowThreadProcessId(self.hwnd, Some(&mut pid)) };
        pid
    }

    /// Returns the bounding rectangle, invisible resize borders included.
    ///
    /// Parent and child are both measured this way, so matching sizes
    /// means matching on-screen frames.
    pub fn rect(&self) -> WindowResult<Rect> {
        self.ensure_exists()?;
        let mut rect = RECT::default();
        // SAFETY: GetWindowRect fills our local RECT.
        unsafe { GetWindowRect(self.hwnd, &mut rect) }.map_err(|e| MagnetError::Query {
            hwnd: self.handle(),
            message: e.message(),
        })?;
        Ok(Rect::from_edges(rect.left, rect.top, rect.right, rect.bottom))
    }

    pub fn is_minimized(&self) -> bool {
        // SAFETY: simple state query.
        unsafe { IsIconic(self.hwnd).as_bool() }
    }

    pub fn is_maximized(&self) -> bool {
        // SAFETY: simple state query.
        unsafe { IsZoomed(self.hwnd).as_bool() }
    }

    pub fn is_visible(&self) -> bool {
        // SAFETY: simple state query.
        unsafe { IsWindowVisible(self.hwnd).as_bool() }
    }

    /// Moves and resizes without touching z-order or focus.
    pub fn set_rect(&self, rect: &Rect) -> WindowResult<()> {
        self.ensure_exists()?;
        // SAFETY: SetWindowPos with a live HWND.
        unsafe {
            SetWindowPos(
                self.hwnd,
                None,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                SWP_NOZORDER | SWP_NOACTIVATE,
            )
        }
        .map_err(|e| self.update_error(e))
    }

    /// Moves the top-left corner, keeping the current size.
    pub fn move_to(&self, x: i32, y: i32) -> WindowResult<()> {
        self.ensure_exists()?;
        // SAFETY: SetWindowPos with a live HWND; cx/cy ignored under SWP_NOSIZE.
        unsafe {
            SetWindowPos(
                self.hwnd,
                None,
                x,
                y,
                0,
                0,
                SWP_NOSIZE | SWP_NOZORDER | SWP_NOACTIVATE,
            )
        }
        .map_err(|e| self.update_error(e))
    }

    pub fn minimize(&self) -> WindowResult<()> {
        self.ensure_exists()?;
        // SAFETY: ShowWindow returns the previous visibility, not an error.
        unsafe {
            let _ = ShowWindow(self.hwnd, SW_MINIMIZE);
        }
        Ok(())
    }

    pub fn restore(&self) -> WindowResult<()> {
        self.ensure_exists()?;
        // SAFETY: as above.
        unsafe {
            let _ = ShowWindow(self.hwnd, SW_RESTORE);
        }
        Ok(())
    }

    fn update_error(&self, e: windows::core::Error) -> MagnetError {
        // The window may have closed between the existence check and the call.
        if self.exists() {
            MagnetError::Update {
                hwnd: self.handle(),
                message: e.message(),
            }
        } else {
            MagnetError::StaleHandle(self.handle())
        }
    }
}
