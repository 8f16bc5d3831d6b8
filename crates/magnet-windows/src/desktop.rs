use magnet_core::{Geometry, Rect, WindowResult};

use crate::window::Window;

/// The live Win32 desktop, addressed by raw window handle.
///
/// State queries check the handle first so a closed window reports
/// `StaleHandle` rather than a misleading `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Desktop;

impl Desktop {
    fn live(hwnd: usize) -> WindowResult<Window> {
        let window = Window::from_raw(hwnd);
        window.ensure_exists()?;
        Ok(window)
    }
}

impl Geometry for Desktop {
    fn rect(&self, hwnd: usize) -> WindowResult<Rect> {
        Window::from_raw(hwnd).rect()
    }

    fn is_minimized(&self, hwnd: usize) -> WindowResult<bool> {
        Ok(Self::live(hwnd)?.is_minimized())
    }

    fn is_maximized(&self, hwnd: usize) -> WindowResult<bool> {
        Ok(Self::live(hwnd)?.is_maximized())
    }

    fn is_visible(&self, hwnd: usize) -> WindowResult<bool> {
        Ok(Self::live(hwnd)?.is_visible())
    }

    fn set_rect(&self, hwnd: usize, rect: &Rect) -> WindowResult<()> {
        Window::from_raw(hwnd).set_rect(rect)
    }

    fn move_to(&self, hwnd: usize, x: i32, y: i32) -> WindowResult<()> {
        Window::from_raw(hwnd).move_to(x, y)
    }

    fn minimize(&self, hwnd: usize) -> WindowResult<()> {
        Window::from_raw(hwnd).minimize()
    }

    fn restore(&self, hwnd: usize) -> WindowResult<()> {
        Window::from_raw(hwnd).restore()
    }
}
