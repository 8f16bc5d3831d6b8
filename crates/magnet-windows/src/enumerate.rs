use magnet_core::WindowResult;

use windows::Win32::Foundation::{HWND, LPARAM};
use windows::Win32::UI::WindowsAndMessaging::{EnumWindows, GetShellWindow, IsWindowVisible};
use windows::core::BOOL;

use crate::process;
use crate::window::Window;

/// Title of the desktop window, which is never a useful bond target.
const DESKTOP_TITLE: &str = "Program Manager";

/// A candidate window shown to the user when picking a parent or child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowInfo {
    pub hwnd: usize,
    pub title: String,
    pub process_name: String,
}

/// Enumerates visible top-level windows with a title, in Z-order.
///
/// Minimized windows are included: they can still be bonded and will be
/// restored when they are.
pub fn enumerate_windows() -> WindowResult<Vec<WindowInfo>> {
    let mut handles: Vec<HWND> = Vec::new();

    // SAFETY: EnumWindows runs synchronously and calls our callback once per
    // top-level window. The Vec pointer passed as LPARAM outlives the call.
    unsafe {
        EnumWindows(
            Some(enum_window_callback),
            LPARAM(&mut handles as *mut _ as isize),
        )
    }
    .map_err(std::io::Error::from)?;

    // SAFETY: GetShellWindow has no preconditions.
    let shell = unsafe { GetShellWindow() };

    Ok(handles
        .into_iter()
        .filter(|hwnd| *hwnd != shell)
        .filter_map(|hwnd| describe(Window::new(hwnd)))
        .collect())
}

fn describe(window: Window) -> Option<WindowInfo> {
    let title = window.title();
    if title.trim().is_empty() || title == DESKTOP_TITLE {
        return None;
    }
    Some(WindowInfo {
        hwnd: window.handle(),
        title,
        process_name: process::process_name(window.process_id()),
    })
}

unsafe extern "system" fn enum_window_callback(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam is the Vec<HWND> pointer from enumerate_windows().
    let handles = unsafe { &mut *(lparam.0 as *mut Vec<HWND>) };

    // SAFETY: simple state query.
    if unsafe { IsWindowVisible(hwnd).as_bool() } {
        handles.push(hwnd);
    }

    BOOL(1)
}
