pub mod init;

#[cfg(windows)]
pub mod bond;
#[cfg(windows)]
pub mod check_update;
#[cfg(windows)]
pub mod list;
#[cfg(windows)]
pub mod run;

/// Loads the configuration, starts logging and switches to physical pixels.
///
/// Every command that touches windows calls this first.
#[cfg(windows)]
pub fn startup() -> magnet_core::config::Config {
    let config = magnet_core::config::load();
    magnet_core::log::init(&config.logging);
    magnet_windows::dpi::enable_dpi_awareness();
    config
}

/// Returns the window's title, or its handle when it has none.
#[cfg(windows)]
pub fn window_label(hwnd: usize) -> String {
    let title = magnet_windows::Window::from_raw(hwnd).title();
    if title.is_empty() {
        format!("0x{hwnd:X}")
    } else {
        title
    }
}
