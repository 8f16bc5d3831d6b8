//! Ctrl+C signal handler using `SetConsoleCtrlHandler`.

use std::sync::OnceLock;
use std::sync::mpsc::Sender;

use magnet_core::WindowResult;
use windows::Win32::System::Console::{CTRL_BREAK_EVENT, CTRL_C_EVENT, SetConsoleCtrlHandler};
use windows::core::BOOL;

/// Written once by `set_handler`, read by the callback.
static SENDER: OnceLock<Sender<()>> = OnceLock::new();

/// Registers a handler that sends `()` on `tx` for Ctrl+C and Ctrl+Break
/// instead of terminating the process.
pub fn set_handler(tx: Sender<()>) -> WindowResult<()> {
    SENDER
        .set(tx)
        .map_err(|_| std::io::Error::other("Ctrl+C handler already registered"))?;

    // SAFETY: handler is a plain extern fn that only touches SENDER.
    unsafe { SetConsoleCtrlHandler(Some(handler), true) }.map_err(std::io::Error::from)?;
    Ok(())
}

unsafe extern "system" fn handler(ctrl_type: u32) -> BOOL {
    if (ctrl_type == CTRL_C_EVENT || ctrl_type == CTRL_BREAK_EVENT)
        && let Some(tx) = SENDER.get()
    {
        let _ = tx.send(());
        return BOOL(1);
    }
    BOOL(0)
}
