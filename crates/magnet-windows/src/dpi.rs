use windows::Win32::UI::HiDpi::{
    DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2, SetProcessDpiAwarenessContext,
};

/// Declares this process as per-monitor DPI aware (V2).
///
/// Without it `GetWindowRect` and `SetWindowPos` speak virtualized
/// coordinates, and a child snapped beside a parent on a scaled monitor
/// lands in the wrong place. Call once at startup, before the hook.
pub fn enable_dpi_awareness() {
    // SAFETY: fails harmlessly if awareness is already set by a manifest.
    unsafe {
        let _ = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2);
    }
}
