//! Wiggles a freshly bonded child so the user sees which window got bonded.

use std::iter;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::config::ShakeConfig;
use crate::{Geometry, IgnoreSet, Rect, WindowResult};

/// Runs [`run`] on a detached thread.
///
/// The handle is returned for callers that want to wait; dropping it
/// leaves the thread running. Failures, typically the window closing
/// mid-shake, are logged and otherwise ignored.
pub fn spawn<G: Geometry + 'static>(
    geometry: Arc<G>,
    ignore: Arc<IgnoreSet>,
    hwnd: usize,
    config: ShakeConfig,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        if let Err(e) = run(&*geometry, &ignore, hwnd, &config) {
            crate::log_debug!("shake 0x{hwnd:X} stopped: {e}");
        }
    })
}

/// Nudges the window right and left `count` times, then puts it back.
///
/// Each nudge is issued under an ignore mark, the same as engine-driven
/// moves. Before every nudge the window must still be where the previous
/// one left it; if something else moved it, typically a sync pass after
/// the parent moved, the shake stops and leaves the window there.
pub fn run<G: Geometry + ?Sized>(
    geometry: &G,
    ignore: &IgnoreSet,
    hwnd: usize,
    config: &ShakeConfig,
) -> WindowResult<()> {
    let origin = geometry.rect(hwnd)?;
    let pause = Duration::from_millis(config.interval_ms);
    let targets = (0..config.count)
        .flat_map(|_| [origin.x + config.amplitude, origin.x - config.amplitude])
        .chain(iter::once(origin.x));

    let mut expected = origin;
    for (i, x) in targets.enumerate() {
        if i > 0 {
            thread::sleep(pause);
        }
        let _guard = ignore.mark(hwnd);
        if geometry.rect(hwnd)? != expected {
            crate::log_debug!("shake 0x{hwnd:X} interrupted by another move");
            return Ok(());
        }
        geometry.move_to(hwnd, x, origin.y)?;
        expected = Rect { x, ..origin };
    }
    Ok(())
}
