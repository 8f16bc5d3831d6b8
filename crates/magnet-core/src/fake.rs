//! In-memory desktop for engine tests.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use crate::placement::ICONIC_COORDINATE;
use crate::{Geometry, MagnetError, Rect, WindowResult};

/// A geometry-changing call the fake received and applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Call {
    SetRect(usize, Rect),
    MoveTo(usize, i32, i32),
    Minimize(usize),
    Restore(usize),
}

#[derive(Debug, Clone, Copy)]
struct FakeWindow {
    rect: Rect,
    /// Where `restore` puts the window back.
    normal: Rect,
    minimized: bool,
    maximized: bool,
    visible: bool,
}

type UpdateHook = Arc<dyn Fn(usize) + Send + Sync>;

#[derive(Default)]
pub(crate) struct FakeDesktop {
    windows: Mutex<HashMap<usize, FakeWindow>>,
    calls: Mutex<Vec<Call>>,
    failing_updates: Mutex<HashSet<usize>>,
    failing_queries: Mutex<HashSet<usize>>,
    hook: Mutex<Option<UpdateHook>>,
}

impl FakeDesktop {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Opens a visible, normal window.
    pub(crate) fn add(&self, hwnd: usize, rect: Rect) {
        self.windows.lock().unwrap().insert(
            hwnd,
            FakeWindow {
                rect,
                normal: rect,
                minimized: false,
                maximized: false,
                visible: true,
            },
        );
    }

    /// Closes a window; its handle goes stale.
    pub(crate) fn close(&self, hwnd: usize) {
        self.windows.lock().unwrap().remove(&hwnd);
    }

    /// Moves a window the way a user drag would, without recording a call.
    pub(crate) fn user_move(&self, hwnd: usize, rect: Rect) {
        self.with_window(hwnd, |w| {
            w.rect = rect;
            w.normal = rect;
        });
    }

    pub(crate) fn user_minimize(&self, hwnd: usize) {
        self.with_window(hwnd, |w| minimize(w));
    }

    pub(crate) fn user_maximize(&self, hwnd: usize, monitor: Rect) {
        self.with_window(hwnd, |w| {
            w.minimized = false;
            w.maximized = true;
            w.rect = monitor;
        });
    }

    pub(crate) fn user_restore(&self, hwnd: usize) {
        self.with_window(hwnd, |w| {
            w.minimized = false;
            w.maximized = false;
            w.rect = w.normal;
        });
    }

    pub(crate) fn hide(&self, hwnd: usize) {
        self.with_window(hwnd, |w| w.visible = false);
    }

    /// Parks a minimized window's rect at the iconic position while leaving
    /// the minimized flag unset, as seen mid-animation.
    pub(crate) fn park_offscreen(&self, hwnd: usize) {
        self.with_window(hwnd, |w| {
            w.rect = Rect::new(ICONIC_COORDINATE, ICONIC_COORDINATE, 160, 28);
        });
    }

    pub(crate) fn rect_of(&self, hwnd: usize) -> Rect {
        self.windows.lock().unwrap()[&hwnd].rect
    }

    pub(crate) fn minimized(&self, hwnd: usize) -> bool {
        self.windows.lock().unwrap()[&hwnd].minimized
    }

    pub(crate) fn maximized(&self, hwnd: usize) -> bool {
        self.windows.lock().unwrap()[&hwnd].maximized
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Makes every geometry update against `hwnd` fail.
    pub(crate) fn fail_updates_for(&self, hwnd: usize) {
        self.failing_updates.lock().unwrap().insert(hwnd);
    }

    /// Makes every query against `hwnd` fail.
    pub(crate) fn fail_queries_for(&self, hwnd: usize) {
        self.failing_queries.lock().unwrap().insert(hwnd);
    }

    /// Runs `f` after every applied update, on the calling thread, the way
    /// an in-context event would be delivered.
    pub(crate) fn on_update(&self, f: impl Fn(usize) + Send + Sync + 'static) {
        *self.hook.lock().unwrap() = Some(Arc::new(f));
    }

    fn with_window(&self, hwnd: usize, f: impl FnOnce(&mut FakeWindow)) {
        if let Some(w) = self.windows.lock().unwrap().get_mut(&hwnd) {
            f(w);
        }
    }

    fn query<T>(&self, hwnd: usize, f: impl FnOnce(&FakeWindow) -> T) -> WindowResult<T> {
        if self.failing_queries.lock().unwrap().contains(&hwnd) {
            return Err(MagnetError::Query {
                hwnd,
                message: "access denied".into(),
            });
        }
        let windows = self.windows.lock().unwrap();
        let window = windows.get(&hwnd).ok_or(MagnetError::StaleHandle(hwnd))?;
        Ok(f(window))
    }

    fn update(&self, hwnd: usize, call: Call, f: impl FnOnce(&mut FakeWindow)) -> WindowResult<()> {
        if self.failing_updates.lock().unwrap().contains(&hwnd) {
            return Err(MagnetError::Update {
                hwnd,
                message: "window is not responding".into(),
            });
        }
        {
            let mut windows = self.windows.lock().unwrap();
            let window = windows
                .get_mut(&hwnd)
                .ok_or(MagnetError::StaleHandle(hwnd))?;
            f(window);
        }
        self.calls.lock().unwrap().push(call);

        let hook = self.hook.lock().unwrap().clone();
        if let Some(hook) = hook {
            hook(hwnd);
        }
        Ok(())
    }
}

fn minimize(w: &mut FakeWindow) {
    if !w.minimized {
        w.minimized = true;
        w.rect = Rect::new(ICONIC_COORDINATE, ICONIC_COORDINATE, 160, 28);
    }
}

impl Geometry for FakeDesktop {
    fn rect(&self, hwnd: usize) -> WindowResult<Rect> {
        self.query(hwnd, |w| w.rect)
    }

    fn is_minimized(&self, hwnd: usize) -> WindowResult<bool> {
        self.query(hwnd, |w| w.minimized)
    }

    fn is_maximized(&self, hwnd: usize) -> WindowResult<bool> {
        self.query(hwnd, |w| w.maximized)
    }

    fn is_visible(&self, hwnd: usize) -> WindowResult<bool> {
        self.query(hwnd, |w| w.visible)
    }

    fn set_rect(&self, hwnd: usize, rect: &Rect) -> WindowResult<()> {
        let rect = *rect;
        self.update(hwnd, Call::SetRect(hwnd, rect), |w| {
            w.rect = rect;
            w.normal = rect;
        })
    }

    fn move_to(&self, hwnd: usize, x: i32, y: i32) -> WindowResult<()> {
        self.update(hwnd, Call::MoveTo(hwnd, x, y), |w| {
            w.rect.x = x;
            w.rect.y = y;
            w.normal = w.rect;
        })
    }

    fn minimize(&self, hwnd: usize) -> WindowResult<()> {
        self.update(hwnd, Call::Minimize(hwnd), minimize)
    }

    fn restore(&self, hwnd: usize) -> WindowResult<()> {
        self.update(hwnd, Call::Restore(hwnd), |w| {
            w.minimized = false;
            w.maximized = false;
            w.rect = w.normal;
        })
    }
}
