use std::cell::RefCell;
use std::sync::mpsc;
use std::thread;

use magnet_core::{MagnetError, WindowResult, log_debug, log_info};
use windows::Win32::Foundation::{HWND, LPARAM, WPARAM};
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::Accessibility::{HWINEVENTHOOK, SetWinEventHook, UnhookWinEvent};
use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, EVENT_OBJECT_LOCATIONCHANGE, GetMessageW, MSG, PostThreadMessageW,
    TranslateMessage, WINEVENT_OUTOFCONTEXT, WINEVENT_SKIPOWNPROCESS, WM_QUIT,
};

use crate::event;

type Handler = Box<dyn Fn(usize)>;

// Thread-local handler for the WinEvent callback. Out-of-context events are
// delivered on the thread that installed the hook, inside its message pump.
thread_local! {
    static HANDLER: RefCell<Option<Handler>> = const { RefCell::new(None) };
}

/// Starts the WinEvent hook on a new thread.
///
/// `handler` runs on the hook thread for every location change of a
/// top-level window in another process. It is called with only a shared
/// borrow held, so a nested delivery while the handler is moving windows
/// is fine.
pub fn start<F>(handler: F) -> WindowResult<EventLoopHandle>
where
    F: Fn(usize) + Send + 'static,
{
    let (ready_tx, ready_rx) = mpsc::channel::<WindowResult<u32>>();

    let handle = thread::spawn(move || {
        HANDLER.with(|cell| {
            *cell.borrow_mut() = Some(Box::new(handler));
        });

        // SAFETY: GetCurrentThreadId has no preconditions.
        let thread_id = unsafe { GetCurrentThreadId() };

        // SAFETY: SetWinEventHook registers our callback for system-wide
        // location changes. WINEVENT_OUTOFCONTEXT delivers them through this
        // thread's message queue. WINEVENT_SKIPOWNPROCESS ignores our own
        // console window.
        let hook = unsafe {
            SetWinEventHook(
                EVENT_OBJECT_LOCATIONCHANGE,
                EVENT_OBJECT_LOCATIONCHANGE,
                None,
                Some(win_event_proc),
                0,
                0,
                WINEVENT_OUTOFCONTEXT | WINEVENT_SKIPOWNPROCESS,
            )
        };

        if hook.is_invalid() {
            let _ = ready_tx.send(Err(MagnetError::HookRegistration));
            return;
        }

        let _ = ready_tx.send(Ok(thread_id));
        log_info!("location hook installed on thread {thread_id}");

        run_message_pump();

        // SAFETY: the hook was installed above and is released once.
        unsafe {
            let _ = UnhookWinEvent(hook);
        }
        HANDLER.with(|cell| cell.borrow_mut().take());
        log_debug!("location hook removed");
    });

    let thread_id = ready_rx
        .recv()
        .map_err(|_| MagnetError::EventLoop("hook thread exited unexpectedly".into()))??;

    Ok(EventLoopHandle { thread_id, handle })
}

/// Handle for stopping the hook thread.
pub struct EventLoopHandle {
    thread_id: u32,
    handle: thread::JoinHandle<()>,
}

impl EventLoopHandle {
    /// Signals the hook thread to stop and waits for it to unhook.
    pub fn stop(self) {
        // SAFETY: posting WM_QUIT to a thread we own.
        unsafe {
            let _ = PostThreadMessageW(self.thread_id, WM_QUIT, WPARAM(0), LPARAM(0));
        }
        let _ = self.handle.join();
    }
}

/// Blocks until WM_QUIT, dispatching queued messages. WinEvent callbacks
/// fire from inside `GetMessageW`.
fn run_message_pump() {
    let mut msg = MSG::default();

    while unsafe { GetMessageW(&mut msg, None, 0, 0).as_bool() } {
        unsafe {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}

/// The WinEvent callback.
unsafe extern "system" fn win_event_proc(
    _hook: HWINEVENTHOOK,
    event: u32,
    hwnd: HWND,
    id_object: i32,
    id_child: i32,
    _event_thread: u32,
    _event_time: u32,
) {
    if let Some(handle) = event::translate(event, hwnd, id_object, id_child) {
        HANDLER.with(|cell| {
            if let Some(handler) = cell.borrow().as_ref() {
                handler(handle);
            }
        });
    }
}
