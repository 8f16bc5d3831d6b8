use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::EVENT_OBJECT_LOCATIONCHANGE;

/// Object ID indicating the event applies to the window itself,
/// not a child element like a scrollbar or caret.
const OBJID_WINDOW: i32 = 0;

/// Child ID indicating the object itself rather than one of its children.
const CHILDID_SELF: i32 = 0;

/// Translates a raw WinEvent into the handle of a top-level window whose
/// geometry changed.
///
/// Returns `None` for other event types, for sub-objects (carets and
/// scrollbars fire location changes too) and for null handles.
pub fn translate(event: u32, hwnd: HWND, id_object: i32, id_child: i32) -> Option<usize> {
    if event != EVENT_OBJECT_LOCATIONCHANGE {
        return None;
    }
    if id_object != OBJID_WINDOW || id_child != CHILDID_SELF {
        return None;
    }
    let handle = hwnd.0 as usize;
    (handle != 0).then_some(handle)
}
