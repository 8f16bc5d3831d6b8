use std::collections::HashMap;
use std::sync::Mutex;

/// Windows the engine is currently driving.
///
/// Geometry calls against a child can produce location-change events for
/// that child. If the child is also a parent through another bond, those
/// events would re-enter synchronization from inside the pass that caused
/// them. Marking the child first lets the event handler drop them.
///
/// Marks are counted so that two drivers of the same window (a sync pass and
/// shake feedback) can overlap without one clearing the other's mark.
#[derive(Debug, Default)]
pub struct IgnoreSet {
    marked: Mutex<HashMap<usize, usize>>,
}

impl IgnoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `hwnd` until the returned guard is dropped.
    pub fn mark(&self, hwnd: usize) -> IgnoreGuard<'_> {
        if let Ok(mut marked) = self.marked.lock() {
            *marked.entry(hwnd).or_insert(0) += 1;
        }
        IgnoreGuard { set: self, hwnd }
    }

    pub fn contains(&self, hwnd: usize) -> bool {
        self.marked
            .lock()
            .map(|m| m.contains_key(&hwnd))
            .unwrap_or(false)
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.marked.lock().map(|m| m.is_empty()).unwrap_or(true)
    }

    fn unmark(&self, hwnd: usize) {
        let Ok(mut marked) = self.marked.lock() else {
            return;
        };
        if let Some(count) = marked.get_mut(&hwnd) {
            *count -= 1;
            if *count == 0 {
                marked.remove(&hwnd);
            }
        }
    }
}

/// Clears one mark on drop, including during unwinding.
#[must_use = "the window is unmarked as soon as the guard is dropped"]
pub struct IgnoreGuard<'a> {
    set: &'a IgnoreSet,
    hwnd: usize,
}

impl Drop for IgnoreGuard<'_> {
    fn drop(&mut self) {
        self.set.unmark(self.hwnd);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_marks_and_clears() {
        // Arrange
        let set = IgnoreSet::new();

        // Act
        let guard = set.mark(42);
        let while_held = set.contains(42);
        drop(guard);

        // Assert
        assert!(while_held);
        assert!(!set.contains(42));
        assert!(set.is_empty());
    }

    #[test]
    fn overlapping_marks_nest() {
        let set = IgnoreSet::new();

        let outer = set.mark(7);
        let inner = set.mark(7);
        drop(inner);
        assert!(set.contains(7));

        drop(outer);
        assert!(!set.contains(7));
    }

    #[test]
    fn marks_are_per_handle() {
        let set = IgnoreSet::new();

        let _a = set.mark(1);

        assert!(set.contains(1));
        assert!(!set.contains(2));
    }

    #[test]
    fn guard_clears_on_panic() {
        let set = IgnoreSet::new();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = set.mark(9);
            panic!("geometry call blew up");
        }));

        assert!(result.is_err());
        assert!(!set.contains(9));
    }
}
