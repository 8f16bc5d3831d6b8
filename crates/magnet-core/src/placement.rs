//! Where a bonded child goes, given its parent.

use crate::Rect;

/// Windows parks minimized windows at this coordinate. During the minimize
/// animation the rectangle can land here before `IsIconic` reports true.
pub const ICONIC_COORDINATE: i32 = -32000;

/// The parent state that decides what happens to its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentState {
    /// Children are minimized and left where they are.
    Minimized,
    /// Children are stacked exactly behind the parent.
    Maximized,
    /// Children are snapped to the parent's right side.
    Normal,
}

impl ParentState {
    /// Classifies a parent from its state flags and rectangle.
    ///
    /// The off-screen check catches minimizes the state flag has not caught
    /// up with yet.
    pub fn classify(minimized: bool, maximized: bool, rect: &Rect) -> Self {
        if minimized || rect.x <= ICONIC_COORDINATE {
            Self::Minimized
        } else if maximized {
            Self::Maximized
        } else {
            Self::Normal
        }
    }
}

/// Returns the rectangle immediately to the right of `parent`, `gap` pixels
/// away, with the same top edge and size.
pub fn beside(parent: &Rect, gap: i32) -> Rect {
    Rect::new(parent.right() + gap, parent.y, parent.width, parent.height)
}
