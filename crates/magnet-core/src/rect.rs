/// A rectangle representing a window's position and size in screen pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle from edge coordinates, the shape Win32 `RECT` uses.
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// X coordinate one past the right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Y coordinate one past the bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_roundtrip_through_from_edges() {
        // Arrange / Act
        let rect = Rect::from_edges(100, 50, 900, 650);

        // Assert
        assert_eq!(rect, Rect::new(100, 50, 800, 600));
        assert_eq!(rect.right(), 900);
        assert_eq!(rect.bottom(), 650);
    }
}
