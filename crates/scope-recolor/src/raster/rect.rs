//! Axis-aligned rectangles in canvas coordinates.

use std::fmt;

/// An axis-aligned rectangle `(x0, y0, x1, y1)`, half-open on the high edges.
///
/// Used both to address a screen region and to know its pixel extent.
/// A rectangle with `x1 <= x0` or `y1 <= y0` is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl Rect {
    #[inline]
    pub const fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.x1.saturating_sub(self.x0)
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.y1.saturating_sub(self.y0)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }

    /// Shrink each edge by the given amounts. Collapses to an empty
    /// rectangle instead of underflowing.
    pub fn inset(&self, left: u32, top: u32, right: u32, bottom: u32) -> Rect {
        let x0 = self.x0.saturating_add(left);
        let y0 = self.y0.saturating_add(top);
        Rect {
            x0,
            y0,
            x1: self.x1.saturating_sub(right).max(x0),
            y1: self.y1.saturating_sub(bottom).max(y0),
        }
    }

    /// Intersect with a `width` x `height` canvas anchored at the origin.
    pub fn clip(&self, width: u32, height: u32) -> Rect {
        let x0 = self.x0.min(width);
        let y0 = self.y0.min(height);
        Rect {
            x0,
            y0,
            x1: self.x1.min(width).max(x0),
            y1: self.y1.min(height).max(y0),
        }
    }
}

impl From<[u32; 4]> for Rect {
    fn from(v: [u32; 4]) -> Self {
        Rect::new(v[0], v[1], v[2], v[3])
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x0, self.y0, self.x1, self.y1)
    }
}
