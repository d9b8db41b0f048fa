//! Fixed-size boolean raster used for all mask algebra.
//!
//! [`BitGrid`] supports one-pixel translations with zero fill and the
//! elementwise boolean operators (`&`, `|`, `!`) on references, so mask
//! expressions read like the algebra they implement:
//!
//! ```
//! use scope_recolor::BitGrid;
//!
//! let mut line = BitGrid::new(5, 1);
//! for x in 1..4 {
//!     line.set(x, 0, true);
//! }
//! let interior = &line & &(&line.shifted(-1, 0) | &line.shifted(1, 0));
//! assert_eq!(interior.count_ones(), 3);
//! ```

use std::ops::{BitAnd, BitOr, Not};

use super::rect::Rect;

/// A `width` x `height` grid of booleans in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitGrid {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl BitGrid {
    /// All-false grid.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, false)
    }

    pub fn filled(width: u32, height: u32, value: bool) -> Self {
        Self {
            width,
            height,
            bits: vec![value; width as usize * height as usize],
        }
    }

    /// Wrap a row-major vector.
    ///
    /// # Panics
    ///
    /// Panics unless `bits.len() == width * height`.
    pub fn from_vec(width: u32, height: u32, bits: Vec<bool>) -> Self {
        assert_eq!(bits.len(), width as usize * height as usize, "mask length differs");
        Self {
            width,
            height,
            bits,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Read a cell. Out-of-range coordinates read as `false`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.bits[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: bool) {
        let i = self.index(x, y);
        self.bits[i] = value;
    }

    /// Set every cell of `rect` (clipped) to `value`.
    pub fn fill_rect(&mut self, rect: Rect, value: bool) {
        let r = rect.clip(self.width, self.height);
        for y in r.y0..r.y1 {
            let start = self.index(r.x0, y);
            let end = self.index(r.x1, y);
            self.bits[start..end].fill(value);
        }
    }

    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    pub fn any(&self) -> bool {
        self.bits.iter().any(|&b| b)
    }

    /// Translate the content by `(dx, dy)`.
    ///
    /// Cell `(x, y)` of the result holds the source cell `(x - dx, y - dy)`;
    /// cells whose source falls outside the grid are `false`.
    pub fn shifted(&self, dx: i32, dy: i32) -> BitGrid {
        let mut out = BitGrid::new(self.width, self.height);
        let (w, h) = (self.width as i64, self.height as i64);
        let (dx, dy) = (dx as i64, dy as i64);

        let x_lo = dx.clamp(0, w);
        let x_hi = (w + dx).clamp(0, w);
        if x_lo >= x_hi {
            return out;
        }
        let src_x_lo = (x_lo - dx) as usize;
        let len = (x_hi - x_lo) as usize;

        for y in 0..h {
            let sy = y - dy;
            if sy < 0 || sy >= h {
                continue;
            }
            let src = (sy * w) as usize + src_x_lo;
            let dst = (y * w + x_lo) as usize;
            out.bits[dst..dst + len].copy_from_slice(&self.bits[src..src + len]);
        }
        out
    }

    fn zip_with(&self, other: &BitGrid, f: impl Fn(bool, bool) -> bool) -> BitGrid {
        assert_eq!(
            (self.width, self.height),
            (other.width, other.height),
            "mask dimensions differ"
        );
        let bits = self
            .bits
            .iter()
            .zip(&other.bits)
            .map(|(&a, &b)| f(a, b))
            .collect();
        BitGrid::from_vec(self.width, self.height, bits)
    }

    /// Cells set in `self` but not in `other`.
    pub fn and_not(&self, other: &BitGrid) -> BitGrid {
        self.zip_with(other, |a, b| a && !b)
    }
}

impl BitAnd for &BitGrid {
    type Output = BitGrid;

    fn bitand(self, rhs: &BitGrid) -> BitGrid {
        self.zip_with(rhs, |a, b| a && b)
    }
}

impl BitOr for &BitGrid {
    type Output = BitGrid;

    fn bitor(self, rhs: &BitGrid) -> BitGrid {
        self.zip_with(rhs, |a, b| a || b)
    }
}

impl Not for &BitGrid {
    type Output = BitGrid;

    fn not(self) -> BitGrid {
        let bits = self.bits.iter().map(|&b| !b).collect();
        BitGrid::from_vec(self.width, self.height, bits)
    }
}
