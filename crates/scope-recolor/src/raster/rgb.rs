//! 24-bit RGB pixel values.

use std::fmt;

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// ITU-R 601-2 luma, rounded to the nearest integer.
    ///
    /// Uses 16-bit fixed point weights so that pure black and pure white map
    /// exactly to 0 and 255.
    #[inline]
    pub fn luma(self) -> u8 {
        let l = self.r as u32 * 19595 + self.g as u32 * 38470 + self.b as u32 * 7471 + 0x8000;
        (l >> 16) as u8
    }

    /// Screen blend: lightens, never darkens.
    ///
    /// Black is the identity; white saturates. Per channel:
    /// `255 - (255 - a) * (255 - b) / 255`.
    #[inline]
    pub fn screen(self, other: Rgb) -> Rgb {
        #[inline]
        fn ch(a: u8, b: u8) -> u8 {
            (255 - (255 - a as u32) * (255 - b as u32) / 255) as u8
        }
        Rgb::new(
            ch(self.r, other.r),
            ch(self.g, other.g),
            ch(self.b, other.b),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
