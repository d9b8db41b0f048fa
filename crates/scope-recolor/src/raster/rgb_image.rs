//! Owned RGB raster.

use super::bit_grid::BitGrid;
use super::rect::Rect;
use super::rgb::Rgb;

/// A row-major 24-bit RGB image.
///
/// Pixels are stored as `[R, G, B, R, G, B, ...]`, the same layout the PNG
/// encoder and the `image` crate use, so buffers cross the crate boundary
/// without conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbImage {
    /// Create an image filled with a single color.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        let [r, g, b] = color.to_bytes();
        let n = width as usize * height as usize;
        let mut data = Vec::with_capacity(n * 3);
        for _ in 0..n {
            data.extend_from_slice(&[r, g, b]);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Wrap a raw RGB buffer.
    ///
    /// Returns `None` if `data.len() != width * height * 3`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() != width as usize * height as usize * 3 {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
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
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 3
    }

    /// Read a pixel. Panics when out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        let i = self.offset(x, y);
        Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        let i = self.offset(x, y);
        self.data[i..i + 3].copy_from_slice(&color.to_bytes());
    }

    pub fn pixels(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.data.chunks_exact(3).map(|p| Rgb::new(p[0], p[1], p[2]))
    }

    /// Opaque fill of `rect`, clipped to the image.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        let r = rect.clip(self.width, self.height);
        let bytes = color.to_bytes();
        for y in r.y0..r.y1 {
            let start = self.offset(r.x0, y);
            let end = self.offset(r.x1, y);
            for px in self.data[start..end].chunks_exact_mut(3) {
                px.copy_from_slice(&bytes);
            }
        }
    }

    /// Paint `color` on every pixel where `mask` is set.
    pub fn fill_masked(&mut self, mask: &BitGrid, color: Rgb) {
        assert_eq!(
            (mask.width(), mask.height()),
            (self.width, self.height),
            "mask dimensions differ"
        );
        let bytes = color.to_bytes();
        for (px, &set) in self.data.chunks_exact_mut(3).zip(mask.as_slice()) {
            if set {
                px.copy_from_slice(&bytes);
            }
        }
    }

    /// Per-channel screen blend of `overlay` onto `self`.
    pub fn screen(&mut self, overlay: &RgbImage) {
        assert_eq!(
            (overlay.width, overlay.height),
            (self.width, self.height),
            "image dimensions differ"
        );
        for (a, b) in self
            .data
            .chunks_exact_mut(3)
            .zip(overlay.data.chunks_exact(3))
        {
            let out = Rgb::new(a[0], a[1], a[2]).screen(Rgb::new(b[0], b[1], b[2]));
            a.copy_from_slice(&out.to_bytes());
        }
    }

    /// Take pixels from `self` where `mask` is set, from `other` elsewhere.
    pub fn select(&self, other: &RgbImage, mask: &BitGrid) -> RgbImage {
        assert_eq!(
            (other.width, other.height),
            (self.width, self.height),
            "image dimensions differ"
        );
        assert_eq!(
            (mask.width(), mask.height()),
            (self.width, self.height),
            "mask dimensions differ"
        );
        let data = self
            .data
            .chunks_exact(3)
            .zip(other.data.chunks_exact(3))
            .zip(mask.as_slice())
            .flat_map(|((a, b), &set)| {
                let px = if set { a } else { b };
                [px[0], px[1], px[2]]
            })
            .collect();
        RgbImage {
            width: self.width,
            height: self.height,
            data,
        }
    }

    /// Binarize by luma: `true` where the pixel is black (luma < 128).
    pub fn dark_mask(&self) -> BitGrid {
        let bits = self.pixels().map(|p| p.luma() < 128).collect();
        BitGrid::from_vec(self.width, self.height, bits)
    }

    /// Count pixels per luma level.
    pub fn luma_histogram(&self) -> [u32; 256] {
        let mut hist = [0u32; 256];
        for p in self.pixels() {
            hist[p.luma() as usize] += 1;
        }
        hist
    }
}
