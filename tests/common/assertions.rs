//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use scope_recolor::{Rgb, RgbImage, CANVAS_HEIGHT, CANVAS_WIDTH};

/// Assert bytes are a PNG file
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(&[137, 80, 78, 71, 13, 10, 26, 10]),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert an image has the capture geometry
pub fn assert_canvas(img: &RgbImage) {
    assert_eq!(
        (img.width(), img.height()),
        (CANVAS_WIDTH, CANVAS_HEIGHT),
        "Expected an 832x696 image"
    );
}

/// Assert one pixel's color, naming the position on failure
pub fn assert_pixel(img: &RgbImage, x: u32, y: u32, expected: Rgb) {
    assert_eq!(img.pixel(x, y), expected, "pixel ({x}, {y})");
}
