//! Raster primitives: pixels, rectangles, RGB images and boolean masks.
//!
//! Every image the pipeline touches shares one fixed canvas geometry,
//! [`CANVAS_WIDTH`] x [`CANVAS_HEIGHT`], the size of a LeCroy 93xx screen
//! capture.

mod bit_grid;
mod rect;
mod rgb;
mod rgb_image;

pub use bit_grid::BitGrid;
pub use rect::Rect;
pub use rgb::Rgb;
pub use rgb_image::RgbImage;

/// Capture width in pixels.
pub const CANVAS_WIDTH: u32 = 832;

/// Capture height in pixels.
pub const CANVAS_HEIGHT: u32 = 696;
