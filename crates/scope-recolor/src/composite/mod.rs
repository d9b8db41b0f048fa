//! Region compositing
//!
//! Colorizes a classified capture in three layers:
//!
//! ```text
//! capture --screen--> overlay (region colors, label text areas)
//!                        |
//!                        | where ink and not grid line
//!                        v
//! background ---------> merged image
//! (flat colors, grid/label backgrounds, grid lines)
//! ```
//!
//! The screen blend lightens black ink to the region color and leaves the
//! white paper white; the merge then replaces everything that is not ink
//! (including ink that lies on a grid line) with the background.

mod background;
mod label_boxes;
mod overlay;

pub use background::build_background;
pub use label_boxes::{
    detect_boxes, find_box_edges, text_area, CHANNEL_BOX_WIDTH, MENU_BOX_WIDTH, MIN_EDGE_RUN,
};
pub use overlay::{build_overlay, Overlay};

use crate::raster::{BitGrid, RgbImage};

/// Ink that is not part of the grid: where the original pixels show through.
///
/// Both masks use `true` for black in their source bitmaps.
pub fn ink_mask(ink: &BitGrid, grid_lines: &BitGrid) -> BitGrid {
    ink.and_not(grid_lines)
}

/// Screen `overlay` onto `capture`, then keep it only where `ol_mask` is set
/// and take `background` everywhere else.
pub fn merge(
    capture: &RgbImage,
    overlay: &RgbImage,
    background: &RgbImage,
    ol_mask: &BitGrid,
) -> RgbImage {
    let mut screened = capture.clone();
    screened.screen(overlay);
    screened.select(background, ol_mask)
}
