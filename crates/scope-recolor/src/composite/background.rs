//! Flat background with colored grid lines.

use super::overlay::Overlay;
use crate::raster::{BitGrid, RgbImage, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::settings::{Layout, Settings};

/// Build the background that shows wherever the capture has no ink.
///
/// `grid_lines` is the layout's binarized grid bitmap (`true` = line).
pub fn build_background(
    layout: &Layout,
    overlay: &Overlay,
    grid_lines: &BitGrid,
    settings: &Settings,
) -> RgbImage {
    let colors = settings.colors();
    let mut bg = RgbImage::filled(CANVAS_WIDTH, CANVAS_HEIGHT, colors.background);

    for grid_box in &layout.grid_boxes {
        bg.fill_rect(*grid_box, colors.grid_background);
    }
    for b in &overlay.channel_boxes {
        bg.fill_rect(*b, colors.channel_background);
    }
    for b in &overlay.menu_boxes {
        bg.fill_rect(*b, colors.menu_background);
    }

    bg.fill_masked(grid_lines, colors.grid);
    bg
}
