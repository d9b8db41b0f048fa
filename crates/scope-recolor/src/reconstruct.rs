//! Trace reconstruction over grid lines.
//!
//! In the 1-bit capture a trace crossing a grid line is indistinguishable
//! from the line itself, so after compositing the crossing pixels take the
//! grid color and the trace looks broken. This module recovers those pixels
//! from their neighbours:
//!
//! - a pixel of a horizontal line with ink directly above and below,
//! - a pixel of a vertical line with ink directly left and right,
//! - a pixel where a horizontal and a vertical line cross, with ink on the
//!   up-left and down-right diagonal.
//!
//! The corroborations are exclusive: a crossing is only ever recovered by the
//! diagonal test, and a line pixel only by the test across its own direction.
//! The one-pixel frame of every grid box, all four edges, is never
//! recovered.

use crate::raster::{BitGrid, Rgb, RgbImage, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::settings::Layout;

/// Pixels of `lines` that continue horizontally (a line neighbour left or right).
pub fn horizontal_lines(lines: &BitGrid) -> BitGrid {
    lines & &(&lines.shifted(1, 0) | &lines.shifted(-1, 0))
}

/// Pixels of `lines` that continue vertically (a line neighbour above or below).
pub fn vertical_lines(lines: &BitGrid) -> BitGrid {
    lines & &(&lines.shifted(0, 1) | &lines.shifted(0, -1))
}

/// Cells strictly inside a grid box frame: `[x0 + 1, x1 - 1) x [y0 + 1, y1 - 1)`.
///
/// Frames occupy the first and last row and column of the box rectangle.
pub fn box_interiors(layout: &Layout) -> BitGrid {
    let mut mask = BitGrid::new(CANVAS_WIDTH, CANVAS_HEIGHT);
    for b in &layout.grid_boxes {
        mask.fill_rect(b.inset(1, 1, 1, 1), true);
    }
    mask
}

/// Pixels to repaint as recovered trace.
///
/// `ink` is the binarized capture and `lines` the binarized grid bitmap,
/// both `true` for black.
pub fn reconstruction_mask(ink: &BitGrid, lines: &BitGrid, layout: &Layout) -> BitGrid {
    let h_grm = horizontal_lines(lines);
    let v_grm = vertical_lines(lines);

    // ink one row above and one row below
    let h_mim = &(&ink.shifted(0, 1) & &ink.shifted(0, -1)) & &h_grm.and_not(&v_grm);
    // ink one column left and one column right
    let v_mim = &(&ink.shifted(1, 0) & &ink.shifted(-1, 0)) & &v_grm.and_not(&h_grm);
    // ink on the up-left and down-right diagonal, at a crossing
    let d_mim = &(&ink.shifted(1, 1) & &ink.shifted(-1, -1)) & &(&h_grm & &v_grm);

    let recon = &(&h_mim | &v_mim) | &d_mim;
    &recon & &box_interiors(layout)
}

/// Paint recovered trace pixels onto a composited image.
///
/// Returns the number of pixels repainted.
pub fn reconstruct(
    composited: &mut RgbImage,
    lines: &BitGrid,
    ink: &BitGrid,
    layout: &Layout,
    color: Rgb,
) -> usize {
    let mask = reconstruction_mask(ink, lines, layout);
    composited.fill_masked(&mask, color);
    mask.count_ones()
}
