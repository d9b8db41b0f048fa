//! Channel and menu label box detection.
//!
//! The number of channel labels and menu entries on screen depends on what
//! was active when the capture was taken, so their boxes cannot be looked up.
//! Each label box has a solid vertical edge; scanning a one-pixel column
//! through those edges finds one long dark run per box.

use crate::raster::{BitGrid, Rect};

/// Dark runs must be longer than this to count as a box edge.
pub const MIN_EDGE_RUN: u32 = 20;

/// Width of a channel label box.
pub const CHANNEL_BOX_WIDTH: u32 = 126;

/// Width of a menu label box.
pub const MENU_BOX_WIDTH: u32 = 136;

/// Find box edges in a column of binarized pixel values.
///
/// Returns the half-open `(start, end)` index ranges of every maximal run of
/// zeros longer than [`MIN_EDGE_RUN`]. A run that reaches the end of the
/// column counts.
///
/// # Example
/// ```
/// use scope_recolor::composite::find_box_edges;
///
/// let mut column = vec![255u8; 60];
/// column[10..31].fill(0);
/// assert_eq!(find_box_edges(&column), vec![(10, 31)]);
/// ```
pub fn find_box_edges(column: &[u8]) -> Vec<(u32, u32)> {
    let mut edges = Vec::new();
    let mut run_start: Option<usize> = None;

    for (i, &v) in column.iter().enumerate() {
        match (v == 0, run_start) {
            (true, None) => run_start = Some(i),
            (false, Some(start)) => {
                if i - start > MIN_EDGE_RUN as usize {
                    edges.push((start as u32, i as u32));
                }
                run_start = None;
            }
            _ => {}
        }
    }
    if let Some(start) = run_start {
        if column.len() - start > MIN_EDGE_RUN as usize {
            edges.push((start as u32, column.len() as u32));
        }
    }
    edges
}

/// Sample a one-pixel-wide strip of the binarized capture as 0/255 values.
fn sample_strip(dark: &BitGrid, strip: Rect) -> Vec<u8> {
    (strip.y0..strip.y1)
        .map(|y| if dark.get(strip.x0, y) { 0 } else { 255 })
        .collect()
}

/// Locate label boxes along `strip`.
///
/// Each box starts one pixel right of the scan column, is `box_width` wide
/// and spans the rows of its edge run.
pub fn detect_boxes(dark: &BitGrid, strip: Rect, box_width: u32) -> Vec<Rect> {
    let x0 = strip.x0 + 1;
    find_box_edges(&sample_strip(dark, strip))
        .into_iter()
        .map(|(start, end)| Rect::new(x0, strip.y0 + start, x0 + box_width, strip.y0 + end))
        .collect()
}

/// The text area inside a label box, below its title row.
pub fn text_area(label_box: Rect) -> Rect {
    label_box.inset(1, 12, 1, 1)
}
