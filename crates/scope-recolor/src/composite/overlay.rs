//! Region color overlay.

use super::label_boxes::{detect_boxes, text_area, CHANNEL_BOX_WIDTH, MENU_BOX_WIDTH};
use crate::raster::{BitGrid, Rect, Rgb, RgbImage, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::settings::{Layout, Settings};

/// The region overlay for one capture, with the label boxes found on it.
#[derive(Debug, Clone)]
pub struct Overlay {
    /// Opaque region colors on black; screen-blended onto the capture.
    pub image: RgbImage,
    pub channel_boxes: Vec<Rect>,
    pub menu_boxes: Vec<Rect>,
}

/// Build the color overlay for `layout`.
///
/// Fills are opaque and drawn in this order, later ones winning:
/// fixed regions, the layout kind's optional regions, the trigger-delay
/// strip, the grid boxes in the trace color, then the text area of every
/// detected channel and menu label box.
///
/// `dark` is the binarized capture (`true` = black), scanned for label boxes.
pub fn build_overlay(dark: &BitGrid, layout: &Layout, settings: &Settings) -> Overlay {
    let colors = settings.colors();
    let mut image = RgbImage::filled(CANVAS_WIDTH, CANVAS_HEIGHT, Rgb::BLACK);

    for region in settings.regions() {
        image.fill_rect(region.rect, region.color);
    }
    for region in &layout.optional_regions {
        image.fill_rect(region.rect, region.color);
    }

    // Keeps the strip glued to the bottom of the lowest grid, however many
    // grids the layout stacks.
    image.fill_rect(settings.delay_strip(layout), colors.delay_strip);

    for grid_box in &layout.grid_boxes {
        image.fill_rect(*grid_box, colors.trace);
    }

    let detection = settings.box_detection();
    let channel_boxes = detect_boxes(dark, detection.channel, CHANNEL_BOX_WIDTH);
    let menu_boxes = detect_boxes(dark, detection.menu, MENU_BOX_WIDTH);

    for b in &channel_boxes {
        image.fill_rect(text_area(*b), colors.channel_text);
    }
    for b in &menu_boxes {
        image.fill_rect(text_area(*b), colors.menu_text);
    }

    Overlay {
        image,
        channel_boxes,
        menu_boxes,
    }
}
