//! Synthetic settings and captures shared by the unit tests.

use std::collections::HashMap;

use crate::raster::{BitGrid, Rect, Rgb, RgbImage, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::settings::{GridImage, Layout, Settings, SettingsTables, TestPoints};

pub const TRACE: Rgb = Rgb::new(255, 255, 0);
pub const RECON: Rgb = Rgb::new(255, 0, 0);
pub const BACKGROUND: Rgb = Rgb::new(10, 10, 10);

fn named<T>(entries: &[(&str, T)]) -> Vec<(String, T)>
where
    T: Clone,
{
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

/// Three layouts in classification order: `param`, `xy`, `single`.
pub fn sample_tables() -> SettingsTables {
    SettingsTables {
        colors: named(&[
            ("background", BACKGROUND),
            ("grid-background", Rgb::new(20, 20, 40)),
            ("grid", Rgb::new(60, 60, 60)),
            ("trace", TRACE),
            ("trace-reconstruction", RECON),
            ("channel-text", Rgb::new(0, 255, 255)),
            ("menu-text", Rgb::new(255, 128, 0)),
            ("channel-background", Rgb::new(0, 40, 40)),
            ("menu-background", Rgb::new(40, 20, 0)),
            ("status", Rgb::new(200, 200, 200)),
            ("left-marker", Rgb::new(0, 200, 0)),
            ("right-marker", Rgb::new(0, 150, 0)),
            ("footer", Rgb::new(150, 150, 255)),
            ("parameters", Rgb::new(255, 0, 255)),
            ("parameters-span", Rgb::new(128, 0, 255)),
            ("xy-cursors", Rgb::new(0, 128, 255)),
        ]),
        regions: named(&[
            ("status", Rect::new(0, 0, 832, 24)),
            ("left-marker", Rect::new(140, 24, 152, 600)),
            ("right-marker", Rect::new(680, 24, 692, 600)),
            ("footer", Rect::new(0, 660, 832, 696)),
        ]),
        opt_regions: named(&[
            ("parameters", Rect::new(152, 450, 680, 640)),
            ("parameters-span", Rect::new(140, 450, 152, 640)),
            ("xy-cursors", Rect::new(152, 600, 680, 650)),
        ]),
        grids: ["param", "xy", "single"]
            .iter()
            .map(|id| {
                (
                    id.to_string(),
                    GridImage {
                        file: format!("{id}.png"),
                        description: format!("{id} grid"),
                    },
                )
            })
            .collect(),
        grid_boxes: named(&[
            ("param", vec![Rect::new(152, 40, 680, 420)]),
            ("xy", vec![Rect::new(236, 40, 596, 560)]),
            ("single", vec![Rect::new(152, 40, 680, 600)]),
        ]),
        grid_test_points: named(&[
            (
                "param",
                TestPoints {
                    white: Some(vec![(160, 430)]),
                    black: Some(vec![(152, 419), (679, 419), (400, 419)]),
                },
            ),
            (
                "xy",
                TestPoints {
                    white: Some(vec![(152, 300)]),
                    black: Some(vec![(236, 40), (595, 559), (236, 559)]),
                },
            ),
            (
                "single",
                TestPoints {
                    white: None,
                    black: Some(vec![(152, 599), (679, 599)]),
                },
            ),
        ]),
        box_detection: named(&[
            ("channel", Rect::new(4, 30, 5, 640)),
            ("menu", Rect::new(694, 30, 695, 640)),
        ]),
        layout_kinds: Vec::new(),
    }
}

pub fn sample_settings() -> Settings {
    Settings::resolve(sample_tables()).expect("sample settings resolve")
}

/// An all-white capture.
pub fn blank_capture() -> RgbImage {
    RgbImage::filled(CANVAS_WIDTH, CANVAS_HEIGHT, Rgb::WHITE)
}

fn frame(rect: Rect) -> [Rect; 4] {
    [
        Rect::new(rect.x0, rect.y0, rect.x1, rect.y0 + 1),
        Rect::new(rect.x0, rect.y1 - 1, rect.x1, rect.y1),
        Rect::new(rect.x0, rect.y0, rect.x0 + 1, rect.y1),
        Rect::new(rect.x1 - 1, rect.y0, rect.x1, rect.y1),
    ]
}

/// A capture showing only the grid box frames and the black test points of
/// `layout`.
pub fn capture_for(layout: &Layout) -> RgbImage {
    let mut img = blank_capture();
    for b in &layout.grid_boxes {
        for edge in frame(*b) {
            img.fill_rect(edge, Rgb::BLACK);
        }
    }
    for &(x, y) in layout.test_points.black.iter().flatten() {
        img.set_pixel(x, y, Rgb::BLACK);
    }
    img
}

/// Grid lines of `layout`: box frames plus a centre division each way.
pub fn grid_lines_for(layout: &Layout) -> BitGrid {
    let mut lines = BitGrid::new(CANVAS_WIDTH, CANVAS_HEIGHT);
    for b in &layout.grid_boxes {
        for edge in frame(*b) {
            lines.fill_rect(edge, true);
        }
        let cx = b.x0 + b.width() / 2;
        let cy = b.y0 + b.height() / 2;
        lines.fill_rect(Rect::new(b.x0, cy, b.x1, cy + 1), true);
        lines.fill_rect(Rect::new(cx, b.y0, cx + 1, b.y1), true);
    }
    lines
}

/// Grid bitmap image for `layout`: black lines on white.
pub fn grid_bitmap_for(layout: &Layout) -> RgbImage {
    let lines = grid_lines_for(layout);
    let mut img = blank_capture();
    img.fill_masked(&lines, Rgb::BLACK);
    img
}

pub fn sample_grids(settings: &Settings) -> HashMap<String, RgbImage> {
    settings
        .layouts()
        .iter()
        .map(|l| (l.id.clone(), grid_bitmap_for(l)))
        .collect()
}
