//! Synthetic captures and grid bitmap directories.

use std::path::{Path, PathBuf};

use lecroy_colorize::assets::AssetLoader;
use lecroy_colorize::models::SettingsFile;
use lecroy_colorize::rendering::{encode_png, EncodeOptions};
use scope_recolor::{Layout, Rect, Rgb, RgbImage, Settings, CANVAS_HEIGHT, CANVAS_WIDTH};
use tempfile::TempDir;

/// The built-in settings, no overrides
pub fn default_settings() -> Settings {
    SettingsFile::load(&AssetLoader::new(None), None).expect("built-in settings resolve")
}

pub fn blank() -> RgbImage {
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

/// Centre division row of a grid box
pub fn center_row(rect: Rect) -> u32 {
    rect.y0 + rect.height() / 2
}

/// Centre division column of a grid box
pub fn center_column(rect: Rect) -> u32 {
    rect.x0 + rect.width() / 2
}

/// Grid bitmap for `layout`: box frames plus centre divisions, black on white
pub fn grid_bitmap_for(layout: &Layout) -> RgbImage {
    let mut img = blank();
    for b in &layout.grid_boxes {
        for edge in frame(*b) {
            img.fill_rect(edge, Rgb::BLACK);
        }
        let cy = center_row(*b);
        let cx = center_column(*b);
        img.fill_rect(Rect::new(b.x0, cy, b.x1, cy + 1), Rgb::BLACK);
        img.fill_rect(Rect::new(cx, b.y0, cx + 1, b.y1), Rgb::BLACK);
    }
    img
}

/// A capture of `layout`: its grid, plus black test points
pub fn capture_for(layout: &Layout) -> RgbImage {
    let mut img = grid_bitmap_for(layout);
    for &(x, y) in layout.test_points.black.iter().flatten() {
        img.set_pixel(x, y, Rgb::BLACK);
    }
    img
}

/// Draw a vertical trace through the first grid box of `layout`, crossing
/// its centre row, at a column clear of the grid lines. Returns the column.
pub fn add_vertical_trace(img: &mut RgbImage, layout: &Layout) -> u32 {
    let b = layout.grid_boxes[0];
    let x = b.x0 + b.width() / 4 + 1;
    let cy = center_row(b);
    img.fill_rect(Rect::new(x, cy - 20, x + 1, cy + 20), Rgb::BLACK);
    x
}

pub fn write_png(path: &Path, img: &RgbImage) {
    let bytes = encode_png(img, EncodeOptions::default()).expect("encode png");
    std::fs::write(path, bytes).expect("write png");
}

/// A temporary data directory holding a grid bitmap for every layout
pub struct DataDir {
    pub dir: TempDir,
}

impl DataDir {
    pub fn new(settings: &Settings) -> Self {
        let dir = TempDir::new().expect("tempdir");
        for layout in settings.layouts() {
            write_png(
                &dir.path().join(&layout.grid_image.file),
                &grid_bitmap_for(layout),
            );
        }
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `img` into the directory and return its path
    pub fn write_capture(&self, name: &str, img: &RgbImage) -> PathBuf {
        let path = self.dir.path().join(name);
        write_png(&path, img);
        path
    }
}
