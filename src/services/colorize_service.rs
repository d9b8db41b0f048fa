use std::path::Path;

use scope_recolor::composite::{detect_boxes, CHANNEL_BOX_WIDTH, MENU_BOX_WIDTH};
use scope_recolor::{Colorized, Colorizer, GridBitmapSource, Rect, RgbImage, Settings};
use serde::Serialize;

use crate::error::AppError;
use crate::rendering::{decode_file, encode_png, EncodeOptions};

/// What `identify` reports for one capture
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identification {
    pub file: String,
    pub layout: String,
    pub kind: String,
    pub description: String,
    /// Channel label boxes as `[x0, y0, x1, y1]`
    pub channel_boxes: Vec<[u32; 4]>,
    /// Menu label boxes as `[x0, y0, x1, y1]`
    pub menu_boxes: Vec<[u32; 4]>,
}

fn rect_array(r: &Rect) -> [u32; 4] {
    [r.x0, r.y0, r.x1, r.y1]
}

/// Drives the core pipeline over files
pub struct ColorizeService<'a, G: GridBitmapSource> {
    colorizer: Colorizer<'a>,
    grids: G,
    encode: EncodeOptions,
}

impl<'a, G: GridBitmapSource> ColorizeService<'a, G> {
    pub fn new(settings: &'a Settings, grids: G) -> Self {
        Self {
            colorizer: Colorizer::new(settings),
            grids,
            encode: EncodeOptions::default(),
        }
    }

    /// Enable or disable trace reconstruction
    pub fn reconstruct(mut self, enabled: bool) -> Self {
        self.colorizer = self.colorizer.reconstruct(enabled);
        self
    }

    pub fn encode_options(mut self, encode: EncodeOptions) -> Self {
        self.encode = encode;
        self
    }

    /// Colorize an already decoded capture
    pub fn colorize_image(&self, capture: &RgbImage) -> Result<Colorized, AppError> {
        let result = self.colorizer.colorize(capture, &self.grids)?;
        tracing::info!(
            layout = %result.layout_id,
            description = %result.description,
            "Identified grid layout"
        );
        tracing::debug!(
            channel_boxes = result.channel_boxes.len(),
            menu_boxes = result.menu_boxes.len(),
            "Detected label boxes"
        );
        tracing::debug!(pixels = result.reconstructed, "Reconstructed trace pixels");
        Ok(result)
    }

    /// Decode `input`, colorize it and write a PNG to `output`
    pub fn colorize_file(&self, input: &Path, output: &Path) -> Result<Colorized, AppError> {
        let capture = decode_file(input)?;
        let result = self.colorize_image(&capture)?;

        let png_bytes = encode_png(&result.image, self.encode)?;
        std::fs::write(output, &png_bytes)?;
        tracing::info!(
            path = %output.display(),
            bytes = png_bytes.len(),
            optimized = self.encode.optimize,
            "Wrote colorized image"
        );
        Ok(result)
    }

    /// Pre-check and classify a capture and locate its label boxes, without
    /// touching grid bitmaps
    pub fn identify_image(&self, capture: &RgbImage) -> Result<Identification, AppError> {
        let layout = self.colorizer.classify(capture)?;
        let dark = capture.dark_mask();
        let detection = self.colorizer.settings().box_detection();
        let channel_boxes = detect_boxes(&dark, detection.channel, CHANNEL_BOX_WIDTH);
        let menu_boxes = detect_boxes(&dark, detection.menu, MENU_BOX_WIDTH);

        Ok(Identification {
            file: String::new(),
            layout: layout.id.clone(),
            kind: layout.kind.to_string(),
            description: layout.grid_image.description.clone(),
            channel_boxes: channel_boxes.iter().map(rect_array).collect(),
            menu_boxes: menu_boxes.iter().map(rect_array).collect(),
        })
    }

    pub fn identify_file(&self, input: &Path) -> Result<Identification, AppError> {
        let capture = decode_file(input)?;
        let mut id = self.identify_image(&capture)?;
        id.file = input.display().to_string();
        tracing::debug!(file = %id.file, layout = %id.layout, "Identified capture");
        Ok(id)
    }
}
