//! Colorizer -- the entry point for the whole pipeline.
//!
//! [`Colorizer`] wires the pre-check, layout classification, region
//! compositing and trace reconstruction together for one capture at a time.

use std::collections::HashMap;

use super::error::ColorizeError;
use crate::classify::{identify, validate_capture};
use crate::composite::{build_background, build_overlay, ink_mask, merge};
use crate::raster::{Rect, RgbImage, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::reconstruct::reconstruct;
use crate::settings::{Layout, Settings};

/// Supplies the grid-line reference bitmap of a layout.
///
/// The pipeline itself does no I/O; callers decide where grid bitmaps come
/// from (a data directory, embedded assets, an in-memory table).
pub trait GridBitmapSource {
    fn load(&self, layout: &Layout) -> Result<RgbImage, Box<dyn std::error::Error + Send + Sync>>;
}

/// Grid bitmaps held in memory, keyed by layout id.
impl GridBitmapSource for HashMap<String, RgbImage> {
    fn load(&self, layout: &Layout) -> Result<RgbImage, Box<dyn std::error::Error + Send + Sync>> {
        self.get(&layout.id)
            .cloned()
            .ok_or_else(|| format!("no grid bitmap registered for '{}'", layout.id).into())
    }
}

/// Result of colorizing one capture.
#[derive(Debug, Clone)]
pub struct Colorized {
    /// The finished 832x696 image.
    pub image: RgbImage,
    /// Id of the identified layout.
    pub layout_id: String,
    /// Human-readable description of the layout.
    pub description: String,
    pub channel_boxes: Vec<Rect>,
    pub menu_boxes: Vec<Rect>,
    /// Number of pixels recovered under grid lines (0 when disabled).
    pub reconstructed: usize,
}

/// Colorizes LeCroy 93xx screen captures.
///
/// # Design
///
/// - Borrows validated [`Settings`], so no name lookups can fail mid-way
/// - Configuration methods consume and return `self`
/// - [`colorize()`](Self::colorize) takes `&self`; one colorizer serves any
///   number of captures
///
/// # Example
///
/// ```no_run
/// use std::collections::HashMap;
/// use scope_recolor::{Colorizer, RgbImage, Settings};
///
/// # fn run(settings: &Settings, capture: &RgbImage, grids: &HashMap<String, RgbImage>)
/// # -> Result<(), scope_recolor::ColorizeError> {
/// let colorizer = Colorizer::new(settings).reconstruct(false);
/// let result = colorizer.colorize(capture, grids)?;
/// println!("layout: {}", result.layout_id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Colorizer<'a> {
    settings: &'a Settings,
    reconstruct: bool,
}

impl<'a> Colorizer<'a> {
    /// Reconstruction is enabled by default.
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            reconstruct: true,
        }
    }

    /// Enable or disable trace reconstruction over grid lines.
    pub fn reconstruct(mut self, enabled: bool) -> Self {
        self.reconstruct = enabled;
        self
    }

    #[inline]
    pub fn settings(&self) -> &'a Settings {
        self.settings
    }

    /// Pre-check a capture and identify its layout.
    pub fn classify(&self, capture: &RgbImage) -> Result<&'a Layout, ColorizeError> {
        validate_capture(capture)?;
        identify(&capture.dark_mask(), self.settings.layouts())
            .ok_or(ColorizeError::UnidentifiableLayout)
    }

    /// Run the full pipeline on one capture.
    pub fn colorize(
        &self,
        capture: &RgbImage,
        grids: &(impl GridBitmapSource + ?Sized),
    ) -> Result<Colorized, ColorizeError> {
        validate_capture(capture)?;
        let ink = capture.dark_mask();
        let layout = identify(&ink, self.settings.layouts())
            .ok_or(ColorizeError::UnidentifiableLayout)?;

        let grid_bitmap = grids
            .load(layout)
            .map_err(|source| ColorizeError::GridBitmap {
                layout: layout.id.clone(),
                source,
            })?;
        if grid_bitmap.width() != CANVAS_WIDTH || grid_bitmap.height() != CANVAS_HEIGHT {
            return Err(ColorizeError::GridBitmapDimensions {
                layout: layout.id.clone(),
                width: grid_bitmap.width(),
                height: grid_bitmap.height(),
            });
        }
        let lines = grid_bitmap.dark_mask();

        let overlay = build_overlay(&ink, layout, self.settings);
        let background = build_background(layout, &overlay, &lines, self.settings);
        let mut image = merge(capture, &overlay.image, &background, &ink_mask(&ink, &lines));

        let reconstructed = if self.reconstruct {
            reconstruct(
                &mut image,
                &lines,
                &ink,
                layout,
                self.settings.colors().trace_reconstruction,
            )
        } else {
            0
        };

        Ok(Colorized {
            image,
            layout_id: layout.id.clone(),
            description: layout.grid_image.description.clone(),
            channel_boxes: overlay.channel_boxes,
            menu_boxes: overlay.menu_boxes,
            reconstructed,
        })
    }
}
