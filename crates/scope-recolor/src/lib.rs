//! scope-recolor: colorize LeCroy 93xx oscilloscope screen captures
//!
//! The 93xx family saves its screen as a 1-bit, 832x696 bitmap: traces, grid
//! and menus all in the same black. This crate turns such a capture into a
//! color image where each part of the screen is recognisable.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::collections::HashMap;
//! use scope_recolor::{Colorizer, RgbImage, Settings, SettingsTables};
//!
//! # fn run(tables: SettingsTables, capture: RgbImage, grids: HashMap<String, RgbImage>)
//! # -> Result<(), Box<dyn std::error::Error>> {
//! let settings = Settings::resolve(tables)?;
//! let result = Colorizer::new(&settings).colorize(&capture, &grids)?;
//! assert_eq!(result.image.width(), 832);
//! # Ok(())
//! # }
//! ```
//!
//! # Pipeline
//!
//! ```text
//! capture (RGB, black and white only)
//!     |
//!     v
//! [Pre-check]          832x696, luma histogram only at 0 and 255
//!     |
//!     v
//! [Classify]           first layout whose test points all hold
//!     |
//!     +---> overlay     region colors, delay strip, grid boxes,
//!     |                 detected channel/menu label text areas
//!     +---> background  flat colors + grid lines from the grid bitmap
//!     |
//!     v
//! [Merge]              screen(capture, overlay) where ink and not grid,
//!     |                background elsewhere
//!     v
//! [Reconstruct]        recover trace pixels hidden by grid lines (optional)
//!     |
//!     v
//! colorized image
//! ```
//!
//! # Settings
//!
//! Region names, colors, layouts and their signatures are data, supplied as
//! [`SettingsTables`] and validated once by [`Settings::resolve`]. Layout
//! families are the closed [`LayoutKind`] set; the kind decides which
//! optional regions are drawn and how tall the trigger-delay strip is.
//!
//! # Masks
//!
//! All per-pixel selection is done with [`BitGrid`], a boolean raster with
//! zero-filling one-pixel shifts and `&`, `|`, `!` operators.

pub mod api;
pub mod classify;
pub mod composite;
pub mod raster;
pub mod reconstruct;
pub mod settings;

#[cfg(test)]
mod testing;

pub use api::{CaptureError, Colorized, ColorizeError, Colorizer, GridBitmapSource};
pub use raster::{BitGrid, Rect, Rgb, RgbImage, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use settings::{
    BoxDetection, ColorScheme, GridImage, Layout, LayoutKind, ParseColorError, Region, Settings,
    SettingsError, SettingsTables, TestPoints,
};
