//! Public API for the scope-recolor crate.
//!
//! This module provides the high-level API: the [`Colorizer`] pipeline, the
//! [`GridBitmapSource`] seam for grid bitmaps, and the error types.

mod colorizer;
mod error;

pub use colorizer::{Colorized, Colorizer, GridBitmapSource};
pub use error::{CaptureError, ColorizeError};
