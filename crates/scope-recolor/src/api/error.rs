//! Error types for the colorize pipeline.

use std::fmt;

/// Why a capture was rejected before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// The capture is not 832x696
    WrongDimensions { width: u32, height: u32 },
    /// The capture contains a luma level other than 0 and 255
    NotBinary {
        /// First offending luma level
        level: u8,
        /// Number of pixels at that level
        count: u32,
    },
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::WrongDimensions { width, height } => write!(
                f,
                "capture is {}x{}, expected {}x{}",
                width,
                height,
                crate::CANVAS_WIDTH,
                crate::CANVAS_HEIGHT
            ),
            CaptureError::NotBinary { level, count } => write!(
                f,
                "capture is not black and white: {} pixel(s) at gray level {}",
                count, level
            ),
        }
    }
}

impl std::error::Error for CaptureError {}

/// Unified error type for [`Colorizer`](crate::Colorizer).
///
/// Every variant is fatal for the call; no partial image is produced.
#[derive(Debug)]
pub enum ColorizeError {
    /// The input failed the pre-check
    InvalidCapture(CaptureError),
    /// No registered layout's test points matched
    UnidentifiableLayout,
    /// The grid bitmap source failed for this layout
    GridBitmap {
        layout: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The grid bitmap has the wrong size
    GridBitmapDimensions {
        layout: String,
        width: u32,
        height: u32,
    },
}

impl fmt::Display for ColorizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorizeError::InvalidCapture(err) => write!(f, "invalid capture: {}", err),
            ColorizeError::UnidentifiableLayout => {
                write!(f, "capture does not match any known grid layout")
            }
            ColorizeError::GridBitmap { layout, source } => {
                write!(f, "grid bitmap for layout '{}': {}", layout, source)
            }
            ColorizeError::GridBitmapDimensions {
                layout,
                width,
                height,
            } => write!(
                f,
                "grid bitmap for layout '{}' is {}x{}, expected {}x{}",
                layout,
                width,
                height,
                crate::CANVAS_WIDTH,
                crate::CANVAS_HEIGHT
            ),
        }
    }
}

impl std::error::Error for ColorizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ColorizeError::InvalidCapture(err) => Some(err),
            ColorizeError::GridBitmap { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<CaptureError> for ColorizeError {
    fn from(err: CaptureError) -> Self {
        ColorizeError::InvalidCapture(err)
    }
}
