//! Error types for settings resolution
//!
//! This module provides error types for color parsing and settings validation.

use std::fmt;
use std::num::ParseIntError;

use crate::raster::Rect;

/// Error type for parsing color strings.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 digits after '#')
    InvalidLength,
    /// Invalid hexadecimal or decimal digit encountered
    InvalidNumber(ParseIntError),
    /// `rgb(...)` did not contain exactly three components
    InvalidFunction,
    /// Not a hex string, `rgb(...)` or a known color name
    UnknownName(String),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidNumber(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3 or 6 digits)")
            }
            ParseColorError::InvalidNumber(err) => write!(f, "invalid color component: {}", err),
            ParseColorError::InvalidFunction => {
                write!(f, "rgb() needs exactly three components")
            }
            ParseColorError::UnknownName(name) => write!(f, "unknown color name '{}'", name),
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidNumber(err) => Some(err),
            _ => None,
        }
    }
}

/// Error type for settings validation.
///
/// Every variant names the table and key at fault so the caller can report
/// exactly which entry of which settings file needs fixing.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// A name referenced by the pipeline is absent from a table
    MissingKey {
        /// Table that should contain the key
        table: &'static str,
        /// The missing key
        key: String,
    },
    /// A rectangle is empty or reaches outside the canvas
    InvalidRect {
        table: &'static str,
        key: String,
        rect: Rect,
    },
    /// A layout declares no grid boxes
    EmptyGridBoxes {
        layout: String,
    },
    /// A box detection strip is not exactly one pixel wide
    InvalidScanStrip {
        name: String,
        rect: Rect,
    },
    /// A color value failed to parse
    ParseColor {
        key: String,
        err: ParseColorError,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::MissingKey { table, key } => {
                write!(f, "missing key '{}' in [{}]", key, table)
            }
            SettingsError::InvalidRect { table, key, rect } => {
                write!(
                    f,
                    "box {} for '{}' in [{}] is empty or outside the capture",
                    rect, key, table
                )
            }
            SettingsError::EmptyGridBoxes { layout } => {
                write!(f, "layout '{}' has no grid boxes", layout)
            }
            SettingsError::InvalidScanStrip { name, rect } => {
                write!(
                    f,
                    "box detection strip '{}' {} must be exactly 1 pixel wide",
                    name, rect
                )
            }
            SettingsError::ParseColor { key, err } => {
                write!(f, "invalid color for '{}': {}", key, err)
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::ParseColor { err, .. } => Some(err),
            _ => None,
        }
    }
}
