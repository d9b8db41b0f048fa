//! Screen layouts and their kinds.

use std::fmt;
use std::str::FromStr;

use crate::raster::{Rect, Rgb};

/// Grid bitmap reference for one layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridImage {
    /// File name of the grid-line bitmap, relative to the data directory.
    pub file: String,
    /// Human-readable layout description.
    pub description: String,
}

/// Classification signature of a layout.
///
/// `None` for either list means "no constraint" and is vacuously satisfied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestPoints {
    /// Coordinates that must be white (255) in the binarized capture.
    pub white: Option<Vec<(u32, u32)>>,
    /// Coordinates that must be black (0) in the binarized capture.
    pub black: Option<Vec<(u32, u32)>>,
}

/// The closed set of layout families.
///
/// Each kind carries the optional regions it draws and the height of its
/// trigger-delay strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    /// Time-domain grids only.
    Standard,
    /// Grid plus the parameter measurement table.
    Parameters,
    /// Full-height XY display.
    Xy,
    /// XY display sharing the screen with time-domain grids.
    XySplit,
}

impl LayoutKind {
    /// Infer the kind from a layout id.
    ///
    /// `param` is [`Parameters`](Self::Parameters), exactly `xy` is
    /// [`Xy`](Self::Xy), any other id starting with `xy` is
    /// [`XySplit`](Self::XySplit), everything else is
    /// [`Standard`](Self::Standard).
    pub fn infer(id: &str) -> Self {
        match id {
            "param" => LayoutKind::Parameters,
            "xy" => LayoutKind::Xy,
            s if s.starts_with("xy") => LayoutKind::XySplit,
            _ => LayoutKind::Standard,
        }
    }

    /// Names of the optional regions this kind draws, in drawing order.
    pub fn optional_regions(self) -> &'static [&'static str] {
        match self {
            LayoutKind::Standard => &[],
            LayoutKind::Parameters => &["parameters", "parameters-span"],
            LayoutKind::Xy | LayoutKind::XySplit => &["xy-cursors"],
        }
    }

    /// Height of the trigger-delay strip below the lowest grid box.
    pub fn delay_strip_height(self) -> u32 {
        match self {
            LayoutKind::Xy => 35,
            _ => 25,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LayoutKind::Standard => "standard",
            LayoutKind::Parameters => "parameters",
            LayoutKind::Xy => "xy",
            LayoutKind::XySplit => "xy-split",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(LayoutKind::Standard),
            "parameters" => Ok(LayoutKind::Parameters),
            "xy" => Ok(LayoutKind::Xy),
            "xy-split" => Ok(LayoutKind::XySplit),
            other => Err(format!(
                "unknown layout kind '{other}' (expected standard, parameters, xy or xy-split)"
            )),
        }
    }
}

/// A named rectangle with its resolved fill color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub name: String,
    pub rect: Rect,
    pub color: Rgb,
}

/// A fully resolved layout, ready for compositing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub id: String,
    pub kind: LayoutKind,
    pub grid_image: GridImage,
    /// Plottable grid cells, in declaration order.
    pub grid_boxes: Vec<Rect>,
    pub test_points: TestPoints,
    /// The kind's optional regions with their colors.
    pub optional_regions: Vec<Region>,
}

impl Layout {
    /// Bottom edge of the lowest grid box.
    pub fn max_grid_y(&self) -> u32 {
        self.grid_boxes.iter().map(|b| b.y1).max().unwrap_or(0)
    }
}
