//! Capture pre-check and grid layout classification.
//!
//! A layout is recognised by sampling a handful of diagnostic pixels: its
//! signature lists coordinates that must be white and coordinates that must
//! be black. Layouts are tried in declaration order and the first full match
//! wins, so more specific signatures belong earlier in the table.

use crate::api::CaptureError;
use crate::raster::{BitGrid, RgbImage, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::settings::{Layout, TestPoints};

/// Reject anything that is not a true black-and-white 832x696 capture.
///
/// Classification on an anti-aliased or scaled image would silently pick the
/// wrong layout, so this runs before any other work.
pub fn validate_capture(image: &RgbImage) -> Result<(), CaptureError> {
    if image.width() != CANVAS_WIDTH || image.height() != CANVAS_HEIGHT {
        return Err(CaptureError::WrongDimensions {
            width: image.width(),
            height: image.height(),
        });
    }

    let hist = image.luma_histogram();
    if let Some((level, &count)) = hist[1..255]
        .iter()
        .enumerate()
        .find(|&(_, &count)| count > 0)
    {
        return Err(CaptureError::NotBinary {
            level: level as u8 + 1,
            count,
        });
    }
    Ok(())
}

fn matches(dark: &BitGrid, points: &TestPoints) -> bool {
    let in_bounds = |x: u32, y: u32| x < dark.width() && y < dark.height();

    let white_ok = points.white.as_deref().map_or(true, |pts| {
        pts.iter()
            .all(|&(x, y)| in_bounds(x, y) && !dark.get(x, y))
    });
    let black_ok = points.black.as_deref().map_or(true, |pts| {
        pts.iter().all(|&(x, y)| in_bounds(x, y) && dark.get(x, y))
    });
    white_ok && black_ok
}

/// First layout whose test points all hold on the binarized capture.
///
/// `dark` is the binarized capture with `true` for black pixels.
pub fn identify<'a>(dark: &BitGrid, layouts: &'a [Layout]) -> Option<&'a Layout> {
    layouts.iter().find(|layout| matches(dark, &layout.test_points))
}
