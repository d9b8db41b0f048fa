//! Raw settings tables and their validated, typed form.

use super::error::SettingsError;
use super::layout::{GridImage, Layout, LayoutKind, Region, TestPoints};
use crate::raster::{Rect, Rgb, CANVAS_HEIGHT, CANVAS_WIDTH};

const COLORS: &str = "colors";
const REGIONS: &str = "regions";
const OPT_REGIONS: &str = "optional regions";
const GRIDS: &str = "grids";
const GRID_BOXES: &str = "grid boxes";
const BOX_DETECTION: &str = "box detection";

/// Name-keyed settings tables, in declaration order.
///
/// This is the shape a settings file has once parsed. It carries no
/// guarantees; [`Settings::resolve`] turns it into something the pipeline can
/// run on without further lookups.
#[derive(Debug, Clone, Default)]
pub struct SettingsTables {
    pub colors: Vec<(String, Rgb)>,
    pub regions: Vec<(String, Rect)>,
    pub opt_regions: Vec<(String, Rect)>,
    pub grids: Vec<(String, GridImage)>,
    pub grid_boxes: Vec<(String, Vec<Rect>)>,
    /// Classification order is the order of this table.
    pub grid_test_points: Vec<(String, TestPoints)>,
    pub box_detection: Vec<(String, Rect)>,
    /// Explicit kinds; layouts not listed get [`LayoutKind::infer`].
    pub layout_kinds: Vec<(String, LayoutKind)>,
}

fn lookup<'a, T>(table: &'a [(String, T)], key: &str) -> Option<&'a T> {
    table.iter().find(|(k, _)| k == key).map(|(_, v)| v)
}

fn require<'a, T>(
    table: &'a [(String, T)],
    table_name: &'static str,
    key: &str,
) -> Result<&'a T, SettingsError> {
    lookup(table, key).ok_or_else(|| SettingsError::MissingKey {
        table: table_name,
        key: key.to_string(),
    })
}

fn check_rect(table: &'static str, key: &str, rect: Rect) -> Result<Rect, SettingsError> {
    if rect.is_empty() || rect.x1 > CANVAS_WIDTH || rect.y1 > CANVAS_HEIGHT {
        return Err(SettingsError::InvalidRect {
            table,
            key: key.to_string(),
            rect,
        });
    }
    Ok(rect)
}

/// The fixed-purpose colors of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub background: Rgb,
    pub grid_background: Rgb,
    pub grid: Rgb,
    pub trace: Rgb,
    pub trace_reconstruction: Rgb,
    pub channel_text: Rgb,
    pub menu_text: Rgb,
    pub channel_background: Rgb,
    pub menu_background: Rgb,
    /// Trigger-delay strip (shares the left marker's color).
    pub delay_strip: Rgb,
}

/// The two label-box scan strips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxDetection {
    pub channel: Rect,
    pub menu: Rect,
}

/// Validated, immutable pipeline settings.
///
/// Built once per run with [`Settings::resolve`] and shared read-only by any
/// number of colorize calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    colors: ColorScheme,
    regions: Vec<Region>,
    layouts: Vec<Layout>,
    box_detection: BoxDetection,
    /// Horizontal span of the trigger-delay strip (left-marker x0, right-marker x1).
    delay_span: (u32, u32),
}

impl Settings {
    /// Validate raw tables.
    ///
    /// Every region must have a color; `left-marker` and `right-marker` must
    /// exist; every layout in the test-point table needs a `grids` entry and
    /// a non-empty `grid boxes` entry; every optional region a layout's kind
    /// draws must exist in the optional regions table and have a color; both
    /// box detection strips must be one pixel wide. All boxes must lie on the
    /// canvas.
    pub fn resolve(tables: SettingsTables) -> Result<Settings, SettingsError> {
        let color = |key: &str| require(&tables.colors, COLORS, key).copied();

        let colors = ColorScheme {
            background: color("background")?,
            grid_background: color("grid-background")?,
            grid: color("grid")?,
            trace: color("trace")?,
            trace_reconstruction: color("trace-reconstruction")?,
            channel_text: color("channel-text")?,
            menu_text: color("menu-text")?,
            channel_background: color("channel-background")?,
            menu_background: color("menu-background")?,
            delay_strip: color("left-marker")?,
        };

        let regions = tables
            .regions
            .iter()
            .map(|(name, rect)| {
                Ok(Region {
                    name: name.clone(),
                    rect: check_rect(REGIONS, name, *rect)?,
                    color: color(name)?,
                })
            })
            .collect::<Result<Vec<_>, SettingsError>>()?;

        let left = require(&tables.regions, REGIONS, "left-marker")?;
        let right = require(&tables.regions, REGIONS, "right-marker")?;
        let delay_span = (left.x0, right.x1);

        let mut layouts = Vec::with_capacity(tables.grid_test_points.len());
        for (id, test_points) in &tables.grid_test_points {
            let kind = lookup(&tables.layout_kinds, id)
                .copied()
                .unwrap_or_else(|| LayoutKind::infer(id));
            let grid_image = require(&tables.grids, GRIDS, id)?.clone();

            let boxes = require(&tables.grid_boxes, GRID_BOXES, id)?;
            if boxes.is_empty() {
                return Err(SettingsError::EmptyGridBoxes { layout: id.clone() });
            }
            let grid_boxes = boxes
                .iter()
                .map(|b| check_rect(GRID_BOXES, id, *b))
                .collect::<Result<Vec<_>, _>>()?;

            let optional_regions = kind
                .optional_regions()
                .iter()
                .map(|name| {
                    let rect = *require(&tables.opt_regions, OPT_REGIONS, name)?;
                    Ok(Region {
                        name: name.to_string(),
                        rect: check_rect(OPT_REGIONS, name, rect)?,
                        color: color(name)?,
                    })
                })
                .collect::<Result<Vec<_>, SettingsError>>()?;

            layouts.push(Layout {
                id: id.clone(),
                kind,
                grid_image,
                grid_boxes,
                test_points: test_points.clone(),
                optional_regions,
            });
        }

        let strip = |name: &str| -> Result<Rect, SettingsError> {
            let rect = check_rect(
                BOX_DETECTION,
                name,
                *require(&tables.box_detection, BOX_DETECTION, name)?,
            )?;
            if rect.width() != 1 {
                return Err(SettingsError::InvalidScanStrip {
                    name: name.to_string(),
                    rect,
                });
            }
            Ok(rect)
        };
        let box_detection = BoxDetection {
            channel: strip("channel")?,
            menu: strip("menu")?,
        };

        Ok(Settings {
            colors,
            regions,
            layouts,
            box_detection,
            delay_span,
        })
    }

    #[inline]
    pub fn colors(&self) -> &ColorScheme {
        &self.colors
    }

    /// Fixed perimeter regions, in drawing order.
    #[inline]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Layouts in classification order.
    #[inline]
    pub fn layouts(&self) -> &[Layout] {
        &self.layouts
    }

    pub fn layout(&self, id: &str) -> Option<&Layout> {
        self.layouts.iter().find(|l| l.id == id)
    }

    #[inline]
    pub fn box_detection(&self) -> &BoxDetection {
        &self.box_detection
    }

    /// Trigger-delay strip for `layout`: spans the two marker regions and
    /// starts at the bottom of the lowest grid box.
    pub fn delay_strip(&self, layout: &Layout) -> Rect {
        let max_y = layout.max_grid_y();
        Rect::new(
            self.delay_span.0,
            max_y,
            self.delay_span.1,
            max_y + layout.kind.delay_strip_height(),
        )
    }
}
