use indexmap::IndexMap;
use scope_recolor::{
    GridImage, LayoutKind, Rect, Rgb, Settings, SettingsError, SettingsTables, TestPoints,
};
use serde::Deserialize;

use crate::assets::AssetLoader;
use crate::error::AppError;

/// One settings file as written on disk.
///
/// Every section is optional so that an override file can contain just the
/// entries it changes. Maps keep their declaration order; for
/// `grid test points` that order is the classification order.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    #[serde(default)]
    pub colors: IndexMap<String, ColorValue>,

    /// Fixed perimeter regions, drawn in this order
    #[serde(default)]
    pub regions: IndexMap<String, [u32; 4]>,

    #[serde(default, rename = "optional regions")]
    pub optional_regions: IndexMap<String, [u32; 4]>,

    /// Layout id to grid bitmap and description
    #[serde(default)]
    pub grids: IndexMap<String, GridEntry>,

    #[serde(default, rename = "grid boxes")]
    pub grid_boxes: IndexMap<String, Vec<[u32; 4]>>,

    #[serde(default, rename = "grid test points")]
    pub grid_test_points: IndexMap<String, TestPointsEntry>,

    /// Label-box scan strips (`channel`, `menu`)
    #[serde(default, rename = "box detection")]
    pub box_detection: IndexMap<String, [u32; 4]>,

    /// Explicit layout kinds; inferred from the layout id when absent
    #[serde(default, rename = "layout kinds")]
    pub layout_kinds: IndexMap<String, KindName>,

    /// Named color presets, selected with `--style`
    #[serde(default)]
    pub styles: IndexMap<String, Style>,
}

/// A color as written in YAML: a string (`"#ff8000"`, `"rgb(1, 2, 3)"`,
/// `"yellow"`) or a `[r, g, b]` sequence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Triple([u8; 3]),
    Text(String),
}

impl ColorValue {
    pub fn parse(&self, key: &str) -> Result<Rgb, SettingsError> {
        match self {
            ColorValue::Triple(bytes) => Ok(Rgb::from_bytes(*bytes)),
            ColorValue::Text(s) => s.parse().map_err(|err| SettingsError::ParseColor {
                key: key.to_string(),
                err,
            }),
        }
    }
}

/// A grid entry: either `[file, description]` or `{file, description}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum GridEntry {
    Pair(String, String),
    Named {
        file: String,
        #[serde(default)]
        description: String,
    },
}

impl From<GridEntry> for GridImage {
    fn from(entry: GridEntry) -> Self {
        match entry {
            GridEntry::Pair(file, description) | GridEntry::Named { file, description } => {
                GridImage { file, description }
            }
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TestPointsEntry {
    #[serde(default)]
    pub white: Option<Vec<(u32, u32)>>,
    #[serde(default)]
    pub black: Option<Vec<(u32, u32)>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KindName {
    Standard,
    Parameters,
    Xy,
    XySplit,
}

impl From<KindName> for LayoutKind {
    fn from(kind: KindName) -> Self {
        match kind {
            KindName::Standard => LayoutKind::Standard,
            KindName::Parameters => LayoutKind::Parameters,
            KindName::Xy => LayoutKind::Xy,
            KindName::XySplit => LayoutKind::XySplit,
        }
    }
}

/// A named color preset
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Style {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub colors: IndexMap<String, ColorValue>,
}

/// Replace existing keys in place and append new ones.
fn overlay_map<V>(base: &mut IndexMap<String, V>, top: IndexMap<String, V>) {
    for (k, v) in top {
        base.insert(k, v);
    }
}

fn to_rects(map: IndexMap<String, [u32; 4]>) -> Vec<(String, Rect)> {
    map.into_iter().map(|(k, r)| (k, Rect::from(r))).collect()
}

impl SettingsFile {
    /// Parse a settings file; `origin` names the file in error messages.
    pub fn from_yaml(text: &str, origin: &str) -> Result<Self, AppError> {
        serde_yaml::from_str(text).map_err(|e| AppError::SettingsFile {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Lay `top` over `self`, table by table.
    ///
    /// Keys present in `top` replace the entry in `self` without moving it;
    /// new keys go to the end. Tables `top` doesn't mention are untouched.
    /// Styles are merged whole: a style in `top` replaces one of the same name.
    pub fn overlay(&mut self, top: SettingsFile) {
        overlay_map(&mut self.colors, top.colors);
        overlay_map(&mut self.regions, top.regions);
        overlay_map(&mut self.optional_regions, top.optional_regions);
        overlay_map(&mut self.grids, top.grids);
        overlay_map(&mut self.grid_boxes, top.grid_boxes);
        overlay_map(&mut self.grid_test_points, top.grid_test_points);
        overlay_map(&mut self.box_detection, top.box_detection);
        overlay_map(&mut self.layout_kinds, top.layout_kinds);
        overlay_map(&mut self.styles, top.styles);
    }

    pub fn style_names(&self) -> Vec<&str> {
        self.styles.keys().map(String::as_str).collect()
    }

    /// Lay the colors of style `name` over the color table.
    pub fn apply_style(&mut self, name: &str) -> Result<(), AppError> {
        let style = self
            .styles
            .get(name)
            .cloned()
            .ok_or_else(|| AppError::UnknownStyle {
                name: name.to_string(),
                available: self.style_names().join(", "),
            })?;
        overlay_map(&mut self.colors, style.colors);
        Ok(())
    }

    /// Convert to the core's raw tables, parsing colors.
    pub fn into_tables(self) -> Result<SettingsTables, SettingsError> {
        let colors = self
            .colors
            .iter()
            .map(|(k, v)| Ok((k.clone(), v.parse(k)?)))
            .collect::<Result<Vec<_>, SettingsError>>()?;

        Ok(SettingsTables {
            colors,
            regions: to_rects(self.regions),
            opt_regions: to_rects(self.optional_regions),
            grids: self
                .grids
                .into_iter()
                .map(|(k, g)| (k, g.into()))
                .collect(),
            grid_boxes: self
                .grid_boxes
                .into_iter()
                .map(|(k, boxes)| (k, boxes.into_iter().map(Rect::from).collect()))
                .collect(),
            grid_test_points: self
                .grid_test_points
                .into_iter()
                .map(|(k, p)| {
                    (
                        k,
                        TestPoints {
                            white: p.white,
                            black: p.black,
                        },
                    )
                })
                .collect(),
            box_detection: to_rects(self.box_detection),
            layout_kinds: self
                .layout_kinds
                .into_iter()
                .map(|(k, kind)| (k, kind.into()))
                .collect(),
        })
    }

    /// Load the default settings, overlay the user file and style, and
    /// validate the result.
    pub fn load(loader: &AssetLoader, style: Option<&str>) -> Result<Settings, AppError> {
        let mut file = Self::from_yaml(
            &AssetLoader::read_default_settings_string()?,
            crate::assets::DEFAULT_SETTINGS,
        )?;
        tracing::debug!(
            layouts = file.grid_test_points.len(),
            styles = file.styles.len(),
            "Loaded default settings"
        );

        if let Some(text) = loader.read_user_settings_string()? {
            let origin = loader
                .settings_file()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            let user = Self::from_yaml(&text, &origin)?;
            tracing::info!(path = %origin, "Applied settings file");
            file.overlay(user);
        }

        if let Some(name) = style {
            file.apply_style(name)?;
            tracing::info!(style = name, "Applied style");
        }

        let settings = Settings::resolve(file.into_tables()?)?;
        tracing::debug!(layouts = settings.layouts().len(), "Settings resolved");
        Ok(settings)
    }
}
