//! Settings types and validation
//!
//! Settings arrive as name-keyed [`SettingsTables`] and are validated once
//! into [`Settings`]. After that point every name the pipeline needs has
//! been resolved to a color or a rectangle, so compositing never fails on a
//! lookup.

mod color;
mod error;
mod layout;
#[allow(clippy::module_inception)]
mod settings;

pub use error::{ParseColorError, SettingsError};
pub use layout::{GridImage, Layout, LayoutKind, Region, TestPoints};
pub use settings::{BoxDetection, ColorScheme, Settings, SettingsTables};
