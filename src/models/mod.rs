pub mod config;

pub use config::{ColorValue, GridEntry, KindName, SettingsFile, Style, TestPointsEntry};
