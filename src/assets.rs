//! Settings assets with an embedded default
//!
//! The default settings file is compiled into the binary. A user settings
//! file is optional and only ever overlays the default:
//!
//! - If no settings path is configured: use the embedded default only
//! - If a path is configured and exists: default, then the file on top
//! - If a path is configured but missing: error (a typo should not silently
//!   fall back to the defaults)

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the embedded default settings file
pub const DEFAULT_SETTINGS: &str = "default_settings.yaml";

/// Embedded default settings
#[derive(RustEmbed)]
#[folder = "data/"]
#[include = "*.yaml"]
struct EmbeddedData;

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Loads the default settings and the optional user settings file
pub struct AssetLoader {
    /// User settings file (from `--settings` or LECROY_SETTINGS)
    settings_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// `settings_file` should be `Some` only if the user asked for one.
    pub fn new(settings_file: Option<PathBuf>) -> Self {
        Self { settings_file }
    }

    pub fn settings_file(&self) -> Option<&Path> {
        self.settings_file.as_deref()
    }

    /// Read the embedded default settings
    pub fn read_default_settings() -> io::Result<Cow<'static, [u8]>> {
        EmbeddedData::get(DEFAULT_SETTINGS)
            .map(|f| {
                tracing::trace!("Loading default settings from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Embedded {DEFAULT_SETTINGS} not found"),
                )
            })
    }

    /// Read the default settings as a UTF-8 string
    pub fn read_default_settings_string() -> io::Result<String> {
        let bytes = Self::read_default_settings()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Read the user settings file, if one is configured
    pub fn read_user_settings_string(&self) -> io::Result<Option<String>> {
        match self.settings_file {
            Some(ref path) => {
                tracing::trace!(path = %path.display(), "Loading settings from filesystem");
                fs::read_to_string(path).map(Some)
            }
            None => Ok(None),
        }
    }

    /// Extract the embedded default settings to `output` (init command)
    pub fn init(output: &Path, force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();

        if !force && output.exists() {
            report.skipped.push(output.display().to_string());
            return Ok(report);
        }
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let data = Self::read_default_settings()?;
        fs::write(output, &*data)?;
        report.written.push(output.display().to_string());

        Ok(report)
    }
}
