// src/source/mod.rs

//! Turning one file into one configuration value.
//!
//! - `ConfigSource` is the pluggable "evaluate a unit" seam.
//! - `FormatSource` is the shipped implementation, reading through a
//!   [`FileSystem`] and parsing TOML or JSON (`format.rs`).
//! - `split_unit_file_name` decides the unit name and extension of a file.

use std::fmt::Debug;
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::errors::{ConfigError, Result};
use crate::fs::{FileSystem, RealFileSystem};

pub mod format;

pub use format::Format;

/// Something that can produce the value of a configuration unit.
pub trait ConfigSource: Send + Sync + Debug {
    /// Whether files with this extension (no leading dot) are units.
    fn recognizes(&self, extension: &str) -> bool;

    /// Produce the value of the unit stored at `path`.
    fn load(&self, path: &Path) -> Result<Value>;
}

/// [`ConfigSource`] that parses files in a fixed set of [`Format`]s.
#[derive(Debug, Clone)]
pub struct FormatSource {
    fs: Arc<dyn FileSystem>,
    formats: Vec<Format>,
}

impl FormatSource {
    /// All formats enabled.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self {
            fs,
            formats: Format::ALL.to_vec(),
        }
    }

    /// Restrict the recognized formats. Files in other formats become
    /// `UnsupportedFormat` (single file) or are skipped (directory scan).
    pub fn with_formats(mut self, formats: impl IntoIterator<Item = Format>) -> Self {
        self.formats = formats.into_iter().collect();
        self
    }

    pub fn formats(&self) -> &[Format] {
        &self.formats
    }

    fn format_for(&self, extension: &str) -> Option<Format> {
        Format::from_extension(extension).filter(|f| self.formats.contains(f))
    }
}

impl Default for FormatSource {
    fn default() -> Self {
        Self::new(Arc::new(RealFileSystem))
    }
}

impl ConfigSource for FormatSource {
    fn recognizes(&self, extension: &str) -> bool {
        self.format_for(extension).is_some()
    }

    fn load(&self, path: &Path) -> Result<Value> {
        let format = split_unit_file_name(path)
            .and_then(|(_, ext)| self.format_for(ext))
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;

        let contents = self.fs.read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        format.parse(path, &contents)
    }
}

/// Split a file name into `(unit name, extension)`.
///
/// The extension is everything after the last `.`, the unit name everything
/// before it, so `app.local.toml` is unit `app.local` with extension `toml`.
/// Returns `None` for names without an extension (including dot-files such as
/// `.toml`) and for names that are not valid UTF-8.
pub fn split_unit_file_name(path: &Path) -> Option<(&str, &str)> {
    let name = path.file_name()?.to_str()?;
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some((stem, ext))
}
