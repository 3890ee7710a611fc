// src/loader.rs

//! Load procedure: single file, directory scan, or a list of either.

use std::path::Path;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::errors::{ConfigError, Result};
use crate::fs::{FileSystem, RealFileSystem};
use crate::source::{ConfigSource, FormatSource, split_unit_file_name};

/// Reads configuration units into a top-level map keyed by unit name.
///
/// The filesystem and the unit evaluator are both injectable so tests can run
/// entirely in memory:
///
/// ```no_run
/// use std::sync::Arc;
/// use loadconfig::fs::mock::MockFileSystem;
/// use loadconfig::loader::ConfigLoader;
///
/// let fs = MockFileSystem::new();
/// fs.add_file("conf/app.json", r#"{"port": 8080}"#);
/// let loader = ConfigLoader::with_file_system(Arc::new(fs));
/// let data = loader.load_path("conf").unwrap();
/// assert!(data.contains_key("app"));
/// ```
#[derive(Debug)]
pub struct ConfigLoader {
    fs: Arc<dyn FileSystem>,
    source: Box<dyn ConfigSource>,
}

impl ConfigLoader {
    /// Real filesystem, TOML and JSON units.
    pub fn new() -> Self {
        Self::with_file_system(Arc::new(RealFileSystem))
    }

    /// Use `fs` both for scanning and for reading units.
    pub fn with_file_system(fs: Arc<dyn FileSystem>) -> Self {
        let source = FormatSource::new(Arc::clone(&fs));
        Self {
            fs,
            source: Box::new(source),
        }
    }

    /// Replace the unit evaluator. Scanning still goes through the loader's
    /// filesystem.
    pub fn with_source(mut self, source: impl ConfigSource + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    /// Load every path in order into one map. Later units replace earlier
    /// units of the same name; the first error aborts the whole load.
    pub fn load_paths<I, P>(&self, paths: I) -> Result<Map<String, Value>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut data = Map::new();
        for path in paths {
            self.load_into(path.as_ref(), &mut data)?;
        }
        info!(units = data.len(), "configuration loaded");
        Ok(data)
    }

    /// Load a single file or directory.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Map<String, Value>> {
        self.load_paths([path])
    }

    fn load_into(&self, path: &Path, data: &mut Map<String, Value>) -> Result<()> {
        if self.fs.is_dir(path) {
            self.load_dir(path, data)
        } else if self.fs.is_file(path) {
            self.load_file(path, data)
        } else {
            Err(ConfigError::NotFound(path.to_path_buf()))
        }
    }

    fn load_file(&self, path: &Path, data: &mut Map<String, Value>) -> Result<()> {
        let unit = split_unit_file_name(path)
            .filter(|(_, ext)| self.source.recognizes(ext))
            .map(|(unit, _)| unit)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;

        self.insert_unit(unit, path, data)
    }

    fn load_dir(&self, dir: &Path, data: &mut Map<String, Value>) -> Result<()> {
        let entries = self.fs.read_dir(dir).map_err(|source| ConfigError::Read {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut loaded = 0usize;
        for entry in entries {
            if !self.fs.is_file(&entry) {
                debug!("skipping non-file entry {:?}", entry);
                continue;
            }
            let Some((unit, ext)) = split_unit_file_name(&entry) else {
                debug!("skipping {:?}: no extension", entry);
                continue;
            };
            if !self.source.recognizes(ext) {
                debug!("skipping {:?}: unrecognized extension {:?}", entry, ext);
                continue;
            }
            self.insert_unit(unit, &entry, data)?;
            loaded += 1;
        }

        // Checked against everything loaded so far, so an empty directory
        // after a populated path is accepted.
        if data.is_empty() {
            return Err(ConfigError::EmptySource(dir.to_path_buf()));
        }
        debug!(dir = ?dir, units = loaded, "directory scanned");
        Ok(())
    }

    fn insert_unit(&self, unit: &str, path: &Path, data: &mut Map<String, Value>) -> Result<()> {
        if unit.contains('.') {
            warn!(unit, "unit name contains '.', it is not reachable by dot-path lookup");
        }
        let value = self.source.load(path)?;
        if data.insert(unit.to_string(), value).is_some() {
            debug!(unit, path = ?path, "unit replaced by later source");
        } else {
            debug!(unit, path = ?path, "unit loaded");
        }
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
