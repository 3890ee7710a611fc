// src/fs/mock.rs

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{Result, anyhow};

use super::FileSystem;

#[derive(Debug, Clone)]
enum MockEntry {
    File(Vec<u8>),
    /// Child names in insertion order, which stands in for the native
    /// enumeration order of a real directory.
    Dir(Vec<String>),
}

/// In-memory tree of files and directories.
///
/// Cloning shares the tree, so a test can keep a handle while the loader
/// holds another.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    entries: Arc<Mutex<HashMap<PathBuf, MockEntry>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a file, creating its parent directories.
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let path = path.as_ref();
        let mut entries = self.lock();
        entries.insert(path.to_path_buf(), MockEntry::File(content.into()));
        link_to_parent(&mut entries, path);
    }

    /// Add an empty directory, creating its parents.
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut entries = self.lock();
        ensure_dir(&mut entries, path);
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<PathBuf, MockEntry>> {
        // A poisoned lock only means another test thread panicked mid-insert.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn ensure_dir(entries: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
    if entries.contains_key(path) {
        return;
    }
    entries.insert(path.to_path_buf(), MockEntry::Dir(Vec::new()));
    link_to_parent(entries, path);
}

fn link_to_parent(entries: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
    let Some(parent) = path.parent() else {
        return;
    };
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return;
    };
    let parent = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };
    if parent == path {
        return;
    }

    ensure_dir(entries, parent);
    if let Some(MockEntry::Dir(children)) = entries.get_mut(parent) {
        if !children.iter().any(|c| c == name) {
            children.push(name.to_string());
        }
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        let entries = self.lock();
        match entries.get(path) {
            Some(MockEntry::File(content)) => {
                String::from_utf8(content.clone()).map_err(|e| anyhow!("invalid UTF-8 in {:?}: {}", path, e))
            }
            Some(MockEntry::Dir(_)) => Err(anyhow!("is a directory: {:?}", path)),
            None => Err(anyhow!("file not found: {:?}", path)),
        }
    }

    fn is_file(&self, path: &Path) -> bool {
        matches!(self.lock().get(path), Some(MockEntry::File(_)))
    }

    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.lock().get(path), Some(MockEntry::Dir(_)))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        match self.lock().get(path) {
            Some(MockEntry::Dir(children)) => Ok(children.iter().map(|name| path.join(name)).collect()),
            _ => Err(anyhow!("not a directory or not found: {:?}", path)),
        }
    }
}
