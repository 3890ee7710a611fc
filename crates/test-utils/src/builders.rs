#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use loadconfig::fs::mock::MockFileSystem;
use loadconfig::loader::ConfigLoader;
use serde_json::Value;
use tempfile::TempDir;

/// `config1` / `config2` unit body: `{ d = { d1 = "d" } }`.
pub const NESTED_TOML: &str = "[d]\nd1 = \"d\"\n";

/// Scalar unit body, only expressible in JSON.
pub const SCALAR_JSON: &str = "\"Abc\"";

/// Builder for an on-disk fixture tree inside a temporary directory.
///
/// The directory is removed when the fixture is dropped.
pub struct FixtureBuilder {
    dir: TempDir,
}

impl FixtureBuilder {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Write a file relative to the fixture root, creating parents.
    pub fn file(self, rel: &str, contents: &str) -> Result<Self> {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;
        Ok(self)
    }

    pub fn dir(self, rel: &str) -> Result<Self> {
        fs::create_dir_all(self.dir.path().join(rel))?;
        Ok(self)
    }

    /// The layout most tests start from:
    ///
    /// ```text
    /// pass/config1.toml    { d = { d1 = "d" } }
    /// pass/config2.toml    { d = { d1 = "d" } }
    /// pass/returnStr.json  "Abc"
    /// empty/
    /// fail/1.txt
    /// ```
    pub fn standard() -> Result<Self> {
        Self::new()?
            .file("pass/config1.toml", NESTED_TOML)?
            .file("pass/config2.toml", NESTED_TOML)?
            .file("pass/returnStr.json", SCALAR_JSON)?
            .dir("empty")?
            .file("fail/1.txt", "not a config unit")
    }

    pub fn build(self) -> Fixture {
        Fixture { dir: self.dir }
    }
}

/// A built on-disk fixture.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }
}

/// In-memory counterpart of [`FixtureBuilder::standard`], rooted at `mocks/`.
pub fn standard_mock_fs() -> MockFileSystem {
    let fs = MockFileSystem::new();
    fs.add_file("mocks/pass/config1.toml", NESTED_TOML);
    fs.add_file("mocks/pass/config2.toml", NESTED_TOML);
    fs.add_file("mocks/pass/returnStr.json", SCALAR_JSON);
    fs.add_dir("mocks/empty");
    fs.add_file("mocks/fail/1.txt", "not a config unit");
    fs
}

/// Loader reading from the given mock filesystem.
pub fn mock_loader(fs: &MockFileSystem) -> ConfigLoader {
    ConfigLoader::with_file_system(Arc::new(fs.clone()))
}

/// The nested value every `config1`/`config2` unit holds.
pub fn nested_unit() -> Value {
    serde_json::json!({ "d": { "d1": "d" } })
}
