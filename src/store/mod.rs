// src/store/mod.rs

//! The configuration store.
//!
//! `Config` owns the loaded tree (`data`) and a flat memo of resolved
//! dot-paths (`cache`). The cache is derived state: every entry must equal a
//! fresh walk of `data`, so `set` drops every entry it could make stale.

pub mod path;

use std::collections::HashMap;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::trace;

use crate::errors::Result;
use crate::loader::ConfigLoader;

/// The `get`/`set`/`has`/`all` contract, independent of how values are
/// stored.
pub trait ConfigRepository {
    fn has(&mut self, key: &str) -> bool;

    /// Value at `key`, or `default` when the key does not resolve.
    fn get_or(&mut self, key: &str, default: Value) -> Value;

    fn set(&mut self, key: &str, value: Value);

    fn all(&self) -> &Map<String, Value>;
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    data: Map<String, Value>,
    cache: HashMap<String, Value>,
}

impl Config {
    /// Load a single file or directory from the real filesystem.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_loader(&ConfigLoader::new(), [path])
    }

    /// Load several files and/or directories in order; later units with
    /// the same name win.
    pub fn from_paths<I, P>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Self::with_loader(&ConfigLoader::new(), paths)
    }

    pub fn with_loader<I, P>(loader: &ConfigLoader, paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Ok(Self::from_map(loader.load_paths(paths)?))
    }

    /// Wrap an already-built tree.
    pub fn from_map(data: Map<String, Value>) -> Self {
        Self {
            data,
            cache: HashMap::new(),
        }
    }

    /// Whether `key` resolves. A successful walk is memoized.
    pub fn has(&mut self, key: &str) -> bool {
        if self.cache.contains_key(key) {
            trace!(key, "cache hit");
            return true;
        }

        match resolve(&self.data, key) {
            Some(value) => {
                trace!(key, "cache miss, resolved");
                let value = value.clone();
                self.cache.insert(key.to_string(), value);
                true
            }
            None => {
                trace!(key, "cache miss, not found");
                false
            }
        }
    }

    /// Value at `key`, or `None` when it does not resolve.
    pub fn get(&mut self, key: &str) -> Option<&Value> {
        if self.has(key) {
            self.cache.get(key)
        } else {
            None
        }
    }

    pub fn get_or(&mut self, key: &str, default: Value) -> Value {
        self.get(key).cloned().unwrap_or(default)
    }

    pub fn get_or_null(&mut self, key: &str) -> Value {
        self.get_or(key, Value::Null)
    }

    /// Write `value` at `key`, creating intermediate mappings as needed.
    ///
    /// Existing data on the way is kept where possible:
    /// - a sequence addressed by an existing index is descended into, and
    ///   the index one past its end appends;
    /// - a sequence addressed by any other segment (a gap index, `01`, a
    ///   name) becomes a mapping keyed by the element indices (`"0"`, `"1"`,
    ///   ...), so its elements stay reachable under the same paths;
    /// - a scalar (or `Null`) is replaced by an empty mapping.
    pub fn set(&mut self, key: &str, value: Value) {
        for prefix in path::prefixes(key) {
            self.cache.remove(prefix);
        }
        self.cache.retain(|cached, _| !path::is_descendant(cached, key));

        let mut reshaped = Vec::new();
        let mut segments = path::segments(key);
        let first = segments.next().unwrap_or_default();
        let mut slot = self.data.entry(first).or_insert(Value::Null);
        // Each later segment is paired with the path of the node it indexes.
        for (segment, parent) in segments.zip(path::prefixes(key)) {
            if reshape_for(slot, segment) {
                reshaped.push(parent);
            }
            slot = child_slot(slot, segment);
        }
        *slot = value.clone();

        for parent in reshaped {
            self.cache.retain(|cached, _| !path::is_descendant(cached, parent));
        }

        trace!(key, "set");
        self.cache.insert(key.to_string(), value);
    }

    /// The whole configuration tree.
    pub fn all(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Names of the loaded top-level units.
    pub fn units(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// Number of memoized dot-paths.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

impl ConfigRepository for Config {
    fn has(&mut self, key: &str) -> bool {
        Config::has(self, key)
    }

    fn get_or(&mut self, key: &str, default: Value) -> Value {
        Config::get_or(self, key, default)
    }

    fn set(&mut self, key: &str, value: Value) {
        Config::set(self, key, value)
    }

    fn all(&self) -> &Map<String, Value> {
        Config::all(self)
    }
}

/// Walk `data` along the segments of `key`.
pub(crate) fn resolve<'a>(data: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    let mut segments = path::segments(key);
    let mut node = data.get(segments.next()?)?;
    for segment in segments {
        node = match node {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(path::index(segment)?)?,
            _ => return None,
        };
    }
    Some(node)
}

/// Make `node` able to hold a child at `segment`: a mapping, or a sequence
/// long enough for the index. Returns true if the node changed shape, in
/// which case memos below it may no longer match.
fn reshape_for(node: &mut Value, segment: &str) -> bool {
    if node.is_object() {
        return false;
    }
    if let (Some(i), Value::Array(items)) = (path::index(segment), &mut *node) {
        if i < items.len() {
            return false;
        }
        if i == items.len() {
            items.push(Value::Null);
            return false;
        }
    }

    *node = match node.take() {
        Value::Array(items) => Value::Object(
            items
                .into_iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v))
                .collect(),
        ),
        _ => Value::Object(Map::new()),
    };
    true
}

/// Child slot of a node already prepared by [`reshape_for`]. Missing
/// mapping keys are inserted as `Null`.
fn child_slot<'a>(node: &'a mut Value, segment: &str) -> &'a mut Value {
    match path::index(segment) {
        Some(i) if node.is_array() => &mut node[i],
        _ => &mut node[segment],
    }
}
