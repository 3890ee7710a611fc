#![allow(dead_code)]

pub use loadconfig_test_utils::builders::{
    FixtureBuilder, mock_loader, nested_unit, standard_mock_fs,
};
pub use loadconfig_test_utils::init_tracing;

use loadconfig::store::path;
use serde_json::{Map, Value};

/// Reference traversal that ignores the cache entirely. Sequence indices
/// follow the store's canonical rule, so `01` and `+1` never resolve.
pub fn walk<'a>(data: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    let mut segments = key.split('.');
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
