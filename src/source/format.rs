// src/source/format.rs

use std::fmt;
use std::path::Path;

use clap::ValueEnum;
use serde_json::{Map, Number, Value};

use crate::errors::{ConfigError, Result};

/// Structured-data formats a configuration unit can be written in.
///
/// Also the value type of the CLI's `--format` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    pub const ALL: [Format; 2] = [Format::Toml, Format::Json];

    /// File extension (without the dot) that selects this format.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Toml => "toml",
            Format::Json => "json",
        }
    }

    /// Exact, case-sensitive match on the extension.
    pub fn from_extension(ext: &str) -> Option<Format> {
        Format::ALL.into_iter().find(|f| f.extension() == ext)
    }

    /// Parse the contents of one unit. `path` is only used for error context.
    pub fn parse(self, path: &Path, contents: &str) -> Result<Value> {
        match self {
            Format::Toml => {
                let table: toml::Table = toml::from_str(contents).map_err(|source| ConfigError::Toml {
                    path: path.to_path_buf(),
                    source,
                })?;
                Ok(Value::Object(table_to_map(table)))
            }
            Format::Json => serde_json::from_str(contents).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

fn table_to_map(table: toml::Table) -> Map<String, Value> {
    table.into_iter().map(|(k, v)| (k, toml_to_value(v))).collect()
}

/// TOML has no null; datetimes are kept as their RFC 3339 text.
fn toml_to_value(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_value).collect()),
        toml::Value::Table(table) => Value::Object(table_to_map(table)),
    }
}
