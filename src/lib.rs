// src/lib.rs

pub mod access;
pub mod cli;
pub mod errors;
pub mod fs;
pub mod loader;
pub mod logging;
pub mod source;
pub mod store;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::{CliArgs, Command};
use crate::fs::{FileSystem, RealFileSystem};
use crate::loader::ConfigLoader;
use crate::source::FormatSource;

pub use crate::access::OffsetAccess;
pub use crate::errors::ConfigError;
pub use crate::store::{Config, ConfigRepository};
pub use serde_json::{Map, Value};

/// High-level entry point used by `main.rs`.
///
/// Builds a loader from the CLI flags, loads every `--path`, then runs the
/// requested lookup and prints the result to stdout.
pub fn run(args: CliArgs) -> Result<ExitCode> {
    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
    let mut loader = ConfigLoader::with_file_system(Arc::clone(&fs));
    if !args.formats.is_empty() {
        let formats = args.formats.iter().copied();
        loader = loader.with_source(FormatSource::new(fs).with_formats(formats));
    }

    let mut config = Config::with_loader(&loader, &args.paths)?;
    debug!(units = ?config.units().collect::<Vec<_>>(), "units available");

    match args.command {
        Command::Get { key, default } => {
            let default = match default {
                Some(raw) => serde_json::from_str(&raw)
                    .with_context(|| format!("--default is not valid JSON: {raw}"))?,
                None => Value::Null,
            };
            let value = config.get_or(&key, default);
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Has { key } => {
            let found = config.has(&key);
            println!("{found}");
            Ok(if found { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Command::Dump => {
            println!("{}", serde_json::to_string_pretty(config.all())?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
