// src/cli.rs

//! CLI argument parsing for the `loadconfig` inspection tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::source::Format;

/// Command-line arguments for `loadconfig`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "loadconfig",
    version,
    about = "Load configuration files and look up dot-path keys.",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file or directory. Repeat to load several, in order.
    #[arg(short, long = "path", value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Restrict recognized unit formats (default: all).
    #[arg(long = "format", value_enum, value_name = "FORMAT")]
    pub formats: Vec<Format>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `LOADCONFIG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the value at a dot-path key as JSON.
    Get {
        key: String,

        /// JSON value printed when the key does not resolve.
        #[arg(long, value_name = "JSON")]
        default: Option<String>,
    },
    /// Print whether a dot-path key resolves; exits with 1 if it does not.
    Has { key: String },
    /// Print the whole configuration tree as JSON.
    Dump,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
