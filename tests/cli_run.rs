mod common;

use std::process::ExitCode;

use clap::Parser;
use loadconfig::cli::{CliArgs, Command, LogLevel};
use loadconfig::source::Format;
use loadconfig::logging::{init_logging, parse_level_str};
use loadconfig::{ConfigError, run};

use common::{FixtureBuilder, init_tracing};

#[test]
fn test_parse_repeated_paths_and_subcommand() {
    let args = CliArgs::try_parse_from([
        "loadconfig",
        "--path",
        "conf",
        "-p",
        "extra/app.toml",
        "--format",
        "toml",
        "get",
        "app.port",
        "--default",
        "8080",
    ])
    .unwrap();

    assert_eq!(args.paths.len(), 2);
    assert_eq!(args.formats, vec![Format::Toml]);
    match args.command {
        Command::Get { key, default } => {
            assert_eq!(key, "app.port");
            assert_eq!(default.as_deref(), Some("8080"));
        }
        other => panic!("Expected get command, got: {:?}", other),
    }
}

#[test]
fn test_path_is_required() {
    assert!(CliArgs::try_parse_from(["loadconfig", "dump"]).is_err());
}

#[test]
fn test_run_get_has_and_dump() {
    init_tracing();
    let fx = FixtureBuilder::standard().unwrap().build();
    let pass = fx.path("pass");
    let pass = pass.to_str().unwrap();

    let get = CliArgs::try_parse_from(["loadconfig", "-p", pass, "get", "config1.d.d1"]).unwrap();
    assert_eq!(run(get).unwrap(), ExitCode::SUCCESS);

    let has = CliArgs::try_parse_from(["loadconfig", "-p", pass, "has", "config1.d"]).unwrap();
    assert_eq!(run(has).unwrap(), ExitCode::SUCCESS);

    let missing = CliArgs::try_parse_from(["loadconfig", "-p", pass, "has", "config1.x"]).unwrap();
    assert_eq!(run(missing).unwrap(), ExitCode::FAILURE);

    let dump = CliArgs::try_parse_from(["loadconfig", "-p", pass, "dump"]).unwrap();
    assert_eq!(run(dump).unwrap(), ExitCode::SUCCESS);
}

#[test]
fn test_run_rejects_invalid_default() {
    let fx = FixtureBuilder::standard().unwrap().build();
    let pass = fx.path("pass");

    let args = CliArgs::try_parse_from([
        "loadconfig",
        "-p",
        pass.to_str().unwrap(),
        "get",
        "nope",
        "--default",
        "{not json",
    ])
    .unwrap();

    assert!(run(args).is_err());
}

#[test]
fn test_run_surfaces_load_errors() {
    let fx = FixtureBuilder::standard().unwrap().build();
    let empty = fx.path("empty");

    let args = CliArgs::try_parse_from(["loadconfig", "-p", empty.to_str().unwrap(), "dump"]).unwrap();
    let err = run(args).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::EmptySource(_))
    ));
}

#[test]
fn test_format_flag_limits_units() {
    let fx = FixtureBuilder::standard().unwrap().build();
    let scalar = fx.path("pass/returnStr.json");

    let args = CliArgs::try_parse_from([
        "loadconfig",
        "-p",
        scalar.to_str().unwrap(),
        "--format",
        "toml",
        "dump",
    ])
    .unwrap();
    let err = run(args).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_log_level_names() {
    assert_eq!(parse_level_str("warning"), Some(tracing::Level::WARN));
    assert_eq!(parse_level_str(" DEBUG "), Some(tracing::Level::DEBUG));
    assert_eq!(parse_level_str("loud"), None);
}

#[test]
fn test_init_logging_refuses_second_subscriber() {
    init_tracing();

    assert!(init_logging(Some(LogLevel::Debug)).is_err());
}
