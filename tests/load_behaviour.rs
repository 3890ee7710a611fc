mod common;

use loadconfig::{Config, Value};
use serde_json::json;

use common::{FixtureBuilder, init_tracing, nested_unit};

#[test]
fn test_load_dir_resolves_nested_key() {
    init_tracing();
    let fx = FixtureBuilder::standard().unwrap().build();

    let mut config = Config::new(fx.path("pass")).unwrap();

    assert_eq!(config.get_or_null("config1.d.d1"), json!("d"));
    assert_eq!(config.get_or_null("config2.d.d1"), json!("d"));
}

#[test]
fn test_load_dir_collects_every_unit() {
    let fx = FixtureBuilder::standard().unwrap().build();

    let config = Config::new(fx.path("pass")).unwrap();

    let mut units: Vec<&str> = config.units().collect();
    units.sort();
    assert_eq!(units, vec!["config1", "config2", "returnStr"]);
}

#[test]
fn test_load_single_file_matches_dir_load() {
    let fx = FixtureBuilder::standard().unwrap().build();

    let mut from_file = Config::new(fx.path("pass/config1.toml")).unwrap();
    let mut from_dir = Config::new(fx.path("pass")).unwrap();

    assert_eq!(from_file.get_or_null("config1.d.d1"), json!("d"));
    assert_eq!(
        from_file.get_or_null("config1"),
        from_dir.get_or_null("config1")
    );
    assert_eq!(from_file.units().collect::<Vec<_>>(), vec!["config1"]);
}

#[test]
fn test_load_scalar_unit() {
    let fx = FixtureBuilder::standard().unwrap().build();

    let mut config = Config::new(fx.path("pass/returnStr.json")).unwrap();

    assert_eq!(config.get_or_null("returnStr"), json!("Abc"));
    assert!(!config.has("returnStr.anything"));
}

#[test]
fn test_load_paths_keeps_both_units() {
    let fx = FixtureBuilder::standard().unwrap().build();

    let mut config = Config::from_paths([
        fx.path("pass/config1.toml"),
        fx.path("pass/config2.toml"),
    ])
    .unwrap();

    assert_eq!(config.get_or_null("config1.d.d1"), json!("d"));
    assert_eq!(config.get_or_null("config2.d.d1"), json!("d"));
}

#[test]
fn test_load_paths_last_unit_wins_without_merge() {
    let fx = FixtureBuilder::new()
        .unwrap()
        .file("a/app.toml", "port = 1\n[db]\nhost = \"a\"\n")
        .unwrap()
        .file("b/app.json", r#"{"port": 2}"#)
        .unwrap()
        .build();

    let mut config = Config::from_paths([fx.path("a"), fx.path("b")]).unwrap();

    assert_eq!(config.get_or_null("app.port"), json!(2));
    assert!(!config.has("app.db.host"));
    assert_eq!(config.all().get("app"), Some(&json!({ "port": 2 })));
}

#[test]
fn test_load_dir_skips_subdirs_and_unrecognized_files() {
    let fx = FixtureBuilder::new()
        .unwrap()
        .file("conf/app.toml", "name = \"svc\"\n")
        .unwrap()
        .file("conf/README.md", "# notes")
        .unwrap()
        .file("conf/noext", "x")
        .unwrap()
        .file("conf/nested/inner.toml", "x = 1\n")
        .unwrap()
        .dir("conf/dir.toml")
        .unwrap()
        .build();

    let config = Config::new(fx.path("conf")).unwrap();

    assert_eq!(config.units().collect::<Vec<_>>(), vec!["app"]);
}

#[test]
fn test_unit_name_uses_last_dot() {
    let fx = FixtureBuilder::new()
        .unwrap()
        .file("conf/app.local.toml", "debug = true\n")
        .unwrap()
        .build();

    let mut config = Config::new(fx.path("conf")).unwrap();

    assert!(config.all().contains_key("app.local"));
    // A dotted unit name is not reachable through dot-path lookup.
    assert!(!config.has("app.local.debug"));
}

#[test]
fn test_toml_values_are_converted() {
    let fx = FixtureBuilder::new()
        .unwrap()
        .file(
            "types.toml",
            "int = 7\nfloat = 1.5\nflag = true\nwhen = 1979-05-27T07:32:00Z\nlist = [1, \"two\"]\n",
        )
        .unwrap()
        .build();

    let mut config = Config::new(fx.path("types.toml")).unwrap();

    assert_eq!(config.get_or_null("types.int"), json!(7));
    assert_eq!(config.get_or_null("types.float"), json!(1.5));
    assert_eq!(config.get_or_null("types.flag"), json!(true));
    assert_eq!(
        config.get_or_null("types.when"),
        Value::String("1979-05-27T07:32:00Z".to_string())
    );
    assert_eq!(config.get_or_null("types.list.1"), json!("two"));
}

#[test]
fn test_loaded_tree_matches_source() {
    let fx = FixtureBuilder::standard().unwrap().build();

    let config = Config::new(fx.path("pass/config1.toml")).unwrap();

    assert_eq!(config.all().get("config1"), Some(&nested_unit()));
}
