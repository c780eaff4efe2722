use std::fs;
use tempfile::TempDir;
use yamlpick::config::Config;

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert!(config.fail_on_missing);
    assert_eq!(config.max_document_size, 104_857_600); // 100MB
    assert_eq!(config.log_level, "warn");
    assert!(!config.yaml_output);
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("config.toml"));
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "fail_on_missing = false\nmax_document_size = 2048\nlog_level = \"debug\"\nyaml_output = true\n",
    )
    .unwrap();

    let config = Config::load_from(&path);
    assert!(!config.fail_on_missing);
    assert_eq!(config.max_document_size, 2048);
    assert_eq!(config.log_level, "debug");
    assert!(config.yaml_output);
}

#[test]
fn test_load_partial_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "log_level = \"trace\"\n").unwrap();

    let config = Config::load_from(&path);
    assert_eq!(config.log_level, "trace");
    assert!(config.fail_on_missing);
    assert_eq!(config.max_document_size, 104_857_600);
}

#[test]
fn test_load_invalid_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "this is = = not toml").unwrap();

    assert_eq!(Config::load_from(&path), Config::default());
}

#[test]
fn test_toml_round_trip() {
    let config = Config {
        fail_on_missing: false,
        max_document_size: 4096,
        log_level: "info".to_string(),
        yaml_output: true,
    };

    let text = config.to_toml().unwrap();
    assert!(text.contains("log_level = \"info\""));
    assert_eq!(Config::from_toml(&text).unwrap(), config);
}

#[test]
fn test_config_path() {
    if let Some(path) = Config::config_path() {
        assert!(path.ends_with(".config/yamlpick/config.toml"));
    }
}
