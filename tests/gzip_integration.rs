use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;
use yamlpick::file::loader::{decode_input, load_yaml_file};

const DEPLOY: &str = "services:\n  - {name: api, replicas: 3}\n  - {name: worker, replicas: 5}\n";

/// Helper function to create a temporary file path with the given name
fn temp_file_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

fn gzip(content: &str) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(content.as_bytes()).unwrap();
    encoder.finish().unwrap()
}

#[test]
fn test_query_gzipped_file() {
    let dir = TempDir::new().unwrap();
    let path = temp_file_path(&dir, "deploy.yaml.gz");
    fs::write(&path, gzip(DEPLOY)).unwrap();

    let text = load_yaml_file(&path, 1 << 20).unwrap();
    assert_eq!(text, DEPLOY);
    assert_eq!(yamlpick::get(&text, "services.#(name=worker).replicas").int(), 5);
}

#[test]
fn test_query_plain_file() {
    let dir = TempDir::new().unwrap();
    let path = temp_file_path(&dir, "deploy.yaml");
    fs::write(&path, DEPLOY).unwrap();

    let text = load_yaml_file(&path, 1 << 20).unwrap();
    assert_eq!(yamlpick::get(&text, "services.#.name").array().len(), 2);
}

#[test]
fn test_gzipped_stdin_bytes() {
    let text = decode_input(gzip(DEPLOY), 1 << 20).unwrap();
    assert_eq!(yamlpick::get(&text, "services.0.replicas").int(), 3);
}

#[test]
fn test_size_limit_applies_after_decompression() {
    let dir = TempDir::new().unwrap();
    let path = temp_file_path(&dir, "deploy.yaml.gz");
    fs::write(&path, gzip(DEPLOY)).unwrap();

    let err = load_yaml_file(&path, 16).unwrap_err();
    assert!(err.to_string().contains("byte limit"));
}

#[test]
fn test_corrupted_gzip_file() {
    let dir = TempDir::new().unwrap();
    let path = temp_file_path(&dir, "broken.yaml.gz");
    fs::write(&path, b"definitely not gzip").unwrap();

    assert!(load_yaml_file(&path, 1 << 20).is_err());
}
