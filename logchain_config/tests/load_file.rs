use logchain_config::load_file;
use std::fs;
use tempfile::tempdir;

#[test]
fn reads_config_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("logchain.toml");
    fs::write(&path, "[error_log]\npath = \"custom.txt\"\n").unwrap();

    let cfg = load_file(&path).expect("load config");
    assert_eq!(cfg.error_log.path.to_str(), Some("custom.txt"));
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = load_file(&path).expect_err("missing file must fail");
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn malformed_toml_reports_invalid_configuration() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[chain\norder = 1").unwrap();

    let err = load_file(&path).expect_err("malformed file must fail");
    assert!(err.to_string().contains("invalid configuration"));
}
