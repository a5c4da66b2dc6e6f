use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use gtreplicate_roi::config::{self, Config, ConfigError};
use gtreplicate_roi::roi::ModeKind;

/// 테스트가 끝나면 디렉터리째 지워진다. `TempDir`을 살려 두어야 한다.
fn scratch() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    (dir, path)
}

#[test]
fn missing_file_creates_defaults() {
    let (_dir, path) = scratch();
    let cfg = config::load_or_default(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert!(path.exists(), "default config should be written");
}

#[test]
fn saved_settings_load_back() {
    let (_dir, path) = scratch();
    let mut cfg = Config::default();
    cfg.default_mode = ModeKind::LicenseAware;
    cfg.show_debug = true;
    cfg.fleet.vessels = 42;
    cfg.license.implementation_cost = 12000.0;
    cfg.save(&path).expect("save");
    let loaded = config::load_or_default(&path).expect("load");
    assert_eq!(loaded, cfg);
}

#[test]
fn partial_file_fills_remaining_defaults() {
    let (_dir, path) = scratch();
    fs::write(&path, "language = \"ko\"\n[fleet]\nvessels = 3\n").expect("write");
    let cfg = config::load_or_default(&path).expect("load");
    assert_eq!(cfg.language, "ko");
    assert_eq!(cfg.fleet.vessels, 3);
    assert_eq!(cfg.fleet.data_per_vessel_gb, 50.0);
    assert_eq!(cfg.default_mode, ModeKind::Simple);
}

#[test]
fn invalid_defaults_are_reported() {
    let (_dir, path) = scratch();
    fs::write(&path, "[fleet]\nit_cost_per_hour = 0.0\n").expect("write");
    let err = config::load_or_default(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)), "got {err}");

    fs::write(&path, "show_debug = \"yes\"\n").expect("write");
    assert!(matches!(
        config::load_or_default(&path),
        Err(ConfigError::Parse(_))
    ));
}
