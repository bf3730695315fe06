use image_cash_letter::config::{Config, ConfigManager};
use image_cash_letter::document::IdUniqueness;
use image_cash_letter::ConfigError;
use tempfile::tempdir;

#[test]
fn load_without_file_returns_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_path(dir.path().join("config.json"));
    let config = manager.load().expect("load");
    assert_eq!(config, Config::default());
    assert_eq!(config.id_uniqueness, IdUniqueness::Adjacent);
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_path(dir.path().join("nested").join("config.json"));
    let config = Config {
        id_uniqueness: IdUniqueness::Global,
    };

    manager.save(&config).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, config);
    let raw = std::fs::read_to_string(manager.path()).expect("read config");
    assert!(raw.contains("\"global\""));
}

#[test]
fn malformed_config_is_a_serde_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"id_uniqueness":"sometimes"}"#).expect("write");

    let err = ConfigManager::with_path(path).load().unwrap_err();
    assert!(matches!(err, ConfigError::Serde(_)));
}
