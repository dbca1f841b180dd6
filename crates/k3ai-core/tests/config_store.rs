use tempfile::TempDir;

use k3ai_core::config::{Settings, SettingsStore};

#[test]
fn load_missing_returns_defaults() {
    let temp = TempDir::new().unwrap();
    let store = SettingsStore::from_path(temp.path().join("k3ai").join("config.toml"));

    let settings = store.load().unwrap();

    assert_eq!(settings, Settings::default());
}

#[test]
fn save_then_load_roundtrip() {
    let temp = TempDir::new().unwrap();
    let store = SettingsStore::from_path(temp.path().join("nested").join("config.toml"));

    let mut settings = Settings::new();
    settings.remote.plugins_url = "https://example.com/plugins".to_string();
    settings.remote.timeout_secs = Some(10);

    store.save(&settings).unwrap();
    assert!(store.config_path().exists());

    let loaded = store.load().unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn load_rejects_invalid_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[remote]\ngroups_url = \"\"\n").unwrap();

    let err = SettingsStore::from_path(path).load().unwrap_err();

    assert!(format!("{err:#}").contains("groups_url must not be empty"));
}
