//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use stateholder::config::AppConfig;
use stateholder::settings::{Settings, SettingsStore, Subscription};
use stateholder::ui::app::App;
use stateholder::ui::snackbar::Snackbar;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

pub type Recorded = Arc<Mutex<Vec<Settings>>>;

/// Subscribe a recorder that keeps every emitted value.
pub fn record(store: &SettingsStore) -> (Subscription, Recorded) {
    let seen: Recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let subscription = store.subscribe(move |settings| sink.lock().push(settings.clone()));
    (subscription, seen)
}

pub fn snackbar() -> Snackbar {
    Snackbar::new(Duration::from_secs(4))
}

pub fn app_with(store: &SettingsStore, config: &AppConfig) -> App {
    App::new(store, snackbar(), config)
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
