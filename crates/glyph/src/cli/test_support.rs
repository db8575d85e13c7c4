//! Temporary config + store files for subcommand tests.

use std::path::{Path, PathBuf};

use super::{Config, FileGlyphSettings};

pub(crate) struct TempSetup {
    dir: tempfile::TempDir,
    config_path: PathBuf,
}

impl TempSetup {
    /// Config whose stores and vendor file all live in a fresh temp dir.
    pub(crate) fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            vendor_color_path: dir.path().join("color").display().to_string(),
            secure_settings_path: dir.path().join("secure.toml").display().to_string(),
            preferences_path: dir.path().join("preferences.toml").display().to_string(),
            ..Config::default()
        };
        let config_path = dir.path().join("config.toml");
        config.save_to(&config_path).unwrap();
        TempSetup { dir, config_path }
    }

    pub(crate) fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub(crate) fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Reopen the stores as a fresh invocation would.
    pub(crate) fn open(&self) -> FileGlyphSettings {
        super::open(Some(&self.config_path)).unwrap()
    }
}
