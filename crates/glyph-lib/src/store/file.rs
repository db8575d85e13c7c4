//! TOML-file-backed stores.
//!
//! Each call re-reads the backing file; writes replace it atomically. A
//! missing file is an empty store.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{PrefValue, Preferences, SecureSettings};
use crate::error::Result;

const SECURE_HEADER: &str = "# Glyph secure settings — managed by glyph, do not edit by hand.\n\n";
const PREFERENCES_HEADER: &str = "# Glyph preferences — changes made outside the app may be overwritten.\n\n";

/// Read a TOML document, returning `T::default()` if the file doesn't exist.
pub(crate) fn read_toml<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(T::default()),
        Err(e) => Err(e.into()),
    }
}

/// Write `value` as TOML to `path` atomically (write to temp file, then rename).
///
/// `header` is prepended verbatim.
pub(crate) fn write_toml_atomic<T: Serialize>(path: &Path, header: &str, value: &T) -> Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir)?;
    }
    let serialized = toml::to_string_pretty(value)?;
    let contents = format!("{header}{serialized}");
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, &contents)?;
    match std::fs::rename(&tmp, path) {
        Ok(()) => Ok(()),
        Err(_) => {
            // Rename can fail across filesystems; fall back to direct write + cleanup
            let result = std::fs::write(path, &contents);
            let _ = std::fs::remove_file(&tmp);
            result.map_err(Into::into)
        }
    }
}

// ── Secure settings ──

/// Secure settings persisted as a flat TOML table of integers.
#[derive(Debug, Clone)]
pub struct FileSecureSettings {
    path: PathBuf,
}

impl FileSecureSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSecureSettings { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, i64>> {
        read_toml(&self.path)
    }
}

impl SecureSettings for FileSecureSettings {
    fn get_int(&self, key: &str, default: i32) -> i32 {
        match self.load() {
            Ok(values) => match values.get(key) {
                Some(&n) => i32::try_from(n).unwrap_or_else(|_| {
                    log::warn!("secure setting {key} = {n} does not fit in i32; using default");
                    default
                }),
                None => default,
            },
            Err(e) => {
                log::warn!("secure settings unreadable ({}): {e}", self.path.display());
                default
            }
        }
    }

    fn put_int(&self, key: &str, value: i32) -> bool {
        let mut values = match self.load() {
            Ok(values) => values,
            Err(e) => {
                log::warn!(
                    "refusing to overwrite unreadable secure settings ({}): {e}",
                    self.path.display()
                );
                return false;
            }
        };
        values.insert(key.to_string(), i64::from(value));
        match write_toml_atomic(&self.path, SECURE_HEADER, &values) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("secure settings write failed ({}): {e}", self.path.display());
                false
            }
        }
    }
}

// ── User preferences ──

/// User preferences persisted as a flat TOML table of typed values.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FilePreferences { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every stored preference, in key order.
    pub fn entries(&self) -> Result<BTreeMap<String, PrefValue>> {
        read_toml(&self.path)
    }
}

impl Preferences for FilePreferences {
    fn get(&self, key: &str) -> Option<PrefValue> {
        match self.entries() {
            Ok(mut values) => values.remove(key),
            Err(e) => {
                log::warn!("preferences unreadable ({}): {e}", self.path.display());
                None
            }
        }
    }

    fn put(&self, key: &str, value: Option<PrefValue>) -> Result<()> {
        let mut values = self.entries()?;
        match value {
            Some(v) => {
                values.insert(key.to_string(), v);
            }
            None => {
                values.remove(key);
            }
        }
        write_toml_atomic(&self.path, PREFERENCES_HEADER, &values)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn secure_missing_file_reads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSecureSettings::new(dir.path().join("secure.toml"));
        assert_eq!(store.get_int("glyph_enable", 1), 1);
    }

    #[test]
    fn secure_put_then_get_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secure.toml");
        assert!(FileSecureSettings::new(&path).put_int("glyph_enable", 0));

        let reopened = FileSecureSettings::new(&path);
        assert_eq!(reopened.get_int("glyph_enable", 1), 0);
    }

    #[test]
    fn secure_put_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("secure.toml");
        assert!(FileSecureSettings::new(&path).put_int("glyph_call_enable", 1));
        assert!(path.exists());
    }

    #[test]
    fn secure_put_cleans_up_tmp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secure.toml");
        FileSecureSettings::new(&path).put_int("glyph_enable", 1);
        assert!(!dir.path().join("secure.toml.tmp").exists());
    }

    #[test]
    fn secure_file_has_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secure.toml");
        FileSecureSettings::new(&path).put_int("glyph_enable", 1);
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("# Glyph secure settings"));
    }

    #[test]
    fn secure_corrupt_file_reads_default_and_rejects_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secure.toml");
        std::fs::write(&path, "this is { not valid toml").unwrap();

        let store = FileSecureSettings::new(&path);
        assert_eq!(store.get_int("glyph_enable", 1), 1);
        assert!(!store.put_int("glyph_enable", 0));
        // The corrupt file is left in place for inspection
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "this is { not valid toml");
    }

    #[test]
    fn secure_preserves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSecureSettings::new(dir.path().join("secure.toml"));
        assert!(store.put_int("glyph_enable", 0));
        assert!(store.put_int("glyph_call_enable", 0));
        assert_eq!(store.get_int("glyph_enable", 1), 0);
        assert_eq!(store.get_int("glyph_call_enable", 1), 0);
    }

    #[test]
    fn prefs_round_trip_all_types() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        let prefs = FilePreferences::new(&path);
        prefs.put_bool("glyph_flip_enable", true).unwrap();
        prefs.put_int("glyph_brightness", 4).unwrap();
        prefs.put_string("glyph_call_sub_animations", "Pulse").unwrap();
        prefs
            .put_string_set(
                "glyph_notifs_sub_essential",
                BTreeSet::from(["com.x".to_string(), "com.y".to_string()]),
            )
            .unwrap();
        prefs.put_bool("com.example.app", false).unwrap();

        let reopened = FilePreferences::new(&path);
        assert!(reopened.get_bool("glyph_flip_enable", false));
        assert_eq!(reopened.get_int("glyph_brightness", 3), 4);
        assert_eq!(reopened.get_string("glyph_call_sub_animations", ""), "Pulse");
        let set = reopened.get_string_set("glyph_notifs_sub_essential", BTreeSet::new());
        assert_eq!(set.len(), 2);
        assert!(set.contains("com.y"));
        assert!(!reopened.get_bool("com.example.app", true));
    }

    #[test]
    fn prefs_dotted_app_keys_are_not_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        let prefs = FilePreferences::new(&path);
        prefs.put_bool("com.x", false).unwrap();
        prefs.put_bool("com.y", true).unwrap();

        let entries = prefs.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries.get("com.x"), Some(&PrefValue::Bool(false)));
    }

    #[test]
    fn prefs_remove_key() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = FilePreferences::new(dir.path().join("preferences.toml"));
        prefs.put_bool("glyph_flip_enable", true).unwrap();
        prefs.remove("glyph_flip_enable").unwrap();
        assert!(prefs.get("glyph_flip_enable").is_none());
    }

    #[test]
    fn prefs_hand_written_file_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        std::fs::write(
            &path,
            r#"
glyph_flip_enable = true
glyph_brightness = 1
glyph_notifs_sub_animations = "Oi!"
glyph_notifs_sub_essential = ["com.x"]
"com.y" = false
"#,
        )
        .unwrap();

        let prefs = FilePreferences::new(&path);
        assert!(prefs.get_bool("glyph_flip_enable", false));
        assert_eq!(prefs.get_int("glyph_brightness", 3), 1);
        assert_eq!(prefs.get_string("glyph_notifs_sub_animations", ""), "Oi!");
        assert!(
            prefs
                .get_string_set("glyph_notifs_sub_essential", BTreeSet::new())
                .contains("com.x")
        );
        assert!(!prefs.get_bool("com.y", true));
    }

    #[test]
    fn prefs_corrupt_file_reads_none_and_put_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        std::fs::write(&path, "this is { not valid toml").unwrap();

        let prefs = FilePreferences::new(&path);
        assert!(prefs.get("anything").is_none());
        assert!(prefs.put_bool("glyph_flip_enable", true).is_err());
    }
}
