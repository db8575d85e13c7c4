//! Host store capabilities — secure settings and user preferences.
//!
//! The settings facade only ever reads through these traits (plus
//! [`SecureSettings::put_int`]). Concrete backends live in [`file`] and
//! [`memory`].

pub mod file;
pub mod memory;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use file::{FilePreferences, FileSecureSettings};
pub use memory::{MemoryPreferences, MemorySecureSettings};

// ── Secure settings ──

/// System-wide integer key/value store.
pub trait SecureSettings {
    /// Read `key`, or `default` when it is absent.
    fn get_int(&self, key: &str, default: i32) -> i32;

    /// Write `key`. Returns whether the store acknowledged the write.
    fn put_int(&self, key: &str, value: i32) -> bool;
}

impl<T: SecureSettings + ?Sized> SecureSettings for &T {
    fn get_int(&self, key: &str, default: i32) -> i32 {
        (**self).get_int(key, default)
    }

    fn put_int(&self, key: &str, value: i32) -> bool {
        (**self).put_int(key, value)
    }
}

// ── User preferences ──

/// A typed preference value.
///
/// Untagged so that preference files stay plain TOML
/// (`flag = true`, `level = 2`, `name = "x"`, `apps = ["a", "b"]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Bool(bool),
    Int(i64),
    String(String),
    StringSet(BTreeSet<String>),
}

impl PrefValue {
    fn type_name(&self) -> &'static str {
        match self {
            PrefValue::Bool(_) => "bool",
            PrefValue::Int(_) => "int",
            PrefValue::String(_) => "string",
            PrefValue::StringSet(_) => "string set",
        }
    }
}

fn type_mismatch<T>(key: &str, expected: &str, found: &PrefValue, default: T) -> T {
    log::warn!(
        "preference {key} holds a {} value, expected {expected}; using default",
        found.type_name()
    );
    default
}

/// Per-application typed key/value store.
///
/// Implementors provide raw [`get`](Preferences::get) and
/// [`put`](Preferences::put); the typed accessors are derived from them. A
/// stored value of the wrong type reads as the caller's default.
pub trait Preferences {
    /// Raw lookup. `None` when the key is absent.
    fn get(&self, key: &str) -> Option<PrefValue>;

    /// Raw write. `None` removes the key.
    fn put(&self, key: &str, value: Option<PrefValue>) -> Result<()>;

    fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            None => default,
            Some(PrefValue::Bool(b)) => b,
            Some(other) => type_mismatch(key, "bool", &other, default),
        }
    }

    fn get_int(&self, key: &str, default: i32) -> i32 {
        match self.get(key) {
            None => default,
            Some(PrefValue::Int(n)) => i32::try_from(n).unwrap_or_else(|_| {
                log::warn!("preference {key} = {n} does not fit in i32; using default");
                default
            }),
            Some(other) => type_mismatch(key, "int", &other, default),
        }
    }

    fn get_string(&self, key: &str, default: &str) -> String {
        match self.get(key) {
            None => default.to_string(),
            Some(PrefValue::String(s)) => s,
            Some(other) => type_mismatch(key, "string", &other, default.to_string()),
        }
    }

    fn get_string_set(&self, key: &str, default: BTreeSet<String>) -> BTreeSet<String> {
        match self.get(key) {
            None => default,
            Some(PrefValue::StringSet(set)) => set,
            Some(other) => type_mismatch(key, "string set", &other, default),
        }
    }

    fn put_bool(&self, key: &str, value: bool) -> Result<()> {
        self.put(key, Some(PrefValue::Bool(value)))
    }

    fn put_int(&self, key: &str, value: i32) -> Result<()> {
        self.put(key, Some(PrefValue::Int(i64::from(value))))
    }

    fn put_string(&self, key: &str, value: &str) -> Result<()> {
        self.put(key, Some(PrefValue::String(value.to_string())))
    }

    fn put_string_set(&self, key: &str, value: BTreeSet<String>) -> Result<()> {
        self.put(key, Some(PrefValue::StringSet(value)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.put(key, None)
    }
}

impl<T: Preferences + ?Sized> Preferences for &T {
    fn get(&self, key: &str) -> Option<PrefValue> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: Option<PrefValue>) -> Result<()> {
        (**self).put(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_reads_use_default_when_absent() {
        let prefs = MemoryPreferences::new();
        assert!(!prefs.get_bool("missing", false));
        assert!(prefs.get_bool("missing", true));
        assert_eq!(prefs.get_int("missing", 3), 3);
        assert_eq!(prefs.get_string("missing", "fallback"), "fallback");
        assert!(prefs.get_string_set("missing", BTreeSet::new()).is_empty());
    }

    #[test]
    fn typed_reads_return_stored_values() {
        let prefs = MemoryPreferences::new();
        prefs.put_bool("flag", true).unwrap();
        prefs.put_int("level", 2).unwrap();
        prefs.put_string("name", "Pulse").unwrap();
        prefs
            .put_string_set("apps", BTreeSet::from(["com.x".to_string()]))
            .unwrap();

        assert!(prefs.get_bool("flag", false));
        assert_eq!(prefs.get_int("level", 3), 2);
        assert_eq!(prefs.get_string("name", ""), "Pulse");
        assert!(prefs.get_string_set("apps", BTreeSet::new()).contains("com.x"));
    }

    #[test]
    fn wrong_type_reads_as_default() {
        let prefs = MemoryPreferences::new();
        prefs.put_string("flag", "yes").unwrap();
        assert!(!prefs.get_bool("flag", false));
        assert_eq!(prefs.get_int("flag", 7), 7);
    }

    #[test]
    fn out_of_range_int_reads_as_default() {
        let prefs = MemoryPreferences::new();
        prefs
            .put("level", Some(PrefValue::Int(i64::from(i32::MAX) + 1)))
            .unwrap();
        assert_eq!(prefs.get_int("level", 3), 3);
    }

    #[test]
    fn remove_restores_default() {
        let prefs = MemoryPreferences::new();
        prefs.put_bool("flag", true).unwrap();
        prefs.remove("flag").unwrap();
        assert!(!prefs.get_bool("flag", false));
    }

    #[test]
    fn reference_forwards_to_store() {
        let secure = MemorySecureSettings::new();
        let by_ref: &MemorySecureSettings = &secure;
        assert!(SecureSettings::put_int(&by_ref, "k", 0));
        assert_eq!(secure.get_int("k", 1), 0);
    }
}
