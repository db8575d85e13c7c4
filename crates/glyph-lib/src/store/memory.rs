//! In-memory stores for tests and embedding.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::{PrefValue, Preferences, SecureSettings};
use crate::error::Result;

/// In-memory secure settings. Set `reject_writes` to make every
/// [`put_int`](SecureSettings::put_int) report failure without storing.
#[derive(Debug, Default)]
pub struct MemorySecureSettings {
    pub values: RefCell<HashMap<String, i32>>,
    pub reject_writes: Cell<bool>,
}

impl MemorySecureSettings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SecureSettings for MemorySecureSettings {
    fn get_int(&self, key: &str, default: i32) -> i32 {
        self.values.borrow().get(key).copied().unwrap_or(default)
    }

    fn put_int(&self, key: &str, value: i32) -> bool {
        if self.reject_writes.get() {
            return false;
        }
        self.values.borrow_mut().insert(key.to_string(), value);
        true
    }
}

/// In-memory user preferences.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    pub values: RefCell<HashMap<String, PrefValue>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Preferences for MemoryPreferences {
    fn get(&self, key: &str) -> Option<PrefValue> {
        self.values.borrow().get(key).cloned()
    }

    fn put(&self, key: &str, value: Option<PrefValue>) -> Result<()> {
        let mut values = self.values.borrow_mut();
        match value {
            Some(v) => {
                values.insert(key.to_string(), v);
            }
            None => {
                values.remove(key);
            }
        }
        Ok(())
    }
}
