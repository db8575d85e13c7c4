//! Localized string resources for animation defaults.

use std::collections::HashMap;

use crate::keys::{CALL_ANIMATION_DEFAULT_RESOURCE, NOTIFS_ANIMATION_DEFAULT_RESOURCE};

/// Built-in default call animation name.
pub const DEFAULT_CALL_ANIMATION: &str = "Radiate";
/// Built-in default notification animation name.
pub const DEFAULT_NOTIFS_ANIMATION: &str = "Oi!";

/// Resolves a resource name to a localized string.
pub trait Resources {
    fn get_string(&self, name: &str) -> String;
}

/// Name → string table seeded with the built-in animation defaults.
///
/// Unknown names resolve to an empty string.
#[derive(Debug, Clone)]
pub struct StringResources {
    strings: HashMap<String, String>,
}

impl Default for StringResources {
    fn default() -> Self {
        let mut strings = HashMap::new();
        strings.insert(
            CALL_ANIMATION_DEFAULT_RESOURCE.to_string(),
            DEFAULT_CALL_ANIMATION.to_string(),
        );
        strings.insert(
            NOTIFS_ANIMATION_DEFAULT_RESOURCE.to_string(),
            DEFAULT_NOTIFS_ANIMATION.to_string(),
        );
        StringResources { strings }
    }
}

impl StringResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override (or add) a single entry.
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.strings.insert(name.to_string(), value.to_string());
        self
    }
}

impl Resources for StringResources {
    fn get_string(&self, name: &str) -> String {
        match self.strings.get(name) {
            Some(s) => s.clone(),
            None => {
                log::warn!("unknown string resource: {name}");
                String::new()
            }
        }
    }
}
