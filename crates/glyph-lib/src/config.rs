//! Application configuration — TOML-based, platform-aware paths.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::brightness::BrightnessLevels;
use crate::error::Result;
use crate::keys::VENDOR_COLOR_PATH;
use crate::resources::{DEFAULT_CALL_ANIMATION, DEFAULT_NOTIFS_ANIMATION};
use crate::store::file::{read_toml, write_toml_atomic};

/// Header comment prepended to saved config files.
const CONFIG_HEADER: &str =
    "# Glyph configuration — changes made outside the app may be overwritten.\n\n";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Driver brightness levels, indexed by the 1-based brightness setting.
    #[serde(default = "default_brightness_levels")]
    pub brightness_levels: Vec<u32>,

    /// File whose first line names the device color variant.
    #[serde(default = "default_vendor_color_path")]
    pub vendor_color_path: String,

    /// Secure settings file. Empty = `secure.toml` in the config directory.
    #[serde(default)]
    pub secure_settings_path: String,

    /// User preferences file. Empty = `preferences.toml` in the config directory.
    #[serde(default)]
    pub preferences_path: String,

    /// Localized default for the call animation.
    #[serde(default = "default_call_animation")]
    pub call_animation_default: String,

    /// Localized default for the notification animation.
    #[serde(default = "default_notifs_animation")]
    pub notifs_animation_default: String,
}

fn default_brightness_levels() -> Vec<u32> {
    vec![1024, 2048, 3072, 4095]
}
fn default_vendor_color_path() -> String {
    VENDOR_COLOR_PATH.into()
}
fn default_call_animation() -> String {
    DEFAULT_CALL_ANIMATION.into()
}
fn default_notifs_animation() -> String {
    DEFAULT_NOTIFS_ANIMATION.into()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            brightness_levels: default_brightness_levels(),
            vendor_color_path: default_vendor_color_path(),
            secure_settings_path: String::new(),
            preferences_path: String::new(),
            call_animation_default: default_call_animation(),
            notifs_animation_default: default_notifs_animation(),
        }
    }
}

/// Validation errors that [`Config::validate`] can return.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// `brightness_levels` is empty.
    EmptyBrightnessLevels,
    /// `brightness_levels` contains a zero or is not strictly ascending.
    InvalidBrightnessLevels(String),
    /// `vendor_color_path` is empty or whitespace-only.
    EmptyVendorColorPath,
    /// An animation default is empty (`field` names which one).
    EmptyAnimationDefault { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyBrightnessLevels => {
                write!(f, "brightness_levels must have at least one level")
            }
            ValidationError::InvalidBrightnessLevels(e) => {
                write!(f, "Invalid brightness_levels: {e}")
            }
            ValidationError::EmptyVendorColorPath => write!(f, "vendor_color_path cannot be empty"),
            ValidationError::EmptyAnimationDefault { field } => {
                write!(f, "{field} cannot be empty")
            }
        }
    }
}

impl Config {
    /// Platform-specific config directory.
    pub fn dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("glyph"))
    }

    /// Full path to config file.
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|d| d.join("config.toml"))
    }

    /// Load config from disk, or return defaults if not found.
    pub fn load() -> Self {
        let (config, warnings) = Self::load_with_warnings();
        for w in &warnings {
            log::warn!("{w}");
        }
        config
    }

    /// Save config to an arbitrary path atomically (write to temp file, then rename).
    ///
    /// A header comment is prepended to warn that manual edits may be overwritten.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        write_toml_atomic(path, CONFIG_HEADER, self)
    }

    /// Load config from an arbitrary path, returning the config and any parse warnings.
    ///
    /// Returns `(defaults, [])` if the file doesn't exist.
    /// Returns `(defaults, [warning])` if the file exists but can't be parsed.
    pub fn load_from(path: &Path) -> (Self, Vec<String>) {
        match read_toml(path) {
            Ok(config) => (config, vec![]),
            Err(e) => {
                let warning = format!(
                    "config parse error ({}), using defaults: {e}",
                    path.display()
                );
                (Self::default(), vec![warning])
            }
        }
    }

    /// Load config from the default path, returning the config and any parse warnings.
    pub fn load_with_warnings() -> (Self, Vec<String>) {
        let Some(path) = Self::path() else {
            return (Self::default(), vec![]);
        };
        Self::load_from(&path)
    }

    /// The configured brightness table.
    pub fn brightness_levels(&self) -> Result<BrightnessLevels> {
        BrightnessLevels::new(self.brightness_levels.clone())
    }

    /// Effective secure settings file.
    pub fn secure_settings_path(&self) -> Option<PathBuf> {
        Self::store_path(&self.secure_settings_path, "secure.toml")
    }

    /// Effective preferences file.
    pub fn preferences_path(&self) -> Option<PathBuf> {
        Self::store_path(&self.preferences_path, "preferences.toml")
    }

    fn store_path(configured: &str, file_name: &str) -> Option<PathBuf> {
        let configured = configured.trim();
        if configured.is_empty() {
            Self::dir().map(|d| d.join(file_name))
        } else {
            Some(PathBuf::from(configured))
        }
    }

    /// Validate the entire config, collecting all errors.
    pub fn validate(&self) -> std::result::Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.brightness_levels.is_empty() {
            errors.push(ValidationError::EmptyBrightnessLevels);
        } else if let Err(e) = validate_levels(&self.brightness_levels) {
            errors.push(ValidationError::InvalidBrightnessLevels(e));
        }

        if self.vendor_color_path.trim().is_empty() {
            errors.push(ValidationError::EmptyVendorColorPath);
        }

        if self.call_animation_default.trim().is_empty() {
            errors.push(ValidationError::EmptyAnimationDefault {
                field: "call_animation_default",
            });
        }
        if self.notifs_animation_default.trim().is_empty() {
            errors.push(ValidationError::EmptyAnimationDefault {
                field: "notifs_animation_default",
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn validate_levels(levels: &[u32]) -> std::result::Result<(), String> {
    if let Some(pos) = levels.iter().position(|&l| l == 0) {
        return Err(format!("level {} is zero", pos + 1));
    }
    for (i, pair) in levels.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(format!(
                "levels must be strictly ascending (level {} = {} after {})",
                i + 2,
                pair[1],
                pair[0]
            ));
        }
    }
    Ok(())
}
