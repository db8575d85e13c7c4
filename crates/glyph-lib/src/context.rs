//! Settings context — resolves a [`Config`] into a ready facade.
//!
//! Consolidates the resolution used by every CLI command: store paths →
//! file-backed host → brightness table → resources → facade.

use crate::config::Config;
use crate::error::{GlyphError, Result};
use crate::keys::{CALL_ANIMATION_DEFAULT_RESOURCE, NOTIFS_ANIMATION_DEFAULT_RESOURCE};
use crate::resources::StringResources;
use crate::settings::{GlyphSettings, Host};
use crate::store::{FilePreferences, FileSecureSettings};

/// Facade over the file-backed host stores.
pub type FileGlyphSettings = GlyphSettings<FileSecureSettings, FilePreferences>;

/// Build a facade over the stores named by `config`.
///
/// Fails if the brightness table is empty or a store path cannot be resolved
/// (no configured path and no platform config directory).
pub fn open_settings(config: &Config) -> Result<FileGlyphSettings> {
    let levels = config.brightness_levels()?;

    let secure_path = config
        .secure_settings_path()
        .ok_or_else(|| GlyphError::Config("No path for secure settings".into()))?;
    let prefs_path = config
        .preferences_path()
        .ok_or_else(|| GlyphError::Config("No path for preferences".into()))?;
    log::debug!(
        "secure settings: {}, preferences: {}",
        secure_path.display(),
        prefs_path.display()
    );

    let resources = StringResources::new()
        .with(CALL_ANIMATION_DEFAULT_RESOURCE, &config.call_animation_default)
        .with(NOTIFS_ANIMATION_DEFAULT_RESOURCE, &config.notifs_animation_default);

    let host = Host::new(
        FileSecureSettings::new(secure_path),
        FilePreferences::new(prefs_path),
    );
    Ok(GlyphSettings::new(host, levels)
        .with_resources(resources)
        .with_vendor_color_path(&config.vendor_color_path))
}
