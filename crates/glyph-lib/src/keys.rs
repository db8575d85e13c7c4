//! Store key identifiers, resource names, and fixed paths.
//!
//! Secure-store keys hold `0`/`1` integers; preference keys hold typed values.
//! Per-app notification gates are keyed by the bare application identifier
//! and therefore have no constant here.

// ── Secure settings ──

/// Master switch for the whole glyph feature.
pub const GLYPH_ENABLE: &str = "glyph_enable";
pub const GLYPH_CALL_ENABLE: &str = "glyph_call_enable";
pub const GLYPH_NOTIFS_ENABLE: &str = "glyph_notifs_enable";

// ── User preferences ──

pub const GLYPH_FLIP_ENABLE: &str = "glyph_flip_enable";
pub const GLYPH_CHARGING_LEVEL_ENABLE: &str = "glyph_charging_level_enable";
pub const GLYPH_CHARGING_POWERSHARE_ENABLE: &str = "glyph_charging_powershare_enable";
pub const GLYPH_MUSIC_VISUALIZER_ENABLE: &str = "glyph_music_visualizer_enable";
pub const GLYPH_VOLUME_LEVEL_ENABLE: &str = "glyph_volume_level_enable";
/// 1-based index into the brightness table.
pub const GLYPH_BRIGHTNESS: &str = "glyph_brightness";
pub const GLYPH_CALL_SUB_ANIMATIONS: &str = "glyph_call_sub_animations";
pub const GLYPH_NOTIFS_SUB_ANIMATIONS: &str = "glyph_notifs_sub_animations";
/// String set of application identifiers with elevated notification treatment.
pub const GLYPH_NOTIFS_SUB_ESSENTIAL: &str = "glyph_notifs_sub_essential";

/// Every feature key in the preference store. Per-app gates share that
/// store, so none of these may be used as an application identifier.
pub const PREFERENCE_KEYS: &[&str] = &[
    GLYPH_FLIP_ENABLE,
    GLYPH_CHARGING_LEVEL_ENABLE,
    GLYPH_CHARGING_POWERSHARE_ENABLE,
    GLYPH_MUSIC_VISUALIZER_ENABLE,
    GLYPH_VOLUME_LEVEL_ENABLE,
    GLYPH_BRIGHTNESS,
    GLYPH_CALL_SUB_ANIMATIONS,
    GLYPH_NOTIFS_SUB_ANIMATIONS,
    GLYPH_NOTIFS_SUB_ESSENTIAL,
];

// ── String resources ──

pub const CALL_ANIMATION_DEFAULT_RESOURCE: &str = "glyph_settings_call_animations_default";
pub const NOTIFS_ANIMATION_DEFAULT_RESOURCE: &str = "glyph_settings_notifs_animations_default";

// ── Vendor color variant ──

/// Vendor file whose first line names the device color variant.
pub const VENDOR_COLOR_PATH: &str = "/mnt/vendor/persist/color";
/// First line of the vendor color file on white-variant devices.
pub const WHITE_VARIANT: &str = "white";

/// Brightness setting used when nothing is stored.
pub const DEFAULT_BRIGHTNESS_SETTING: i32 = 3;
/// Brightness setting used when nothing is stored on white-variant devices.
pub const WHITE_VARIANT_BRIGHTNESS_SETTING: i32 = 2;
