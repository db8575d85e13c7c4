//! Glyph settings facade — gated accessors over the host stores.
//!
//! Every feature query is the feature's own stored value AND-ed with the
//! master switch. The facade holds no state of its own: each call goes
//! straight to the stores (and, for brightness, to the vendor color file).
//!
//! A facade built with [`GlyphSettings::uninitialized`] has no host. Every
//! operation then records one `Context is not initialized` diagnostic and
//! returns its documented default; writers return `false`.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::brightness::BrightnessLevels;
use crate::diagnostics::{Diagnostics, LogDiagnostics};
use crate::keys::*;
use crate::resources::{Resources, StringResources};
use crate::store::{Preferences, SecureSettings};
use crate::vendor::{FsVendorFile, VendorFile};

/// Diagnostic tag for facade errors.
pub const LOG_TAG: &str = "GlyphSettingsManager";

const NOT_INITIALIZED: &str = "Context is not initialized";

/// The pair of host stores the facade reads and writes.
#[derive(Debug)]
pub struct Host<S, P> {
    pub secure: S,
    pub prefs: P,
}

impl<S, P> Host<S, P> {
    pub fn new(secure: S, prefs: P) -> Self {
        Host { secure, prefs }
    }
}

/// Point-in-time snapshot of every facade query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlyphStatus {
    pub master: bool,
    pub call: bool,
    pub notifs: bool,
    pub flip: bool,
    pub charging: bool,
    pub powershare: bool,
    pub music_visualizer: bool,
    pub volume_level: bool,
    pub brightness_setting: i32,
    pub brightness: u32,
    pub call_animation: String,
    pub notifs_animation: String,
}

pub struct GlyphSettings<S, P> {
    host: Option<Host<S, P>>,
    levels: BrightnessLevels,
    vendor_color_path: PathBuf,
    vendor: Box<dyn VendorFile>,
    resources: Box<dyn Resources>,
    diagnostics: Box<dyn Diagnostics>,
}

impl<S: SecureSettings, P: Preferences> GlyphSettings<S, P> {
    /// Facade bound to `host`, with filesystem vendor reads, built-in
    /// resources, and `log` diagnostics.
    pub fn new(host: Host<S, P>, levels: BrightnessLevels) -> Self {
        Self::build(Some(host), levels)
    }

    /// Facade with no host. Every call degrades to its default.
    pub fn uninitialized(levels: BrightnessLevels) -> Self {
        Self::build(None, levels)
    }

    fn build(host: Option<Host<S, P>>, levels: BrightnessLevels) -> Self {
        GlyphSettings {
            host,
            levels,
            vendor_color_path: PathBuf::from(VENDOR_COLOR_PATH),
            vendor: Box::new(FsVendorFile),
            resources: Box::new(StringResources::default()),
            diagnostics: Box::new(LogDiagnostics),
        }
    }

    pub fn with_vendor(mut self, vendor: impl VendorFile + 'static) -> Self {
        self.vendor = Box::new(vendor);
        self
    }

    pub fn with_vendor_color_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.vendor_color_path = path.into();
        self
    }

    pub fn with_resources(mut self, resources: impl Resources + 'static) -> Self {
        self.resources = Box::new(resources);
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: impl Diagnostics + 'static) -> Self {
        self.diagnostics = Box::new(diagnostics);
        self
    }

    pub fn has_host(&self) -> bool {
        self.host.is_some()
    }

    /// The bound host stores, without the uninitialized diagnostic.
    pub fn host(&self) -> Option<&Host<S, P>> {
        self.host.as_ref()
    }

    pub fn levels(&self) -> &BrightnessLevels {
        &self.levels
    }

    pub fn vendor_color_path(&self) -> &Path {
        &self.vendor_color_path
    }

    /// Host guard: records the diagnostic when no host is bound.
    fn checked_host(&self) -> Option<&Host<S, P>> {
        if self.host.is_none() {
            self.diagnostics.error(LOG_TAG, NOT_INITIALIZED);
        }
        self.host.as_ref()
    }

    // ── Gate helpers (host already checked) ──

    fn master(host: &Host<S, P>) -> bool {
        host.secure.get_int(GLYPH_ENABLE, 1) != 0
    }

    fn secure_gated(host: &Host<S, P>, key: &str) -> bool {
        host.secure.get_int(key, 1) != 0 && Self::master(host)
    }

    fn pref_gated(&self, key: &str) -> bool {
        let Some(host) = self.checked_host() else {
            return false;
        };
        host.prefs.get_bool(key, false) && Self::master(host)
    }

    fn write_flag(&self, key: &str, enable: bool) -> bool {
        let Some(host) = self.checked_host() else {
            return false;
        };
        host.secure.put_int(key, i32::from(enable))
    }

    fn animation(&self, key: &str, resource: &str) -> String {
        let default = self.resources.get_string(resource);
        let Some(host) = self.checked_host() else {
            return default;
        };
        host.prefs.get_string(key, &default)
    }

    // ── Master switch ──

    pub fn set_master_enabled(&self, enable: bool) -> bool {
        self.write_flag(GLYPH_ENABLE, enable)
    }

    pub fn is_master_enabled(&self) -> bool {
        self.checked_host().is_some_and(Self::master)
    }

    // ── Preference-backed toggles ──

    pub fn is_flip_enabled(&self) -> bool {
        self.pref_gated(GLYPH_FLIP_ENABLE)
    }

    pub fn is_charging_enabled(&self) -> bool {
        self.pref_gated(GLYPH_CHARGING_LEVEL_ENABLE)
    }

    pub fn is_powershare_enabled(&self) -> bool {
        self.pref_gated(GLYPH_CHARGING_POWERSHARE_ENABLE)
    }

    pub fn is_music_visualizer_enabled(&self) -> bool {
        self.pref_gated(GLYPH_MUSIC_VISUALIZER_ENABLE)
    }

    pub fn is_volume_level_enabled(&self) -> bool {
        self.pref_gated(GLYPH_VOLUME_LEVEL_ENABLE)
    }

    // ── Brightness ──

    /// Stored 1-based brightness setting, clamped into the table.
    ///
    /// When nothing is stored the default is 3, or 2 on white-variant
    /// devices. The vendor color file is re-read on every call.
    pub fn brightness_setting(&self) -> i32 {
        let Some(host) = self.checked_host() else {
            return DEFAULT_BRIGHTNESS_SETTING;
        };
        self.levels
            .clamp_setting(host.prefs.get_int(GLYPH_BRIGHTNESS, self.default_brightness_setting()))
    }

    /// Driver brightness level for the current setting.
    pub fn brightness(&self) -> u32 {
        if self.checked_host().is_none() {
            return 0;
        }
        self.levels.level(self.brightness_setting())
    }

    fn default_brightness_setting(&self) -> i32 {
        match self.vendor.read_first_line(&self.vendor_color_path) {
            Some(line) if line == WHITE_VARIANT => WHITE_VARIANT_BRIGHTNESS_SETTING,
            _ => DEFAULT_BRIGHTNESS_SETTING,
        }
    }

    // ── Calls ──

    pub fn is_call_enabled(&self) -> bool {
        self.checked_host()
            .is_some_and(|host| Self::secure_gated(host, GLYPH_CALL_ENABLE))
    }

    pub fn set_call_enabled(&self, enable: bool) -> bool {
        self.write_flag(GLYPH_CALL_ENABLE, enable)
    }

    pub fn call_animation(&self) -> String {
        self.animation(GLYPH_CALL_SUB_ANIMATIONS, CALL_ANIMATION_DEFAULT_RESOURCE)
    }

    // ── Notifications ──

    pub fn is_notifs_enabled(&self) -> bool {
        self.checked_host()
            .is_some_and(|host| Self::secure_gated(host, GLYPH_NOTIFS_ENABLE))
    }

    pub fn set_notifs_enabled(&self, enable: bool) -> bool {
        self.write_flag(GLYPH_NOTIFS_ENABLE, enable)
    }

    pub fn notifs_animation(&self) -> String {
        self.animation(GLYPH_NOTIFS_SUB_ANIMATIONS, NOTIFS_ANIMATION_DEFAULT_RESOURCE)
    }

    /// Per-app gate. Apps are enabled unless explicitly opted out.
    pub fn is_notifs_app_enabled(&self, app: &str) -> bool {
        let Some(host) = self.checked_host() else {
            return false;
        };
        host.prefs.get_bool(app, true) && Self::secure_gated(host, GLYPH_NOTIFS_ENABLE)
    }

    pub fn is_notifs_app_essential(&self, app: &str) -> bool {
        let Some(host) = self.checked_host() else {
            return false;
        };
        host.prefs
            .get_string_set(GLYPH_NOTIFS_SUB_ESSENTIAL, BTreeSet::new())
            .contains(app)
            && Self::secure_gated(host, GLYPH_NOTIFS_ENABLE)
    }

    /// Snapshot of every query. Without a host, each field records its own
    /// diagnostic.
    pub fn status(&self) -> GlyphStatus {
        GlyphStatus {
            master: self.is_master_enabled(),
            call: self.is_call_enabled(),
            notifs: self.is_notifs_enabled(),
            flip: self.is_flip_enabled(),
            charging: self.is_charging_enabled(),
            powershare: self.is_powershare_enabled(),
            music_visualizer: self.is_music_visualizer_enabled(),
            volume_level: self.is_volume_level_enabled(),
            brightness_setting: self.brightness_setting(),
            brightness: self.brightness(),
            call_animation: self.call_animation(),
            notifs_animation: self.notifs_animation(),
        }
    }
}
