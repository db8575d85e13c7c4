//! `set` and `essential` subcommands — user preference edits.

use std::collections::BTreeSet;
use std::path::Path;

use glyph_lib::Host;

use super::{EssentialAction, GlyphError, PrefName, Preferences, Result, keys};

/// Parse a toggle value. Accepts on/off, true/false, yes/no, 1/0.
fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        other => Err(GlyphError::Config(format!(
            "invalid toggle value \"{other}\" (expected on or off)"
        ))),
    }
}

pub(super) fn cmd_set(pref: PrefName, value: &str, custom_path: Option<&Path>) -> Result<()> {
    let settings = super::open(custom_path)?;
    let Some(host) = settings.host() else {
        return Err(GlyphError::Store("no settings host".into()));
    };

    let toggle_key = match pref {
        PrefName::Flip => keys::GLYPH_FLIP_ENABLE,
        PrefName::Charging => keys::GLYPH_CHARGING_LEVEL_ENABLE,
        PrefName::Powershare => keys::GLYPH_CHARGING_POWERSHARE_ENABLE,
        PrefName::MusicVisualizer => keys::GLYPH_MUSIC_VISUALIZER_ENABLE,
        PrefName::VolumeLevel => keys::GLYPH_VOLUME_LEVEL_ENABLE,
        PrefName::Brightness => {
            let setting: i32 = value.trim().parse().map_err(|_| {
                GlyphError::Brightness(format!("\"{value}\" is not a brightness setting"))
            })?;
            settings.levels().check_setting(setting)?;
            host.prefs.put_int(keys::GLYPH_BRIGHTNESS, setting)?;
            println!(
                "{} = {setting} (level {})",
                keys::GLYPH_BRIGHTNESS,
                settings.levels().level(setting)
            );
            return Ok(());
        }
        PrefName::CallAnimation => {
            return set_animation(host, keys::GLYPH_CALL_SUB_ANIMATIONS, value);
        }
        PrefName::NotifsAnimation => {
            return set_animation(host, keys::GLYPH_NOTIFS_SUB_ANIMATIONS, value);
        }
    };

    let enabled = parse_bool(value)?;
    host.prefs.put_bool(toggle_key, enabled)?;
    println!("{toggle_key} = {enabled}");
    Ok(())
}

fn set_animation<S>(host: &Host<S, impl Preferences>, key: &str, value: &str) -> Result<()> {
    let name = value.trim();
    if name.is_empty() {
        return Err(GlyphError::Config("animation name cannot be empty".into()));
    }
    host.prefs.put_string(key, name)?;
    println!("{key} = {name}");
    Ok(())
}

pub(super) fn cmd_essential(action: EssentialAction, custom_path: Option<&Path>) -> Result<()> {
    let settings = super::open(custom_path)?;
    let Some(host) = settings.host() else {
        return Err(GlyphError::Store("no settings host".into()));
    };

    let mut essential = host
        .prefs
        .get_string_set(keys::GLYPH_NOTIFS_SUB_ESSENTIAL, BTreeSet::new());
    let changed = match &action {
        EssentialAction::Add { app } => essential.insert(app.clone()),
        EssentialAction::Remove { app } => essential.remove(app),
    };

    if changed {
        host.prefs
            .put_string_set(keys::GLYPH_NOTIFS_SUB_ESSENTIAL, essential)?;
    }
    match (&action, changed) {
        (EssentialAction::Add { app }, true) => println!("{app} added to essential apps"),
        (EssentialAction::Add { app }, false) => println!("{app} is already essential"),
        (EssentialAction::Remove { app }, true) => println!("{app} removed from essential apps"),
        (EssentialAction::Remove { app }, false) => println!("{app} was not essential"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::test_support::TempSetup;

    #[test]
    fn parse_bool_accepts_common_spellings() {
        for v in ["on", "ON", "true", "yes", "1", " on "] {
            assert!(parse_bool(v).unwrap(), "{v}");
        }
        for v in ["off", "False", "no", "0"] {
            assert!(!parse_bool(v).unwrap(), "{v}");
        }
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    fn set_flip_persists_and_is_gated() {
        let setup = TempSetup::new();
        cmd_set(PrefName::Flip, "on", Some(setup.config_path())).unwrap();
        // Master defaults to on
        assert!(setup.open().is_flip_enabled());
        cmd_set(PrefName::Flip, "off", Some(setup.config_path())).unwrap();
        assert!(!setup.open().is_flip_enabled());
    }

    #[test]
    fn every_toggle_pref_writes_its_own_key() {
        let setup = TempSetup::new();
        let toggles = [
            (PrefName::Flip, keys::GLYPH_FLIP_ENABLE),
            (PrefName::Charging, keys::GLYPH_CHARGING_LEVEL_ENABLE),
            (PrefName::Powershare, keys::GLYPH_CHARGING_POWERSHARE_ENABLE),
            (PrefName::MusicVisualizer, keys::GLYPH_MUSIC_VISUALIZER_ENABLE),
            (PrefName::VolumeLevel, keys::GLYPH_VOLUME_LEVEL_ENABLE),
        ];
        for (pref, key) in toggles {
            cmd_set(pref, "on", Some(setup.config_path())).unwrap();
            let settings = setup.open();
            assert!(settings.host().unwrap().prefs.get_bool(key, false), "{key}");
        }
        let status = setup.open().status();
        assert!(status.flip && status.charging && status.powershare);
        assert!(status.music_visualizer && status.volume_level);
    }

    #[test]
    fn set_brightness_in_range() {
        let setup = TempSetup::new();
        cmd_set(PrefName::Brightness, "1", Some(setup.config_path())).unwrap();
        let settings = setup.open();
        assert_eq!(settings.brightness_setting(), 1);
        assert_eq!(settings.brightness(), 1024);
    }

    #[test]
    fn set_brightness_out_of_range_is_rejected() {
        let setup = TempSetup::new();
        let err = cmd_set(PrefName::Brightness, "9", Some(setup.config_path())).unwrap_err();
        assert!(err.to_string().contains("out of range"), "got: {err}");
        assert!(cmd_set(PrefName::Brightness, "bright", Some(setup.config_path())).is_err());
        assert_eq!(setup.open().brightness_setting(), 3);
    }

    #[test]
    fn stored_brightness_overrides_white_variant_default() {
        let setup = TempSetup::new();
        std::fs::write(setup.dir().join("color"), "white\n").unwrap();
        assert_eq!(setup.open().brightness_setting(), 2);
        cmd_set(PrefName::Brightness, "4", Some(setup.config_path())).unwrap();
        assert_eq!(setup.open().brightness_setting(), 4);
    }

    #[test]
    fn set_animations() {
        let setup = TempSetup::new();
        cmd_set(PrefName::CallAnimation, "Pulse", Some(setup.config_path())).unwrap();
        cmd_set(PrefName::NotifsAnimation, "Beep", Some(setup.config_path())).unwrap();
        let settings = setup.open();
        assert_eq!(settings.call_animation(), "Pulse");
        assert_eq!(settings.notifs_animation(), "Beep");
        assert!(cmd_set(PrefName::CallAnimation, "  ", Some(setup.config_path())).is_err());
    }

    #[test]
    fn essential_add_and_remove() {
        let setup = TempSetup::new();
        let add = || EssentialAction::Add {
            app: "com.example.chat".into(),
        };
        cmd_essential(add(), Some(setup.config_path())).unwrap();
        cmd_essential(add(), Some(setup.config_path())).unwrap();
        assert!(setup.open().is_notifs_app_essential("com.example.chat"));
        assert!(!setup.open().is_notifs_app_essential("com.example.mail"));

        let remove = EssentialAction::Remove {
            app: "com.example.chat".into(),
        };
        cmd_essential(remove, Some(setup.config_path())).unwrap();
        assert!(!setup.open().is_notifs_app_essential("com.example.chat"));
    }

    #[test]
    fn essential_write_failure_is_an_error() {
        let setup = TempSetup::new();
        std::fs::write(setup.dir().join("preferences.toml"), "not = [valid").unwrap();
        let add = EssentialAction::Add {
            app: "com.example.chat".into(),
        };
        assert!(cmd_essential(add, Some(setup.config_path())).is_err());
    }
}
