//! `enable`, `disable`, `call` and `notifs` subcommands — secure toggles.

use std::path::Path;

use super::{Result, Toggle, ensure_written, keys, on_off};

pub(super) fn cmd_master(enable: bool, custom_path: Option<&Path>) -> Result<()> {
    let settings = super::open(custom_path)?;
    ensure_written(settings.set_master_enabled(enable), keys::GLYPH_ENABLE)?;
    println!("Glyph {}", on_off(enable));
    Ok(())
}

pub(super) fn cmd_call(state: Toggle, custom_path: Option<&Path>) -> Result<()> {
    let settings = super::open(custom_path)?;
    ensure_written(
        settings.set_call_enabled(state.enabled()),
        keys::GLYPH_CALL_ENABLE,
    )?;
    println!("Call lighting {}", on_off(state.enabled()));
    if state.enabled() && !settings.is_master_enabled() {
        log::warn!("glyph is disabled; call lighting stays dark until `enable`");
    }
    Ok(())
}

pub(super) fn cmd_notifs(state: Toggle, custom_path: Option<&Path>) -> Result<()> {
    let settings = super::open(custom_path)?;
    ensure_written(
        settings.set_notifs_enabled(state.enabled()),
        keys::GLYPH_NOTIFS_ENABLE,
    )?;
    println!("Notification lighting {}", on_off(state.enabled()));
    if state.enabled() && !settings.is_master_enabled() {
        log::warn!("glyph is disabled; notification lighting stays dark until `enable`");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::test_support::TempSetup;

    #[test]
    fn master_toggle_persists() {
        let setup = TempSetup::new();
        cmd_master(true, Some(setup.config_path())).unwrap();
        assert!(setup.open().is_master_enabled());
        cmd_master(false, Some(setup.config_path())).unwrap();
        assert!(!setup.open().is_master_enabled());
    }

    #[test]
    fn call_toggle_is_gated_by_master() {
        let setup = TempSetup::new();
        cmd_master(false, Some(setup.config_path())).unwrap();
        cmd_call(Toggle::On, Some(setup.config_path())).unwrap();
        assert!(!setup.open().is_call_enabled());
        cmd_master(true, Some(setup.config_path())).unwrap();
        assert!(setup.open().is_call_enabled());
    }

    #[test]
    fn notifs_off_persists() {
        let setup = TempSetup::new();
        cmd_master(true, Some(setup.config_path())).unwrap();
        cmd_notifs(Toggle::Off, Some(setup.config_path())).unwrap();
        assert!(!setup.open().is_notifs_enabled());
    }
}
