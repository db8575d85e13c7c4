//! `app` subcommand — show or change one app's notification lighting.

use std::path::Path;

use super::{AppOutput, GlyphError, Preferences, Result, keys, kv, kv_width, on_off};

pub(super) fn cmd_app(
    app: &str,
    change: Option<bool>,
    json: bool,
    custom_path: Option<&Path>,
) -> Result<()> {
    let app = app.trim();
    if app.is_empty() {
        return Err(GlyphError::Config("app identifier cannot be empty".into()));
    }
    if keys::PREFERENCE_KEYS.contains(&app) {
        return Err(GlyphError::Config(format!(
            "\"{app}\" is a reserved preference key, not an app identifier"
        )));
    }

    let settings = super::open(custom_path)?;
    if let Some(enable) = change {
        let Some(host) = settings.host() else {
            return Err(GlyphError::Store("no settings host".into()));
        };
        // Per-app opt-outs share the preference store with feature keys.
        host.prefs.put_bool(app, enable)?;
        log::info!("{app}: notification lighting {}", on_off(enable));
    }

    let output = AppOutput {
        app: app.to_string(),
        enabled: settings.is_notifs_app_enabled(app),
        essential: settings.is_notifs_app_essential(app),
    };

    if json {
        return super::print_json(&output);
    }

    let w = kv_width(&["App:", "Lighting:", "Essential:"], &[]);
    kv("App:", &output.app, w);
    kv("Lighting:", on_off(output.enabled), w);
    kv("Essential:", if output.essential { "yes" } else { "no" }, w);
    Ok(())
}
