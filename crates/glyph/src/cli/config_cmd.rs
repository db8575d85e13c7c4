//! `config` subcommand — show current configuration and file paths.

use std::path::{Path, PathBuf};

use super::{Config, ConfigFilesJson, ConfigOutput, Result, kv, kv_indent, kv_width};

pub(super) fn cmd_config(json: bool, custom_path: Option<&Path>) -> Result<()> {
    let config = super::load_config(custom_path);
    let config_path = custom_path.map(|p| p.to_path_buf()).or_else(Config::path);
    let config_exists = config_path.as_ref().is_some_and(|p| p.exists());

    let secure_path = config.secure_settings_path();
    let prefs_path = config.preferences_path();
    let secure_exists = secure_path.as_ref().is_some_and(|p| p.exists());
    let prefs_exists = prefs_path.as_ref().is_some_and(|p| p.exists());
    let vendor_exists = Path::new(&config.vendor_color_path).exists();

    if json {
        let output = ConfigOutput {
            config_file: display(&config_path),
            config_file_exists: config_exists,
            files: ConfigFilesJson {
                secure_settings: display(&secure_path),
                secure_settings_exists: secure_exists,
                preferences: display(&prefs_path),
                preferences_exists: prefs_exists,
                vendor_color_exists: vendor_exists,
            },
            settings: config,
        };
        return super::print_json(&output);
    }

    // Human-readable output
    let w = kv_width(
        &["Config file:"],
        &[
            "brightness_levels:",
            "call_animation_default:",
            "notifs_animation_default:",
            "Secure settings:",
            "Preferences:",
            "Vendor color:",
        ],
    );

    match &config_path {
        Some(p) => {
            if config_exists {
                kv("Config file:", format_args!("{} (loaded)", p.display()), w);
            } else {
                kv(
                    "Config file:",
                    format_args!("{} (not found, using defaults)", p.display()),
                    w,
                );
            }
        }
        None => kv("Config file:", "(no config directory)", w),
    }
    println!();

    println!("Settings:");
    let levels: Vec<String> = config
        .brightness_levels
        .iter()
        .map(|l| l.to_string())
        .collect();
    kv_indent("brightness_levels:", levels.join(", "), w);
    kv_indent("call_animation_default:", &config.call_animation_default, w);
    kv_indent(
        "notifs_animation_default:",
        &config.notifs_animation_default,
        w,
    );
    println!();

    println!("Files:");
    file_line("Secure settings:", secure_path.as_deref(), secure_exists, w);
    file_line("Preferences:", prefs_path.as_deref(), prefs_exists, w);
    file_line(
        "Vendor color:",
        Some(Path::new(&config.vendor_color_path)),
        vendor_exists,
        w,
    );
    Ok(())
}

fn display(path: &Option<PathBuf>) -> Option<String> {
    path.as_ref().map(|p| p.display().to_string())
}

fn file_line(key: &str, path: Option<&Path>, exists: bool, w: usize) {
    match path {
        Some(p) => {
            let status = if exists { "present" } else { "not found" };
            kv_indent(key, format_args!("{} ({status})", p.display()), w);
        }
        None => kv_indent(key, "(no config directory)", w),
    }
}
