//! CLI subcommands — status, config, secure toggles, preference edits.

mod app;
mod config_cmd;
mod prefs;
mod status;
mod toggle;

#[cfg(test)]
mod test_support;

use std::path::Path;

use clap::{Subcommand, ValueEnum};
use serde::Serialize;

pub(super) use glyph_lib::GlyphError;
pub(super) use glyph_lib::GlyphStatus;
pub(super) use glyph_lib::config::Config;
pub(super) use glyph_lib::context::{FileGlyphSettings, open_settings};
pub(super) use glyph_lib::error::Result;
pub(super) use glyph_lib::keys;
pub(super) use glyph_lib::store::Preferences;

const PADDING: usize = 2;

/// Compute alignment width for a command's key-value output.
/// Ensures at least PADDING spaces after the longest key in either level,
/// with top-level and indent values aligned to the same column.
pub(super) fn kv_width(top: &[&str], indent: &[&str]) -> usize {
    let top_max = top.iter().map(|k| k.len()).max().unwrap_or(0);
    let indent_max = indent.iter().map(|k| k.len()).max().unwrap_or(0);
    let top_need = if top.is_empty() { 0 } else { top_max + PADDING };
    // Indent keys lose 2 chars of inner width to the "  " prefix
    let indent_need = if indent.is_empty() {
        0
    } else {
        indent_max + PADDING + 2
    };
    top_need.max(indent_need)
}

pub(super) fn format_kv(key: &str, value: impl std::fmt::Display, w: usize) -> String {
    format!("{key:<width$}{value}", width = w)
}

pub(super) fn kv(key: &str, value: impl std::fmt::Display, w: usize) {
    println!("{}", format_kv(key, value, w));
}

pub(super) fn kv_indent(key: &str, value: impl std::fmt::Display, w: usize) {
    println!("  {key:<width$}{value}", width = w - 2);
}

pub(super) fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

pub(super) fn print_json(value: &impl Serialize) -> Result<()> {
    let json_str = serde_json::to_string_pretty(value)
        .map_err(|e| GlyphError::Config(format!("JSON serialization failed: {e}")))?;
    println!("{json_str}");
    Ok(())
}

/// Load the config from `custom_path`, or the platform default.
pub(super) fn load_config(custom_path: Option<&Path>) -> Config {
    match custom_path {
        Some(path) => {
            let (config, warnings) = Config::load_from(path);
            for w in &warnings {
                log::warn!("{w}");
            }
            config
        }
        None => Config::load(),
    }
}

/// Load and validate the config, then open the file-backed settings.
pub(super) fn open(custom_path: Option<&Path>) -> Result<FileGlyphSettings> {
    let config = load_config(custom_path);
    if let Err(errors) = config.validate() {
        let joined: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        return Err(GlyphError::Config(joined.join("; ")));
    }
    open_settings(&config)
}

/// Map a writer's acknowledgement to a result.
pub(super) fn ensure_written(acknowledged: bool, key: &str) -> Result<()> {
    if acknowledged {
        Ok(())
    } else {
        Err(GlyphError::Store(format!("write to {key} was rejected")))
    }
}

// ── JSON output structs ──

#[derive(Serialize)]
pub(super) struct StatusOutput {
    pub version: String,
    pub settings: GlyphStatus,
    pub brightness_levels: Vec<u32>,
}

#[derive(Serialize)]
pub(super) struct ConfigOutput {
    pub config_file: Option<String>,
    pub config_file_exists: bool,
    pub settings: Config,
    pub files: ConfigFilesJson,
}

#[derive(Serialize)]
pub(super) struct ConfigFilesJson {
    pub secure_settings: Option<String>,
    pub secure_settings_exists: bool,
    pub preferences: Option<String>,
    pub preferences_exists: bool,
    pub vendor_color_exists: bool,
}

#[derive(Serialize)]
pub(super) struct AppOutput {
    pub app: String,
    pub enabled: bool,
    pub essential: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    pub(super) fn enabled(self) -> bool {
        self == Toggle::On
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PrefName {
    Flip,
    Charging,
    Powershare,
    MusicVisualizer,
    VolumeLevel,
    Brightness,
    CallAnimation,
    NotifsAnimation,
}

#[derive(Subcommand)]
pub enum EssentialAction {
    /// Add an app to the essential set
    Add { app: String },
    /// Remove an app from the essential set
    Remove { app: String },
}

#[derive(Subcommand)]
pub enum Command {
    /// Show every glyph setting
    Status,

    /// Show current configuration and file paths
    Config,

    /// Turn the glyph feature on
    Enable,

    /// Turn the glyph feature off
    Disable,

    /// Turn call lighting on or off
    Call { state: Toggle },

    /// Turn notification lighting on or off
    Notifs { state: Toggle },

    /// Set a user preference
    Set {
        pref: PrefName,
        /// on/off for toggles, 1-based level for brightness, name for animations
        value: String,
    },

    /// Show or change an app's notification lighting
    App {
        /// Application identifier, e.g. com.example.messenger
        app: String,
        /// Light up for this app's notifications
        #[arg(long, conflicts_with = "disable")]
        enable: bool,
        /// Stay dark for this app's notifications
        #[arg(long)]
        disable: bool,
    },

    /// Edit the essential app set
    Essential {
        #[command(subcommand)]
        action: EssentialAction,
    },
}

/// Warn if `--json` was passed to a command that doesn't support it.
fn warn_json_unsupported(cmd_name: &str) {
    log::warn!("--json is not supported for `{cmd_name}` (ignored)");
}

pub fn run(cmd: Command, json: bool, config_path: Option<&Path>) -> Result<()> {
    match cmd {
        Command::Status => status::cmd_status(json, config_path),
        Command::Config => config_cmd::cmd_config(json, config_path),
        Command::Enable => {
            if json {
                warn_json_unsupported("enable");
            }
            toggle::cmd_master(true, config_path)
        }
        Command::Disable => {
            if json {
                warn_json_unsupported("disable");
            }
            toggle::cmd_master(false, config_path)
        }
        Command::Call { state } => {
            if json {
                warn_json_unsupported("call");
            }
            toggle::cmd_call(state, config_path)
        }
        Command::Notifs { state } => {
            if json {
                warn_json_unsupported("notifs");
            }
            toggle::cmd_notifs(state, config_path)
        }
        Command::Set { pref, value } => {
            if json {
                warn_json_unsupported("set");
            }
            prefs::cmd_set(pref, &value, config_path)
        }
        Command::App {
            app,
            enable,
            disable,
        } => {
            let change = match (enable, disable) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            app::cmd_app(&app, change, json, config_path)
        }
        Command::Essential { action } => {
            if json {
                warn_json_unsupported("essential");
            }
            prefs::cmd_essential(action, config_path)
        }
    }
}
