//! `status` subcommand — show every glyph setting.

use std::path::Path;

use super::{GlyphStatus, Result, StatusOutput, kv, kv_indent, kv_width, on_off};

pub(super) fn cmd_status(json: bool, custom_path: Option<&Path>) -> Result<()> {
    let settings = super::open(custom_path)?;
    let status = settings.status();
    let levels = settings.levels().as_slice().to_vec();
    print_status(status, levels, json)
}

/// Print or serialize the status output.
fn print_status(status: GlyphStatus, levels: Vec<u32>, json: bool) -> Result<()> {
    if json {
        return super::print_json(&StatusOutput {
            version: env!("CARGO_PKG_VERSION").to_string(),
            settings: status,
            brightness_levels: levels,
        });
    }

    let w = kv_width(
        &["Version:", "Glyph:"],
        &[
            "Calls:",
            "Notifications:",
            "Flip to glyph:",
            "Charging:",
            "Powershare:",
            "Music visualizer:",
            "Volume level:",
            "Brightness:",
            "Call animation:",
            "Notif animation:",
        ],
    );

    kv("Version:", env!("CARGO_PKG_VERSION"), w);
    println!();
    kv("Glyph:", on_off(status.master), w);
    kv_indent("Calls:", on_off(status.call), w);
    kv_indent("Notifications:", on_off(status.notifs), w);
    kv_indent("Flip to glyph:", on_off(status.flip), w);
    kv_indent("Charging:", on_off(status.charging), w);
    kv_indent("Powershare:", on_off(status.powershare), w);
    kv_indent("Music visualizer:", on_off(status.music_visualizer), w);
    kv_indent("Volume level:", on_off(status.volume_level), w);
    kv_indent(
        "Brightness:",
        format_args!(
            "{}/{} (level {})",
            status.brightness_setting,
            levels.len(),
            status.brightness
        ),
        w,
    );
    kv_indent("Call animation:", &status.call_animation, w);
    kv_indent("Notif animation:", &status.notifs_animation, w);
    Ok(())
}
