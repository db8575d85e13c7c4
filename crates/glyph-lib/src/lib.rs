//! Glyph — settings accessors for the per-device LED glyph lighting feature.

pub mod brightness;
pub mod config;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod keys;
pub mod resources;
pub mod settings;
pub mod store;
pub mod vendor;

pub use error::GlyphError;
pub use settings::{GlyphSettings, GlyphStatus, Host};
