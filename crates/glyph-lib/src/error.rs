//! Unified error type for the glyph-lib crate.
//!
//! [`GlyphError`] covers the fallible edges of the crate: store persistence,
//! configuration, and brightness-table construction. The settings facade
//! itself never returns it; facade reads fall back to declared defaults.

use std::fmt;

/// Unified error type for glyph-lib operations.
#[derive(Debug)]
pub enum GlyphError {
    /// Standard I/O error (store files, config persistence).
    Io(std::io::Error),
    /// A store file could not be parsed or serialized.
    Store(String),
    /// Configuration validation error.
    Config(String),
    /// Brightness table or brightness setting error.
    Brightness(String),
}

impl fmt::Display for GlyphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlyphError::Io(e) => write!(f, "I/O error: {e}"),
            GlyphError::Store(e) => write!(f, "Store error: {e}"),
            GlyphError::Config(e) => write!(f, "Config error: {e}"),
            GlyphError::Brightness(e) => write!(f, "Brightness error: {e}"),
        }
    }
}

impl std::error::Error for GlyphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GlyphError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GlyphError {
    fn from(e: std::io::Error) -> Self {
        GlyphError::Io(e)
    }
}

impl From<toml::de::Error> for GlyphError {
    fn from(e: toml::de::Error) -> Self {
        GlyphError::Store(e.to_string())
    }
}

impl From<toml::ser::Error> for GlyphError {
    fn from(e: toml::ser::Error) -> Self {
        GlyphError::Store(e.to_string())
    }
}

/// Crate-level Result alias using [`GlyphError`].
pub type Result<T> = std::result::Result<T, GlyphError>;
