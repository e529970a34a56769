//! Theme configuration
//!
//! Default colors and glyph set for new panels. Themes are plain JSON;
//! every field is optional and falls back to the built-in value:
//!
//! ```json
//! {
//!   "border_color": "bright_black",
//!   "border_focus_color": "bright_cyan",
//!   "overflow_track": {"rgb": [32, 32, 32]},
//!   "glyphs": "rounded"
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{glyphs, BorderGlyphs, Color};

/// Named built-in glyph sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphSet {
    #[default]
    Single,
    Double,
    Rounded,
    Heavy,
    Ascii,
    Block,
}

impl GlyphSet {
    /// The shared glyph table for this set
    pub fn glyphs(&self) -> &'static BorderGlyphs {
        match self {
            GlyphSet::Single => &glyphs::SINGLE,
            GlyphSet::Double => &glyphs::DOUBLE,
            GlyphSet::Rounded => &glyphs::ROUNDED,
            GlyphSet::Heavy => &glyphs::HEAVY,
            GlyphSet::Ascii => &glyphs::ASCII,
            GlyphSet::Block => &glyphs::BLOCK,
        }
    }
}

/// Colors and glyphs new panels start with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Panel background
    pub primitive_background_color: Color,
    /// Background for contrasting elements such as buttons
    pub contrast_background_color: Color,
    /// Border of an unfocused panel
    pub border_color: Color,
    /// Border of the focused panel
    pub border_focus_color: Color,
    pub title_color: Color,
    /// Text drawn on top of contrasting backgrounds
    pub inverse_text_color: Color,
    /// Overflow indicator column background
    pub overflow_track: Color,
    /// Overflow indicator thumb background
    pub overflow_thumb: Color,
    /// Overflow arrow color when there is nothing in that direction
    pub overflow_dim: Color,
    pub glyphs: GlyphSet,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primitive_background_color: Color::Black,
            contrast_background_color: Color::Blue,
            border_color: Color::White,
            border_focus_color: Color::BrightWhite,
            title_color: Color::White,
            inverse_text_color: Color::Blue,
            overflow_track: Color::Rgb(0x20, 0x20, 0x20),
            overflow_thumb: Color::Rgb(0x50, 0x50, 0x50),
            overflow_dim: Color::Rgb(0x40, 0x40, 0x40),
            glyphs: GlyphSet::Single,
        }
    }
}

/// Failure to load a theme file
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("cannot read theme: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid theme: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Theme {
    /// Parse a theme from JSON
    pub fn from_json(json: &str) -> Result<Theme, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read and parse a theme file
    pub fn load(path: impl AsRef<Path>) -> Result<Theme, ThemeError> {
        let text = std::fs::read_to_string(path)?;
        let theme = Self::from_json(&text)?;
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_theme() {
        let theme = Theme::from_json(r#"{"border_color":"bright_black","glyphs":"rounded"}"#).unwrap();
        assert_eq!(theme.border_color, Color::BrightBlack);
        assert_eq!(theme.glyphs, GlyphSet::Rounded);
        assert_eq!(theme.title_color, Theme::default().title_color);
        assert_eq!(theme.glyphs.glyphs().top_left, '╭');
    }

    #[test]
    fn test_rgb_color() {
        let theme = Theme::from_json(r#"{"overflow_track":{"rgb":[1,2,3]}}"#).unwrap();
        assert_eq!(theme.overflow_track, Color::Rgb(1, 2, 3));
    }

    #[test]
    fn test_bad_theme() {
        assert!(Theme::from_json(r#"{"border_color":"plaid"}"#).is_err());
        assert!(matches!(
            Theme::load("/nonexistent/cellbox-theme.json"),
            Err(ThemeError::Io(_))
        ));
    }

    #[test]
    fn test_load_errors_convert_and_describe() {
        use std::error::Error as _;

        let path = std::env::temp_dir().join(format!("cellbox-bad-theme-{}.json", std::process::id()));
        std::fs::write(&path, "{\"glyphs\": 7}").unwrap();
        let err = Theme::load(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(err, ThemeError::Parse(_)));
        assert!(err.to_string().starts_with("invalid theme: "));
        assert!(err.source().is_some());

        let err = Theme::load("/nonexistent/cellbox-theme.json").unwrap_err();
        assert!(err.to_string().starts_with("cannot read theme: "));
        assert!(err.source().is_some());
    }
}
