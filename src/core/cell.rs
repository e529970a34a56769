//! Cell - The fundamental display unit
//!
//! Each cell represents one character position with:
//! - Character (Unicode codepoint) plus optional combining characters
//! - Foreground color (terminal default, 16 ANSI colors, or 24-bit RGB)
//! - Background color
//! - Attributes (bold, blink, reverse, etc.)

use serde::{Deserialize, Serialize};

/// Terminal colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// The terminal's own default color
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,   // Gray
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    /// 24-bit color
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parse a `#rrggbb` hex color
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Color::Rgb(r, g, b))
    }

    /// Palette index for the 16 ANSI colors
    fn ansi_index(&self) -> Option<u8> {
        let index = match self {
            Color::Black => 0,
            Color::Red => 1,
            Color::Green => 2,
            Color::Yellow => 3,
            Color::Blue => 4,
            Color::Magenta => 5,
            Color::Cyan => 6,
            Color::White => 7,
            Color::BrightBlack => 8,
            Color::BrightRed => 9,
            Color::BrightGreen => 10,
            Color::BrightYellow => 11,
            Color::BrightBlue => 12,
            Color::BrightMagenta => 13,
            Color::BrightCyan => 14,
            Color::BrightWhite => 15,
            Color::Default | Color::Rgb(..) => return None,
        };
        Some(index)
    }

    /// Get ANSI SGR codes for foreground
    pub fn fg_codes(&self) -> Vec<u8> {
        match (self, self.ansi_index()) {
            (Color::Rgb(r, g, b), _) => vec![38, 2, *r, *g, *b],
            (_, Some(v)) if v < 8 => vec![30 + v],
            (_, Some(v)) => vec![90 + (v - 8)],
            (_, None) => vec![39],
        }
    }

    /// Get ANSI SGR codes for background
    pub fn bg_codes(&self) -> Vec<u8> {
        match (self, self.ansi_index()) {
            (Color::Rgb(r, g, b), _) => vec![48, 2, *r, *g, *b],
            (_, Some(v)) if v < 8 => vec![40 + v],
            (_, Some(v)) => vec![100 + (v - 8)],
            (_, None) => vec![49],
        }
    }
}

/// Cell attributes (bold, blink, etc.)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attrs {
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub blink: bool,
    pub reverse: bool,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Union of two attribute sets
    pub fn merge(self, other: Attrs) -> Self {
        Self {
            bold: self.bold || other.bold,
            dim: self.dim || other.dim,
            italic: self.italic || other.italic,
            underline: self.underline || other.underline,
            blink: self.blink || other.blink,
            reverse: self.reverse || other.reverse,
        }
    }

    /// Generate ANSI SGR codes for these attributes
    pub fn sgr_codes(&self) -> Vec<u8> {
        let mut codes = Vec::new();
        if self.bold { codes.push(1); }
        if self.dim { codes.push(2); }
        if self.italic { codes.push(3); }
        if self.underline { codes.push(4); }
        if self.blink { codes.push(5); }
        if self.reverse { codes.push(7); }
        codes
    }
}

/// A complete cell style: colors plus attributes.
///
/// Builder methods return a modified copy so styles compose the way
/// `Style::default().fg(Color::Red).bold(true)` reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub attrs: Attrs,
}

impl Style {
    pub fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg, attrs: Attrs::default() }
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = color;
        self
    }

    pub fn bold(mut self, on: bool) -> Self {
        self.attrs.bold = on;
        self
    }

    pub fn dim(mut self, on: bool) -> Self {
        self.attrs.dim = on;
        self
    }

    pub fn blink(mut self, on: bool) -> Self {
        self.attrs.blink = on;
        self
    }

    pub fn reverse(mut self, on: bool) -> Self {
        self.attrs.reverse = on;
        self
    }

    /// Add attributes on top of the current ones
    pub fn attributes(mut self, attrs: Attrs) -> Self {
        self.attrs = self.attrs.merge(attrs);
        self
    }

    /// Split into foreground, background and attributes
    pub fn decompose(&self) -> (Color, Color, Attrs) {
        (self.fg, self.bg, self.attrs)
    }
}

/// A single character cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The character to display (Unicode)
    pub char: char,
    /// Combining characters drawn on top of `char`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub combining: Vec<char>,
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
    /// Display attributes
    pub attrs: Attrs,
    /// Whether this cell needs redrawing
    #[serde(skip)]
    pub dirty: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            combining: Vec::new(),
            fg: Color::Default,
            bg: Color::Default,
            attrs: Attrs::default(),
            dirty: true,
        }
    }
}

impl Cell {
    /// Set all properties and mark dirty if changed
    pub fn set(&mut self, char: char, combining: &[char], style: Style) {
        if self.char != char
            || self.combining != combining
            || self.fg != style.fg
            || self.bg != style.bg
            || self.attrs != style.attrs
        {
            self.char = char;
            self.combining.clear();
            self.combining.extend_from_slice(combining);
            self.fg = style.fg;
            self.bg = style.bg;
            self.attrs = style.attrs;
            self.dirty = true;
        }
    }
}
