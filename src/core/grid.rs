//! Cell Grid - The display surface
//!
//! A 2D array of cells representing the terminal display, plus the
//! `Screen` trait panels draw through and the shared border glyph sets.

use super::cell::{Cell, Style};

/// A character-cell drawing surface.
///
/// Coordinates are signed; writes outside the surface are ignored.
pub trait Screen {
    /// Visible size as (columns, rows)
    fn size(&self) -> (i32, i32);

    /// Write one cell
    fn set_content(&mut self, x: i32, y: i32, ch: char, combining: &[char], style: Style);
}

/// Border glyph set.
///
/// The edge overrides (`top`, `bottom`, `left`, `right`) replace the generic
/// horizontal/vertical glyph on that side when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub top: Option<char>,
    pub bottom: Option<char>,
    pub left: Option<char>,
    pub right: Option<char>,
}

impl BorderGlyphs {
    /// Horizontal glyph for the top edge
    pub fn top_horizontal(&self) -> char {
        self.top.unwrap_or(self.horizontal)
    }

    /// Horizontal glyph for the bottom edge
    pub fn bottom_horizontal(&self) -> char {
        self.bottom.unwrap_or(self.horizontal)
    }

    /// Vertical glyph for the left edge
    pub fn left_vertical(&self) -> char {
        self.left.unwrap_or(self.vertical)
    }

    /// Vertical glyph for the right edge
    pub fn right_vertical(&self) -> char {
        self.right.unwrap_or(self.vertical)
    }
}

/// Predefined glyph sets
pub mod glyphs {
    use super::BorderGlyphs;

    pub static SINGLE: BorderGlyphs = BorderGlyphs {
        top_left: '┌', top_right: '┐', bottom_left: '└', bottom_right: '┘',
        horizontal: '─', vertical: '│',
        top: None, bottom: None, left: None, right: None,
    };

    pub static DOUBLE: BorderGlyphs = BorderGlyphs {
        top_left: '╔', top_right: '╗', bottom_left: '╚', bottom_right: '╝',
        horizontal: '═', vertical: '║',
        top: None, bottom: None, left: None, right: None,
    };

    pub static ROUNDED: BorderGlyphs = BorderGlyphs {
        top_left: '╭', top_right: '╮', bottom_left: '╰', bottom_right: '╯',
        horizontal: '─', vertical: '│',
        top: None, bottom: None, left: None, right: None,
    };

    pub static HEAVY: BorderGlyphs = BorderGlyphs {
        top_left: '┏', top_right: '┓', bottom_left: '┗', bottom_right: '┛',
        horizontal: '━', vertical: '┃',
        top: None, bottom: None, left: None, right: None,
    };

    pub static ASCII: BorderGlyphs = BorderGlyphs {
        top_left: '+', top_right: '+', bottom_left: '+', bottom_right: '+',
        horizontal: '-', vertical: '|',
        top: None, bottom: None, left: None, right: None,
    };

    /// Half-block frame: each edge uses its own glyph
    pub static BLOCK: BorderGlyphs = BorderGlyphs {
        top_left: '▛', top_right: '▜', bottom_left: '▙', bottom_right: '▟',
        horizontal: '─', vertical: '│',
        top: Some('▀'), bottom: Some('▄'), left: Some('▌'), right: Some('▐'),
    };
}

/// The display grid - a 2D array of cells
pub struct Grid {
    /// Grid width in columns
    pub cols: usize,
    /// Grid height in rows
    pub rows: usize,
    /// The cell buffer (row-major order)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with given dimensions
    pub fn new(cols: usize, rows: usize) -> Self {
        let cells = vec![Cell::default(); cols * rows];
        Self { cols, rows, cells }
    }

    /// Get the index for a position
    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.cols && y < self.rows {
            Some(y * self.cols + x)
        } else {
            None
        }
    }

    /// Get a reference to a cell
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Get a mutable reference to a cell
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Character at position, if in bounds
    pub fn char_at(&self, x: usize, y: usize) -> Option<char> {
        self.get(x, y).map(|cell| cell.char)
    }

    /// One row as a string (combining characters omitted)
    pub fn row_text(&self, y: usize) -> String {
        (0..self.cols).filter_map(|x| self.char_at(x, y)).collect()
    }

    /// Mark all cells as clean
    pub fn mark_all_clean(&mut self) {
        for cell in &mut self.cells {
            cell.dirty = false;
        }
    }

    /// Check if any cells are dirty
    pub fn is_dirty(&self) -> bool {
        self.cells.iter().any(|c| c.dirty)
    }

    /// Get iterator over all cells with positions
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let x = i % self.cols;
            let y = i / self.cols;
            (x, y, cell)
        })
    }

    /// Get iterator over dirty cells with positions
    pub fn iter_dirty(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        self.iter().filter(|(_, _, cell)| cell.dirty)
    }
}

impl Screen for Grid {
    fn size(&self) -> (i32, i32) {
        (self.cols as i32, self.rows as i32)
    }

    fn set_content(&mut self, x: i32, y: i32, ch: char, combining: &[char], style: Style) {
        if x < 0 || y < 0 {
            return;
        }
        if let Some(cell) = self.get_mut(x as usize, y as usize) {
            cell.set(ch, combining, style);
        }
    }
}
