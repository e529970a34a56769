//! Single-line aligned printing.
//!
//! Text is measured in terminal cells with `unicode-width`; zero-width
//! characters are attached to the preceding cell as combining characters.

use unicode_width::UnicodeWidthChar;

use super::cell::Style;
use super::grid::Screen;

/// Horizontal alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

/// One printable cell: base character, its combining marks, and its width
struct Glyph {
    ch: char,
    combining: Vec<char>,
    width: usize,
}

fn glyphs(text: &str) -> Vec<Glyph> {
    let mut out: Vec<Glyph> = Vec::new();
    for ch in text.chars() {
        let width = ch.width().unwrap_or(0);
        if width == 0 {
            if let Some(last) = out.last_mut() {
                last.combining.push(ch);
            }
            continue;
        }
        out.push(Glyph { ch, combining: Vec::new(), width });
    }
    out
}

/// Print `text` on row `y` inside `max_width` cells starting at `x`.
///
/// Text wider than the box is cut: left-aligned text loses its end,
/// right-aligned text loses its start, centered text loses both ends.
/// Returns (characters printed, cells used).
pub fn print_aligned(
    screen: &mut dyn Screen,
    text: &str,
    x: i32,
    y: i32,
    max_width: i32,
    align: Align,
    style: Style,
) -> (usize, usize) {
    if max_width <= 0 || text.is_empty() {
        return (0, 0);
    }
    let max_width = max_width as usize;
    let glyphs = glyphs(text);

    let mut start = 0;
    let mut end = glyphs.len();
    let mut width: usize = glyphs.iter().map(|g| g.width).sum();
    let mut trim_end = true;
    while width > max_width && start < end {
        let from_end = match align {
            Align::Left => true,
            Align::Right => false,
            Align::Center => {
                trim_end = !trim_end;
                !trim_end
            }
        };
        if from_end {
            end -= 1;
            width -= glyphs[end].width;
        } else {
            width -= glyphs[start].width;
            start += 1;
        }
    }

    let offset = match align {
        Align::Left => 0,
        Align::Center => (max_width - width) / 2,
        Align::Right => max_width - width,
    };

    let mut col = x.saturating_add(offset as i32);
    let mut printed = 0;
    for glyph in &glyphs[start..end] {
        screen.set_content(col, y, glyph.ch, &glyph.combining, style);
        for extra in 1..glyph.width {
            screen.set_content(col.saturating_add(extra as i32), y, ' ', &[], style);
        }
        col = col.saturating_add(glyph.width as i32);
        printed += 1 + glyph.combining.len();
    }
    (printed, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::Grid;

    fn print(text: &str, width: i32, align: Align) -> (String, (usize, usize)) {
        let mut grid = Grid::new(12, 1);
        let result = print_aligned(&mut grid, text, 1, 0, width, align, Style::default());
        (grid.row_text(0), result)
    }

    #[test]
    fn test_alignment() {
        assert_eq!(print("abc", 7, Align::Left).0, " abc        ");
        assert_eq!(print("abc", 7, Align::Center).0, "   abc      ");
        assert_eq!(print("abc", 7, Align::Right).0, "     abc    ");
    }

    #[test]
    fn test_truncation() {
        assert_eq!(print("abcdefgh", 4, Align::Left), (" abcd       ".to_string(), (4, 4)));
        assert_eq!(print("abcdefgh", 4, Align::Right).0, " efgh       ");
        assert_eq!(print("abcdefgh", 4, Align::Center).0, " cdef       ");
    }

    #[test]
    fn test_wide_characters() {
        let (row, (chars, cells)) = print("日本語", 5, Align::Left);
        assert_eq!(chars, 2);
        assert_eq!(cells, 4);
        assert!(row.starts_with(" 日 本 "));
    }

    #[test]
    fn test_nothing_to_print() {
        assert_eq!(print("", 5, Align::Left).1, (0, 0));
        assert_eq!(print("abc", 0, Align::Left).1, (0, 0));
    }
}
