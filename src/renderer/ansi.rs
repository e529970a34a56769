//! ANSI Renderer
//!
//! Writes a grid as ANSI escape sequences: 16 palette colors, 24-bit RGB
//! and the terminal default color, plus combining characters.

use crate::core::{Attrs, Cell, Color, Grid};
use super::Renderer;

const CSI: &str = "\x1b[";

/// Last SGR state sent to the terminal
#[derive(Debug, Clone, Copy, PartialEq)]
struct Pen {
    fg: Color,
    bg: Color,
    attrs: Attrs,
}

/// ANSI renderer
pub struct AnsiRenderer {
    /// None until the first SGR after a reset, forcing colors out
    pen: Option<Pen>,
}

impl Default for AnsiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl AnsiRenderer {
    pub fn new() -> Self {
        Self { pen: None }
    }

    /// Forget what the terminal was last told
    pub fn reset(&mut self) {
        self.pen = None;
    }

    fn move_cursor(x: usize, y: usize) -> String {
        format!("{}{};{}H", CSI, y + 1, x + 1)
    }

    /// SGR sequence taking the terminal from the current pen to `next`
    fn sgr(&mut self, next: Pen) -> String {
        let mut codes: Vec<u8> = Vec::new();

        let current = match self.pen {
            // No SGR code turns a single attribute off, so dropping any
            // attribute means a full reset
            Some(pen) if pen.attrs.merge(next.attrs) == next.attrs => Some(pen),
            Some(_) => {
                codes.push(0);
                None
            }
            None => None,
        };

        match current {
            Some(pen) => {
                let added = Attrs {
                    bold: next.attrs.bold && !pen.attrs.bold,
                    dim: next.attrs.dim && !pen.attrs.dim,
                    italic: next.attrs.italic && !pen.attrs.italic,
                    underline: next.attrs.underline && !pen.attrs.underline,
                    blink: next.attrs.blink && !pen.attrs.blink,
                    reverse: next.attrs.reverse && !pen.attrs.reverse,
                };
                codes.extend(added.sgr_codes());
                if next.fg != pen.fg {
                    codes.extend(next.fg.fg_codes());
                }
                if next.bg != pen.bg {
                    codes.extend(next.bg.bg_codes());
                }
            }
            None => {
                codes.extend(next.attrs.sgr_codes());
                codes.extend(next.fg.fg_codes());
                codes.extend(next.bg.bg_codes());
            }
        }

        self.pen = Some(next);

        if codes.is_empty() {
            String::new()
        } else {
            let code_strs: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
            format!("{}{}m", CSI, code_strs.join(";"))
        }
    }

    /// Render a single cell (SGR + character + combining characters)
    fn render_cell(&mut self, cell: &Cell) -> String {
        let mut output = self.sgr(Pen { fg: cell.fg, bg: cell.bg, attrs: cell.attrs });
        let ch = cell.char;
        if ch < ' ' || ch == '\x7f' {
            output.push(' ');
        } else {
            output.push(ch);
            output.extend(cell.combining.iter().filter(|c| !c.is_control()));
        }
        output
    }
}

impl Renderer for AnsiRenderer {
    fn name(&self) -> &str {
        "ansi"
    }

    fn init(&mut self) -> String {
        self.reset();
        format!("{}?25l{}2J{}H{}0m", CSI, CSI, CSI, CSI)
    }

    fn shutdown(&self) -> String {
        format!("{}0m{}?25h{}2J{}H", CSI, CSI, CSI, CSI)
    }

    fn render_full(&mut self, grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.cols * grid.rows * 10);
        self.reset();
        output.push_str(&format!("{}H{}0m", CSI, CSI));

        for y in 0..grid.rows {
            output.push_str(&Self::move_cursor(0, y));
            for x in 0..grid.cols {
                if let Some(cell) = grid.get(x, y) {
                    output.push_str(&self.render_cell(cell));
                }
            }
        }
        output.push_str(&format!("{}0m", CSI));
        self.reset();
        output
    }

    fn render_dirty(&mut self, grid: &Grid) -> String {
        let dirty_count = grid.iter_dirty().count();

        // Mostly dirty: a full redraw is shorter
        if dirty_count > grid.cols * grid.rows / 2 {
            return self.render_full(grid);
        }

        let mut output = String::with_capacity(dirty_count * 15);
        let mut last: Option<(usize, usize)> = None;

        // iter() walks row-major, so dirty cells arrive in screen order
        for (x, y, cell) in grid.iter_dirty() {
            let adjacent = matches!(last, Some((lx, ly)) if ly == y && lx + 1 == x);
            if !adjacent {
                output.push_str(&Self::move_cursor(x, y));
            }
            output.push_str(&self.render_cell(cell));
            last = Some((x, y));
        }
        output
    }
}
