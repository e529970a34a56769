//! Border and title rendering.

use crate::core::{print_aligned, Rect, Screen};

use super::Panel;

/// The eight glyphs a border is built from
struct Edges {
    top: char,
    bottom: char,
    left: char,
    right: char,
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
}

impl Edges {
    fn blank() -> Self {
        Self {
            top: ' ',
            bottom: ' ',
            left: ' ',
            right: ' ',
            top_left: ' ',
            top_right: ' ',
            bottom_left: ' ',
            bottom_right: ' ',
        }
    }
}

impl Panel {
    fn edges(&self) -> Edges {
        if !self.border_visible {
            return Edges::blank();
        }
        let g = self.glyphs;
        Edges {
            top: g.top_horizontal(),
            bottom: g.bottom_horizontal(),
            left: g.left_vertical(),
            right: g.right_vertical(),
            top_left: g.top_left,
            top_right: g.top_right,
            bottom_left: g.bottom_left,
            bottom_right: g.bottom_right,
        }
    }

    /// Draw the border and title over the outer rect.
    ///
    /// Each enabled side is drawn as a straight run; its end cells get a
    /// corner glyph only when the side meeting it there is enabled too.
    /// Draws nothing without a border or when the rect is narrower than 2
    /// or has no rows.
    pub fn draw_border(&self, screen: &mut dyn Screen) {
        let Rect { x, y, width, height } = self.rect;
        if !self.border || width < 2 || height < 1 {
            return;
        }

        let background = self.background_style();
        let color = if self.has_focus { self.border_focus_color } else { self.border_color };
        let mut style = background.fg(color).attributes(self.border_attrs);
        if self.border_blinking {
            style = style.blink(true);
        }

        let e = self.edges();
        let (top, bottom, left, right) =
            (self.border_top, self.border_bottom, self.border_left, self.border_right);
        let right_x = self.rect.right() - 1;
        let bottom_y = self.rect.bottom() - 1;
        // Interior of each run, limited to what the screen shows
        let (cols, rows) = screen.size();
        let run_x = x.saturating_add(1).max(0)..right_x.min(cols);
        let run_y = y.saturating_add(1).max(0)..bottom_y.min(rows);
        let mut put = |cx: i32, cy: i32, ch: char| screen.set_content(cx, cy, ch, &[], style);

        if top {
            for cx in run_x.clone() {
                put(cx, y, e.top);
            }
            put(x, y, if left { e.top_left } else { e.top });
            put(right_x, y, if right { e.top_right } else { e.top });
        }

        if height > 1 {
            if bottom {
                for cx in run_x.clone() {
                    put(cx, bottom_y, e.bottom);
                }
                put(x, bottom_y, if left { e.bottom_left } else { e.bottom });
                put(right_x, bottom_y, if right { e.bottom_right } else { e.bottom });
            }

            if left {
                for cy in run_y.clone() {
                    put(x, cy, e.left);
                }
                put(x, y, if top { e.top_left } else { e.left });
                put(x, bottom_y, if bottom { e.bottom_left } else { e.left });
            }

            if right {
                for cy in run_y.clone() {
                    put(right_x, cy, e.right);
                }
                put(right_x, y, if top { e.top_right } else { e.right });
                put(right_x, bottom_y, if bottom { e.bottom_right } else { e.right });
            }
        } else if !top && !bottom {
            // Single row: end caps only
            if left {
                put(x, y, e.left);
            }
            if right {
                put(right_x, y, e.right);
            }
        }

        if !self.title.is_empty() && width >= 4 {
            print_aligned(
                screen,
                &self.title,
                x.saturating_add(1),
                y,
                width - 2,
                self.title_align,
                background.fg(self.title_color),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{glyphs, Align, Attrs, Color, Grid, Style};

    /// Counts every write
    #[derive(Default)]
    struct Recorder {
        writes: Vec<(i32, i32, char)>,
    }

    impl Screen for Recorder {
        fn size(&self) -> (i32, i32) {
            (80, 24)
        }

        fn set_content(&mut self, x: i32, y: i32, ch: char, _combining: &[char], _style: Style) {
            self.writes.push((x, y, ch));
        }
    }

    fn panel(w: i32, h: i32) -> Panel {
        let mut panel = Panel::new();
        panel.set_rect(Rect::new(0, 0, w, h));
        panel.set_border(true);
        panel
    }

    fn render(panel: &Panel, cols: usize, rows: usize) -> Vec<String> {
        let mut grid = Grid::new(cols, rows);
        panel.draw_border(&mut grid);
        (0..rows).map(|y| grid.row_text(y)).collect()
    }

    #[test]
    fn test_full_box() {
        let lines = render(&panel(5, 3), 5, 3);
        assert_eq!(lines, vec!["┌───┐", "│   │", "└───┘"]);
    }

    #[test]
    fn test_too_small_draws_nothing() {
        for (w, h) in [(0, 5), (1, 5), (5, 0), (1, 1), (-3, 2), (4, -1)] {
            let mut p = panel(w, h);
            p.set_title("title");
            let mut rec = Recorder::default();
            p.draw_border(&mut rec);
            assert!(rec.writes.is_empty(), "{}x{} wrote {:?}", w, h, rec.writes);
        }
    }

    #[test]
    fn test_border_disabled_draws_nothing() {
        let mut p = panel(5, 3);
        p.set_border(false);
        let mut rec = Recorder::default();
        p.draw_border(&mut rec);
        assert!(rec.writes.is_empty());
    }

    #[test]
    fn test_corners_follow_enabled_sides() {
        let g = &glyphs::SINGLE;
        for mask in 0..16u8 {
            let (top, left, bottom, right) = (mask & 1 != 0, mask & 2 != 0, mask & 4 != 0, mask & 8 != 0);
            let mut p = panel(4, 3);
            p.set_border_sides(top, left, bottom, right);
            let mut grid = Grid::new(4, 3);
            p.draw_border(&mut grid);

            let corners = [
                ((0, 0), top, left, g.top_left, g.horizontal, g.vertical),
                ((3, 0), top, right, g.top_right, g.horizontal, g.vertical),
                ((0, 2), bottom, left, g.bottom_left, g.horizontal, g.vertical),
                ((3, 2), bottom, right, g.bottom_right, g.horizontal, g.vertical),
            ];
            for ((cx, cy), horizontal_side, vertical_side, corner, h, v) in corners {
                let expected = match (horizontal_side, vertical_side) {
                    (true, true) => corner,
                    (true, false) => h,
                    (false, true) => v,
                    (false, false) => ' ',
                };
                assert_eq!(grid.char_at(cx, cy), Some(expected), "mask {:04b} at ({},{})", mask, cx, cy);
            }
        }
    }

    #[test]
    fn test_title_needs_border() {
        let mut p = panel(10, 3);
        p.set_border(false);
        p.set_title("abc");
        let mut rec = Recorder::default();
        p.draw_border(&mut rec);
        assert!(rec.writes.is_empty());
        assert_eq!(render(&p, 10, 3)[0], "          ");
    }

    #[test]
    fn test_runs_clipped_to_screen() {
        // Recorder reports an 80x24 screen
        let mut p = panel(1000, 3);
        p.set_rect(Rect::new(-500, 2, 1000, 3));
        let mut rec = Recorder::default();
        p.draw_border(&mut rec);
        // Runs cover columns 0..80 only; the corners at -500 and 499 are
        // single writes the screen drops
        assert!(rec.writes.iter().all(|&(x, _, _)| (0..80).contains(&x) || x == -500 || x == 499));
        assert_eq!(rec.writes.iter().filter(|&&(x, y, _)| y == 2 && (0..80).contains(&x)).count(), 80);
        assert!(rec.writes.len() < 200);

        let mut far = panel(10, 3);
        far.set_rect(Rect::new(i32::MAX - 2, 0, 10, 3));
        far.set_title("abc");
        far.draw_border(&mut Recorder::default());
    }

    #[test]
    fn test_top_only() {
        let mut p = panel(4, 3);
        p.set_border_sides(true, false, false, false);
        assert_eq!(render(&p, 4, 3), vec!["────", "    ", "    "]);
    }

    #[test]
    fn test_single_row_end_caps() {
        let mut p = panel(5, 1);
        p.set_border_sides(false, true, false, true);
        assert_eq!(render(&p, 5, 1), vec!["│   │"]);
    }

    #[test]
    fn test_edge_override_glyphs() {
        let mut p = panel(4, 3);
        p.set_border_glyphs(&glyphs::BLOCK);
        assert_eq!(render(&p, 4, 3), vec!["▛▀▀▜", "▌  ▐", "▙▄▄▟"]);
    }

    #[test]
    fn test_invisible_border_reserves_space() {
        let mut p = panel(4, 3);
        p.set_border_visible(false);
        let mut grid = Grid::new(4, 3);
        grid.mark_all_clean();
        p.draw_border(&mut grid);
        assert_eq!(grid.row_text(0), "    ");
        let corner = grid.get(0, 0).unwrap();
        assert!(corner.dirty);
        assert_eq!(corner.fg, Color::White);
        assert_eq!(p.inner_rect(), Rect::new(1, 1, 2, 1));
    }

    #[test]
    fn test_focus_color_and_blink() {
        let mut p = panel(4, 3);
        p.set_border_color(Color::Red);
        p.set_border_focus_color(Color::Green);
        p.set_border_blinking(true);
        p.set_border_attributes(Attrs::new().bold());

        let mut grid = Grid::new(4, 3);
        p.draw_border(&mut grid);
        let cell = grid.get(0, 0).unwrap();
        assert_eq!(cell.fg, Color::Red);
        assert!(cell.attrs.blink && cell.attrs.bold);

        p.focus(&mut |_| {});
        p.draw_border(&mut grid);
        assert_eq!(grid.get(0, 0).unwrap().fg, Color::Green);
    }

    #[test]
    fn test_title_alignment() {
        let mut p = panel(10, 3);
        p.set_title("ab");
        p.set_title_color(Color::Yellow);
        assert_eq!(render(&p, 10, 3)[0], "┌───ab───┐");

        p.set_title_align(Align::Left);
        assert_eq!(render(&p, 10, 3)[0], "┌ab──────┐");

        p.set_title_align(Align::Right);
        assert_eq!(render(&p, 10, 3)[0], "┌──────ab┐");

        let mut grid = Grid::new(10, 3);
        p.draw_border(&mut grid);
        assert_eq!(grid.get(7, 0).unwrap().fg, Color::Yellow);
    }

    #[test]
    fn test_title_truncated_and_width_limit() {
        let mut p = panel(6, 3);
        p.set_title_align(Align::Left);
        p.set_title("abcdefgh");
        assert_eq!(render(&p, 6, 3)[0], "┌abcd┐");

        let mut narrow = panel(3, 3);
        narrow.set_title("abc");
        assert_eq!(render(&narrow, 3, 3)[0], "┌─┐");
    }
}
