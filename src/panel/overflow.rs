//! Overflow indicator: a one-column, scrollbar-like overlay telling the
//! user there is content above or below the visible area.
//!
//! This only draws. Widgets that scroll work out `show_top`, `show_bottom`
//! and the position themselves.

use crate::core::{Screen, Style};

use super::Panel;

const TOP_ARROW: char = '🭫';
const BOTTOM_ARROW: char = '🭩';

/// Where the thumb sits in the indicator column
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollPosition {
    /// Fraction of the scrollable distance, 0.0 ..= 1.0
    Fraction(f64),
    /// Row offset from the top of the content area
    Row(f64),
}

impl ScrollPosition {
    /// Interpret a single number: values strictly between 0 and 1 are
    /// fractions, values above 1 are absolute row offsets. Zero, negatives
    /// and exactly 1.0 mean no thumb.
    ///
    /// Values above 1 are rows, not percentages: to place the thumb at 40%
    /// pass `0.4` or use `ScrollPosition::Fraction(0.4)`, not `40.0`.
    pub fn from_value(value: f64) -> Option<Self> {
        if value > 0.0 && value < 1.0 {
            Some(ScrollPosition::Fraction(value))
        } else if value > 1.0 {
            Some(ScrollPosition::Row(value))
        } else {
            None
        }
    }

    /// Thumb row relative to the top of a content area `height` rows tall,
    /// rounded up. `None` when the position is at or before the top.
    pub fn offset(&self, height: i32) -> Option<i32> {
        let row = match *self {
            ScrollPosition::Fraction(f) => f * f64::from((height - 1).max(0)),
            ScrollPosition::Row(r) => r,
        };
        if row.is_nan() || row <= 0.0 {
            return None;
        }
        Some(row.ceil().min(f64::from(i32::MAX)) as i32)
    }
}

impl Panel {
    /// Draw the overflow indicator just right of the inner rect.
    ///
    /// Needs `set_indicate_overflow(true)` and an inner rect taller than one
    /// row; call it after `draw` so the inner rect is current.
    pub fn draw_overflow(
        &self,
        screen: &mut dyn Screen,
        show_top: bool,
        show_bottom: bool,
        position: Option<ScrollPosition>,
    ) {
        let inner = self.inner_rect();
        if !self.indicate_overflow || inner.height <= 1 {
            return;
        }

        let x = inner.right();
        let track = Style::default().bg(self.overflow_track);
        let thumb = track.bg(self.overflow_thumb);
        let arrow = |more: bool| {
            let style = track.fg(self.overflow_text).reverse(true);
            if more {
                style.bold(true)
            } else {
                style.fg(self.overflow_dim).dim(true)
            }
        };

        let interior = inner.height - 2;
        let thumb_row = match position.and_then(|p| p.offset(inner.height)) {
            Some(row) if interior > 0 => Some(row.clamp(1, interior)),
            _ => None,
        };
        // Interior rows that land on screen
        let (_, rows) = screen.size();
        let first = 1.max(0i32.saturating_sub(inner.y));
        let last = interior.min(rows.saturating_sub(inner.y).saturating_sub(1));
        for row in first..=last {
            let style = if thumb_row == Some(row) { thumb } else { track };
            screen.set_content(x, inner.y.saturating_add(row), ' ', &[], style);
        }

        screen.set_content(x, inner.y, TOP_ARROW, &[], arrow(show_top));
        screen.set_content(x, inner.bottom() - 1, BOTTOM_ARROW, &[], arrow(show_bottom));
    }
}
