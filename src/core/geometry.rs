//! Rectangles, padding and the inner-rect cache.

use serde::{Deserialize, Serialize};

/// A screen rectangle in cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// One past the last column, saturating at `i32::MAX`
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// One past the last row, saturating at `i32::MAX`
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Check if a point is inside (right and bottom edges exclusive)
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// True when there is nothing to draw
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Clip to a `cols` x `rows` screen anchored at the origin.
    ///
    /// Width and height never go below zero.
    pub fn clamp_to(self, cols: i32, rows: i32) -> Self {
        let Rect { mut x, mut y, mut width, mut height } = self;
        if x < 0 {
            width = width.saturating_add(x);
            x = 0;
        }
        if x.saturating_add(width) > cols {
            width = cols - x;
        }
        if y < 0 {
            height = height.saturating_add(y);
            y = 0;
        }
        if y.saturating_add(height) > rows {
            height = rows - y;
        }
        Rect { x, y, width: width.max(0), height: height.max(0) }
    }
}

impl From<(i32, i32, i32, i32)> for Rect {
    fn from((x, y, width, height): (i32, i32, i32, i32)) -> Self {
        Self { x, y, width, height }
    }
}

/// Space kept free between the border and the content
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Padding {
    pub top: u16,
    pub bottom: u16,
    pub left: u16,
    pub right: u16,
}

impl Padding {
    pub const fn new(top: u16, bottom: u16, left: u16, right: u16) -> Self {
        Self { top, bottom, left, right }
    }

    pub const fn uniform(n: u16) -> Self {
        Self { top: n, bottom: n, left: n, right: n }
    }
}

/// Validity of the cached content rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InnerRect {
    /// Outer rect changed since the last draw
    #[default]
    Stale,
    /// Derived from border and padding during the last draw
    Derived(Rect),
    /// Returned by a custom draw hook during the last draw
    Override(Rect),
}

impl InnerRect {
    /// The cached rectangle, if any
    pub fn get(&self) -> Option<Rect> {
        match self {
            InnerRect::Stale => None,
            InnerRect::Derived(rect) | InnerRect::Override(rect) => Some(*rect),
        }
    }
}
