//! cellbox - the base panel primitive for character-cell UIs
//!
//! # Overview
//!
//! cellbox provides:
//! - A cell grid that widgets draw onto through the `Screen` trait
//! - `Panel`, a rectangular region with background, border, title,
//!   focus state, input capture and an overflow indicator
//! - The `Primitive` trait widgets implement to live in a widget tree
//! - JSON themes for default colors and border glyphs
//! - An ANSI renderer for putting a grid on a terminal
//!
//! # Example
//!
//! ```no_run
//! use cellbox::core::{Grid, Rect};
//! use cellbox::renderer::{AnsiRenderer, Renderer};
//! use cellbox::Panel;
//!
//! let mut grid = Grid::new(80, 24);
//! let mut panel = Panel::new();
//! panel.set_rect(Rect::new(10, 5, 40, 10));
//! panel.set_border(true);
//! panel.set_title("Hello");
//! panel.draw(&mut grid);
//!
//! // Widget content goes inside the inner rect
//! let inner = panel.inner_rect();
//! assert_eq!(inner, Rect::new(11, 6, 38, 8));
//!
//! let mut renderer = AnsiRenderer::new();
//! print!("{}", renderer.render_full(&grid));
//! ```

pub mod core;
pub mod event;
pub mod input;
pub mod panel;
pub mod primitive;
pub mod renderer;
pub mod theme;

// Re-export commonly used types
pub use crate::core::{Align, Attrs, Cell, Color, Grid, Padding, Rect, Screen, Style};
pub use event::{ChangeEvent, ChangeListener};
pub use input::{Key, KeyEvent, Modifiers, MouseAction, MouseButton, MouseEvent, MouseEventKind};
pub use panel::{FocusDirection, Panel, ScrollPosition};
pub use primitive::{MouseOutcome, Primitive, PrimitiveHandle, SetFocus, SharedPrimitive, WeakPrimitive};
pub use renderer::{AnsiRenderer, Renderer};
pub use theme::{GlyphSet, Theme, ThemeError};
