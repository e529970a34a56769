//! Core Module
//!
//! Core data structures for drawing:
//! - Cell: Individual character cell and its style
//! - Grid: 2D display buffer implementing `Screen`
//! - Geometry: Rectangles, padding, the inner-rect cache
//! - Text: Aligned single-line printing

pub mod cell;
pub mod geometry;
pub mod grid;
pub mod text;

pub use cell::{Attrs, Cell, Color, Style};
pub use geometry::{InnerRect, Padding, Rect};
pub use grid::{glyphs, BorderGlyphs, Grid, Screen};
pub use text::{print_aligned, Align};
