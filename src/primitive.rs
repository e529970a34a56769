//! The `Primitive` trait: what every widget in a tree can do.
//!
//! Widget trees are built from `SharedPrimitive` handles owned by the
//! application. Back-links (parents, focus neighbours) are `WeakPrimitive`
//! so they never keep a widget alive.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::core::{Rect, Screen};
use crate::input::{KeyEvent, MouseAction, MouseEvent};

/// Owning handle to a widget
pub type SharedPrimitive = Rc<RefCell<dyn Primitive>>;

/// Non-owning handle to a widget
pub type WeakPrimitive = Weak<RefCell<dyn Primitive>>;

/// Callback through which handlers ask the focus coordinator for focus
pub type SetFocus<'a> = dyn FnMut(PrimitiveHandle) + 'a;

/// Names a widget relative to the one handling an event
#[derive(Debug, Clone)]
pub enum PrimitiveHandle {
    /// The widget whose handler is running
    Current,
    /// Some other widget in the tree
    Other(WeakPrimitive),
}

impl PrimitiveHandle {
    pub fn is_current(&self) -> bool {
        matches!(self, PrimitiveHandle::Current)
    }

    /// Resolve to a live widget; `Current` resolves to nothing
    pub fn upgrade(&self) -> Option<SharedPrimitive> {
        match self {
            PrimitiveHandle::Current => None,
            PrimitiveHandle::Other(weak) => weak.upgrade(),
        }
    }
}

impl From<&SharedPrimitive> for PrimitiveHandle {
    fn from(primitive: &SharedPrimitive) -> Self {
        PrimitiveHandle::Other(Rc::downgrade(primitive))
    }
}

/// Result of mouse handling
#[derive(Debug, Clone, Default)]
pub struct MouseOutcome {
    /// The event was used and should not propagate further
    pub consumed: bool,
    /// Widget that wants all following mouse events (e.g. during a drag)
    pub capture: Option<PrimitiveHandle>,
}

impl MouseOutcome {
    pub fn consumed() -> Self {
        Self { consumed: true, capture: None }
    }

    pub fn ignored() -> Self {
        Self::default()
    }
}

/// Drawable, focusable, hit-testable widget
pub trait Primitive {
    /// Draw onto the screen
    fn draw(&mut self, screen: &mut dyn Screen);

    /// Outer rectangle
    fn rect(&self) -> Rect;

    /// Move and resize
    fn set_rect(&mut self, rect: Rect);

    fn is_visible(&self) -> bool;

    fn has_focus(&self) -> bool;

    /// Called by the focus coordinator when this widget gains focus.
    ///
    /// Containers use `delegate` to pass focus on to a child.
    fn focus(&mut self, delegate: &mut SetFocus<'_>);

    /// Called by the focus coordinator when this widget loses focus
    fn blur(&mut self);

    /// Handle a key event
    fn input_handler(&mut self, event: KeyEvent, set_focus: &mut SetFocus<'_>);

    /// Handle a mouse event
    fn mouse_handler(
        &mut self,
        action: MouseAction,
        event: MouseEvent,
        set_focus: &mut SetFocus<'_>,
    ) -> MouseOutcome;

    /// A bracketed paste finished
    fn on_paste(&mut self, _text: &[char]) {}

    /// Check if a point lies within the outer rectangle
    fn in_rect(&self, x: i32, y: i32) -> bool {
        self.rect().contains(x, y)
    }
}
