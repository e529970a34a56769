//! Focus state and directional navigation.
//!
//! A panel only reflects focus; the application's focus coordinator decides
//! who holds it and calls `focus`/`blur` accordingly.

use std::rc::Rc;

use log::debug;

use crate::primitive::{PrimitiveHandle, SetFocus, SharedPrimitive, WeakPrimitive};

use super::Panel;

/// Direction of a focus move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusDirection {
    Up,
    Down,
    Left,
    Right,
}

impl Panel {
    /// Whether this panel currently holds focus
    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// This panel received focus
    pub fn focus(&mut self, _delegate: &mut SetFocus<'_>) {
        debug!("focus at ({},{})", self.rect.x, self.rect.y);
        self.has_focus = true;
        if let Some(on_focus) = self.on_focus.as_mut() {
            on_focus();
        }
    }

    /// This panel lost focus
    pub fn blur(&mut self) {
        debug!("blur at ({},{})", self.rect.x, self.rect.y);
        self.has_focus = false;
        if let Some(on_blur) = self.on_blur.as_mut() {
            on_blur();
        }
    }

    /// Run `handler` each time the panel gains focus
    pub fn set_on_focus(&mut self, handler: impl FnMut() + 'static) {
        self.on_focus = Some(Box::new(handler));
    }

    /// Run `handler` each time the panel loses focus
    pub fn set_on_blur(&mut self, handler: impl FnMut() + 'static) {
        self.on_blur = Some(Box::new(handler));
    }

    /// Who should receive focus when this panel is selected
    pub fn focusable(&self) -> PrimitiveHandle {
        match &self.focus_target {
            Some(target) => PrimitiveHandle::Other(target.clone()),
            None => PrimitiveHandle::Current,
        }
    }

    /// Send focus requests for this panel to `target` instead; `None`
    /// restores the panel itself
    pub fn set_focusable(&mut self, target: Option<&SharedPrimitive>) {
        self.focus_target = target.map(Rc::downgrade);
    }

    /// Candidates for a focus move in `direction`, highest priority first.
    /// Replaces any previous list for that direction.
    pub fn set_next_focusable_components(
        &mut self,
        direction: FocusDirection,
        components: &[SharedPrimitive],
    ) {
        let weak = components.iter().map(Rc::downgrade).collect();
        self.next_focusable.insert(direction, weak);
    }

    /// First visible candidate for `direction`, or `None` to keep focus here
    pub fn next_focusable_component(&self, direction: FocusDirection) -> Option<SharedPrimitive> {
        let candidates = self.next_focusable.get(&direction)?;
        candidates
            .iter()
            .filter_map(|weak| weak.upgrade())
            .find(|candidate| match candidate.try_borrow() {
                Ok(primitive) => primitive.is_visible(),
                Err(_) => {
                    debug!("skipping {:?} focus candidate that is in use", direction);
                    false
                }
            })
    }

    /// The container currently holding this panel, if still alive
    pub fn parent(&self) -> Option<SharedPrimitive> {
        self.parent.as_ref().and_then(|weak| weak.upgrade())
    }

    /// Record the container holding this panel. May be called again to
    /// move the panel to another container.
    pub fn set_parent(&mut self, parent: Option<&SharedPrimitive>) {
        self.parent = parent.map(Rc::downgrade);
    }

    /// Raw parent link without upgrading
    pub fn parent_handle(&self) -> Option<&WeakPrimitive> {
        self.parent.as_ref()
    }
}
