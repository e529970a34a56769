//! Input capture.
//!
//! Key and mouse events pass through an optional capture function before
//! reaching a widget's own handler. Widgets that embed a `Panel` call
//! `wrap_input_handler` / `wrap_mouse_handler` with their handler and get
//! capture for free.

use crate::input::{KeyEvent, MouseAction, MouseEvent};
use crate::primitive::{MouseOutcome, PrimitiveHandle, SetFocus};

use super::Panel;

/// Sees key events first; `None` swallows the event
pub trait KeyCapture {
    fn capture(&mut self, event: KeyEvent) -> Option<KeyEvent>;
}

impl<F> KeyCapture for F
where
    F: FnMut(KeyEvent) -> Option<KeyEvent>,
{
    fn capture(&mut self, event: KeyEvent) -> Option<KeyEvent> {
        self(event)
    }
}

/// Sees mouse events first; `None` swallows the event
pub trait MouseCapture {
    fn capture(&mut self, action: MouseAction, event: MouseEvent) -> Option<(MouseAction, MouseEvent)>;
}

impl<F> MouseCapture for F
where
    F: FnMut(MouseAction, MouseEvent) -> Option<(MouseAction, MouseEvent)>,
{
    fn capture(&mut self, action: MouseAction, event: MouseEvent) -> Option<(MouseAction, MouseEvent)> {
        self(action, event)
    }
}

/// Extra mouse handling tried before click-to-focus; true consumes
pub trait MouseFallback {
    fn handle(&mut self, event: &MouseEvent) -> bool;
}

impl<F> MouseFallback for F
where
    F: FnMut(&MouseEvent) -> bool,
{
    fn handle(&mut self, event: &MouseEvent) -> bool {
        self(event)
    }
}

impl Panel {
    /// Filter key events before the widget sees them
    pub fn set_input_capture(&mut self, capture: impl KeyCapture + 'static) {
        self.input_capture = Some(Box::new(capture));
    }

    /// Remove the key capture
    pub fn clear_input_capture(&mut self) {
        self.input_capture = None;
    }

    /// Whether a key capture is installed
    pub fn has_input_capture(&self) -> bool {
        self.input_capture.is_some()
    }

    /// Filter mouse events before the widget sees them
    pub fn set_mouse_capture(&mut self, capture: impl MouseCapture + 'static) {
        self.mouse_capture = Some(Box::new(capture));
    }

    /// Remove the mouse capture
    pub fn clear_mouse_capture(&mut self) {
        self.mouse_capture = None;
    }

    /// Whether a mouse capture is installed
    pub fn has_mouse_capture(&self) -> bool {
        self.mouse_capture.is_some()
    }

    /// Install a handler asked before click-to-focus
    pub fn set_mouse_handler(&mut self, handler: impl MouseFallback + 'static) {
        self.mouse_fallback = Some(Box::new(handler));
    }

    /// Run the key capture, if any
    pub fn capture_key(&mut self, event: KeyEvent) -> Option<KeyEvent> {
        match self.input_capture.as_mut() {
            Some(capture) => capture.capture(event),
            None => Some(event),
        }
    }

    /// Run the mouse capture, if any
    pub fn capture_mouse(&mut self, action: MouseAction, event: MouseEvent) -> Option<(MouseAction, MouseEvent)> {
        match self.mouse_capture.as_mut() {
            Some(capture) => capture.capture(action, event),
            None => Some((action, event)),
        }
    }

    /// Pass `event` through the key capture, then to `handler` if it survived
    pub fn wrap_input_handler<F>(&mut self, event: KeyEvent, set_focus: &mut SetFocus<'_>, handler: F)
    where
        F: FnOnce(KeyEvent, &mut SetFocus<'_>),
    {
        if let Some(event) = self.capture_key(event) {
            handler(event, set_focus);
        }
    }

    /// Pass the event through the mouse capture, then to `handler` if it
    /// survived. A swallowed event is reported as not consumed.
    pub fn wrap_mouse_handler<F>(
        &mut self,
        action: MouseAction,
        event: MouseEvent,
        set_focus: &mut SetFocus<'_>,
        handler: F,
    ) -> MouseOutcome
    where
        F: FnOnce(MouseAction, MouseEvent, &mut SetFocus<'_>) -> MouseOutcome,
    {
        match self.capture_mouse(action, event) {
            Some((action, event)) => handler(action, event, set_focus),
            None => MouseOutcome::ignored(),
        }
    }

    /// Baseline mouse behavior: the installed mouse handler gets the first
    /// look; otherwise a left click inside the panel requests focus for it.
    pub fn default_mouse_handler(
        &mut self,
        action: MouseAction,
        event: MouseEvent,
        set_focus: &mut SetFocus<'_>,
    ) -> MouseOutcome {
        if let Some(fallback) = self.mouse_fallback.as_mut() {
            if fallback.handle(&event) {
                return MouseOutcome::consumed();
            }
        }
        if action == MouseAction::LeftClick && self.in_rect(event.x, event.y) {
            set_focus(PrimitiveHandle::Current);
            return MouseOutcome::consumed();
        }
        MouseOutcome::ignored()
    }
}
