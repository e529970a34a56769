//! Change notifications
//!
//! Panels report geometry changes to an optional listener before applying
//! them. Events serialize to JSON for external observers:
//!
//! ```json
//! {"event": "set.rect", "x": 0, "y": 0, "width": 40, "height": 10}
//! ```

use serde::{Deserialize, Serialize};

use crate::core::Rect;
use crate::panel::Panel;

/// A structured change event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum ChangeEvent {
    /// The outer rectangle is about to change to these values
    #[serde(rename = "set.rect")]
    SetRect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
}

impl ChangeEvent {
    /// Event name as observers see it
    pub fn name(&self) -> &'static str {
        match self {
            ChangeEvent::SetRect { .. } => "set.rect",
        }
    }

    pub fn set_rect(rect: Rect) -> Self {
        ChangeEvent::SetRect {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!(r#"{{"event":"{}"}}"#, self.name()))
    }
}

/// Receives change events.
///
/// The panel is passed in its pre-change state.
pub trait ChangeListener {
    fn on_change(&mut self, panel: &Panel, event: &ChangeEvent);
}

impl<F> ChangeListener for F
where
    F: FnMut(&Panel, &ChangeEvent),
{
    fn on_change(&mut self, panel: &Panel, event: &ChangeEvent) {
        self(panel, event)
    }
}
