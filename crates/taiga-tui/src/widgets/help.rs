use crossterm::event::KeyEvent;

use super::{Button, OverlayInput, OverlayWidget, Widget};
use crate::keybindings::{KeyBinding, KeybindingContext, OverlayKeys};
use crate::signals::{Signal, WidgetId};

/// Read-only list of the keys of the screen it was opened from.
#[derive(Debug, Clone)]
pub struct HelpPopup {
    id: WidgetId,
    pub title: String,
    pub context: KeybindingContext,
    pub close_button: Button,
}

impl HelpPopup {
    pub fn new(context: KeybindingContext) -> Self {
        Self {
            id: WidgetId::next(),
            title: format!("Help - {}", context.name),
            context,
            close_button: Button::new("Close"),
        }
    }
}

impl Widget for HelpPopup {
    fn id(&self) -> WidgetId {
        self.id
    }
}

impl OverlayWidget for HelpPopup {
    fn handle_key(&mut self, event: &KeyEvent, keys: &OverlayKeys) -> OverlayInput {
        match KeyBinding::from_event(event) {
            Some(key) if key == keys.cancel || key == keys.activate => {
                OverlayInput::Emit(self.close_button.id(), Signal::Click)
            }
            _ => OverlayInput::Ignored,
        }
    }
}
