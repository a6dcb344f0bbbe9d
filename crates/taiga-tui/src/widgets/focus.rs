use taiga_core::SelectionState;

use crate::signals::WidgetId;

/// Tab order over the focusable widgets of a form.
#[derive(Debug, Clone)]
pub struct FocusRing {
    targets: Vec<WidgetId>,
    selection: SelectionState,
}

impl FocusRing {
    pub fn new(targets: Vec<WidgetId>) -> Self {
        let mut selection = SelectionState::new();
        selection.select_first_if_empty(targets.len());
        Self { targets, selection }
    }

    pub fn focused(&self) -> Option<WidgetId> {
        self.selection.get().and_then(|idx| self.targets.get(idx).copied())
    }

    pub fn is_focused(&self, id: WidgetId) -> bool {
        self.focused() == Some(id)
    }

    pub fn next(&mut self) {
        self.selection.cycle_forward(self.targets.len());
    }

    pub fn prev(&mut self) {
        self.selection.cycle_backward(self.targets.len());
    }

    pub fn focus(&mut self, id: WidgetId) -> bool {
        match self.targets.iter().position(|t| *t == id) {
            Some(idx) => {
                self.selection.set(Some(idx));
                true
            }
            None => false,
        }
    }
}
