use crossterm::event::KeyEvent;
use taiga_core::SelectionState;
use taiga_domain::{MilestoneId, MilestoneSummary, Project, UserStory};

use super::{Button, OverlayInput, OverlayWidget, Widget};
use crate::keybindings::{KeyBinding, OverlayKeys};
use crate::signals::{Signal, WidgetId};

/// One option per project milestone, in project order.
#[derive(Debug, Clone)]
pub struct MilestoneSelectorPopup {
    id: WidgetId,
    pub milestones: Vec<MilestoneSummary>,
    pub options: Vec<Button>,
    pub cancel_button: Button,
    pub selection: SelectionState,
    pub current: Option<MilestoneId>,
    /// Set when the popup picks a milestone for this story.
    pub user_story: Option<UserStory>,
}

impl MilestoneSelectorPopup {
    pub fn new(project: &Project, current: Option<MilestoneId>) -> Self {
        let milestones = project.list_of_milestones.clone();
        let options = milestones
            .iter()
            .map(|m| {
                if m.closed {
                    Button::new(format!("{} (closed)", m.name))
                } else {
                    Button::new(m.name.clone())
                }
            })
            .collect();
        let mut selection = SelectionState::new();
        selection.set(current.and_then(|id| milestones.iter().position(|m| m.id == id)));
        selection.select_first_if_empty(milestones.len());

        Self {
            id: WidgetId::next(),
            milestones,
            options,
            cancel_button: Button::new("Cancel"),
            selection,
            current,
            user_story: None,
        }
    }

    pub fn for_user_story(project: &Project, user_story: &UserStory) -> Self {
        let mut popup = Self::new(project, user_story.milestone);
        popup.user_story = Some(user_story.clone());
        popup
    }

    pub fn title(&self) -> String {
        match &self.user_story {
            Some(us) => format!("Move #{} to milestone", us.reference),
            None => "Change to milestone".to_string(),
        }
    }

    pub fn selected_option(&self) -> Option<&Button> {
        self.selection.get().and_then(|idx| self.options.get(idx))
    }
}

impl Widget for MilestoneSelectorPopup {
    fn id(&self) -> WidgetId {
        self.id
    }
}

impl OverlayWidget for MilestoneSelectorPopup {
    fn handle_key(&mut self, event: &KeyEvent, keys: &OverlayKeys) -> OverlayInput {
        let Some(key) = KeyBinding::from_event(event) else {
            return OverlayInput::Ignored;
        };
        if key == keys.cancel {
            OverlayInput::Emit(self.cancel_button.id(), Signal::Click)
        } else if keys.up.contains(key) {
            self.selection.prev(self.options.len());
            OverlayInput::Consumed
        } else if keys.down.contains(key) {
            self.selection.next(self.options.len());
            OverlayInput::Consumed
        } else if key == keys.activate {
            match self.selected_option() {
                Some(option) => OverlayInput::Emit(option.id(), Signal::Click),
                None => OverlayInput::Ignored,
            }
        } else {
            OverlayInput::Ignored
        }
    }
}
