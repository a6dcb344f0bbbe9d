//! Edit forms shown on top of the backlog and the taskboard.

use crossterm::event::{KeyEvent, KeyEventKind};
use taiga_core::TaigaResult;
use taiga_domain::{MilestoneId, NewUserStory, Project, Task, TaskPatch, UserStory, UserStoryPatch};

use super::{Button, Edit, FocusRing, OverlayInput, OverlayWidget, Widget};
use crate::keybindings::{KeyBinding, OverlayKeys};
use crate::signals::{Signal, WidgetId};

/// Shared key routing for forms made of edits followed by buttons.
fn route_key(
    event: &KeyEvent,
    keys: &OverlayKeys,
    focus: &mut FocusRing,
    edits: &mut [&mut Edit],
    cancel: WidgetId,
) -> OverlayInput {
    // Terminals with key release reporting send a second event per key.
    if event.kind != KeyEventKind::Press {
        return OverlayInput::Ignored;
    }
    let binding = KeyBinding::from_event(event);
    if binding == Some(keys.cancel) {
        return OverlayInput::Emit(cancel, Signal::Click);
    }
    if binding == Some(keys.next_field) {
        focus.next();
        return OverlayInput::Consumed;
    }
    if binding == Some(keys.previous_field) {
        focus.prev();
        return OverlayInput::Consumed;
    }

    let Some(focused) = focus.focused() else {
        return OverlayInput::Ignored;
    };
    if let Some(edit) = edits.iter_mut().find(|e| e.id() == focused) {
        if binding == Some(keys.activate) {
            focus.next();
            return OverlayInput::Consumed;
        }
        return if edit.handle_key(event) {
            OverlayInput::Emit(focused, Signal::Change)
        } else {
            OverlayInput::Consumed
        };
    }

    if binding == Some(keys.activate) {
        OverlayInput::Emit(focused, Signal::Click)
    } else {
        OverlayInput::Ignored
    }
}

#[derive(Debug, Clone)]
pub struct UserStoryForm {
    id: WidgetId,
    /// The story being edited, `None` when creating one.
    pub user_story: Option<UserStory>,
    pub subject_edit: Edit,
    pub description_edit: Edit,
    pub save_button: Button,
    pub cancel_button: Button,
    pub focus: FocusRing,
    pub error: Option<String>,
    /// Set while a save request for this form is in flight.
    pub saving: bool,
}

impl UserStoryForm {
    pub fn create() -> Self {
        Self::build(None)
    }

    pub fn edit(user_story: &UserStory) -> Self {
        Self::build(Some(user_story.clone()))
    }

    fn build(user_story: Option<UserStory>) -> Self {
        let (subject, description) = user_story
            .as_ref()
            .map(|us| (us.subject.clone(), us.description.clone()))
            .unwrap_or_default();
        let subject_edit = Edit::new("Subject", subject);
        let description_edit = Edit::new("Description", description);
        let save_button = Button::new("Save");
        let cancel_button = Button::new("Cancel");
        let focus = FocusRing::new(vec![
            subject_edit.id(),
            description_edit.id(),
            save_button.id(),
            cancel_button.id(),
        ]);
        Self {
            id: WidgetId::next(),
            user_story,
            subject_edit,
            description_edit,
            save_button,
            cancel_button,
            focus,
            error: None,
            saving: false,
        }
    }

    pub fn title(&self) -> String {
        match &self.user_story {
            Some(us) => format!("Edit user story #{}", us.reference),
            None => "New user story".to_string(),
        }
    }

    pub fn subject(&self) -> &str {
        self.subject_edit.edit_text().trim()
    }

    /// Changes for the story under edit. Fails when the subject is blank.
    pub fn patch(&self) -> TaigaResult<UserStoryPatch> {
        let mut patch = UserStoryPatch {
            subject: Some(self.subject().to_string()),
            ..Default::default()
        };
        let description = self.description_edit.edit_text();
        let changed = match &self.user_story {
            Some(us) => us.description != description,
            None => true,
        };
        if changed {
            patch.description = Some(description.to_string());
        }
        patch.validate()?;
        Ok(patch)
    }

    pub fn new_user_story(
        &self,
        project: &Project,
        milestone: Option<MilestoneId>,
    ) -> TaigaResult<NewUserStory> {
        let data = NewUserStory {
            project: project.id,
            subject: self.subject().to_string(),
            description: self.description_edit.edit_text().to_string(),
            status: project.default_us_status,
            milestone,
        };
        data.validate()?;
        Ok(data)
    }
}

impl Widget for UserStoryForm {
    fn id(&self) -> WidgetId {
        self.id
    }
}

impl OverlayWidget for UserStoryForm {
    fn handle_key(&mut self, event: &KeyEvent, keys: &OverlayKeys) -> OverlayInput {
        route_key(
            event,
            keys,
            &mut self.focus,
            &mut [&mut self.subject_edit, &mut self.description_edit],
            self.cancel_button.id(),
        )
    }
}

#[derive(Debug, Clone)]
pub struct TaskForm {
    id: WidgetId,
    pub task: Task,
    pub subject_edit: Edit,
    pub save_button: Button,
    pub cancel_button: Button,
    pub focus: FocusRing,
    pub error: Option<String>,
    /// Set while a save request for this form is in flight.
    pub saving: bool,
}

impl TaskForm {
    pub fn edit(task: &Task) -> Self {
        let subject_edit = Edit::new("Subject", task.subject.clone());
        let save_button = Button::new("Save");
        let cancel_button = Button::new("Cancel");
        let focus = FocusRing::new(vec![
            subject_edit.id(),
            save_button.id(),
            cancel_button.id(),
        ]);
        Self {
            id: WidgetId::next(),
            task: task.clone(),
            subject_edit,
            save_button,
            cancel_button,
            focus,
            error: None,
            saving: false,
        }
    }

    pub fn title(&self) -> String {
        format!("Edit task #{}", self.task.reference)
    }

    pub fn patch(&self) -> TaigaResult<TaskPatch> {
        let patch = TaskPatch {
            subject: Some(self.subject_edit.edit_text().trim().to_string()),
            ..Default::default()
        };
        patch.validate()?;
        Ok(patch)
    }
}

impl Widget for TaskForm {
    fn id(&self) -> WidgetId {
        self.id
    }
}

impl OverlayWidget for TaskForm {
    fn handle_key(&mut self, event: &KeyEvent, keys: &OverlayKeys) -> OverlayInput {
        route_key(
            event,
            keys,
            &mut self.focus,
            &mut [&mut self.subject_edit],
            self.cancel_button.id(),
        )
    }
}
