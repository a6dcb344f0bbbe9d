use taiga_domain::{Milestone, MilestoneStats, Project};

use crate::overlay::OverlaySlot;
use crate::widgets::{
    HelpPopup, MilestoneSelectorPopup, Notifier, OverlayWidget, TaskForm, Taskboard,
    UserStoryForm,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SprintFocus {
    #[default]
    Taskboard,
    HelpPopup,
    UserStoryForm,
    TaskForm,
    MilestoneSelector,
}

#[derive(Debug)]
pub struct SprintView {
    pub project: Project,
    pub milestone: Option<Milestone>,
    pub stats: Option<MilestoneStats>,
    pub taskboard: Taskboard,
    pub notifier: Notifier,
    pub help_popup: OverlaySlot<HelpPopup>,
    pub user_story_form: OverlaySlot<UserStoryForm>,
    pub task_form: OverlaySlot<TaskForm>,
    pub milestone_selector_popup: OverlaySlot<MilestoneSelectorPopup>,
    pub focus: SprintFocus,
}

impl SprintView {
    pub fn new(project: Project) -> Self {
        Self {
            project,
            milestone: None,
            stats: None,
            taskboard: Taskboard::new(),
            notifier: Notifier::new(),
            help_popup: OverlaySlot::empty(),
            user_story_form: OverlaySlot::empty(),
            task_form: OverlaySlot::empty(),
            milestone_selector_popup: OverlaySlot::empty(),
            focus: SprintFocus::default(),
        }
    }

    /// Drops everything loaded for the previous milestone.
    pub fn clear_milestone(&mut self) {
        self.milestone = None;
        self.stats = None;
        self.taskboard.clear();
    }

    pub fn refocus(&mut self) {
        self.focus = if self.user_story_form.is_attached() {
            SprintFocus::UserStoryForm
        } else if self.task_form.is_attached() {
            SprintFocus::TaskForm
        } else if self.milestone_selector_popup.is_attached() {
            SprintFocus::MilestoneSelector
        } else if self.help_popup.is_attached() {
            SprintFocus::HelpPopup
        } else {
            SprintFocus::Taskboard
        };
    }

    pub fn active_overlay_mut(&mut self) -> Option<&mut dyn OverlayWidget> {
        match self.focus {
            SprintFocus::Taskboard => None,
            SprintFocus::HelpPopup => self
                .help_popup
                .get_mut()
                .map(|w| w as &mut dyn OverlayWidget),
            SprintFocus::UserStoryForm => self
                .user_story_form
                .get_mut()
                .map(|w| w as &mut dyn OverlayWidget),
            SprintFocus::TaskForm => self.task_form.get_mut().map(|w| w as &mut dyn OverlayWidget),
            SprintFocus::MilestoneSelector => self
                .milestone_selector_popup
                .get_mut()
                .map(|w| w as &mut dyn OverlayWidget),
        }
    }

    pub fn has_focused_overlay(&self) -> bool {
        self.focus != SprintFocus::Taskboard
    }
}
