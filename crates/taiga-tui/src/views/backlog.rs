use taiga_domain::{Project, ProjectStats};

use crate::overlay::OverlaySlot;
use crate::widgets::{
    HelpPopup, MilestoneSelectorPopup, Notifier, OverlayWidget, UserStoryForm, UserStoryList,
};

/// What receives key presses on the backlog screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BacklogFocus {
    #[default]
    UserStories,
    HelpPopup,
    UserStoryForm,
    MilestoneSelector,
}

#[derive(Debug)]
pub struct BacklogView {
    pub project: Project,
    pub stats: Option<ProjectStats>,
    pub user_stories: UserStoryList,
    pub notifier: Notifier,
    pub help_popup: OverlaySlot<HelpPopup>,
    pub user_story_form: OverlaySlot<UserStoryForm>,
    pub milestone_selector_popup: OverlaySlot<MilestoneSelectorPopup>,
    pub focus: BacklogFocus,
}

impl BacklogView {
    pub fn new(project: Project) -> Self {
        Self {
            project,
            stats: None,
            user_stories: UserStoryList::new(),
            notifier: Notifier::new(),
            help_popup: OverlaySlot::empty(),
            user_story_form: OverlaySlot::empty(),
            milestone_selector_popup: OverlaySlot::empty(),
            focus: BacklogFocus::default(),
        }
    }

    /// Moves focus to an attached overlay, or back to the list when none is left.
    pub fn refocus(&mut self) {
        self.focus = if self.user_story_form.is_attached() {
            BacklogFocus::UserStoryForm
        } else if self.milestone_selector_popup.is_attached() {
            BacklogFocus::MilestoneSelector
        } else if self.help_popup.is_attached() {
            BacklogFocus::HelpPopup
        } else {
            BacklogFocus::UserStories
        };
    }

    pub fn active_overlay_mut(&mut self) -> Option<&mut dyn OverlayWidget> {
        match self.focus {
            BacklogFocus::UserStories => None,
            BacklogFocus::HelpPopup => self
                .help_popup
                .get_mut()
                .map(|w| w as &mut dyn OverlayWidget),
            BacklogFocus::UserStoryForm => self
                .user_story_form
                .get_mut()
                .map(|w| w as &mut dyn OverlayWidget),
            BacklogFocus::MilestoneSelector => self
                .milestone_selector_popup
                .get_mut()
                .map(|w| w as &mut dyn OverlayWidget),
        }
    }

    pub fn has_focused_overlay(&self) -> bool {
        self.focus != BacklogFocus::UserStories
    }
}
