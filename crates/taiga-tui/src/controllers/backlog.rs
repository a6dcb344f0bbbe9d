use crossterm::event::KeyEvent;
use std::rc::Rc;
use taiga_api::Executor;
use taiga_core::{TaigaError, TaigaResult};
use taiga_domain::{MilestoneId, Project, UserStory, UserStoryFilter, UserStoryPatch};

use crate::continuations::{self, Continuable, Continuations};
use crate::keybindings::{BacklogAction, KeyBinding, Keymap, Keys, OverlayKeys};
use crate::signals::{Signal, SignalBus, WidgetId};
use crate::views::{BacklogFocus, BacklogView};
use crate::widgets::{HelpPopup, MilestoneSelectorPopup, OverlayInput, UserStoryForm, Widget};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BacklogSignal {
    CloseHelp,
    FormEdited,
    SaveUserStory,
    CancelUserStory,
    SelectMilestone(MilestoneId),
    CancelMilestoneSelector,
}

/// Drives the backlog screen: user stories without a milestone.
pub struct BacklogController {
    view: BacklogView,
    executor: Rc<dyn Executor>,
    keymap: Keymap<BacklogAction>,
    bus: SignalBus<BacklogSignal>,
    continuations: Continuations<Self>,
}

impl Continuable for BacklogController {
    fn continuations(&mut self) -> &mut Continuations<Self> {
        &mut self.continuations
    }
}

impl BacklogController {
    pub fn new(project: Project, executor: Rc<dyn Executor>, keys: &Keys) -> Self {
        Self {
            view: BacklogView::new(project),
            executor,
            keymap: BacklogAction::keymap(&keys.backlog),
            bus: SignalBus::new(),
            continuations: Continuations::new(),
        }
    }

    pub fn view(&self) -> &BacklogView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut BacklogView {
        &mut self.view
    }

    pub fn bus(&self) -> &SignalBus<BacklogSignal> {
        &self.bus
    }

    pub fn keymap(&self) -> &Keymap<BacklogAction> {
        &self.keymap
    }

    pub fn pending_count(&self) -> usize {
        self.continuations.len()
    }

    pub fn handle(&mut self, key: KeyBinding) -> bool {
        let Some(action) = self.keymap.lookup(key) else {
            return false;
        };
        tracing::debug!("Backlog action {:?}", action);
        match action {
            BacklogAction::Help => self.handle_help(),
            BacklogAction::Reload => self.load(),
            BacklogAction::CreateUserStory => self.open_user_story_form(UserStoryForm::create()),
            BacklogAction::EditUserStory => self.handle_edit_user_story(),
            BacklogAction::MoveUserStoryToMilestone => self.handle_move_to_milestone(),
            BacklogAction::Next => self.view.user_stories.next(),
            BacklogAction::Previous => self.view.user_stories.prev(),
        }
        true
    }

    pub fn handle_overlay_key(&mut self, event: &KeyEvent, keys: &OverlayKeys) -> bool {
        let input = match self.view.active_overlay_mut() {
            Some(overlay) => overlay.handle_key(event, keys),
            None => return false,
        };
        if let OverlayInput::Emit(widget, signal) = input {
            self.emit(widget, signal);
        }
        true
    }

    pub fn emit(&mut self, widget: WidgetId, signal: Signal) -> usize {
        let handlers = self.bus.emit(widget, signal);
        let fired = handlers.len();
        for handler in handlers {
            self.apply(handler);
        }
        fired
    }

    pub fn dispatch_completions(&mut self) -> usize {
        continuations::dispatch(self)
    }

    fn apply(&mut self, signal: BacklogSignal) {
        match signal {
            BacklogSignal::CloseHelp => {
                self.view.help_popup.detach(&mut self.bus);
                self.view.refocus();
            }
            BacklogSignal::FormEdited => {
                if let Some(form) = self.view.user_story_form.get_mut() {
                    form.error = None;
                }
            }
            BacklogSignal::SaveUserStory => self.submit_user_story_form(),
            BacklogSignal::CancelUserStory => {
                self.view.user_story_form.detach(&mut self.bus);
                self.view.refocus();
            }
            BacklogSignal::SelectMilestone(id) => self.move_to_milestone(id),
            BacklogSignal::CancelMilestoneSelector => {
                self.view.milestone_selector_popup.detach(&mut self.bus);
                self.view.refocus();
            }
        }
    }

    /// Requests the project stats and the unassigned user stories.
    pub fn load(&mut self) {
        let project_id = self.view.project.id;
        self.load_stats();

        let pending = self
            .executor
            .user_stories(UserStoryFilter::backlog(project_id));
        self.continuations
            .on_complete(pending, |this: &mut Self, result| match result {
                Ok(user_stories) => this.view.user_stories.set_items(user_stories),
                Err(e) => this.report("load the backlog", &e),
            });
    }

    fn load_stats(&mut self) {
        let pending = self.executor.project_stats(self.view.project.id);
        self.continuations
            .on_complete(pending, |this: &mut Self, result| match result {
                Ok(stats) => this.view.stats = Some(stats),
                Err(e) => this.report("load the project stats", &e),
            });
    }

    fn report(&mut self, what: &str, error: &TaigaError) {
        self.view
            .notifier
            .error_msg(format!("Could not {}: {}", what, error.user_message()));
    }

    fn handle_help(&mut self) {
        let popup = HelpPopup::new(self.keymap.context("Backlog"));
        let close = popup.close_button.id();
        self.view
            .help_popup
            .attach(&mut self.bus, popup, [(close, Signal::Click, BacklogSignal::CloseHelp)]);
        self.view.focus = BacklogFocus::HelpPopup;
    }

    fn handle_edit_user_story(&mut self) {
        let form = self.view.user_stories.focused().map(UserStoryForm::edit);
        match form {
            Some(form) => self.open_user_story_form(form),
            None => self.view.notifier.error_msg("No user story selected"),
        }
    }

    fn handle_move_to_milestone(&mut self) {
        let popup = self
            .view
            .user_stories
            .focused()
            .map(|us| MilestoneSelectorPopup::for_user_story(&self.view.project, us));
        let Some(popup) = popup else {
            self.view.notifier.error_msg("No user story selected");
            return;
        };

        let mut connections: Vec<_> = popup
            .options
            .iter()
            .zip(&popup.milestones)
            .map(|(option, milestone)| {
                (
                    option.id(),
                    Signal::Click,
                    BacklogSignal::SelectMilestone(milestone.id),
                )
            })
            .collect();
        connections.push((
            popup.cancel_button.id(),
            Signal::Click,
            BacklogSignal::CancelMilestoneSelector,
        ));
        self.view
            .milestone_selector_popup
            .attach(&mut self.bus, popup, connections);
        self.view.focus = BacklogFocus::MilestoneSelector;
    }

    fn open_user_story_form(&mut self, form: UserStoryForm) {
        let connections = [
            (form.save_button.id(), Signal::Click, BacklogSignal::SaveUserStory),
            (form.cancel_button.id(), Signal::Click, BacklogSignal::CancelUserStory),
            (form.subject_edit.id(), Signal::Change, BacklogSignal::FormEdited),
            (form.description_edit.id(), Signal::Change, BacklogSignal::FormEdited),
        ];
        self.view
            .user_story_form
            .attach(&mut self.bus, form, connections);
        self.view.focus = BacklogFocus::UserStoryForm;
    }

    fn submit_user_story_form(&mut self) {
        let Some(form) = self.view.user_story_form.get_mut() else {
            tracing::warn!("Save requested without a user story form");
            return;
        };
        if form.saving {
            tracing::debug!("User story save already in flight");
            return;
        }
        let form_id = form.id();

        let request = match &form.user_story {
            Some(user_story) => form
                .patch()
                .map(|patch| self.executor.update_user_story(user_story, patch)),
            None => form
                .new_user_story(&self.view.project, None)
                .map(|data| self.executor.create_user_story(data)),
        };
        let pending = match request {
            Ok(pending) => pending,
            Err(e) => {
                form.error = Some(e.user_message());
                self.view.notifier.error_msg(e.user_message());
                return;
            }
        };

        form.saving = true;
        let creating = form.user_story.is_none();
        self.continuations
            .on_complete(pending, move |this: &mut Self, result| {
                this.on_user_story_saved(form_id, creating, result)
            });
    }

    fn on_user_story_saved(
        &mut self,
        form_id: WidgetId,
        creating: bool,
        result: TaigaResult<UserStory>,
    ) {
        match result {
            Ok(user_story) => {
                let reference = user_story.reference;
                if creating {
                    self.view.user_stories.push_and_select(user_story);
                } else {
                    self.view.user_stories.replace(user_story);
                }
                if self.view.user_story_form.holds(form_id) {
                    self.view.user_story_form.detach(&mut self.bus);
                    self.view.refocus();
                } else {
                    tracing::warn!("User story form closed before its save finished");
                }
                let verb = if creating { "created" } else { "saved" };
                self.view
                    .notifier
                    .info_msg(format!("User story #{} {}", reference, verb));
                if creating {
                    self.load_stats();
                }
            }
            Err(e) => {
                match self.view.user_story_form.get_mut() {
                    Some(form) if form.id() == form_id => {
                        form.saving = false;
                        form.error = Some(e.user_message());
                    }
                    _ => tracing::warn!("User story form closed before its save failed"),
                }
                self.report("save the user story", &e);
            }
        }
    }

    fn move_to_milestone(&mut self, milestone_id: MilestoneId) {
        let popup = self.view.milestone_selector_popup.detach(&mut self.bus);
        self.view.refocus();
        let Some(user_story) = popup.and_then(|p| p.user_story) else {
            tracing::warn!("Milestone chosen without a user story to move");
            return;
        };

        let milestone_name = self
            .view
            .project
            .milestone(milestone_id)
            .map(|m| m.name.clone())
            .unwrap_or_else(|| format!("#{}", milestone_id));
        let patch = UserStoryPatch {
            milestone: Some(Some(milestone_id)),
            ..Default::default()
        };
        let pending = self.executor.update_user_story(&user_story, patch);
        self.continuations
            .on_complete(pending, move |this: &mut Self, result| match result {
                Ok(moved) => {
                    this.view.user_stories.remove(moved.id);
                    this.view.notifier.info_msg(format!(
                        "User story #{} moved to {}",
                        moved.reference, milestone_name
                    ));
                    this.load_stats();
                }
                Err(e) => this.report("move the user story", &e),
            });
    }
}
