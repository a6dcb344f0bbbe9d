use crossterm::event::KeyEvent;
use std::rc::Rc;
use taiga_api::Executor;
use taiga_core::{TaigaError, TaigaResult};
use taiga_domain::{Milestone, MilestoneId, Project, TaskFilter, UserStory, UserStoryFilter};

use crate::continuations::{self, Continuable, Continuations};
use crate::keybindings::{KeyBinding, Keymap, Keys, OverlayKeys, SprintAction};
use crate::signals::{Signal, SignalBus, WidgetId};
use crate::views::{SprintFocus, SprintView};
use crate::widgets::{
    HelpPopup, MilestoneSelectorPopup, OverlayInput, TaskForm, TaskboardRow, UserStoryForm, Widget,
};

/// Handlers the milestone screen connects to its overlay widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SprintSignal {
    CloseHelp,
    FormEdited,
    SaveUserStory,
    CancelUserStory,
    SaveTask,
    CancelTask,
    SelectMilestone(MilestoneId),
    CancelMilestoneSelector,
}

/// Drives the milestone (sprint) screen: taskboard, stats and the overlays
/// opened on top of them.
pub struct SprintController {
    view: SprintView,
    executor: Rc<dyn Executor>,
    keymap: Keymap<SprintAction>,
    bus: SignalBus<SprintSignal>,
    continuations: Continuations<Self>,
    milestone_id: Option<MilestoneId>,
}

impl Continuable for SprintController {
    fn continuations(&mut self) -> &mut Continuations<Self> {
        &mut self.continuations
    }
}

impl SprintController {
    pub fn new(project: Project, executor: Rc<dyn Executor>, keys: &Keys) -> Self {
        let milestone_id = project.current_milestone().map(|m| m.id);
        Self {
            view: SprintView::new(project),
            executor,
            keymap: SprintAction::keymap(&keys.milestone),
            bus: SignalBus::new(),
            continuations: Continuations::new(),
            milestone_id,
        }
    }

    pub fn view(&self) -> &SprintView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut SprintView {
        &mut self.view
    }

    pub fn bus(&self) -> &SignalBus<SprintSignal> {
        &self.bus
    }

    pub fn keymap(&self) -> &Keymap<SprintAction> {
        &self.keymap
    }

    /// The milestone being shown, set as soon as one is chosen.
    pub fn milestone_id(&self) -> Option<MilestoneId> {
        self.milestone_id
    }

    /// The last milestone record loaded for [`Self::milestone_id`].
    pub fn milestone(&self) -> Option<&Milestone> {
        self.view.milestone.as_ref()
    }

    pub fn pending_count(&self) -> usize {
        self.continuations.len()
    }

    /// Runs the action bound to `key`. Returns `false` for unbound keys.
    pub fn handle(&mut self, key: KeyBinding) -> bool {
        let Some(action) = self.keymap.lookup(key) else {
            return false;
        };
        tracing::debug!("Milestone action {:?}", action);
        match action {
            SprintAction::Help => self.handle_help(),
            SprintAction::Reload => self.load(),
            SprintAction::ChangeToMilestone => self.handle_change_to_milestone(),
            SprintAction::EditUserStoryOrTask => self.handle_edit_user_story_or_task(),
            SprintAction::Next => self.view.taskboard.next(),
            SprintAction::Previous => self.view.taskboard.prev(),
        }
        true
    }

    /// Gives the key to the focused overlay. Returns `false` when no overlay has focus.
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

    /// Delivers a widget signal to its connected handlers, in connection order.
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

    fn apply(&mut self, signal: SprintSignal) {
        match signal {
            SprintSignal::CloseHelp => {
                self.view.help_popup.detach(&mut self.bus);
                self.view.refocus();
            }
            SprintSignal::FormEdited => {
                if let Some(form) = self.view.user_story_form.get_mut() {
                    form.error = None;
                }
                if let Some(form) = self.view.task_form.get_mut() {
                    form.error = None;
                }
            }
            SprintSignal::SaveUserStory => self.submit_user_story_form(),
            SprintSignal::CancelUserStory => {
                self.view.user_story_form.detach(&mut self.bus);
                self.view.refocus();
            }
            SprintSignal::SaveTask => self.submit_task_form(),
            SprintSignal::CancelTask => {
                self.view.task_form.detach(&mut self.bus);
                self.view.refocus();
            }
            SprintSignal::SelectMilestone(id) => self.change_milestone(id),
            SprintSignal::CancelMilestoneSelector => {
                self.view.milestone_selector_popup.detach(&mut self.bus);
                self.view.refocus();
            }
        }
    }

    /// Requests the milestone, its stats, its user stories and its tasks at
    /// once. Each result updates only its own part of the view.
    pub fn load(&mut self) {
        let Some(milestone_id) = self.milestone_id else {
            self.view.notifier.info_msg("This project has no milestones");
            return;
        };
        let project_id = self.view.project.id;

        let pending = self.executor.milestone(milestone_id);
        self.continuations.on_complete(pending, move |this: &mut Self, result| {
            if this.is_current(milestone_id) {
                match result {
                    Ok(milestone) => this.view.milestone = Some(milestone),
                    Err(e) => this.report("load the milestone", &e),
                }
            }
        });

        let pending = self.executor.milestone_stats(milestone_id);
        self.continuations.on_complete(pending, move |this: &mut Self, result| {
            if this.is_current(milestone_id) {
                match result {
                    Ok(stats) => this.view.stats = Some(stats),
                    Err(e) => this.report("load the milestone stats", &e),
                }
            }
        });

        let pending = self
            .executor
            .user_stories(UserStoryFilter::milestone(project_id, milestone_id));
        self.continuations.on_complete(pending, move |this: &mut Self, result| {
            if this.is_current(milestone_id) {
                match result {
                    Ok(user_stories) => this.view.taskboard.set_user_stories(user_stories),
                    Err(e) => this.report("load the user stories", &e),
                }
            }
        });

        let pending = self
            .executor
            .tasks(TaskFilter::milestone(project_id, milestone_id));
        self.continuations.on_complete(pending, move |this: &mut Self, result| {
            if this.is_current(milestone_id) {
                match result {
                    Ok(tasks) => this.view.taskboard.set_tasks(tasks),
                    Err(e) => this.report("load the tasks", &e),
                }
            }
        });
    }

    fn is_current(&self, milestone_id: MilestoneId) -> bool {
        let current = self.milestone_id == Some(milestone_id);
        if !current {
            tracing::debug!("Dropping result for milestone {} after switching", milestone_id);
        }
        current
    }

    fn report(&mut self, what: &str, error: &TaigaError) {
        self.view
            .notifier
            .error_msg(format!("Could not {}: {}", what, error.user_message()));
    }

    fn handle_help(&mut self) {
        let popup = HelpPopup::new(self.keymap.context("Milestone"));
        let close = popup.close_button.id();
        self.view
            .help_popup
            .attach(&mut self.bus, popup, [(close, Signal::Click, SprintSignal::CloseHelp)]);
        self.view.focus = SprintFocus::HelpPopup;
    }

    fn handle_change_to_milestone(&mut self) {
        let popup = MilestoneSelectorPopup::new(&self.view.project, self.milestone_id);
        let mut connections: Vec<_> = popup
            .options
            .iter()
            .zip(&popup.milestones)
            .map(|(option, milestone)| {
                (
                    option.id(),
                    Signal::Click,
                    SprintSignal::SelectMilestone(milestone.id),
                )
            })
            .collect();
        connections.push((
            popup.cancel_button.id(),
            Signal::Click,
            SprintSignal::CancelMilestoneSelector,
        ));
        self.view
            .milestone_selector_popup
            .attach(&mut self.bus, popup, connections);
        self.view.focus = SprintFocus::MilestoneSelector;
    }

    fn change_milestone(&mut self, milestone_id: MilestoneId) {
        self.view.milestone_selector_popup.detach(&mut self.bus);
        self.view.refocus();

        self.milestone_id = Some(milestone_id);
        let name = self
            .view
            .project
            .milestone(milestone_id)
            .map(|m| m.name.clone())
            .unwrap_or_else(|| format!("#{}", milestone_id));
        self.view
            .notifier
            .info_msg(format!("Switched to milestone {}", name));
        self.view.clear_milestone();
        self.load();
    }

    fn handle_edit_user_story_or_task(&mut self) {
        let (user_story_form, task_form) = match self.view.taskboard.focused_row() {
            Some(TaskboardRow::UserStory(user_story)) => (Some(UserStoryForm::edit(user_story)), None),
            Some(TaskboardRow::Task(task)) => (None, Some(TaskForm::edit(task))),
            None => (None, None),
        };
        if let Some(form) = user_story_form {
            self.open_user_story_form(form);
        } else if let Some(form) = task_form {
            self.open_task_form(form);
        } else {
            tracing::debug!("Nothing focused on the taskboard");
        }
    }

    fn open_user_story_form(&mut self, form: UserStoryForm) {
        let connections = [
            (form.save_button.id(), Signal::Click, SprintSignal::SaveUserStory),
            (form.cancel_button.id(), Signal::Click, SprintSignal::CancelUserStory),
            (form.subject_edit.id(), Signal::Change, SprintSignal::FormEdited),
            (form.description_edit.id(), Signal::Change, SprintSignal::FormEdited),
        ];
        self.view
            .user_story_form
            .attach(&mut self.bus, form, connections);
        self.view.focus = SprintFocus::UserStoryForm;
    }

    fn open_task_form(&mut self, form: TaskForm) {
        let connections = [
            (form.save_button.id(), Signal::Click, SprintSignal::SaveTask),
            (form.cancel_button.id(), Signal::Click, SprintSignal::CancelTask),
            (form.subject_edit.id(), Signal::Change, SprintSignal::FormEdited),
        ];
        self.view.task_form.attach(&mut self.bus, form, connections);
        self.view.focus = SprintFocus::TaskForm;
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
        let Some(user_story) = form.user_story.clone() else {
            tracing::warn!("User story form on the taskboard has no story");
            return;
        };
        let patch = match form.patch() {
            Ok(patch) => patch,
            Err(e) => {
                form.error = Some(e.user_message());
                self.view.notifier.error_msg(e.user_message());
                return;
            }
        };

        form.saving = true;
        let pending = self.executor.update_user_story(&user_story, patch);
        self.continuations
            .on_complete(pending, move |this: &mut Self, result| {
                this.on_user_story_saved(form_id, result)
            });
    }

    fn on_user_story_saved(&mut self, form_id: WidgetId, result: TaigaResult<UserStory>) {
        match result {
            Ok(user_story) => {
                let reference = user_story.reference;
                self.view.taskboard.replace_user_story(user_story);
                if self.view.user_story_form.holds(form_id) {
                    self.view.user_story_form.detach(&mut self.bus);
                    self.view.refocus();
                } else {
                    tracing::warn!("User story form closed before its save finished");
                }
                self.view
                    .notifier
                    .info_msg(format!("User story #{} saved", reference));
            }
            Err(e) => {
                match self.view.user_story_form.get_mut() {
                    Some(form) if form.id() == form_id => {
                        form.saving = false;
                        form.error = Some(e.user_message());
                    }
                    _ => tracing::warn!("User story form closed before its save failed"),
                }
                self.view
                    .notifier
                    .error_msg(format!("Could not save the user story: {}", e.user_message()));
            }
        }
    }

    fn submit_task_form(&mut self) {
        let Some(form) = self.view.task_form.get_mut() else {
            tracing::warn!("Save requested without a task form");
            return;
        };
        if form.saving {
            tracing::debug!("Task save already in flight");
            return;
        }
        let form_id = form.id();
        let task = form.task.clone();
        let patch = match form.patch() {
            Ok(patch) => patch,
            Err(e) => {
                form.error = Some(e.user_message());
                self.view.notifier.error_msg(e.user_message());
                return;
            }
        };

        form.saving = true;
        let pending = self.executor.update_task(&task, patch);
        self.continuations
            .on_complete(pending, move |this: &mut Self, result| match result {
                Ok(task) => {
                    let reference = task.reference;
                    this.view.taskboard.replace_task(task);
                    if this.view.task_form.holds(form_id) {
                        this.view.task_form.detach(&mut this.bus);
                        this.view.refocus();
                    } else {
                        tracing::warn!("Task form closed before its save finished");
                    }
                    this.view
                        .notifier
                        .info_msg(format!("Task #{} saved", reference));
                }
                Err(e) => {
                    match this.view.task_form.get_mut() {
                        Some(form) if form.id() == form_id => {
                            form.saving = false;
                            form.error = Some(e.user_message());
                        }
                        _ => tracing::warn!("Task form closed before its save failed"),
                    }
                    this.view
                        .notifier
                        .error_msg(format!("Could not save the task: {}", e.user_message()));
                }
            });
    }
}
