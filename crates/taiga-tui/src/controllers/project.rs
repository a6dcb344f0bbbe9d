use crossterm::event::KeyEvent;
use std::rc::Rc;
use taiga_api::Executor;
use taiga_domain::Project;

use super::{BacklogController, SprintController};
use crate::keybindings::{KeyBinding, Keymap, Keys, ProjectAction};
use crate::signals::{Signal, WidgetId};
use crate::views::{ProjectDetailView, ProjectMode};
use crate::widgets::Notifier;

/// Top-level controller for one project. Switches between the backlog and
/// milestone screens and routes keys to whichever is active.
pub struct ProjectDetailController {
    view: ProjectDetailView,
    executor: Rc<dyn Executor>,
    keys: Keys,
    keymap: Keymap<ProjectAction>,
    backlog: Option<BacklogController>,
    sprint: Option<SprintController>,
}

impl ProjectDetailController {
    pub fn new(project: Project, executor: Rc<dyn Executor>, keys: Keys) -> Self {
        let keymap = ProjectAction::keymap(&keys.project);
        let mut controller = Self {
            view: ProjectDetailView::new(project),
            executor,
            keys,
            keymap,
            backlog: None,
            sprint: None,
        };
        controller.show_backlog();
        controller
    }

    pub fn view(&self) -> &ProjectDetailView {
        &self.view
    }

    pub fn mode(&self) -> ProjectMode {
        self.view.mode
    }

    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    pub fn backlog(&self) -> Option<&BacklogController> {
        self.backlog.as_ref()
    }

    pub fn backlog_mut(&mut self) -> Option<&mut BacklogController> {
        self.backlog.as_mut()
    }

    pub fn sprint(&self) -> Option<&SprintController> {
        self.sprint.as_ref()
    }

    pub fn sprint_mut(&mut self) -> Option<&mut SprintController> {
        self.sprint.as_mut()
    }

    /// Project keys switch screens; anything else goes to the active screen.
    /// Returns `false` when nobody handled the key.
    pub fn handle(&mut self, key: KeyBinding) -> bool {
        if let Some(action) = self.keymap.lookup(key) {
            match action {
                ProjectAction::Backlog => self.show_backlog(),
                ProjectAction::Milestones => self.show_milestones(),
            }
            return true;
        }

        let handled = match self.view.mode {
            ProjectMode::Backlog => self.backlog.as_mut().is_some_and(|c| c.handle(key)),
            ProjectMode::Milestones => self.sprint.as_mut().is_some_and(|c| c.handle(key)),
        };
        if !handled {
            tracing::debug!("Unhandled key {} in {:?}", key, self.view.mode);
        }
        handled
    }

    /// Entry point for terminal key events: a focused overlay sees the key
    /// first, then the key bindings.
    pub fn handle_key_event(&mut self, event: &KeyEvent) -> bool {
        let overlay_keys = &self.keys.overlay;
        let consumed = match self.view.mode {
            ProjectMode::Backlog => self
                .backlog
                .as_mut()
                .is_some_and(|c| c.handle_overlay_key(event, overlay_keys)),
            ProjectMode::Milestones => self
                .sprint
                .as_mut()
                .is_some_and(|c| c.handle_overlay_key(event, overlay_keys)),
        };
        if consumed {
            return true;
        }
        KeyBinding::from_event(event).is_some_and(|key| self.handle(key))
    }

    /// Delivers a widget signal to both screens. Widget ids are unique, so at
    /// most one of them has handlers for it.
    pub fn emit(&mut self, widget: WidgetId, signal: Signal) -> usize {
        let backlog = self.backlog.as_mut().map_or(0, |c| c.emit(widget, signal));
        let sprint = self.sprint.as_mut().map_or(0, |c| c.emit(widget, signal));
        backlog + sprint
    }

    /// Applies every executor result that arrived since the last call.
    pub fn dispatch_completions(&mut self) -> usize {
        let backlog = self
            .backlog
            .as_mut()
            .map_or(0, |c| c.dispatch_completions());
        let sprint = self
            .sprint
            .as_mut()
            .map_or(0, |c| c.dispatch_completions());
        backlog + sprint
    }

    pub fn has_focused_overlay(&self) -> bool {
        match self.view.mode {
            ProjectMode::Backlog => self
                .backlog
                .as_ref()
                .is_some_and(|c| c.view().has_focused_overlay()),
            ProjectMode::Milestones => self
                .sprint
                .as_ref()
                .is_some_and(|c| c.view().has_focused_overlay()),
        }
    }

    /// Notifier of the active screen.
    pub fn notifier(&self) -> Option<&Notifier> {
        match self.view.mode {
            ProjectMode::Backlog => self.backlog.as_ref().map(|c| &c.view().notifier),
            ProjectMode::Milestones => self.sprint.as_ref().map(|c| &c.view().notifier),
        }
    }

    fn show_backlog(&mut self) {
        self.view.mode = ProjectMode::Backlog;
        if self.backlog.is_none() {
            let mut backlog = BacklogController::new(
                self.view.project.clone(),
                Rc::clone(&self.executor),
                &self.keys,
            );
            backlog.load();
            self.backlog = Some(backlog);
        }
    }

    fn show_milestones(&mut self) {
        self.view.mode = ProjectMode::Milestones;
        if self.sprint.is_none() {
            let mut sprint = SprintController::new(
                self.view.project.clone(),
                Rc::clone(&self.executor),
                &self.keys,
            );
            sprint.load();
            self.sprint = Some(sprint);
        }
    }
}
