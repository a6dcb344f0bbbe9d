mod common;

use common::FakeExecutor;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::rc::Rc;
use taiga_domain::{MilestoneFilter, UserStoryFilter};
use taiga_tui::keybindings::Keys;
use taiga_tui::signals::Signal;
use taiga_tui::views::BacklogFocus;
use taiga_tui::widgets::Widget;
use taiga_tui::{BacklogController, ProjectDetailController};

fn keys() -> Keys {
    Keys::default()
}

fn open_backlog(executor: &Rc<FakeExecutor>) -> ProjectDetailController {
    let mut controller = ProjectDetailController::new(common::project(), executor.clone(), keys());
    controller.dispatch_completions();
    controller
}

fn backlog(controller: &ProjectDetailController) -> &BacklogController {
    controller.backlog().expect("backlog opened")
}

fn type_text(controller: &mut ProjectDetailController, text: &str) {
    for c in text.chars() {
        controller.handle_key_event(&KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }
}

#[test]
fn test_backlog_loads_unassigned_user_stories() {
    let executor = Rc::new(FakeExecutor::new());
    let controller = open_backlog(&executor);

    assert_eq!(executor.calls().project_stats, 1);
    assert_eq!(executor.calls().user_stories, 1);
    assert_eq!(
        executor.user_story_filters.borrow()[0],
        UserStoryFilter {
            project: 1,
            milestone: MilestoneFilter::Unassigned,
        }
    );

    let view = backlog(&controller).view();
    assert_eq!(view.user_stories.len(), 2);
    assert_eq!(view.user_stories.focused().map(|us| us.id), Some(5));
    assert_eq!(view.stats.as_ref().map(|s| s.completed_percentage()), Some(25));
}

#[test]
fn test_create_a_user_story() {
    let executor = Rc::new(FakeExecutor::new());
    let mut controller = open_backlog(&executor);

    assert!(controller.handle(keys().backlog.create_user_story));
    assert_eq!(backlog(&controller).view().focus, BacklogFocus::UserStoryForm);
    type_text(&mut controller, "Import from Trello");
    let save = backlog(&controller)
        .view()
        .user_story_form
        .get()
        .unwrap()
        .save_button
        .id();
    controller.emit(save, Signal::Click);
    controller.dispatch_completions();

    assert_eq!(executor.calls().create_user_story, 1);
    let created = executor.last_created.borrow().clone().unwrap();
    assert_eq!(created.subject, "Import from Trello");
    assert_eq!(created.status, Some(1));
    assert_eq!(created.milestone, None);

    let view = backlog(&controller).view();
    assert!(!view.user_story_form.is_attached());
    assert_eq!(view.user_stories.len(), 3);
    assert_eq!(view.user_stories.focused().map(|us| us.id), Some(99));
    assert_eq!(view.notifier.current().unwrap().message, "User story #109 created");
}

#[test]
fn test_create_with_blank_subject_never_calls_the_executor() {
    let executor = Rc::new(FakeExecutor::new());
    let mut controller = open_backlog(&executor);
    controller.handle(keys().backlog.create_user_story);
    type_text(&mut controller, "   ");

    let save = backlog(&controller)
        .view()
        .user_story_form
        .get()
        .unwrap()
        .save_button
        .id();
    controller.emit(save, Signal::Click);

    assert_eq!(executor.calls().create_user_story, 0);
    let view = backlog(&controller).view();
    assert_eq!(view.notifier.error_count(), 1);
    assert!(view.user_story_form.is_attached());
}

#[test]
fn test_editing_clears_the_form_error() {
    let executor = Rc::new(FakeExecutor::new());
    let mut controller = open_backlog(&executor);
    controller.handle(keys().backlog.create_user_story);
    let save = backlog(&controller)
        .view()
        .user_story_form
        .get()
        .unwrap()
        .save_button
        .id();
    controller.emit(save, Signal::Click);
    assert!(backlog(&controller)
        .view()
        .user_story_form
        .get()
        .unwrap()
        .error
        .is_some());

    type_text(&mut controller, "x");
    assert!(backlog(&controller)
        .view()
        .user_story_form
        .get()
        .unwrap()
        .error
        .is_none());
}

#[test]
fn test_edit_the_focused_user_story() {
    let executor = Rc::new(FakeExecutor::new());
    let mut controller = open_backlog(&executor);
    controller.handle(keys().backlog.next.primary());
    controller.handle(keys().backlog.edit_user_story);

    let form = backlog(&controller).view().user_story_form.get().unwrap();
    assert_eq!(form.user_story.as_ref().map(|us| us.id), Some(6));
    assert_eq!(form.subject_edit.edit_text(), "Dark theme");
}

#[test]
fn test_move_a_user_story_to_a_milestone() {
    let executor = Rc::new(FakeExecutor::new());
    let mut controller = open_backlog(&executor);
    executor.reset_calls();

    assert!(controller.handle(keys().backlog.move_user_story_to_milestone));
    let popup = backlog(&controller)
        .view()
        .milestone_selector_popup
        .get()
        .unwrap()
        .clone();
    assert_eq!(popup.user_story.as_ref().map(|us| us.id), Some(5));

    controller.emit(popup.options[1].id(), Signal::Click);
    assert!(!backlog(&controller)
        .view()
        .milestone_selector_popup
        .is_attached());
    assert_eq!(backlog(&controller).bus().subscription_count(), 0);

    let (moved, patch) = executor.last_user_story_update.borrow().clone().unwrap();
    assert_eq!(moved.id, 5);
    assert_eq!(patch.milestone, Some(Some(2)));
    assert_eq!(patch.subject, None);

    controller.dispatch_completions();
    let view = backlog(&controller).view();
    assert_eq!(view.user_stories.len(), 1);
    assert_eq!(
        view.notifier.current().unwrap().message,
        "User story #15 moved to Sprint 2"
    );
    assert_eq!(executor.calls().project_stats, 1);
}

#[test]
fn test_failed_move_keeps_the_user_story() {
    let executor = Rc::new(FakeExecutor::new());
    let mut controller = open_backlog(&executor);
    executor.fail_writes.set(true);

    controller.handle(keys().backlog.move_user_story_to_milestone);
    let option = backlog(&controller)
        .view()
        .milestone_selector_popup
        .get()
        .unwrap()
        .options[0]
        .id();
    controller.emit(option, Signal::Click);
    controller.dispatch_completions();

    let view = backlog(&controller).view();
    assert_eq!(view.user_stories.len(), 2);
    assert_eq!(view.notifier.error_count(), 1);
}

#[test]
fn test_help_lists_backlog_keys() {
    let executor = Rc::new(FakeExecutor::new());
    let mut controller = open_backlog(&executor);
    controller.handle(keys().backlog.help);

    let help = backlog(&controller).view().help_popup.get().unwrap();
    assert_eq!(help.context.name, "Backlog");
    assert_eq!(help.context.bindings.len(), 7);

    assert!(controller.handle_key_event(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
    assert!(!backlog(&controller).view().help_popup.is_attached());
}

#[test]
fn test_double_save_sends_one_update() {
    let executor = Rc::new(FakeExecutor::new());
    let mut controller = open_backlog(&executor);
    executor.defer_writes.set(true);

    controller.handle(keys().backlog.edit_user_story);
    let save = backlog(&controller)
        .view()
        .user_story_form
        .get()
        .unwrap()
        .save_button
        .id();
    controller.emit(save, Signal::Click);
    controller.emit(save, Signal::Click);
    assert_eq!(executor.calls().update_user_story, 1);

    let (updated, resolver) = executor.user_story_resolvers.borrow_mut().remove(0);
    resolver.resolve(Ok(updated));
    controller.dispatch_completions();
    assert!(!backlog(&controller).view().user_story_form.is_attached());
    assert_eq!(executor.calls().update_user_story, 1);
}
