mod common;

use common::FakeExecutor;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use std::rc::Rc;
use taiga_tui::keybindings::{KeyBinding, Keys};
use taiga_tui::views::ProjectMode;
use taiga_tui::{ui, App, ProjectDetailController};

fn controller(executor: &Rc<FakeExecutor>) -> ProjectDetailController {
    ProjectDetailController::new(common::project(), executor.clone(), Keys::default())
}

fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_starts_on_the_backlog() {
    let executor = Rc::new(FakeExecutor::new());
    let controller = controller(&executor);

    assert_eq!(controller.mode(), ProjectMode::Backlog);
    assert!(controller.backlog().is_some());
    assert!(controller.sprint().is_none());
    assert_eq!(executor.calls().user_stories, 1);
}

#[test]
fn test_screens_are_loaded_on_first_entry_only() {
    let executor = Rc::new(FakeExecutor::new());
    let mut controller = controller(&executor);
    let keys = Keys::default();

    assert!(controller.handle(keys.project.milestones));
    assert_eq!(controller.mode(), ProjectMode::Milestones);
    assert_eq!(executor.calls().milestone, 1);

    assert!(controller.handle(keys.project.backlog));
    assert!(controller.handle(keys.project.milestones));
    assert_eq!(executor.calls().milestone, 1);
    assert_eq!(executor.calls().project_stats, 1);
}

#[test]
fn test_unknown_key_falls_through() {
    let executor = Rc::new(FakeExecutor::new());
    let mut controller = controller(&executor);
    assert!(!controller.handle(KeyBinding::char('z')));
    assert!(!controller.handle_key_event(&key('z')));
    let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
    assert!(!controller.handle_key_event(&ctrl_r));
}

#[test]
fn test_keys_go_to_the_active_screen() {
    let executor = Rc::new(FakeExecutor::new());
    let mut controller = controller(&executor);
    executor.reset_calls();

    assert!(controller.handle_key_event(&key('r')));
    assert_eq!(executor.calls().user_stories, 1);
    assert_eq!(executor.calls().milestone, 0);
}

#[test]
fn test_quit_key_quits_only_when_unhandled() {
    let executor = Rc::new(FakeExecutor::new());
    let mut app = App::new(controller(&executor), Keys::default());

    app.handle_key_event(key('n'));
    assert!(app.controller.has_focused_overlay());
    app.handle_key_event(key('q'));
    assert!(!app.should_quit);

    app.handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
    assert!(!app.controller.has_focused_overlay());
    app.handle_key_event(key('q'));
    assert!(app.should_quit);
}

#[test]
fn test_render_both_screens() {
    let executor = Rc::new(FakeExecutor::new());
    let mut controller = controller(&executor);
    controller.dispatch_completions();
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

    terminal.draw(|frame| ui::render(frame, &controller)).unwrap();
    let text = buffer_text(&terminal);
    assert!(text.contains("Demo project"));
    assert!(text.contains("Export to CSV"));

    controller.handle(Keys::default().project.milestones);
    controller.handle(Keys::default().milestone.help);
    controller.dispatch_completions();
    terminal.draw(|frame| ui::render(frame, &controller)).unwrap();
    let text = buffer_text(&terminal);
    assert!(text.contains("Sprint 2"));
    assert!(text.contains("Help - Milestone"));
}

#[test]
fn test_render_form_with_text_wider_than_the_field() {
    let executor = Rc::new(FakeExecutor::new());
    let mut controller = controller(&executor);
    controller.dispatch_completions();
    assert!(controller.handle(Keys::default().backlog.create_user_story));

    let long_subject = format!("{}END", "a".repeat(300));
    controller
        .backlog_mut()
        .unwrap()
        .view_mut()
        .user_story_form
        .get_mut()
        .unwrap()
        .subject_edit
        .set_edit_text(long_subject);

    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|frame| ui::render(frame, &controller)).unwrap();
    assert!(buffer_text(&terminal).contains("aaaEND"));
}
