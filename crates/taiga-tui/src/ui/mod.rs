mod backlog;
mod overlays;
pub mod popup;
mod sprint;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::controllers::ProjectDetailController;
use crate::theme::{bold_highlight, label_text, notice_style, unfocused_border};
use crate::views::ProjectMode;
use crate::widgets::Notifier;

pub fn render(frame: &mut Frame, controller: &ProjectDetailController) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], controller);

    match controller.mode() {
        ProjectMode::Backlog => {
            if let Some(backlog) = controller.backlog() {
                backlog::render(frame, chunks[1], backlog.view());
                overlays::render_backlog_overlays(frame, backlog.view());
            }
        }
        ProjectMode::Milestones => {
            if let Some(sprint) = controller.sprint() {
                sprint::render(frame, chunks[1], sprint.view());
                overlays::render_sprint_overlays(frame, sprint.view());
            }
        }
    }

    render_notifier(frame, chunks[2], controller.notifier());
}

fn render_header(frame: &mut Frame, area: Rect, controller: &ProjectDetailController) {
    let keys = &controller.keys().project;
    let titles = vec![
        format!("{} [{}]", ProjectMode::Backlog.title(), keys.backlog),
        format!("{} [{}]", ProjectMode::Milestones.title(), keys.milestones),
    ];
    let selected = match controller.mode() {
        ProjectMode::Backlog => 0,
        ProjectMode::Milestones => 1,
    };
    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(bold_highlight())
        .block(
            Block::default()
                .title(controller.view().project.name.clone())
                .borders(Borders::ALL)
                .border_style(unfocused_border()),
        );
    frame.render_widget(tabs, area);
}

fn render_notifier(frame: &mut Frame, area: Rect, notifier: Option<&Notifier>) {
    let line = match notifier.and_then(|n| n.current()) {
        Some(notice) => Line::from(vec![
            Span::styled(notice.timestamp.format("%H:%M:%S ").to_string(), label_text()),
            Span::styled(notice.message.clone(), notice_style(notice.level)),
        ]),
        None => Line::from(Span::styled("", label_text())),
    };
    frame.render_widget(Paragraph::new(line), area);
}
