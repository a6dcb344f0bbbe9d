use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::theme::{
    bold_highlight, closed_text, focused_border, label_text, normal_text, progress_bar,
    selected_item, task_text, unfocused_border,
};
use crate::views::SprintView;
use crate::widgets::TaskboardRow;

pub fn render(frame: &mut Frame, area: Rect, view: &SprintView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    render_milestone_header(frame, chunks[0], view);
    render_stats(frame, chunks[1], view);
    render_taskboard(frame, chunks[2], view);
}

fn render_milestone_header(frame: &mut Frame, area: Rect, view: &SprintView) {
    let line = match &view.milestone {
        Some(milestone) => {
            let mut spans = vec![
                Span::styled(milestone.name.clone(), bold_highlight()),
                Span::raw("  "),
                Span::styled(milestone.date_range(), label_text()),
            ];
            if let Some(days) = milestone.days_left(Local::now().date_naive()) {
                spans.push(Span::styled(format!("  {} days left", days), normal_text()));
            }
            if milestone.closed {
                spans.push(Span::styled("  (closed)", closed_text()));
            }
            Line::from(spans)
        }
        None => Line::from(Span::styled("Loading milestone...", label_text())),
    };
    let header = Paragraph::new(line).block(
        Block::default()
            .title("Milestone")
            .borders(Borders::ALL)
            .border_style(unfocused_border()),
    );
    frame.render_widget(header, area);
}

fn render_stats(frame: &mut Frame, area: Rect, view: &SprintView) {
    let block = Block::default()
        .title("Progress")
        .borders(Borders::ALL)
        .border_style(unfocused_border());

    match &view.stats {
        Some(stats) => {
            let label = format!(
                "{:.1}/{:.1} pts  {}/{} stories  {}/{} tasks  {} iocaine",
                stats.completed_points,
                stats.total_points,
                stats.completed_userstories,
                stats.total_userstories,
                stats.completed_tasks,
                stats.total_tasks,
                stats.iocaine_doses,
            );
            let gauge = Gauge::default()
                .block(block)
                .gauge_style(progress_bar())
                .percent(stats.completed_percentage())
                .label(label);
            frame.render_widget(gauge, area);
        }
        None => {
            let loading = Paragraph::new("Loading...").style(label_text()).block(block);
            frame.render_widget(loading, area);
        }
    }
}

fn render_taskboard(frame: &mut Frame, area: Rect, view: &SprintView) {
    let focused = !view.has_focused_overlay();
    let items: Vec<ListItem> = view
        .taskboard
        .rows()
        .into_iter()
        .map(|row| match row {
            TaskboardRow::UserStory(us) => {
                let style = if us.is_closed {
                    closed_text()
                } else {
                    normal_text()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("#{:<5} ", us.reference), label_text()),
                    Span::styled(us.subject.clone(), style),
                    Span::styled(
                        format!("  [{}]", view.project.us_status_name(us.status)),
                        label_text(),
                    ),
                ]))
            }
            TaskboardRow::Task(task) => {
                let style = if task.is_closed {
                    closed_text()
                } else {
                    task_text()
                };
                let prefix = if task.user_story.is_some() { "  └ " } else { "  · " };
                ListItem::new(Line::from(vec![
                    Span::styled(prefix, label_text()),
                    Span::styled(format!("#{:<5} ", task.reference), label_text()),
                    Span::styled(task.subject.clone(), style),
                    Span::styled(
                        format!("  [{}]", view.project.task_status_name(task.status)),
                        label_text(),
                    ),
                ]))
            }
        })
        .collect();

    let border = if focused {
        focused_border()
    } else {
        unfocused_border()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .title("Taskboard")
                .borders(Borders::ALL)
                .border_style(border),
        )
        .highlight_style(selected_item(focused));

    let mut state = ListState::default().with_selected(view.taskboard.selection.get());
    frame.render_stateful_widget(list, area, &mut state);
}
