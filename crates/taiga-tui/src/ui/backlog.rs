use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::theme::{
    closed_text, focused_border, label_text, normal_text, progress_bar, selected_item,
    unfocused_border,
};
use crate::views::BacklogView;

pub fn render(frame: &mut Frame, area: Rect, view: &BacklogView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_stats(frame, chunks[0], view);
    render_user_stories(frame, chunks[1], view);
}

fn render_stats(frame: &mut Frame, area: Rect, view: &BacklogView) {
    let block = Block::default()
        .title("Progress")
        .borders(Borders::ALL)
        .border_style(unfocused_border());

    match &view.stats {
        Some(stats) => {
            let label = format!(
                "{:.1} / {:.1} points closed",
                stats.closed_points, stats.total_points
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

fn render_user_stories(frame: &mut Frame, area: Rect, view: &BacklogView) {
    let focused = !view.has_focused_overlay();
    let items: Vec<ListItem> = view
        .user_stories
        .items()
        .iter()
        .map(|us| {
            let subject_style = if us.is_closed {
                closed_text()
            } else {
                normal_text()
            };
            let points = us
                .total_points
                .map(|p| format!("{:>5.1}", p))
                .unwrap_or_else(|| "    -".to_string());
            ListItem::new(Line::from(vec![
                Span::styled(format!("#{:<5} ", us.reference), label_text()),
                Span::styled(us.subject.clone(), subject_style),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", view.project.us_status_name(us.status)),
                    label_text(),
                ),
                Span::styled(format!(" {}", points), label_text()),
            ]))
        })
        .collect();

    let title = format!("User stories ({})", view.user_stories.len());
    let border = if focused {
        focused_border()
    } else {
        unfocused_border()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border),
        )
        .highlight_style(selected_item(focused));

    let mut state = ListState::default().with_selected(view.user_stories.selection.get());
    frame.render_stateful_widget(list, area, &mut state);
}
