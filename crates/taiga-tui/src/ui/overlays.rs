use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::popup::render_popup_with_block;
use crate::theme::{
    bold_highlight, error_text, focused_border, highlight_text, label_text, normal_text,
    selected_item, unfocused_border,
};
use crate::views::{BacklogFocus, BacklogView, SprintFocus, SprintView};
use crate::widgets::{
    Button, Edit, FocusRing, HelpPopup, MilestoneSelectorPopup, TaskForm, UserStoryForm, Widget,
};

pub fn render_backlog_overlays(frame: &mut Frame, view: &BacklogView) {
    match view.focus {
        BacklogFocus::UserStories => {}
        BacklogFocus::HelpPopup => {
            if let Some(help) = view.help_popup.get() {
                render_help(frame, help);
            }
        }
        BacklogFocus::UserStoryForm => {
            if let Some(form) = view.user_story_form.get() {
                render_user_story_form(frame, form);
            }
        }
        BacklogFocus::MilestoneSelector => {
            if let Some(popup) = view.milestone_selector_popup.get() {
                render_milestone_selector(frame, popup);
            }
        }
    }
}

pub fn render_sprint_overlays(frame: &mut Frame, view: &SprintView) {
    match view.focus {
        SprintFocus::Taskboard => {}
        SprintFocus::HelpPopup => {
            if let Some(help) = view.help_popup.get() {
                render_help(frame, help);
            }
        }
        SprintFocus::UserStoryForm => {
            if let Some(form) = view.user_story_form.get() {
                render_user_story_form(frame, form);
            }
        }
        SprintFocus::TaskForm => {
            if let Some(form) = view.task_form.get() {
                render_task_form(frame, form);
            }
        }
        SprintFocus::MilestoneSelector => {
            if let Some(popup) = view.milestone_selector_popup.get() {
                render_milestone_selector(frame, popup);
            }
        }
    }
}

fn render_help(frame: &mut Frame, help: &HelpPopup) {
    let inner = render_popup_with_block(frame, &help.title, 50, 60);

    let mut lines: Vec<Line> = help
        .context
        .bindings
        .iter()
        .map(|binding| {
            Line::from(vec![
                Span::styled(format!("{:>10}  ", binding.key), bold_highlight()),
                Span::styled(binding.description.clone(), normal_text()),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", help.close_button.label),
        selected_item(true),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_edit(frame: &mut Frame, area: Rect, edit: &Edit, focus: &FocusRing) {
    let focused = focus.is_focused(edit.id());
    let border = if focused {
        focused_border()
    } else {
        unfocused_border()
    };
    let cursor = u16::try_from(edit.cursor_column()).unwrap_or(u16::MAX);
    let offset = horizontal_scroll(cursor, area.width.saturating_sub(2));
    let input = Paragraph::new(edit.edit_text().to_string())
        .style(normal_text())
        .scroll((0, offset))
        .block(
            Block::default()
                .title(edit.caption.clone())
                .borders(Borders::ALL)
                .border_style(border),
        );
    frame.render_widget(input, area);

    if focused {
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(cursor - offset)
            .min(area.right().saturating_sub(2));
        frame.set_cursor_position((cursor_x, area.y.saturating_add(1)));
    }
}

/// Columns to scroll a single-line field so the cursor stays inside `width`.
fn horizontal_scroll(cursor: u16, width: u16) -> u16 {
    cursor.saturating_sub(width.saturating_sub(1))
}

fn button_line(buttons: &[&Button], focus: &FocusRing) -> Line<'static> {
    let mut spans = Vec::new();
    for button in buttons {
        let style = if focus.is_focused(button.id()) {
            selected_item(true)
        } else {
            highlight_text()
        };
        spans.push(Span::styled(format!("[ {} ]", button.label), style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

fn status_line(error: Option<&str>, saving: bool) -> Paragraph<'static> {
    match error {
        Some(error) => Paragraph::new(error.to_string())
            .style(error_text())
            .wrap(Wrap { trim: true }),
        None if saving => Paragraph::new("Saving...").style(label_text()),
        None => Paragraph::new(""),
    }
}

fn render_user_story_form(frame: &mut Frame, form: &UserStoryForm) {
    let inner = render_popup_with_block(frame, &form.title(), 70, 50);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    render_edit(frame, chunks[0], &form.subject_edit, &form.focus);
    render_edit(frame, chunks[1], &form.description_edit, &form.focus);
    frame.render_widget(
        Paragraph::new(button_line(
            &[&form.save_button, &form.cancel_button],
            &form.focus,
        )),
        chunks[3],
    );
    frame.render_widget(status_line(form.error.as_deref(), form.saving), chunks[4]);
}

fn render_task_form(frame: &mut Frame, form: &TaskForm) {
    let inner = render_popup_with_block(frame, &form.title(), 70, 40);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    render_edit(frame, chunks[0], &form.subject_edit, &form.focus);
    frame.render_widget(
        Paragraph::new(button_line(
            &[&form.save_button, &form.cancel_button],
            &form.focus,
        )),
        chunks[2],
    );
    frame.render_widget(status_line(form.error.as_deref(), form.saving), chunks[3]);
}

fn render_milestone_selector(frame: &mut Frame, popup: &MilestoneSelectorPopup) {
    let inner = render_popup_with_block(frame, &popup.title(), 50, 50);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let items: Vec<ListItem> = popup
        .options
        .iter()
        .zip(&popup.milestones)
        .map(|(option, milestone)| {
            let marker = if popup.current == Some(milestone.id) {
                "* "
            } else {
                "  "
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, bold_highlight()),
                Span::styled(option.label.clone(), normal_text()),
            ]))
        })
        .collect();
    let list = List::new(items).highlight_style(selected_item(true));
    let mut state = ListState::default().with_selected(popup.selection.get());
    frame.render_stateful_widget(list, chunks[0], &mut state);

    let hint = Line::from(vec![
        Span::styled(format!("[ {} ]", popup.cancel_button.label), highlight_text()),
        Span::styled("  ESC to cancel", label_text()),
    ]);
    frame.render_widget(Paragraph::new(hint), chunks[1]);
}
