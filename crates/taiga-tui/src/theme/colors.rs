use ratatui::style::Color;

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const UNFOCUSED_BORDER: Color = Color::White;
pub const SELECTED_BG: Color = Color::Blue;

pub const CLOSED_TEXT: Color = Color::DarkGray;
pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const HIGHLIGHT_TEXT: Color = Color::Yellow;
pub const TASK_TEXT: Color = Color::Gray;

pub const PROGRESS_BAR: Color = Color::Green;
pub const INFO_COLOR: Color = Color::Green;
pub const ERROR_COLOR: Color = Color::Red;

pub const POPUP_BG: Color = Color::Black;
