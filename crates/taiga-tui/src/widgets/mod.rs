pub mod button;
pub mod edit;
pub mod focus;
pub mod forms;
pub mod help;
pub mod notifier;
pub mod selector;
pub mod story_list;
pub mod taskboard;

pub use button::Button;
pub use edit::Edit;
pub use focus::FocusRing;
pub use forms::{TaskForm, UserStoryForm};
pub use help::HelpPopup;
pub use notifier::{Notice, NoticeLevel, Notifier};
pub use selector::MilestoneSelectorPopup;
pub use story_list::UserStoryList;
pub use taskboard::{Taskboard, TaskboardRow};

use crate::keybindings::OverlayKeys;
use crate::signals::{Signal, WidgetId};
use crossterm::event::KeyEvent;

pub trait Widget {
    fn id(&self) -> WidgetId;
}

/// What an overlay did with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayInput {
    /// The key activated a widget; the owner must emit this signal.
    Emit(WidgetId, Signal),
    /// The key was used by the overlay itself.
    Consumed,
    /// The overlay has no use for the key. It is still not passed on.
    Ignored,
}

/// Overlays are modal: while one has focus it sees every key first.
pub trait OverlayWidget: Widget {
    fn handle_key(&mut self, event: &KeyEvent, keys: &OverlayKeys) -> OverlayInput;
}
