pub mod backlog;
pub mod binding;
pub mod keymap;
pub mod keys;
pub mod project;
pub mod sprint;

pub use backlog::BacklogAction;
pub use binding::{KeyBinding, KeySet};
pub use keymap::Keymap;
pub use keys::{BacklogKeys, GlobalKeys, Keys, MilestoneKeys, OverlayKeys, ProjectKeys};
pub use project::ProjectAction;
pub use sprint::SprintAction;

/// An action a controller runs when its key is pressed.
pub trait KeyAction: Copy {
    fn description(&self) -> &'static str;
}

/// One line of a help popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeybindingEntry {
    pub key: String,
    pub description: String,
}

impl KeybindingEntry {
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeybindingContext {
    pub name: String,
    pub bindings: Vec<KeybindingEntry>,
}

impl KeybindingContext {
    pub fn new(name: impl Into<String>, bindings: Vec<KeybindingEntry>) -> Self {
        Self {
            name: name.into(),
            bindings,
        }
    }
}

pub trait KeybindingProvider {
    fn get_context(&self) -> KeybindingContext;
}
