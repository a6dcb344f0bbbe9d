use super::{KeyAction, KeyBinding, KeybindingContext, KeybindingEntry};

/// Binding to action table for one controller context.
#[derive(Debug, Clone)]
pub struct Keymap<A> {
    entries: Vec<(KeyBinding, A)>,
}

impl<A: KeyAction> Keymap<A> {
    pub fn new(entries: Vec<(KeyBinding, A)>) -> Self {
        Self { entries }
    }

    pub fn lookup(&self, key: KeyBinding) -> Option<A> {
        self.entries
            .iter()
            .find(|(binding, _)| *binding == key)
            .map(|(_, action)| *action)
    }

    pub fn entries(&self) -> &[(KeyBinding, A)] {
        &self.entries
    }

    pub fn context(&self, name: impl Into<String>) -> KeybindingContext {
        KeybindingContext::new(
            name,
            self.entries
                .iter()
                .map(|(key, action)| KeybindingEntry::new(key.to_string(), action.description()))
                .collect(),
        )
    }
}
