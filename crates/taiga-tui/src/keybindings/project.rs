use super::{KeyAction, Keymap, ProjectKeys};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectAction {
    Backlog,
    Milestones,
}

impl KeyAction for ProjectAction {
    fn description(&self) -> &'static str {
        match self {
            Self::Backlog => "Show backlog",
            Self::Milestones => "Show milestones",
        }
    }
}

impl ProjectAction {
    pub fn keymap(keys: &ProjectKeys) -> Keymap<Self> {
        Keymap::new(vec![
            (keys.backlog, Self::Backlog),
            (keys.milestones, Self::Milestones),
        ])
    }
}
