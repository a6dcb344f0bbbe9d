use super::{KeyAction, Keymap, MilestoneKeys};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SprintAction {
    Help,
    Reload,
    ChangeToMilestone,
    EditUserStoryOrTask,
    Next,
    Previous,
}

impl KeyAction for SprintAction {
    fn description(&self) -> &'static str {
        match self {
            Self::Help => "Show help",
            Self::Reload => "Reload milestone",
            Self::ChangeToMilestone => "Change to another milestone",
            Self::EditUserStoryOrTask => "Edit user story or task",
            Self::Next => "Navigate down",
            Self::Previous => "Navigate up",
        }
    }
}

impl SprintAction {
    pub fn keymap(keys: &MilestoneKeys) -> Keymap<Self> {
        let mut entries = vec![
            (keys.help, Self::Help),
            (keys.reload, Self::Reload),
            (keys.change_to_milestone, Self::ChangeToMilestone),
            (keys.edit_user_story_or_task, Self::EditUserStoryOrTask),
        ];
        entries.extend(keys.next.iter().map(|key| (key, Self::Next)));
        entries.extend(keys.previous.iter().map(|key| (key, Self::Previous)));
        Keymap::new(entries)
    }
}
