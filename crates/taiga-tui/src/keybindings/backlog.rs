use super::{BacklogKeys, KeyAction, Keymap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BacklogAction {
    Help,
    Reload,
    CreateUserStory,
    EditUserStory,
    MoveUserStoryToMilestone,
    Next,
    Previous,
}

impl KeyAction for BacklogAction {
    fn description(&self) -> &'static str {
        match self {
            Self::Help => "Show help",
            Self::Reload => "Reload backlog",
            Self::CreateUserStory => "New user story",
            Self::EditUserStory => "Edit user story",
            Self::MoveUserStoryToMilestone => "Move user story to a milestone",
            Self::Next => "Navigate down",
            Self::Previous => "Navigate up",
        }
    }
}

impl BacklogAction {
    pub fn keymap(keys: &BacklogKeys) -> Keymap<Self> {
        let mut entries = vec![
            (keys.help, Self::Help),
            (keys.reload, Self::Reload),
            (keys.create_user_story, Self::CreateUserStory),
            (keys.edit_user_story, Self::EditUserStory),
            (keys.move_user_story_to_milestone, Self::MoveUserStoryToMilestone),
        ];
        entries.extend(keys.next.iter().map(|key| (key, Self::Next)));
        entries.extend(keys.previous.iter().map(|key| (key, Self::Previous)));
        Keymap::new(entries)
    }
}
