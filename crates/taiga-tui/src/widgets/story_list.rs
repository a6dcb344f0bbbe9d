use taiga_core::SelectionState;
use taiga_domain::{UserStory, UserStoryId};

/// The backlog's list of user stories with a cursor.
#[derive(Debug, Clone, Default)]
pub struct UserStoryList {
    items: Vec<UserStory>,
    pub selection: SelectionState,
}

impl UserStoryList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[UserStory] {
        &self.items
    }

    pub fn set_items(&mut self, items: Vec<UserStory>) {
        self.items = items;
        self.selection.clamp(self.items.len());
        self.selection.select_first_if_empty(self.items.len());
    }

    pub fn focused(&self) -> Option<&UserStory> {
        self.selection.get().and_then(|idx| self.items.get(idx))
    }

    pub fn next(&mut self) {
        self.selection.next(self.items.len());
    }

    pub fn prev(&mut self) {
        self.selection.prev(self.items.len());
    }

    /// Swaps in the updated copy of a story. Returns `false` if it is not listed.
    pub fn replace(&mut self, user_story: UserStory) -> bool {
        match self.items.iter_mut().find(|us| us.id == user_story.id) {
            Some(slot) => {
                *slot = user_story;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: UserStoryId) -> Option<UserStory> {
        let idx = self.items.iter().position(|us| us.id == id)?;
        let removed = self.items.remove(idx);
        self.selection.clamp(self.items.len());
        Some(removed)
    }

    pub fn push_and_select(&mut self, user_story: UserStory) {
        self.items.push(user_story);
        self.selection.set(Some(self.items.len() - 1));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(id: u64) -> UserStory {
        UserStory {
            id,
            reference: id + 100,
            subject: format!("Story {}", id),
            description: String::new(),
            status: 1,
            milestone: None,
            project: 1,
            total_points: None,
            is_closed: false,
            version: 1,
        }
    }

    #[test]
    fn test_set_items_selects_first() {
        let mut list = UserStoryList::new();
        assert!(list.focused().is_none());
        list.set_items(vec![story(1), story(2)]);
        assert_eq!(list.focused().map(|us| us.id), Some(1));
        list.next();
        list.next();
        assert_eq!(list.focused().map(|us| us.id), Some(2));
    }

    #[test]
    fn test_remove_last_moves_selection_up() {
        let mut list = UserStoryList::new();
        list.set_items(vec![story(1), story(2)]);
        list.next();
        assert_eq!(list.remove(2).map(|us| us.id), Some(2));
        assert_eq!(list.focused().map(|us| us.id), Some(1));
        assert!(list.remove(2).is_none());
    }

    #[test]
    fn test_replace_and_push() {
        let mut list = UserStoryList::new();
        list.set_items(vec![story(1)]);
        let mut renamed = story(1);
        renamed.subject = "Renamed".to_string();
        assert!(list.replace(renamed));
        assert!(!list.replace(story(9)));
        list.push_and_select(story(3));
        assert_eq!(list.focused().map(|us| us.id), Some(3));
        assert_eq!(list.items()[0].subject, "Renamed");
    }
}
