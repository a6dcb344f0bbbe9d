use taiga_core::SelectionState;
use taiga_domain::{Task, UserStory};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaskboardRow<'a> {
    UserStory(&'a UserStory),
    Task(&'a Task),
}

/// Milestone taskboard: every user story followed by its tasks, then the
/// tasks that belong to no listed story.
#[derive(Debug, Clone, Default)]
pub struct Taskboard {
    user_stories: Vec<UserStory>,
    tasks: Vec<Task>,
    pub selection: SelectionState,
}

impl Taskboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_stories(&self) -> &[UserStory] {
        &self.user_stories
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn set_user_stories(&mut self, user_stories: Vec<UserStory>) {
        self.user_stories = user_stories;
        self.refresh_selection();
    }

    pub fn set_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.refresh_selection();
    }

    pub fn clear(&mut self) {
        self.user_stories.clear();
        self.tasks.clear();
        self.selection.clear();
    }

    fn refresh_selection(&mut self) {
        let len = self.len();
        self.selection.clamp(len);
        self.selection.select_first_if_empty(len);
    }

    fn is_orphan(&self, task: &Task) -> bool {
        match task.user_story {
            Some(id) => !self.user_stories.iter().any(|us| us.id == id),
            None => true,
        }
    }

    pub fn rows(&self) -> Vec<TaskboardRow<'_>> {
        let mut rows = Vec::with_capacity(self.len());
        for us in &self.user_stories {
            rows.push(TaskboardRow::UserStory(us));
            rows.extend(
                self.tasks
                    .iter()
                    .filter(|t| t.user_story == Some(us.id))
                    .map(TaskboardRow::Task),
            );
        }
        rows.extend(
            self.tasks
                .iter()
                .filter(|t| self.is_orphan(t))
                .map(TaskboardRow::Task),
        );
        rows
    }

    pub fn len(&self) -> usize {
        self.user_stories.len() + self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn focused_row(&self) -> Option<TaskboardRow<'_>> {
        let idx = self.selection.get()?;
        self.rows().into_iter().nth(idx)
    }

    pub fn next(&mut self) {
        self.selection.next(self.len());
    }

    pub fn prev(&mut self) {
        self.selection.prev(self.len());
    }

    pub fn replace_user_story(&mut self, user_story: UserStory) -> bool {
        match self.user_stories.iter_mut().find(|us| us.id == user_story.id) {
            Some(slot) => {
                *slot = user_story;
                true
            }
            None => false,
        }
    }

    pub fn replace_task(&mut self, task: Task) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => {
                *slot = task;
                true
            }
            None => false,
        }
    }
}
