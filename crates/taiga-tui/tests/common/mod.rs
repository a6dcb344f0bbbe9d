#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use taiga_api::{Executor, Pending, Resolver};
use taiga_core::TaigaError;
use taiga_domain::{
    Milestone, MilestoneFilter, MilestoneId, MilestoneStats, MilestoneSummary, NewUserStory,
    Project, ProjectId, ProjectStats, Status, Task, TaskFilter, TaskPatch, UserStory,
    UserStoryFilter, UserStoryPatch,
};

pub fn project() -> Project {
    let summary = |id: MilestoneId, closed: bool| MilestoneSummary {
        id,
        name: format!("Sprint {}", id),
        closed,
        estimated_start: None,
        estimated_finish: None,
    };
    let status = |id, name: &str, is_closed| Status {
        id,
        name: name.to_string(),
        color: None,
        is_closed,
        order: id as i64,
    };
    Project {
        id: 1,
        name: "Demo project".to_string(),
        slug: "demo-project".to_string(),
        description: String::new(),
        list_of_milestones: vec![summary(1, true), summary(2, false), summary(3, true)],
        us_statuses: vec![status(1, "New", false), status(2, "Done", true)],
        task_statuses: vec![status(1, "New", false), status(2, "Closed", true)],
        default_us_status: Some(1),
        default_task_status: Some(1),
    }
}

pub fn milestone(id: MilestoneId) -> Milestone {
    Milestone {
        id,
        name: format!("Sprint {}", id),
        slug: format!("sprint-{}", id),
        project: 1,
        estimated_start: None,
        estimated_finish: None,
        closed: false,
        total_points: 20.0,
        closed_points: 5.0,
    }
}

pub fn milestone_stats(id: MilestoneId) -> MilestoneStats {
    MilestoneStats {
        name: format!("Sprint {}", id),
        total_points: 20.0,
        completed_points: 5.0,
        total_userstories: 2,
        completed_userstories: 0,
        total_tasks: 3,
        completed_tasks: 1,
        iocaine_doses: 0,
    }
}

pub fn user_story(id: u64, subject: &str, milestone: Option<MilestoneId>) -> UserStory {
    UserStory {
        id,
        reference: id + 10,
        subject: subject.to_string(),
        description: String::new(),
        status: 1,
        milestone,
        project: 1,
        total_points: Some(3.0),
        is_closed: false,
        version: 1,
    }
}

pub fn milestone_user_stories(milestone: MilestoneId) -> Vec<UserStory> {
    vec![
        user_story(1, "Login page", Some(milestone)),
        user_story(2, "Password reset", Some(milestone)),
    ]
}

pub fn backlog_user_stories() -> Vec<UserStory> {
    vec![
        user_story(5, "Export to CSV", None),
        user_story(6, "Dark theme", None),
    ]
}

pub fn task(id: u64, user_story: Option<u64>, milestone: MilestoneId) -> Task {
    Task {
        id,
        reference: id + 30,
        subject: format!("Task {}", id),
        user_story,
        status: 1,
        milestone: Some(milestone),
        project: 1,
        is_closed: false,
        version: 1,
    }
}

pub fn milestone_tasks(milestone: MilestoneId) -> Vec<Task> {
    vec![
        task(1, Some(1), milestone),
        task(2, Some(1), milestone),
        task(3, Some(2), milestone),
    ]
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Calls {
    pub project: usize,
    pub project_stats: usize,
    pub milestone: usize,
    pub milestone_stats: usize,
    pub user_stories: usize,
    pub create_user_story: usize,
    pub update_user_story: usize,
    pub tasks: usize,
    pub update_task: usize,
}

/// Executor that records calls and answers from the factories above.
#[derive(Default)]
pub struct FakeExecutor {
    pub calls: RefCell<Calls>,
    pub user_story_filters: RefCell<Vec<UserStoryFilter>>,
    pub last_user_story_update: RefCell<Option<(UserStory, UserStoryPatch)>>,
    pub last_task_update: RefCell<Option<(Task, TaskPatch)>>,
    pub last_created: RefCell<Option<NewUserStory>>,
    pub fail_writes: Cell<bool>,
    pub defer_milestones: Cell<bool>,
    pub defer_writes: Cell<bool>,
    pub milestone_resolvers: RefCell<Vec<(MilestoneId, Resolver<Milestone>)>>,
    pub user_story_resolvers: RefCell<Vec<(UserStory, Resolver<UserStory>)>>,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Calls {
        self.calls.borrow().clone()
    }

    pub fn reset_calls(&self) {
        *self.calls.borrow_mut() = Calls::default();
    }

    fn write_error() -> TaigaError {
        TaigaError::Api {
            status: 500,
            message: "Internal server error".to_string(),
        }
    }

    fn write<T>(&self, result: T) -> Pending<T> {
        if self.fail_writes.get() {
            Pending::err(Self::write_error())
        } else {
            Pending::ok(result)
        }
    }
}

pub fn apply_user_story_patch(user_story: &UserStory, patch: &UserStoryPatch) -> UserStory {
    let mut updated = user_story.clone();
    if let Some(subject) = &patch.subject {
        updated.subject = subject.clone();
    }
    if let Some(description) = &patch.description {
        updated.description = description.clone();
    }
    if let Some(milestone) = patch.milestone {
        updated.milestone = milestone;
    }
    updated.version += 1;
    updated
}

impl Executor for FakeExecutor {
    fn project(&self, _id: ProjectId) -> Pending<Project> {
        self.calls.borrow_mut().project += 1;
        Pending::ok(project())
    }

    fn project_stats(&self, _id: ProjectId) -> Pending<ProjectStats> {
        self.calls.borrow_mut().project_stats += 1;
        Pending::ok(ProjectStats {
            total_milestones: Some(3),
            total_points: 40.0,
            closed_points: 10.0,
            defined_points: 40.0,
            assigned_points: 30.0,
        })
    }

    fn milestone(&self, id: MilestoneId) -> Pending<Milestone> {
        self.calls.borrow_mut().milestone += 1;
        if self.defer_milestones.get() {
            let (resolver, pending) = Pending::channel();
            self.milestone_resolvers.borrow_mut().push((id, resolver));
            pending
        } else {
            Pending::ok(milestone(id))
        }
    }

    fn milestone_stats(&self, id: MilestoneId) -> Pending<MilestoneStats> {
        self.calls.borrow_mut().milestone_stats += 1;
        Pending::ok(milestone_stats(id))
    }

    fn user_stories(&self, filter: UserStoryFilter) -> Pending<Vec<UserStory>> {
        self.calls.borrow_mut().user_stories += 1;
        let stories = match filter.milestone {
            MilestoneFilter::Is(id) => milestone_user_stories(id),
            MilestoneFilter::Unassigned | MilestoneFilter::Any => backlog_user_stories(),
        };
        self.user_story_filters.borrow_mut().push(filter);
        Pending::ok(stories)
    }

    fn create_user_story(&self, data: NewUserStory) -> Pending<UserStory> {
        self.calls.borrow_mut().create_user_story += 1;
        let mut created = user_story(99, &data.subject, data.milestone);
        created.description = data.description.clone();
        *self.last_created.borrow_mut() = Some(data);
        self.write(created)
    }

    fn update_user_story(&self, user_story: &UserStory, patch: UserStoryPatch) -> Pending<UserStory> {
        self.calls.borrow_mut().update_user_story += 1;
        let updated = apply_user_story_patch(user_story, &patch);
        *self.last_user_story_update.borrow_mut() = Some((user_story.clone(), patch));
        if self.defer_writes.get() {
            let (resolver, pending) = Pending::channel();
            self.user_story_resolvers
                .borrow_mut()
                .push((updated, resolver));
            pending
        } else {
            self.write(updated)
        }
    }

    fn tasks(&self, filter: TaskFilter) -> Pending<Vec<Task>> {
        self.calls.borrow_mut().tasks += 1;
        Pending::ok(milestone_tasks(filter.milestone.unwrap_or_default()))
    }

    fn update_task(&self, task: &Task, patch: TaskPatch) -> Pending<Task> {
        self.calls.borrow_mut().update_task += 1;
        let mut updated = task.clone();
        if let Some(subject) = &patch.subject {
            updated.subject = subject.clone();
        }
        updated.version += 1;
        *self.last_task_update.borrow_mut() = Some((task.clone(), patch));
        self.write(updated)
    }
}
