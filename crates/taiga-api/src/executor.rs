use std::future::Future;
use std::sync::Arc;
use taiga_core::TaigaResult;
use taiga_domain::{
    Milestone, MilestoneId, MilestoneStats, NewUserStory, Project, ProjectId, ProjectStats, Task,
    TaskFilter, TaskPatch, UserStory, UserStoryFilter, UserStoryPatch,
};
use tokio::runtime::Handle;

use crate::api::TaigaApi;
use crate::pending::Pending;

/// Request gateway used by controllers. Every call returns immediately with a
/// handle that resolves once the backend answers.
pub trait Executor {
    fn project(&self, id: ProjectId) -> Pending<Project>;
    fn project_stats(&self, id: ProjectId) -> Pending<ProjectStats>;

    fn milestone(&self, id: MilestoneId) -> Pending<Milestone>;
    fn milestone_stats(&self, id: MilestoneId) -> Pending<MilestoneStats>;

    fn user_stories(&self, filter: UserStoryFilter) -> Pending<Vec<UserStory>>;
    fn create_user_story(&self, data: NewUserStory) -> Pending<UserStory>;
    fn update_user_story(&self, user_story: &UserStory, patch: UserStoryPatch)
        -> Pending<UserStory>;

    fn tasks(&self, filter: TaskFilter) -> Pending<Vec<Task>>;
    fn update_task(&self, task: &Task, patch: TaskPatch) -> Pending<Task>;
}

/// Runs each request as a task on the tokio runtime.
#[derive(Clone)]
pub struct ApiExecutor {
    api: Arc<dyn TaigaApi>,
    runtime: Handle,
}

impl ApiExecutor {
    pub fn new(api: Arc<dyn TaigaApi>, runtime: Handle) -> Self {
        Self { api, runtime }
    }

    fn spawn<T, F>(&self, request: F) -> Pending<T>
    where
        T: Send + 'static,
        F: Future<Output = TaigaResult<T>> + Send + 'static,
    {
        let (resolver, pending) = Pending::channel();
        self.runtime.spawn(async move {
            if !resolver.resolve(request.await) {
                tracing::debug!("Request finished after its handle was dropped");
            }
        });
        pending
    }
}

impl Executor for ApiExecutor {
    fn project(&self, id: ProjectId) -> Pending<Project> {
        tracing::info!("Fetching project {}", id);
        let api = Arc::clone(&self.api);
        self.spawn(async move { api.project(id).await })
    }

    fn project_stats(&self, id: ProjectId) -> Pending<ProjectStats> {
        tracing::info!("Fetching stats for project {}", id);
        let api = Arc::clone(&self.api);
        self.spawn(async move { api.project_stats(id).await })
    }

    fn milestone(&self, id: MilestoneId) -> Pending<Milestone> {
        tracing::info!("Fetching milestone {}", id);
        let api = Arc::clone(&self.api);
        self.spawn(async move { api.milestone(id).await })
    }

    fn milestone_stats(&self, id: MilestoneId) -> Pending<MilestoneStats> {
        tracing::info!("Fetching stats for milestone {}", id);
        let api = Arc::clone(&self.api);
        self.spawn(async move { api.milestone_stats(id).await })
    }

    fn user_stories(&self, filter: UserStoryFilter) -> Pending<Vec<UserStory>> {
        tracing::info!("Fetching user stories ({:?})", filter);
        let api = Arc::clone(&self.api);
        self.spawn(async move { api.user_stories(filter).await })
    }

    fn create_user_story(&self, data: NewUserStory) -> Pending<UserStory> {
        tracing::info!("Creating user story '{}'", data.subject);
        let api = Arc::clone(&self.api);
        self.spawn(async move { api.create_user_story(data).await })
    }

    fn update_user_story(
        &self,
        user_story: &UserStory,
        patch: UserStoryPatch,
    ) -> Pending<UserStory> {
        tracing::info!("Updating user story #{}", user_story.reference);
        let api = Arc::clone(&self.api);
        let id = user_story.id;
        let patch = patch.based_on(user_story);
        self.spawn(async move { api.update_user_story(id, patch).await })
    }

    fn tasks(&self, filter: TaskFilter) -> Pending<Vec<Task>> {
        tracing::info!("Fetching tasks ({:?})", filter);
        let api = Arc::clone(&self.api);
        self.spawn(async move { api.tasks(filter).await })
    }

    fn update_task(&self, task: &Task, patch: TaskPatch) -> Pending<Task> {
        tracing::info!("Updating task #{}", task.reference);
        let api = Arc::clone(&self.api);
        let id = task.id;
        let patch = patch.based_on(task);
        self.spawn(async move { api.update_task(id, patch).await })
    }
}
