use async_trait::async_trait;
use taiga_core::TaigaResult;
use taiga_domain::{
    AuthSession, Credentials, Milestone, MilestoneId, MilestoneStats, NewUserStory, Project,
    ProjectId, ProjectStats, Task, TaskFilter, TaskId, TaskPatch, UserStory, UserStoryFilter,
    UserStoryId, UserStoryPatch,
};

/// Transport-level access to the backend. One method per REST call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaigaApi: Send + Sync {
    async fn login(&self, credentials: Credentials) -> TaigaResult<AuthSession>;

    async fn project(&self, id: ProjectId) -> TaigaResult<Project>;
    async fn project_stats(&self, id: ProjectId) -> TaigaResult<ProjectStats>;

    async fn milestone(&self, id: MilestoneId) -> TaigaResult<Milestone>;
    async fn milestone_stats(&self, id: MilestoneId) -> TaigaResult<MilestoneStats>;

    async fn user_stories(&self, filter: UserStoryFilter) -> TaigaResult<Vec<UserStory>>;
    async fn create_user_story(&self, data: NewUserStory) -> TaigaResult<UserStory>;
    async fn update_user_story(
        &self,
        id: UserStoryId,
        patch: UserStoryPatch,
    ) -> TaigaResult<UserStory>;

    async fn tasks(&self, filter: TaskFilter) -> TaigaResult<Vec<Task>>;
    async fn update_task(&self, id: TaskId, patch: TaskPatch) -> TaigaResult<Task>;
}
