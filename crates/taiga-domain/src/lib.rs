pub mod auth;
pub mod filter;
pub mod milestone;
pub mod points;
pub mod project;
pub mod task;
pub mod user_story;

pub use auth::{AuthSession, Credentials};
pub use filter::{MilestoneFilter, TaskFilter, UserStoryFilter};
pub use milestone::{Milestone, MilestoneId, MilestoneStats, MilestoneSummary};
pub use project::{Project, ProjectId, ProjectStats, Status, StatusId};
pub use task::{Task, TaskId, TaskPatch};
pub use user_story::{NewUserStory, UserStory, UserStoryId, UserStoryPatch};
