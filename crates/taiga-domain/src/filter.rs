use crate::milestone::MilestoneId;
use crate::project::ProjectId;
use crate::user_story::UserStoryId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MilestoneFilter {
    #[default]
    Any,
    /// Stories still in the backlog.
    Unassigned,
    Is(MilestoneId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStoryFilter {
    pub project: ProjectId,
    pub milestone: MilestoneFilter,
}

impl UserStoryFilter {
    pub fn backlog(project: ProjectId) -> Self {
        Self {
            project,
            milestone: MilestoneFilter::Unassigned,
        }
    }

    pub fn milestone(project: ProjectId, milestone: MilestoneId) -> Self {
        Self {
            project,
            milestone: MilestoneFilter::Is(milestone),
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("project", self.project.to_string())];
        match self.milestone {
            MilestoneFilter::Any => {}
            MilestoneFilter::Unassigned => pairs.push(("milestone__isnull", "true".to_string())),
            MilestoneFilter::Is(id) => pairs.push(("milestone", id.to_string())),
        }
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFilter {
    pub project: ProjectId,
    pub milestone: Option<MilestoneId>,
    pub user_story: Option<UserStoryId>,
}

impl TaskFilter {
    pub fn milestone(project: ProjectId, milestone: MilestoneId) -> Self {
        Self {
            project,
            milestone: Some(milestone),
            user_story: None,
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("project", self.project.to_string())];
        if let Some(milestone) = self.milestone {
            pairs.push(("milestone", milestone.to_string()));
        }
        if let Some(user_story) = self.user_story {
            pairs.push(("user_story", user_story.to_string()));
        }
        pairs
    }
}
