use serde::{Deserialize, Serialize};
use taiga_core::TaigaResult;

use crate::milestone::MilestoneId;
use crate::project::{ProjectId, StatusId};
use crate::user_story::{validate_subject, UserStoryId};

pub type TaskId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    #[serde(rename = "ref")]
    pub reference: u64,
    pub subject: String,
    #[serde(default)]
    pub user_story: Option<UserStoryId>,
    pub status: StatusId,
    #[serde(default)]
    pub milestone: Option<MilestoneId>,
    pub project: ProjectId,
    #[serde(default)]
    pub is_closed: bool,
    #[serde(default)]
    pub version: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
}

impl TaskPatch {
    pub fn validate(&self) -> TaigaResult<()> {
        match &self.subject {
            Some(subject) => validate_subject(subject),
            None => Ok(()),
        }
    }

    pub fn based_on(mut self, task: &Task) -> Self {
        self.version = Some(task.version);
        self
    }
}
