use serde::{Deserialize, Serialize};

use crate::milestone::MilestoneSummary;
use crate::points::deserialize_points;

pub type ProjectId = u64;
pub type StatusId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub id: StatusId,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub is_closed: bool,
    #[serde(default)]
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub list_of_milestones: Vec<MilestoneSummary>,
    #[serde(default)]
    pub us_statuses: Vec<Status>,
    #[serde(default)]
    pub task_statuses: Vec<Status>,
    #[serde(default)]
    pub default_us_status: Option<StatusId>,
    #[serde(default)]
    pub default_task_status: Option<StatusId>,
}

impl Project {
    /// The milestone a sprint screen opens on: the last open one, otherwise the last one.
    pub fn current_milestone(&self) -> Option<&MilestoneSummary> {
        self.list_of_milestones
            .iter()
            .rev()
            .find(|m| !m.closed)
            .or_else(|| self.list_of_milestones.last())
    }

    pub fn milestone(&self, id: u64) -> Option<&MilestoneSummary> {
        self.list_of_milestones.iter().find(|m| m.id == id)
    }

    pub fn us_status_name(&self, id: StatusId) -> &str {
        self.us_statuses
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.name.as_str())
            .unwrap_or("-")
    }

    pub fn task_status_name(&self, id: StatusId) -> &str {
        self.task_statuses
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.name.as_str())
            .unwrap_or("-")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectStats {
    #[serde(default)]
    pub total_milestones: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_points")]
    pub total_points: f64,
    #[serde(default, deserialize_with = "deserialize_points")]
    pub closed_points: f64,
    #[serde(default, deserialize_with = "deserialize_points")]
    pub defined_points: f64,
    #[serde(default, deserialize_with = "deserialize_points")]
    pub assigned_points: f64,
}

impl ProjectStats {
    pub fn completed_percentage(&self) -> u16 {
        if self.total_points <= 0.0 {
            return 0;
        }
        ((self.closed_points / self.total_points) * 100.0).round().clamp(0.0, 100.0) as u16
    }
}
