use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::points::deserialize_points;
use crate::project::ProjectId;

pub type MilestoneId = u64;

/// Milestone entry embedded in a project record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneSummary {
    pub id: MilestoneId,
    pub name: String,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub estimated_start: Option<NaiveDate>,
    #[serde(default)]
    pub estimated_finish: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: MilestoneId,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    pub project: ProjectId,
    #[serde(default)]
    pub estimated_start: Option<NaiveDate>,
    #[serde(default)]
    pub estimated_finish: Option<NaiveDate>,
    #[serde(default)]
    pub closed: bool,
    #[serde(default, deserialize_with = "deserialize_points")]
    pub total_points: f64,
    #[serde(default, deserialize_with = "deserialize_points")]
    pub closed_points: f64,
}

impl Milestone {
    pub fn date_range(&self) -> String {
        let fmt = |d: Option<NaiveDate>| {
            d.map(|d| d.format("%d %b %Y").to_string())
                .unwrap_or_else(|| "?".to_string())
        };
        format!("{} - {}", fmt(self.estimated_start), fmt(self.estimated_finish))
    }

    pub fn days_left(&self, today: NaiveDate) -> Option<i64> {
        self.estimated_finish
            .map(|finish| (finish - today).num_days().max(0))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MilestoneStats {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_points")]
    pub total_points: f64,
    #[serde(default, deserialize_with = "deserialize_points")]
    pub completed_points: f64,
    #[serde(default)]
    pub total_userstories: u32,
    #[serde(default)]
    pub completed_userstories: u32,
    #[serde(default)]
    pub total_tasks: u32,
    #[serde(default)]
    pub completed_tasks: u32,
    #[serde(default)]
    pub iocaine_doses: u32,
}

impl MilestoneStats {
    pub fn completed_percentage(&self) -> u16 {
        if self.total_points <= 0.0 {
            return 0;
        }
        ((self.completed_points / self.total_points) * 100.0)
            .round()
            .clamp(0.0, 100.0) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stats_with_role_points() {
        let json = r#"{
            "name": "Sprint 1",
            "total_points": {"1": 10.0, "2": 6.0},
            "completed_points": [4.0, 4.0],
            "total_userstories": 5,
            "completed_userstories": 2,
            "total_tasks": 9,
            "completed_tasks": 3,
            "iocaine_doses": 1
        }"#;
        let stats: MilestoneStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_points, 16.0);
        assert_eq!(stats.completed_points, 8.0);
        assert_eq!(stats.completed_percentage(), 50);
    }

    #[test]
    fn test_days_left_never_negative() {
        let milestone: Milestone = serde_json::from_str(
            r#"{"id": 1, "name": "S1", "project": 1, "estimated_finish": "2024-03-10"}"#,
        )
        .unwrap();
        let before = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let after = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        assert_eq!(milestone.days_left(before), Some(3));
        assert_eq!(milestone.days_left(after), Some(0));
        assert_eq!(milestone.date_range(), "? - 10 Mar 2024");
    }
}
