use serde::{Deserialize, Serialize};
use taiga_core::{TaigaError, TaigaResult};

use crate::milestone::MilestoneId;
use crate::project::{ProjectId, StatusId};

pub type UserStoryId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStory {
    pub id: UserStoryId,
    #[serde(rename = "ref")]
    pub reference: u64,
    pub subject: String,
    #[serde(default)]
    pub description: String,
    pub status: StatusId,
    #[serde(default)]
    pub milestone: Option<MilestoneId>,
    pub project: ProjectId,
    #[serde(default)]
    pub total_points: Option<f64>,
    #[serde(default)]
    pub is_closed: bool,
    #[serde(default)]
    pub version: u64,
}

/// Payload for creating a user story.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUserStory {
    pub project: ProjectId,
    pub subject: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<MilestoneId>,
}

impl NewUserStory {
    pub fn validate(&self) -> TaigaResult<()> {
        validate_subject(&self.subject)
    }
}

/// Partial update. Absent fields are left untouched by the server;
/// `milestone: Some(None)` moves the story back to the backlog.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserStoryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<Option<MilestoneId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
}

impl UserStoryPatch {
    pub fn is_empty(&self) -> bool {
        self.subject.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.milestone.is_none()
    }

    pub fn validate(&self) -> TaigaResult<()> {
        match &self.subject {
            Some(subject) => validate_subject(subject),
            None => Ok(()),
        }
    }

    /// Stamps the version the change is based on, for optimistic concurrency on the server.
    pub fn based_on(mut self, user_story: &UserStory) -> Self {
        self.version = Some(user_story.version);
        self
    }
}

pub(crate) fn validate_subject(subject: &str) -> TaigaResult<()> {
    if subject.trim().is_empty() {
        Err(TaigaError::Validation("Subject is required".to_string()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story() -> UserStory {
        serde_json::from_str(
            r#"{"id": 4, "ref": 12, "subject": "Login", "status": 1, "project": 2, "version": 3}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_ref_field() {
        let us = story();
        assert_eq!(us.reference, 12);
        assert_eq!(us.milestone, None);
        assert_eq!(us.description, "");
    }

    #[test]
    fn test_patch_serializes_only_set_fields() {
        let patch = UserStoryPatch {
            subject: Some("New".to_string()),
            ..Default::default()
        }
        .based_on(&story());
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({"subject": "New", "version": 3}));
    }

    #[test]
    fn test_patch_clearing_milestone_serializes_null() {
        let patch = UserStoryPatch {
            milestone: Some(None),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({"milestone": null}));
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_blank_subject_is_rejected() {
        let patch = UserStoryPatch {
            subject: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(matches!(patch.validate(), Err(TaigaError::Validation(_))));
        assert!(UserStoryPatch::default().validate().is_ok());
    }
}
