use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use taiga_core::{TaigaError, TaigaResult};
use taiga_domain::{
    AuthSession, Credentials, Milestone, MilestoneId, MilestoneStats, NewUserStory, Project,
    ProjectId, ProjectStats, Task, TaskFilter, TaskId, TaskPatch, UserStory, UserStoryFilter,
    UserStoryId, UserStoryPatch,
};

use crate::api::TaigaApi;

pub struct HttpApi {
    client: Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl HttpApi {
    const REQUEST_TIMEOUT_SECS: u64 = 30;

    pub fn new(base_url: impl Into<String>) -> TaigaResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| TaigaError::Internal(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1/{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self
            .client
            .request(method, self.url(path))
            .header("x-disable-pagination", "True");
        if let Some(token) = self.token.read().as_deref() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> TaigaResult<T> {
        let response = builder
            .send()
            .await
            .map_err(|e| TaigaError::Connection(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TaigaError::Connection(e.to_string()))?;

        if !status.is_success() {
            let error = error_from_response(status, &body);
            tracing::warn!("Request failed with {}: {}", status, error);
            return Err(error);
        }

        serde_json::from_str(&body).map_err(|e| {
            TaigaError::Serialization(format!("Failed to parse response: {} (body: {})", e, body))
        })
    }
}

/// Maps a non-success response to an error, pulling the most useful message out of the body.
pub fn error_from_response(status: StatusCode, body: &str) -> TaigaError {
    let message = extract_message(body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    });
    match status {
        StatusCode::BAD_REQUEST => TaigaError::Validation(message),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => TaigaError::Unauthorized(message),
        StatusCode::NOT_FOUND => TaigaError::NotFound(message),
        other => TaigaError::Api {
            status: other.as_u16(),
            message,
        },
    }
}

fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;
    if let Some(message) = object.get("_error_message").and_then(|m| m.as_str()) {
        return Some(message.to_string());
    }
    // Field errors come as {"field": ["message", ...]}
    object.iter().find_map(|(field, errors)| {
        let first = match errors {
            serde_json::Value::Array(items) => items.first()?.as_str()?,
            serde_json::Value::String(s) => s.as_str(),
            _ => return None,
        };
        Some(format!("{}: {}", field, first))
    })
}

#[async_trait]
impl TaigaApi for HttpApi {
    async fn login(&self, credentials: Credentials) -> TaigaResult<AuthSession> {
        let session: AuthSession = self
            .send(self.request(Method::POST, "auth").json(&credentials))
            .await?;
        *self.token.write() = Some(session.auth_token.clone());
        tracing::info!("Logged in as {}", session.username);
        Ok(session)
    }

    async fn project(&self, id: ProjectId) -> TaigaResult<Project> {
        self.send(self.request(Method::GET, &format!("projects/{}", id)))
            .await
    }

    async fn project_stats(&self, id: ProjectId) -> TaigaResult<ProjectStats> {
        self.send(self.request(Method::GET, &format!("projects/{}/stats", id)))
            .await
    }

    async fn milestone(&self, id: MilestoneId) -> TaigaResult<Milestone> {
        self.send(self.request(Method::GET, &format!("milestones/{}", id)))
            .await
    }

    async fn milestone_stats(&self, id: MilestoneId) -> TaigaResult<MilestoneStats> {
        self.send(self.request(Method::GET, &format!("milestones/{}/stats", id)))
            .await
    }

    async fn user_stories(&self, filter: UserStoryFilter) -> TaigaResult<Vec<UserStory>> {
        self.send(
            self.request(Method::GET, "userstories")
                .query(&filter.query_pairs()),
        )
        .await
    }

    async fn create_user_story(&self, data: NewUserStory) -> TaigaResult<UserStory> {
        self.send(self.request(Method::POST, "userstories").json(&data))
            .await
    }

    async fn update_user_story(
        &self,
        id: UserStoryId,
        patch: UserStoryPatch,
    ) -> TaigaResult<UserStory> {
        self.send(
            self.request(Method::PATCH, &format!("userstories/{}", id))
                .json(&patch),
        )
        .await
    }

    async fn tasks(&self, filter: TaskFilter) -> TaigaResult<Vec<Task>> {
        self.send(self.request(Method::GET, "tasks").query(&filter.query_pairs()))
            .await
    }

    async fn update_task(&self, id: TaskId, patch: TaskPatch) -> TaigaResult<Task> {
        self.send(
            self.request(Method::PATCH, &format!("tasks/{}", id))
                .json(&patch),
        )
        .await
    }
}
