use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn normal(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            kind: "normal",
            username: username.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthSession {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    pub auth_token: String,
}
