use crate::{TaigaError, TaigaResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub host: HostConfig,
    pub auth: AuthConfig,
    pub keys: KeysConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub scheme: String,
    pub domain: String,
    pub port: u16,
    pub base_path: Option<String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            domain: "localhost".to_string(),
            port: 8000,
            base_path: None,
        }
    }
}

impl HostConfig {
    /// Root URL of the REST API, without a trailing slash.
    pub fn base_url(&self) -> String {
        let path = self
            .base_path
            .as_deref()
            .map(|p| p.trim_matches('/'))
            .filter(|p| !p.is_empty())
            .map(|p| format!("/{}", p))
            .unwrap_or_default();
        format!("{}://{}:{}{}", self.scheme, self.domain, self.port, path)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub username: Option<String>,
}

/// One key name or a list of them, e.g. `next = ["down", "j"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyNames {
    One(String),
    Many(Vec<String>),
}

impl KeyNames {
    pub fn many(names: &[&str]) -> Self {
        Self::Many(names.iter().map(|n| n.to_string()).collect())
    }

    pub fn names(&self) -> Vec<&str> {
        match self {
            Self::One(name) => vec![name.as_str()],
            Self::Many(names) => names.iter().map(String::as_str).collect(),
        }
    }
}

/// Raw key names as written in the config file. Parsed into key bindings by the TUI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeysConfig {
    pub global: GlobalKeysConfig,
    pub project: ProjectKeysConfig,
    pub backlog: BacklogKeysConfig,
    pub milestone: MilestoneKeysConfig,
    pub overlay: OverlayKeysConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalKeysConfig {
    pub quit: String,
}

impl Default for GlobalKeysConfig {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectKeysConfig {
    pub backlog: String,
    pub milestones: String,
}

impl Default for ProjectKeysConfig {
    fn default() -> Self {
        Self {
            backlog: "B".to_string(),
            milestones: "M".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BacklogKeysConfig {
    pub help: String,
    pub reload: String,
    pub create_user_story: String,
    pub edit_user_story: String,
    pub move_user_story_to_milestone: String,
    pub next: KeyNames,
    pub previous: KeyNames,
}

impl Default for BacklogKeysConfig {
    fn default() -> Self {
        Self {
            help: "?".to_string(),
            reload: "r".to_string(),
            create_user_story: "n".to_string(),
            edit_user_story: "e".to_string(),
            move_user_story_to_milestone: "m".to_string(),
            next: KeyNames::many(&["down", "j"]),
            previous: KeyNames::many(&["up", "k"]),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MilestoneKeysConfig {
    pub help: String,
    pub reload: String,
    pub change_to_milestone: String,
    pub edit_user_story_or_task: String,
    pub next: KeyNames,
    pub previous: KeyNames,
}

impl Default for MilestoneKeysConfig {
    fn default() -> Self {
        Self {
            help: "?".to_string(),
            reload: "r".to_string(),
            change_to_milestone: "m".to_string(),
            edit_user_story_or_task: "e".to_string(),
            next: KeyNames::many(&["down", "j"]),
            previous: KeyNames::many(&["up", "k"]),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayKeysConfig {
    pub cancel: String,
    pub activate: String,
    pub next_field: String,
    pub previous_field: String,
    pub up: KeyNames,
    pub down: KeyNames,
}

impl Default for OverlayKeysConfig {
    fn default() -> Self {
        Self {
            cancel: "esc".to_string(),
            activate: "enter".to_string(),
            next_field: "tab".to_string(),
            previous_field: "backtab".to_string(),
            up: KeyNames::many(&["up", "k"]),
            down: KeyNames::many(&["down", "j"]),
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/taiga/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("taiga/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("taiga\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Loads the platform config file, falling back to defaults when it does not exist.
    pub fn load() -> TaigaResult<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> TaigaResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
            .map_err(|e| TaigaError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn parse(content: &str) -> TaigaResult<Self> {
        toml::from_str(content).map_err(|e| TaigaError::Config(e.to_string()))
    }
}
