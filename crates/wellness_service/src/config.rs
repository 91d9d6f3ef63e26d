//! Server settings read from the environment.

use std::path::PathBuf;

pub const DEFAULT_ADDRESS: &str = "127.0.0.1:3000";
pub const DEFAULT_PLAN_DIR: &str = "content";
pub const DEFAULT_MAX_BODY_SIZE: usize = 4 * 1024 * 1024;

#[derive(Clone, Debug, PartialEq)]
pub struct ServiceSettings {
    pub address: String,
    pub plan_dir: PathBuf,
    pub max_body_size: usize,
    /// Used when a score request names no user.
    pub default_user_id: Option<String>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            plan_dir: PathBuf::from(DEFAULT_PLAN_DIR),
            max_body_size: DEFAULT_MAX_BODY_SIZE,
            default_user_id: None,
        }
    }
}

impl ServiceSettings {
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    pub fn from_env_with<F>(mut get: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut get = |key: &str| get(key).filter(|v| !v.trim().is_empty());
        let max_body_size = match get("MAX_HTTP_BODY_SIZE") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(%raw, "invalid MAX_HTTP_BODY_SIZE, using default");
                DEFAULT_MAX_BODY_SIZE
            }),
            None => DEFAULT_MAX_BODY_SIZE,
        };
        Self {
            address: get("ADDRESS").unwrap_or_else(|| DEFAULT_ADDRESS.to_string()),
            plan_dir: get("PLAN_CONTENT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PLAN_DIR)),
            max_body_size,
            default_user_id: get("DEFAULT_USER_ID"),
        }
    }
}
