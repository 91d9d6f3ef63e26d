use crate::ClientError;
use secrecy::SecretString;

/// Credentials for the health-data GraphQL endpoint.
#[derive(Clone, Debug)]
pub struct HealthDataConfig {
    pub api_token: SecretString,
    pub endpoint: String,
}

impl HealthDataConfig {
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function instead of the process environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, ClientError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let token = non_empty(get("GRAPHQL_API_TOKEN"))
            .ok_or_else(|| ClientError::Config("GRAPHQL_API_TOKEN missing".into()))?;
        let endpoint = non_empty(get("GRAPHQL_ENDPOINT"))
            .ok_or_else(|| ClientError::Config("GRAPHQL_ENDPOINT missing".into()))?;
        Ok(Self {
            api_token: SecretString::new(token.into()),
            endpoint,
        })
    }
}

/// OAuth and routing settings for the lab-scheduling provider.
#[derive(Clone, Debug)]
pub struct LabConfig {
    /// Host used for the OAuth token exchange.
    pub base_url: String,
    /// Host serving the REST endpoints; the token response may replace it.
    pub instance_url: String,
    pub consumer_key: String,
    pub consumer_secret: SecretString,
    pub username: String,
    pub password: SecretString,
    pub partner_id: String,
    pub activity_id: String,
}

impl LabConfig {
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    pub fn from_env_with<F>(mut get: F) -> Result<Self, ClientError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut required = |key: &str| {
            non_empty(get(key)).ok_or_else(|| ClientError::Config(format!("{key} missing")))
        };
        let base_url = required("LAB_BASE_URL")?;
        let instance_url = required("LAB_INSTANCE_URL")?;
        let consumer_key = required("LAB_CONSUMER_KEY")?;
        let consumer_secret = required("LAB_CONSUMER_SECRET")?;
        let username = required("LAB_USERNAME")?;
        let password = required("LAB_PASSWORD")?;
        let partner_id = required("LAB_PARTNER_ID")?;
        let activity_id = non_empty(get("LAB_ACTIVITY_ID")).unwrap_or_else(|| "1".into());
        Ok(Self {
            base_url,
            instance_url,
            consumer_key,
            consumer_secret: SecretString::new(consumer_secret.into()),
            username,
            password: SecretString::new(password.into()),
            partner_id,
            activity_id,
        })
    }
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}
