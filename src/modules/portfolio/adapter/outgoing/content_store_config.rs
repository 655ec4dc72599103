use std::env;
use std::time::Duration;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ContentStoreConfigError {
    #[error("CONTENT_STORE_URL must be set")]
    MissingBaseUrl,

    #[error("Invalid {key} value: {value}")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentStoreConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Auth collection the API key belongs to, as required by the `Authorization` scheme.
    pub auth_collection: String,
    pub request_timeout: Duration,
}

impl ContentStoreConfig {
    /// Load content store configuration from environment variables
    pub fn from_env() -> Result<Self, ContentStoreConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ContentStoreConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("CONTENT_STORE_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ContentStoreConfigError::MissingBaseUrl)?;

        let api_key = lookup("CONTENT_STORE_API_KEY").filter(|v| !v.trim().is_empty());

        let auth_collection =
            lookup("CONTENT_STORE_AUTH_COLLECTION").unwrap_or_else(|| "users".to_string());

        let timeout_raw =
            lookup("CONTENT_STORE_TIMEOUT_SECS").unwrap_or_else(|| "10".to_string());
        let timeout_secs = timeout_raw
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or_else(|| ContentStoreConfigError::InvalidValue {
                key: "CONTENT_STORE_TIMEOUT_SECS".to_string(),
                value: timeout_raw.clone(),
            })?;

        Ok(Self {
            base_url,
            api_key,
            auth_collection,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn authorization(&self) -> Option<String> {
        self.api_key
            .as_ref()
            .map(|key| format!("{} API-Key {}", self.auth_collection, key))
    }
}
