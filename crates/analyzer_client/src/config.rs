use std::time::Duration;

use url::Url;

/// Fallbacks matching the service's development defaults.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TOKEN: &str = "your_public_token";

/// Environment variables consulted by [`ClientConfig::from_env`].
pub const ENDPOINT_ENV: &str = "ANALYZER_BACKEND_URL";
pub const TOKEN_ENV: &str = "ANALYZER_PUBLIC_TOKEN";

const ANALYZE_PATH: &str = "/analyze_terms";

/// Injected client configuration. Defaults are applied here, at
/// construction time; nothing below this reads ambient state.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: Url,
    pub access_token: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint literal"),
            access_token: DEFAULT_TOKEN.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
        }
    }
}

impl ClientConfig {
    /// Build a config from the environment, falling back to the defaults
    /// for unset or empty variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(raw) = non_empty_var(ENDPOINT_ENV) {
            config.endpoint = Url::parse(&raw).map_err(|source| ConfigError::InvalidEndpoint {
                url: raw,
                source,
            })?;
        }
        if let Some(token) = non_empty_var(TOKEN_ENV) {
            config.access_token = token;
        }
        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = token.into();
        self
    }

    /// Resolved URL of the analyze operation. Joining an absolute path
    /// onto an http(s) base cannot fail.
    pub fn analyze_endpoint(&self) -> Url {
        self.endpoint
            .join(ANALYZE_PATH)
            .expect("absolute path join on http(s) base")
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid backend URL {url:?}: {source}")]
    InvalidEndpoint {
        url: String,
        source: url::ParseError,
    },
}
