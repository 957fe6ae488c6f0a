use crate::cli::CommonArgs;
use crate::error::{PulseError, Result};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for talking to GitHub.
///
/// `username` is always required. `token` is only needed when the payload is
/// fetched over the network; offline runs from a saved response skip it.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: Option<String>,
    pub username: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl Config {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            token: None,
            username: username.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_args(args: &CommonArgs) -> Result<Self> {
        let username = args
            .username
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                PulseError::Config("a username is required (--username or GITHUB_USERNAME)".to_string())
            })?;

        let mut config = Self::new(username)
            .with_endpoint(args.endpoint.trim())
            .with_timeout(args.timeout);
        if let Some(token) = args.token.as_deref().filter(|t| !t.trim().is_empty()) {
            config = config.with_token(token.trim());
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(PulseError::Config(format!(
                "endpoint must start with http:// or https://: {}",
                self.endpoint
            )));
        }
        if self.timeout.is_zero() {
            return Err(PulseError::Config("timeout must be greater than zero".to_string()));
        }
        Ok(())
    }

    pub fn require_token(&self) -> Result<&str> {
        self.token.as_deref().ok_or_else(|| {
            PulseError::Config("a GitHub token is required (--token or GH_TOKEN)".to_string())
        })
    }
}
