use crate::config::Config;
use crate::error::{PulseError, Result};
use crate::github::query::CONTRIBUTIONS_QUERY;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::header::ACCEPT;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Where the raw GraphQL payload comes from.
pub trait ActivitySource {
    fn fetch(&self, username: &str) -> Result<Value>;
}

pub struct GithubClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    token: String,
}

impl GithubClient {
    pub fn new(config: &Config) -> Result<Self> {
        let token = config.require_token()?.to_string();
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            token,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ActivitySource for GithubClient {
    fn fetch(&self, username: &str) -> Result<Value> {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Fetching GitHub data for {username}..."));
        pb.enable_steady_tick(Duration::from_millis(100));

        debug!(endpoint = %self.endpoint, username, "posting contributions query");
        let body = json!({
            "query": CONTRIBUTIONS_QUERY,
            "variables": { "username": username },
        });
        let sent = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .header(ACCEPT, GITHUB_ACCEPT)
            .json(&body)
            .send();
        pb.finish_and_clear();

        let response = sent?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(PulseError::HttpStatus { status, body });
        }

        Ok(response.json()?)
    }
}

/// A previously saved GraphQL response on disk.
pub struct PayloadFile {
    path: PathBuf,
}

impl PayloadFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ActivitySource for PayloadFile {
    fn fetch(&self, username: &str) -> Result<Value> {
        debug!(path = %self.path.display(), username, "reading saved payload");
        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
