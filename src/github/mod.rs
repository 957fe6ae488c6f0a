pub mod client;
pub mod payload;
pub mod query;

pub use client::{ActivitySource, GithubClient, PayloadFile};
pub use payload::{extract, graphql_errors, CALENDAR_POINTER, REPOSITORIES_POINTER};
pub use query::CONTRIBUTIONS_QUERY;

use crate::cli::CommonArgs;
use crate::config::Config;
use crate::error::Result;
use serde_json::Value;
use tracing::warn;

/// Pick the payload source for this run: a saved file when `--input` is
/// given, the GraphQL API otherwise.
pub fn source_for(common: &CommonArgs, config: &Config) -> Result<Box<dyn ActivitySource>> {
    match &common.input {
        Some(path) => Ok(Box::new(PayloadFile::new(path))),
        None => Ok(Box::new(GithubClient::new(config)?)),
    }
}

/// Fetch the payload and report any GraphQL-level errors it carries.
///
/// Errors inside a successful response are not fatal; the statistics read
/// from the payload degrade on their own.
pub fn load_payload(source: &dyn ActivitySource, username: &str) -> Result<Value> {
    let payload = source.fetch(username)?;
    for message in graphql_errors(&payload) {
        warn!(%message, "GitHub reported a GraphQL error");
    }
    Ok(payload)
}
