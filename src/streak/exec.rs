use super::{output_json, output_summary, streak_from_payload};
use crate::cli::CommonArgs;
use crate::config::Config;
use crate::github;
use anyhow::Context;

pub fn exec(common: CommonArgs, json: bool) -> anyhow::Result<()> {
    let config = Config::from_args(&common).context("Invalid configuration")?;
    let source = github::source_for(&common, &config).context("Failed to set up the GitHub client")?;
    let payload = github::load_payload(source.as_ref(), &config.username)
        .context("Failed to fetch data from GitHub")?;

    let today = common.today();
    let streak = streak_from_payload(&payload, today);

    if json {
        output_json(&streak, &config.username, today)?;
    } else {
        output_summary(&streak, &config.username)?;
    }

    Ok(())
}
