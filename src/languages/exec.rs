use super::{languages_from_payload, output_json, output_ndjson, output_table};
use crate::cli::CommonArgs;
use crate::config::Config;
use crate::github;
use anyhow::Context;

pub fn exec(common: CommonArgs, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let config = Config::from_args(&common).context("Invalid configuration")?;
    let source = github::source_for(&common, &config).context("Failed to set up the GitHub client")?;
    let payload = github::load_payload(source.as_ref(), &config.username)
        .context("Failed to fetch data from GitHub")?;

    let languages = languages_from_payload(&payload);

    if json {
        output_json(&languages, &config.username)?;
    } else if ndjson {
        output_ndjson(&languages)?;
    } else {
        output_table(&languages)?;
    }

    Ok(())
}
