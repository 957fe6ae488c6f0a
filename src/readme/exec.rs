use super::{languages_section, patch_document, streak_section, PatchReport};
use crate::cli::CommonArgs;
use crate::config::Config;
use crate::github::{self, ActivitySource};
use crate::languages::languages_from_payload;
use crate::model::{LanguageShare, Streak};
use crate::streak::streak_from_payload;
use crate::util::format_timestamp;
use anyhow::Context;
use chrono::{DateTime, NaiveDate, Utc};
use console::style;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct UpdateOutcome {
    pub streak: Streak,
    pub languages: Vec<LanguageShare>,
    pub report: PatchReport,
    pub document: String,
    pub written: bool,
}

pub fn exec(common: CommonArgs, readme: PathBuf, dry_run: bool) -> anyhow::Result<()> {
    let config = Config::from_args(&common).context("Invalid configuration")?;
    let source = github::source_for(&common, &config).context("Failed to set up the GitHub client")?;

    let outcome = run(
        source.as_ref(),
        &config.username,
        &readme,
        common.today(),
        Utc::now(),
        dry_run,
    )?;

    if dry_run {
        print!("{}", outcome.document);
    } else {
        eprintln!(
            "{} {} ({} day streak, {} languages)",
            style("Updated").green().bold(),
            readme.display(),
            outcome.streak.days,
            outcome.languages.len()
        );
    }

    Ok(())
}

/// Fetch, compute and patch `readme`. Nothing is read or written when the
/// fetch fails.
pub fn run(
    source: &dyn ActivitySource,
    username: &str,
    readme: &Path,
    today: NaiveDate,
    now: DateTime<Utc>,
    dry_run: bool,
) -> anyhow::Result<UpdateOutcome> {
    info!(username, "Fetching GitHub data");
    let payload = github::load_payload(source, username).context("Failed to fetch data from GitHub")?;

    let streak = streak_from_payload(&payload, today);
    info!(days = streak.days, total = streak.total_contributions, "Current streak");

    let languages = languages_from_payload(&payload);
    let names: Vec<&str> = languages.iter().map(|l| l.language.as_str()).collect();
    info!(languages = ?names, "Languages found");

    let content = fs::read_to_string(readme)
        .with_context(|| format!("Failed to read {}", readme.display()))?;

    let stamp = format_timestamp(&now);
    let (document, report) = patch_document(
        &content,
        &streak_section(&streak),
        &languages_section(&languages),
        &stamp,
    )
    .context("Failed to patch document")?;

    if !report.any() {
        warn!(path = %readme.display(), "No section markers found in document");
    }

    let written = !dry_run;
    if written {
        fs::write(readme, &document)
            .with_context(|| format!("Failed to write {}", readme.display()))?;
        info!(path = %readme.display(), updated = %stamp, "README updated");
    }

    Ok(UpdateOutcome {
        streak,
        languages,
        report,
        document,
        written,
    })
}
