use anyhow::Result;
use chrono::{NaiveDate, Utc};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::DEFAULT_ENDPOINT;

#[derive(Parser)]
#[command(name = "readme-pulse")]
#[command(about = "Update a GitHub profile README with your coding streak and language usage")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[arg(short, long, action = ArgAction::Count, global = true, help = "Increase log verbosity (-v debug, -vv trace)")]
    pub verbose: u8,

    #[arg(short, long, global = true, help = "Only log warnings and errors")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Debug)]
pub struct CommonArgs {
    #[arg(long, env = "GH_TOKEN", hide_env_values = true, help = "GitHub token used for the GraphQL API")]
    pub token: Option<String>,

    #[arg(long, env = "GITHUB_USERNAME", help = "GitHub login whose activity is summarized")]
    pub username: Option<String>,

    #[arg(long, env = "GITHUB_GRAPHQL_URL", default_value = DEFAULT_ENDPOINT, help = "GraphQL endpoint")]
    pub endpoint: String,

    #[arg(long, default_value = "30s", value_parser = humantime::parse_duration, help = "HTTP request timeout (e.g. 30s, 1m)")]
    pub timeout: Duration,

    #[arg(long, help = "Read a saved GraphQL response from this file instead of calling the API")]
    pub input: Option<PathBuf>,

    #[arg(long, help = "Treat this date (YYYY-MM-DD) as today instead of the current UTC date")]
    pub today: Option<NaiveDate>,
}

impl CommonArgs {
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    Update {
        #[arg(long, default_value = "README.md", help = "Document to rewrite")]
        readme: PathBuf,

        #[arg(long, help = "Print the updated document instead of writing it")]
        dry_run: bool,
    },
    Streak {
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    Languages {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Update { readme, dry_run } => crate::readme::exec(self.common, readme, dry_run),
            Commands::Streak { json } => crate::streak::exec(self.common, json),
            Commands::Languages { json, ndjson } => {
                crate::languages::exec(self.common, json, ndjson)
            }
        }
    }
}
