use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

// Shapes of the GraphQL response. Only the fields we read are modelled.

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCalendar {
    pub total_contributions: u64,
    pub weeks: Vec<ContributionWeek>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionWeek {
    pub contribution_days: Vec<ContributionDay>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDay {
    pub contribution_count: u32,
    pub date: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryConnection {
    pub nodes: Vec<Option<Repository>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub languages: Option<LanguageConnection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguageConnection {
    #[serde(default)]
    pub edges: Vec<LanguageEdge>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LanguageEdge {
    pub size: u64,
    pub node: LanguageNode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LanguageNode {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

impl Repository {
    pub fn new(name: impl Into<String>, languages: &[(&str, u64)]) -> Self {
        let edges = languages
            .iter()
            .map(|(language, size)| LanguageEdge {
                size: *size,
                node: LanguageNode {
                    name: (*language).to_string(),
                    color: None,
                },
            })
            .collect();

        Self {
            name: name.into(),
            languages: Some(LanguageConnection { edges }),
        }
    }

    /// Byte size per language as reported for this repository.
    pub fn language_sizes(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.languages
            .iter()
            .flat_map(|connection| connection.edges.iter())
            .map(|edge| (edge.node.name.as_str(), edge.size))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDay {
    pub date: NaiveDate,
    pub count: u32,
}

impl ActivityDay {
    pub fn new(date: NaiveDate, count: u32) -> Self {
        Self { date, count }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub days: u32,
    pub total_contributions: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageShare {
    pub language: String,
    pub bytes: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub username: String,
    pub today: NaiveDate,
    pub streak: u32,
    pub total_contributions: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguagesOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub username: String,
    pub languages: Vec<LanguageShare>,
}
