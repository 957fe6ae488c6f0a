use crate::error::Result;
use crate::github::{extract, REPOSITORIES_POINTER};
use crate::model::{LanguageShare, Repository, RepositoryConnection};
use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, warn};

/// Bytes per language summed across repositories, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageSizes {
    bytes: IndexMap<String, u64>,
}

impl LanguageSizes {
    pub fn add(&mut self, language: &str, bytes: u64) {
        let entry = self.bytes.entry(language.to_string()).or_insert(0);
        *entry = entry.saturating_add(bytes);
    }

    pub fn from_repositories(repositories: &[Repository]) -> Self {
        let mut sizes = Self::default();
        for repository in repositories {
            for (language, bytes) in repository.language_sizes() {
                sizes.add(language, bytes);
            }
        }
        sizes
    }

    pub fn get(&self, language: &str) -> Option<u64> {
        self.bytes.get(language).copied()
    }

    pub fn total(&self) -> u64 {
        self.bytes.values().fold(0u64, |acc, bytes| acc.saturating_add(*bytes))
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Share of the total per language, largest first. Ties keep discovery
    /// order. Empty when no bytes were recorded at all.
    pub fn distribution(&self) -> Vec<LanguageShare> {
        let total = self.total();
        if total == 0 {
            return Vec::new();
        }

        let mut sorted: Vec<(&String, &u64)> = self.bytes.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(a.1));

        sorted
            .into_iter()
            .map(|(language, &bytes)| LanguageShare {
                language: language.clone(),
                bytes,
                percentage: (bytes as f64 / total as f64) * 100.0,
            })
            .collect()
    }
}

pub fn repositories_from_payload(payload: &Value) -> Result<Vec<Repository>> {
    let connection: RepositoryConnection = extract(payload, REPOSITORIES_POINTER)?;
    Ok(connection.nodes.into_iter().flatten().collect())
}

/// Language distribution for a raw payload. Unreadable repository data
/// yields an empty distribution and a warning instead of an error.
pub fn languages_from_payload(payload: &Value) -> Vec<LanguageShare> {
    match repositories_from_payload(payload) {
        Ok(repositories) => {
            let sizes = LanguageSizes::from_repositories(&repositories);
            debug!(
                repositories = repositories.len(),
                languages = sizes.len(),
                "language sizes accumulated"
            );
            sizes.distribution()
        }
        Err(e) => {
            warn!(error = %e, "Could not read repository languages, reporting no language data");
            Vec::new()
        }
    }
}
