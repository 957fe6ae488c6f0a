use crate::error::Result;
use regex::{NoExpand, Regex};
use serde::Serialize;
use tracing::debug;

pub const STREAK_SECTION: &str = "streak";
pub const LANGUAGES_SECTION: &str = "languages";

const LAST_UPDATED_PATTERN: &str = r"<sub>Last updated:.*?</sub>";

/// Which regions of the document were found and rewritten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PatchReport {
    pub streak: bool,
    pub languages: bool,
    pub timestamp: bool,
}

impl PatchReport {
    pub fn any(&self) -> bool {
        self.streak || self.languages || self.timestamp
    }
}

/// Replace the interior of every `<!--START_SECTION:name-->` ..
/// `<!--END_SECTION:name-->` region with `body`, verbatim.
///
/// Returns `None` when the document has no such region.
pub fn replace_section(content: &str, name: &str, body: &str) -> Result<Option<String>> {
    let start = format!("<!--START_SECTION:{name}-->");
    let end = format!("<!--END_SECTION:{name}-->");
    let pattern = Regex::new(&format!(
        "(?s){}.*?{}",
        regex::escape(&start),
        regex::escape(&end)
    ))?;

    if !pattern.is_match(content) {
        debug!(section = name, "section markers not found, leaving document as is");
        return Ok(None);
    }

    let replacement = format!("{start}\n{body}\n{end}");
    Ok(Some(
        pattern
            .replace_all(content, NoExpand(replacement.as_str()))
            .into_owned(),
    ))
}

/// Rewrite the single-line `<sub>Last updated: ...</sub>` marker.
pub fn replace_timestamp(content: &str, stamp: &str) -> Result<Option<String>> {
    let pattern = Regex::new(LAST_UPDATED_PATTERN)?;
    if !pattern.is_match(content) {
        debug!("last updated marker not found, leaving document as is");
        return Ok(None);
    }

    let replacement = format!("<sub>Last updated: {stamp}</sub>");
    Ok(Some(
        pattern
            .replace_all(content, NoExpand(replacement.as_str()))
            .into_owned(),
    ))
}

/// Apply the streak, languages and timestamp replacements in turn.
pub fn patch_document(
    content: &str,
    streak: &str,
    languages: &str,
    stamp: &str,
) -> Result<(String, PatchReport)> {
    let mut document = content.to_string();
    let mut report = PatchReport::default();

    if let Some(patched) = replace_section(&document, STREAK_SECTION, streak)? {
        document = patched;
        report.streak = true;
    }
    if let Some(patched) = replace_section(&document, LANGUAGES_SECTION, languages)? {
        document = patched;
        report.languages = true;
    }
    if let Some(patched) = replace_timestamp(&document, stamp)? {
        document = patched;
        report.timestamp = true;
    }

    Ok((document, report))
}
