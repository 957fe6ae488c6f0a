use crate::model::{LanguageShare, Streak};

pub const NO_LANGUAGE_DATA: &str = "No language data available";

pub fn streak_section(streak: &Streak) -> String {
    format!(
        "**{}** days consecutive coding\n\nTotal contributions this year: **{}**",
        streak.days, streak.total_contributions
    )
}

/// Markdown table of language usage, or a placeholder line when there is
/// nothing to show. Percentages use one decimal, rounded to nearest.
pub fn languages_section(languages: &[LanguageShare]) -> String {
    if languages.is_empty() {
        return NO_LANGUAGE_DATA.to_string();
    }

    let mut rows = Vec::with_capacity(languages.len() + 2);
    rows.push("| Language | Usage |".to_string());
    rows.push("|----------|-------|".to_string());
    for share in languages {
        rows.push(format!("| {} | {:.1}% |", share.language, share.percentage));
    }
    rows.join("\n")
}
