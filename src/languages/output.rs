use crate::model::{LanguageShare, LanguagesOutput, SCHEMA_VERSION};
use anyhow::Result;
use chrono::Utc;
use console::style;

const BAR_WIDTH: usize = 30;

pub fn output_json(languages: &[LanguageShare], username: &str) -> Result<()> {
    let output = LanguagesOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        username: username.to_string(),
        languages: languages.to_vec(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_ndjson(languages: &[LanguageShare]) -> Result<()> {
    for share in languages {
        println!("{}", serde_json::to_string(share)?);
    }
    Ok(())
}

pub fn output_table(languages: &[LanguageShare]) -> Result<()> {
    if languages.is_empty() {
        println!("No language data available");
        return Ok(());
    }

    println!(
        "{:<20} {:>12} {:>7}",
        style("Language").bold(),
        style("Bytes").bold(),
        style("Usage").bold()
    );
    println!("{}", "─".repeat(72));

    for share in languages {
        let filled = ((share.percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
        println!(
            "{:<20} {:>12} {:>6.1}% {}",
            share.language,
            share.bytes,
            share.percentage,
            style("█".repeat(filled.min(BAR_WIDTH))).green()
        );
    }

    Ok(())
}
