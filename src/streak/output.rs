use crate::model::{Streak, StreakOutput, SCHEMA_VERSION};
use anyhow::Result;
use chrono::{NaiveDate, Utc};
use console::style;

pub fn output_json(streak: &Streak, username: &str, today: NaiveDate) -> Result<()> {
    let output = StreakOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        username: username.to_string(),
        today,
        streak: streak.days,
        total_contributions: streak.total_contributions,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_summary(streak: &Streak, username: &str) -> Result<()> {
    println!("{}", style(format!("Coding streak for {username}")).bold());
    println!("{}", "─".repeat(50));

    let days = if streak.days > 0 {
        style(streak.days).green()
    } else {
        style(streak.days).dim()
    };
    let unit = if streak.days == 1 { "day" } else { "days" };
    println!("Current streak: {days} {unit}");
    println!(
        "Total contributions this year: {}",
        style(streak.total_contributions).cyan()
    );

    Ok(())
}
