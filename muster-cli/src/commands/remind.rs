//! Upcoming reminder triggers.

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use muster_core::reminder;
use owo_colors::OwoColorize;

use super::report_skipped;
use crate::config::Config;

pub async fn run(config: &Config, lead: &str) -> Result<()> {
    let tz = config.timezone()?;

    let lead = humantime::parse_duration(lead)
        .with_context(|| format!("Invalid lead time '{}'. Try \"45m\" or \"2h\"", lead))?;
    let lead = Duration::from_std(lead).context("Lead time is too large")?;

    let fetched = config.client().fetch_all_events().await?;
    report_skipped(&fetched.skipped);

    let reminders = reminder::upcoming(&fetched.events, Utc::now(), lead);
    if reminders.is_empty() {
        println!("{}", "No upcoming reminders".dimmed());
        return Ok(());
    }

    for reminder in &reminders {
        println!(
            "{} {}",
            reminder.trigger.with_timezone(&tz).format("%Y-%m-%d %H:%M"),
            reminder.body
        );
    }

    Ok(())
}
