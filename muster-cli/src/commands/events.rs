//! List all events.

use anyhow::Result;
use chrono_tz::Tz;
use muster_core::Event;
use owo_colors::OwoColorize;

use super::report_skipped;
use crate::config::Config;

pub async fn run(config: &Config) -> Result<()> {
    let tz = config.timezone()?;
    let fetched = config.client().fetch_all_events().await?;
    report_skipped(&fetched.skipped);
    print_list(fetched.events, tz);
    Ok(())
}

/// Print events soonest first, one per line.
pub fn print_list(mut events: Vec<Event>, tz: Tz) {
    events.sort_by_key(|e| e.datetime);

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return;
    }

    for event in &events {
        let when = event.datetime.with_timezone(&tz).format("%Y-%m-%d %H:%M");
        println!(
            "{} {} @ {} {}",
            when,
            event.name.bold(),
            event.location,
            format!("[{}]", event.id).dimmed()
        );
    }
}
