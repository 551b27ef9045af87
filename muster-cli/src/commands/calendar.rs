//! The month calendar view.

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use muster_core::calendar::{advance, bind_events, month_grid, Direction, PeriodUnit};
use owo_colors::OwoColorize;

use super::report_skipped;
use crate::config::Config;
use crate::render;

pub async fn run(
    config: &Config,
    date: Option<&str>,
    months: i32,
    weeks: i32,
    days: i32,
) -> Result<()> {
    let tz = config.timezone()?;

    let mut reference = match date {
        Some(s) => {
            let day = NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .with_context(|| format!("Invalid date '{}'. Expected YYYY-MM-DD", s))?;
            tz.from_local_datetime(&day.and_time(NaiveTime::MIN))
                .earliest()
                .with_context(|| format!("Date '{}' does not exist in {}", s, tz))?
        }
        None => Utc::now().with_timezone(&tz),
    };

    for (unit, steps) in [
        (PeriodUnit::Month, months),
        (PeriodUnit::Week, weeks),
        (PeriodUnit::Day, days),
    ] {
        let direction = if steps >= 0 {
            Direction::Forward
        } else {
            Direction::Backward
        };
        for _ in 0..steps.unsigned_abs() {
            reference = advance(reference, unit, direction);
        }
    }

    // A failed fetch degrades to an empty month, never an error exit
    let events = match config.client().fetch_all_events().await {
        Ok(fetched) => {
            report_skipped(&fetched.skipped);
            fetched.events
        }
        Err(err) => {
            eprintln!(
                "{}",
                format!("warning: could not fetch events: {err}").yellow()
            );
            Vec::new()
        }
    };

    let cells = bind_events(month_grid(reference), &events, tz);
    print!("{}", render::month(&cells, reference, tz));

    Ok(())
}
