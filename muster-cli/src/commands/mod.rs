pub mod calendar;
pub mod event;
pub mod events;
pub mod my_events;
pub mod records;
pub mod remind;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use muster_store::DecodeError;
use owo_colors::OwoColorize;

/// Parse "YYYY-MM-DDTHH:MM" (seconds optional) as wall time in `tz`.
pub fn parse_local_datetime(s: &str, tz: Tz) -> Result<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .with_context(|| format!("Invalid datetime '{}'. Expected YYYY-MM-DDTHH:MM", s))?;

    let local = tz
        .from_local_datetime(&naive)
        .earliest()
        .with_context(|| format!("Datetime '{}' does not exist in {}", s, tz))?;

    Ok(local.with_timezone(&Utc))
}

/// Surface documents the store returned but we could not decode.
/// Non-fatal: the events that did decode are still shown.
pub fn report_skipped(skipped: &[DecodeError]) {
    for err in skipped {
        eprintln!("{}", format!("warning: skipped document: {err}").dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Asia::Singapore;

    #[test]
    fn test_parse_local_datetime_converts_to_utc() {
        let parsed = parse_local_datetime("2025-03-20T15:00", Singapore).unwrap();
        // Singapore is UTC+8
        assert_eq!(
            parsed,
            Utc.with_ymd_and_hms(2025, 3, 20, 7, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_local_datetime_accepts_seconds() {
        assert!(parse_local_datetime("2025-03-20T15:00:30", Singapore).is_ok());
    }

    #[test]
    fn test_parse_local_datetime_rejects_garbage() {
        assert!(parse_local_datetime("tomorrow-ish", Singapore).is_err());
        assert!(parse_local_datetime("2025-03-20", Singapore).is_err());
    }
}
