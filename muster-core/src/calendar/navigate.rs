//! Period navigation for the displayed reference instant.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;

/// How far one navigation step moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodUnit {
    Month,
    Week,
    Day,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Move the reference instant one `unit` in `direction`.
///
/// `Month` lands on local midnight of day 1 of the adjacent month;
/// the day-of-month is reset, never carried (Jan 31 forward is Feb 1).
/// `Week` and `Day` shift by 7 or 1 local calendar days, keeping the
/// local wall time. Year boundaries are crossed transparently.
///
/// Pure: the caller rebuilds the grid and re-binds events afterwards.
pub fn advance(reference: DateTime<Tz>, unit: PeriodUnit, direction: Direction) -> DateTime<Tz> {
    let tz = reference.timezone();

    match unit {
        PeriodUnit::Month => {
            let local = reference.date_naive();
            let (year, month) = match direction {
                Direction::Forward if local.month() == 12 => (local.year() + 1, 1),
                Direction::Forward => (local.year(), local.month() + 1),
                Direction::Backward if local.month() == 1 => (local.year() - 1, 12),
                Direction::Backward => (local.year(), local.month() - 1),
            };
            let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
            resolve_local(tz, first.and_time(NaiveTime::MIN))
        }
        PeriodUnit::Week | PeriodUnit::Day => {
            let days = match unit {
                PeriodUnit::Week => 7,
                _ => 1,
            };
            let days = match direction {
                Direction::Forward => days,
                Direction::Backward => -days,
            };
            resolve_local(tz, reference.naive_local() + Duration::days(days))
        }
    }
}

/// Resolve a local wall time in `tz`. DST-ambiguous times take the
/// earliest reading; nonexistent ones fall back to the UTC reading.
fn resolve_local(tz: Tz, local: NaiveDateTime) -> DateTime<Tz> {
    tz.from_local_datetime(&local)
        .earliest()
        .unwrap_or_else(|| tz.from_utc_datetime(&local))
}
