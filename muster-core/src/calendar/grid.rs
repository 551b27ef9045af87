//! Month-grid layout.

use chrono::{DateTime, Datelike, NaiveDate};
use chrono_tz::Tz;

use crate::event::Event;

/// One grid position in a month view.
#[derive(Debug, Clone, PartialEq)]
pub enum CalendarCell {
    /// Leading padding before the 1st of the month. Carries no date
    /// and can never hold events.
    Blank,
    /// A specific day of the displayed month.
    Day {
        date: NaiveDate,
        events: Vec<Event>,
    },
}

impl CalendarCell {
    pub fn is_blank(&self) -> bool {
        matches!(self, CalendarCell::Blank)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            CalendarCell::Blank => None,
            CalendarCell::Day { date, .. } => Some(*date),
        }
    }

    /// Events bound to this cell (always empty for blanks).
    pub fn events(&self) -> &[Event] {
        match self {
            CalendarCell::Blank => &[],
            CalendarCell::Day { events, .. } => events,
        }
    }
}

/// Lay out the calendar cells for the month containing `reference`,
/// in the reference's timezone.
///
/// The sequence starts with one blank per weekday before the 1st
/// (Sunday-first convention) followed by one day cell per day of the
/// month. No trailing padding is added. Event lists start empty;
/// population is [`super::bind_events`]'s job.
pub fn month_grid(reference: DateTime<Tz>) -> Vec<CalendarCell> {
    let local = reference.date_naive();
    let first = NaiveDate::from_ymd_opt(local.year(), local.month(), 1).unwrap();

    let leading_blanks = first.weekday().num_days_from_sunday();
    let days = days_in_month(local.year(), local.month());

    let mut cells = Vec::with_capacity((leading_blanks + days) as usize);
    for _ in 0..leading_blanks {
        cells.push(CalendarCell::Blank);
    }
    for day in 1..=days {
        cells.push(CalendarCell::Day {
            date: NaiveDate::from_ymd_opt(local.year(), local.month(), day).unwrap(),
            events: Vec::new(),
        });
    }

    cells
}

/// Number of days in `(year, month)`, leap years included.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
    };
    (next_first - first).num_days() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Asia::Singapore;

    fn grid_for(year: i32, month: u32) -> Vec<CalendarCell> {
        // Mid-month afternoon; only year and month should matter
        let reference = Singapore
            .with_ymd_and_hms(year, month, 15, 14, 30, 0)
            .unwrap();
        month_grid(reference)
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 12), 31);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
    }

    #[test]
    fn test_grid_is_blanks_then_days() {
        // September 2025 starts on a Monday -> 1 leading blank
        let cells = grid_for(2025, 9);
        assert_eq!(cells.len(), 1 + 30);
        assert!(cells[0].is_blank());
        assert_eq!(
            cells[1].date(),
            Some(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap())
        );
        assert_eq!(
            cells.last().unwrap().date(),
            Some(NaiveDate::from_ymd_opt(2025, 9, 30).unwrap())
        );
    }

    #[test]
    fn test_sunday_first_month_has_no_blanks() {
        // January 1, 2023 is a Sunday
        let cells = grid_for(2023, 1);
        assert_eq!(cells.len(), 31);
        assert!(!cells[0].is_blank());
    }

    #[test]
    fn test_leap_february() {
        // February 1, 2024 is a Thursday -> 4 leading blanks
        let cells = grid_for(2024, 2);
        assert_eq!(cells.iter().filter(|c| c.is_blank()).count(), 4);
        assert_eq!(cells.len(), 4 + 29);
    }

    #[test]
    fn test_same_month_yields_identical_layout() {
        let a = grid_for(2025, 6);
        let b = month_grid(Singapore.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn test_blank_cells_carry_no_events() {
        for cell in grid_for(2025, 10) {
            if cell.is_blank() {
                assert!(cell.events().is_empty());
                assert_eq!(cell.date(), None);
            }
        }
    }
}
