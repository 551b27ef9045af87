//! Event placement into day cells.

use chrono_tz::Tz;

use super::grid::CalendarCell;
use crate::event::Event;

/// Place `events` into the day cells whose calendar day matches the
/// event's `datetime` viewed in `tz`.
///
/// Events outside the displayed month bind nowhere; blanks are left
/// untouched. Within a cell, events end up ascending by `datetime`
/// with ties kept in input order. Scans cells x events, which is fine
/// at a venue calendar's volumes.
pub fn bind_events(mut cells: Vec<CalendarCell>, events: &[Event], tz: Tz) -> Vec<CalendarCell> {
    for cell in &mut cells {
        let CalendarCell::Day { date, events: bound } = cell else {
            continue;
        };

        for event in events {
            if event.datetime.with_timezone(&tz).date_naive() == *date {
                bound.push(event.clone());
            }
        }

        // Stable, so input order breaks datetime ties
        bound.sort_by_key(|e| e.datetime);
    }

    cells
}
