//! Terminal rendering of the month grid.

use chrono::{DateTime, Datelike};
use chrono_tz::Tz;
use muster_core::calendar::CalendarCell;
use owo_colors::OwoColorize;

const DAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const CELL_WIDTH: usize = 4;

/// Render the populated cells as a 7-column month view followed by a
/// day-by-day listing of the bound events.
pub fn month(cells: &[CalendarCell], reference: DateTime<Tz>, tz: Tz) -> String {
    let mut lines = Vec::new();

    lines.push(reference.format("%B %Y").to_string().bold().to_string());
    lines.push(
        DAY_HEADERS
            .iter()
            .map(|d| format!("{:>CELL_WIDTH$}", d))
            .collect::<Vec<_>>()
            .join(""),
    );

    // Cells are already week-aligned: index 0 is a Sunday column
    let mut row = String::new();
    for (i, cell) in cells.iter().enumerate() {
        match cell {
            CalendarCell::Blank => row.push_str(&" ".repeat(CELL_WIDTH)),
            CalendarCell::Day { date, events } => {
                if events.is_empty() {
                    row.push_str(&format!("{:>CELL_WIDTH$}", date.day()));
                } else {
                    row.push_str(&format!("{:>3}{}", date.day(), "*".green()));
                }
            }
        }
        if (i + 1) % 7 == 0 {
            lines.push(std::mem::take(&mut row));
        }
    }
    if !row.is_empty() {
        lines.push(row);
    }

    for cell in cells {
        let events = cell.events();
        let Some(date) = cell.date() else { continue };
        if events.is_empty() {
            continue;
        }

        lines.push(String::new());
        lines.push(date.format("%a %b %-d").to_string().bold().to_string());
        for event in events {
            let time = event.datetime.with_timezone(&tz).format("%H:%M");
            lines.push(format!(
                "  {} {} {}",
                time,
                event.name,
                format!("[{}]", event.id).dimmed()
            ));
        }
    }

    lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Asia::Singapore;
    use muster_core::calendar::{bind_events, month_grid};
    use muster_core::Event;

    #[test]
    fn test_grid_rows_are_week_aligned() {
        // February 2024: 4 leading blanks, 29 days
        let reference = Singapore.with_ymd_and_hms(2024, 2, 10, 12, 0, 0).unwrap();
        let out = month(&month_grid(reference), reference, Singapore);
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].contains("February 2024"));
        assert_eq!(lines[1], " Sun Mon Tue Wed Thu Fri Sat");
        // First week: 4 blank cells, then days 1..3
        assert_eq!(lines[2], "                   1   2   3");
        // 4 + 29 cells = 4 full weeks + 5 leftover cells
        assert_eq!(lines.len(), 2 + 5);
        assert_eq!(lines.last().unwrap().trim_start(), "25  26  27  28  29");
    }

    #[test]
    fn test_days_with_events_are_listed() {
        let reference = Singapore.with_ymd_and_hms(2025, 9, 1, 8, 0, 0).unwrap();
        let mut event = Event::new(
            "Art Jam",
            "Studio",
            "",
            // 02:00 UTC = 10:00 in Singapore
            chrono::Utc.with_ymd_and_hms(2025, 9, 5, 2, 0, 0).unwrap(),
        );
        event.id = "ev-9".to_string();

        let cells = bind_events(month_grid(reference), &[event], Singapore);
        let out = month(&cells, reference, Singapore);

        assert!(out.contains("Fri Sep 5"));
        assert!(out.contains("10:00 Art Jam"));
    }
}
