//! The month-grid calendar model.
//!
//! Three pure steps, all driven by the caller:
//! 1. [`month_grid`] lays out the cells for the month containing a
//!    reference instant.
//! 2. [`bind_events`] places events into day cells by calendar-day
//!    equality.
//! 3. [`advance`] moves the reference instant by month, week, or day.
//!
//! Every "calendar day" comparison uses a single viewer timezone
//! (`chrono_tz::Tz`) carried in the reference instant or passed
//! explicitly. The grid owns no state; the caller holds the reference
//! instant and rebuilds from scratch after every change.

mod bind;
mod grid;
mod navigate;

pub use bind::bind_events;
pub use grid::{month_grid, CalendarCell};
pub use navigate::{advance, Direction, PeriodUnit};
