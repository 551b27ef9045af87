//! Reminder trigger computation.
//!
//! Only the title/body and trigger instant are computed here; handing
//! them to a notification service is the caller's problem.

use chrono::{DateTime, Duration, Utc};

use crate::event::Event;

/// A reminder ready to hand to a notification scheduler.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub title: String,
    pub body: String,
    pub trigger: DateTime<Utc>,
}

impl Reminder {
    /// Reminder firing `lead` before the event starts.
    pub fn for_event(event: &Event, lead: Duration) -> Reminder {
        Reminder {
            title: "Event reminder".to_string(),
            body: format!("Reminder for your event \"{}\"", event.name),
            trigger: event.datetime - lead,
        }
    }
}

/// Reminders for every event whose trigger is still in the future,
/// ascending by trigger time.
pub fn upcoming(events: &[Event], now: DateTime<Utc>, lead: Duration) -> Vec<Reminder> {
    let mut reminders: Vec<Reminder> = events
        .iter()
        .map(|e| Reminder::for_event(e, lead))
        .filter(|r| r.trigger > now)
        .collect();
    reminders.sort_by_key(|r| r.trigger);
    reminders
}
