//! Store-neutral event type.
//!
//! Events are fetched from the hosted document store, edited locally
//! (field replacement plus list and roster operations), and persisted
//! back as a full-document overwrite on explicit save.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A coordinated event (outing, activity, session).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Opaque, store-assigned identifier
    pub id: String,
    pub name: String,
    pub location: String,
    pub information: String,
    /// Absolute instant the event takes place
    pub datetime: DateTime<Utc>,
    /// Pick-up points offered to attendees (order is meaningful)
    pub meet_up_locations: Vec<String>,
    /// Things attendees should bring (order is meaningful)
    pub items_to_bring: Vec<String>,
    /// User ids of attendees
    pub participants: BTreeSet<String>,
    /// User ids of volunteer helpers
    pub volunteers: BTreeSet<String>,
}

impl Event {
    /// A fresh event with empty lists and rosters. The id is assigned
    /// by the store on insert; until then it is empty.
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        information: impl Into<String>,
        datetime: DateTime<Utc>,
    ) -> Event {
        Event {
            id: String::new(),
            name: name.into(),
            location: location.into(),
            information: information.into(),
            datetime,
            meet_up_locations: Vec::new(),
            items_to_bring: Vec::new(),
            participants: BTreeSet::new(),
            volunteers: BTreeSet::new(),
        }
    }

    /// Add a user to the participant roster. Returns false if they
    /// had already joined.
    pub fn join(&mut self, user_id: &str) -> bool {
        self.participants.insert(user_id.to_string())
    }

    /// Remove a user from the participant roster. Returns false if
    /// they were not on it.
    pub fn leave(&mut self, user_id: &str) -> bool {
        self.participants.remove(user_id)
    }

    pub fn add_volunteer(&mut self, user_id: &str) -> bool {
        self.volunteers.insert(user_id.to_string())
    }

    pub fn remove_volunteer(&mut self, user_id: &str) -> bool {
        self.volunteers.remove(user_id)
    }

    pub fn add_item_to_bring(&mut self, item: impl Into<String>) {
        self.items_to_bring.push(item.into());
    }

    /// Remove an item by value. Returns false if it was not listed.
    pub fn remove_item_to_bring(&mut self, item: &str) -> bool {
        let before = self.items_to_bring.len();
        self.items_to_bring.retain(|i| i != item);
        self.items_to_bring.len() != before
    }

    pub fn add_meet_up_location(&mut self, location: impl Into<String>) {
        self.meet_up_locations.push(location.into());
    }

    /// Remove a meet-up location by value. Returns false if it was
    /// not listed.
    pub fn remove_meet_up_location(&mut self, location: &str) -> bool {
        let before = self.meet_up_locations.len();
        self.meet_up_locations.retain(|l| l != location);
        self.meet_up_locations.len() != before
    }

    pub fn has_meet_up_location(&self, location: &str) -> bool {
        self.meet_up_locations.iter().any(|l| l == location)
    }
}
