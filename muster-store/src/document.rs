//! Wire documents and their decoding.
//!
//! Store documents use camelCase field names and represent instants
//! as a `{ seconds, nanos }` pair. Decoding normalizes every optional
//! list to an empty one and turns a missing or out-of-range timestamp
//! into a typed [`DecodeError`] instead of a panic; the document in
//! question is excluded and the caller decides how to surface it.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use muster_core::{Event, EventRecord};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A document failed to decode into a core type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("event {id}: missing datetime field")]
    MissingTimestamp { id: String },

    #[error("event {id}: timestamp out of range ({seconds}s, {nanos}ns)")]
    InvalidTimestamp { id: String, seconds: i64, nanos: u32 },
}

/// Store timestamp: whole seconds since the epoch plus a nanosecond
/// remainder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanos: u32,
}

impl Timestamp {
    pub fn to_instant(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.seconds, self.nanos)
    }

    pub fn from_instant(instant: DateTime<Utc>) -> Timestamp {
        Timestamp {
            seconds: instant.timestamp(),
            nanos: instant.timestamp_subsec_nanos(),
        }
    }
}

/// A raw event document as the store returns it. The id travels
/// outside the fields (in the path or the enclosing list entry).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDoc {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub information: String,
    pub datetime: Option<Timestamp>,
    #[serde(default)]
    pub meet_up_locations: Vec<String>,
    #[serde(default)]
    pub items_to_bring: Vec<String>,
    #[serde(default)]
    pub participants: BTreeSet<String>,
    #[serde(default)]
    pub volunteers: BTreeSet<String>,
}

impl EventDoc {
    /// Decode into a core event, attaching the store-assigned id.
    pub fn decode(self, id: String) -> Result<Event, DecodeError> {
        let timestamp = self
            .datetime
            .ok_or_else(|| DecodeError::MissingTimestamp { id: id.clone() })?;

        let datetime = timestamp
            .to_instant()
            .ok_or(DecodeError::InvalidTimestamp {
                id: id.clone(),
                seconds: timestamp.seconds,
                nanos: timestamp.nanos,
            })?;

        Ok(Event {
            id,
            name: self.name,
            location: self.location,
            information: self.information,
            datetime,
            meet_up_locations: self.meet_up_locations,
            items_to_bring: self.items_to_bring,
            participants: self.participants,
            volunteers: self.volunteers,
        })
    }

    /// Wire form of an event, for insert and full-document overwrite.
    pub fn from_event(event: &Event) -> EventDoc {
        EventDoc {
            name: event.name.clone(),
            location: event.location.clone(),
            information: event.information.clone(),
            datetime: Some(Timestamp::from_instant(event.datetime)),
            meet_up_locations: event.meet_up_locations.clone(),
            items_to_bring: event.items_to_bring.clone(),
            participants: event.participants.clone(),
            volunteers: event.volunteers.clone(),
        }
    }
}

/// A raw performance-record document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDoc {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub event_id: String,
    #[serde(default)]
    pub performance: String,
    #[serde(default)]
    pub remarks: String,
}

impl RecordDoc {
    pub fn decode(self, id: String) -> EventRecord {
        EventRecord {
            id,
            user_id: self.user_id,
            event_id: self.event_id,
            performance: self.performance,
            remarks: self.remarks,
        }
    }

    pub fn from_record(record: &EventRecord) -> RecordDoc {
        RecordDoc {
            user_id: record.user_id.clone(),
            event_id: record.event_id.clone(),
            performance: record.performance.clone(),
            remarks: record.remarks.clone(),
        }
    }
}

/// One entry of a collection listing: store-assigned id plus the
/// document fields.
#[derive(Debug, Deserialize)]
pub struct Document<T> {
    pub id: String,
    #[serde(flatten)]
    pub fields: T,
}

/// Collection listing response.
#[derive(Debug, Deserialize)]
pub struct DocumentList<T> {
    #[serde(default = "Vec::new")]
    pub documents: Vec<Document<T>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_decode_full_document() {
        let json = r#"{
            "name": "Beach Cleanup",
            "location": "East Coast Park",
            "information": "Bring sunscreen",
            "datetime": { "seconds": 1742454000, "nanos": 500000000 },
            "meetUpLocations": ["Bedok MRT", "Tanah Merah MRT"],
            "itemsToBring": ["gloves"],
            "participants": ["alice", "bob"],
            "volunteers": ["carol"]
        }"#;

        let doc: EventDoc = serde_json::from_str(json).unwrap();
        let event = doc.decode("ev-1".to_string()).unwrap();

        assert_eq!(event.id, "ev-1");
        assert_eq!(event.datetime.timestamp(), 1742454000);
        assert_eq!(event.datetime.timestamp_subsec_nanos(), 500000000);
        assert_eq!(event.meet_up_locations, vec!["Bedok MRT", "Tanah Merah MRT"]);
        assert!(event.participants.contains("bob"));
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let json = r#"{
            "name": "Movie Night",
            "datetime": { "seconds": 1742454000, "nanos": 0 }
        }"#;

        let doc: EventDoc = serde_json::from_str(json).unwrap();
        let event = doc.decode("ev-2".to_string()).unwrap();

        assert!(event.meet_up_locations.is_empty());
        assert!(event.items_to_bring.is_empty());
        assert!(event.participants.is_empty());
        assert!(event.volunteers.is_empty());
        assert_eq!(event.location, "");
    }

    #[test]
    fn test_missing_timestamp_is_a_typed_error() {
        let doc: EventDoc = serde_json::from_str(r#"{ "name": "No date" }"#).unwrap();
        assert_eq!(
            doc.decode("ev-3".to_string()),
            Err(DecodeError::MissingTimestamp {
                id: "ev-3".to_string()
            })
        );
    }

    #[test]
    fn test_out_of_range_timestamp_is_a_typed_error() {
        let doc = EventDoc {
            name: "Far future".to_string(),
            datetime: Some(Timestamp {
                seconds: i64::MAX,
                nanos: 0,
            }),
            ..EventDoc::default()
        };
        assert!(matches!(
            doc.decode("ev-4".to_string()),
            Err(DecodeError::InvalidTimestamp { .. })
        ));
    }

    #[test]
    fn test_event_wire_round_trip() {
        let mut event = Event::new(
            "Kayaking",
            "Kallang",
            "",
            Utc.with_ymd_and_hms(2025, 6, 1, 2, 30, 0).unwrap(),
        );
        event.id = "ev-5".to_string();
        event.join("alice");
        event.add_item_to_bring("dry bag");

        let doc = EventDoc::from_event(&event);
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("\"itemsToBring\""), "wire names are camelCase: {json}");

        let back: EventDoc = serde_json::from_str(&json).unwrap();
        assert_eq!(back.decode("ev-5".to_string()).unwrap(), event);
    }

    #[test]
    fn test_document_list_with_ids() {
        let json = r#"{
            "documents": [
                { "id": "r-1", "userId": "alice", "eventId": "ev-1", "performance": "Great", "remarks": "" }
            ]
        }"#;
        let list: DocumentList<RecordDoc> = serde_json::from_str(json).unwrap();
        assert_eq!(list.documents.len(), 1);
        let record = list.documents[0].fields.clone().decode(list.documents[0].id.clone());
        assert_eq!(record.id, "r-1");
        assert_eq!(record.user_id, "alice");
    }
}
