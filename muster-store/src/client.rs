//! HTTP client for the document store.
//!
//! One request per operation, awaited individually: no retries, no
//! cancellation, no request coordination. Callers that race fetches
//! get last-write-wins, same as the store's other clients.

use muster_core::{Event, EventRecord};
use reqwest::{Response, StatusCode};
use serde::Deserialize;

use crate::document::{DocumentList, EventDoc, RecordDoc};
use crate::error::{StoreError, StoreResult};
use crate::DecodeError;

/// Client for one store deployment.
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    base_url: String,
}

/// Result of a collection fetch: the events that decoded, plus the
/// decode failures of the ones that did not. Skipped documents are a
/// data-quality issue for the caller to surface, never a hard error.
#[derive(Debug)]
pub struct FetchedEvents {
    pub events: Vec<Event>,
    pub skipped: Vec<DecodeError>,
}

#[derive(Deserialize)]
struct InsertResponse {
    id: String,
}

impl StoreClient {
    pub fn new(base_url: impl Into<String>) -> StoreClient {
        StoreClient {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Fetch the whole events collection. The store does no date
    /// filtering; callers filter client-side.
    pub async fn fetch_all_events(&self) -> StoreResult<FetchedEvents> {
        let response = self.http.get(self.url("events")).send().await?;
        let list: DocumentList<EventDoc> = checked(response)?.json().await?;
        Ok(decode_events(list))
    }

    /// Fetch the events a user participates in (server-side filter).
    pub async fn fetch_events_of_user(&self, user_id: &str) -> StoreResult<FetchedEvents> {
        let response = self
            .http
            .get(self.url("events"))
            .query(&[("participant", user_id)])
            .send()
            .await?;
        let list: DocumentList<EventDoc> = checked(response)?.json().await?;
        Ok(decode_events(list))
    }

    pub async fn fetch_event(&self, event_id: &str) -> StoreResult<Event> {
        let response = self
            .http
            .get(self.url(&format!("events/{event_id}")))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::EventNotFound(event_id.to_string()));
        }

        let doc: EventDoc = checked(response)?.json().await?;
        Ok(doc.decode(event_id.to_string())?)
    }

    /// Insert a new event; returns the store-assigned id.
    pub async fn insert_event(&self, event: &Event) -> StoreResult<String> {
        let response = self
            .http
            .post(self.url("events"))
            .json(&EventDoc::from_event(event))
            .send()
            .await?;
        let inserted: InsertResponse = checked(response)?.json().await?;
        Ok(inserted.id)
    }

    /// Persist an edited event as a full-document overwrite.
    pub async fn update_event(&self, event: &Event) -> StoreResult<()> {
        let response = self
            .http
            .put(self.url(&format!("events/{}", event.id)))
            .json(&EventDoc::from_event(event))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::EventNotFound(event.id.clone()));
        }

        checked(response)?;
        Ok(())
    }

    /// Insert a performance record; returns the store-assigned id.
    pub async fn insert_record(&self, record: &EventRecord) -> StoreResult<String> {
        let response = self
            .http
            .post(self.url("eventRecords"))
            .json(&RecordDoc::from_record(record))
            .send()
            .await?;
        let inserted: InsertResponse = checked(response)?.json().await?;
        Ok(inserted.id)
    }

    /// Fetch records, optionally filtered by user and/or event.
    pub async fn fetch_records(
        &self,
        user_id: Option<&str>,
        event_id: Option<&str>,
    ) -> StoreResult<Vec<EventRecord>> {
        let mut request = self.http.get(self.url("eventRecords"));
        if let Some(user_id) = user_id {
            request = request.query(&[("userId", user_id)]);
        }
        if let Some(event_id) = event_id {
            request = request.query(&[("eventId", event_id)]);
        }

        let response = request.send().await?;
        let list: DocumentList<RecordDoc> = checked(response)?.json().await?;

        Ok(list
            .documents
            .into_iter()
            .map(|doc| doc.fields.decode(doc.id))
            .collect())
    }

    /// Update a record's reviewable fields (performance, remarks).
    pub async fn update_record(
        &self,
        record_id: &str,
        performance: &str,
        remarks: &str,
    ) -> StoreResult<()> {
        let response = self
            .http
            .patch(self.url(&format!("eventRecords/{record_id}")))
            .json(&serde_json::json!({
                "performance": performance,
                "remarks": remarks,
            }))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::RecordNotFound(record_id.to_string()));
        }

        checked(response)?;
        Ok(())
    }

    /// Delete a record. Events have no delete path; records do.
    pub async fn delete_record(&self, record_id: &str) -> StoreResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("eventRecords/{record_id}")))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::RecordNotFound(record_id.to_string()));
        }

        checked(response)?;
        Ok(())
    }
}

fn checked(response: Response) -> StoreResult<Response> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(StoreError::Status {
            status: response.status().as_u16(),
            url: response.url().to_string(),
        })
    }
}

fn decode_events(list: DocumentList<EventDoc>) -> FetchedEvents {
    let mut events = Vec::new();
    let mut skipped = Vec::new();

    for doc in list.documents {
        match doc.fields.decode(doc.id) {
            Ok(event) => events.push(event),
            Err(err) => skipped.push(err),
        }
    }

    FetchedEvents { events, skipped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = StoreClient::new("https://store.example.com/v1/");
        assert_eq!(
            client.url("events/abc"),
            "https://store.example.com/v1/events/abc"
        );
    }

    #[test]
    fn test_decode_events_partitions_bad_documents() {
        let json = r#"{
            "documents": [
                { "id": "ok", "name": "Walk", "datetime": { "seconds": 100, "nanos": 0 } },
                { "id": "bad", "name": "No date" }
            ]
        }"#;
        let list: DocumentList<EventDoc> = serde_json::from_str(json).unwrap();
        let fetched = decode_events(list);

        assert_eq!(fetched.events.len(), 1);
        assert_eq!(fetched.events[0].id, "ok");
        assert_eq!(
            fetched.skipped,
            vec![DecodeError::MissingTimestamp {
                id: "bad".to_string()
            }]
        );
    }
}
