//! HTTP client for the guestlist backend.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use guestlist_core::{AttendanceCounts, Event, RsvpStatus, UserIdentity};

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// HTTP client for the guestlist backend.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

// Request/response types matching the backend API

#[derive(Serialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub date_iso: String,
    pub location: String,
    pub cover_image_url: String,
}

#[derive(Deserialize)]
pub struct CreateEventResponse {
    pub id: Option<String>,
}

/// An event as the backend sends it. Identifier and title may be
/// missing; such a payload does not count as a usable event.
#[derive(Deserialize)]
pub struct EventPayload {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub date_iso: Option<String>,
    pub location: Option<String>,
    pub cover_image_url: Option<String>,
}

impl EventPayload {
    /// Convert into a usable `Event`, requiring an id and a title.
    pub fn into_event(self) -> Option<Event> {
        Some(Event {
            id: self.id?,
            title: self.title?,
            description: self.description,
            date_iso: self.date_iso.unwrap_or_default(),
            location: self.location,
            cover_image_url: self.cover_image_url,
        })
    }
}

#[derive(Deserialize)]
struct RsvpResponse {
    status: RsvpStatus,
}

#[derive(Serialize)]
pub struct RsvpRequest {
    pub status: RsvpStatus,
    pub user_id: String,
    pub user_name: String,
}

impl Client {
    /// Build a client against `GUESTLIST_BACKEND_URL`, defaulting to the
    /// local backend.
    pub fn from_env() -> Self {
        let base_url = std::env::var("GUESTLIST_BACKEND_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn new(base_url: String) -> Self {
        Client {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// POST /api/events
    ///
    /// Returns the created event's id, or `None` when the backend
    /// answered without one.
    pub async fn create_event(&self, req: &CreateEventRequest) -> Result<Option<String>> {
        let resp = self
            .http
            .post(format!("{}/api/events", self.base_url))
            .json(req)
            .send()
            .await
            .context("Failed to reach the backend")?;

        let created: CreateEventResponse = resp
            .json()
            .await
            .context("Failed to decode event creation response")?;

        Ok(created.id)
    }

    /// GET /api/events/:id
    ///
    /// Returns `None` when the payload lacks an id or title.
    pub async fn get_event(&self, event_id: &str) -> Result<Option<Event>> {
        let resp = self
            .http
            .get(format!("{}/api/events/{}", self.base_url, event_id))
            .send()
            .await
            .context("Failed to reach the backend")?;

        let payload: EventPayload = resp
            .json()
            .await
            .context("Failed to decode event response")?;

        Ok(payload.into_event())
    }

    /// GET /api/events/:id/counts
    pub async fn get_counts(&self, event_id: &str) -> Result<AttendanceCounts> {
        let resp = self
            .http
            .get(format!("{}/api/events/{}/counts", self.base_url, event_id))
            .send()
            .await
            .context("Failed to reach the backend")?;

        resp.json()
            .await
            .context("Failed to decode counts response")
    }

    /// GET /api/events/:id/rsvp/:user_id
    ///
    /// A non-success status or an undecodable body means no RSVP yet.
    pub async fn get_rsvp(&self, event_id: &str, user_id: &str) -> Result<Option<RsvpStatus>> {
        let resp = self
            .http
            .get(format!(
                "{}/api/events/{}/rsvp/{}",
                self.base_url, event_id, user_id
            ))
            .send()
            .await
            .context("Failed to reach the backend")?;

        if !resp.status().is_success() {
            return Ok(None);
        }

        match resp.json::<RsvpResponse>().await {
            Ok(rsvp) => Ok(Some(rsvp.status)),
            Err(_) => Ok(None),
        }
    }

    /// POST /api/events/:id/rsvp
    ///
    /// The response body is not consumed; only a transport failure is an
    /// error.
    pub async fn set_rsvp(
        &self,
        event_id: &str,
        user: &UserIdentity,
        status: RsvpStatus,
    ) -> Result<()> {
        self.http
            .post(format!("{}/api/events/{}/rsvp", self.base_url, event_id))
            .json(&RsvpRequest {
                status,
                user_id: user.id.clone(),
                user_name: user.name.clone(),
            })
            .send()
            .await
            .context("Failed to reach the backend")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_without_id_is_unusable() {
        let payload: EventPayload = serde_json::from_str(r#"{"title": "Picnic"}"#).unwrap();
        assert!(payload.into_event().is_none());
    }

    #[test]
    fn payload_without_title_is_unusable() {
        let payload: EventPayload = serde_json::from_str(r#"{"id": "evt-1"}"#).unwrap();
        assert!(payload.into_event().is_none());
    }

    #[test]
    fn full_payload_converts() {
        let payload: EventPayload = serde_json::from_str(
            r#"{
                "id": "evt-1",
                "title": "Picnic",
                "description": "Bring a blanket",
                "date_iso": "2025-03-20T15:00:00Z",
                "location": "The park",
                "cover_image_url": "https://example.com/cover.jpg"
            }"#,
        )
        .unwrap();

        let event = payload.into_event().unwrap();
        assert_eq!(event.id, "evt-1");
        assert_eq!(event.title, "Picnic");
        assert_eq!(event.date_iso, "2025-03-20T15:00:00Z");
        assert_eq!(event.location.as_deref(), Some("The park"));
    }

    #[test]
    fn rsvp_request_wire_format() {
        let body = serde_json::to_value(RsvpRequest {
            status: RsvpStatus::NotGoing,
            user_id: "u-1".to_string(),
            user_name: "Guest".to_string(),
        })
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "status": "not_going",
                "user_id": "u-1",
                "user_name": "Guest"
            })
        );
    }

    #[test]
    fn create_event_request_wire_format() {
        let body = serde_json::to_value(CreateEventRequest {
            title: "Picnic".to_string(),
            description: "Bring a blanket".to_string(),
            date_iso: "2025-03-20T15:00:00Z".to_string(),
            location: "The park".to_string(),
            cover_image_url: "https://example.com/cover.jpg".to_string(),
        })
        .unwrap();

        let keys = body.as_object().unwrap();
        for key in [
            "title",
            "description",
            "date_iso",
            "location",
            "cover_image_url",
        ] {
            assert!(keys.contains_key(key), "missing key {}", key);
        }
    }
}
