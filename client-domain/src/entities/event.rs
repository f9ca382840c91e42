// Event entities
// Wire payload returned by the backend plus the projection the client consumes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::resolve_status;
use crate::utils::parse_datetime_lenient;
use crate::value_objects::EventStatus;

// Raw event shape as the public API returns it; never trusted to be complete.
#[derive(Debug, Clone, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub start_datetime: Option<String>,
    #[serde(default)]
    pub end_datetime: Option<String>,
    #[serde(default)]
    pub cancelled_at: Option<String>,
    #[serde(default)]
    pub interested_count: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventSummary {
    pub event_id: String,
    pub title: String,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub interested_count: u64,
}

impl EventSummary {
    // An event without an id cannot be keyed or toggled.
    pub fn from_payload(payload: &EventPayload) -> Option<Self> {
        let id = payload.id?;
        Some(Self {
            event_id: id.to_string(),
            title: payload.title.clone().unwrap_or_default(),
            starts_at: parse_datetime_lenient(payload.start_datetime.as_deref()),
            ends_at: parse_datetime_lenient(payload.end_datetime.as_deref()),
            cancelled_at: parse_datetime_lenient(payload.cancelled_at.as_deref()),
            interested_count: payload.interested_count.unwrap_or(0),
        })
    }

    // Computed fresh on every call; time-dependent, never cached on the summary.
    pub fn status_at(&self, now: DateTime<Utc>) -> EventStatus {
        resolve_status(self.cancelled_at, self.starts_at, self.ends_at, now)
    }

    pub fn status_now(&self) -> EventStatus {
        self.status_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_keeps_string_id_and_defaults() {
        let payload = EventPayload {
            id: Some(42),
            title: None,
            start_datetime: Some("2025-01-10T10:00".to_string()),
            end_datetime: Some("not a timestamp".to_string()),
            cancelled_at: None,
            interested_count: None,
        };
        let summary = EventSummary::from_payload(&payload).expect("summary");
        assert_eq!(summary.event_id, "42");
        assert_eq!(summary.title, "");
        assert!(summary.starts_at.is_some());
        assert!(summary.ends_at.is_none());
        assert!(summary.cancelled_at.is_none());
        assert_eq!(summary.interested_count, 0);
    }

    #[test]
    fn projection_rejects_payload_without_id() {
        let payload = EventPayload {
            id: None,
            title: Some("Easter service".to_string()),
            start_datetime: None,
            end_datetime: None,
            cancelled_at: None,
            interested_count: Some(3),
        };
        assert!(EventSummary::from_payload(&payload).is_none());
    }
}
