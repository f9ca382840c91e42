// Event lifecycle status resolution

use chrono::{DateTime, Utc};

use crate::value_objects::EventStatus;

// Precedence is order-sensitive: cancellation beats every time-based state,
// completion next, then the in-window check inclusive on both bounds. A
// missing bound takes part in no comparison and drops through to Upcoming.
pub fn resolve_status(
    cancelled_at: Option<DateTime<Utc>>,
    starts_at: Option<DateTime<Utc>>,
    ends_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> EventStatus {
    if cancelled_at.is_some() {
        return EventStatus::Cancelled;
    }
    if let Some(end) = ends_at {
        if now > end {
            return EventStatus::Completed;
        }
    }
    if let (Some(start), Some(end)) = (starts_at, ends_at) {
        if start <= now && now <= end {
            return EventStatus::Ongoing;
        }
    }
    if let Some(start) = starts_at {
        if now < start {
            return EventStatus::Upcoming;
        }
    }
    EventStatus::Upcoming
}
