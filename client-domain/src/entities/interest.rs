// Interest entities
// Device-local interest marks and the controller's observable state

use std::collections::HashMap;

use serde::Serialize;

// Event id to epoch-millisecond mark time; the timestamp is only an
// existence marker, nothing consults its value.
pub type InterestMarks = HashMap<String, i64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InterestSnapshot {
    pub interested: bool,
    pub count: u64,
    pub pending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterestChange {
    pub event_id: String,
    pub interested: bool,
}
