use anyhow::anyhow;
use tracing::{error, warn};

use client_domain::EventSummary;

use crate::error::ClientError;
use crate::state::ClientState;

pub async fn list_events(state: &ClientState) -> Result<Vec<EventSummary>, ClientError> {
    let payloads = state.gateway.fetch_events().await.map_err(|err| {
        error!("failed to fetch public events: {:#}", err);
        ClientError::Remote(err)
    })?;

    let total = payloads.len();
    let summaries: Vec<EventSummary> = payloads
        .iter()
        .filter_map(EventSummary::from_payload)
        .collect();
    if summaries.len() < total {
        warn!(
            "dropped {} event(s) without a usable id",
            total - summaries.len()
        );
    }
    Ok(summaries)
}

pub async fn get_event(state: &ClientState, event_id: &str) -> Result<EventSummary, ClientError> {
    let event_id = event_id.trim();
    if event_id.is_empty() {
        return Err(ClientError::BadRequest(
            "event_id must not be empty".to_string(),
        ));
    }

    let payload = state.gateway.fetch_event(event_id).await.map_err(|err| {
        error!("failed to fetch event {}: {:#}", event_id, err);
        ClientError::Remote(err)
    })?;

    EventSummary::from_payload(&payload)
        .ok_or_else(|| ClientError::Remote(anyhow!("event {} payload carries no id", event_id)))
}
