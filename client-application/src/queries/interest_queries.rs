use std::collections::HashMap;

use tracing::warn;

use client_domain::InterestMarks;

use crate::state::ClientState;

// An unreadable or unparseable map reads as empty so the optimistic flow
// keeps working when persistence is gone.
pub async fn load_interest_marks(state: &ClientState) -> InterestMarks {
    let raw = match state.store.get(&state.config.interest_map_key).await {
        Ok(raw) => raw,
        Err(err) => {
            state.metrics.record_store_failure();
            warn!("interest marks unreadable, treating as empty: {:#}", err);
            return HashMap::new();
        }
    };
    let Some(raw) = raw else {
        return HashMap::new();
    };
    match serde_json::from_str(&raw) {
        Ok(marks) => marks,
        Err(err) => {
            warn!("interest marks corrupted, treating as empty: {}", err);
            HashMap::new()
        }
    }
}

pub async fn has_interest_mark(state: &ClientState, event_id: &str) -> bool {
    load_interest_marks(state).await.contains_key(event_id)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use client_domain::ports::LocalStore;

    use super::*;
    use crate::testing::{test_state, FailingStore, MemoryStore, RecordingPublisher, StubGateway};

    #[tokio::test]
    async fn missing_map_reads_as_empty() {
        let state = test_state(
            Arc::new(MemoryStore::default()),
            Arc::new(StubGateway::new()),
            Arc::new(RecordingPublisher::default()),
        );

        assert!(load_interest_marks(&state).await.is_empty());
        assert!(!has_interest_mark(&state, "1").await);
    }

    #[tokio::test]
    async fn corrupted_map_reads_as_empty() {
        let store = Arc::new(MemoryStore::default());
        let state = test_state(
            store.clone(),
            Arc::new(StubGateway::new()),
            Arc::new(RecordingPublisher::default()),
        );
        store
            .set(&state.config.interest_map_key, "{not json")
            .await
            .expect("seed store");

        assert!(load_interest_marks(&state).await.is_empty());
    }

    #[tokio::test]
    async fn unreadable_store_reads_as_empty_and_is_counted() {
        let state = test_state(
            Arc::new(FailingStore),
            Arc::new(StubGateway::new()),
            Arc::new(RecordingPublisher::default()),
        );

        assert!(load_interest_marks(&state).await.is_empty());
        assert_eq!(state.metrics.snapshot().store_failures, 1);
    }

    #[tokio::test]
    async fn persisted_marks_are_found_by_event_id() {
        let store = Arc::new(MemoryStore::default());
        let state = test_state(
            store.clone(),
            Arc::new(StubGateway::new()),
            Arc::new(RecordingPublisher::default()),
        );
        store
            .set(&state.config.interest_map_key, r#"{"17":1700000000000}"#)
            .await
            .expect("seed store");

        assert!(has_interest_mark(&state, "17").await);
        assert!(!has_interest_mark(&state, "18").await);
    }
}
