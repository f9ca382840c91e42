use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;
use tracing::warn;

use client_domain::{current_millis, InterestChange, InterestMarks, InterestSnapshot};

use crate::commands::device_commands;
use crate::error::ClientError;
use crate::queries::interest_queries;
use crate::state::ClientState;

pub struct InterestController {
    state: ClientState,
    event_id: String,
    flag: RwLock<ToggleState>,
    // doubles as the single-flight latch: overlapping toggles are
    // rejected, not queued
    pending: AtomicBool,
}

#[derive(Debug, Clone, Copy)]
struct ToggleState {
    interested: bool,
    count: u64,
}

impl InterestController {
    pub async fn initialize(
        state: ClientState,
        event_id: &str,
        initial_interested: bool,
        initial_count: u64,
    ) -> Result<Self, ClientError> {
        let event_id = event_id.trim();
        if event_id.is_empty() {
            return Err(ClientError::BadRequest(
                "event_id must not be empty".to_string(),
            ));
        }

        // a persisted mark is authoritative on load: the backend is anonymous
        // and cannot echo per-device interest back
        let marks = interest_queries::load_interest_marks(&state).await;
        let interested = initial_interested || marks.contains_key(event_id);

        Ok(Self {
            state,
            event_id: event_id.to_string(),
            flag: RwLock::new(ToggleState {
                interested,
                count: initial_count,
            }),
            pending: AtomicBool::new(false),
        })
    }

    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    pub async fn snapshot(&self) -> InterestSnapshot {
        let flag = self.flag.read().await;
        InterestSnapshot {
            interested: flag.interested,
            count: flag.count,
            pending: self.pending.load(Ordering::Acquire),
        }
    }

    pub async fn toggle(&self) -> Result<InterestSnapshot, ClientError> {
        if self
            .pending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(ClientError::ToggleInFlight(self.event_id.clone()));
        }

        let result = self.toggle_latched().await;
        self.pending.store(false, Ordering::Release);

        match result {
            Ok(flag) => Ok(InterestSnapshot {
                interested: flag.interested,
                count: flag.count,
                pending: false,
            }),
            Err(err) => Err(err),
        }
    }

    async fn toggle_latched(&self) -> Result<ToggleState, ClientError> {
        // optimistic flip first; the view updates before any I/O happens
        let previous = {
            let mut flag = self.flag.write().await;
            let previous = *flag;
            if previous.interested {
                flag.interested = false;
                flag.count = previous.count.saturating_sub(1);
            } else {
                flag.interested = true;
                flag.count = previous.count.saturating_add(1);
            }
            previous
        };

        let device_id = device_commands::ensure_device_id(&self.state).await;
        let registering = !previous.interested;
        let outcome = if registering {
            self.state
                .gateway
                .register_interest(&self.event_id, device_id.as_str())
                .await
                .map(|ack| ack.interested_count)
        } else {
            self.state
                .gateway
                .withdraw_interest(&self.event_id, device_id.as_str())
                .await
                .map(|_| None)
        };

        match outcome {
            Ok(server_count) => {
                // registration may carry the authoritative count; withdrawal
                // never does, the optimistic decrement stands
                let committed = {
                    let mut flag = self.flag.write().await;
                    if let Some(count) = server_count {
                        flag.count = count;
                    }
                    *flag
                };
                if registering {
                    persist_mark(&self.state, &self.event_id).await;
                    self.state.metrics.record_registered();
                } else {
                    clear_mark(&self.state, &self.event_id).await;
                    self.state.metrics.record_withdrawn();
                }
                self.state.publisher.publish(InterestChange {
                    event_id: self.event_id.clone(),
                    interested: registering,
                });
                Ok(committed)
            }
            Err(err) => {
                {
                    let mut flag = self.flag.write().await;
                    *flag = previous;
                }
                self.state.metrics.record_rollback();
                warn!(
                    "interest toggle for event {} rolled back: {:#}",
                    self.event_id, err
                );
                Err(ClientError::Remote(err))
            }
        }
    }
}

// Both mark writers swallow failures: the toggle has already committed
// remotely by the time they run.

async fn persist_mark(state: &ClientState, event_id: &str) {
    let mut marks = interest_queries::load_interest_marks(state).await;
    marks.insert(event_id.to_string(), current_millis());
    store_marks(state, &marks).await;
}

async fn clear_mark(state: &ClientState, event_id: &str) {
    let mut marks = interest_queries::load_interest_marks(state).await;
    marks.remove(event_id);
    store_marks(state, &marks).await;
}

async fn store_marks(state: &ClientState, marks: &InterestMarks) {
    let payload = match serde_json::to_string(marks) {
        Ok(payload) => payload,
        Err(err) => {
            warn!("interest marks not serializable: {}", err);
            return;
        }
    };
    if let Err(err) = state
        .store
        .set(&state.config.interest_map_key, &payload)
        .await
    {
        state.metrics.record_store_failure();
        warn!("interest mark write failed, keeping in-memory state: {:#}", err);
    }
}
