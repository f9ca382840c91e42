// Shared test fakes for the port traits.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, bail};
use async_trait::async_trait;
use tokio::sync::RwLock;

use client_domain::ports::{EventGateway, InterestPublisher, LocalStore};
use client_domain::{ClientConfig, EventPayload, InterestAck, InterestChange};

use crate::metrics::Metrics;
use crate::state::ClientState;

pub(crate) fn test_config() -> ClientConfig {
    ClientConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        request_timeout_seconds: 3,
        storage_path: "./client-store.json".to_string(),
        device_key: "lightchurch.device_id".to_string(),
        interest_map_key: "lightchurch.interests".to_string(),
        user_agent: "lightchurch-client/test".to_string(),
    }
}

pub(crate) fn test_state(
    store: Arc<dyn LocalStore>,
    gateway: Arc<dyn EventGateway>,
    publisher: Arc<dyn InterestPublisher>,
) -> ClientState {
    ClientState {
        config: test_config(),
        store,
        gateway,
        publisher,
        metrics: Arc::new(Metrics::default()),
        device_id: Arc::new(RwLock::new(None)),
    }
}

#[derive(Default)]
pub(crate) struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

#[async_trait]
impl LocalStore for MemoryStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}

// Store where every operation fails, for the degraded-persistence paths.
pub(crate) struct FailingStore;

#[async_trait]
impl LocalStore for FailingStore {
    async fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
        Err(anyhow!("storage unavailable"))
    }

    async fn set(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
        Err(anyhow!("storage unavailable"))
    }

    async fn remove(&self, _key: &str) -> anyhow::Result<()> {
        Err(anyhow!("storage unavailable"))
    }
}

// Scripted gateway: seeded events, a fixed registration ack, an
// all-calls-fail mode. Calls are recorded as (event_id, device_id).
pub(crate) struct StubGateway {
    events: Mutex<Vec<EventPayload>>,
    ack: InterestAck,
    fail_remote: AtomicBool,
    register: Mutex<Vec<(String, String)>>,
    withdraw: Mutex<Vec<(String, String)>>,
}

impl StubGateway {
    pub(crate) fn new() -> Self {
        Self::with_ack(None)
    }

    pub(crate) fn with_ack(interested_count: Option<u64>) -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            ack: InterestAck { interested_count },
            fail_remote: AtomicBool::new(false),
            register: Mutex::new(Vec::new()),
            withdraw: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing() -> Self {
        let gateway = Self::new();
        gateway.fail_remote.store(true, Ordering::Relaxed);
        gateway
    }

    pub(crate) fn seed_events(&self, events: Vec<EventPayload>) {
        *self.events.lock().unwrap() = events;
    }

    pub(crate) fn register_calls(&self) -> Vec<(String, String)> {
        self.register.lock().unwrap().clone()
    }

    pub(crate) fn withdraw_calls(&self) -> Vec<(String, String)> {
        self.withdraw.lock().unwrap().clone()
    }

    fn check_remote(&self) -> anyhow::Result<()> {
        if self.fail_remote.load(Ordering::Relaxed) {
            bail!("backend unreachable");
        }
        Ok(())
    }
}

#[async_trait]
impl EventGateway for StubGateway {
    async fn fetch_events(&self) -> anyhow::Result<Vec<EventPayload>> {
        self.check_remote()?;
        Ok(self.events.lock().unwrap().clone())
    }

    async fn fetch_event(&self, event_id: &str) -> anyhow::Result<EventPayload> {
        self.check_remote()?;
        self.events
            .lock()
            .unwrap()
            .iter()
            .find(|payload| {
                payload
                    .id
                    .map(|id| id.to_string())
                    .is_some_and(|id| id == event_id)
            })
            .cloned()
            .ok_or_else(|| anyhow!("event {} not found", event_id))
    }

    async fn register_interest(
        &self,
        event_id: &str,
        device_id: &str,
    ) -> anyhow::Result<InterestAck> {
        self.register
            .lock()
            .unwrap()
            .push((event_id.to_string(), device_id.to_string()));
        self.check_remote()?;
        Ok(self.ack)
    }

    async fn withdraw_interest(&self, event_id: &str, device_id: &str) -> anyhow::Result<()> {
        self.withdraw
            .lock()
            .unwrap()
            .push((event_id.to_string(), device_id.to_string()));
        self.check_remote()?;
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct RecordingPublisher {
    changes: Mutex<Vec<InterestChange>>,
}

impl RecordingPublisher {
    pub(crate) fn changes(&self) -> Vec<InterestChange> {
        self.changes.lock().unwrap().clone()
    }
}

impl InterestPublisher for RecordingPublisher {
    fn publish(&self, change: InterestChange) {
        self.changes.lock().unwrap().push(change);
    }
}
