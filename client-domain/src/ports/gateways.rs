use async_trait::async_trait;

use crate::entities::EventPayload;

// A registration ack may carry the authoritative aggregate count.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterestAck {
    pub interested_count: Option<u64>,
}

#[async_trait]
pub trait EventGateway: Send + Sync {
    async fn fetch_events(&self) -> anyhow::Result<Vec<EventPayload>>;
    async fn fetch_event(&self, event_id: &str) -> anyhow::Result<EventPayload>;
    async fn register_interest(
        &self,
        event_id: &str,
        device_id: &str,
    ) -> anyhow::Result<InterestAck>;
    async fn withdraw_interest(&self, event_id: &str, device_id: &str) -> anyhow::Result<()>;
}
