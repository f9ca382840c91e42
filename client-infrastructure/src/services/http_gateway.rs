use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use client_domain::ports::EventGateway;
use client_domain::{ClientConfig, EventPayload, InterestAck};

// Registration posts the device id in the body; withdrawal sends it as a
// query parameter. Both shapes are fixed by the backend.
pub struct HttpEventGateway {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct InterestBody<'a> {
    device_id: &'a str,
}

#[derive(Deserialize, Default)]
struct InterestAckBody {
    #[serde(default)]
    interested_count: Option<u64>,
}

impl HttpEventGateway {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds.max(1)))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn events_url(&self) -> String {
        format!("{}/public/events", self.base_url)
    }

    fn event_url(&self, event_id: &str) -> String {
        format!("{}/public/events/{}", self.base_url, event_id)
    }

    fn interest_url(&self, event_id: &str) -> String {
        format!("{}/public/events/{}/interest", self.base_url, event_id)
    }
}

#[async_trait]
impl EventGateway for HttpEventGateway {
    async fn fetch_events(&self) -> Result<Vec<EventPayload>> {
        let response = self
            .client
            .get(self.events_url())
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn fetch_event(&self, event_id: &str) -> Result<EventPayload> {
        let response = self
            .client
            .get(self.event_url(event_id))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn register_interest(&self, event_id: &str, device_id: &str) -> Result<InterestAck> {
        let response = self
            .client
            .post(self.interest_url(event_id))
            .json(&InterestBody { device_id })
            .send()
            .await?
            .error_for_status()?;
        // an empty or unknown success body means no authoritative count
        let body = response
            .json::<InterestAckBody>()
            .await
            .unwrap_or_default();
        Ok(InterestAck {
            interested_count: body.interested_count,
        })
    }

    async fn withdraw_interest(&self, event_id: &str, device_id: &str) -> Result<()> {
        self.client
            .delete(self.interest_url(event_id))
            .query(&[("device_id", device_id)])
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
