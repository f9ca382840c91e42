use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;
use tracing::debug;

use client_application::ops::InterestHub;
use client_application::{ClientState, Metrics};
use client_infrastructure::{AppConfig, HttpEventGateway, JsonFileStore};

pub struct AppContext {
    pub state: ClientState,
    pub hub: Arc<InterestHub>,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        let client_config = config.to_client_config();
        debug!(
            "using backend {} and store {}",
            client_config.base_url, client_config.storage_path
        );

        let store = Arc::new(JsonFileStore::new(&client_config.storage_path));
        let gateway = Arc::new(HttpEventGateway::new(&client_config)?);
        let hub = Arc::new(InterestHub::new());
        let metrics = Arc::new(Metrics::default());

        let state = ClientState {
            config: client_config,
            store,
            gateway,
            publisher: hub.clone(),
            metrics,
            device_id: Arc::new(RwLock::new(None)),
        };

        Ok(Self { state, hub })
    }
}
