use std::sync::Arc;

use tokio::sync::RwLock;

use client_domain::ports::{EventGateway, InterestPublisher, LocalStore};
use client_domain::{ClientConfig, DeviceId};

use crate::metrics::Metrics;

#[derive(Clone)]
pub struct ClientState {
    pub config: ClientConfig,
    pub store: Arc<dyn LocalStore>,
    pub gateway: Arc<dyn EventGateway>,
    pub publisher: Arc<dyn InterestPublisher>,
    pub metrics: Arc<Metrics>,
    // session-stable device id, kept in memory so a broken store cannot
    // mint a new identity per call
    pub device_id: Arc<RwLock<Option<DeviceId>>>,
}
