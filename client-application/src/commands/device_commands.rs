use tracing::{debug, warn};

use client_domain::DeviceId;

use crate::state::ClientState;

// Never fails: when the store is unusable the generated id stays in the
// in-memory cache, so a degraded session still counts as one device.
pub async fn ensure_device_id(state: &ClientState) -> DeviceId {
    // writer lock for the whole lookup: two racing first calls must not
    // provision two different ids
    let mut cached = state.device_id.write().await;
    if let Some(device_id) = cached.as_ref() {
        return device_id.clone();
    }

    let persisted = match state.store.get(&state.config.device_key).await {
        Ok(raw) => raw.filter(|value| !value.trim().is_empty()),
        Err(err) => {
            state.metrics.record_store_failure();
            warn!("device id unreadable, provisioning a session id: {:#}", err);
            None
        }
    };

    let device_id = match persisted {
        Some(raw) => DeviceId(raw),
        None => {
            let generated = DeviceId::generate();
            match state
                .store
                .set(&state.config.device_key, generated.as_str())
                .await
            {
                Ok(()) => debug!("provisioned device id {}", generated.as_str()),
                Err(err) => {
                    state.metrics.record_store_failure();
                    warn!("device id write failed, keeping it in memory: {:#}", err);
                }
            }
            generated
        }
    };

    *cached = Some(device_id.clone());
    device_id
}
