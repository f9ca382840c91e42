// Client runtime configuration
// Built by infrastructure from file + environment, consumed read-only above

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub request_timeout_seconds: u64,
    pub storage_path: String,
    pub device_key: String,
    pub interest_map_key: String,
    pub user_agent: String,
}
