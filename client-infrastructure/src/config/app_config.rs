use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use client_domain::ClientConfig;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub request_timeout_seconds: u64,
    pub storage_path: String,
    pub device_key: String,
    pub interest_map_key: String,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            request_timeout_seconds: 15,
            storage_path: "./client-store.json".to_string(),
            device_key: "lightchurch.device_id".to_string(),
            interest_map_key: "lightchurch.interests".to_string(),
            user_agent: "lightchurch-client/0.1".to_string(),
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("LIGHTCHURCH_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        let base_dir = file_path.parent();
        if !file_path.exists() {
            warn!("config.toml not found, using defaults");
            let mut config = AppConfig::default();
            config.apply_env_overrides();
            config.resolve_paths(base_dir);
            config.normalize();
            config.validate()?;
            return Ok(config);
        }
        let content = fs::read_to_string(file_path).await?;
        let mut config: AppConfig = toml::from_str(&content)?;
        config.apply_env_overrides();
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        self.base_url = self.base_url.trim().trim_end_matches('/').to_string();
        self.device_key = self.device_key.trim().to_string();
        self.interest_map_key = self.interest_map_key.trim().to_string();
        self.user_agent = self.user_agent.trim().to_string();
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.storage_path = resolve_path(base, &self.storage_path);
    }

    pub fn validate(&self) -> Result<()> {
        let url = self
            .base_url
            .parse::<reqwest::Url>()
            .map_err(|err| anyhow!("invalid base_url: {}", err))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(anyhow!("base_url must be http or https"));
        }
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        if self.storage_path.trim().is_empty() {
            return Err(anyhow!("storage_path must not be empty"));
        }
        if self.device_key.is_empty() || self.interest_map_key.is_empty() {
            return Err(anyhow!("store keys must not be empty"));
        }
        if self.device_key == self.interest_map_key {
            return Err(anyhow!("device_key and interest_map_key must differ"));
        }
        if self.user_agent.is_empty() {
            return Err(anyhow!("user_agent must not be empty"));
        }
        Ok(())
    }

    pub fn to_client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            request_timeout_seconds: self.request_timeout_seconds,
            storage_path: self.storage_path.clone(),
            device_key: self.device_key.clone(),
            interest_map_key: self.interest_map_key.clone(),
            user_agent: self.user_agent.clone(),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("LIGHTCHURCH_BASE_URL") {
            self.base_url = value;
        }
        if let Ok(value) = env::var("LIGHTCHURCH_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
        if let Ok(value) = env::var("LIGHTCHURCH_STORAGE_PATH") {
            self.storage_path = value;
        }
        if let Ok(value) = env::var("LIGHTCHURCH_DEVICE_KEY") {
            self.device_key = value;
        }
        if let Ok(value) = env::var("LIGHTCHURCH_INTEREST_MAP_KEY") {
            self.interest_map_key = value;
        }
        if let Ok(value) = env::var("LIGHTCHURCH_USER_AGENT") {
            self.user_agent = value;
        }
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}
