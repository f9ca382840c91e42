use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::warn;

use client_domain::ports::LocalStore;

// One flat JSON object of string keys and values, read and rewritten
// wholesale per mutation. A corrupt file reads as empty and is replaced by
// the next write; everything it holds the client can regrow.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_all(&self) -> anyhow::Result<HashMap<String, String>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(err) => return Err(err.into()),
        };
        match serde_json::from_str(&content) {
            Ok(values) => Ok(values),
            Err(err) => {
                warn!(
                    "store file {} is corrupt, starting empty: {}",
                    self.path.display(),
                    err
                );
                Ok(HashMap::new())
            }
        }
    }

    async fn write_all(&self, values: &HashMap<String, String>) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let content = serde_json::to_string_pretty(values)?;
        fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl LocalStore for JsonFileStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.read_all().await?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut values = self.read_all().await?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values).await
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        let mut values = self.read_all().await?;
        values.remove(key);
        self.write_all(&values).await
    }
}
