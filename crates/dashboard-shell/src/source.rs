// File: crates/dashboard-shell/src/source.rs
// Summary: Where clients and their samples come from: the hub over HTTP, or memory.

use std::collections::HashMap;

use async_trait::async_trait;
use chart_core::series::parse_json;
use chart_core::Sample;
use tracing::{debug, warn};

use crate::client::{Client, ClientList};
use crate::config::ShellConfig;
use crate::error::ShellError;

#[async_trait]
pub trait DataSource: Send + Sync {
    /// All clients currently connected to the hub.
    async fn list_clients(&self) -> Result<Vec<Client>, ShellError>;

    /// Recent samples for one client, newest first as the hub stores them.
    async fn get_samples(&self, id: u64) -> Result<Vec<Sample>, ShellError>;
}

#[derive(Clone, Debug)]
pub struct HttpDataSource {
    base: String,
    http: reqwest::Client,
}

impl HttpDataSource {
    pub fn new(config: &ShellConfig) -> Result<Self, ShellError> {
        config.validate()?;
        let http = reqwest::Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self { base: config.hub_url.trim_end_matches('/').to_string(), http })
    }

    pub fn base_url(&self) -> &str { &self.base }

    async fn get_text(&self, path: &str) -> Result<String, ShellError> {
        let url = format!("{}{}", self.base, path);
        debug!(%url, "fetching from hub");
        let response = self.http.get(&url).header("Accept", "application/json").send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "hub request failed");
            return Err(ShellError::Status { url, status: status.as_u16() });
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn list_clients(&self) -> Result<Vec<Client>, ShellError> {
        let body = self.get_text("/api/clients").await?;
        let list: ClientList = serde_json::from_str(&body).map_err(chart_core::ChartError::from)?;
        Ok(list.clients)
    }

    async fn get_samples(&self, id: u64) -> Result<Vec<Sample>, ShellError> {
        let body = self.get_text(&format!("/api/proxy/{id}")).await?;
        Ok(parse_json(&body)?)
    }
}

/// Fixed clients and samples held in memory; for tests and offline rendering.
#[derive(Clone, Debug, Default)]
pub struct MemoryDataSource {
    clients: Vec<Client>,
    samples: HashMap<u64, Vec<Sample>>,
}

impl MemoryDataSource {
    pub fn new() -> Self { Self::default() }

    /// Register a client with its samples (newest first).
    pub fn with_client(mut self, client: Client, samples: Vec<Sample>) -> Self {
        self.samples.insert(client.id, samples);
        self.clients.push(client);
        self
    }
}

#[async_trait]
impl DataSource for MemoryDataSource {
    async fn list_clients(&self) -> Result<Vec<Client>, ShellError> {
        Ok(self.clients.clone())
    }

    async fn get_samples(&self, id: u64) -> Result<Vec<Sample>, ShellError> {
        self.samples.get(&id).cloned().ok_or(ShellError::UnknownClient(id))
    }
}
