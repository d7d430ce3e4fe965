// File: crates/dashboard-shell/src/client.rs
// Summary: A monitored machine as listed by the hub.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: u64,
    pub address: String,
}

impl Client {
    pub fn new(id: u64, address: impl Into<String>) -> Self {
        Self { id, address: address.into() }
    }

    /// Relative link to this client's detail page.
    pub fn detail_href(&self) -> String {
        format!("client-{}.html", self.id)
    }
}

/// Body of `GET /api/clients`.
#[derive(Debug, Deserialize, Serialize)]
pub(crate) struct ClientList {
    pub clients: Vec<Client>,
}
