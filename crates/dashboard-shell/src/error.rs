// File: crates/dashboard-shell/src/error.rs
// Summary: Errors raised while talking to the hub or navigating between views.

use chart_core::ChartError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("request to hub failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("hub answered {status} for {url}")]
    Status { url: String, status: u16 },
    #[error("malformed hub payload: {0}")]
    Payload(#[from] ChartError),
    #[error("unknown client id {0}")]
    UnknownClient(u64),
    #[error("invalid shell config: {0}")]
    InvalidConfig(String),
}
