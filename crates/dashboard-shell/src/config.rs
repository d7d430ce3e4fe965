// File: crates/dashboard-shell/src/config.rs
// Summary: Hub location and request timeout, with environment overrides.

use std::time::Duration;

use crate::error::ShellError;

pub const DEFAULT_HUB_URL: &str = "http://127.0.0.1:8890";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const HUB_URL_ENV: &str = "DASH_HUB_URL";
pub const TIMEOUT_ENV: &str = "DASH_TIMEOUT_SECS";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellConfig {
    pub hub_url: String,
    pub request_timeout: Duration,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            hub_url: DEFAULT_HUB_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ShellConfig {
    pub fn new(hub_url: impl Into<String>, request_timeout: Duration) -> Result<Self, ShellError> {
        let cfg = Self { hub_url: hub_url.into().trim_end_matches('/').to_string(), request_timeout };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Defaults overridden by `DASH_HUB_URL` and `DASH_TIMEOUT_SECS` when set.
    pub fn from_env() -> Result<Self, ShellError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ShellConfig::from_env`] with an injectable variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ShellError> {
        let base = Self::default();
        let hub_url = lookup(HUB_URL_ENV).unwrap_or(base.hub_url);
        let request_timeout = match lookup(TIMEOUT_ENV) {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| ShellError::InvalidConfig(format!("{TIMEOUT_ENV}={raw:?} is not a whole number")))?;
                Duration::from_secs(secs)
            }
            None => base.request_timeout,
        };
        Self::new(hub_url, request_timeout)
    }

    pub fn validate(&self) -> Result<(), ShellError> {
        if !(self.hub_url.starts_with("http://") || self.hub_url.starts_with("https://")) {
            return Err(ShellError::InvalidConfig(format!("hub url {:?} must be http(s)", self.hub_url)));
        }
        if self.request_timeout.is_zero() {
            return Err(ShellError::InvalidConfig("request timeout must be positive".into()));
        }
        Ok(())
    }
}
