// config.rs
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Domain-separation tag mixed into the key-derivation chain.
pub const DEFAULT_SERVICE_TAG: &str = "de-notification-service";

/// Fixed backdating applied to `expireMillisecond` when deriving the
/// timestamp stage key.
pub const DEFAULT_BACKDATE_WINDOW_MS: i64 = 30_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub notification_secret: String,
    pub bind_address: String,
    pub service_tag: String,
    pub backdate_window_ms: i64,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Config {
            notification_secret: env::var("NOTIFICATION_SECRET")
                .map_err(|_| anyhow::anyhow!("NOTIFICATION_SECRET not set"))?,
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            service_tag: env::var("SERVICE_TAG")
                .unwrap_or_else(|_| DEFAULT_SERVICE_TAG.to_string()),
            backdate_window_ms: env::var("BACKDATE_WINDOW_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_BACKDATE_WINDOW_MS),
        })
    }
}
