//! Typed configuration from environment variables.
//!
//! Everything has a default; in local dev, call `dotenvy::dotenv().ok()`
//! before loading.

use std::path::PathBuf;

use chrono::Duration;

use crate::engine::EngineConfig;
use crate::error::{Error, Result};

#[derive(Debug)]
pub struct Config {
    /// Path of the JSON store file the CLI operates on.
    pub store_path: PathBuf,
    /// Fallback log filter when RUST_LOG is unset.
    pub log_level: String,
    /// Override for the 72h pending-escalation threshold.
    pub pending_escalation_hours: Option<i64>,
    /// Override for the 24h high-priority escalation threshold.
    pub high_priority_escalation_hours: Option<i64>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            store_path: std::env::var("CASEFLOW_STORE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("caseflow.json")),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            pending_escalation_hours: hours_var("CASEFLOW_PENDING_ESCALATION_HOURS")?,
            high_priority_escalation_hours: hours_var("CASEFLOW_HIGH_PRIORITY_ESCALATION_HOURS")?,
        })
    }

    /// Engine policies: defaults with any env overrides applied.
    pub fn engine_config(&self) -> EngineConfig {
        let mut config = EngineConfig::default();
        if let Some(hours) = self.pending_escalation_hours {
            config.escalation.pending_after = Duration::hours(hours);
        }
        if let Some(hours) = self.high_priority_escalation_hours {
            config.escalation.high_priority_after = Duration::hours(hours);
        }
        config
    }
}

fn hours_var(name: &str) -> Result<Option<i64>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| Error::Config(format!("{name} must be an integer hour count: {raw}"))),
        Err(_) => Ok(None),
    }
}
