//! Storefront configuration (environment variables with defaults).

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use pyroshop_observability::LogFormat;

pub const ENV_DATA_DIR: &str = "PYROSHOP_DATA_DIR";
pub const ENV_CHECKOUT_DELAY_MS: &str = "PYROSHOP_CHECKOUT_DELAY_MS";
pub const ENV_LOG_FORMAT: &str = "PYROSHOP_LOG_FORMAT";

const DEFAULT_CHECKOUT_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory holding the persisted cart.
    pub data_dir: PathBuf,
    /// Simulated payment processing time.
    pub checkout_delay: Duration,
    pub log_format: LogFormat,
}

impl StorefrontConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// Unparseable values fall back to their defaults with a warning; only a
    /// missing data directory with no OS default is an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let data_dir = match lookup(ENV_DATA_DIR).filter(|v| !v.trim().is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir()?,
        };

        let checkout_delay = match lookup(ENV_CHECKOUT_DELAY_MS) {
            None => DEFAULT_CHECKOUT_DELAY,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) => Duration::from_millis(ms),
                Err(err) => {
                    tracing::warn!(value = %raw, error = %err, "{ENV_CHECKOUT_DELAY_MS} is not a number; using default");
                    DEFAULT_CHECKOUT_DELAY
                }
            },
        };

        let log_format = match lookup(ENV_LOG_FORMAT) {
            None => LogFormat::default(),
            Some(raw) => raw.parse().unwrap_or_else(|err: String| {
                tracing::warn!(error = %err, "{ENV_LOG_FORMAT} invalid; using json");
                LogFormat::default()
            }),
        };

        Ok(Self {
            data_dir,
            checkout_delay,
            log_format,
        })
    }
}

fn default_data_dir() -> anyhow::Result<PathBuf> {
    let base = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .context("failed to resolve OS app data directory - tried data_dir() and home_dir()/.local/share")?;

    Ok(base.join("pyroshop"))
}
