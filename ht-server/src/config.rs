use crate::error::{Result as ServerErrorResult, ServerError};

use ht_store::StoreConfig;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use log::LevelFilter;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_STORE_TIMEOUT_SECS: u64 = 10;

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (default: 0.0.0.0:3000)
    pub bind_addr: SocketAddr,

    /// Remote store connection settings, passed explicitly into the client
    pub store: StoreConfig,

    /// Log level (default: info)
    pub log_level: LevelFilter,

    /// Enable colored logs (default: true)
    pub log_colored: bool,

    /// Optional log file path; None logs to stdout
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> ServerErrorResult<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        let bind_addr_raw =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr_raw
            .parse()
            .map_err(|source| ServerError::InvalidBindAddr {
                value: bind_addr_raw,
                source,
            })?;

        let base_id = require_env("STORE_BASE_ID")?;
        let token = require_env("STORE_TOKEN")?;

        let timeout_secs = std::env::var("STORE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_STORE_TIMEOUT_SECS);

        let mut store =
            StoreConfig::new(&base_id, &token).with_timeout(Duration::from_secs(timeout_secs));
        if let Ok(api_root) = std::env::var("STORE_API_ROOT") {
            store = store.with_api_root(&api_root);
        }

        Ok(Self {
            bind_addr,
            store,

            log_level: std::env::var("LOG_LEVEL")
                .map(|s| parse_log_level(&s))
                .unwrap_or(LevelFilter::Info),

            log_colored: std::env::var("LOG_COLORED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),

            log_file: std::env::var("LOG_FILE").ok().map(PathBuf::from),
        })
    }

    /// Log the effective configuration, redacting the store token
    pub fn log_summary(&self) {
        log::info!("Config: bind_addr={}", self.bind_addr);
        log::info!(
            "Config: store api_root={} base_id={} timeout={:?}",
            self.store.api_root,
            self.store.base_id,
            self.store.timeout
        );
        log::info!(
            "Config: log level={:?} colored={} file={:?}",
            self.log_level,
            self.log_colored,
            self.log_file
        );
    }
}

fn require_env(name: &'static str) -> ServerErrorResult<String> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ServerError::MissingEnv { name })
}

/// Invalid values fall back to Info rather than failing startup
fn parse_log_level(s: &str) -> LevelFilter {
    match s.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}
