use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

/// Environment variable naming an optional YAML configuration file.
pub const CONFIG_ENV: &str = "FILESERVE_CONFIG";

/// Environment variable overriding `server.listen_addr`.
pub const LISTEN_ENV: &str = "LISTEN";

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_MAX_CONNECTIONS: usize = 1024;
/// 100 MiB
const DEFAULT_MAX_BYTES: u64 = 100 * 1024 * 1024;

/// Top-level configuration, handed to the acceptor at startup.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub limits: LimitsConfig,
    pub static_files: StaticFilesConfig,
}

/// Listener and dispatch settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the acceptor binds to (e.g. "0.0.0.0:8080")
    pub listen_addr: String,
    /// Upper bound on concurrently running connection handlers
    pub max_connections: usize,
    /// Optional receive timeout. Unset means a silent peer is waited on forever.
    pub read_timeout_secs: Option<u64>,
    /// Answer unrecognised request lines with 400 instead of closing silently
    pub reject_unmatched: bool,
}

/// Byte limits for a single request/response.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Largest request buffer accepted before the request line completes
    pub max_request_bytes: u64,
    /// Largest file body a response will carry
    pub max_body_bytes: u64,
}

/// Where requested paths are resolved.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Directory request paths are joined onto. No normalization is applied.
    pub root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            read_timeout_secs: None,
            reject_unmatched: false,
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_request_bytes: DEFAULT_MAX_BYTES,
            max_body_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

impl ServerConfig {
    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout_secs.map(Duration::from_secs)
    }
}

impl Config {
    /// Loads configuration from the file named by `FILESERVE_CONFIG` (if any),
    /// then applies the `LISTEN` override.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var(CONFIG_ENV) {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading config file {}", path))?;
                Self::from_yaml(&raw).with_context(|| format!("parsing config file {}", path))?
            }
            Err(_) => Self::default(),
        };

        if let Ok(listen_addr) = std::env::var(LISTEN_ENV) {
            cfg.server.listen_addr = listen_addr;
        }

        Ok(cfg)
    }

    /// Parses a YAML document. Missing keys take their defaults.
    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.listen_addr.trim().is_empty() {
            anyhow::bail!("server.listen_addr must not be empty");
        }
        if self.server.max_connections == 0 {
            anyhow::bail!("server.max_connections must be >= 1");
        }
        if self.limits.max_request_bytes == 0 {
            anyhow::bail!("limits.max_request_bytes must be >= 1");
        }
        Ok(())
    }
}
