//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `PAIWAN_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_COLLECTION_NAME, DEFAULT_EMBEDDING_DIM, DEFAULT_EMBEDDING_MODEL,
    DEFAULT_FALLBACK_LIMIT, DEFAULT_FALLBACK_THRESHOLD, DEFAULT_FALLBACK_TIMEOUT_MS,
    DEFAULT_VOCABULARY_PATH,
};
use crate::embedding::EmbedderConfig;
use crate::fallback::FallbackConfig;
use crate::fuzzy::TiePolicy;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `PAIWAN_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8000`.
    pub port: u16,

    /// IP address to bind to. Default: `0.0.0.0`.
    pub bind_addr: IpAddr,

    /// JSON word-pair list. Default: `data/unique_data.json`.
    pub vocabulary_path: PathBuf,

    /// Qdrant endpoint URL. Default: `http://localhost:6334`.
    pub qdrant_url: String,

    /// Collection holding the paired-sentence corpus. Default: `paiwan_enhanced`.
    pub collection_name: String,

    /// Embedding service URL. Unset runs the embedder in stub mode.
    pub embedding_endpoint: Option<String>,

    /// Embedding model identifier. Default: `nomic-embed-text`.
    pub embedding_model: String,

    /// Embedding dimension. Default: `768`.
    pub embedding_dim: usize,

    /// Max hits requested from the context search. Default: `3`.
    pub fallback_limit: u64,

    /// Minimum relevance for a context hit. Default: `0.6`.
    pub fallback_threshold: f32,

    /// Budget for one context lookup in milliseconds. Default: `3000`.
    pub fallback_timeout_ms: u64,

    /// Whether the context fallback runs at all. Default: `true`.
    pub fallback_enabled: bool,

    /// Fuzzy tie handling. Default: `extend`.
    pub tie_policy: TiePolicy,
}

/// Default Qdrant URL used when `PAIWAN_QDRANT_URL` is not set.
pub const DEFAULT_QDRANT_URL: &str = "http://localhost:6334";

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0)),
            vocabulary_path: PathBuf::from(DEFAULT_VOCABULARY_PATH),
            qdrant_url: DEFAULT_QDRANT_URL.to_string(),
            collection_name: DEFAULT_COLLECTION_NAME.to_string(),
            embedding_endpoint: None,
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            embedding_dim: DEFAULT_EMBEDDING_DIM,
            fallback_limit: DEFAULT_FALLBACK_LIMIT,
            fallback_threshold: DEFAULT_FALLBACK_THRESHOLD,
            fallback_timeout_ms: DEFAULT_FALLBACK_TIMEOUT_MS,
            fallback_enabled: true,
            tie_policy: TiePolicy::default(),
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "PAIWAN_PORT";
    const ENV_BIND_ADDR: &'static str = "PAIWAN_BIND_ADDR";
    const ENV_VOCABULARY_PATH: &'static str = "PAIWAN_VOCABULARY_PATH";
    const ENV_QDRANT_URL: &'static str = "PAIWAN_QDRANT_URL";
    const ENV_COLLECTION: &'static str = "PAIWAN_COLLECTION";
    const ENV_EMBEDDING_ENDPOINT: &'static str = "PAIWAN_EMBEDDING_ENDPOINT";
    const ENV_EMBEDDING_MODEL: &'static str = "PAIWAN_EMBEDDING_MODEL";
    const ENV_EMBEDDING_DIM: &'static str = "PAIWAN_EMBEDDING_DIM";
    const ENV_FALLBACK_LIMIT: &'static str = "PAIWAN_FALLBACK_LIMIT";
    const ENV_FALLBACK_THRESHOLD: &'static str = "PAIWAN_FALLBACK_THRESHOLD";
    const ENV_FALLBACK_TIMEOUT_MS: &'static str = "PAIWAN_FALLBACK_TIMEOUT_MS";
    const ENV_FALLBACK_ENABLED: &'static str = "PAIWAN_FALLBACK_ENABLED";
    const ENV_TIE_POLICY: &'static str = "PAIWAN_TIE_POLICY";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let vocabulary_path =
            Self::parse_path_from_env(Self::ENV_VOCABULARY_PATH, defaults.vocabulary_path);
        let qdrant_url = Self::parse_string_from_env(Self::ENV_QDRANT_URL, defaults.qdrant_url);
        let collection_name =
            Self::parse_string_from_env(Self::ENV_COLLECTION, defaults.collection_name);
        let embedding_endpoint = Self::parse_optional_string_from_env(Self::ENV_EMBEDDING_ENDPOINT);
        let embedding_model =
            Self::parse_string_from_env(Self::ENV_EMBEDDING_MODEL, defaults.embedding_model);
        let embedding_dim =
            Self::parse_number_from_env(Self::ENV_EMBEDDING_DIM, defaults.embedding_dim)?;
        let fallback_limit =
            Self::parse_number_from_env(Self::ENV_FALLBACK_LIMIT, defaults.fallback_limit)?;
        let fallback_threshold =
            Self::parse_number_from_env(Self::ENV_FALLBACK_THRESHOLD, defaults.fallback_threshold)?;
        let fallback_timeout_ms =
            Self::parse_number_from_env(Self::ENV_FALLBACK_TIMEOUT_MS, defaults.fallback_timeout_ms)?;
        let fallback_enabled =
            Self::parse_bool_from_env(Self::ENV_FALLBACK_ENABLED, defaults.fallback_enabled)?;
        let tie_policy = Self::parse_tie_policy_from_env(defaults.tie_policy)?;

        Ok(Self {
            port,
            bind_addr,
            vocabulary_path,
            qdrant_url,
            collection_name,
            embedding_endpoint,
            embedding_model,
            embedding_dim,
            fallback_limit,
            fallback_threshold,
            fallback_timeout_ms,
            fallback_enabled,
            tie_policy,
        })
    }

    /// Validates paths and basic invariants (a missing vocabulary file is allowed).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vocabulary_path.exists() && !self.vocabulary_path.is_file() {
            return Err(ConfigError::NotAFile {
                path: self.vocabulary_path.clone(),
            });
        }

        if !(0.0..=1.0).contains(&self.fallback_threshold) {
            return Err(ConfigError::OutOfRange {
                name: Self::ENV_FALLBACK_THRESHOLD,
                value: self.fallback_threshold.to_string(),
                expected: "between 0.0 and 1.0",
            });
        }

        if self.fallback_limit == 0 {
            return Err(ConfigError::OutOfRange {
                name: Self::ENV_FALLBACK_LIMIT,
                value: self.fallback_limit.to_string(),
                expected: "greater than 0",
            });
        }

        if self.fallback_timeout_ms == 0 {
            return Err(ConfigError::OutOfRange {
                name: Self::ENV_FALLBACK_TIMEOUT_MS,
                value: self.fallback_timeout_ms.to_string(),
                expected: "greater than 0",
            });
        }

        if self.embedding_dim == 0 {
            return Err(ConfigError::OutOfRange {
                name: Self::ENV_EMBEDDING_DIM,
                value: self.embedding_dim.to_string(),
                expected: "greater than 0",
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    /// Embedder settings derived from this configuration.
    pub fn embedder_config(&self) -> EmbedderConfig {
        let config = match &self.embedding_endpoint {
            Some(endpoint) => EmbedderConfig::new(endpoint.clone(), self.embedding_model.clone()),
            None => EmbedderConfig::stub(),
        };
        config.embedding_dim(self.embedding_dim)
    }

    /// Fallback settings derived from this configuration.
    pub fn fallback_config(&self) -> FallbackConfig {
        FallbackConfig {
            enabled: self.fallback_enabled,
            collection_name: self.collection_name.clone(),
            limit: self.fallback_limit,
            score_threshold: self.fallback_threshold,
            timeout: Duration::from_millis(self.fallback_timeout_ms),
        }
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_tie_policy_from_env(default: TiePolicy) -> Result<TiePolicy, ConfigError> {
        match env::var(Self::ENV_TIE_POLICY) {
            Ok(value) => value.parse().map_err(ConfigError::InvalidTiePolicy),
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_number_from_env<T>(var_name: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: std::str::FromStr,
    {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    name: var_name,
                    value,
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_bool_from_env(var_name: &'static str, default: bool) -> Result<bool, ConfigError> {
        match env::var(var_name) {
            Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    name: var_name,
                    value,
                }),
            },
            Err(_) => Ok(default),
        }
    }
}
