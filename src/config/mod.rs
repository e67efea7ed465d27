//! Configuration management
//!
//! The browser bundle has no process environment, so the web build bakes its
//! settings in at compile time (`ADMIN_API_SERVER`, `ADMIN_TOKEN_KEY`,
//! `ADMIN_RUNS_PAGE_SIZE`). Native builds read `ADMIN_CONSOLE_*` variables at
//! runtime through the `config` crate.

#[cfg(not(target_arch = "wasm32"))]
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Storage key holding the bearer token
pub const DEFAULT_TOKEN_KEY: &str = "admin_access_token";

/// Runs fetched per dashboard load
pub const DEFAULT_RUNS_PAGE_SIZE: u8 = 20;

/// Upper bound accepted by `GET /api/admin/runs`
pub const MAX_RUNS_PAGE_SIZE: u8 = 100;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API server URL is not defined (set ADMIN_API_SERVER)")]
    MissingApiServer,

    #[error("Invalid API server URL {value:?}: {source}")]
    InvalidApiServer {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API server URL must use http or https: {0}")]
    UnsupportedScheme(String),

    #[error("Runs page size must be between 1 and 100, got {0}")]
    InvalidPageSize(String),

    #[cfg(not(target_arch = "wasm32"))]
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),
}

/// Settings shared by the API client, session store and dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Origin of the admin API; every request path is appended to it
    pub api_server: Url,

    /// localStorage key for the bearer token
    pub token_key: String,

    /// Page size requested by the dashboard
    pub runs_page_size: u8,
}

impl AppConfig {
    /// Build a config from the API origin, using defaults for the rest.
    ///
    /// A missing or blank origin is a fatal configuration error.
    pub fn new(api_server: Option<&str>) -> Result<Self, ConfigError> {
        let value = api_server
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingApiServer)?;

        let api_server = Url::parse(value).map_err(|source| ConfigError::InvalidApiServer {
            value: value.to_string(),
            source,
        })?;
        if !matches!(api_server.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(value.to_string()));
        }

        Ok(Self {
            api_server,
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            runs_page_size: DEFAULT_RUNS_PAGE_SIZE,
        })
    }

    /// Override the token storage key. Blank keys are ignored.
    pub fn with_token_key(mut self, key: &str) -> Self {
        let key = key.trim();
        if !key.is_empty() {
            self.token_key = key.to_string();
        }
        self
    }

    pub fn with_runs_page_size(mut self, size: u8) -> Result<Self, ConfigError> {
        if size == 0 || size > MAX_RUNS_PAGE_SIZE {
            return Err(ConfigError::InvalidPageSize(size.to_string()));
        }
        self.runs_page_size = size;
        Ok(self)
    }

    /// Configuration baked into the binary at compile time (web build).
    pub fn from_build_env() -> Result<Self, ConfigError> {
        let mut config = Self::new(option_env!("ADMIN_API_SERVER"))?;
        if let Some(key) = option_env!("ADMIN_TOKEN_KEY") {
            config = config.with_token_key(key);
        }
        if let Some(raw) = option_env!("ADMIN_RUNS_PAGE_SIZE") {
            let size = raw
                .trim()
                .parse::<u8>()
                .map_err(|_| ConfigError::InvalidPageSize(raw.to_string()))?;
            config = config.with_runs_page_size(size)?;
        }
        Ok(config)
    }

    /// Full URL for an API path such as `/api/admin/otp`.
    ///
    /// The path is appended verbatim, so an origin with a path prefix
    /// (`https://host/backend`) keeps it.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_server.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Values as read from the environment, before validation.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Deserialize)]
struct RawConfig {
    api_server: Option<String>,
    #[serde(default = "default_token_key")]
    token_key: String,
    #[serde(default = "default_runs_page_size")]
    runs_page_size: i64,
}

#[cfg(not(target_arch = "wasm32"))]
fn default_token_key() -> String {
    DEFAULT_TOKEN_KEY.to_string()
}

#[cfg(not(target_arch = "wasm32"))]
fn default_runs_page_size() -> i64 {
    DEFAULT_RUNS_PAGE_SIZE as i64
}

#[cfg(not(target_arch = "wasm32"))]
impl RawConfig {
    fn validate(self) -> Result<AppConfig, ConfigError> {
        let size = u8::try_from(self.runs_page_size)
            .map_err(|_| ConfigError::InvalidPageSize(self.runs_page_size.to_string()))?;
        AppConfig::new(self.api_server.as_deref())?
            .with_token_key(&self.token_key)
            .with_runs_page_size(size)
    }
}

/// Load configuration from `ADMIN_CONSOLE_*` environment variables
/// (`ADMIN_CONSOLE_API_SERVER`, `ADMIN_CONSOLE_TOKEN_KEY`,
/// `ADMIN_CONSOLE_RUNS_PAGE_SIZE`).
#[cfg(not(target_arch = "wasm32"))]
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let raw: RawConfig = ::config::Config::builder()
        .set_default("token_key", DEFAULT_TOKEN_KEY)?
        .set_default("runs_page_size", DEFAULT_RUNS_PAGE_SIZE as i64)?
        .add_source(::config::Environment::with_prefix("ADMIN_CONSOLE").try_parsing(true))
        .build()?
        .try_deserialize()?;

    raw.validate()
}
