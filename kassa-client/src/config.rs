//! Client configuration

use crate::error::ApiError;

/// API host used when nothing is configured
pub const DEFAULT_API_HOST: &str = "http://localhost:3001";

/// Request timeout used when nothing is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for connecting to the purchase backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API host (e.g., "http://localhost:3001"); paths are appended to it
    pub api_host: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(api_host: impl Into<String>) -> Self {
        Self {
            api_host: api_host.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Read `KASSA_API_HOST` and `KASSA_TIMEOUT_SECS` from the environment
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (environment, dotenv map, test fixture)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let api_host = lookup("KASSA_API_HOST").unwrap_or_else(|| DEFAULT_API_HOST.into());
        let mut config = Self::new(api_host);

        if let Some(raw) = lookup("KASSA_TIMEOUT_SECS") {
            let seconds = raw.trim().parse::<u64>().map_err(|e| {
                ApiError::Config(format!("invalid KASSA_TIMEOUT_SECS '{raw}': {e}"))
            })?;
            config = config.with_timeout(seconds);
        }

        Ok(config)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_HOST)
    }
}

/// Presentation settings handed to whatever renders the register
///
/// The core never formats money or dates itself; these values are only
/// carried through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// ISO currency code shown next to totals
    pub currency: String,
    /// chrono strftime pattern for purchase timestamps
    pub date_format: String,
    pub version: String,
}

impl DisplayConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            currency: lookup("KASSA_CURRENCY").unwrap_or(defaults.currency),
            date_format: lookup("KASSA_DATE_FORMAT").unwrap_or(defaults.date_format),
            version: defaults.version,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: "EUR".into(),
            date_format: "%d.%m.%Y %H:%M".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// Operator session, supplied by the authentication collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub username: String,
    pub token: String,
}

impl AuthSession {
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
        }
    }
}
