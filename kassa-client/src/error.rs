//! Client error types

use shared::ListItemId;
use thiserror::Error;

/// Gateway error type
///
/// Every remote failure is normalized into one of these variants; the
/// gateway itself never retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response, or a non-success status
    #[error("Network error: {0}")]
    Network(String),

    /// Delete targeted a purchase the backend does not know
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed response body
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Client could not be constructed
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Request-time failures, a malformed request URL included, count as
/// network errors. `Config` is only produced while building the client.
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result type for gateway operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Local cart validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// The voucher is already on a cart line
    #[error("List item {0} is already in the cart")]
    DuplicateListItem(ListItemId),

    #[error("Count must be at least 1")]
    InvalidCount,
}

/// Checkout failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error(transparent)]
    Api(#[from] ApiError),
}
