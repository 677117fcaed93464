//! Request/response types for the purchase API
//!
//! These types are shared between kassa-client and anything serving the
//! `/api/v1` surface (including test servers).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CartLine, Purchase};

/// Base path of the backend REST surface
pub const API_PREFIX: &str = "/api/v1";

/// Create purchase request body
///
/// `total_price` is advisory; the backend recomputes it from `cart`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePurchaseRequest {
    pub cart: Vec<CartLine>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
}

/// Create purchase response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePurchaseResponse {
    pub purchase: Purchase,
}
