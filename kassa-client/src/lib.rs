//! Kassa Client - register core for the purchase backend
//!
//! Cart aggregation, checkout coordination and purchase-history
//! reconciliation on top of the `/api/v1` REST surface.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod error_sink;
pub mod history;
pub mod http;
pub mod logger;
pub mod register;
pub mod sequence;

#[cfg(test)]
mod mock;

pub use cart::CartStore;
pub use catalog::Catalog;
pub use checkout::{CheckoutCoordinator, CheckoutState};
pub use config::{AuthSession, ClientConfig, DisplayConfig};
pub use error::{ApiError, ApiResult, CartError, CheckoutError};
pub use error_sink::ErrorSink;
pub use history::HistoryReconciler;
pub use http::{NetworkApi, PurchaseApi};
pub use register::{Register, RegisterError};

// Re-export shared types for convenience
pub use shared::{CartLine, ListItemId, Product, Purchase, PurchaseId};
