//! Shared types for the Kassa point-of-sale client
//!
//! Wire and domain types used by the client core and by anything that
//! stands in for the purchase backend (test servers, fixtures).

pub mod client;
pub mod models;
pub mod money;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{CreatePurchaseRequest, CreatePurchaseResponse};
pub use models::{CartLine, ListItemId, Product, Purchase, PurchaseId};
