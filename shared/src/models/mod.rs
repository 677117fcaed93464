//! Data models
//!
//! Shapes follow the backend JSON (camelCase keys). Money fields are
//! `Decimal` carried as JSON numbers.

pub mod cart_line;
pub mod id;
pub mod product;
pub mod purchase;

// Re-exports
pub use cart_line::*;
pub use id::*;
pub use product::*;
pub use purchase::*;
