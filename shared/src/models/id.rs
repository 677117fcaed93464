//! Opaque identifiers
//!
//! The backend may key purchases and vouchers by integer or by string.
//! The client never does arithmetic on them, but it must send an id back
//! with the same JSON type it arrived with.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    /// Integer form when the input is all digits, text otherwise
    fn from_input(input: &str) -> Self {
        match input.trim().parse::<i64>() {
            Ok(n) => Self::Number(n),
            Err(_) => Self::Text(input.to_string()),
        }
    }
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => fmt::Display::fmt(n, f),
            Self::Text(s) => f.pad(s),
        }
    }
}

/// Identifier of a persisted purchase
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PurchaseId(RawId);

impl PurchaseId {
    /// Textual id, kept as a JSON string
    pub fn new(id: impl Into<String>) -> Self {
        Self(RawId::Text(id.into()))
    }

    /// Operator input: digits become an integer id
    pub fn from_input(input: &str) -> Self {
        Self(RawId::from_input(input))
    }

    pub fn as_number(&self) -> Option<i64> {
        match self.0 {
            RawId::Number(n) => Some(n),
            RawId::Text(_) => None,
        }
    }
}

impl fmt::Display for PurchaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for PurchaseId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<i64> for PurchaseId {
    fn from(id: i64) -> Self {
        Self(RawId::Number(id))
    }
}

/// Identifier of a single voucher (list entry) belonging to a list
///
/// A voucher can be redeemed at most once per cart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListItemId(RawId);

impl ListItemId {
    /// Textual id, kept as a JSON string
    pub fn new(id: impl Into<String>) -> Self {
        Self(RawId::Text(id.into()))
    }

    /// Operator input: digits become an integer id
    pub fn from_input(input: &str) -> Self {
        Self(RawId::from_input(input))
    }

    pub fn as_number(&self) -> Option<i64> {
        match self.0 {
            RawId::Number(n) => Some(n),
            RawId::Text(_) => None,
        }
    }
}

impl fmt::Display for ListItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ListItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<i64> for ListItemId {
    fn from(id: i64) -> Self {
        Self(RawId::Number(id))
    }
}
