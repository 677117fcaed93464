//! Purchase Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CartLine, PurchaseId};

/// Persisted checkout, produced by the backend
///
/// `total_price` is the server-recomputed total and is the only total the
/// client displays after a checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub id: PurchaseId,
    pub created_at: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    #[serde(default)]
    pub cart: Vec<CartLine>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ListItemId;

    #[test]
    fn test_decode_purchase_without_cart() {
        let json = r#"{"id":"x","createdAt":"2024-05-01T10:00:00Z","totalPrice":10}"#;
        let purchase: Purchase = serde_json::from_str(json).unwrap();
        assert_eq!(purchase.id, PurchaseId::new("x"));
        assert_eq!(purchase.total_price, Decimal::from(10));
        assert!(purchase.cart.is_empty());
    }

    #[test]
    fn test_decode_purchase_with_numeric_id() {
        let json = r#"{"id":17,"createdAt":"2024-05-01T10:00:00+02:00","totalPrice":20.5,
            "cart":[{"product":{"id":1,"name":"Reduced","price":20.5},"count":1,"listItemID":9}]}"#;
        let purchase: Purchase = serde_json::from_str(json).unwrap();
        assert_eq!(purchase.id, PurchaseId::from(17));
        assert_eq!(purchase.cart.len(), 1);
        assert_eq!(purchase.cart[0].list_item_id, Some(ListItemId::from(9)));

        // integer ids go back out as integers
        let value = serde_json::to_value(&purchase).unwrap();
        assert_eq!(value["id"], 17);
        assert_eq!(value["cart"][0]["listItemID"], 9);
    }
}
