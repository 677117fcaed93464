//! Cart line

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ListItemId, Product};

/// One aggregated cart entry, keyed by (product, optional voucher)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub count: u32,
    #[serde(
        rename = "listItemID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub list_item_id: Option<ListItemId>,
}

impl CartLine {
    pub fn new(product: Product, count: u32, list_item_id: Option<ListItemId>) -> Self {
        Self {
            product,
            count,
            list_item_id,
        }
    }

    /// `price × count`
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.count)
    }

    /// Same product and same voucher (or both without one)
    pub fn matches(&self, product_id: i64, list_item_id: Option<&ListItemId>) -> bool {
        self.product.id == product_id && self.list_item_id.as_ref() == list_item_id
    }
}
