//! Cart state
//!
//! [`CartStore`] owns the live cart. Lines are keyed by
//! `(product id, voucher)`: plain additions of the same product merge into
//! one line, and a voucher may sit on at most one line.

use rust_decimal::Decimal;
use shared::money::cart_total;
use shared::{CartLine, ListItemId, Product};

use crate::CartError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` units of `product`, optionally redeeming a voucher
    ///
    /// A voucher already present on any line is rejected with
    /// [`CartError::DuplicateListItem`] and the cart is left unchanged.
    pub fn add(
        &mut self,
        product: Product,
        count: u32,
        list_item_id: Option<ListItemId>,
    ) -> Result<(), CartError> {
        if count == 0 {
            return Err(CartError::InvalidCount);
        }

        if let Some(id) = &list_item_id
            && self.contains_list_item(id)
        {
            tracing::debug!(list_item = %id, "Voucher already in cart");
            return Err(CartError::DuplicateListItem(id.clone()));
        }

        match self
            .lines
            .iter_mut()
            .find(|line| line.matches(product.id, list_item_id.as_ref()))
        {
            Some(line) => line.count = line.count.saturating_add(count),
            None => self.lines.push(CartLine::new(product, count, list_item_id)),
        }
        Ok(())
    }

    /// Void every line of `product_id`, whatever its quantity
    ///
    /// Returns whether anything was removed.
    pub fn remove(&mut self, product_id: i64) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.product.id != product_id);
        self.lines.len() != before
    }

    pub fn contains_list_item(&self, list_item_id: &ListItemId) -> bool {
        self.lines
            .iter()
            .any(|line| line.list_item_id.as_ref() == Some(list_item_id))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Owned copy of the lines, as submitted at checkout
    pub fn snapshot(&self) -> Vec<CartLine> {
        self.lines.clone()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Σ `price × count`
    pub fn total_price(&self) -> Decimal {
        cart_total(&self.lines)
    }

    /// Total units across all lines
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.count)).sum()
    }
}
