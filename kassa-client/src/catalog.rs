//! Product catalog
//!
//! Replaced wholesale by every accepted fetch; stale fetches are dropped.

use shared::Product;

use crate::sequence::{RequestSequence, Ticket};
use crate::{ApiResult, ErrorSink, PurchaseApi};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    sequence: RequestSequence,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products redeemable against vouchers of `list_id`
    pub fn list_products(&self, list_id: i64) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(move |p| p.list_id == Some(list_id))
    }

    pub fn begin_refresh(&mut self) -> Ticket {
        self.sequence.issue()
    }

    /// Replace the catalog if `ticket` is still the newest fetch
    pub fn apply_refresh(&mut self, ticket: Ticket, products: Vec<Product>) -> bool {
        if !self.sequence.try_accept(ticket) {
            tracing::warn!(ticket = ticket.value(), "Discarding stale product list");
            return false;
        }
        tracing::info!(count = products.len(), "Product list refreshed");
        self.products = products;
        true
    }

    /// Fetch and apply the product list
    ///
    /// Failures are reported to `errors` and leave the current list in place.
    pub async fn refresh<A>(&mut self, api: &A, errors: &mut ErrorSink) -> ApiResult<bool>
    where
        A: PurchaseApi + ?Sized,
    {
        let ticket = self.begin_refresh();
        match api.list_products().await {
            Ok(products) => Ok(self.apply_refresh(ticket, products)),
            Err(e) => {
                errors.report(format!("There was an error fetching the products: {}", e));
                Err(e)
            }
        }
    }
}
