//! Register session
//!
//! [`Register`] owns the cart, catalog, history and error slot for one
//! operator session. It is created at login and dropped at logout; the UI
//! reads through its accessors and mutates only through its operations.

use shared::{ListItemId, Product, Purchase, PurchaseId};

use crate::checkout::{CheckoutContext, CheckoutCoordinator, CheckoutState};
use crate::{
    ApiResult, AuthSession, CartError, CartStore, Catalog, CheckoutError, ErrorSink,
    HistoryReconciler, PurchaseApi,
};

#[derive(Debug)]
pub struct Register<A: PurchaseApi> {
    api: A,
    session: AuthSession,
    cart: CartStore,
    catalog: Catalog,
    history: HistoryReconciler,
    checkout: CheckoutCoordinator,
    errors: ErrorSink,
}

impl<A: PurchaseApi> Register<A> {
    pub fn new(api: A, session: AuthSession) -> Self {
        tracing::info!(username = %session.username, "Register session started");
        Self {
            api,
            session,
            cart: CartStore::new(),
            catalog: Catalog::new(),
            history: HistoryReconciler::new(),
            checkout: CheckoutCoordinator::new(),
            errors: ErrorSink::new(),
        }
    }

    /// Initial fetch of catalog and history; each failure is reported on
    /// its own.
    pub async fn load(&mut self) {
        let _ = self.catalog.refresh(&self.api, &mut self.errors).await;
        let _ = self.history.refresh(&self.api, &mut self.errors).await;
    }

    // ========== Cart ==========

    pub fn add_to_cart(
        &mut self,
        product: Product,
        count: u32,
        list_item_id: Option<ListItemId>,
    ) -> Result<(), CartError> {
        self.cart.add(product, count, list_item_id)
    }

    /// Add a catalog product by id
    pub fn add_product(
        &mut self,
        product_id: i64,
        count: u32,
        list_item_id: Option<ListItemId>,
    ) -> Result<(), RegisterError> {
        let product = self
            .catalog
            .product(product_id)
            .cloned()
            .ok_or(RegisterError::UnknownProduct(product_id))?;
        Ok(self.cart.add(product, count, list_item_id)?)
    }

    pub fn remove_from_cart(&mut self, product_id: i64) -> bool {
        self.cart.remove(product_id)
    }

    pub fn has_list_item(&self, list_item_id: &ListItemId) -> bool {
        self.cart.contains_list_item(list_item_id)
    }

    /// Drop the whole cart and reload stock
    pub async fn void_cart(&mut self) {
        self.cart.clear();
        let _ = self.catalog.refresh(&self.api, &mut self.errors).await;
    }

    // ========== Remote operations ==========

    pub async fn checkout(&mut self) -> Result<Purchase, CheckoutError> {
        let ctx = CheckoutContext {
            cart: &mut self.cart,
            history: &mut self.history,
            catalog: &mut self.catalog,
            errors: &mut self.errors,
        };
        self.checkout
            .checkout(&self.api, &self.session.token, ctx)
            .await
    }

    pub async fn delete_purchase(&mut self, id: &PurchaseId) -> ApiResult<()> {
        self.history
            .remove(&self.api, id, &self.session.token, &mut self.errors)
            .await
    }

    pub async fn refresh_products(&mut self) -> ApiResult<bool> {
        self.catalog.refresh(&self.api, &mut self.errors).await
    }

    pub async fn refresh_history(&mut self) -> ApiResult<bool> {
        self.history.refresh(&self.api, &mut self.errors).await
    }

    // ========== Errors ==========

    pub fn error_message(&self) -> Option<&str> {
        self.errors.message()
    }

    pub fn acknowledge_error(&mut self) -> Option<String> {
        self.errors.acknowledge()
    }

    // ========== Read access ==========

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn history(&self) -> &HistoryReconciler {
        &self.history
    }

    pub fn checkout_state(&self) -> &CheckoutState {
        self.checkout.state()
    }

    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    pub fn api(&self) -> &A {
        &self.api
    }
}

/// Register-level cart failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
    #[error("Unknown product: {0}")]
    UnknownProduct(i64),

    #[error(transparent)]
    Cart(#[from] CartError),
}
