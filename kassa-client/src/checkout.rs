//! Checkout coordination
//!
//! A checkout moves `Idle → Submitting → {Committed, Failed}`. It is
//! all-or-nothing: on commit the cart is cleared and the purchase recorded
//! in the same synchronous step; on failure neither changes.

use shared::{Purchase, PurchaseId};

use crate::{CartStore, Catalog, CheckoutError, ErrorSink, HistoryReconciler, PurchaseApi};

/// State of the most recent checkout attempt
///
/// `Submitting` is set when the request goes out. If the checkout future
/// is dropped before the backend answers, the state stays `Submitting`
/// with the cart untouched; the next `checkout` call starts over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CheckoutState {
    #[default]
    Idle,
    Submitting,
    Committed(PurchaseId),
    Failed(String),
}

/// State a checkout reads and mutates
///
/// Holding the mutable borrows for the whole attempt keeps the cart frozen
/// while the purchase is in flight.
#[derive(Debug)]
pub struct CheckoutContext<'a> {
    pub cart: &'a mut CartStore,
    pub history: &'a mut HistoryReconciler,
    pub catalog: &'a mut Catalog,
    pub errors: &'a mut ErrorSink,
}

#[derive(Debug, Clone, Default)]
pub struct CheckoutCoordinator {
    state: CheckoutState,
}

impl CheckoutCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// Submit the cart as a purchase
    ///
    /// A new attempt may start from any state; a failed one is retried by
    /// calling this again. After commit the catalog is refreshed because
    /// stock may have changed; a refresh failure is reported but does not
    /// undo the commit.
    pub async fn checkout<A>(
        &mut self,
        api: &A,
        token: &str,
        ctx: CheckoutContext<'_>,
    ) -> Result<Purchase, CheckoutError>
    where
        A: PurchaseApi + ?Sized,
    {
        let CheckoutContext {
            cart,
            history,
            catalog,
            errors,
        } = ctx;

        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        self.state = CheckoutState::Submitting;
        let lines = cart.snapshot();
        let total_price = cart.total_price();

        let purchase = match api.create_purchase(&lines, total_price, token).await {
            Ok(purchase) => purchase,
            Err(e) => {
                let message = format!("There was an error storing the purchase: {}", e);
                errors.report(message.clone());
                self.state = CheckoutState::Failed(message);
                return Err(e.into());
            }
        };

        if purchase.total_price != total_price {
            tracing::debug!(
                submitted = %total_price,
                recorded = %purchase.total_price,
                "Backend recomputed purchase total"
            );
        }

        cart.clear();
        history.record_checkout(purchase.clone());
        self.state = CheckoutState::Committed(purchase.id.clone());
        tracing::info!(
            purchase_id = %purchase.id,
            total = %purchase.total_price,
            "Checkout committed"
        );

        // reported to the sink on failure; the commit stands
        let _ = catalog.refresh(api, errors).await;

        Ok(purchase)
    }
}
