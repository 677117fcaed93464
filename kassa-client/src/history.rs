//! Recent purchase history
//!
//! Local edits are applied optimistically (prepend on checkout, splice on
//! delete) and then reconciled by replacing the list with a fresh fetch.
//! Each local edit invalidates fetches issued before it, so a response
//! that predates the edit is discarded instead of resurrecting old state.

use shared::{Purchase, PurchaseId};

use crate::sequence::{RequestSequence, Ticket};
use crate::{ApiResult, ErrorSink, PurchaseApi};

#[derive(Debug, Clone, Default)]
pub struct HistoryReconciler {
    purchases: Vec<Purchase>,
    sequence: RequestSequence,
}

impl HistoryReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent first
    pub fn purchases(&self) -> &[Purchase] {
        &self.purchases
    }

    /// The newest `limit` purchases
    pub fn recent(&self, limit: usize) -> &[Purchase] {
        &self.purchases[..limit.min(self.purchases.len())]
    }

    pub fn get(&self, id: &PurchaseId) -> Option<&Purchase> {
        self.purchases.iter().find(|p| &p.id == id)
    }

    pub fn contains(&self, id: &PurchaseId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.purchases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.purchases.is_empty()
    }

    /// Prepend a freshly committed purchase without waiting for a fetch
    pub fn record_checkout(&mut self, purchase: Purchase) {
        self.sequence.invalidate();
        self.purchases.retain(|p| p.id != purchase.id);
        self.purchases.insert(0, purchase);
    }

    pub fn begin_refresh(&mut self) -> Ticket {
        self.sequence.issue()
    }

    /// Replace the history if `ticket` is still the newest fetch
    pub fn apply_refresh(&mut self, ticket: Ticket, purchases: Vec<Purchase>) -> bool {
        if !self.sequence.try_accept(ticket) {
            tracing::warn!(ticket = ticket.value(), "Discarding stale purchase history");
            return false;
        }
        tracing::info!(count = purchases.len(), "Purchase history refreshed");
        self.purchases = purchases;
        true
    }

    /// Fetch and apply the full history
    pub async fn refresh<A>(&mut self, api: &A, errors: &mut ErrorSink) -> ApiResult<bool>
    where
        A: PurchaseApi + ?Sized,
    {
        let ticket = self.begin_refresh();
        match api.list_purchases().await {
            Ok(purchases) => Ok(self.apply_refresh(ticket, purchases)),
            Err(e) => {
                errors.report(format!(
                    "There was an error fetching the purchase history: {}",
                    e
                ));
                Err(e)
            }
        }
    }

    /// Delete a purchase on the backend, then reconcile
    ///
    /// On failure the history is untouched. A successful delete whose
    /// follow-up fetch fails still returns `Ok`; the fetch error is reported
    /// and the purchase stays spliced out locally.
    pub async fn remove<A>(
        &mut self,
        api: &A,
        id: &PurchaseId,
        token: &str,
        errors: &mut ErrorSink,
    ) -> ApiResult<()>
    where
        A: PurchaseApi + ?Sized,
    {
        if let Err(e) = api.delete_purchase(id, token).await {
            errors.report(format!("There was an error deleting the purchase: {}", e));
            return Err(e);
        }
        tracing::info!(purchase_id = %id, "Purchase deleted");

        self.sequence.invalidate();
        self.purchases.retain(|p| &p.id != id);

        // already reported to the sink
        let _ = self.refresh(api, errors).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ApiError;
    use crate::mock::{ScriptedApi, purchase};

    #[test]
    fn test_record_checkout_prepends() {
        let mut history = HistoryReconciler::new();
        history.record_checkout(purchase("a", 10));
        history.record_checkout(purchase("b", 20));
        let ids: Vec<_> = history.purchases().iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, ["b", "a"]);
        assert_eq!(history.recent(1).len(), 1);
        assert_eq!(history.recent(5).len(), 2);
    }

    #[test]
    fn test_fetch_issued_before_checkout_cannot_drop_it() {
        let mut history = HistoryReconciler::new();
        let stale = history.begin_refresh();
        history.record_checkout(purchase("new", 10));

        assert!(!history.apply_refresh(stale, vec![purchase("old", 5)]));
        assert_eq!(history.purchases()[0].id, PurchaseId::new("new"));
    }

    #[tokio::test]
    async fn test_remove_refetches() {
        let api = ScriptedApi::new();
        api.push_delete(Ok(()));
        api.push_purchases(Ok(vec![purchase("b", 20)]));

        let mut history = HistoryReconciler::new();
        history.record_checkout(purchase("b", 20));
        history.record_checkout(purchase("x", 10));
        let mut errors = ErrorSink::new();

        history
            .remove(&api, &"x".into(), "token", &mut errors)
            .await
            .unwrap();
        assert!(!history.contains(&"x".into()));
        assert_eq!(history.len(), 1);
        assert_eq!(api.delete_calls(), vec![PurchaseId::new("x")]);
        assert!(!errors.has_error());
    }

    #[tokio::test]
    async fn test_remove_failure_leaves_history() {
        let api = ScriptedApi::new();
        api.push_delete(Err(ApiError::NotFound("purchase x".into())));

        let mut history = HistoryReconciler::new();
        history.record_checkout(purchase("x", 10));
        let mut errors = ErrorSink::new();

        let result = history.remove(&api, &"x".into(), "token", &mut errors).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
        assert!(history.contains(&"x".into()));
        assert!(errors.message().unwrap().contains("deleting the purchase"));
    }

    #[tokio::test]
    async fn test_stale_refresh_after_delete_is_discarded() {
        let api = ScriptedApi::new();
        api.push_delete(Ok(()));
        api.push_purchases(Ok(vec![purchase("a", 5)]));

        let mut history = HistoryReconciler::new();
        let ticket = history.begin_refresh();
        history.apply_refresh(ticket, vec![purchase("x", 10), purchase("a", 5)]);

        // a refresh issued before the delete, still in flight
        let stale = history.begin_refresh();
        let mut errors = ErrorSink::new();
        history
            .remove(&api, &"x".into(), "token", &mut errors)
            .await
            .unwrap();

        // ...resolves afterwards with the pre-delete list
        assert!(!history.apply_refresh(stale, vec![purchase("x", 10), purchase("a", 5)]));
        assert!(!history.contains(&"x".into()));
        assert_eq!(history.len(), 1);
    }

    #[tokio::test]
    async fn test_refetch_failure_after_delete_keeps_splice() {
        let api = ScriptedApi::new();
        api.push_delete(Ok(()));
        api.push_purchases(Err(ApiError::Decode("expected array".into())));

        let mut history = HistoryReconciler::new();
        history.record_checkout(purchase("x", 10));
        let mut errors = ErrorSink::new();

        let result = history.remove(&api, &"x".into(), "token", &mut errors).await;
        assert!(result.is_ok());
        assert!(history.is_empty());
        assert!(errors.message().unwrap().contains("purchase history"));
    }
}
