//! Scripted in-memory gateway for unit tests

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::{CartLine, Product, Purchase, PurchaseId};

use crate::{ApiError, ApiResult, PurchaseApi};

/// Submitted create-purchase call
#[derive(Debug, Clone)]
pub struct CreateCall {
    pub cart: Vec<CartLine>,
    pub total_price: Decimal,
    pub token: String,
}

/// Each operation pops its next scripted result; an empty script is a
/// network error.
#[derive(Debug, Default)]
pub struct ScriptedApi {
    products: Mutex<VecDeque<ApiResult<Vec<Product>>>>,
    purchases: Mutex<VecDeque<ApiResult<Vec<Purchase>>>>,
    creates: Mutex<VecDeque<ApiResult<Purchase>>>,
    deletes: Mutex<VecDeque<ApiResult<()>>>,
    create_calls: Mutex<Vec<CreateCall>>,
    delete_calls: Mutex<Vec<PurchaseId>>,
}

fn next<T>(queue: &Mutex<VecDeque<ApiResult<T>>>, op: &str) -> ApiResult<T> {
    queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| Err(ApiError::Network(format!("no scripted response for {op}"))))
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_products(&self, result: ApiResult<Vec<Product>>) {
        self.products.lock().unwrap().push_back(result);
    }

    pub fn push_purchases(&self, result: ApiResult<Vec<Purchase>>) {
        self.purchases.lock().unwrap().push_back(result);
    }

    pub fn push_create(&self, result: ApiResult<Purchase>) {
        self.creates.lock().unwrap().push_back(result);
    }

    pub fn push_delete(&self, result: ApiResult<()>) {
        self.deletes.lock().unwrap().push_back(result);
    }

    pub fn create_calls(&self) -> Vec<CreateCall> {
        self.create_calls.lock().unwrap().clone()
    }

    pub fn delete_calls(&self) -> Vec<PurchaseId> {
        self.delete_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PurchaseApi for ScriptedApi {
    async fn list_products(&self) -> ApiResult<Vec<Product>> {
        next(&self.products, "list_products")
    }

    async fn list_purchases(&self) -> ApiResult<Vec<Purchase>> {
        next(&self.purchases, "list_purchases")
    }

    async fn create_purchase(
        &self,
        cart: &[CartLine],
        total_price: Decimal,
        token: &str,
    ) -> ApiResult<Purchase> {
        self.create_calls.lock().unwrap().push(CreateCall {
            cart: cart.to_vec(),
            total_price,
            token: token.to_string(),
        });
        next(&self.creates, "create_purchase")
    }

    async fn delete_purchase(&self, id: &PurchaseId, _token: &str) -> ApiResult<()> {
        self.delete_calls.lock().unwrap().push(id.clone());
        next(&self.deletes, "delete_purchase")
    }
}

/// Purchase fixture with a fixed timestamp
pub fn purchase(id: &str, total: i64) -> Purchase {
    Purchase {
        id: PurchaseId::new(id),
        created_at: chrono::DateTime::from_timestamp(1_714_557_600, 0).unwrap_or_default(),
        total_price: Decimal::from(total),
        cart: Vec::new(),
    }
}
