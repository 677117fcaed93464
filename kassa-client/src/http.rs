//! Purchase API gateway
//!
//! [`PurchaseApi`] is the seam between the register core and the backend.
//! [`NetworkApi`] is the reqwest implementation of the `/api/v1` surface.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use shared::client::API_PREFIX;
use shared::{
    CartLine, CreatePurchaseRequest, CreatePurchaseResponse, Product, Purchase, PurchaseId,
};

use crate::{ApiError, ApiResult, ClientConfig};

/// The four remote operations the register depends on
///
/// Implementations must not retry; retry policy belongs to the caller.
#[async_trait]
pub trait PurchaseApi: Send + Sync {
    async fn list_products(&self) -> ApiResult<Vec<Product>>;

    async fn list_purchases(&self) -> ApiResult<Vec<Purchase>>;

    /// Persist a purchase. `total_price` is advisory; the returned
    /// purchase carries the server-recomputed total.
    async fn create_purchase(
        &self,
        cart: &[CartLine],
        total_price: Decimal,
        token: &str,
    ) -> ApiResult<Purchase>;

    /// Delete a purchase. An id the backend does not know is
    /// [`ApiError::NotFound`], never a silent success.
    async fn delete_purchase(&self, id: &PurchaseId, token: &str) -> ApiResult<()>;
}

/// Network purchase API client
#[derive(Debug, Clone)]
pub struct NetworkApi {
    client: Client,
    base_url: String,
}

impl NetworkApi {
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.api_host.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    fn auth_header(token: &str) -> String {
        format!("Bearer {}", token)
    }

    /// Fail on any non-success status, keeping the body text for context
    async fn ensure_success(response: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().await.unwrap_or_default();
        Err(ApiError::Network(if text.is_empty() {
            format!("HTTP {}", status)
        } else {
            format!("HTTP {}: {}", status, text.trim())
        }))
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl PurchaseApi for NetworkApi {
    async fn list_products(&self) -> ApiResult<Vec<Product>> {
        let url = self.url("/products");
        tracing::debug!(%url, "Fetching products");
        let response = self.client.get(&url).send().await?;
        Self::decode(response).await
    }

    async fn list_purchases(&self) -> ApiResult<Vec<Purchase>> {
        let url = self.url("/purchases");
        tracing::debug!(%url, "Fetching purchases");
        let response = self.client.get(&url).send().await?;
        Self::decode(response).await
    }

    async fn create_purchase(
        &self,
        cart: &[CartLine],
        total_price: Decimal,
        token: &str,
    ) -> ApiResult<Purchase> {
        let url = self.url("/purchases");
        let body = CreatePurchaseRequest {
            cart: cart.to_vec(),
            total_price,
        };
        tracing::debug!(%url, lines = cart.len(), %total_price, "Submitting purchase");
        let response = self
            .client
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, Self::auth_header(token))
            .json(&body)
            .send()
            .await?;
        let created: CreatePurchaseResponse = Self::decode(response).await?;
        Ok(created.purchase)
    }

    async fn delete_purchase(&self, id: &PurchaseId, token: &str) -> ApiResult<()> {
        let url = self.url(&format!("/purchases/{}", id));
        tracing::debug!(%url, "Deleting purchase");
        let response = self
            .client
            .delete(&url)
            .header(reqwest::header::AUTHORIZATION, Self::auth_header(token))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(format!("purchase {}", id)));
        }
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_prefix_and_trims_slash() {
        let api = NetworkApi::new(&ClientConfig::new("http://kasse.local:3001/")).unwrap();
        assert_eq!(api.base_url(), "http://kasse.local:3001");
        assert_eq!(api.url("/products"), "http://kasse.local:3001/api/v1/products");
    }

    #[test]
    fn test_auth_header_is_bearer() {
        assert_eq!(NetworkApi::auth_header("abc"), "Bearer abc");
    }

    #[tokio::test]
    async fn test_host_without_scheme_fails_as_network() {
        let api = NetworkApi::new(&ClientConfig::new("localhost:3001")).unwrap();
        let result = api.list_products().await;
        assert!(matches!(result, Err(ApiError::Network(_))), "{result:?}");
    }
}
