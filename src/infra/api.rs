//! Thin asynchronous client for the freight backend API.
//!
//! - One generic listing call, typed per collection through [`Listing`].
//! - One write call for order prices.
//! - No caching and no retries: each call is exactly one request.

use reqwest::{Client, StatusCode, Url};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::DashboardConfig;
use crate::domain::{DistributionRule, Logist, Order, Platform, RecordId};

const USER_AGENT: &str = concat!("freight-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server responded with {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// A collection the backend serves as a JSON array.
pub trait Listing: DeserializeOwned + Clone + PartialEq + 'static {
    /// Collection path relative to the API root, with trailing slash.
    const COLLECTION: &'static str;
}

impl Listing for Order {
    const COLLECTION: &'static str = "orders/";
}

impl Listing for DistributionRule {
    const COLLECTION: &'static str = "distribution-rules/";
}

impl Listing for Logist {
    const COLLECTION: &'static str = "logists/";
}

impl Listing for Platform {
    const COLLECTION: &'static str = "platforms/";
}

#[derive(Debug, Serialize)]
struct PriceUpdate {
    new_price: f64,
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &DashboardConfig) -> Result<Self, ApiClientError> {
        let builder = Client::builder().user_agent(USER_AGENT);
        // The browser fetch backend has no client-wide timeout.
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.request_timeout);
        let http = builder.build()?;
        info!(base_url = %config.api_base_url, "API client ready");
        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    /// Fetches a whole collection in the order the server returns it.
    pub async fn list<R: Listing>(&self) -> Result<Vec<R>, ApiClientError> {
        let url = self.url(R::COLLECTION)?;
        debug!(%url, "GET");
        let records: Vec<R> = self.fetch_json(self.http.get(url)).await?;
        debug!(resource = R::COLLECTION, count = records.len(), "listing received");
        Ok(records)
    }

    pub async fn list_orders(&self) -> Result<Vec<Order>, ApiClientError> {
        self.list::<Order>().await
    }

    pub async fn list_distribution_rules(&self) -> Result<Vec<DistributionRule>, ApiClientError> {
        self.list::<DistributionRule>().await
    }

    pub async fn list_logists(&self) -> Result<Vec<Logist>, ApiClientError> {
        self.list::<Logist>().await
    }

    pub async fn list_platforms(&self) -> Result<Vec<Platform>, ApiClientError> {
        self.list::<Platform>().await
    }

    /// Sends a new VAT-inclusive price for an order. The response body is
    /// returned as-is; an empty body comes back as `Value::Null`.
    pub async fn update_order_price(
        &self,
        order_id: RecordId,
        new_price: f64,
    ) -> Result<serde_json::Value, ApiClientError> {
        let url = self.url(&format!("orders/{order_id}/price"))?;
        debug!(%url, new_price, "PATCH");
        let response = self
            .http
            .patch(url)
            .json(&PriceUpdate { new_price })
            .send()
            .await?;
        let response = check_status(response).await?;
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(serde_json::Value::Null);
        }
        Ok(serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
        }))
    }

    async fn fetch_json<T>(&self, builder: reqwest::RequestBuilder) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
    {
        let response = check_status(builder.send().await?).await?;
        Ok(response.json().await?)
    }

    fn url(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiClientError::Status { status, body })
}
