//! Customers API client.
//!
//! The controller only sees the [`CustomersApi`] trait; [`HttpCustomersApi`]
//! is the production implementation over the JSON backend.

use async_trait::async_trait;
use thiserror::Error;

use super::customer::{CustomerId, ResultSnapshot};
use super::query::QueryPayload;
use crate::config::BusinessConfig;
use crate::http::{Client, HttpError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("API returned status {status}")]
    Status { status: u16, body: String },
    #[error("Failed to parse {what}: {message}")]
    Decode { what: &'static str, message: String },
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Remote data source for the customers view.
#[async_trait]
pub trait CustomersApi: Send + Sync {
    /// Runs a search and returns one page of results.
    async fn search(&self, payload: QueryPayload) -> ApiResult<ResultSnapshot>;

    /// Deletes a customer. Resolves once the backend acknowledged it.
    async fn delete(&self, id: CustomerId) -> ApiResult<()>;
}

/// `POST {base}/customers/search` and `DELETE {base}/customers/{id}`.
#[derive(Debug, Clone)]
pub struct HttpCustomersApi {
    client: Client,
    config: BusinessConfig,
}

impl HttpCustomersApi {
    pub fn new(config: BusinessConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

fn status_error(status: u16, body: String) -> ApiError {
    ApiError::Status { status, body }
}

#[async_trait]
impl CustomersApi for HttpCustomersApi {
    async fn search(&self, payload: QueryPayload) -> ApiResult<ResultSnapshot> {
        let url = self.config.endpoint("customers/search");
        log::debug!(
            "Searching customers: status={} skip={} limit={}",
            payload.status,
            payload.skip,
            payload.limit
        );

        let response = self
            .client
            .post(url.as_str())
            .bearer(self.config.api_token())
            .timeout(self.config.request_timeout())
            .json(&payload)?
            .send()
            .await?;

        if !response.is_success() {
            return Err(status_error(response.status, response.text_lossy()));
        }

        response.json().map_err(|e| ApiError::Decode {
            what: "customer search result",
            message: e.to_string(),
        })
    }

    async fn delete(&self, id: CustomerId) -> ApiResult<()> {
        let url = self.config.endpoint(&format!("customers/{id}"));
        log::debug!("Deleting customer {id}");

        let response = self
            .client
            .delete(url.as_str())
            .bearer(self.config.api_token())
            .timeout(self.config.request_timeout())
            .send()
            .await?;

        if !response.is_success() {
            return Err(status_error(response.status, response.text_lossy()));
        }
        Ok(())
    }
}
