//! HTTP implementation of [`BugApi`] over `reqwest`.

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::filter::FilterState;
use crate::types::{
    Bug, BugId, BugUpdate, DeleteConfirmation, HealthStatus, NewBug, Prediction, Stats,
};

use super::error::extract_server_message;
use super::{ApiError, ApiResult, BugApi, ClientConfig};

#[derive(Serialize)]
struct PredictionRequest<'a> {
    title: &'a str,
    description: &'a str,
}

/// Bug service client bound to one base URL.
#[derive(Debug, Clone)]
pub struct HttpBugApi {
    client: Client,
    config: ClientConfig,
}

impl HttpBugApi {
    /// Build a client from an explicit configuration.
    ///
    /// All bodies are JSON and every request is bounded by `config.timeout`.
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::LocalFault(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// URL for the list endpoint with exactly the non-empty filter fields.
    pub fn list_url(&self, filter: &FilterState) -> ApiResult<Url> {
        let mut url = self.config.endpoint("/api/bugs")?;
        let pairs = filter.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!("API request: {} {}", method, url.path());
        self.client.request(method, url)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = request.send().await.map_err(|e| {
            let err = ApiError::from(e);
            tracing::warn!("API request failed: {err}");
            err
        })?;

        let status = response.status();
        let path = response.url().path().to_string();
        tracing::debug!("API response: {} {}", status.as_u16(), path);

        if !status.is_success() {
            // An unreadable error body still leaves us with the status.
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::server(status.as_u16(), extract_server_message(&body));
            tracing::warn!("API error on {path}: {err}");
            return Err(err);
        }

        response.json::<T>().await.map_err(ApiError::from)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.config.endpoint(path)?;
        self.send(self.request(Method::GET, url)).await
    }
}

impl BugApi for HttpBugApi {
    async fn list_bugs(&self, filter: &FilterState) -> ApiResult<Vec<Bug>> {
        let url = self.list_url(filter)?;
        self.send(self.request(Method::GET, url)).await
    }

    async fn get_bug(&self, id: BugId) -> ApiResult<Bug> {
        self.get(&format!("/api/bugs/{id}")).await
    }

    async fn create_bug(&self, bug: &NewBug) -> ApiResult<Bug> {
        let url = self.config.endpoint("/api/bugs")?;
        self.send(self.request(Method::POST, url).json(bug)).await
    }

    async fn update_bug(&self, id: BugId, update: &BugUpdate) -> ApiResult<Bug> {
        let url = self.config.endpoint(&format!("/api/bugs/{id}"))?;
        self.send(self.request(Method::PUT, url).json(update)).await
    }

    async fn delete_bug(&self, id: BugId) -> ApiResult<DeleteConfirmation> {
        let url = self.config.endpoint(&format!("/api/bugs/{id}"))?;
        self.send(self.request(Method::DELETE, url)).await
    }

    async fn fetch_stats(&self) -> ApiResult<Stats> {
        self.get("/api/stats").await
    }

    async fn predict(&self, title: &str, description: &str) -> ApiResult<Prediction> {
        let url = self.config.endpoint("/api/predict")?;
        let body = PredictionRequest { title, description };
        self.send(self.request(Method::POST, url).json(&body)).await
    }

    async fn health(&self) -> ApiResult<HealthStatus> {
        self.get("/health").await
    }
}
