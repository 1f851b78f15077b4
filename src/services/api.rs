//! Attendance API client
//!
//! Thin JSON-over-HTTP client for the external attendance API. It owns the
//! reqwest client, the base URL and the bearer token issued at login, and
//! maps transport and status failures onto [`ApiError`]. No retries and no
//! caching.

use std::sync::Arc;
use std::time::Duration;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, warn};
use crate::config::ApiConfig;
use crate::utils::errors::{ApiError, AttendanceError, Result};

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    /// Create a new ApiClient instance
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let parsed = url::Url::parse(&config.base_url)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(AttendanceError::Http)?;

        Ok(Self {
            client,
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(None)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Attach a bearer token to every subsequent request
    pub async fn set_token(&self, token: Option<String>) {
        *self.token.write().await = token;
    }

    pub async fn has_token(&self) -> bool {
        self.token.read().await.is_some()
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.send(Method::GET, path, None::<&()>).await?;
        Self::decode(path, response).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let response = self.send(Method::POST, path, Some(body)).await?;
        Self::decode(path, response).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let response = self.send(Method::PUT, path, Some(body)).await?;
        Self::decode(path, response).await
    }

    /// DELETE a resource; the response body is ignored
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.send(Method::DELETE, path, None::<&()>).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match self.token.read().await.as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<B: Serialize + ?Sized>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Response> {
        debug!(method = %method, path = path, "Sending attendance API request");

        let mut builder = self.request(method.clone(), path).await;
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(method = %method, path = path, error = %e, "Attendance API request failed");
            if e.is_timeout() {
                AttendanceError::Api(ApiError::Timeout)
            } else if e.is_connect() {
                AttendanceError::Api(ApiError::ServiceUnavailable)
            } else {
                AttendanceError::Api(ApiError::RequestFailed(e.to_string()))
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(method = %method, path = path, status = status.as_u16(), "Attendance API returned an error status");
            return Err(AttendanceError::Api(ApiError::Status {
                status: status.as_u16(),
                body,
            }));
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T> {
        response.json::<T>().await.map_err(|e| {
            warn!(path = path, error = %e, "Could not decode attendance API response");
            AttendanceError::Api(ApiError::InvalidResponse(e.to_string()))
        })
    }
}
