//! Shared HTTP client for the REST API.
//!
//! Returns the raw status and body; decoding the envelope is left to the
//! caller so that error statuses can still surface server messages.

use contracts::shared::error::AppError;
use gloo_net::http::Request;

use super::browser_storage::get_access_token;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
}

fn get_auth_header() -> Option<String> {
    get_access_token().map(|token| format!("Bearer {}", token))
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn get(&self, path: &str) -> Result<RawResponse, AppError> {
        let mut request = Request::get(&self.url(path));
        if let Some(auth_header) = get_auth_header() {
            request = request.header("Authorization", &auth_header);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::network(format!("Failed to send request: {}", e)))?;
        Self::read(response).await
    }

    pub async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<RawResponse, AppError> {
        let mut request = Request::post(&self.url(path));
        if let Some(auth_header) = get_auth_header() {
            request = request.header("Authorization", &auth_header);
        }

        let response = request
            .json(body)
            .map_err(|e| AppError::server(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| AppError::network(format!("Failed to send request: {}", e)))?;
        Self::read(response).await
    }

    async fn read(response: gloo_net::http::Response) -> Result<RawResponse, AppError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::network(format!("Failed to read response: {}", e)))?;
        log::debug!("{} {} ({} bytes)", status, response.url(), body.len());
        Ok(RawResponse { status, body })
    }
}
