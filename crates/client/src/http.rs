//! Thin HTTP wrapper shared by every entity service.
//!
//! Owns the reqwest client, attaches the bearer token, and maps status
//! codes and transport failures into `ApiError`. Responses are read as
//! text first so error bodies survive for message extraction.

use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{message_from_body, ApiError};

pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    pub async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError> {
        let url = self.url(path);
        log::debug!("GET {}", url);
        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        self.send(request, path).await
    }

    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let url = self.url(path);
        log::debug!("POST {}", url);
        self.send(self.http.post(&url).json(body), path).await
    }

    pub async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let url = self.url(path);
        log::debug!("PUT {}", url);
        self.send(self.http.put(&url).json(body), path).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path);
        log::debug!("DELETE {}", url);
        self.send(self.http.delete(&url), path).await?;
        Ok(())
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        path: &str,
    ) -> Result<Value, ApiError> {
        let request = match &self.config.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request.send().await?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let message = message_from_body(&body)
                .unwrap_or_else(|| format!("request failed with status {}", status.as_u16()));
            if status.is_server_error() {
                log::warn!("server error {} on {}: {}", status.as_u16(), path, message);
            }
            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(ApiError::NotFound(message));
            }
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
