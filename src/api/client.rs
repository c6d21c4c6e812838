//! Reqwest implementation of [`ChatBackend`].
//!
//! One shared `reqwest::Client` per backend; no timeouts and no retries —
//! a pending call runs to completion or failure, and the caller decides
//! what the failure means.

use async_trait::async_trait;
use log::{debug, warn};

use super::backend::{ApiError, ChatBackend};
use super::types::{ChatReply, ChatRequest, ErrorBody, HealthStatus, SessionCreated};

/// The exact detail string the service sends when its upstream credential
/// is unset. Matching it (on a 500) is what distinguishes a configuration
/// failure from an ordinary API error.
pub const API_KEY_UNSET_DETAIL: &str = "OpenRouter API key not configured";

pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Turn a non-2xx response into the matching [`ApiError`], consuming
    /// the body for its optional `detail`.
    async fn classify_failure(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let body: ErrorBody = response.json().await.unwrap_or_default();
        warn!("service error: HTTP {} - {:?}", status, body.detail);

        if status == 500 && body.detail.as_deref() == Some(API_KEY_UNSET_DETAIL) {
            return ApiError::ApiKeyMissing;
        }
        ApiError::Api {
            status,
            detail: body.detail,
        }
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn send_message(
        &self,
        message: &str,
        session_id: Option<&str>,
    ) -> Result<ChatReply, ApiError> {
        let payload = ChatRequest {
            message,
            session_id,
        };
        debug!(
            "POST /chat (session: {})",
            session_id.unwrap_or("<new>")
        );

        let response = self
            .client
            .post(format!("{}/chat", self.base_url))
            .json(&payload)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::classify_failure(response).await);
        }

        response
            .json::<ChatReply>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn create_session(&self) -> Result<SessionCreated, ApiError> {
        debug!("POST /chat/new");

        let response = self
            .client
            .post(format!("{}/chat/new", self.base_url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::classify_failure(response).await);
        }

        response
            .json::<SessionCreated>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn check_health(&self) -> Result<(), ApiError> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ApiError::Api {
                status: response.status().as_u16(),
                detail: None,
            });
        }

        // Body is informational only; a 2xx already means healthy.
        if let Ok(health) = response.json::<HealthStatus>().await {
            debug!(
                "health: {} ({} active sessions)",
                health.status, health.sessions_count
            );
        }
        Ok(())
    }
}
