//! HTTP transport for the assistant endpoint.
//!
//! A single URL accepts `POST` with `Content-Type: application/json`. The
//! remote service tells chat and routine requests apart by the payload key
//! (`messages` vs `products`); there is no separate route or header.
//!
//! No authentication, no timeout, no retries.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shelfchat_core::assistant::{
    AssistantTransport, ChatRequest, ChatResponse, RoutineRequest, RoutineResponse,
};
use shelfchat_core::error::FetchError;
use shelfchat_core::message::Message;
use shelfchat_core::product::Product;
use tracing::{debug, warn};

/// The assistant endpoint over HTTPS.
pub struct HttpAssistant {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpAssistant {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST `body` as JSON and decode the response as `R`.
    async fn post<B, R>(&self, body: &B) -> Result<R, FetchError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned + Send,
    {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Assistant endpoint returned error");
            return Err(FetchError::Status {
                status_code: status,
                message: error_body,
            });
        }

        response
            .json::<R>()
            .await
            .map_err(|e| FetchError::Parse(format!("Failed to parse response: {e}")))
    }
}

#[async_trait]
impl AssistantTransport for HttpAssistant {
    fn name(&self) -> &str {
        "http"
    }

    async fn chat(&self, messages: &[Message]) -> Result<String, FetchError> {
        debug!(endpoint = %self.endpoint, turns = messages.len(), "Sending chat request");
        let body = ChatRequest {
            messages: messages.to_vec(),
        };
        let response: ChatResponse = self.post(&body).await?;
        Ok(response.reply)
    }

    async fn routine(&self, products: &[Product]) -> Result<String, FetchError> {
        debug!(endpoint = %self.endpoint, products = products.len(), "Sending routine request");
        let body = RoutineRequest {
            products: products.to_vec(),
        };
        let response: RoutineResponse = self.post(&body).await?;
        Ok(response.routine)
    }
}
