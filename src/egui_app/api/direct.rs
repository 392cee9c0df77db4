//! Direct request strategy.
//!
//! Posts the envelope as `text/plain` so the script host never sees a
//! preflight, then reads the JSON answer straight from the response body.

use crate::egui_app::api::transport::Transport;
use crate::shared::error::ClientError;
use crate::shared::wire::{RpcRequest, RpcResponse};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

pub const PLAIN_TEXT: &str = "text/plain;charset=utf-8";

pub struct DirectTransport {
    client: Client,
    endpoint: String,
}

impl DirectTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::transport(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl Transport for DirectTransport {
    async fn send(&self, request: &RpcRequest) -> Result<Value, ClientError> {
        let body = request.to_json()?;

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, PLAIN_TEXT)
            .body(body)
            .send()
            .await
            .map_err(|e| ClientError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::transport(format!("HTTP {}", status)));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ClientError::transport(format!("Failed to read response: {}", e)))?;

        RpcResponse::parse(&text)?.into_result()
    }

    fn name(&self) -> &'static str {
        "direct"
    }
}
