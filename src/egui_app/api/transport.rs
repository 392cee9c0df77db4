//! Transport capability shared by the request strategies

use crate::egui_app::api::direct::DirectTransport;
use crate::egui_app::api::frame::{FormPostHost, FrameTransport};
use crate::shared::config::{AppConfig, TransportMode};
use crate::shared::error::ClientError;
use crate::shared::wire::RpcRequest;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Sends one envelope to the endpoint and returns the unwrapped `data`.
///
/// Implementations report `success: false` as [`ClientError::Remote`] and
/// everything else that goes wrong as a transport failure.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &RpcRequest) -> Result<Value, ClientError>;

    /// Short strategy name for logs
    fn name(&self) -> &'static str;
}

/// Pick the request strategy named by the configuration
pub fn build_transport(config: &AppConfig) -> Result<Arc<dyn Transport>, ClientError> {
    let transport: Arc<dyn Transport> = match config.transport {
        TransportMode::Direct => Arc::new(DirectTransport::new(
            &config.script_url,
            config.request_timeout(),
        )?),
        TransportMode::Frame => Arc::new(FrameTransport::new(
            Arc::new(FormPostHost::new()?),
            &config.script_url,
            config.request_timeout(),
        )),
    };
    tracing::info!(
        "Using {} transport for {}",
        transport.name(),
        config.script_url
    );
    Ok(transport)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_transport_follows_config() {
        let direct = AppConfig::builder().transport(TransportMode::Direct).build();
        assert_eq!(build_transport(&direct).unwrap().name(), "direct");

        let frame = AppConfig::builder().transport(TransportMode::Frame).build();
        assert_eq!(build_transport(&frame).unwrap().name(), "frame");
    }
}
