//! Hidden-frame request strategy.
//!
//! For hosts whose cross-origin answers cannot be read directly, the envelope
//! is placed in a hidden form (single field `payload`) that targets a hidden
//! frame. The frame's loaded body is the response. Both temporary elements
//! are removed once the request settles, whether it succeeded, failed or ran
//! past the ceiling.

use crate::egui_app::api::transport::Transport;
use crate::shared::error::ClientError;
use crate::shared::wire::{RpcRequest, RpcResponse};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use uuid::Uuid;

/// Name of the form field carrying the serialized envelope
pub const PAYLOAD_FIELD: &str = "payload";

/// Elements inserted per request: the frame and the form
pub const ELEMENTS_PER_REQUEST: usize = 2;

/// A hidden form aimed at a hidden frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenForm {
    pub frame_name: String,
    pub action: String,
    pub field: String,
    pub value: String,
}

/// Identifies one attached frame/form pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameHandle {
    pub id: Uuid,
    pub frame_name: String,
}

/// The document the temporary elements are attached to
#[async_trait]
pub trait FrameHost: Send + Sync {
    /// Insert the frame and form
    fn attach(&self, form: HiddenForm) -> FrameHandle;

    /// Submit the form; resolves with the frame body once it loads
    async fn submit(&self, handle: &FrameHandle) -> Result<String, ClientError>;

    /// Remove the frame and form
    fn detach(&self, handle: &FrameHandle);

    /// Temporary elements currently attached
    fn attached_elements(&self) -> usize;
}

/// Detaches on drop, so a timed-out or failed request leaves nothing behind
struct Mounted<'a, H: FrameHost + ?Sized> {
    host: &'a H,
    handle: FrameHandle,
}

impl<H: FrameHost + ?Sized> Drop for Mounted<'_, H> {
    fn drop(&mut self) {
        self.host.detach(&self.handle);
    }
}

pub struct FrameTransport<H: FrameHost> {
    host: Arc<H>,
    endpoint: String,
    timeout: Duration,
}

impl<H: FrameHost> FrameTransport<H> {
    pub fn new(host: Arc<H>, endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            host,
            endpoint: endpoint.into(),
            timeout,
        }
    }

    pub fn host(&self) -> &Arc<H> {
        &self.host
    }
}

#[async_trait]
impl<H: FrameHost + 'static> Transport for FrameTransport<H> {
    async fn send(&self, request: &RpcRequest) -> Result<Value, ClientError> {
        let form = HiddenForm {
            frame_name: format!("api-frame-{}", Uuid::new_v4().simple()),
            action: self.endpoint.clone(),
            field: PAYLOAD_FIELD.to_string(),
            value: request.to_json()?,
        };

        let mounted = Mounted {
            host: self.host.as_ref(),
            handle: self.host.attach(form),
        };

        let body = match tokio::time::timeout(self.timeout, self.host.submit(&mounted.handle)).await
        {
            Ok(result) => result?,
            Err(_) => {
                tracing::warn!(
                    "{} via {} timed out after {:?}",
                    request.action,
                    mounted.handle.frame_name,
                    self.timeout
                );
                return Err(ClientError::Timeout);
            }
        };
        drop(mounted);

        RpcResponse::parse(&body)?.into_result()
    }

    fn name(&self) -> &'static str {
        "frame"
    }
}

/// Native frame host: attached elements live in memory and the form is
/// submitted as an urlencoded POST whose body stands in for the frame
/// document.
pub struct FormPostHost {
    client: Client,
    attached: Mutex<HashMap<Uuid, HiddenForm>>,
}

impl FormPostHost {
    pub fn new() -> Result<Self, ClientError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ClientError::transport(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            attached: Mutex::new(HashMap::new()),
        })
    }

    fn attached(&self) -> MutexGuard<'_, HashMap<Uuid, HiddenForm>> {
        self.attached.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl FrameHost for FormPostHost {
    fn attach(&self, form: HiddenForm) -> FrameHandle {
        let handle = FrameHandle {
            id: Uuid::new_v4(),
            frame_name: form.frame_name.clone(),
        };
        self.attached().insert(handle.id, form);
        handle
    }

    async fn submit(&self, handle: &FrameHandle) -> Result<String, ClientError> {
        let form = self
            .attached()
            .get(&handle.id)
            .cloned()
            .ok_or_else(|| ClientError::transport("Frame was detached before submit"))?;

        let response = self
            .client
            .post(&form.action)
            .form(&[(form.field.as_str(), form.value.as_str())])
            .send()
            .await
            .map_err(|e| ClientError::transport(e.to_string()))?;

        response
            .text()
            .await
            .map_err(|e| ClientError::transport(format!("Failed to read frame body: {}", e)))
    }

    fn detach(&self, handle: &FrameHandle) {
        self.attached().remove(&handle.id);
    }

    fn attached_elements(&self) -> usize {
        self.attached().len() * ELEMENTS_PER_REQUEST
    }
}
