//! In-memory transport that records every envelope and answers from a
//! per-action table

use async_trait::async_trait;
use receipt_manager::egui_app::api::{ApiClient, Transport};
use receipt_manager::shared::{Action, ClientError, RpcRequest};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub struct RecordingTransport {
    routes: Mutex<HashMap<Action, Result<Value, ClientError>>>,
    requests: Mutex<Vec<RpcRequest>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            routes: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Answer `action` with `data`
    pub fn respond(self: &Arc<Self>, action: Action, data: Value) -> Arc<Self> {
        self.routes.lock().unwrap().insert(action, Ok(data));
        self.clone()
    }

    /// Fail `action` with `error`
    pub fn fail(self: &Arc<Self>, action: Action, error: ClientError) -> Arc<Self> {
        self.routes.lock().unwrap().insert(action, Err(error));
        self.clone()
    }

    pub fn api(self: &Arc<Self>) -> ApiClient {
        ApiClient::new(self.clone())
    }

    pub fn requests(&self) -> Vec<RpcRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn actions(&self) -> Vec<Action> {
        self.requests().into_iter().map(|r| r.action).collect()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: &RpcRequest) -> Result<Value, ClientError> {
        self.requests.lock().unwrap().push(request.clone());
        self.routes
            .lock()
            .unwrap()
            .get(&request.action)
            .cloned()
            .unwrap_or_else(|| Err(ClientError::remote(format!("Unknown action: {}", request.action))))
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
