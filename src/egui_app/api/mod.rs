//! Receipts API Client
//!
//! One method per remote action. Every call is wrapped in the
//! `{action, data, userEmail}` envelope and handed to the configured
//! [`Transport`]; the unwrapped `data` is decoded into the record type the
//! action returns.

pub mod direct;
pub mod frame;
pub mod transport;

pub use direct::DirectTransport;
pub use frame::{FormPostHost, FrameHost, FrameTransport, HiddenForm};
pub use transport::{build_transport, Transport};

use crate::shared::config::AppConfig;
use crate::shared::error::ClientError;
use crate::shared::records::{
    ImageUpload, LoginResult, NewReceipt, NewSupplier, NewUser, Receipt, ReceiptUpdate,
    Supplier, SupplierUpdate, UploadedImage, User, UserUpdate,
};
use crate::shared::wire::{Action, RpcRequest};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::{Arc, RwLock};

/// Client for the receipts endpoint.
///
/// Cloning is cheap; clones share the transport and the signed-in email, so a
/// clone handed to a background task tags its requests the same way.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    user_email: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            user_email: Arc::new(RwLock::new(None)),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Ok(Self::new(build_transport(config)?))
    }

    /// Tag subsequent requests with this user (or none)
    pub fn set_user_email(&self, email: Option<String>) {
        let mut guard = self
            .user_email
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = email;
    }

    pub fn user_email(&self) -> Option<String> {
        self.user_email
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    async fn call<T, D>(&self, action: Action, data: D) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        D: Serialize,
    {
        let request = RpcRequest::new(action, serde_json::to_value(data)?, self.user_email());
        tracing::debug!("→ {} via {}", action, self.transport.name());

        let value = self.transport.send(&request).await.inspect_err(|e| {
            tracing::warn!("✗ {} failed: {}", action, e);
        })?;

        serde_json::from_value(value).map_err(|e| {
            tracing::warn!("✗ {} returned unexpected data: {}", action, e);
            ClientError::transport(format!("Unexpected {} response: {}", action, e))
        })
    }

    // Authentication

    pub async fn login(&self, email: &str) -> Result<LoginResult, ClientError> {
        self.call(Action::Login, json!({ "email": email })).await
    }

    pub async fn get_current_user(&self) -> Result<Option<User>, ClientError> {
        self.call(Action::GetCurrentUser, json!({})).await
    }

    // Users

    pub async fn create_user(&self, user: &NewUser) -> Result<User, ClientError> {
        self.call(Action::CreateUser, user).await
    }

    pub async fn get_users(&self) -> Result<Vec<User>, ClientError> {
        self.call(Action::GetUsers, json!({})).await
    }

    pub async fn update_user(&self, user_id: &str, updates: &UserUpdate) -> Result<Value, ClientError> {
        self.call(Action::UpdateUser, with_id("userId", user_id, updates)?).await
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<(), ClientError> {
        let _: IgnoredAny = self.call(Action::DeleteUser, json!({ "userId": user_id })).await?;
        Ok(())
    }

    // Receipts

    pub async fn get_receipts(&self) -> Result<Vec<Receipt>, ClientError> {
        self.call(Action::GetReceipts, json!({})).await
    }

    pub async fn get_receipt(&self, receipt_id: &str) -> Result<Receipt, ClientError> {
        self.call(Action::GetReceipt, json!({ "receiptId": receipt_id })).await
    }

    pub async fn create_receipt(&self, receipt: &NewReceipt) -> Result<Receipt, ClientError> {
        self.call(Action::CreateReceipt, receipt).await
    }

    pub async fn update_receipt(
        &self,
        receipt_id: &str,
        updates: &ReceiptUpdate,
    ) -> Result<Value, ClientError> {
        self.call(Action::UpdateReceipt, with_id("receiptId", receipt_id, updates)?)
            .await
    }

    pub async fn delete_receipt(&self, receipt_id: &str) -> Result<(), ClientError> {
        let _: IgnoredAny = self.call(Action::DeleteReceipt, json!({ "receiptId": receipt_id })).await?;
        Ok(())
    }

    pub async fn upload_image(&self, upload: &ImageUpload) -> Result<UploadedImage, ClientError> {
        self.call(Action::UploadImage, upload).await
    }

    // Suppliers

    pub async fn get_suppliers(&self) -> Result<Vec<Supplier>, ClientError> {
        self.call(Action::GetSuppliers, json!({})).await
    }

    pub async fn create_supplier(&self, supplier: &NewSupplier) -> Result<Supplier, ClientError> {
        self.call(Action::CreateSupplier, supplier).await
    }

    pub async fn update_supplier(
        &self,
        supplier_id: &str,
        updates: &SupplierUpdate,
    ) -> Result<Value, ClientError> {
        self.call(Action::UpdateSupplier, with_id("supplierId", supplier_id, updates)?)
            .await
    }

    pub async fn delete_supplier(&self, supplier_id: &str) -> Result<(), ClientError> {
        let _: IgnoredAny = self.call(Action::DeleteSupplier, json!({ "supplierId": supplier_id })).await?;
        Ok(())
    }

    // Analytics

    pub async fn get_dashboard_stats(&self) -> Result<Value, ClientError> {
        self.call(Action::GetDashboardStats, json!({})).await
    }

    pub async fn get_top_suppliers(&self) -> Result<Value, ClientError> {
        self.call(Action::GetTopSuppliers, json!({})).await
    }
}

/// `{<key>: id, ...updates}`
fn with_id(key: &str, id: &str, updates: impl Serialize) -> Result<Value, ClientError> {
    let mut value = serde_json::to_value(updates)?;
    let object = value
        .as_object_mut()
        .ok_or_else(|| ClientError::serialization("update payload must be an object"))?;
    object.insert(key.to_string(), Value::String(id.to_string()));
    Ok(value)
}
