//! Request and response envelopes for the single RPC endpoint.
//!
//! Every call is `{action, data, userEmail}`; every answer is
//! `{success, data | message}`.

use crate::shared::error::ClientError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Remote operation names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    Login,
    GetCurrentUser,
    CreateUser,
    GetUsers,
    UpdateUser,
    DeleteUser,
    GetReceipts,
    GetReceipt,
    CreateReceipt,
    UpdateReceipt,
    DeleteReceipt,
    UploadImage,
    GetSuppliers,
    CreateSupplier,
    UpdateSupplier,
    DeleteSupplier,
    GetDashboardStats,
    GetTopSuppliers,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Login => "login",
            Action::GetCurrentUser => "getCurrentUser",
            Action::CreateUser => "createUser",
            Action::GetUsers => "getUsers",
            Action::UpdateUser => "updateUser",
            Action::DeleteUser => "deleteUser",
            Action::GetReceipts => "getReceipts",
            Action::GetReceipt => "getReceipt",
            Action::CreateReceipt => "createReceipt",
            Action::UpdateReceipt => "updateReceipt",
            Action::DeleteReceipt => "deleteReceipt",
            Action::UploadImage => "uploadImage",
            Action::GetSuppliers => "getSuppliers",
            Action::CreateSupplier => "createSupplier",
            Action::UpdateSupplier => "updateSupplier",
            Action::DeleteSupplier => "deleteSupplier",
            Action::GetDashboardStats => "getDashboardStats",
            Action::GetTopSuppliers => "getTopSuppliers",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outbound envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    pub action: Action,
    pub data: Value,
    #[serde(rename = "userEmail")]
    pub user_email: Option<String>,
}

impl RpcRequest {
    pub fn new(action: Action, data: Value, user_email: Option<String>) -> Self {
        Self {
            action,
            data,
            user_email,
        }
    }

    pub fn to_json(&self) -> Result<String, ClientError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Inbound envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl RpcResponse {
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Parse a response body; anything unreadable is a transport failure
    pub fn parse(body: &str) -> Result<Self, ClientError> {
        serde_json::from_str(body)
            .map_err(|e| ClientError::transport(format!("Malformed response: {}", e)))
    }

    /// `success: false` becomes a remote rejection carrying the server message
    pub fn into_result(self) -> Result<Value, ClientError> {
        if self.success {
            Ok(self.data.unwrap_or(Value::Null))
        } else {
            Err(ClientError::remote(
                self.message.unwrap_or_else(|| "Unknown error".to_string()),
            ))
        }
    }
}
