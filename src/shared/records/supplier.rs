use super::lenient;
use serde::{Deserialize, Serialize};

/// A supplier; `name` is the join key receipts refer to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub contact: Option<String>,
}

/// Payload for `createSupplier`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewSupplier {
    pub name: String,
    pub category: String,
    pub contact: String,
}

/// Payload for `updateSupplier`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SupplierUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}
