//! Receipt records and their create/update payloads

use super::amount::Amount;
use super::lenient;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A recorded purchase receipt.
///
/// `supplier` is matched against [`Supplier::name`](super::Supplier) by value;
/// nothing guarantees a matching supplier exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub supplier: String,
    #[serde(deserialize_with = "lenient::string")]
    pub receipt_number: String,
    pub amount: Amount,
    /// `None` when the sheet cell is blank or unreadable
    #[serde(default, with = "lenient::optional_date")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub notes: Option<String>,
    /// Image URL or embedded data
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub image: Option<String>,
}

/// Payload for `createReceipt`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReceipt {
    pub supplier: String,
    pub receipt_number: String,
    pub amount: Amount,
    #[serde(with = "lenient::date")]
    pub date: NaiveDate,
    pub notes: String,
    pub image: Option<String>,
}

/// Payload for `updateReceipt`; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Encoded image payload for `uploadImage`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUpload {
    /// Base64 file contents, no data-URL prefix
    pub image: String,
    pub filename: String,
    pub mime_type: String,
}

/// Result of `uploadImage`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadedImage {
    pub url: String,
}
