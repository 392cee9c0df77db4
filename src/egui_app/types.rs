/**
 * Shared Types Module
 *
 * View states and the editable forms behind the add dialogs. Forms hold raw
 * input text; `validate` plays the part of the form's required/number
 * constraints and is the only way to obtain a create payload.
 */

use crate::shared::error::ClientError;
use crate::shared::records::lenient::parse_date;
use crate::shared::records::{Amount, ImageUpload, NewReceipt, NewSupplier};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::NaiveDate;
use std::path::Path;

/// Current app view/mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppView {
    /// Identity provider / development sign-in
    #[default]
    SignIn,
    Dashboard,
    Receipts,
    Suppliers,
    /// User administration (Management)
    Users,
}

impl AppView {
    pub fn label(self) -> &'static str {
        match self {
            AppView::SignIn => "Sign in",
            AppView::Dashboard => "📊 Dashboard",
            AppView::Receipts => "🧾 Receipts",
            AppView::Suppliers => "🏪 Suppliers",
            AppView::Users => "👥 Users",
        }
    }
}

fn required(field: &str, value: &str) -> Result<String, ClientError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ClientError::validation(field, format!("{} is required", field)));
    }
    Ok(value.to_string())
}

/// Add-receipt dialog input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReceiptForm {
    pub supplier: String,
    pub receipt_number: String,
    pub amount: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub notes: String,
    /// Local image file to upload before creating the receipt
    pub image_path: String,
}

impl ReceiptForm {
    /// Blank form dated `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today.format("%Y-%m-%d").to_string(),
            ..Default::default()
        }
    }

    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }

    pub fn validate(&self) -> Result<NewReceipt, ClientError> {
        let supplier = required("supplier", &self.supplier)?;
        let receipt_number = required("receipt number", &self.receipt_number)?;
        let amount = Amount::parse(&self.amount)?;
        let date = parse_date(self.date.trim())
            .ok_or_else(|| ClientError::validation("date", "date must be YYYY-MM-DD"))?;

        Ok(NewReceipt {
            supplier,
            receipt_number,
            amount,
            date,
            notes: self.notes.trim().to_string(),
            image: None,
        })
    }

    pub fn image_path(&self) -> Option<&Path> {
        let path = self.image_path.trim();
        (!path.is_empty()).then(|| Path::new(path))
    }
}

/// Add-supplier dialog input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplierForm {
    pub name: String,
    pub category: String,
    pub contact: String,
}

impl SupplierForm {
    pub fn validate(&self) -> Result<NewSupplier, ClientError> {
        Ok(NewSupplier {
            name: required("name", &self.name)?,
            category: required("category", &self.category)?,
            contact: self.contact.trim().to_string(),
        })
    }
}

/// MIME type guessed from the file extension
pub fn mime_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("heic") => "image/heic",
        Some("bmp") => "image/bmp",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

/// Upload payload for raw file bytes: bare base64 (no data-URL prefix) and a
/// `receipt_<millis>_<name>` filename
pub fn image_upload(file_name: &str, bytes: &[u8], mime_type: &str, millis: i64) -> ImageUpload {
    ImageUpload {
        image: STANDARD.encode(bytes),
        filename: format!("receipt_{}_{}", millis, file_name),
        mime_type: mime_type.to_string(),
    }
}

/// Read an image file into an upload payload
pub fn read_image_upload(path: &Path) -> Result<ImageUpload, ClientError> {
    let bytes = std::fs::read(path)
        .map_err(|e| ClientError::validation("image", format!("{}: {}", path.display(), e)))?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("image");
    let millis = chrono::Utc::now().timestamp_millis();
    Ok(image_upload(file_name, &bytes, mime_type_for(path), millis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()
    }

    fn filled() -> ReceiptForm {
        ReceiptForm {
            supplier: " Mama Put Foods ".to_string(),
            receipt_number: "1042".to_string(),
            amount: "12.50".to_string(),
            notes: "rice and palm oil".to_string(),
            ..ReceiptForm::new(today())
        }
    }

    #[test]
    fn test_app_view_default_is_sign_in() {
        assert_eq!(AppView::default(), AppView::SignIn);
        assert_eq!(AppView::Receipts.label(), "🧾 Receipts");
    }

    #[test]
    fn test_new_form_defaults_to_today() {
        assert_eq!(ReceiptForm::new(today()).date, "2025-01-05");
    }

    #[test]
    fn test_receipt_form_validates() {
        let draft = filled().validate().unwrap();
        assert_eq!(draft.supplier, "Mama Put Foods");
        assert_eq!(draft.amount, Amount::from_cents(1250));
        assert_eq!(draft.date, today());
        assert!(draft.image.is_none());
    }

    #[test]
    fn test_receipt_form_rejects_missing_fields() {
        let mut form = filled();
        form.supplier.clear();
        assert_matches!(form.validate(), Err(ClientError::Validation { field, .. }) if field == "supplier");

        let mut form = filled();
        form.amount = "-3".to_string();
        assert_matches!(form.validate(), Err(ClientError::Validation { .. }));

        let mut form = filled();
        form.date = "05/01/2025".to_string();
        assert_matches!(form.validate(), Err(ClientError::Validation { field, .. }) if field == "date");
    }

    #[test]
    fn test_reset_clears_input() {
        let mut form = filled();
        form.image_path = "/tmp/r.png".to_string();
        form.reset(today());
        assert_eq!(form, ReceiptForm::new(today()));
        assert!(form.image_path().is_none());
    }

    #[test]
    fn test_supplier_form_contact_optional() {
        let form = SupplierForm {
            name: "Fresh Fish Co".to_string(),
            category: "Seafood".to_string(),
            contact: String::new(),
        };
        assert_eq!(form.validate().unwrap().contact, "");

        let form = SupplierForm {
            category: String::new(),
            ..form
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_image_upload_payload() {
        let upload = image_upload("till.png", b"hi", "image/png", 1736035200000);
        assert_eq!(upload.image, "aGk=");
        assert_eq!(upload.filename, "receipt_1736035200000_till.png");
        assert_eq!(upload.mime_type, "image/png");
    }

    #[test]
    fn test_mime_type_from_extension() {
        assert_eq!(mime_type_for(Path::new("a/B.JPG")), "image/jpeg");
        assert_eq!(mime_type_for(Path::new("scan.pdf")), "application/pdf");
        assert_eq!(mime_type_for(Path::new("noext")), "application/octet-stream");
    }

    #[test]
    fn test_read_image_upload_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("till.png");
        std::fs::write(&path, b"hi").unwrap();

        let upload = read_image_upload(&path).unwrap();
        assert_eq!(upload.image, "aGk=");
        assert!(upload.filename.starts_with("receipt_"));
        assert!(upload.filename.ends_with("_till.png"));
    }

    #[test]
    fn test_read_missing_image_is_validation_error() {
        let result = read_image_upload(Path::new("/definitely/not/here.png"));
        assert_matches!(result, Err(ClientError::Validation { field, .. }) if field == "image");
    }
}
