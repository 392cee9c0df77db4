//! Application data and the workflows that change it.
//!
//! The async functions here only talk to the endpoint. Their results come
//! back as [`DataEvent`]s and [`AppData::apply`] is the single place the
//! collections are mutated, so a failed call leaves them exactly as they were.

use crate::egui_app::api::ApiClient;
use crate::egui_app::notifications::{
    Notice, LOAD_FAILED, RECEIPT_ADDED, RECEIPT_DELETED, RECEIPT_DELETE_FAILED,
    SUPPLIER_ADDED, SUPPLIER_DELETED, SUPPLIER_DELETE_FAILED,
};
use crate::egui_app::types::{read_image_upload, AppView};
use crate::shared::analytics::has_receipts;
use crate::shared::error::ClientError;
use crate::shared::records::{NewReceipt, NewSupplier, Receipt, Supplier};
use std::collections::VecDeque;
use std::path::PathBuf;

/// Collections and view flag for one signed-in session
#[derive(Debug, Clone, PartialEq)]
pub struct AppData {
    pub receipts: Vec<Receipt>,
    pub suppliers: Vec<Supplier>,
    pub current_view: AppView,
}

impl Default for AppData {
    fn default() -> Self {
        Self {
            receipts: Vec::new(),
            suppliers: Vec::new(),
            current_view: AppView::Dashboard,
        }
    }
}

/// Both startup fetches, each settled on its own
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    pub receipts: Result<Vec<Receipt>, ClientError>,
    pub suppliers: Result<Vec<Supplier>, ClientError>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DataEvent {
    Loaded(LoadOutcome),
    ReceiptCreated(Result<Receipt, ClientError>),
    SupplierCreated(Result<Supplier, ClientError>),
    ReceiptDeleted {
        id: String,
        result: Result<(), ClientError>,
    },
    SupplierDeleted {
        id: String,
        result: Result<(), ClientError>,
    },
}

impl AppData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch views; nothing is refetched
    pub fn show(&mut self, view: AppView) {
        self.current_view = view;
    }

    pub fn apply(&mut self, event: DataEvent) -> Vec<Notice> {
        let mut notices = Vec::new();

        match event {
            DataEvent::Loaded(outcome) => {
                let mut degraded = false;
                self.receipts = outcome.receipts.unwrap_or_else(|e| {
                    tracing::error!("Error fetching receipts: {}", e);
                    degraded = true;
                    Vec::new()
                });
                self.suppliers = outcome.suppliers.unwrap_or_else(|e| {
                    tracing::error!("Error fetching suppliers: {}", e);
                    degraded = true;
                    Vec::new()
                });
                tracing::info!(
                    "Loaded {} receipts and {} suppliers",
                    self.receipts.len(),
                    self.suppliers.len()
                );
                if degraded {
                    notices.push(Notice::new(LOAD_FAILED));
                }
            }
            DataEvent::ReceiptCreated(Ok(receipt)) => {
                tracing::info!("Receipt {} created", receipt.id);
                self.receipts.insert(0, receipt);
                notices.push(Notice::new(RECEIPT_ADDED));
            }
            DataEvent::ReceiptCreated(Err(e)) => {
                tracing::error!("Error adding receipt: {}", e);
                notices.push(Notice::receipt_add_failed(&e.to_string()));
            }
            DataEvent::SupplierCreated(Ok(supplier)) => {
                tracing::info!("Supplier {} created", supplier.name);
                self.suppliers.push(supplier);
                notices.push(Notice::new(SUPPLIER_ADDED));
            }
            DataEvent::SupplierCreated(Err(e)) => {
                tracing::error!("Error adding supplier: {}", e);
                notices.push(Notice::supplier_add_failed(&e.to_string()));
            }
            DataEvent::ReceiptDeleted { id, result: Ok(()) } => {
                self.receipts.retain(|r| r.id != id);
                notices.push(Notice::new(RECEIPT_DELETED));
            }
            DataEvent::ReceiptDeleted { id, result: Err(e) } => {
                tracing::error!("Error deleting receipt {}: {}", id, e);
                notices.push(Notice::new(RECEIPT_DELETE_FAILED));
            }
            DataEvent::SupplierDeleted { id, result: Ok(()) } => {
                self.suppliers.retain(|s| s.id != id);
                notices.push(Notice::new(SUPPLIER_DELETED));
            }
            DataEvent::SupplierDeleted { id, result: Err(e) } => {
                tracing::error!("Error deleting supplier {}: {}", id, e);
                notices.push(Notice::new(SUPPLIER_DELETE_FAILED));
            }
        }

        notices
    }
}

/// Fetch receipts and suppliers concurrently; one failing does not cancel
/// the other
pub async fn load_collections(api: &ApiClient) -> LoadOutcome {
    let (receipts, suppliers) = futures_util::join!(api.get_receipts(), api.get_suppliers());
    LoadOutcome {
        receipts,
        suppliers,
    }
}

/// Upload the image (when given) and create the receipt pointing at it
pub async fn submit_receipt(
    api: &ApiClient,
    mut draft: NewReceipt,
    image: Option<PathBuf>,
) -> Result<Receipt, ClientError> {
    if let Some(path) = image {
        let upload = read_image_upload(&path)?;
        tracing::debug!("Uploading {} ({})", upload.filename, upload.mime_type);
        draft.image = Some(api.upload_image(&upload).await?.url);
    }
    api.create_receipt(&draft).await
}

pub async fn submit_supplier(api: &ApiClient, draft: NewSupplier) -> Result<Supplier, ClientError> {
    api.create_supplier(&draft).await
}

/// What a fully confirmed delete removes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    Receipt { id: String },
    Supplier { id: String, name: String },
}

/// Issue the delete call for a confirmed target
pub async fn run_delete(api: &ApiClient, target: DeleteTarget) -> DataEvent {
    match target {
        DeleteTarget::Receipt { id } => {
            let result = api.delete_receipt(&id).await;
            DataEvent::ReceiptDeleted { id, result }
        }
        DeleteTarget::Supplier { id, name } => {
            tracing::info!("Deleting supplier {}", name);
            let result = api.delete_supplier(&id).await;
            DataEvent::SupplierDeleted { id, result }
        }
    }
}

/// Prompts that must all be accepted before a delete is issued.
///
/// Receipts ask once. Suppliers still referenced by a receipt ask a stronger
/// question first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmation {
    target: DeleteTarget,
    prompts: VecDeque<String>,
}

impl DeleteConfirmation {
    pub fn for_receipt(id: impl Into<String>) -> Self {
        Self {
            target: DeleteTarget::Receipt { id: id.into() },
            prompts: VecDeque::from([
                "Are you sure you want to delete this receipt?".to_string()
            ]),
        }
    }

    pub fn for_supplier(supplier: &Supplier, receipts: &[Receipt]) -> Self {
        let mut prompts = VecDeque::new();
        if has_receipts(receipts, &supplier.name) {
            prompts.push_back(format!(
                "This supplier has receipts associated with it. Are you sure you want to delete \"{}\"?",
                supplier.name
            ));
        }
        prompts.push_back(format!("Are you sure you want to delete {}?", supplier.name));

        Self {
            target: DeleteTarget::Supplier {
                id: supplier.id.clone(),
                name: supplier.name.clone(),
            },
            prompts,
        }
    }

    /// Question currently awaiting an answer
    pub fn prompt(&self) -> &str {
        self.prompts.front().map(String::as_str).unwrap_or_default()
    }

    pub fn target(&self) -> &DeleteTarget {
        &self.target
    }

    /// Accept the current prompt. Returns the target once nothing is left
    /// to ask.
    pub fn accept(&mut self) -> Option<DeleteTarget> {
        self.prompts.pop_front();
        self.prompts.is_empty().then(|| self.target.clone())
    }

    /// Answer every prompt with `confirm`, stopping at the first refusal
    pub fn resolve(mut self, mut confirm: impl FnMut(&str) -> bool) -> Option<DeleteTarget> {
        loop {
            if !confirm(self.prompt()) {
                tracing::debug!("Delete of {:?} declined", self.target);
                return None;
            }
            if let Some(target) = self.accept() {
                return Some(target);
            }
        }
    }
}
