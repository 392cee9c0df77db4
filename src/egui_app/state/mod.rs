use std::future::Future;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::Instant;

use chrono::NaiveDate;
use tokio::runtime::Runtime;

use crate::egui_app::api::ApiClient;
use crate::egui_app::auth::Session;
use crate::egui_app::notifications::{Notice, Notifications};
use crate::egui_app::types::{AppView, ReceiptForm, SupplierForm};
use crate::egui_app::workflow::{
    self, AppData, DataEvent, DeleteConfirmation, DeleteTarget,
};
use crate::egui_app::Config;
use crate::shared::error::ClientError;
use crate::shared::permissions::{
    ADD_RECEIPT, DELETE_RECEIPT, MANAGE_SUPPLIERS, MANAGE_USERS, VIEW_SUPPLIERS,
};
use crate::shared::records::{LoginResult, User};

/// Results coming back from background tasks
#[derive(Debug)]
pub enum AppEvent {
    SignedIn(Result<LoginResult, ClientError>),
    Data(DataEvent),
    Users(Result<Vec<User>, ClientError>),
}

/// Central application state shared across egui views.
///
/// Network work runs on the owned runtime; results arrive on a channel that
/// `poll_events` drains once per frame, so every mutation happens on the UI
/// thread. Each result carries the session generation it was started under;
/// results from before the last sign-out are dropped.
pub struct AppState {
    pub config: Config,
    pub api: ApiClient,
    pub session: Session,
    /// Present while signed in
    pub data: Option<AppData>,
    pub notifications: Notifications,

    pub credential_input: String,
    pub dev_email_input: String,
    pub receipt_search: String,
    pub supplier_search: String,

    pub receipt_form: ReceiptForm,
    pub receipt_dialog_open: bool,
    pub saving_receipt: bool,
    pub show_suggestions: bool,
    pub supplier_form: SupplierForm,
    pub supplier_dialog_open: bool,
    pub saving_supplier: bool,

    /// Receipt shown in the detail dialog
    pub selected_receipt: Option<String>,
    pub pending_delete: Option<DeleteConfirmation>,
    pub users: Vec<User>,

    runtime: Runtime,
    events_tx: Sender<(u64, AppEvent)>,
    events_rx: Receiver<(u64, AppEvent)>,
    in_flight: usize,
    generation: u64,
}

impl AppState {
    /// Build the client from configuration and restore any stored session
    pub fn new(config: Config) -> Result<Self, ClientError> {
        let api = ApiClient::from_config(config.app())?;
        let storage = config.session_storage();
        let session = Session::restore(storage, config.app().permissions.clone(), &api);
        Self::with_parts(config, api, session)
    }

    pub fn with_parts(config: Config, api: ApiClient, session: Session) -> Result<Self, ClientError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("receipt-manager-io")
            .enable_all()
            .build()
            .map_err(|e| ClientError::transport(format!("Failed to start runtime: {}", e)))?;
        let (events_tx, events_rx) = channel();
        let dev_email_input = config.dev_user_email().unwrap_or_default().to_string();

        let mut state = Self {
            config,
            api,
            session,
            data: None,
            notifications: Notifications::new(),
            credential_input: String::new(),
            dev_email_input,
            receipt_search: String::new(),
            supplier_search: String::new(),
            receipt_form: ReceiptForm::default(),
            receipt_dialog_open: false,
            saving_receipt: false,
            show_suggestions: false,
            supplier_form: SupplierForm::default(),
            supplier_dialog_open: false,
            saving_supplier: false,
            selected_receipt: None,
            pending_delete: None,
            users: Vec::new(),
            runtime,
            events_tx,
            events_rx,
            in_flight: 0,
            generation: 0,
        };

        if state.session.is_signed_in() {
            state.enter_app();
        }
        Ok(state)
    }

    fn spawn<F>(&mut self, task: F)
    where
        F: Future<Output = AppEvent> + Send + 'static,
    {
        let tx = self.events_tx.clone();
        let generation = self.generation;
        self.in_flight += 1;
        self.runtime.spawn(async move {
            // The receiver only disappears on shutdown
            let _ = tx.send((generation, task.await));
        });
    }

    /// Requests still in flight
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn today() -> NaiveDate {
        chrono::Local::now().date_naive()
    }

    /// Drain finished background work; called once per frame
    pub fn poll_events(&mut self, now: Instant) {
        while let Ok((generation, event)) = self.events_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            if generation != self.generation {
                tracing::debug!("Dropping result from an earlier session: {:?}", event);
                continue;
            }
            self.handle_event(event, now);
        }
        self.notifications.prune(now);
    }

    fn handle_event(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::SignedIn(result) => {
                if !self.session.is_pending() {
                    tracing::debug!("Dropping login answer; no sign-in pending");
                    return;
                }
                if self.session.complete(result, &self.api) {
                    self.credential_input.clear();
                    self.enter_app();
                }
            }
            AppEvent::Data(event) => {
                match &event {
                    DataEvent::ReceiptCreated(result) => {
                        self.saving_receipt = false;
                        if result.is_ok() {
                            self.receipt_dialog_open = false;
                            self.show_suggestions = false;
                            self.receipt_form.reset(Self::today());
                        }
                    }
                    DataEvent::SupplierCreated(result) => {
                        self.saving_supplier = false;
                        if result.is_ok() {
                            self.supplier_dialog_open = false;
                            self.supplier_form = SupplierForm::default();
                        }
                    }
                    DataEvent::ReceiptDeleted { id, result: Ok(()) } => {
                        if self.selected_receipt.as_ref() == Some(id) {
                            self.selected_receipt = None;
                        }
                    }
                    _ => {}
                }

                match self.data.as_mut() {
                    Some(data) => {
                        let notices = data.apply(event);
                        self.notifications.extend(notices, now);
                    }
                    None => tracing::debug!("Dropping result after sign-out"),
                }
            }
            AppEvent::Users(Ok(users)) => {
                tracing::info!("Loaded {} users", users.len());
                self.users = users;
            }
            AppEvent::Users(Err(e)) => {
                tracing::error!("Error fetching users: {}", e);
                self.notifications
                    .push(Notice::new(format!("❌ Failed to load users: {}", e)), now);
            }
        }
    }

    /// Signed in: fresh collections, form dated today, then the initial load
    fn enter_app(&mut self) {
        self.data = Some(AppData::new());
        self.receipt_form.reset(Self::today());
        self.refresh();
    }

    /// Refetch both collections
    pub fn refresh(&mut self) {
        let api = self.api.clone();
        self.spawn(async move {
            AppEvent::Data(DataEvent::Loaded(workflow::load_collections(&api).await))
        });
    }

    fn request_login(&mut self, email: String) {
        let api = self.api.clone();
        self.spawn(async move { AppEvent::SignedIn(api.login(&email).await) });
    }

    pub fn handle_credential(&mut self) {
        let token = self.credential_input.trim().to_string();
        if let Ok(email) = self.session.begin_credential(&token) {
            self.request_login(email);
        }
    }

    pub fn handle_dev_login(&mut self) {
        if !self.config.dev_auth_bypass() {
            return;
        }
        let email = self.dev_email_input.trim().to_string();
        if email.is_empty() {
            return;
        }
        let email = self.session.begin_dev(&email);
        self.request_login(email);
    }

    pub fn logout(&mut self) {
        self.generation += 1;
        self.session.logout(&self.api);
        self.data = None;
        self.users.clear();
        self.credential_input.clear();
        self.receipt_search.clear();
        self.supplier_search.clear();
        self.receipt_form = ReceiptForm::default();
        self.receipt_dialog_open = false;
        self.saving_receipt = false;
        self.show_suggestions = false;
        self.supplier_form = SupplierForm::default();
        self.supplier_dialog_open = false;
        self.saving_supplier = false;
        self.selected_receipt = None;
        self.pending_delete = None;
    }

    pub fn current_view(&self) -> AppView {
        self.data
            .as_ref()
            .map(|data| data.current_view)
            .unwrap_or(AppView::SignIn)
    }

    /// Switch views; views the role cannot see are ignored
    pub fn show(&mut self, view: AppView) {
        let allowed = match view {
            AppView::SignIn => false,
            AppView::Dashboard | AppView::Receipts => true,
            AppView::Suppliers => self.can_view_suppliers(),
            AppView::Users => self.can_manage_users(),
        };
        if !allowed {
            return;
        }
        if let Some(data) = self.data.as_mut() {
            data.show(view);
        }
        if view == AppView::Users {
            let api = self.api.clone();
            self.spawn(async move { AppEvent::Users(api.get_users().await) });
        }
    }

    pub fn can_add_receipt(&self) -> bool {
        self.session.has_permission(ADD_RECEIPT)
    }

    pub fn can_delete_receipt(&self) -> bool {
        self.session.has_permission(DELETE_RECEIPT)
    }

    pub fn can_manage_suppliers(&self) -> bool {
        self.session.has_permission(MANAGE_SUPPLIERS)
    }

    pub fn can_view_suppliers(&self) -> bool {
        self.session
            .has_any_permission(&[VIEW_SUPPLIERS, MANAGE_SUPPLIERS])
    }

    pub fn can_manage_users(&self) -> bool {
        self.session.has_permission(MANAGE_USERS)
    }

    pub fn open_receipt_dialog(&mut self) {
        if self.can_add_receipt() {
            self.receipt_dialog_open = true;
        }
    }

    pub fn close_receipt_dialog(&mut self) {
        self.receipt_dialog_open = false;
        self.show_suggestions = false;
        self.receipt_form.reset(Self::today());
    }

    pub fn submit_receipt(&mut self, now: Instant) {
        if self.saving_receipt || !self.can_add_receipt() {
            return;
        }
        let draft = match self.receipt_form.validate() {
            Ok(draft) => draft,
            Err(e) => {
                self.notifications.push(Notice::new(format!("⚠️ {}", e)), now);
                return;
            }
        };
        let image: Option<PathBuf> = self.receipt_form.image_path().map(PathBuf::from);

        self.saving_receipt = true;
        let api = self.api.clone();
        self.spawn(async move {
            let result = workflow::submit_receipt(&api, draft, image).await;
            AppEvent::Data(DataEvent::ReceiptCreated(result))
        });
    }

    pub fn open_supplier_dialog(&mut self) {
        if self.can_manage_suppliers() {
            self.supplier_dialog_open = true;
        }
    }

    pub fn close_supplier_dialog(&mut self) {
        self.supplier_dialog_open = false;
        self.supplier_form = SupplierForm::default();
    }

    pub fn submit_supplier(&mut self, now: Instant) {
        if self.saving_supplier || !self.can_manage_suppliers() {
            return;
        }
        let draft = match self.supplier_form.validate() {
            Ok(draft) => draft,
            Err(e) => {
                self.notifications.push(Notice::new(format!("⚠️ {}", e)), now);
                return;
            }
        };

        self.saving_supplier = true;
        let api = self.api.clone();
        self.spawn(async move {
            let result = workflow::submit_supplier(&api, draft).await;
            AppEvent::Data(DataEvent::SupplierCreated(result))
        });
    }

    pub fn request_delete_receipt(&mut self, id: &str) {
        if self.can_delete_receipt() {
            self.pending_delete = Some(DeleteConfirmation::for_receipt(id));
        }
    }

    pub fn request_delete_supplier(&mut self, id: &str) {
        if !self.can_manage_suppliers() {
            return;
        }
        let Some(data) = self.data.as_ref() else {
            return;
        };
        if let Some(supplier) = data.suppliers.iter().find(|s| s.id == id) {
            self.pending_delete = Some(DeleteConfirmation::for_supplier(supplier, &data.receipts));
        }
    }

    /// Yes on the open confirmation; the delete goes out once every prompt
    /// has been accepted
    pub fn confirm_delete(&mut self) {
        let Some(confirmation) = self.pending_delete.as_mut() else {
            return;
        };
        if let Some(target) = confirmation.accept() {
            self.pending_delete = None;
            self.start_delete(target);
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    fn start_delete(&mut self, target: DeleteTarget) {
        let api = self.api.clone();
        self.spawn(async move { AppEvent::Data(workflow::run_delete(&api, target).await) });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::egui_app::api::Transport;
    use crate::egui_app::storage::MemoryStorage;
    use crate::shared::permissions::PermissionTable;
    use crate::shared::wire::{Action, RpcRequest};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Answers every action from a fixed table and records what was sent.
    /// `createSupplier` waits for `release`.
    #[derive(Default)]
    struct Canned {
        sent: Mutex<Vec<Action>>,
        release: tokio::sync::Notify,
    }

    #[async_trait]
    impl Transport for Canned {
        async fn send(&self, request: &RpcRequest) -> Result<Value, ClientError> {
            self.sent.lock().unwrap().push(request.action);
            match request.action {
                Action::Login => Ok(json!({"user": {
                    "email": "ops@potofjollof.test",
                    "name": "Ops",
                    "role": "Operations Lead"
                }})),
                Action::GetReceipts => Ok(json!([{
                    "id": "r1", "supplier": "Lagos Market", "receiptNumber": "7",
                    "amount": 12.5, "date": "2025-01-05"
                }])),
                Action::GetSuppliers => Err(ClientError::transport("connection reset")),
                Action::CreateSupplier => {
                    self.release.notified().await;
                    Ok(json!({"id": "s9", "name": "Late Supplies", "category": "Produce"}))
                }
                _ => Err(ClientError::remote("not scripted")),
            }
        }

        fn name(&self) -> &'static str {
            "canned"
        }
    }

    fn state() -> (AppState, Arc<Canned>) {
        let transport = Arc::new(Canned::default());
        let api = ApiClient::new(transport.clone());
        let session = Session::new(Box::new(MemoryStorage::new()), PermissionTable::default());
        let config = Config::load_with(|key| match key {
            "DEV_AUTH_BYPASS" => Some("1".to_string()),
            "RECEIPT_MANAGER_CONFIG" => Some("/nonexistent/receipt-manager.toml".to_string()),
            _ => None,
        });
        (AppState::with_parts(config, api, session).unwrap(), transport)
    }

    fn settle(state: &mut AppState) {
        settle_until(state, |state| !state.is_loading());
    }

    fn settle_until(state: &mut AppState, done: impl Fn(&AppState) -> bool) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !done(state) && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(5));
            state.poll_events(Instant::now());
        }
    }

    /// Dev sign-in as an Operations Lead, with the initial load settled
    fn signed_in() -> (AppState, Arc<Canned>) {
        let (mut state, transport) = state();
        state.dev_email_input = "ops@potofjollof.test".to_string();
        state.handle_dev_login();
        settle(&mut state);
        (state, transport)
    }

    #[test]
    fn test_dev_login_loads_with_partial_failure() {
        let (state, transport) = signed_in();

        assert_eq!(state.current_view(), AppView::Dashboard);
        let data = state.data.as_ref().unwrap();
        assert_eq!(data.receipts.len(), 1);
        assert!(data.suppliers.is_empty());
        assert!(!state.notifications.is_empty());
        assert!(state.can_manage_suppliers());
        assert!(!state.can_manage_users());
        assert_eq!(state.api.user_email().as_deref(), Some("ops@potofjollof.test"));

        let sent = transport.sent.lock().unwrap().clone();
        assert_eq!(sent[0], Action::Login);
        assert!(sent.contains(&Action::GetReceipts));
        assert!(sent.contains(&Action::GetSuppliers));
    }

    #[test]
    fn test_invalid_form_sends_nothing() {
        let (mut state, transport) = signed_in();
        let before = transport.sent.lock().unwrap().len();

        state.open_receipt_dialog();
        state.receipt_form.supplier.clear();
        state.submit_receipt(Instant::now());

        assert!(!state.saving_receipt);
        assert!(state.receipt_dialog_open);
        assert_eq!(transport.sent.lock().unwrap().len(), before);
    }

    #[test]
    fn test_declined_delete_sends_nothing() {
        let (mut state, transport) = signed_in();
        let before = transport.sent.lock().unwrap().len();

        state.request_delete_receipt("r1");
        assert!(state.pending_delete.is_some());
        state.cancel_delete();
        settle(&mut state);

        assert_eq!(transport.sent.lock().unwrap().len(), before);
        assert_eq!(state.data.as_ref().unwrap().receipts.len(), 1);
    }

    #[test]
    fn test_logout_drops_data() {
        let (mut state, _transport) = signed_in();

        state.logout();
        assert!(state.data.is_none());
        assert_eq!(state.current_view(), AppView::SignIn);
        assert!(state.api.user_email().is_none());
        assert!(!state.can_add_receipt());
    }

    #[test]
    fn test_result_from_previous_session_is_dropped() {
        let (mut state, transport) = signed_in();

        state.open_supplier_dialog();
        state.supplier_form.name = "Late Supplies".to_string();
        state.supplier_form.category = "Produce".to_string();
        state.submit_supplier(Instant::now());
        assert!(state.saving_supplier);

        state.logout();
        state.handle_dev_login();
        settle_until(&mut state, |state| {
            state.session.is_signed_in()
                && state.data.as_ref().is_some_and(|data| data.receipts.len() == 1)
        });
        assert!(state.session.is_signed_in());

        transport.release.notify_one();
        settle(&mut state);

        assert!(!state.is_loading());
        assert!(!state.saving_supplier);
        assert!(state.data.as_ref().unwrap().suppliers.is_empty());
        assert!(state
            .notifications
            .visible()
            .all(|notice| notice.text() != crate::egui_app::notifications::SUPPLIER_ADDED));
    }

    #[test]
    fn test_dev_login_disabled_without_bypass() {
        let transport = Arc::new(Canned::default());
        let api = ApiClient::new(transport.clone());
        let session = Session::new(Box::new(MemoryStorage::new()), PermissionTable::default());
        let mut state = AppState::with_parts(Config::default(), api, session).unwrap();

        state.dev_email_input = "ops@potofjollof.test".to_string();
        state.handle_dev_login();
        assert!(!state.is_loading());
        assert!(transport.sent.lock().unwrap().is_empty());
    }
}
