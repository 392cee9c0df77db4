/**
 * Authentication Module
 *
 * Owns the current user. A sign-in goes SignedOut → Pending (credential
 * received, backend `login` in flight) → SignedIn, and the signed-in user is
 * persisted to session storage so the next launch can restore it.
 */

use crate::egui_app::api::ApiClient;
use crate::egui_app::identity::decode_credential;
use crate::egui_app::storage::{SessionStorage, SESSION_KEY};
use crate::shared::error::ClientError;
use crate::shared::permissions::PermissionTable;
use crate::shared::records::{LoginResult, User};
use std::time::{Duration, Instant};

pub const USER_NOT_FOUND: &str = "User not found. Please contact administrator.";
pub const LOGIN_FAILED: &str = "Login failed. Please try again.";

/// How long a login error stays on the sign-in screen
pub const LOGIN_ERROR_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    SignedOut,
    /// Waiting on the backend for the authoritative user record
    Pending { email: String },
    SignedIn(User),
}

#[derive(Debug, Clone)]
struct LoginError {
    message: String,
    raised_at: Instant,
}

/// Session state
pub struct Session {
    phase: SessionPhase,
    storage: Box<dyn SessionStorage>,
    permissions: PermissionTable,
    login_error: Option<LoginError>,
}

impl Session {
    pub fn new(storage: Box<dyn SessionStorage>, permissions: PermissionTable) -> Self {
        Self {
            phase: SessionPhase::SignedOut,
            storage,
            permissions,
            login_error: None,
        }
    }

    /// Rebuild the session from storage. A stored user is trusted as-is and
    /// tags the client straight away; a corrupt entry is dropped.
    pub fn restore(
        storage: Box<dyn SessionStorage>,
        permissions: PermissionTable,
        api: &ApiClient,
    ) -> Self {
        let mut session = Self::new(storage, permissions);

        let Some(stored) = session.storage.get_item(SESSION_KEY) else {
            return session;
        };

        match serde_json::from_str::<User>(&stored) {
            Ok(user) => {
                tracing::info!("Restored session for {}", user.email);
                api.set_user_email(Some(user.email.clone()));
                session.phase = SessionPhase::SignedIn(user);
            }
            Err(e) => {
                tracing::warn!("Discarding unreadable stored session: {}", e);
                if let Err(e) = session.storage.remove_item(SESSION_KEY) {
                    tracing::warn!("Failed to clear stored session: {}", e);
                }
            }
        }
        session
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn user(&self) -> Option<&User> {
        match &self.phase {
            SessionPhase::SignedIn(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self.phase, SessionPhase::SignedIn(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, SessionPhase::Pending { .. })
    }

    /// Accept an identity provider token; returns the email to exchange with
    /// the backend
    pub fn begin_credential(&mut self, token: &str) -> Result<String, ClientError> {
        match decode_credential(token) {
            Ok(claims) => Ok(self.begin(claims.email)),
            Err(e) => {
                tracing::warn!("Rejected credential: {}", e);
                self.fail(LOGIN_FAILED);
                Err(e)
            }
        }
    }

    /// Development sign-in that skips the identity provider
    pub fn begin_dev(&mut self, email: &str) -> String {
        tracing::warn!("Development sign-in as {}", email);
        self.begin(email.trim().to_string())
    }

    fn begin(&mut self, email: String) -> String {
        tracing::info!("Signing in {}", email);
        self.login_error = None;
        self.phase = SessionPhase::Pending {
            email: email.clone(),
        };
        email
    }

    /// Settle a pending sign-in with the backend `login` answer
    pub fn complete(&mut self, result: Result<LoginResult, ClientError>, api: &ApiClient) -> bool {
        match result {
            Ok(LoginResult { user: Some(user) }) => {
                tracing::info!("✓ Signed in {} ({})", user.email, user.role);
                match serde_json::to_string(&user) {
                    Ok(stored) => {
                        if let Err(e) = self.storage.set_item(SESSION_KEY, stored) {
                            tracing::warn!("Session will not survive a restart: {}", e);
                        }
                    }
                    Err(e) => tracing::warn!("Failed to serialize session: {}", e),
                }
                api.set_user_email(Some(user.email.clone()));
                self.login_error = None;
                self.phase = SessionPhase::SignedIn(user);
                true
            }
            Ok(LoginResult { user: None }) => {
                tracing::warn!("✗ Login returned no user");
                self.fail(USER_NOT_FOUND);
                false
            }
            Err(e) => {
                tracing::error!("✗ Login failed: {}", e);
                self.fail(LOGIN_FAILED);
                false
            }
        }
    }

    fn fail(&mut self, message: &str) {
        self.phase = SessionPhase::SignedOut;
        self.login_error = Some(LoginError {
            message: message.to_string(),
            raised_at: Instant::now(),
        });
    }

    pub fn logout(&mut self, api: &ApiClient) {
        if let Some(user) = self.user() {
            tracing::info!("Signing out {}", user.email);
        }
        if let Err(e) = self.storage.remove_item(SESSION_KEY) {
            tracing::warn!("Failed to clear stored session: {}", e);
        }
        api.set_user_email(None);
        self.phase = SessionPhase::SignedOut;
        self.login_error = None;
    }

    /// Advisory check for UI gating; the backend stays the authority
    pub fn has_permission(&self, action: &str) -> bool {
        self.user()
            .is_some_and(|user| self.permissions.allows(&user.role, action))
    }

    /// Any of the given actions
    pub fn has_any_permission(&self, actions: &[&str]) -> bool {
        actions.iter().any(|action| self.has_permission(action))
    }

    /// The login error, while it is still fresh at `now`
    pub fn login_error(&self, now: Instant) -> Option<&str> {
        self.login_error
            .as_ref()
            .filter(|e| now.saturating_duration_since(e.raised_at) < LOGIN_ERROR_TTL)
            .map(|e| e.message.as_str())
    }

    pub fn clear_error(&mut self) {
        self.login_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::egui_app::api::Transport;
    use crate::egui_app::storage::MemoryStorage;
    use crate::shared::permissions::{ADD_RECEIPT, MANAGE_SUPPLIERS, MANAGE_USERS};
    use crate::shared::wire::RpcRequest;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::Arc;

    struct Unreachable;

    #[async_trait]
    impl Transport for Unreachable {
        async fn send(&self, _request: &RpcRequest) -> Result<Value, ClientError> {
            Err(ClientError::transport("offline"))
        }

        fn name(&self) -> &'static str {
            "unreachable"
        }
    }

    fn api() -> ApiClient {
        ApiClient::new(Arc::new(Unreachable))
    }

    fn user(role: &str) -> User {
        User {
            email: "chef@potofjollof.test".to_string(),
            name: "Chef".to_string(),
            role: role.to_string(),
            id: None,
        }
    }

    fn session() -> Session {
        Session::new(Box::new(MemoryStorage::new()), PermissionTable::default())
    }

    #[test]
    fn test_session_new() {
        let session = session();
        assert_eq!(session.phase(), &SessionPhase::SignedOut);
        assert!(session.user().is_none());
        assert!(session.login_error(Instant::now()).is_none());
    }

    #[test]
    fn test_dev_sign_in_is_pending() {
        let mut session = session();
        let email = session.begin_dev(" dev@potofjollof.test ");
        assert_eq!(email, "dev@potofjollof.test");
        assert!(session.is_pending());
        assert!(!session.has_permission(ADD_RECEIPT));
    }

    #[test]
    fn test_complete_persists_and_tags_client() {
        let api = api();
        let mut session = session();
        session.begin_dev("chef@potofjollof.test");

        assert!(session.complete(Ok(LoginResult { user: Some(user("Store Manager")) }), &api));
        assert_eq!(api.user_email().as_deref(), Some("chef@potofjollof.test"));
        assert!(session.storage.get_item(SESSION_KEY).is_some());
        assert!(session.has_permission(ADD_RECEIPT));
        assert!(!session.has_permission(MANAGE_SUPPLIERS));
    }

    #[test]
    fn test_missing_user_reports_not_found() {
        let api = api();
        let mut session = session();
        session.begin_dev("stranger@example.test");

        assert!(!session.complete(Ok(LoginResult { user: None }), &api));
        assert_eq!(session.phase(), &SessionPhase::SignedOut);
        assert_eq!(session.login_error(Instant::now()), Some(USER_NOT_FOUND));
        assert!(api.user_email().is_none());
    }

    #[test]
    fn test_failed_login_error_expires() {
        let api = api();
        let mut session = session();
        session.begin_dev("chef@potofjollof.test");
        session.complete(Err(ClientError::transport("offline")), &api);

        let now = Instant::now();
        assert_eq!(session.login_error(now), Some(LOGIN_FAILED));
        assert!(session.login_error(now + LOGIN_ERROR_TTL).is_none());
    }

    #[test]
    fn test_restore_and_logout() {
        let api = api();
        let mut storage = MemoryStorage::new();
        storage
            .set_item(SESSION_KEY, serde_json::to_string(&user("Management")).unwrap())
            .unwrap();

        let mut session = Session::restore(Box::new(storage), PermissionTable::default(), &api);
        assert!(session.is_signed_in());
        assert!(session.has_permission(MANAGE_USERS));
        assert_eq!(api.user_email().as_deref(), Some("chef@potofjollof.test"));

        session.logout(&api);
        assert_eq!(session.phase(), &SessionPhase::SignedOut);
        assert!(session.storage.get_item(SESSION_KEY).is_none());
        assert!(api.user_email().is_none());
    }

    #[test]
    fn test_restore_discards_corrupt_entry() {
        let api = api();
        let mut storage = MemoryStorage::new();
        storage.set_item(SESSION_KEY, "{not json".to_string()).unwrap();

        let session = Session::restore(Box::new(storage), PermissionTable::default(), &api);
        assert_eq!(session.phase(), &SessionPhase::SignedOut);
        assert!(session.storage.get_item(SESSION_KEY).is_none());
    }

    #[test]
    fn test_bad_credential_keeps_signed_out() {
        let mut session = session();
        assert!(session.begin_credential("garbage").is_err());
        assert_eq!(session.phase(), &SessionPhase::SignedOut);
        assert_eq!(session.login_error(Instant::now()), Some(LOGIN_FAILED));
    }

    #[test]
    fn test_unknown_role_has_no_permissions() {
        let api = api();
        let mut session = session();
        session.begin_dev("chef@potofjollof.test");
        session.complete(Ok(LoginResult { user: Some(user("Dishwasher")) }), &api);
        assert!(!session.has_any_permission(&[ADD_RECEIPT, MANAGE_SUPPLIERS]));
    }
}
