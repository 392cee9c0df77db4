//! Role-based permission table
//!
//! Maps a role label to the set of actions it may perform. The table gates
//! UI affordances only; the remote endpoint stays the authority.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Wildcard action granting everything
pub const ALL: &str = "all";

pub const VIEW_ALL_RECEIPTS: &str = "view_all_receipts";
pub const VIEW_OWN_RECEIPTS: &str = "view_own_receipts";
pub const ADD_RECEIPT: &str = "add_receipt";
pub const EDIT_RECEIPT: &str = "edit_receipt";
pub const EDIT_OWN_RECEIPT: &str = "edit_own_receipt";
pub const DELETE_RECEIPT: &str = "delete_receipt";
pub const MANAGE_SUPPLIERS: &str = "manage_suppliers";
pub const VIEW_SUPPLIERS: &str = "view_suppliers";
pub const VIEW_ANALYTICS: &str = "view_analytics";
pub const MANAGE_USERS: &str = "manage_users";

pub const ROLE_MANAGEMENT: &str = "Management";
pub const ROLE_OPERATIONS_LEAD: &str = "Operations Lead";
pub const ROLE_STORE_MANAGER: &str = "Store Manager";

/// Role label to allowed-action set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionTable {
    roles: BTreeMap<String, BTreeSet<String>>,
}

impl Default for PermissionTable {
    fn default() -> Self {
        Self::new()
            .with_role(ROLE_MANAGEMENT, [ALL])
            .with_role(
                ROLE_OPERATIONS_LEAD,
                [
                    VIEW_ALL_RECEIPTS,
                    ADD_RECEIPT,
                    EDIT_RECEIPT,
                    DELETE_RECEIPT,
                    MANAGE_SUPPLIERS,
                    VIEW_ANALYTICS,
                ],
            )
            .with_role(
                ROLE_STORE_MANAGER,
                [VIEW_OWN_RECEIPTS, ADD_RECEIPT, EDIT_OWN_RECEIPT, VIEW_SUPPLIERS],
            )
    }
}

impl PermissionTable {
    /// An empty table; every check answers false
    pub fn new() -> Self {
        Self {
            roles: BTreeMap::new(),
        }
    }

    /// Add (or replace) a role's action set
    pub fn with_role<I, S>(mut self, role: impl Into<String>, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles
            .insert(role.into(), actions.into_iter().map(Into::into).collect());
        self
    }

    /// Whether `role` may perform `action`. Unknown roles get nothing.
    pub fn allows(&self, role: &str, action: &str) -> bool {
        match self.roles.get(role) {
            Some(actions) => actions.contains(ALL) || actions.contains(action),
            None => false,
        }
    }

    /// Known role labels, sorted
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.roles.keys().map(String::as_str)
    }
}
