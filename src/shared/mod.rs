//! Shared Module
//!
//! Platform-agnostic types and pure functions used by the client: the wire
//! envelope, record types, configuration, permissions and the derived views
//! computed from the receipt and supplier collections.

/// Client error taxonomy
pub mod error;

/// Application configuration
pub mod config;

/// Role permission table
pub mod permissions;

/// Receipt, supplier and user records
pub mod records;

/// RPC envelope
pub mod wire;

/// Totals, rankings and the dashboard summary
pub mod analytics;

/// Collection search and autocomplete
pub mod search;

pub mod format;

pub use config::{AppConfig, AppConfigBuilder, ConfigError, FeatureFlags, TransportMode};
pub use error::ClientError;
pub use permissions::PermissionTable;
pub use records::{Amount, Receipt, Supplier, User};
pub use wire::{Action, RpcRequest, RpcResponse};
