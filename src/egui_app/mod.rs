//! egui Native Desktop App Module
//!
//! The receipt manager client: signs a user in, loads receipts and suppliers
//! from the script endpoint and renders the dashboard, receipts, suppliers
//! and user views.
//!
//! # Architecture
//!
//! - **`api`** - Transport strategies and the per-action `ApiClient`
//! - **`auth`** - Session state machine and permission checks
//! - **`identity`** - Identity provider credential decoding
//! - **`storage`** - Session storage (memory or file)
//! - **`config`** - Configuration layering (file, environment, dev bypass)
//! - **`workflow`** - Application data, load/create/delete workflows
//! - **`state`** - egui state, background runtime and event channel
//! - **`views`** / **`theme`** - Rendering
//! - **`main`** - Application entry point (binary)
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the desktop client:
//! // cargo run --bin receipt-manager
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod identity;
pub mod notifications;
pub mod state;
pub mod storage;
pub mod theme;
pub mod types;
pub mod views;
pub mod workflow;

// Re-export commonly used types
pub use api::ApiClient;
pub use auth::{Session, SessionPhase};
pub use config::Config;
pub use state::AppState;
pub use types::AppView;
pub use workflow::{AppData, DataEvent, DeleteConfirmation};
