//! Receipt Manager - Main Library
//!
//! A desktop front end for recording purchase receipts and suppliers for a
//! single restaurant, backed by a spreadsheet-style script endpoint.
//!
//! # Module Structure
//!
//! - **`shared`** - Platform-agnostic types and pure functions
//!   - Wire envelope and record types
//!   - Configuration record and role permission table
//!   - Totals, supplier ranking, search and formatting
//!   - Error types
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Transport client with direct and hidden-frame strategies
//!   - Session and permission checks
//!   - Dashboard, receipts, suppliers and users views
//!
//! # Usage
//!
//! ```rust,no_run
//! use receipt_manager::shared::analytics::total_spending;
//! use receipt_manager::shared::Receipt;
//!
//! fn spent(receipts: &[Receipt]) -> String {
//!     total_spending(receipts).to_string()
//! }
//! ```
//!
//! # Thread Safety
//!
//! - **Native**: egui is single-threaded immediate mode GUI; network work runs
//!   on a tokio runtime and reports back over a channel drained each frame
//! - `ApiClient` is `Clone + Send + Sync` and shares its transport
//!
//! # Error Handling
//!
//! Fallible operations return `Result<T, ClientError>`; see `shared::error`.

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
