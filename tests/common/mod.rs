//! Common test utilities and helpers
//!
//! - Record fixtures and backend row builders
//! - A recording in-memory transport
//! - Custom assertion macros
#![allow(dead_code)]

pub mod assertions;
pub mod fake_transport;
pub mod fixtures;

pub use fake_transport::RecordingTransport;
pub use fixtures::*;
