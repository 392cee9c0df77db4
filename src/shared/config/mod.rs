//! Application configuration module
//!
//! Static settings for the receipt manager: the remote endpoint, the identity
//! provider client id, branding, transport selection, feature flags and the
//! role permission table. Values are taken as given; only reading and
//! parsing can fail.

use crate::shared::permissions::PermissionTable;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_SCRIPT_URL: &str = "https://script.google.com/macros/s/AKfycbwMgNSnk9Rxst9XoxqxMu5CHGqvISNd3s3n2HxkzFftgUoga9_i-2_EtztIe4tVJCUy/exec";
pub const DEFAULT_GOOGLE_CLIENT_ID: &str =
    "459372830944-5nf9n55pg4c6v4eauvocva2r4nn8e7h2.apps.googleusercontent.com";
pub const DEFAULT_DRIVE_FOLDER_ID: &str = "1OGfKyOA3_CVkZK1wgeUZgkL_TlvOF3Ls";
pub const DEFAULT_APP_NAME: &str = "Receipt Manager";
pub const DEFAULT_RESTAURANT_NAME: &str = "Pot of Jollof";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Which request strategy the transport client uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// Plain-text POST read directly
    #[default]
    Direct,
    /// Hidden form submitted into a hidden frame
    Frame,
}

/// Reserved feature switches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    pub multi_restaurant: bool,
    pub email_notifications: bool,
    pub export_data: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            multi_restaurant: false,
            email_notifications: false,
            export_data: true,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Script host endpoint
    pub script_url: String,
    /// Identity provider OAuth client id
    pub google_client_id: String,
    /// Drive folder receiving uploaded images (used by the script host)
    pub drive_folder_id: String,
    pub app_name: String,
    pub restaurant_name: String,
    pub transport: TransportMode,
    pub request_timeout_secs: u64,
    /// Keep the signed-in user across restarts; off means the session ends
    /// with the window
    pub persist_session: bool,
    pub features: FeatureFlags,
    pub permissions: PermissionTable,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            script_url: DEFAULT_SCRIPT_URL.to_string(),
            google_client_id: DEFAULT_GOOGLE_CLIENT_ID.to_string(),
            drive_folder_id: DEFAULT_DRIVE_FOLDER_ID.to_string(),
            app_name: DEFAULT_APP_NAME.to_string(),
            restaurant_name: DEFAULT_RESTAURANT_NAME.to_string(),
            transport: TransportMode::default(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            persist_session: false,
            features: FeatureFlags::default(),
            permissions: PermissionTable::default(),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read and parse a TOML configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!("Loading configuration from {:?}", path);
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&contents)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    script_url: Option<String>,
    google_client_id: Option<String>,
    restaurant_name: Option<String>,
    transport: Option<TransportMode>,
    request_timeout_secs: Option<u64>,
    persist_session: Option<bool>,
    permissions: Option<PermissionTable>,
}

impl AppConfigBuilder {
    /// Set the endpoint URL
    pub fn script_url(mut self, url: impl Into<String>) -> Self {
        self.script_url = Some(url.into());
        self
    }

    pub fn google_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.google_client_id = Some(client_id.into());
        self
    }

    pub fn restaurant_name(mut self, name: impl Into<String>) -> Self {
        self.restaurant_name = Some(name.into());
        self
    }

    pub fn transport(mut self, mode: TransportMode) -> Self {
        self.transport = Some(mode);
        self
    }

    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = Some(secs);
        self
    }

    pub fn persist_session(mut self, persist: bool) -> Self {
        self.persist_session = Some(persist);
        self
    }

    pub fn permissions(mut self, table: PermissionTable) -> Self {
        self.permissions = Some(table);
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        let defaults = AppConfig::default();
        AppConfig {
            script_url: self.script_url.unwrap_or(defaults.script_url),
            google_client_id: self.google_client_id.unwrap_or(defaults.google_client_id),
            restaurant_name: self.restaurant_name.unwrap_or(defaults.restaurant_name),
            transport: self.transport.unwrap_or(defaults.transport),
            request_timeout_secs: self
                .request_timeout_secs
                .unwrap_or(defaults.request_timeout_secs),
            persist_session: self.persist_session.unwrap_or(defaults.persist_session),
            permissions: self.permissions.unwrap_or(defaults.permissions),
            ..defaults
        }
    }
}

/// Configuration errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(String),
    #[error("failed to parse config: {0}")]
    Parse(String),
}
