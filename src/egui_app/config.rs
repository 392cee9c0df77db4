use crate::egui_app::storage::{FileStorage, MemoryStorage, SessionStorage};
use crate::shared::config::{AppConfig, ConfigError};
use std::path::PathBuf;

/// Points at an explicit TOML configuration file
pub const CONFIG_PATH_VAR: &str = "RECEIPT_MANAGER_CONFIG";
/// Replaces the endpoint URL
pub const API_URL_VAR: &str = "RECEIPT_API_URL";
pub const DEV_AUTH_BYPASS_VAR: &str = "DEV_AUTH_BYPASS";
pub const DEV_USER_EMAIL_VAR: &str = "DEV_USER_EMAIL";

/// Application configuration wrapper.
///
/// Layers defaults, the optional TOML file, then environment overrides.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
    dev_auth_bypass: bool,
    dev_user_email: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_app(AppConfig::default())
    }
}

impl Config {
    /// Configuration from the process environment and the config file it
    /// names. A broken file is logged and skipped.
    pub fn load() -> Self {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// `load` with an explicit environment lookup
    pub fn load_with(env: impl Fn(&str) -> Option<String>) -> Self {
        let path = env(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .or_else(Self::default_config_path);

        let app = match path {
            Some(path) if path.exists() => match AppConfig::load(&path) {
                Ok(app) => {
                    tracing::info!("Loaded configuration from {:?}", path);
                    app
                }
                Err(e) => {
                    tracing::error!("Ignoring configuration file: {}", e);
                    AppConfig::default()
                }
            },
            _ => AppConfig::default(),
        };

        Self::from_app(app).with_env(env)
    }

    pub fn from_app(app: AppConfig) -> Self {
        Self {
            app,
            dev_auth_bypass: false,
            dev_user_email: None,
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(Self::from_app(AppConfig::from_toml_str(contents)?))
    }

    fn with_env(mut self, env: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = env(API_URL_VAR).filter(|url| !url.trim().is_empty()) {
            tracing::debug!("Endpoint overridden by {}", API_URL_VAR);
            self.app.script_url = url;
        }
        self.dev_auth_bypass = env(DEV_AUTH_BYPASS_VAR).as_deref() == Some("1");
        self.dev_user_email = env(DEV_USER_EMAIL_VAR).filter(|email| !email.trim().is_empty());
        self
    }

    /// `<config dir>/receipt-manager/config.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("receipt-manager").join("config.toml"))
    }

    pub fn app(&self) -> &AppConfig {
        &self.app
    }

    pub fn script_url(&self) -> &str {
        &self.app.script_url
    }

    /// Storage for the signed-in user: on disk when sessions persist and a
    /// data directory exists, otherwise for this run only
    pub fn session_storage(&self) -> Box<dyn SessionStorage> {
        if self.app.persist_session {
            if let Some(path) = FileStorage::default_path() {
                return Box::new(FileStorage::open(path));
            }
            tracing::warn!("No local data directory; session kept in memory");
        }
        Box::new(MemoryStorage::new())
    }

    /// Whether to use development auth bypass
    pub fn dev_auth_bypass(&self) -> bool {
        self.dev_auth_bypass
    }

    /// Email used when bypassing the identity provider
    pub fn dev_user_email(&self) -> Option<&str> {
        self.dev_user_email.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::{TransportMode, DEFAULT_SCRIPT_URL};
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_config_new() {
        let config = Config::default();
        assert_eq!(config.script_url(), DEFAULT_SCRIPT_URL);
        assert!(!config.dev_auth_bypass());
    }

    #[test]
    fn test_env_overrides_url_and_dev_login() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let config = Config::load_with(env(&[
            (CONFIG_PATH_VAR, missing.to_str().unwrap()),
            (API_URL_VAR, "http://127.0.0.1:9999/exec"),
            (DEV_AUTH_BYPASS_VAR, "1"),
            (DEV_USER_EMAIL_VAR, "dev@potofjollof.test"),
        ]));
        assert_eq!(config.script_url(), "http://127.0.0.1:9999/exec");
        assert!(config.dev_auth_bypass());
        assert_eq!(config.dev_user_email(), Some("dev@potofjollof.test"));
    }

    #[test]
    fn test_file_then_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "script_url = \"http://file.test/exec\"\ntransport = \"frame\"\n",
        )
        .unwrap();

        let config = Config::load_with(env(&[(CONFIG_PATH_VAR, path.to_str().unwrap())]));
        assert_eq!(config.script_url(), "http://file.test/exec");
        assert_eq!(config.app().transport, TransportMode::Frame);

        let config = Config::load_with(env(&[
            (CONFIG_PATH_VAR, path.to_str().unwrap()),
            (API_URL_VAR, "http://env.test/exec"),
        ]));
        assert_eq!(config.script_url(), "http://env.test/exec");
    }

    #[test]
    fn test_broken_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "transport = [").unwrap();

        let config = Config::load_with(env(&[(CONFIG_PATH_VAR, path.to_str().unwrap())]));
        assert_eq!(config.script_url(), DEFAULT_SCRIPT_URL);
    }

    #[test]
    fn test_bypass_requires_exact_flag() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let config = Config::load_with(env(&[
            (CONFIG_PATH_VAR, missing.to_str().unwrap()),
            (DEV_AUTH_BYPASS_VAR, "yes"),
        ]));
        assert!(!config.dev_auth_bypass());
    }

    #[test]
    fn test_memory_session_when_not_persisted() {
        let config = Config::from_toml_str("persist_session = false").unwrap();
        let storage = config.session_storage();
        assert!(storage.get_item(crate::egui_app::storage::SESSION_KEY).is_none());
    }
}
