use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::Result;

pub const DEFAULT_BASE_URL: &str = "https://rohit-portfolio-backend.vercel.app/api/v1";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub notifications: NotificationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub pitch_path: String,
    pub connect_path: String,
    /// Unset means requests wait for the server indefinitely.
    pub request_timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    pub display_ms: u64,
    pub transition_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            pitch_path: "/pitch".to_string(),
            connect_path: "/connect".to_string(),
            request_timeout_seconds: None,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            display_ms: 4000,
            transition_ms: 300,
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn pitch_url(&self) -> String {
        self.endpoint(&self.pitch_path)
    }

    pub fn connect_url(&self) -> String {
        self.endpoint(&self.connect_path)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }
}

impl NotificationConfig {
    pub fn display_duration(&self) -> Duration {
        Duration::from_millis(self.display_ms)
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// Time from mount until the element is gone.
    pub fn total_duration(&self) -> Duration {
        self.display_duration() + self.transition_duration()
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("config.toml"))
    }

    /// Defaults, then `path` when it exists, then `APP_` variables
    /// (`APP_API__BASE_URL` sets `api.base_url`).
    pub fn load_from(path: &Path) -> Result<Self> {
        Self::load_layered(path, environment())
    }

    fn load_layered(path: &Path, env: Environment) -> Result<Self> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?);

        if path.exists() {
            builder = builder.add_source(File::from(path));
        }

        let config = builder.add_source(env).build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let base_url = self.api.base_url.trim();

        if base_url.is_empty() {
            return Err(ConfigError::Message("API base URL cannot be empty".to_string()));
        }

        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(ConfigError::Message(format!(
                "API base URL must be http(s): {}",
                base_url
            )));
        }

        for (name, path) in [
            ("pitch_path", &self.api.pitch_path),
            ("connect_path", &self.api.connect_path),
        ] {
            if !path.starts_with('/') {
                return Err(ConfigError::Message(format!(
                    "{} must start with '/': {}",
                    name, path
                )));
            }
        }

        if self.api.request_timeout_seconds == Some(0) {
            return Err(ConfigError::Message(
                "Request timeout must be greater than 0".to_string(),
            ));
        }

        if self.notifications.display_ms == 0 {
            return Err(ConfigError::Message(
                "Notification display duration must be greater than 0".to_string(),
            ));
        }

        if base_url.starts_with("http://") {
            tracing::warn!("API base URL is not using TLS: {}", base_url);
        }

        Ok(())
    }
}

fn environment() -> Environment {
    Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
