pub mod settings;

pub use settings::{ApiConfig, AppConfig, NotificationConfig, DEFAULT_BASE_URL};
