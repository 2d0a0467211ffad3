//! Client library for the portfolio backend: form records, extractors,
//! submitters and transient notifications.

pub mod api;
pub mod config;
pub mod error;
pub mod extractors;
pub mod models;
pub mod notification;
pub mod validation;

pub use api::{PortfolioApi, PortfolioClient};
pub use config::{ApiConfig, AppConfig, NotificationConfig};
pub use error::{ClientError, Result};
pub use extractors::{
    format_connect_data, format_connect_data_named, format_pitch_data, FieldSource, FileSource,
    IndexedFields,
};
pub use models::{Attachment, ConnectFormData, PitchFormData, SubmissionResult};
pub use notification::{
    ConsoleSurface, InMemorySurface, Notification, NotificationHandle, NotificationSurface,
    Notifier, Severity,
};
pub use validation::{Validatable, ValidationResult};
