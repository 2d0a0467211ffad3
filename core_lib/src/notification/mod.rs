//! Transient on-page notifications ("toasts")

pub mod element;
pub mod notifier;
pub mod surface;

#[cfg(test)]
mod tests;

pub use element::{Animation, Notification, Severity};
pub use notifier::{NotificationHandle, Notifier};
pub use surface::{ConsoleSurface, InMemorySurface, NotificationSurface};
