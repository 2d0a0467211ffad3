use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::debug;
use uuid::Uuid;

use super::element::{Notification, Severity};
use super::surface::NotificationSurface;
use crate::config::NotificationConfig;
use crate::models::SubmissionResult;

/// Mounts notifications and schedules their removal on the tokio timer.
pub struct Notifier<S: NotificationSurface> {
    surface: Arc<S>,
    config: NotificationConfig,
}

impl<S: NotificationSurface> Clone for Notifier<S> {
    fn clone(&self) -> Self {
        Self {
            surface: Arc::clone(&self.surface),
            config: self.config.clone(),
        }
    }
}

impl<S: NotificationSurface> Notifier<S> {
    pub fn new(surface: S, config: NotificationConfig) -> Self {
        Self::from_shared(Arc::new(surface), config)
    }

    pub fn from_shared(surface: Arc<S>, config: NotificationConfig) -> Self {
        Self { surface, config }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mounts a toast immediately; it starts dismissing after the display
    /// duration and is removed once the transition has run.
    ///
    /// Must be called from within a tokio runtime.
    pub fn show(&self, message: impl Into<String>, severity: Severity) -> NotificationHandle {
        let notification =
            Notification::new(message, severity, self.config.transition_duration());
        let id = notification.id;

        debug!(%id, %severity, "showing notification");
        self.surface.mount(notification);

        let surface = Arc::clone(&self.surface);
        let display = self.config.display_duration();
        let transition = self.config.transition_duration();

        let task = tokio::spawn(async move {
            tokio::time::sleep(display).await;
            surface.begin_dismiss(id);

            tokio::time::sleep(transition).await;
            surface.remove(id);
        });

        NotificationHandle { id, task }
    }

    pub fn success(&self, message: impl Into<String>) -> NotificationHandle {
        self.show(message, Severity::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> NotificationHandle {
        self.show(message, Severity::Error)
    }

    /// Shows `success_message` on success, the failure text otherwise.
    pub fn show_result(
        &self,
        result: &SubmissionResult,
        success_message: &str,
    ) -> NotificationHandle {
        let (message, severity) = result.notification(success_message);
        self.show(message, severity)
    }
}

/// Dropping the handle leaves the scheduled removal running.
#[derive(Debug)]
pub struct NotificationHandle {
    id: Uuid,
    task: JoinHandle<()>,
}

impl NotificationHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Waits until the element has been removed from its surface.
    pub async fn dismissed(self) {
        if let Err(err) = self.task.await {
            tracing::warn!(id = %self.id, error = %err, "notification task did not finish");
        }
    }
}
