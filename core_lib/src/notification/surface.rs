use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

use super::element::{Animation, Notification, Severity};

/// Where notifications are drawn. Implementations must tolerate ids that
/// were already removed.
pub trait NotificationSurface: Send + Sync + 'static {
    fn mount(&self, notification: Notification);

    /// Switches the element to its exit animation.
    fn begin_dismiss(&self, id: Uuid);

    fn remove(&self, id: Uuid);
}

/// Keeps mounted elements in memory, newest last.
#[derive(Clone, Default)]
pub struct InMemorySurface {
    elements: Arc<RwLock<Vec<Notification>>>,
}

impl InMemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> Vec<Notification> {
        self.elements.read().clone()
    }

    pub fn get(&self, id: Uuid) -> Option<Notification> {
        self.elements.read().iter().find(|n| n.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.elements.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.read().is_empty()
    }

    pub fn render_html(&self) -> String {
        self.elements
            .read()
            .iter()
            .map(Notification::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl NotificationSurface for InMemorySurface {
    fn mount(&self, notification: Notification) {
        self.elements.write().push(notification);
    }

    fn begin_dismiss(&self, id: Uuid) {
        let mut elements = self.elements.write();
        match elements.iter_mut().find(|n| n.id == id) {
            Some(notification) => notification.animation = Animation::SlideOut,
            None => warn!(%id, "dismissing unknown notification"),
        }
    }

    fn remove(&self, id: Uuid) {
        self.elements.write().retain(|n| n.id != id);
    }
}

/// Prints notifications to the terminal: successes on stdout, errors on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSurface;

impl NotificationSurface for ConsoleSurface {
    fn mount(&self, notification: Notification) {
        match notification.severity {
            Severity::Success => println!("{}", notification.console_line()),
            Severity::Error => eprintln!("{}", notification.console_line()),
        }
    }

    fn begin_dismiss(&self, id: Uuid) {
        debug!(%id, "notification dismissing");
    }

    fn remove(&self, id: Uuid) {
        debug!(%id, "notification removed");
    }
}
