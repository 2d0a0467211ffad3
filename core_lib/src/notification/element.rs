use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Success,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            Severity::Success => "#4CAF50",
            Severity::Error => "#f44336",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "success" => Ok(Severity::Success),
            "error" => Ok(Severity::Error),
            other => Err(format!("unknown severity: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    SlideIn,
    SlideOut,
}

impl Animation {
    pub fn name(&self) -> &'static str {
        match self {
            Animation::SlideIn => "slideIn",
            Animation::SlideOut => "slideOut",
        }
    }
}

/// One toast element as mounted on a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    pub animation: Animation,
    pub transition: Duration,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity, transition: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            severity,
            animation: Animation::SlideIn,
            transition,
            created_at: Utc::now(),
        }
    }

    pub fn class_name(&self) -> String {
        format!("notification notification-{}", self.severity)
    }

    pub fn is_dismissing(&self) -> bool {
        self.animation == Animation::SlideOut
    }

    pub fn style_css(&self) -> String {
        format!(
            "position: fixed; top: 20px; right: 20px; background: {}; color: white; \
             padding: 16px 24px; border-radius: 4px; z-index: 9999; animation: {} {}s ease;",
            self.severity.background(),
            self.animation.name(),
            self.transition.as_secs_f64(),
        )
    }

    /// Terminal rendering, stamped with the local mount time.
    pub fn console_line(&self) -> String {
        let marker = match self.severity {
            Severity::Success => '✔',
            Severity::Error => '✖',
        };
        format!(
            "[{}] {} {}",
            self.created_at.with_timezone(&Local).format("%H:%M:%S"),
            marker,
            self.message
        )
    }

    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"{}\" style=\"{}\">{}</div>",
            self.class_name(),
            self.style_css(),
            escape_html(&self.message)
        )
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
