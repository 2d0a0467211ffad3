//! Uniform outcome returned by every submitter

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ClientError;
use crate::notification::Severity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "WireResult", try_from = "WireResult")]
pub enum SubmissionResult {
    Success { data: Value },
    Failure { message: String },
}

/// `{"success": true, "data": ..}` / `{"success": false, "error": ".."}`
#[derive(Serialize, Deserialize)]
struct WireResult {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<SubmissionResult> for WireResult {
    fn from(result: SubmissionResult) -> Self {
        match result {
            SubmissionResult::Success { data } => WireResult {
                success: true,
                data: Some(data),
                error: None,
            },
            SubmissionResult::Failure { message } => WireResult {
                success: false,
                data: None,
                error: Some(message),
            },
        }
    }
}

impl TryFrom<WireResult> for SubmissionResult {
    type Error = String;

    fn try_from(wire: WireResult) -> Result<Self, Self::Error> {
        match (wire.success, wire.data, wire.error) {
            (true, data, _) => Ok(SubmissionResult::Success {
                data: data.unwrap_or(Value::Null),
            }),
            (false, _, Some(message)) => Ok(SubmissionResult::Failure { message }),
            (false, _, None) => Err("failed result is missing its error message".to_string()),
        }
    }
}

impl SubmissionResult {
    pub fn success(data: Value) -> Self {
        SubmissionResult::Success { data }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        SubmissionResult::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Success { .. })
    }

    pub fn data(&self) -> Option<&Value> {
        match self {
            SubmissionResult::Success { data } => Some(data),
            SubmissionResult::Failure { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionResult::Success { .. } => None,
            SubmissionResult::Failure { message } => Some(message),
        }
    }

    /// Message and severity a caller would show for this outcome.
    pub fn notification(&self, success_message: &str) -> (String, Severity) {
        match self {
            SubmissionResult::Success { .. } => (success_message.to_string(), Severity::Success),
            SubmissionResult::Failure { message } => (message.clone(), Severity::Error),
        }
    }
}

impl From<Result<Value, ClientError>> for SubmissionResult {
    fn from(result: Result<Value, ClientError>) -> Self {
        match result {
            Ok(data) => SubmissionResult::success(data),
            Err(err) => SubmissionResult::failure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;
    use serde_json::json;

    #[test]
    fn test_success_shape() {
        let result = SubmissionResult::success(json!({"id": 1}));
        assert!(result.is_success());
        assert_eq!(result.data(), Some(&json!({"id": 1})));
        assert_eq!(result.error_message(), None);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"success": true, "data": {"id": 1}})
        );
    }

    #[test]
    fn test_failure_shape() {
        let result = SubmissionResult::failure("HTTP error! status: 500");
        assert!(!result.is_success());
        assert_eq!(result.error_message(), Some("HTTP error! status: 500"));
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"success": false, "error": "HTTP error! status: 500"})
        );
    }

    #[test]
    fn test_deserialize_by_flag() {
        let ok: SubmissionResult =
            serde_json::from_value(json!({"success": true, "data": {"id": 7}})).unwrap();
        assert_eq!(ok, SubmissionResult::success(json!({"id": 7})));

        let failed: SubmissionResult =
            serde_json::from_value(json!({"success": false, "error": "nope"})).unwrap();
        assert_eq!(failed, SubmissionResult::failure("nope"));
    }

    #[test]
    fn test_failure_without_message_is_rejected() {
        let parsed = serde_json::from_value::<SubmissionResult>(json!({"success": false}));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_error_conversion() {
        let result: SubmissionResult =
            Err::<Value, _>(ClientError::http(StatusCode::BAD_GATEWAY, "upstream down")).into();
        assert_eq!(result.error_message(), Some("Server error: 502 - upstream down"));

        let result: SubmissionResult = Ok::<_, ClientError>(json!([])).into();
        assert!(result.is_success());
    }

    #[test]
    fn test_notification_mapping() {
        let ok = SubmissionResult::success(json!({}));
        assert_eq!(ok.notification("Sent!"), ("Sent!".to_string(), Severity::Success));

        let failed = SubmissionResult::failure("boom");
        assert_eq!(failed.notification("Sent!"), ("boom".to_string(), Severity::Error));
    }
}
