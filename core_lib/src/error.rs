//! Client error types and handling

use http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("{}", http_message(.status, .body))]
    Http {
        status: StatusCode,
        body: Option<String>,
    },

    #[error("Invalid JSON response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Non-success response whose body was read.
    pub fn http(status: StatusCode, body: impl Into<String>) -> Self {
        ClientError::Http {
            status,
            body: Some(body.into()),
        }
    }

    /// Non-success response reported by status alone.
    pub fn http_status(status: StatusCode) -> Self {
        ClientError::Http { status, body: None }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            ClientError::Network(err) => err.status(),
            _ => None,
        }
    }

    /// True when the request never produced a response.
    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network(err) if err.status().is_none())
    }
}

fn http_message(status: &StatusCode, body: &Option<String>) -> String {
    match body {
        Some(body) => format!("Server error: {} - {}", status.as_u16(), body),
        None => format!("HTTP error! status: {}", status.as_u16()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message_embeds_status_and_body() {
        let err = ClientError::http(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert_eq!(err.to_string(), "Server error: 500 - boom");
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(!err.is_network());
    }

    #[test]
    fn test_http_status_only_message() {
        let err = ClientError::http_status(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "HTTP error! status: 404");
    }

    #[test]
    fn test_parse_error_message() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ClientError::from(parse_err);
        assert!(err.to_string().starts_with("Invalid JSON response:"));
        assert!(err.status().is_none());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ClientError = io.into();
        assert_eq!(err.to_string(), "IO error: missing");
    }
}
