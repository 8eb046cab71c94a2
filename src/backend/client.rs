use std::fmt;

use async_trait::async_trait;

/// Errors that can occur while talking to the processing backend.
///
/// The controller never shows these to the user; every variant collapses to
/// the same fixed message. They exist so the log says what actually happened.
#[derive(Debug)]
pub enum BackendError {
    /// Transport failure (DNS, connection refused, reset).
    Network(String),
    /// Backend answered with a non-2xx status.
    Api { status: u16, message: String },
    /// Body was not JSON or had no string `summary`.
    Parse(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Network(msg) => write!(f, "network error: {msg}"),
            BackendError::Api { status, message } => {
                write!(f, "backend error (HTTP {status}): {message}")
            }
            BackendError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for BackendError {}

/// The remote summarization service, seen from the client.
///
/// One call, one answer: implementations must not retry or stream.
#[async_trait]
pub trait SummaryBackend: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Submits `text` and resolves to the display string on success.
    async fn process(&self, text: &str) -> Result<String, BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_for_api_errors() {
        let err = BackendError::Api {
            status: 400,
            message: "Error: Empty input received".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "backend error (HTTP 400): Error: Empty input received"
        );
    }

    #[test]
    fn display_prefixes_network_and_parse() {
        assert_eq!(
            BackendError::Network("connection refused".into()).to_string(),
            "network error: connection refused"
        );
        assert_eq!(
            BackendError::Parse("missing field `summary`".into()).to_string(),
            "parse error: missing field `summary`"
        );
    }
}
