//! Error types for the redeploy action

use std::time::Duration;

use thiserror::Error;

/// Main error type for the redeploy action
#[derive(Error, Debug)]
pub enum RedeployError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API error: {status} {message}")]
    ApiError { status: u16, message: String },

    #[error("service did not become stable within {budget:?} ({attempts} stability checks made)")]
    WaitTimeout { attempts: u32, budget: Duration },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RedeployError {
    /// Whether a stability check hitting this error should count as a plain
    /// not-yet-stable observation instead of aborting the wait cycle.
    /// Connection-level failures and provider 5xx responses qualify; anything
    /// else means the request itself is wrong and retrying cannot help.
    pub fn is_transient(&self) -> bool {
        match self {
            RedeployError::HttpError(_) => true,
            RedeployError::ApiError { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

impl From<anyhow::Error> for RedeployError {
    fn from(err: anyhow::Error) -> Self {
        RedeployError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_errors_are_transient() {
        let err = RedeployError::ApiError {
            status: 503,
            message: "service unavailable".to_string(),
        };
        assert!(err.is_transient());
    }

    #[test]
    fn test_client_errors_are_fatal() {
        let err = RedeployError::ApiError {
            status: 403,
            message: "access denied".to_string(),
        };
        assert!(!err.is_transient());
        assert!(!RedeployError::ConfigError("bad url".to_string()).is_transient());
    }

    #[test]
    fn test_timeout_message_names_the_budget() {
        let err = RedeployError::WaitTimeout {
            attempts: 120,
            budget: Duration::from_secs(1800),
        };
        let message = err.to_string();
        assert!(message.contains("120"));
        assert!(message.contains("1800"));
    }
}
