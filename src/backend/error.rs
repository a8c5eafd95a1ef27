//! Error handling for the backend module

use crate::logging::LogLevel;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Request(#[from] reqwest::Error),

    /// A success response whose body did not match the expected shape.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// No bearer token is available to sign the request.
    #[error("No API token configured. Run `kyc-console login --token <TOKEN>` first")]
    MissingCredentials,
}

impl BackendError {
    pub async fn from_response(response: reqwest::Response) -> BackendError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        BackendError::Http { status, message }
    }

    /// Text shown to the user: the server's own message when it sent one.
    ///
    /// Bodies shaped like `{"message": "..."}` are unwrapped to that string;
    /// anything else is shown as sent.
    pub fn user_message(&self) -> String {
        match self {
            BackendError::Http { message, .. } if !message.trim().is_empty() => {
                json_message(message).unwrap_or_else(|| message.trim().to_string())
            }
            BackendError::Http { status, .. } => format!("Request failed with status {}", status),
            other => other.to_string(),
        }
    }

    /// Classify error and determine appropriate log level
    pub fn log_level(&self) -> LogLevel {
        match self {
            // Authentication errors - critical
            BackendError::Http { status, .. } if *status == 401 || *status == 403 => {
                LogLevel::Error
            }
            BackendError::MissingCredentials => LogLevel::Error,

            // Server errors - temporary issues
            BackendError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Malformed responses point at a contract mismatch
            BackendError::Decode(_) => LogLevel::Error,

            // Network issues and rejected requests
            _ => LogLevel::Warn,
        }
    }
}

fn json_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = value.get("message")?.as_str()?.trim();
    (!message.is_empty()).then(|| message.to_string())
}
