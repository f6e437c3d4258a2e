//! Error handling for the backend module

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The backend rejected the request with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },
}

/// Error body the backend sends on rejections.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ApiError::Http {
            status,
            message: extract_error_message(body),
        }
    }

    /// True for network-level failures, as opposed to application-level
    /// rejections carried in an HTTP response.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, ApiError::Reqwest(_))
    }
}

/// Pull the message out of a `{"error": "..."}` body, falling back to the
/// raw text when the backend sent something else.
fn extract_error_message(body: String) -> String {
    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => parsed.error,
        Err(_) => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// The backend's JSON error envelope is unwrapped to its message.
    fn extracts_json_error_message() {
        let body = r#"{"error": "Aluno já existe"}"#.to_string();
        assert_eq!(extract_error_message(body), "Aluno já existe");
    }

    #[test]
    /// Non-JSON bodies are passed through untouched.
    fn falls_back_to_raw_body() {
        let body = "502 Bad Gateway".to_string();
        assert_eq!(extract_error_message(body), "502 Bad Gateway");
    }

    #[test]
    fn connectivity_classification() {
        let http = ApiError::Http {
            status: 400,
            message: "bad".into(),
        };
        assert!(!http.is_connectivity());
    }
}
