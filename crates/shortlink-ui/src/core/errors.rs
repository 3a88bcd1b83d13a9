//! Error types surfaced by the dashboard service layer.

use thiserror::Error;

/// Failure fetching data from the link API.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("request failed ({status}): {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Server-provided message or a generic fallback.
        message: String,
    },
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error from a raw response body.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<shortlink_api_models::ErrorMessage>(body)
            .map(|error| error.message)
            .ok()
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| "Unable to load links".to_string());
        Self::Status { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn status_error_prefers_server_message() {
        let err = ApiError::from_status(401, r#"{"message":"Session expired"}"#);
        assert_eq!(
            err,
            ApiError::Status {
                status: 401,
                message: "Session expired".into()
            }
        );
        assert_eq!(err.to_string(), "request failed (401): Session expired");
    }

    #[test]
    fn status_error_falls_back_on_unknown_body() {
        let err = ApiError::from_status(502, "<html>bad gateway</html>");
        assert_eq!(err.to_string(), "request failed (502): Unable to load links");
    }
}
