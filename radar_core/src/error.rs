//! Error type shared by every radar operation.

use thiserror::Error;

/// Message shown when the server rejects a request without saying why.
pub const FALLBACK_SERVER_MESSAGE: &str = "Failed to generate report";

/// Message shown when a request fails without any description.
pub const FALLBACK_NETWORK_MESSAGE: &str = "Something went wrong";

/// Validation message for a blank company name.
pub const MISSING_COMPANY_MESSAGE: &str = "Please enter a company name";

/// Everything that can go wrong between the intake form and the reveal view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RadarError {
    /// A mandatory form field is blank. Nothing was sent.
    #[error("{0}")]
    Validation(String),
    /// The endpoint answered with a non-success status, or with a success
    /// status but no usable report.
    #[error("server returned {status}: {}", .message.as_deref().unwrap_or(FALLBACK_SERVER_MESSAGE))]
    Server {
        /// HTTP status code of the reply
        status: u16,
        /// The `error` string from the reply body, when there was one
        message: Option<String>,
    },
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),
    /// The reply body was not the JSON we expected.
    #[error("invalid response: {0}")]
    Decode(String),
    /// The transient store refused a read or write.
    #[error("storage error: {0}")]
    Storage(String),
    /// Configuration could not be parsed or is out of range.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl RadarError {
    /// The string rendered inline under the form.
    pub fn user_message(&self) -> String {
        match self {
            RadarError::Validation(msg) => msg.clone(),
            RadarError::Server { message, .. } => message
                .as_deref()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(FALLBACK_SERVER_MESSAGE)
                .to_string(),
            RadarError::Network(msg) if msg.trim().is_empty() => {
                FALLBACK_NETWORK_MESSAGE.to_string()
            }
            RadarError::Network(msg)
            | RadarError::Decode(msg)
            | RadarError::Storage(msg)
            | RadarError::Config(msg) => msg.clone(),
        }
    }
}

impl From<serde_json::Error> for RadarError {
    fn from(e: serde_json::Error) -> Self {
        RadarError::Decode(e.to_string())
    }
}

impl From<reqwest::Error> for RadarError {
    fn from(e: reqwest::Error) -> Self {
        RadarError::Network(e.to_string())
    }
}

impl From<toml::de::Error> for RadarError {
    fn from(e: toml::de::Error) -> Self {
        RadarError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn server_error_prefers_body_message() {
        let err = RadarError::Server {
            status: 429,
            message: Some("Rate limit exceeded".into()),
        };
        assert_eq!(err.user_message(), "Rate limit exceeded");
    }

    #[test]
    fn server_error_falls_back_when_body_is_silent() {
        let err = RadarError::Server {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message(), FALLBACK_SERVER_MESSAGE);

        let blank = RadarError::Server {
            status: 502,
            message: Some("   ".into()),
        };
        assert_eq!(blank.user_message(), FALLBACK_SERVER_MESSAGE);
    }

    #[test]
    fn empty_network_error_uses_generic_message() {
        assert_eq!(
            RadarError::Network(String::new()).user_message(),
            FALLBACK_NETWORK_MESSAGE
        );
        assert_eq!(
            RadarError::Network("connection refused".into()).user_message(),
            "connection refused"
        );
    }

    #[test]
    fn display_includes_status() {
        let err = RadarError::Server {
            status: 503,
            message: None,
        };
        assert_eq!(err.to_string(), "server returned 503: Failed to generate report");
    }

    #[test]
    fn validation_message_is_shown_verbatim() {
        let err = RadarError::Validation(MISSING_COMPANY_MESSAGE.into());
        assert_eq!(err.user_message(), MISSING_COMPANY_MESSAGE);
        assert_eq!(err.to_string(), MISSING_COMPANY_MESSAGE);
    }
}
