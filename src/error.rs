use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum BrochureError {
    #[error("Failed to parse URL: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("Failed to fetch content: {0}")]
    FetchError(String),

    #[error("Request timeout: {0}")]
    TimeoutError(String),

    #[error("Invalid content type: {0}")]
    InvalidContentType(String),

    #[error("Failed to extract content: {0}")]
    ExtractError(String),

    #[error("Unknown audience: {0} (expected client, investor or recruit)")]
    UnknownAudience(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("External service error: {service} - {message}")]
    ExternalServiceError { service: String, message: String },

    #[error("Stream transport failure: {message}")]
    StreamTransport {
        message: String,
        /// Fragments already emitted to the sink before the stream dropped.
        partial: String,
    },
}

impl BrochureError {
    pub fn log(&self) {
        match self {
            BrochureError::UrlParseError(e) => {
                warn!(error = %e, "URL parsing failed");
            }
            BrochureError::FetchError(e) => {
                error!(error = %e, "Website fetch failed");
            }
            BrochureError::TimeoutError(e) => {
                warn!(error = %e, "Website fetch timed out");
            }
            BrochureError::InvalidContentType(e) => {
                warn!(error = %e, "Non-HTML response received");
            }
            BrochureError::ExtractError(e) => {
                error!(error = %e, "Content extraction failed");
            }
            BrochureError::UnknownAudience(e) => {
                warn!(audience = %e, "Audience not recognized");
            }
            BrochureError::InvalidConfiguration(e) => {
                error!(error = %e, "Configuration invalid");
            }
            BrochureError::ExternalServiceError { service, message } => {
                error!(
                    service = %service,
                    error = %message,
                    "External service error occurred"
                );
            }
            BrochureError::StreamTransport { message, partial } => {
                error!(
                    error = %message,
                    partial_len = partial.len(),
                    "Completion stream dropped mid-generation"
                );
            }
        }
    }
}
