/*
[INPUT]:  Error sources (HTTP transport, XML parsing, encoding, configuration)
[OUTPUT]: Structured error type surfaced to callers of the client
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the MTI adapter
#[derive(Error, Debug)]
pub enum MtiError {
    /// HTTP transport failed (DNS, connect, read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body is not a well-formed XML document
    #[error("XML error: {0}")]
    Xml(String),

    /// A mapping key cannot be used as an element name
    #[error("Invalid XML tag name: {0:?}")]
    InvalidTagName(String),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MtiError {
    /// Failure happened on the network path; the caller owns any retry policy
    pub fn is_transport_error(&self) -> bool {
        matches!(self, MtiError::Http(_))
    }

    /// Response could not be parsed as XML
    pub fn is_parse_error(&self) -> bool {
        matches!(self, MtiError::Xml(_))
    }
}

/// Result type alias for MTI operations
pub type Result<T> = std::result::Result<T, MtiError>;
