/*
[INPUT]:  HTTP configuration (endpoint, optional timeouts) and credentials
[OUTPUT]: Configured reqwest client bound to one account
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::{Client, Url};
use std::time::Duration;

use crate::auth::{Credentials, RequestSigner};
use crate::http::{MtiError, Result};

/// Fixed endpoint of the MTI API
pub const DEFAULT_ENDPOINT: &str = "https://api.mti.ua/";

/// HTTP client configuration
///
/// No timeouts are set by default; callers that need them opt in.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
            connect_timeout: None,
        }
    }
}

/// Main HTTP client for the MTI API
///
/// Holds immutable credentials only, so one instance can be shared across
/// tasks; every call builds its own envelope.
#[derive(Debug, Clone)]
pub struct MtiClient {
    pub(crate) http_client: Client,
    pub(crate) endpoint: Url,
    pub(crate) signer: RequestSigner,
}

impl MtiClient {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| MtiError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            endpoint: Url::parse(&config.endpoint)?,
            signer: RequestSigner::new(credentials),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn credentials(&self) -> &Credentials {
        self.signer.credentials()
    }
}
