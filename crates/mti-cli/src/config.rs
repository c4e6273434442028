/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed credentials and client configuration
[POS]:    Configuration layer - account setup
[UPDATE]: When adding new configuration options
*/

use std::fmt;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use mti_adapter::{ClientConfig, Credentials, DEFAULT_ENDPOINT, MtiClient};
use serde::Deserialize;

/// Top-level configuration for the command-line client
#[derive(Clone, Deserialize)]
pub struct CliConfig {
    /// Account identifier sent as `<company>`
    pub company: String,
    /// Shared secret used for signing
    pub key: String,
    /// API endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Whole-request timeout; absent means none
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliConfig")
            .field("company", &self.company)
            .field("key", &"***")
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(content).context("parse config yaml")?;
        Ok(config)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            endpoint: self.endpoint.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
            connect_timeout: None,
        }
    }

    /// Build a client bound to the configured account
    pub fn build_client(&self) -> anyhow::Result<MtiClient> {
        let credentials = Credentials::new(self.company.clone(), self.key.clone());
        MtiClient::with_config(credentials, self.client_config()).context("create MTI client")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = CliConfig::from_yaml_str("company: acme\nkey: secret\n").unwrap();
        assert_eq!(config.company, "acme");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.client_config().timeout.is_none());
    }

    #[test]
    fn test_full_config() {
        let yaml = "company: acme\nkey: secret\nendpoint: http://localhost:9000/\ntimeout_secs: 15\n";
        let config = CliConfig::from_yaml_str(yaml).unwrap();
        let client_config = config.client_config();
        assert_eq!(client_config.endpoint, "http://localhost:9000/");
        assert_eq!(client_config.timeout, Some(Duration::from_secs(15)));

        let client = config.build_client().unwrap();
        assert_eq!(client.credentials().company(), "acme");
    }

    #[test]
    fn test_missing_key_is_error() {
        assert!(CliConfig::from_yaml_str("company: acme\n").is_err());
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = CliConfig::from_yaml_str("company: acme\nkey: hunter2\n").unwrap();
        assert!(!format!("{config:?}").contains("hunter2"));
    }
}
