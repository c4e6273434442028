/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for mti-adapter tests

use mti_adapter::{ClientConfig, Credentials, MtiClient};
use wiremock::MockServer;

pub const COMPANY: &str = "acme";
pub const KEY: &str = "secret";

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_credentials() -> Credentials {
    Credentials::new(COMPANY, KEY)
}

/// Client pointed at the mock server
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> MtiClient {
    let config = ClientConfig {
        endpoint: server.uri(),
        ..ClientConfig::default()
    };
    MtiClient::with_config(test_credentials(), config).expect("client init")
}

/// Canned balance reply with a homogeneous list of accounts
#[allow(dead_code)]
pub fn balance_response() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<response result="ok">
    <accounts>
        <account id="1"><currency>UAH</currency><amount>100.50</amount></account>
        <account id="2"><currency>USD</currency><amount>7</amount></account>
    </accounts>
</response>"#
}
