/*
[INPUT]:  Command name and params from the caller
[OUTPUT]: Signed <request> document, POST round-trip and decoded reply
[POS]:    HTTP layer - request orchestration
[UPDATE]: When the envelope, transport or response handling changes
*/

use tracing::{debug, warn};

use crate::http::{MtiClient, Result};
use crate::types::{Envelope, REQUEST_ROOT, Value, current_timestamp};
use crate::xml;

impl MtiClient {
    /// Assemble a signed envelope for `command` at `timestamp`.
    ///
    /// The command is uppercased before signing and is sent uppercased.
    pub fn build_envelope(&self, command: &str, params: Value, timestamp: &str) -> Envelope {
        let command = command.to_uppercase();
        let signature = self.signer.sign(&command, timestamp);

        Envelope {
            command,
            time: timestamp.to_string(),
            company: self.credentials().company().to_string(),
            signature,
            params,
        }
    }

    /// Exact XML body that would be posted for `command` at `timestamp`
    pub fn build_request_body(
        &self,
        command: &str,
        params: impl Into<Value>,
        timestamp: &str,
    ) -> Result<String> {
        let envelope = self.build_envelope(command, params.into(), timestamp);
        xml::encode(&envelope.into_value(), REQUEST_ROOT)
    }

    /// Decode a response body; the HTTP status is not consulted
    pub fn parse_response(&self, body: &str) -> Result<Value> {
        xml::decode(body)
    }

    /// Sign, send and decode one command.
    ///
    /// POST {endpoint}, body is the `<request>` document
    ///
    /// Transport errors and malformed replies are returned as is; there is
    /// no retry. Business errors reported by the service arrive as ordinary
    /// decoded content.
    ///
    /// The future performs exactly one POST and spawns nothing, so
    /// synchronous callers can drive it to completion with a runtime's
    /// `block_on`.
    pub async fn make_request(&self, command: &str, params: impl Into<Value>) -> Result<Value> {
        let envelope = self.build_envelope(command, params.into(), &current_timestamp());
        let (command, time) = (envelope.command.clone(), envelope.time.clone());

        let body = xml::encode(&envelope.into_value(), REQUEST_ROOT)?;
        debug!(
            command = %command,
            time = %time,
            bytes = body.len(),
            "sending MTI request"
        );

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "MTI API returned non-success status");
        }

        let text = response.text().await?;
        debug!(status = status.as_u16(), bytes = text.len(), "received MTI response");

        self.parse_response(&text)
    }
}
