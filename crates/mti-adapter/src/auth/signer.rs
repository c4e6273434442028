/*
[INPUT]:  Command name, formatted timestamp and held credentials
[OUTPUT]: base64(SHA-1(time + COMMAND + company + key))
[POS]:    Auth layer - request signing for every envelope
[UPDATE]: When changing signing algorithm or concatenation order
*/

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use sha1::{Digest, Sha1};

use super::Credentials;

/// Signs request envelopes with the scheme mandated by the MTI API.
///
/// SHA-1 is part of the wire contract, so the byte order of the
/// concatenation must not change.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credentials: Credentials,
}

impl RequestSigner {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Sign a request.
    ///
    /// `command` is expected to be uppercased already; `timestamp` must be
    /// the exact string placed in the `<time>` element.
    pub fn sign(&self, command: &str, timestamp: &str) -> String {
        let mut hasher = Sha1::new();
        hasher.update(timestamp.as_bytes());
        hasher.update(command.as_bytes());
        hasher.update(self.credentials.company().as_bytes());
        hasher.update(self.credentials.key().as_bytes());
        BASE64.encode(hasher.finalize())
    }
}
