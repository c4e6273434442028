/*
[INPUT]:  Company identifier and secret key supplied by the embedding application
[OUTPUT]: Immutable credential pair held for the lifetime of a client
[POS]:    Auth layer - credential storage
[UPDATE]: When adding credential sources or changing redaction rules
*/

use std::fmt;

/// Account credentials for the MTI API.
///
/// The key is only readable inside the crate and is redacted from `Debug`
/// output. It is never serialized.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    company: String,
    key: String,
}

impl Credentials {
    pub fn new(company: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            key: key.into(),
        }
    }

    /// Account identifier sent in the `<company>` element
    pub fn company(&self) -> &str {
        &self.company
    }

    pub(crate) fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("company", &self.company)
            .field("key", &"***")
            .finish()
    }
}
