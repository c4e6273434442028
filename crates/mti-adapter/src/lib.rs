/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public MTI adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;
pub mod xml;

// Re-export commonly used types from auth
pub use auth::{Credentials, RequestSigner};

// Re-export commonly used types from http
pub use http::{ClientConfig, DEFAULT_ENDPOINT, MtiClient, MtiError, Result};

// Re-export all types
pub use types::*;
