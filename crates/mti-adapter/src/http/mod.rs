/*
[INPUT]:  Client configuration, credentials and command params
[OUTPUT]: Decoded API responses
[POS]:    HTTP layer - REST API communication
[UPDATE]: When changing transport behaviour or the request flow
*/

pub mod client;
pub mod error;
pub mod request;

pub use error::{MtiError, Result};

pub use client::{ClientConfig, DEFAULT_ENDPOINT, MtiClient};
