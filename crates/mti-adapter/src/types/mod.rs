/*
[INPUT]:  Request parameters and decoded response documents
[OUTPUT]: Value tree and request envelope types
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the envelope layout or value model changes
*/

pub mod envelope;
pub mod value;

pub use envelope::{Envelope, REQUEST_ROOT, TIMESTAMP_FORMAT, current_timestamp, format_timestamp};
pub use value::{Map, Value};
