/*
[INPUT]:  Value trees (requests) and raw XML text (responses)
[OUTPUT]: XML documents and decoded Value trees
[POS]:    Codec layer - XML <-> Value conversion on top of quick-xml
[UPDATE]: When changing element naming, list layout or decode heuristics
*/

pub mod decode;
pub mod encode;

pub use decode::decode;
pub use encode::encode;

use std::fmt::Display;

use crate::http::MtiError;

fn xml_error<E: Display>(err: E) -> MtiError {
    MtiError::Xml(err.to_string())
}
