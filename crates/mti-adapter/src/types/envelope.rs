/*
[INPUT]:  Command, timestamp, company, signature and caller params
[OUTPUT]: Envelope value ready for XML encoding under <request>
[POS]:    Data layer - request envelope definition
[UPDATE]: When the envelope fields or timestamp format change
*/

use chrono::{Local, NaiveDateTime};

use super::{Map, Value};

/// Wire format of the `<time>` element. Local time, no zone suffix.
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Root element of every request document
pub const REQUEST_ROOT: &str = "request";

pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Current wall-clock time of the running process, formatted for the wire
pub fn current_timestamp() -> String {
    format_timestamp(&Local::now().naive_local())
}

/// A single request, built fresh for every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub command: String,
    pub time: String,
    pub company: String,
    pub signature: String,
    pub params: Value,
}

impl Envelope {
    /// Convert to the mapping encoded under the `<request>` root
    pub fn into_value(self) -> Value {
        let mut map = Map::with_capacity(5);
        map.insert("type".to_string(), Value::Text(self.command));
        map.insert("time".to_string(), Value::Text(self.time));
        map.insert("company".to_string(), Value::Text(self.company));
        map.insert("signature".to_string(), Value::Text(self.signature));
        map.insert("params".to_string(), self.params);
        Value::Map(map)
    }
}
