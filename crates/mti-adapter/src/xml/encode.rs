/*
[INPUT]:  Value tree and root tag name
[OUTPUT]: UTF-8 XML document without type-hint attributes
[POS]:    Codec layer - request direction
[UPDATE]: When changing list layout or tag validation
*/

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::xml_error;
use crate::http::{MtiError, Result};
use crate::types::Value;

/// Encode `value` as a document rooted at `root`.
///
/// Mapping keys become child elements in insertion order. A list stored
/// under a key becomes repeated sibling elements named after that key.
pub fn encode(value: &Value, root: &str) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_error)?;
    write_element(&mut writer, root, value)?;
    String::from_utf8(writer.into_inner()).map_err(xml_error)
}

fn write_element(writer: &mut Writer<Vec<u8>>, tag: &str, value: &Value) -> Result<()> {
    validate_tag(tag)?;
    writer
        .write_event(Event::Start(BytesStart::new(tag)))
        .map_err(xml_error)?;

    match value {
        Value::Text(text) => {
            if !text.is_empty() {
                writer
                    .write_event(Event::Text(BytesText::new(text)))
                    .map_err(xml_error)?;
            }
        }
        Value::Map(map) => {
            for (key, child) in map {
                write_field(writer, key, child)?;
            }
        }
        // nested list: children repeat the enclosing tag
        Value::List(items) => {
            for item in items {
                write_element(writer, tag, item)?;
            }
        }
    }

    writer
        .write_event(Event::End(BytesEnd::new(tag)))
        .map_err(xml_error)
}

fn write_field(writer: &mut Writer<Vec<u8>>, key: &str, value: &Value) -> Result<()> {
    match value {
        Value::List(items) => {
            validate_tag(key)?;
            for item in items {
                write_element(writer, key, item)?;
            }
            Ok(())
        }
        other => write_element(writer, key, other),
    }
}

// Keys that are not XML names are an error; they are never rewritten into a
// generic element carrying the key as an attribute.
fn validate_tag(tag: &str) -> Result<()> {
    let mut chars = tag.chars();
    let valid = match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == ':' => {
            chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | ':'))
        }
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(MtiError::InvalidTagName(tag.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Map;

    const DECL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

    fn map(entries: Vec<(&str, Value)>) -> Value {
        entries.into_iter().collect()
    }

    #[test]
    fn test_flat_mapping_in_order() {
        let value = map(vec![("b", "2".into()), ("a", "1".into())]);
        let xml = encode(&value, "request").unwrap();
        assert_eq!(xml, format!("{DECL}<request><b>2</b><a>1</a></request>"));
    }

    #[test]
    fn test_nested_mapping() {
        let value = map(vec![("params", map(vec![("id", "7".into())]))]);
        let xml = encode(&value, "request").unwrap();
        assert_eq!(
            xml,
            format!("{DECL}<request><params><id>7</id></params></request>")
        );
    }

    #[test]
    fn test_list_becomes_repeated_siblings() {
        let value = map(vec![("a", vec!["1", "2"].into())]);
        let xml = encode(&value, "root").unwrap();
        assert_eq!(xml, format!("{DECL}<root><a>1</a><a>2</a></root>"));
    }

    #[test]
    fn test_empty_values() {
        let value = map(vec![
            ("none", Value::List(Vec::new())),
            ("blank", "".into()),
            ("nothing", Value::Map(Map::new())),
        ]);
        let xml = encode(&value, "root").unwrap();
        assert_eq!(
            xml,
            format!("{DECL}<root><blank></blank><nothing></nothing></root>")
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let value = map(vec![("q", "a<b & \"c\"".into())]);
        let xml = encode(&value, "root").unwrap();
        assert!(xml.contains("<q>a&lt;b &amp; &quot;c&quot;</q>"), "{xml}");
    }

    #[test]
    fn test_invalid_tag_rejected() {
        for key in ["", "1st", "has space", "-dash", "a/b"] {
            let value = map(vec![(key, "x".into())]);
            let err = encode(&value, "root").unwrap_err();
            assert!(
                matches!(err, MtiError::InvalidTagName(ref name) if name == key),
                "{key}: {err}"
            );
        }
    }

    #[test]
    fn test_invalid_root_rejected() {
        let err = encode(&Value::empty_map(), "bad root").unwrap_err();
        assert!(matches!(err, MtiError::InvalidTagName(_)));
    }

    #[test]
    fn test_valid_tag_characters() {
        assert!(validate_tag("_private").is_ok());
        assert!(validate_tag("ns:item-2.v").is_ok());
        assert!(validate_tag("товар").is_ok());
    }
}
