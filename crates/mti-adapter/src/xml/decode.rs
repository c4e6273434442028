/*
[INPUT]:  Raw XML text from a response body
[OUTPUT]: Value tree built with the first-two-tags heuristic
[POS]:    Codec layer - response direction
[UPDATE]: When changing how records, lists or leaves are recognised
*/

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::xml_error;
use crate::http::{MtiError, Result};
use crate::types::{Map, Value};

/// Deepest element nesting accepted in a response document
pub const MAX_DEPTH: usize = 256;

/// Parsed element before classification
#[derive(Debug, Default)]
struct Element {
    tag: String,
    attributes: Map,
    text: String,
    children: Vec<Element>,
}

/// Decode an XML document into a [`Value`].
///
/// Classification is a heuristic, not a schema-aware parse:
/// - a leaf is its trimmed text, or its attribute mapping when it has
///   attributes; empty leaves produce no entry
/// - when the first two children share a tag, all children form a list
///   stored under that tag
/// - otherwise children form a record keyed by tag, merged over the
///   element's attributes
///
/// A record whose first two fields happen to repeat a tag is read as a
/// list. The root follows the same rules, so a text-only root such as
/// `<error>bad signature</error>` decodes to `Value::Text`, not a mapping.
/// A root with nothing to report decodes to an empty mapping.
///
/// Documents nested deeper than [`MAX_DEPTH`] are rejected.
pub fn decode(xml: &str) -> Result<Value> {
    let root = parse_tree(xml)?;
    Ok(decode_element(&root).unwrap_or_else(Value::empty_map))
}

fn decode_element(element: &Element) -> Option<Value> {
    let mut map = element.attributes.clone();

    match element.children.as_slice() {
        [] => {
            if !map.is_empty() {
                return Some(Value::Map(map));
            }
            let text = element.text.trim();
            (!text.is_empty()).then(|| Value::Text(text.to_string()))
        }
        [first, second, ..] if first.tag == second.tag => {
            let items = element.children.iter().filter_map(decode_element).collect();
            map.insert(first.tag.clone(), Value::List(items));
            Some(Value::Map(map))
        }
        children => {
            for child in children {
                if let Some(value) = decode_element(child) {
                    map.insert(child.tag.clone(), value);
                }
            }
            Some(Value::Map(map))
        }
    }
}

fn parse_tree(xml: &str) -> Result<Element> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(start) => {
                ensure_single_root(&stack, &root)?;
                ensure_depth(&stack)?;
                stack.push(open_element(&start)?);
            }
            Event::Empty(start) => {
                ensure_single_root(&stack, &root)?;
                ensure_depth(&stack)?;
                let element = open_element(&start)?;
                close_element(element, &mut stack, &mut root);
            }
            Event::End(end) => {
                let element = stack.pop().ok_or_else(|| {
                    MtiError::Xml(format!(
                        "unexpected closing tag </{}>",
                        String::from_utf8_lossy(end.name().as_ref())
                    ))
                })?;
                close_element(element, &mut stack, &mut root);
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(xml_error)?;
                append_text(&mut stack, &text)?;
            }
            Event::CData(data) => {
                let text = std::str::from_utf8(&data).map_err(xml_error)?;
                append_text(&mut stack, text)?;
            }
            Event::Eof => break,
            // declarations, comments, processing instructions, doctype
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(MtiError::Xml(format!(
            "unexpected end of document inside <{}>",
            open.tag
        )));
    }

    root.ok_or_else(|| MtiError::Xml("document has no root element".to_string()))
}

fn open_element(start: &BytesStart<'_>) -> Result<Element> {
    let name = start.name();
    let tag = std::str::from_utf8(name.as_ref())
        .map_err(xml_error)?
        .to_string();

    let mut attributes = Map::new();
    for attr in start.attributes() {
        let attr = attr.map_err(xml_error)?;
        let key = std::str::from_utf8(attr.key.as_ref()).map_err(xml_error)?;
        // namespace declarations are not data
        if key == "xmlns" || key.starts_with("xmlns:") {
            continue;
        }
        let value = attr.unescape_value().map_err(xml_error)?;
        attributes.insert(key.to_string(), Value::Text(value.into_owned()));
    }

    Ok(Element {
        tag,
        attributes,
        ..Element::default()
    })
}

fn close_element(element: Element, stack: &mut [Element], root: &mut Option<Element>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

fn ensure_single_root(stack: &[Element], root: &Option<Element>) -> Result<()> {
    if stack.is_empty() && root.is_some() {
        return Err(MtiError::Xml(
            "unexpected element after the root element".to_string(),
        ));
    }
    Ok(())
}

fn ensure_depth(stack: &[Element]) -> Result<()> {
    if stack.len() >= MAX_DEPTH {
        return Err(MtiError::Xml(format!(
            "document nested too deeply (limit {MAX_DEPTH})"
        )));
    }
    Ok(())
}

fn append_text(stack: &mut [Element], text: &str) -> Result<()> {
    match stack.last_mut() {
        Some(current) => {
            current.text.push_str(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(MtiError::Xml(format!(
            "text outside the root element: {:?}",
            text.trim()
        ))),
    }
}
