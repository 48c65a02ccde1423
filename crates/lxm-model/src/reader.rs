//! XML text -> element tree.
//!
//! A thin event loop over `quick_xml`: elements and character data are kept,
//! comments, processing instructions, and the XML declaration are dropped.
//! Whitespace-only text runs are discarded so that pretty-printed input
//! compares structurally equal to compact input.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{ModelError, ModelResult};
use crate::node::{Element, Node};

/// Parse a complete XML document into its root element.
pub fn parse_root(xml: &str) -> ModelResult<Element> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                stack.push(element_from_start(&start)?);
            }
            Event::Empty(start) => {
                let element = element_from_start(&start)?;
                attach(&mut stack, &mut root, element);
            }
            Event::End(_) => {
                // quick_xml guarantees balanced start/end events.
                if let Some(element) = stack.pop() {
                    attach(&mut stack, &mut root, element);
                }
            }
            Event::Text(text) => {
                let value = text.unescape()?;
                push_text(&mut stack, &value);
            }
            Event::CData(data) => {
                let bytes = data.into_inner();
                let value = String::from_utf8_lossy(&bytes);
                push_text(&mut stack, &value);
            }
            Event::Eof => break,
            // Declaration, comments, doctype, processing instructions.
            _ => {}
        }
    }

    root.ok_or(ModelError::NoRootElement)
}

fn element_from_start(start: &quick_xml::events::BytesStart<'_>) -> ModelResult<Element> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = Element::new(name);
    for attribute in start.attributes() {
        let attribute = attribute?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute.unescape_value()?.into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

/// Finished element goes to its parent, or becomes the root.
fn attach(stack: &mut Vec<Element>, root: &mut Option<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.push_child(Node::Element(element)),
        None => {
            // First top-level element wins; anything after it is invalid XML
            // and quick_xml reports it before we get here.
            if root.is_none() {
                *root = Some(element);
            }
        }
    }
}

fn push_text(stack: &mut [Element], value: &str) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return;
    }
    if let Some(parent) = stack.last_mut() {
        parent.push_child(Node::Text(trimmed.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_elements_and_attributes() {
        let root = parse_root(
            "<lift version='0.13'><entry id='one'><lexical-unit>\
             <form lang='en'><text>hello</text></form></lexical-unit></entry></lift>",
        )
        .unwrap();
        assert_eq!(root.name, "lift");
        assert_eq!(root.attribute("version"), Some("0.13"));
        let entry = root.first_child("entry").unwrap();
        assert_eq!(entry.attribute("id"), Some("one"));
        let form = entry
            .first_child("lexical-unit")
            .and_then(|lu| lu.first_child("form"))
            .unwrap();
        assert_eq!(form.attribute("lang"), Some("en"));
        assert_eq!(form.first_child("text").unwrap().text(), "hello");
    }

    #[test]
    fn whitespace_between_elements_is_dropped() {
        let compact = parse_root("<lift><entry id='a'><sense/></entry></lift>").unwrap();
        let pretty = parse_root(
            "<lift>\n  <entry id='a'>\n    <sense/>\n  </entry>\n</lift>",
        )
        .unwrap();
        assert_eq!(compact, pretty);
    }

    #[test]
    fn self_closed_root_parses_as_empty_document() {
        let root = parse_root("<?xml version='1.0' encoding='utf-8'?><lift preserveMe='foo'/>")
            .unwrap();
        assert_eq!(root.name, "lift");
        assert_eq!(root.attribute("preserveMe"), Some("foo"));
        assert!(root.children.is_empty());
    }

    #[test]
    fn escaped_attribute_values_are_decoded() {
        let root = parse_root("<lift producer='a &amp; b'/>").unwrap();
        assert_eq!(root.attribute("producer"), Some("a & b"));
    }

    #[test]
    fn unclosed_root_is_an_error() {
        let err = parse_root("<lift><entry id='one'>").unwrap_err();
        assert!(matches!(err, ModelError::Xml(_) | ModelError::NoRootElement));
    }

    #[test]
    fn empty_input_has_no_root() {
        assert!(matches!(parse_root(""), Err(ModelError::NoRootElement)));
    }
}
