//! Element tree -> XML text.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::ModelResult;
use crate::node::{Element, Node};

/// Serialize a root element to a complete XML document with declaration.
pub fn write_document(root: &Element) -> ModelResult<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    write_element(&mut writer, root)?;
    let bytes = writer.into_inner();
    // The writer only ever emits UTF-8.
    Ok(String::from_utf8(bytes).expect("writer produced invalid UTF-8"))
}

/// Serialize a single element compactly, without declaration or indent.
///
/// Used for conflict payloads and diagnostics, not for document output.
pub fn write_fragment(element: &Element) -> ModelResult<String> {
    let mut writer = Writer::new(Vec::new());
    write_element(&mut writer, element)?;
    let bytes = writer.into_inner();
    Ok(String::from_utf8(bytes).expect("writer produced invalid UTF-8"))
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> ModelResult<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in &element.children {
        match child {
            Node::Element(e) => write_element(writer, e)?,
            Node::Text(t) => writer.write_event(Event::Text(BytesText::new(t)))?,
        }
    }
    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}
