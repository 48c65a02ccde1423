//! A parsed lexicon document and its entry-level accessors.

use crate::error::{ModelError, ModelResult};
use crate::names;
use crate::node::{Element, Node};
use crate::reader::parse_root;
use crate::writer::write_document;

/// A lexicon document: a root element whose `entry` children are the
/// records of interest. Root attributes and namespace declarations are
/// arbitrary pass-through content.
///
/// Documents are parsed fresh per invocation and never mutated by the merge
/// engines; merged output is always a newly constructed document.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Parse a document from XML text.
    ///
    /// A self-closed empty root element is a valid empty document; its root
    /// attributes are preserved.
    pub fn parse(xml: &str) -> ModelResult<Self> {
        Ok(Self {
            root: parse_root(xml)?,
        })
    }

    /// Parse, additionally requiring the recognized lexicon root element.
    pub fn parse_strict(xml: &str) -> ModelResult<Self> {
        let doc = Self::parse(xml)?;
        if doc.root.name != names::ROOT {
            return Err(ModelError::UnexpectedRoot {
                expected: names::ROOT.to_string(),
                found: doc.root.name.clone(),
            });
        }
        Ok(doc)
    }

    /// Build a document around an already-constructed root element.
    pub fn from_root(root: Element) -> Self {
        Self { root }
    }

    /// The root element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Consume the document, yielding its root element.
    pub fn into_root(self) -> Element {
        self.root
    }

    /// The root's declared schema version, if any.
    pub fn version(&self) -> Option<&str> {
        self.root.attribute(names::ATTR_VERSION)
    }

    /// Top-level entry elements in document order.
    pub fn entries(&self) -> impl Iterator<Item = &Element> {
        self.root.children_named(names::ENTRY)
    }

    /// Root children that are not entries (headers and other pass-through
    /// content), in document order.
    pub fn non_entry_children(&self) -> impl Iterator<Item = &Node> {
        self.root.children.iter().filter(|node| {
            !matches!(node, Node::Element(e) if e.name == names::ENTRY)
        })
    }

    /// Rebuild a document with the same root attributes but a new child
    /// sequence: the non-entry children of `self`, then `entries`.
    pub fn with_entries(&self, entries: Vec<Element>) -> Self {
        let mut root = Element::new(self.root.name.clone());
        root.attributes = self.root.attributes.clone();
        for node in self.non_entry_children() {
            root.push_child(node.clone());
        }
        for entry in entries {
            root.push_child(Node::Element(entry));
        }
        Self { root }
    }

    /// Serialize to XML text with declaration.
    pub fn to_xml(&self) -> ModelResult<String> {
        write_document(&self.root)
    }
}

/// The matching key of an entry: the stable `guid` when present, else `id`.
///
/// Entries carrying neither are unmatched and return `None`; callers skip
/// them rather than fail.
pub fn entry_key(entry: &Element) -> Option<&str> {
    entry
        .attribute(names::ATTR_GUID)
        .or_else(|| entry.attribute(names::ATTR_ID))
}
