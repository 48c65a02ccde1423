//! Field-level three-way merge of one matched entry triple.
//!
//! The merger recurses into every structural slot of an entry: attributes,
//! the lexical-unit forms (matched by language), grammatical-info, senses
//! (matched by sense id), glosses (matched by language), pass-through child
//! elements (matched positionally per element name), and the example
//! collection (matched by structural equality only — examples carry no
//! identity key).
//!
//! Every single-valued slot follows one decision table, given the ancestor,
//! ours, and theirs values: agreement keeps ours; a one-sided change wins
//! silently; divergent changes keep ours and record a [`Conflict`]; a
//! deletion wins over an unchanged value but loses, with a conflict, to an
//! edit. Output entries are freshly constructed; inputs are never mutated.

use std::collections::HashMap;

use lxm_model::{entry_key, names, write_fragment, Element, Node};

use crate::conflict::Conflict;

/// Injected merge capability: reconcile one matched entry triple.
///
/// Any member of the triple may be absent, representing an add or a delete
/// on that side. Returns the freshly built merged entry (`None` when the
/// resolution is a deletion) and the conflicts produced while merging it.
pub trait EntryMerge {
    fn merge_entry(
        &self,
        ours: Option<&Element>,
        theirs: Option<&Element>,
        ancestor: Option<&Element>,
    ) -> (Option<Element>, Vec<Conflict>);
}

/// The default decision-table implementation of [`EntryMerge`].
#[derive(Clone, Copy, Debug, Default)]
pub struct EntryMerger;

impl EntryMerger {
    /// Create a new merger.
    pub fn new() -> Self {
        Self
    }
}

impl EntryMerge for EntryMerger {
    fn merge_entry(
        &self,
        ours: Option<&Element>,
        theirs: Option<&Element>,
        ancestor: Option<&Element>,
    ) -> (Option<Element>, Vec<Conflict>) {
        let mut conflicts = Vec::new();
        let entry_id = [ours, theirs, ancestor]
            .into_iter()
            .flatten()
            .find_map(entry_key)
            .unwrap_or("")
            .to_string();

        let merged = match (ours, theirs) {
            (None, None) => None,
            (Some(o), Some(t)) => Some(merge_elements(
                &entry_id,
                names::ENTRY,
                o,
                t,
                ancestor,
                &mut conflicts,
            )),
            (Some(o), None) => resolve_one_sided(&entry_id, o, ancestor, Side::Ours, &mut conflicts),
            (None, Some(t)) => resolve_one_sided(&entry_id, t, ancestor, Side::Theirs, &mut conflicts),
        };

        (merged, conflicts)
    }
}

/// Which side still holds the entry in a one-sided case.
#[derive(Clone, Copy)]
enum Side {
    Ours,
    Theirs,
}

/// An entry present on exactly one side: an add when the ancestor lacks it,
/// a clean deletion when the survivor is unchanged, and a deleted-vs-edited
/// conflict (edit wins) otherwise.
fn resolve_one_sided(
    entry_id: &str,
    present: &Element,
    ancestor: Option<&Element>,
    side: Side,
    conflicts: &mut Vec<Conflict>,
) -> Option<Element> {
    match ancestor {
        None => Some(present.clone()),
        Some(a) if a == present => None,
        Some(a) => {
            let fragment = write_fragment(present).ok();
            let (ours, theirs, description) = match side {
                Side::Ours => (
                    fragment,
                    None,
                    "entry deleted in theirs but edited in ours; kept ours".to_string(),
                ),
                Side::Theirs => (
                    None,
                    fragment,
                    "entry deleted in ours but edited in theirs; kept theirs".to_string(),
                ),
            };
            conflicts.push(Conflict {
                entry_id: entry_id.to_string(),
                field: names::ENTRY.to_string(),
                ours,
                theirs,
                ancestor: write_fragment(a).ok(),
                description,
            });
            Some(present.clone())
        }
    }
}

// ---------------------------------------------------------------------------
// Slot identification
// ---------------------------------------------------------------------------

/// How a child element is matched across the three trees.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct SlotKey {
    name: String,
    disc: Disc,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Disc {
    /// Explicit id key (senses).
    Id(String),
    /// Language key (forms, glosses).
    Lang(String),
    /// Positional fallback for untyped slots, per element name.
    Ordinal(usize),
}

impl SlotKey {
    fn display(&self) -> String {
        match &self.disc {
            Disc::Id(id) => format!("{}[{}]", self.name, id),
            Disc::Lang(lang) => format!("{}[{}]", self.name, lang),
            Disc::Ordinal(0) => self.name.clone(),
            Disc::Ordinal(n) => format!("{}[{}]", self.name, n),
        }
    }
}

/// Keyed child slots of one parent, in document order plus a lookup map.
/// Examples are excluded — they merge as a collection, never positionally.
/// The first occurrence wins when a key repeats.
fn collect_slots(parent: &Element) -> (Vec<(SlotKey, &Element)>, HashMap<SlotKey, &Element>) {
    let mut ordinals: HashMap<&str, usize> = HashMap::new();
    let mut order = Vec::new();
    let mut map: HashMap<SlotKey, &Element> = HashMap::new();

    for child in parent.child_elements() {
        if child.name == names::EXAMPLE {
            continue;
        }
        let disc = match child.name.as_str() {
            names::SENSE => child
                .attribute(names::ATTR_ID)
                .map(|id| Disc::Id(id.to_string())),
            names::FORM | names::GLOSS => child
                .attribute(names::ATTR_LANG)
                .map(|lang| Disc::Lang(lang.to_string())),
            _ => None,
        };
        let disc = disc.unwrap_or_else(|| {
            let n = ordinals.entry(child.name.as_str()).or_insert(0);
            let d = Disc::Ordinal(*n);
            *n += 1;
            d
        });
        let key = SlotKey {
            name: child.name.clone(),
            disc,
        };
        if map.contains_key(&key) {
            tracing::warn!(slot = %key.display(), "duplicate slot key; first occurrence wins");
            continue;
        }
        map.insert(key.clone(), child);
        order.push((key, child));
    }

    (order, map)
}

// ---------------------------------------------------------------------------
// Recursive element merge
// ---------------------------------------------------------------------------

/// Merge two present elements against an optional ancestor, slot by slot.
fn merge_elements(
    entry_id: &str,
    path: &str,
    ours: &Element,
    theirs: &Element,
    ancestor: Option<&Element>,
    conflicts: &mut Vec<Conflict>,
) -> Element {
    let mut merged = Element::new(ours.name.clone());

    merge_attributes(entry_id, path, ours, theirs, ancestor, &mut merged, conflicts);
    merge_text(entry_id, path, ours, theirs, ancestor, &mut merged, conflicts);
    merge_child_slots(entry_id, path, ours, theirs, ancestor, &mut merged, conflicts);
    merge_examples(ours, theirs, ancestor, &mut merged);

    merged
}

/// Attributes merge as single-valued slots keyed by name: ours' attribute
/// order first, then theirs-only names appended.
fn merge_attributes(
    entry_id: &str,
    path: &str,
    ours: &Element,
    theirs: &Element,
    ancestor: Option<&Element>,
    merged: &mut Element,
    conflicts: &mut Vec<Conflict>,
) {
    let mut names: Vec<&str> = ours.attributes.iter().map(|(k, _)| k.as_str()).collect();
    for (name, _) in &theirs.attributes {
        if !names.contains(&name.as_str()) {
            names.push(name);
        }
    }
    for name in names {
        let field = format!("{path}@{name}");
        let value = merge_scalar(
            entry_id,
            &field,
            ancestor.and_then(|e| e.attribute(name)),
            ours.attribute(name),
            theirs.attribute(name),
            conflicts,
        );
        if let Some(value) = value {
            merged.set_attribute(name, value);
        }
    }
}

/// Direct text content is one single-valued slot.
fn merge_text(
    entry_id: &str,
    path: &str,
    ours: &Element,
    theirs: &Element,
    ancestor: Option<&Element>,
    merged: &mut Element,
    conflicts: &mut Vec<Conflict>,
) {
    let ours_text = non_empty(ours.text());
    let theirs_text = non_empty(theirs.text());
    let ancestor_text = ancestor.and_then(|e| non_empty(e.text()));
    let field = format!("{path}#text");
    let value = merge_scalar(
        entry_id,
        &field,
        ancestor_text.as_deref(),
        ours_text.as_deref(),
        theirs_text.as_deref(),
        conflicts,
    );
    if let Some(value) = value {
        merged.push_child(Node::Text(value));
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Keyed child slots: recurse where both sides hold the slot, apply the
/// presence rules where only one does. Ours' slots keep their order;
/// theirs-only slots are appended after them.
fn merge_child_slots(
    entry_id: &str,
    path: &str,
    ours: &Element,
    theirs: &Element,
    ancestor: Option<&Element>,
    merged: &mut Element,
    conflicts: &mut Vec<Conflict>,
) {
    let (ours_order, ours_map) = collect_slots(ours);
    let (theirs_order, theirs_map) = collect_slots(theirs);
    let ancestor_map = ancestor.map(|a| collect_slots(a).1);
    let ancestor_slot =
        |key: &SlotKey| ancestor_map.as_ref().and_then(|m| m.get(key)).copied();

    for (key, ours_child) in &ours_order {
        let child_path = format!("{path}/{}", key.display());
        match theirs_map.get(key).copied() {
            Some(theirs_child) => {
                let child = merge_elements(
                    entry_id,
                    &child_path,
                    ours_child,
                    theirs_child,
                    ancestor_slot(key),
                    conflicts,
                );
                merged.push_child(Node::Element(child));
            }
            None => match ancestor_slot(key) {
                // Ours added it.
                None => merged.push_child(Node::Element((*ours_child).clone())),
                // Theirs deleted it and ours left it alone: deletion wins.
                Some(ancestor_child) if ancestor_child == *ours_child => {}
                // Deleted vs edited: the edit wins, with a conflict.
                Some(ancestor_child) => {
                    conflicts.push(Conflict {
                        entry_id: entry_id.to_string(),
                        field: child_path,
                        ours: write_fragment(ours_child).ok(),
                        theirs: None,
                        ancestor: write_fragment(ancestor_child).ok(),
                        description: "deleted in theirs but edited in ours; kept ours".to_string(),
                    });
                    merged.push_child(Node::Element((*ours_child).clone()));
                }
            },
        }
    }

    for (key, theirs_child) in &theirs_order {
        if ours_map.contains_key(key) {
            continue;
        }
        let child_path = format!("{path}/{}", key.display());
        match ancestor_slot(key) {
            // Theirs added it; append after existing children.
            None => merged.push_child(Node::Element((*theirs_child).clone())),
            // Ours deleted it and theirs left it alone: deletion wins.
            Some(ancestor_child) if ancestor_child == *theirs_child => {}
            Some(ancestor_child) => {
                conflicts.push(Conflict {
                    entry_id: entry_id.to_string(),
                    field: child_path,
                    ours: None,
                    theirs: write_fragment(theirs_child).ok(),
                    ancestor: write_fragment(ancestor_child).ok(),
                    description: "deleted in ours but edited in theirs; kept theirs".to_string(),
                });
                merged.push_child(Node::Element((*theirs_child).clone()));
            }
        }
    }
}

/// Examples have no identity key, so they merge as a collection by
/// structural equality: an example survives if the other side still has it
/// or if it is new relative to the ancestor; an inherited example dropped by
/// one side while the other left it untouched is deleted.
///
/// Known limitation: independent edits by both sides to "the same" example
/// are indistinguishable from an add plus a delete, so both versions end up
/// side by side. No similarity heuristic is applied — a guess could silently
/// discard genuinely divergent content.
fn merge_examples(
    ours: &Element,
    theirs: &Element,
    ancestor: Option<&Element>,
    merged: &mut Element,
) {
    let ours_examples: Vec<&Element> = ours.children_named(names::EXAMPLE).collect();
    let theirs_examples: Vec<&Element> = theirs.children_named(names::EXAMPLE).collect();
    let ancestor_examples: Vec<&Element> = ancestor
        .map(|a| a.children_named(names::EXAMPLE).collect())
        .unwrap_or_default();

    for example in &ours_examples {
        let in_theirs = theirs_examples.iter().any(|t| *t == *example);
        let in_ancestor = ancestor_examples.iter().any(|a| *a == *example);
        if in_theirs || !in_ancestor {
            merged.push_child(Node::Element((*example).clone()));
        }
    }
    for example in &theirs_examples {
        let in_ours = ours_examples.iter().any(|o| *o == *example);
        let in_ancestor = ancestor_examples.iter().any(|a| *a == *example);
        if !in_ours && !in_ancestor {
            merged.push_child(Node::Element((*example).clone()));
        }
    }
}

// ---------------------------------------------------------------------------
// The scalar decision table
// ---------------------------------------------------------------------------

/// Resolve one single-valued slot given (ancestor, ours, theirs).
///
/// Returns the merged value (`None` = the slot is omitted), recording a
/// conflict where both sides disagree.
fn merge_scalar(
    entry_id: &str,
    field: &str,
    ancestor: Option<&str>,
    ours: Option<&str>,
    theirs: Option<&str>,
    conflicts: &mut Vec<Conflict>,
) -> Option<String> {
    let conflict = |description: &str| Conflict {
        entry_id: entry_id.to_string(),
        field: field.to_string(),
        ours: ours.map(str::to_string),
        theirs: theirs.map(str::to_string),
        ancestor: ancestor.map(str::to_string),
        description: description.to_string(),
    };

    match (ancestor, ours, theirs) {
        (_, Some(o), Some(t)) if o == t => Some(o.to_string()),
        (Some(a), Some(o), Some(t)) => {
            if o == a {
                Some(t.to_string())
            } else if t == a {
                Some(o.to_string())
            } else {
                conflicts.push(conflict("both sides changed; kept ours"));
                Some(o.to_string())
            }
        }
        (None, Some(o), Some(_)) => {
            conflicts.push(conflict("added differently on both sides; kept ours"));
            Some(o.to_string())
        }
        (None, Some(o), None) => Some(o.to_string()),
        (None, None, Some(t)) => Some(t.to_string()),
        (Some(a), Some(o), None) => {
            if o == a {
                None
            } else {
                conflicts.push(conflict("deleted in theirs but edited in ours; kept ours"));
                Some(o.to_string())
            }
        }
        (Some(a), None, Some(t)) => {
            if t == a {
                None
            } else {
                conflicts.push(conflict("deleted in ours but edited in theirs; kept theirs"));
                Some(t.to_string())
            }
        }
        (_, None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lxm_model::Document;

    fn entry_of(xml: &str) -> Element {
        Document::parse(xml)
            .unwrap()
            .entries()
            .next()
            .expect("document has an entry")
            .clone()
    }

    fn merge(
        ours: Option<&Element>,
        theirs: Option<&Element>,
        ancestor: Option<&Element>,
    ) -> (Option<Element>, Vec<Conflict>) {
        EntryMerger::new().merge_entry(ours, theirs, ancestor)
    }

    fn lexical_unit_text(entry: &Element, lang: &str) -> Option<String> {
        entry
            .first_child(names::LEXICAL_UNIT)?
            .children_named(names::FORM)
            .find(|f| f.attribute(names::ATTR_LANG) == Some(lang))?
            .first_child("text")
            .map(|t| t.text())
    }

    fn entry_with_form(text: &str) -> Element {
        entry_of(&format!(
            "<lift><entry id='test'><lexical-unit>\
             <form lang='one'><text>{text}</text></form>\
             </lexical-unit></entry></lift>"
        ))
    }

    #[test]
    fn identical_triple_merges_clean() {
        let entry = entry_with_form("original");
        let (merged, conflicts) = merge(Some(&entry), Some(&entry), Some(&entry));
        assert_eq!(merged.unwrap(), entry);
        assert!(conflicts.is_empty());
    }

    #[test]
    fn their_edit_to_lexical_unit_wins_silently() {
        let ancestor = entry_with_form("original");
        let ours = ancestor.clone();
        let theirs = entry_with_form("corrected");
        let (merged, conflicts) = merge(Some(&ours), Some(&theirs), Some(&ancestor));
        assert_eq!(
            lexical_unit_text(&merged.unwrap(), "one").as_deref(),
            Some("corrected")
        );
        assert!(conflicts.is_empty());
    }

    #[test]
    fn both_edit_lexical_unit_keeps_ours_and_records_conflict() {
        let ancestor = entry_with_form("original");
        let ours = entry_with_form("ours");
        let theirs = entry_with_form("theirs");
        let (merged, conflicts) = merge(Some(&ours), Some(&theirs), Some(&ancestor));
        assert_eq!(
            lexical_unit_text(&merged.unwrap(), "one").as_deref(),
            Some("ours")
        );
        assert_eq!(conflicts.len(), 1);
        let conflict = &conflicts[0];
        assert_eq!(conflict.entry_id, "test");
        assert_eq!(conflict.ours.as_deref(), Some("ours"));
        assert_eq!(conflict.theirs.as_deref(), Some("theirs"));
        assert_eq!(conflict.ancestor.as_deref(), Some("original"));
        assert!(conflict.field.contains("lexical-unit"));
    }

    #[test]
    fn both_edit_gloss_text_keeps_ours() {
        let make = |text: &str| {
            entry_of(&format!(
                "<lift><entry id='test'><sense id='123'>\
                 <gloss lang='a'><text>{text}</text></gloss>\
                 </sense></entry></lift>"
            ))
        };
        let (merged, conflicts) = merge(Some(&make("ours")), Some(&make("theirs")), Some(&make("original")));
        let merged = merged.unwrap();
        let gloss = merged
            .first_child(names::SENSE)
            .and_then(|s| s.first_child(names::GLOSS))
            .and_then(|g| g.first_child("text"))
            .unwrap();
        assert_eq!(gloss.text(), "ours");
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].field, "entry/sense[123]/gloss[a]/text#text");
    }

    #[test]
    fn both_edit_grammatical_info_value_keeps_ours() {
        let make = |value: &str| {
            entry_of(&format!(
                "<lift><entry id='test'><sense id='123'>\
                 <grammatical-info value='{value}'/></sense></entry></lift>"
            ))
        };
        let (merged, conflicts) = merge(Some(&make("noun")), Some(&make("verb")), Some(&make("adj")));
        let info = merged
            .unwrap()
            .first_child(names::SENSE)
            .and_then(|s| s.first_child(names::GRAMMATICAL_INFO).cloned())
            .unwrap();
        assert_eq!(info.attribute(names::ATTR_VALUE), Some("noun"));
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].field, "entry/sense[123]/grammatical-info@value");
    }

    #[test]
    fn each_side_adds_an_example_and_both_survive() {
        let make = |text: &str| {
            entry_of(&format!(
                "<lift><entry id='test'><sense id='123'>\
                 <grammatical-info value='noun'/>\
                 <example><form lang='x'><text>{text}</text></form></example>\
                 </sense></entry></lift>"
            ))
        };
        let ancestor = entry_of(
            "<lift><entry id='test'><sense id='123'>\
             <grammatical-info value='adj'/></sense></entry></lift>",
        );
        let (merged, _) = merge(Some(&make("one")), Some(&make("two")), Some(&ancestor));
        let merged = merged.unwrap();
        let sense = merged.first_child(names::SENSE).unwrap();
        let texts: Vec<String> = sense
            .children_named(names::EXAMPLE)
            .filter_map(|e| e.first_child(names::FORM))
            .filter_map(|f| f.first_child("text"))
            .map(|t| t.text())
            .collect();
        assert_eq!(texts, ["one", "two"]);
    }

    #[test]
    fn their_edit_to_example_replaces_it() {
        let make = |text: &str| {
            entry_of(&format!(
                "<lift><entry id='test'><sense id='123'>\
                 <example><form lang='x'><text>{text}</text></form></example>\
                 </sense></entry></lift>"
            ))
        };
        let ours = make("error");
        let ancestor = ours.clone();
        let theirs = make("correction");
        let (merged, conflicts) = merge(Some(&ours), Some(&theirs), Some(&ancestor));
        let merged = merged.unwrap();
        let sense = merged.first_child(names::SENSE).unwrap();
        let texts: Vec<String> = sense
            .children_named(names::EXAMPLE)
            .filter_map(|e| e.first_child(names::FORM))
            .filter_map(|f| f.first_child("text"))
            .map(|t| t.text())
            .collect();
        assert_eq!(texts, ["correction"]);
        assert!(conflicts.is_empty());
    }

    #[test]
    fn both_edit_same_example_yields_both_versions() {
        // Examples carry no identity, so divergent edits to the same example
        // are kept side by side rather than guessed at.
        let make = |text: &str| {
            entry_of(&format!(
                "<lift><entry id='test'><sense id='123'>\
                 <example><form lang='x'><text>{text}</text></form></example>\
                 </sense></entry></lift>"
            ))
        };
        let (merged, _) = merge(
            Some(&make("our fix")),
            Some(&make("their fix")),
            Some(&make("mistake")),
        );
        let merged = merged.unwrap();
        let count = merged
            .first_child(names::SENSE)
            .unwrap()
            .children_named(names::EXAMPLE)
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn sense_added_by_theirs_is_appended() {
        let base = entry_of("<lift><entry id='test'><sense id='a'/></entry></lift>");
        let theirs =
            entry_of("<lift><entry id='test'><sense id='a'/><sense id='b'/></entry></lift>");
        let (merged, conflicts) = merge(Some(&base), Some(&theirs), Some(&base));
        let ids: Vec<_> = merged
            .as_ref()
            .unwrap()
            .children_named(names::SENSE)
            .filter_map(|s| s.attribute(names::ATTR_ID).map(str::to_string))
            .collect();
        assert_eq!(ids, ["a", "b"]);
        assert!(conflicts.is_empty());
    }

    #[test]
    fn sense_deleted_by_ours_stays_deleted_when_theirs_unchanged() {
        let ancestor =
            entry_of("<lift><entry id='test'><sense id='a'/><sense id='b'/></entry></lift>");
        let ours = entry_of("<lift><entry id='test'><sense id='a'/></entry></lift>");
        let (merged, conflicts) = merge(Some(&ours), Some(&ancestor), Some(&ancestor));
        assert_eq!(
            merged.unwrap().children_named(names::SENSE).count(),
            1
        );
        assert!(conflicts.is_empty());
    }

    #[test]
    fn sense_deleted_by_ours_but_edited_by_theirs_is_restored() {
        let ancestor = entry_of(
            "<lift><entry id='test'><sense id='a'/>\
             <sense id='b'><grammatical-info value='adj'/></sense></entry></lift>",
        );
        let ours = entry_of("<lift><entry id='test'><sense id='a'/></entry></lift>");
        let theirs = entry_of(
            "<lift><entry id='test'><sense id='a'/>\
             <sense id='b'><grammatical-info value='noun'/></sense></entry></lift>",
        );
        let (merged, conflicts) = merge(Some(&ours), Some(&theirs), Some(&ancestor));
        let merged = merged.unwrap();
        assert_eq!(merged.children_named(names::SENSE).count(), 2);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].field, "entry/sense[b]");
        assert!(conflicts[0].ours.is_none());
    }

    #[test]
    fn entry_attribute_edit_merges_like_any_slot() {
        let make = |greeting: &str| {
            entry_of(&format!("<lift><entry id='test' greeting='{greeting}'/></lift>"))
        };
        let (merged, conflicts) = merge(Some(&make("hi")), Some(&make("hello")), Some(&make("hi")));
        assert_eq!(merged.unwrap().attribute("greeting"), Some("hello"));
        assert!(conflicts.is_empty());
    }

    #[test]
    fn entry_only_in_ours_with_no_ancestor_is_kept() {
        let ours = entry_of("<lift><entry id='new'/></lift>");
        let (merged, conflicts) = merge(Some(&ours), None, None);
        assert_eq!(merged.unwrap(), ours);
        assert!(conflicts.is_empty());
    }

    #[test]
    fn entry_deleted_by_theirs_and_unchanged_by_ours_is_dropped() {
        let entry = entry_of("<lift><entry id='gone'/></lift>");
        let (merged, conflicts) = merge(Some(&entry), None, Some(&entry));
        assert!(merged.is_none());
        assert!(conflicts.is_empty());
    }

    #[test]
    fn entry_deleted_by_ours_but_edited_by_theirs_survives_with_conflict() {
        let ancestor = entry_of("<lift><entry id='kept' greeting='hi'/></lift>");
        let theirs = entry_of("<lift><entry id='kept' greeting='hello'/></lift>");
        let (merged, conflicts) = merge(None, Some(&theirs), Some(&ancestor));
        assert_eq!(merged.unwrap().attribute("greeting"), Some("hello"));
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].entry_id, "kept");
        assert!(conflicts[0].ours.is_none());
    }
}
