//! Parsed document - subjects and their ordered properties
//!
//! A `Document` is the intermediate state between raw text and a projected
//! graph. Keys of the triple map are graph nodes; each property attached to
//! a key is one outgoing edge.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One `(predicate, object)` pair attached to a subject.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Property {
    /// Edge label text (may be empty)
    pub predicate: String,
    /// Target subject key
    pub object: String,
}

impl Property {
    /// Create a new property.
    pub fn new(predicate: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

/// A borrowed `(subject, predicate, object)` view over a `Document`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Triple<'a> {
    /// Subject
    pub s: &'a str,
    /// Predicate
    pub p: &'a str,
    /// Object
    pub o: &'a str,
}

/// Intermediate parse state
///
/// # Design Decisions
///
/// - **IndexMap storage**: keys iterate in first-insertion order, so node
///   indices are reproducible from the input text alone.
/// - **Idempotent declaration**: `declare()` never resets an existing
///   subject. Re-declaring a subject keeps appending to the same entry.
/// - **Reserved context**: `context` is carried for vocabulary/prefix
///   resolution but nothing populates it yet.
///
/// # Example
///
/// ```
/// use poetry_graph_ir::Document;
///
/// let mut doc = Document::new();
/// doc.declare("edges");
/// doc.declare("labels");
/// doc.add_property("edges", "have", "labels");
///
/// assert_eq!(doc.len(), 2);
/// assert_eq!(doc.triple_count(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Prefix/vocabulary mappings (always empty for now)
    #[serde(default)]
    context: IndexMap<String, String>,
    /// Subject -> ordered properties
    #[serde(default)]
    triples: IndexMap<String, Vec<Property>>,
    /// Subject that subsequent indented lines attach to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subject: Option<String>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// The reserved context mapping.
    pub fn context(&self) -> &IndexMap<String, String> {
        &self.context
    }

    /// The current subject, if any subject line has been seen.
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Set the current subject.
    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.subject = Some(subject.into());
    }

    /// Register `subject` as a key with no properties.
    ///
    /// Returns `true` if the key was new. Existing properties are kept.
    pub fn declare(&mut self, subject: impl Into<String>) -> bool {
        match self.triples.entry(subject.into()) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(entry) => {
                entry.insert(Vec::new());
                true
            }
        }
    }

    /// Check whether `subject` is a key.
    pub fn contains(&self, subject: &str) -> bool {
        self.triples.contains_key(subject)
    }

    /// Append a property to `subject`, declaring the subject if needed.
    ///
    /// The object is not declared here; callers that want it to become a
    /// node must `declare()` it as well.
    pub fn add_property(
        &mut self,
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) {
        self.triples
            .entry(subject.into())
            .or_default()
            .push(Property::new(predicate, object));
    }

    /// Properties of `subject`, in insertion order.
    pub fn properties(&self, subject: &str) -> Option<&[Property]> {
        self.triples.get(subject).map(Vec::as_slice)
    }

    /// Iterate over subject keys in insertion order.
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.triples.keys().map(String::as_str)
    }

    /// Iterate over `(subject, properties)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Property])> {
        self.triples
            .iter()
            .map(|(subject, props)| (subject.as_str(), props.as_slice()))
    }

    /// Iterate over every triple, subject by subject, property by property.
    pub fn triples(&self) -> impl Iterator<Item = Triple<'_>> {
        self.iter().flat_map(|(s, props)| {
            props.iter().map(move |prop| Triple {
                s,
                p: &prop.predicate,
                o: &prop.object,
            })
        })
    }

    /// Number of subject keys
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if the document has no subjects
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Total number of properties across all subjects
    pub fn triple_count(&self) -> usize {
        self.triples.values().map(Vec::len).sum()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Vec<Property>);
    type IntoIter = indexmap::map::Iter<'a, String, Vec<Property>>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}
