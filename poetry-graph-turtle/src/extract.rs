//! Triple extractor.
//!
//! Turns poetry text into a `Document` in two passes over the lines:
//!
//! 1. Every subject line (non-blank, no leading whitespace) becomes a key.
//! 2. Lines are folded into the document in order. A subject line makes its
//!    text the current subject; an indented line adds one property to the
//!    current subject.
//!
//! Extraction is total. Lines that cannot contribute a triple are skipped.

use std::io::Read;

use poetry_graph_ir::Document;
use tracing::{debug, trace};

use crate::error::Result;
use crate::lex::{tokenize, Line, LineKind};
use crate::resolve::{resolve_object, ObjectSource};

/// Extract a document from poetry text.
pub fn extract(input: &str) -> Document {
    Extractor::new(input).extract()
}

/// Read UTF-8 text from `reader` and extract a document from it.
pub fn extract_reader<R: Read>(mut reader: R) -> Result<Document> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = String::from_utf8(bytes)?;
    Ok(extract(&text))
}

/// Extractor state: the classified lines of one input.
pub struct Extractor<'a> {
    lines: Vec<Line<'a>>,
}

impl<'a> Extractor<'a> {
    /// Create a new extractor.
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: tokenize(input),
        }
    }

    /// The classified lines.
    pub fn lines(&self) -> &[Line<'a>] {
        &self.lines
    }

    /// Run both passes.
    pub fn extract(self) -> Document {
        let declared = self.discover_subjects();
        let declared_count = declared.len();

        let document = self.lines.iter().fold(declared, attach);

        debug!(
            lines = self.lines.len(),
            declared = declared_count,
            subjects = document.len(),
            triples = document.triple_count(),
            "extracted document"
        );
        document
    }

    /// Pass 1: register every subject line as a key.
    fn discover_subjects(&self) -> Document {
        let mut document = Document::new();
        for line in self.lines.iter().filter(|l| l.is_subject()) {
            document.declare(line.content.trim_end());
        }
        document
    }
}

/// Pass 2 step: fold one line into the document.
fn attach(mut document: Document, line: &Line<'_>) -> Document {
    match line.kind {
        LineKind::Blank => {}
        LineKind::Subject => document.set_subject(line.content.trim_end()),
        LineKind::Property => attach_property(&mut document, line),
    }
    document
}

fn attach_property(document: &mut Document, line: &Line<'_>) {
    let content = line.content.trim_end();
    let Some(resolution) = resolve_object(document.subjects(), content) else {
        trace!(line = line.number, "no object on property line");
        return;
    };

    if resolution.source == ObjectSource::LastWord && document.declare(resolution.object) {
        trace!(
            line = line.number,
            object = resolution.object,
            "registered object as subject"
        );
    }

    match document.subject().map(str::to_owned) {
        Some(subject) => {
            trace!(
                line = line.number,
                subject = subject.as_str(),
                predicate = resolution.predicate,
                object = resolution.object,
                "attached property"
            );
            document.add_property(subject, resolution.predicate, resolution.object);
        }
        None => trace!(line = line.number, "property line before any subject"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poetry_graph_ir::Property;

    const KNOWLEDGE_GRAPH: &str = "\
this knowledge graph
  is a graph
a graph
  has nodes
  has edges
edges
  have labels
";

    fn props(doc: &Document, subject: &str) -> Vec<(String, String)> {
        doc.properties(subject)
            .unwrap_or_default()
            .iter()
            .map(|p| (p.predicate.clone(), p.object.clone()))
            .collect()
    }

    fn pair(p: &str, o: &str) -> (String, String) {
        (p.to_string(), o.to_string())
    }

    #[test]
    fn test_empty_input() {
        let doc = extract("");
        assert!(doc.is_empty());
        assert!(doc.context().is_empty());
        assert_eq!(doc.subject(), None);
    }

    #[test]
    fn test_knowledge_graph() {
        let doc = extract(KNOWLEDGE_GRAPH);

        let subjects: Vec<_> = doc.subjects().collect();
        assert_eq!(
            subjects,
            vec!["this knowledge graph", "a graph", "edges", "nodes", "labels"]
        );

        assert_eq!(props(&doc, "this knowledge graph"), vec![pair("is", "a graph")]);
        assert_eq!(
            props(&doc, "a graph"),
            vec![pair("has", "nodes"), pair("has", "edges")]
        );
        assert_eq!(props(&doc, "edges"), vec![pair("have", "labels")]);
        assert!(props(&doc, "nodes").is_empty());
        assert_eq!(doc.subject(), Some("edges"));
    }

    #[test]
    fn test_whitespace_only_lines_contribute_nothing() {
        let doc = extract("   \n\t\n  \t  \n");
        assert!(doc.is_empty());
        assert_eq!(doc.subject(), None);
    }

    #[test]
    fn test_property_before_subject_registers_object_only() {
        let doc = extract("  knows bob\nalice\n  knows carol");

        let subjects: Vec<_> = doc.subjects().collect();
        assert_eq!(subjects, vec!["alice", "bob", "carol"]);
        assert!(props(&doc, "bob").is_empty());
        assert_eq!(props(&doc, "alice"), vec![pair("knows", "carol")]);
    }

    #[test]
    fn test_declared_later_subject_is_matched() {
        // pass 1 sees "that graph" before pass 2 attaches properties
        let doc = extract("mine\n  has a connection to that graph\nthat graph\n");
        assert_eq!(
            props(&doc, "mine"),
            vec![pair("has a connection to", "that graph")]
        );
        assert!(!doc.contains("graph"));
    }

    #[test]
    fn test_object_registered_in_pass_two_is_matched() {
        let doc = extract("a\n  likes hot dogs\nb\n  also likes dogs\n  loves hot dogs");
        assert_eq!(props(&doc, "b"), vec![pair("also likes", "dogs"), pair("loves hot", "dogs")]);
    }

    #[test]
    fn test_redeclared_subject_appends() {
        let doc = extract("alice\n  knows bob\nalice\n  likes carol\n");

        assert_eq!(doc.len(), 3);
        assert_eq!(
            props(&doc, "alice"),
            vec![pair("knows", "bob"), pair("likes", "carol")]
        );
    }

    #[test]
    fn test_trailing_whitespace_is_insignificant() {
        let doc = extract("alice   \n  knows bob  \n");
        assert_eq!(doc.subjects().collect::<Vec<_>>(), vec!["alice", "bob"]);
        assert_eq!(props(&doc, "alice"), vec![pair("knows", "bob")]);
    }

    #[test]
    fn test_self_reference() {
        let doc = extract("ouroboros\n  eats ouroboros\n");
        assert_eq!(doc.len(), 1);
        assert_eq!(
            doc.properties("ouroboros").unwrap(),
            &[Property::new("eats", "ouroboros")]
        );
    }

    #[test]
    fn test_deeper_indent_attaches_to_same_subject() {
        let doc = extract("root\n  has branch\n      has leaf\n");
        assert_eq!(
            props(&doc, "root"),
            vec![pair("has", "branch"), pair("has", "leaf")]
        );
    }

    #[test]
    fn test_extract_reader() {
        let doc = extract_reader(KNOWLEDGE_GRAPH.as_bytes()).unwrap();
        assert_eq!(doc.len(), 5);
    }

    #[test]
    fn test_extract_reader_rejects_invalid_utf8() {
        let err = extract_reader(&[0x61, 0xff, 0x0a][..]).unwrap_err();
        assert!(matches!(err, crate::PoetryError::Encoding(_)));
    }
}
