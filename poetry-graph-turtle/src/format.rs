//! Poetry text formatter.
//!
//! Writes a `Document` back out as poetry notation: each key on its own
//! subject line, its properties indented beneath it.

use std::fmt::Write;

use poetry_graph_ir::Document;

const INDENT: &str = "  ";

/// Format a document as poetry text.
///
/// Every key is written, including objects that were only ever mentioned
/// as targets, so re-extracting the output yields the same set of subjects.
pub fn to_poetry_string(document: &Document) -> String {
    let mut out = String::new();
    for (subject, props) in document.iter() {
        // String as fmt::Write never fails
        let _ = writeln!(out, "{subject}");
        for prop in props {
            if prop.predicate.is_empty() {
                let _ = writeln!(out, "{INDENT}{}", prop.object);
            } else {
                let _ = writeln!(out, "{INDENT}{} {}", prop.predicate, prop.object);
            }
        }
    }
    out
}
