//! Document to JSON-LD style adapter.
//!
//! Converts a `poetry_graph_ir::Document` to a JSON document shaped like
//! expanded JSON-LD, so it can be handed to JSON-LD tooling or inspected.

use poetry_graph_ir::{Document, Property};
use serde_json::{json, Map, Value as JsonValue};

/// Convert a Document to JSON.
///
/// The output format is:
/// ```json
/// {
///   "@context": {},
///   "@graph": [
///     { "@id": "a graph", "has": [{"@id": "nodes"}, {"@id": "edges"}] },
///     { "@id": "nodes" }
///   ]
/// }
/// ```
///
/// Subjects appear in document order, including those with no properties.
/// Properties sharing a predicate are grouped in the order they were added.
pub fn document_to_json(document: &Document) -> JsonValue {
    let context: Map<String, JsonValue> = document
        .context()
        .iter()
        .map(|(k, v)| (k.clone(), JsonValue::String(v.clone())))
        .collect();

    let graph: Vec<JsonValue> = document
        .iter()
        .map(|(subject, props)| subject_to_node(subject, props))
        .collect();

    json!({
        "@context": context,
        "@graph": graph,
    })
}

fn subject_to_node(subject: &str, props: &[Property]) -> JsonValue {
    let mut node = Map::new();
    node.insert("@id".to_string(), JsonValue::String(subject.to_string()));

    for prop in props {
        let values = node
            .entry(prop.predicate.clone())
            .or_insert_with(|| JsonValue::Array(Vec::new()));
        if let JsonValue::Array(values) = values {
            values.push(json!({ "@id": prop.object }));
        }
    }

    JsonValue::Object(node)
}
