//! Indentation-based pseudo-Turtle parser.
//!
//! This crate extracts triples from "poetry" notation into a
//! `poetry_graph_ir::Document`, plus an adapter to JSON and a formatter back
//! to poetry text.
//!
//! Subjects are written flush left. Each indented line below a subject is
//! one property: a free-text predicate followed by an object. The object is
//! the longest known subject the line ends with, or else its last word.
//!
//! # Example
//!
//! ```
//! use poetry_graph_turtle::{extract, parse_to_projection};
//!
//! let poem = "\
//! this knowledge graph
//!   is a graph
//! a graph
//!   has nodes
//!   has edges
//! edges
//!   have labels
//! ";
//!
//! // Option 1: Extract the intermediate document
//! let doc = extract(poem);
//! assert_eq!(doc.triple_count(), 4);
//!
//! // Option 2: Go straight to the index-based graph
//! let graph = parse_to_projection(poem);
//! let a_graph = graph.node_index("a graph").unwrap();
//! let edges = graph.node_index("edges").unwrap();
//! assert_eq!(graph.label(a_graph, edges), Some("has"));
//! ```

pub mod adapter;
pub mod error;
pub mod extract;
pub mod format;
pub mod lex;
pub mod resolve;

pub use adapter::document_to_json;
pub use error::{PoetryError, Result};
pub use extract::{extract, extract_reader, Extractor};
pub use format::to_poetry_string;
pub use lex::{tokenize, Lexer, Line, LineKind};
pub use resolve::{resolve_object, ObjectSource, Resolution};

use poetry_graph_ir::{project, Projection};
use serde_json::Value as JsonValue;

/// Extract and project in one step.
pub fn parse_to_projection(input: &str) -> Projection {
    project(&extract(input))
}

/// Extract a document and convert it to JSON.
pub fn parse_to_json(input: &str) -> JsonValue {
    document_to_json(&extract(input))
}
