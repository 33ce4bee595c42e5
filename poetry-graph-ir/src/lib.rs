//! Graph intermediate representation for poetry-style notation
//!
//! This crate holds the types shared by the text extractor and any consumer
//! of the resulting graph (renderers, graph algorithms, test harnesses).
//!
//! # Key Design Principles
//!
//! 1. **Insertion order is meaning** - `Document` keys and their properties
//!    iterate in the order they were introduced. Node indices and edge order
//!    in a `Projection` follow directly from it.
//!
//! 2. **No dangling objects** - Every object of a property is also a key of
//!    the document, so projection never needs to invent nodes.
//!
//! 3. **Bag semantics for edges** - `Projection::edges` keeps duplicate
//!    `(from, to)` pairs. Only the label map collapses them, last write wins.
//!
//! 4. **Total** - Projection cannot fail on any `Document`.
//!
//! # Example
//!
//! ```
//! use poetry_graph_ir::{project, Document};
//!
//! let mut doc = Document::new();
//! doc.declare("a graph");
//! doc.declare("nodes");
//! doc.add_property("a graph", "has", "nodes");
//!
//! let graph = project(&doc);
//! assert_eq!(graph.nodes, vec!["a graph", "nodes"]);
//! assert_eq!(graph.edges, vec![(0, 1)]);
//! assert_eq!(graph.label(0, 1), Some("has"));
//! ```

mod document;
mod focus;
mod projection;

pub use document::{Document, Property, Triple};
pub use focus::{Focus, FocusRef};
pub use projection::{project, EdgeLabel, Projection};
