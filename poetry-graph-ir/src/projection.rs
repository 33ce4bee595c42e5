//! Projection of a `Document` onto index-based node and edge lists
//!
//! The projection is the complete contract handed to consumers:
//!
//! - `nodes`: subject labels, index space `0..n`
//! - `edges`: directed `(from, to)` pairs in fold order, duplicates kept
//! - `labels`: predicate per `(from, to)`, last write wins

use std::collections::{BTreeMap, HashMap};

use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};

use crate::{Document, FocusRef};

/// A labeled edge, as serialized.
///
/// JSON object keys must be strings, so the label map is written out as a
/// list of these rather than as a map keyed by index pairs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeLabel {
    pub from: usize,
    pub to: usize,
    pub label: String,
}

/// Index-based graph derived from a `Document`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    /// Node labels in document key order
    pub nodes: Vec<String>,
    /// Directed edges, one per resolved triple
    pub edges: Vec<(usize, usize)>,
    /// Edge display labels
    #[serde(with = "labels_serde")]
    pub labels: BTreeMap<(usize, usize), String>,
}

/// Project a document onto node/edge/label collections.
///
/// Triples whose subject or object is not a key are skipped. A document
/// built by the extractor never contains any.
pub fn project(document: &Document) -> Projection {
    Projection::from_document(document)
}

impl Projection {
    /// Build the projection of `document`.
    pub fn from_document(document: &Document) -> Self {
        let nodes: Vec<String> = document.subjects().map(str::to_owned).collect();
        let index: HashMap<&str, usize> = nodes
            .iter()
            .enumerate()
            .map(|(i, label)| (label.as_str(), i))
            .collect();

        let resolved: Vec<((usize, usize), &str)> = document
            .triples()
            .filter_map(|t| match (index.get(t.s), index.get(t.o)) {
                (Some(&from), Some(&to)) => Some(((from, to), t.p)),
                _ => {
                    tracing::trace!(subject = t.s, object = t.o, "dropping unresolved triple");
                    None
                }
            })
            .collect();

        let edges = resolved.iter().map(|(pair, _)| *pair).collect();
        let labels = resolved
            .iter()
            .map(|(pair, predicate)| (*pair, (*predicate).to_owned()))
            .collect();

        let projection = Self {
            nodes,
            edges,
            labels,
        };
        tracing::debug!(
            nodes = projection.nodes.len(),
            edges = projection.edges.len(),
            labels = projection.labels.len(),
            "projected document"
        );
        projection
    }

    /// Index of the node labeled `label`.
    pub fn node_index(&self, label: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n == label)
    }

    /// Display label of the edge `from -> to`.
    pub fn label(&self, from: usize, to: usize) -> Option<&str> {
        self.labels.get(&(from, to)).map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check that a focus reference points at something in this graph.
    pub fn resolves(&self, focus: &FocusRef) -> bool {
        match *focus {
            FocusRef::Node { index } => index < self.nodes.len(),
            FocusRef::Edge { from, to } => self.edges.contains(&(from, to)),
        }
    }

    /// Build a `petgraph` graph for running graph algorithms.
    ///
    /// `NodeIndex::new(i)` corresponds to `nodes[i]`. Every entry of `edges`
    /// becomes one graph edge weighted with its display label.
    pub fn to_digraph(&self) -> DiGraph<&str, &str> {
        let mut graph = DiGraph::with_capacity(self.nodes.len(), self.edges.len());
        for label in &self.nodes {
            graph.add_node(label.as_str());
        }
        for &(from, to) in &self.edges {
            let weight = self.label(from, to).unwrap_or_default();
            graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), weight);
        }
        graph
    }
}

mod labels_serde {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::EdgeLabel;

    pub fn serialize<S: Serializer>(
        labels: &BTreeMap<(usize, usize), String>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let list: Vec<EdgeLabel> = labels
            .iter()
            .map(|(&(from, to), label)| EdgeLabel {
                from,
                to,
                label: label.clone(),
            })
            .collect();
        list.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<(usize, usize), String>, D::Error> {
        let list = Vec::<EdgeLabel>::deserialize(deserializer)?;
        Ok(list
            .into_iter()
            .map(|e| ((e.from, e.to), e.label))
            .collect())
    }
}
