//! Selection references into a projected graph.
//!
//! These are plain values handed to whatever layer highlights nodes and
//! edges. Nothing here decides what is selected.

use serde::{Deserialize, Serialize};

/// A reference to one node or one edge by projection index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FocusRef {
    /// Node at `nodes[index]`
    Node { index: usize },
    /// Directed edge `from -> to`
    Edge { from: usize, to: usize },
}

/// The current selection.
///
/// Holds zero or one reference today; the sequence leaves room for
/// multi-select.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Focus(pub Vec<FocusRef>);

impl Focus {
    /// Nothing selected.
    pub fn none() -> Self {
        Self::default()
    }

    /// Select a single node.
    pub fn node(index: usize) -> Self {
        Self(vec![FocusRef::Node { index }])
    }

    /// Select a single edge.
    pub fn edge(from: usize, to: usize) -> Self {
        Self(vec![FocusRef::Edge { from, to }])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FocusRef> {
        self.0.iter()
    }
}

impl From<FocusRef> for Focus {
    fn from(focus: FocusRef) -> Self {
        Self(vec![focus])
    }
}
