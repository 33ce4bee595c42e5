use crate::error::CliResult;
use comfy_table::{ContentArrangement, Table};
use petgraph::dot::Dot;
use poetry_graph_ir::{Document, Projection};
use poetry_graph_turtle::document_to_json;
use serde::{Deserialize, Serialize};

/// Output format for `poetry graph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphFormat {
    /// `{nodes, edges, labels}` as JSON
    #[default]
    Json,
    /// Graphviz DOT
    Dot,
    /// One row per edge
    Table,
}

/// Resolved output settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSettings {
    pub format: GraphFormat,
    pub pretty: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: GraphFormat::Json,
            pretty: true,
        }
    }
}

/// Render a projection for display.
pub fn format_projection(graph: &Projection, settings: OutputSettings) -> CliResult<String> {
    match settings.format {
        GraphFormat::Json => to_json(graph, settings.pretty),
        GraphFormat::Dot => Ok(format!("{}", Dot::new(&graph.to_digraph()))),
        GraphFormat::Table => Ok(format_edge_table(graph)),
    }
}

/// Render a document as JSON.
pub fn format_document(document: &Document, pretty: bool) -> CliResult<String> {
    to_json(&document_to_json(document), pretty)
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> CliResult<String> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(out)
}

fn format_edge_table(graph: &Projection) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["from", "predicate", "to"]);

    for &(from, to) in &graph.edges {
        table.add_row(vec![
            graph.nodes[from].as_str(),
            graph.label(from, to).unwrap_or_default(),
            graph.nodes[to].as_str(),
        ]);
    }

    table.to_string()
}
