use crate::error::{CliError, CliResult};
use poetry_graph_ir::Document;
use poetry_graph_turtle::{extract, extract_reader};
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

/// Where the input text comes from.
#[derive(Debug)]
pub enum InputSource {
    /// From a file on disk.
    File(PathBuf),
    /// From the `-e` inline expression.
    Inline(String),
    /// From stdin (piped).
    Stdin,
}

/// Resolve the input source with priority: `-e` > file > stdin.
pub fn resolve_input(expr: Option<&str>, file: Option<&Path>) -> CliResult<InputSource> {
    if let Some(e) = expr {
        return Ok(InputSource::Inline(e.to_string()));
    }
    if let Some(f) = file {
        return Ok(InputSource::File(f.to_path_buf()));
    }
    if !io::stdin().is_terminal() {
        return Ok(InputSource::Stdin);
    }
    Err(CliError::Usage(
        "no input provided; pass a file, use -e for inline text, or pipe via stdin".to_string(),
    ))
}

/// Read and extract a document from the resolved input source.
pub fn read_document(source: &InputSource) -> CliResult<Document> {
    let document = match source {
        InputSource::File(path) => {
            let file = File::open(path).map_err(|e| {
                CliError::Input(format!("failed to read {}: {e}", path.display()))
            })?;
            extract_reader(file).map_err(|e| {
                CliError::Input(format!("failed to read {}: {e}", path.display()))
            })?
        }
        InputSource::Inline(text) => extract(text),
        InputSource::Stdin => extract_reader(io::stdin().lock())?,
    };
    tracing::debug!(
        source = ?source,
        subjects = document.len(),
        triples = document.triple_count(),
        "read document"
    );
    Ok(document)
}
