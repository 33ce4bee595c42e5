use crate::error::CliResult;
use crate::input::{read_document, InputSource};
use crate::output::{format_projection, OutputSettings};
use poetry_graph_ir::project;

pub fn run(source: &InputSource, settings: OutputSettings) -> CliResult<()> {
    let document = read_document(source)?;
    let graph = project(&document);
    println!("{}", format_projection(&graph, settings)?);
    Ok(())
}
