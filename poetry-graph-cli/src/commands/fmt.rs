use crate::error::CliResult;
use crate::input::{read_document, InputSource};
use poetry_graph_turtle::to_poetry_string;

pub fn run(source: &InputSource) -> CliResult<()> {
    let document = read_document(source)?;
    print!("{}", to_poetry_string(&document));
    Ok(())
}
