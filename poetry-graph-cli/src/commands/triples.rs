use crate::error::CliResult;
use crate::input::{read_document, InputSource};
use crate::output::format_document;

pub fn run(source: &InputSource, pretty: bool) -> CliResult<()> {
    let document = read_document(source)?;
    println!("{}", format_document(&document, pretty)?);
    Ok(())
}
