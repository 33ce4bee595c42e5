//! Line lexer implementation using winnow.
//!
//! Classifies each input line by its leading whitespace. Lexing is total:
//! every line, however odd, becomes a `Line`.

use winnow::token::{rest, take_while};
use winnow::{ModalResult, Parser};

use super::line::{Line, LineKind};

/// Lexer for poetry documents.
pub struct Lexer<'a> {
    input: &'a str,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Classify every line of the input.
    ///
    /// Lines are split on `\n`, with a trailing `\r` dropped.
    pub fn tokenize(self) -> Vec<Line<'a>> {
        self.input
            .lines()
            .enumerate()
            .map(|(i, raw)| lex_line(i + 1, raw))
            .collect()
    }
}

/// Tokenize a whole document into lines.
pub fn tokenize(input: &str) -> Vec<Line<'_>> {
    Lexer::new(input).tokenize()
}

fn lex_line(number: usize, raw: &str) -> Line<'_> {
    let mut input = raw;
    let (indent, content) = match indentation(&mut input) {
        Ok(parts) => parts,
        Err(_) => ("", raw),
    };

    if content.is_empty() {
        return Line::new(LineKind::Blank, number, 0, content);
    }

    let column = indent.chars().count() + 1;
    let kind = if column == 1 {
        LineKind::Subject
    } else {
        LineKind::Property
    };
    Line::new(kind, number, column, content)
}

/// Split a line into its leading whitespace and the remainder.
fn indentation<'a>(input: &mut &'a str) -> ModalResult<(&'a str, &'a str)> {
    (take_while(0.., char::is_whitespace), rest).parse_next(input)
}
