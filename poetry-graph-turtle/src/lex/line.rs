//! Line types.
//!
//! Lines are the output of lexical analysis, ready for extraction.

/// One input line with its indentation resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line<'a> {
    /// The line kind
    pub kind: LineKind,
    /// 1-based line number
    pub number: usize,
    /// 1-based column of the first non-whitespace character
    ///
    /// `0` for blank lines, which have no such character.
    pub column: usize,
    /// Text with leading whitespace removed
    pub content: &'a str,
}

impl<'a> Line<'a> {
    /// Create a new line.
    pub fn new(kind: LineKind, number: usize, column: usize, content: &'a str) -> Self {
        Self {
            kind,
            number,
            column,
            content,
        }
    }

    /// Check if this is a blank line.
    pub fn is_blank(&self) -> bool {
        matches!(self.kind, LineKind::Blank)
    }

    /// Check if this line declares a subject.
    pub fn is_subject(&self) -> bool {
        matches!(self.kind, LineKind::Subject)
    }
}

/// Line kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Empty or whitespace-only
    Blank,
    /// Non-empty with no leading whitespace
    Subject,
    /// Indented, non-blank
    Property,
}
