//! Line lexer module.
//!
//! Splits input into classified lines using winnow.

pub mod lexer;
pub mod line;

pub use lexer::{tokenize, Lexer};
pub use line::{Line, LineKind};
