//! Error types for the front end.
//!
//! This module defines all error types used throughout the crate,
//! organized by the phase that produces them. Syntax *rejection* is not an
//! error: the parser reports it as a [`Verdict`](crate::parser::Verdict)
//! value so callers can present a diagnostic.

use crate::lexer::token::TokenCategory;
use std::fmt;
use thiserror::Error;

/// Top-level error type for the front end.
#[derive(Error, Debug)]
pub enum MiniCError {
    /// Error during lexing/tokenization
    #[error("Lexical error: {0}")]
    Lexical(#[from] LexError),

    /// Error translating a token into a parser terminal
    #[error("Translation error: {0}")]
    Translate(#[from] MapError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error during lexical analysis.
#[derive(Error, Debug, Clone)]
pub struct LexError {
    /// The error message
    pub message: String,
    /// Source line (1-indexed)
    pub line: usize,
    /// The kind of lexical error
    pub kind: LexErrorKind,
}

impl LexError {
    /// Create a new lexical error.
    pub fn new(message: impl Into<String>, line: usize, kind: LexErrorKind) -> Self {
        Self {
            message: message.into(),
            line,
            kind,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at line {}", self.message, self.line)
    }
}

/// The kind of lexical error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Character sequence drove the automaton into the reject sink
    RejectedInput,
    /// String literal still open at end of line
    UnterminatedString,
    /// Input still pending (not yet a token) when the line ended
    IncompleteToken,
    /// A control-sentinel token was handed to the token stream
    InvalidAppend,
}

/// Error translating a lexer token into a parser terminal.
///
/// The grammar has no terminal for bitwise operators or boolean literals
/// even though the lexer recognizes both; mapping such a token surfaces
/// here instead of being silently special-cased.
#[derive(Error, Debug, Clone)]
pub struct MapError {
    /// Category of the offending token
    pub category: TokenCategory,
    /// Lexeme of the offending token
    pub lexeme: String,
    /// Source line (1-indexed)
    pub line: usize,
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no parser terminal for token {{{} : {}}} at line {}",
            self.category, self.lexeme, self.line
        )
    }
}

/// Result type using MiniCError.
pub type MiniCResult<T> = Result<T, MiniCError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_error_display() {
        let err = LexError::new("input \"@\" not accepted", 3, LexErrorKind::RejectedInput);
        assert_eq!(format!("{}", err), "input \"@\" not accepted at line 3");
    }

    #[test]
    fn test_map_error_display() {
        let err = MapError {
            category: TokenCategory::BitwiseOp,
            lexeme: "<<".to_string(),
            line: 7,
        };
        let s = format!("{}", err);
        assert!(s.contains("BITWISE_OP"));
        assert!(s.contains("<<"));
        assert!(s.contains("line 7"));
    }

    #[test]
    fn test_top_level_conversion() {
        let lex = LexError::new(
            "unterminated string literal",
            1,
            LexErrorKind::UnterminatedString,
        );
        let top: MiniCError = lex.into();
        assert!(format!("{}", top).starts_with("Lexical error:"));
    }
}
