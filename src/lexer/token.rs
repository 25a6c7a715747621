//! Token types produced by the lexer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a token.
///
/// A closed set: every final state of the lexer's automaton carries exactly
/// one of these, and the two control sentinels ([`Pending`] and
/// [`Rejected`]) tag the non-final and sink states. The sentinels never
/// appear in a committed token stream.
///
/// [`Pending`]: TokenCategory::Pending
/// [`Rejected`]: TokenCategory::Rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenCategory {
    // Delimiters
    /// ` ` | `\t` | `\n`
    Whitespace,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `;`
    Semi,

    // Constants and literals
    /// ex) `30`, `-5`
    SignedIconst,
    /// ex) `3.0`
    Fconst,
    /// ex) `"hello"` (quotes included)
    LiteralString,

    // Operators
    /// `+` | `-` | `*` | `/`
    ArithmeticOp,
    /// `<<` | `>>` | `&` | `|`
    BitwiseOp,
    /// `<` | `>` | `==` | `!=` | `<=` | `>=`
    CompOp,
    /// `=`
    AssignOp,

    // Keywords-as-categories
    /// `int` | `char` | `bool` | `float`
    VariableType,
    /// `if` | `else` | `while` | `for` | `return`
    Statement,
    /// `true` | `false`
    BooleanString,
    /// ex) `hello`
    Identifier,

    /// Not yet a complete token (non-final automaton state)
    Pending,
    /// Not accepted by the automaton (reject sink)
    Rejected,
}

impl TokenCategory {
    /// Whether this category may appear in a committed token stream.
    pub fn is_committable(&self) -> bool {
        !matches!(
            self,
            TokenCategory::Whitespace | TokenCategory::Pending | TokenCategory::Rejected
        )
    }

    /// Whether this category is a numeric literal.
    pub fn is_number(&self) -> bool {
        matches!(self, TokenCategory::SignedIconst | TokenCategory::Fconst)
    }

    /// Whether this category is considered a delimiter.
    pub fn is_delimiter(&self) -> bool {
        matches!(
            self,
            TokenCategory::Whitespace
                | TokenCategory::LParen
                | TokenCategory::RParen
                | TokenCategory::LBrace
                | TokenCategory::RBrace
                | TokenCategory::Comma
                | TokenCategory::Semi
        )
    }

    /// Get the display name for this category.
    pub fn name(&self) -> &'static str {
        use TokenCategory::*;
        match self {
            Whitespace => "WHITESPACE",
            LParen => "LPAREN",
            RParen => "RPAREN",
            LBrace => "LBRACE",
            RBrace => "RBRACE",
            Comma => "COMMA",
            Semi => "SEMI",
            SignedIconst => "SIGNED_ICONST",
            Fconst => "FCONST",
            LiteralString => "LITERAL_STRING",
            ArithmeticOp => "ARITHMETIC_OP",
            BitwiseOp => "BITWISE_OP",
            CompOp => "COMP_OP",
            AssignOp => "ASSIGN_OP",
            VariableType => "VARIABLE_TYPE",
            Statement => "STATEMENT",
            BooleanString => "BOOLEAN_STRING",
            Identifier => "ID",
            Pending => "NOT_YET_A_TOKEN",
            Rejected => "NOT_ACCEPTED",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single token: category, raw lexeme, and source line.
///
/// Immutable once committed to a [`TokenStream`](crate::lexer::TokenStream);
/// the one permitted correction (the negative-literal split) happens at
/// append time, before the record is considered committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The category of the token
    pub category: TokenCategory,
    /// The lexeme (raw text)
    pub lexeme: String,
    /// Source line (1-indexed)
    pub line: usize,
}

impl Token {
    /// Create a new token.
    pub fn new(category: TokenCategory, lexeme: impl Into<String>, line: usize) -> Self {
        Self {
            category,
            lexeme: lexeme.into(),
            line,
        }
    }

    /// Whether this token is a numeric literal.
    pub fn is_number(&self) -> bool {
        self.category.is_number()
    }

    /// Whether this token is a numeric literal with a leading `-`.
    pub fn is_negative_number(&self) -> bool {
        self.is_number() && self.lexeme.starts_with('-')
    }

    /// Whether this token is a number or an identifier.
    ///
    /// The negative-literal correction uses this: a `-` right after a
    /// number or identifier is binary subtraction, not a sign.
    pub fn is_number_or_identifier(&self) -> bool {
        self.is_number() || self.category == TokenCategory::Identifier
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} : {}}}", self.category, self.lexeme)
    }
}
