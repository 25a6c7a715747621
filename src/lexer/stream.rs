//! The committed token stream handed from the lexer to the parser.

use crate::lexer::token::{Token, TokenCategory};
use crate::utils::errors::{LexError, LexErrorKind};
use serde::{Deserialize, Serialize};

/// Append-only ordered sequence of committed tokens.
///
/// Invariants: never contains a whitespace-categorized entry, and line
/// numbers are monotonically non-decreasing. Both are enforced by
/// [`append`](TokenStream::append), the only way in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Create an empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a stream from tokens committed earlier (e.g. a deserialized
    /// handoff file), re-running the append contract on each.
    pub fn from_tokens(tokens: Vec<Token>) -> Result<Self, LexError> {
        let mut stream = Self::new();
        for token in tokens {
            stream.append(token)?;
        }
        Ok(stream)
    }

    /// Append one token under the stream's contract.
    ///
    /// Whitespace is discarded silently. The control sentinels are refused
    /// with a lexical error naming the category and lexeme. Everything
    /// else goes through the negative-literal correction and is committed.
    ///
    /// The correction uses one token of lookbehind: `-` is lexed as a plain
    /// operator character and the automaton munches `-5` into one literal,
    /// so a literal with a leading `-` whose predecessor on the same line
    /// is a number or identifier must actually be binary subtraction. In
    /// that case the `-` is split back out as a standalone arithmetic
    /// operator followed by the unsigned literal.
    pub fn append(&mut self, token: Token) -> Result<(), LexError> {
        match token.category {
            TokenCategory::Whitespace => Ok(()),
            TokenCategory::Pending | TokenCategory::Rejected => Err(LexError::new(
                format!("{} is not accepted", token),
                token.line,
                LexErrorKind::InvalidAppend,
            )),
            _ => {
                if token.is_negative_number() {
                    if let Some(prev) = self.tokens.last() {
                        if prev.line == token.line && prev.is_number_or_identifier() {
                            log::debug!("splitting {} into '-' and unsigned literal", token);
                            self.tokens
                                .push(Token::new(TokenCategory::ArithmeticOp, "-", token.line));
                            self.tokens.push(Token::new(
                                token.category,
                                &token.lexeme[1..],
                                token.line,
                            ));
                            return Ok(());
                        }
                    }
                }
                self.tokens.push(token);
                Ok(())
            }
        }
    }

    /// Number of committed tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the stream is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Indexed lookup.
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// The most recently committed token.
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    /// Ordered iteration over the committed tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// All committed tokens as a slice.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
