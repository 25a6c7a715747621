//! Translation from lexer tokens to parser terminals.
//!
//! A pure function of `(category, lexeme)`. Most categories map
//! one-to-one; the arithmetic and statement categories split by lexeme
//! because the grammar distinguishes `+`/`-` from `*`/`/` and each
//! statement keyword from the others.

use crate::lexer::{Token, TokenCategory, TokenStream};
use crate::parser::symbol::Symbol;
use crate::utils::errors::MapError;

/// Map one token to its parser terminal.
///
/// Bitwise operators and boolean literals are recognized by the lexer but
/// have no terminal in the grammar; mapping one is a translation error for
/// the caller to surface, not something to guess around.
pub fn map_token(token: &Token) -> Result<Symbol, MapError> {
    let symbol = match token.category {
        TokenCategory::LParen => Symbol::LParen,
        TokenCategory::RParen => Symbol::RParen,
        TokenCategory::LBrace => Symbol::LBrace,
        TokenCategory::RBrace => Symbol::RBrace,
        TokenCategory::Comma => Symbol::Comma,
        TokenCategory::Semi => Symbol::Semi,
        TokenCategory::SignedIconst => Symbol::Num,
        TokenCategory::Fconst => Symbol::Float,
        TokenCategory::LiteralString => Symbol::Literal,
        TokenCategory::ArithmeticOp => match token.lexeme.as_str() {
            "+" | "-" => Symbol::AddSub,
            _ => Symbol::MultDiv,
        },
        TokenCategory::CompOp => Symbol::Comp,
        TokenCategory::AssignOp => Symbol::Assign,
        TokenCategory::VariableType => Symbol::Vtype,
        TokenCategory::Statement => match token.lexeme.as_str() {
            "if" => Symbol::If,
            "else" => Symbol::Else,
            "while" => Symbol::While,
            "for" => Symbol::For,
            _ => Symbol::Return,
        },
        TokenCategory::Identifier => Symbol::Id,
        TokenCategory::BitwiseOp
        | TokenCategory::BooleanString
        | TokenCategory::Whitespace
        | TokenCategory::Pending
        | TokenCategory::Rejected => {
            return Err(MapError {
                category: token.category,
                lexeme: token.lexeme.clone(),
                line: token.line,
            })
        }
    };
    Ok(symbol)
}

/// Map a whole committed stream to a terminal sequence, appending the
/// end-of-input marker.
pub fn map_stream(stream: &TokenStream) -> Result<Vec<Symbol>, MapError> {
    let mut terminals = Vec::with_capacity(stream.len() + 1);
    for token in stream {
        terminals.push(map_token(token)?);
    }
    terminals.push(Symbol::Eof);
    Ok(terminals)
}
