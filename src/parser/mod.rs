//! Syntax analysis: grammar symbols, production rules, the SLR(1) parsing
//! table, token-to-terminal translation, and the shift-reduce engine.
//!
//! The parser consumes the lexer's committed [`TokenStream`] and answers
//! accept/reject over the grammar; it builds no syntax tree.

pub mod engine;
pub mod grammar;
pub mod mapper;
pub mod symbol;
pub mod table;

pub use engine::{Parser, Verdict};
pub use grammar::{Rule, RULES};
pub use mapper::{map_stream, map_token};
pub use symbol::Symbol;
pub use table::{Action, ParserState};

use crate::lexer::TokenStream;
use crate::utils::errors::MapError;

/// Parse a committed token stream to a verdict.
pub fn parse(stream: &TokenStream) -> Result<Verdict, MapError> {
    let terminals = map_stream(stream)?;
    Ok(Parser::new(terminals).parse())
}
