//! # minic - front end for a minimal C-like language
//!
//! A small compiler front end that turns source text into an accept/reject
//! verdict over its grammar:
//!
//! ```text
//! source lines -> DFA lexer -> token stream -> terminal mapper
//!              -> shift-reduce engine (SLR(1) table) -> verdict
//! ```
//!
//! The lexer is a hand-built deterministic finite automaton with maximal
//! munch, keyword/identifier disambiguation, multi-character operator
//! lookahead, and a one-token-lookbehind correction for negative number
//! literals. The parser is a stack machine driven by a precomputed
//! action/goto table over a 33-production grammar.
//!
//! Everything is single-threaded and synchronous. The automaton, grammar,
//! and parsing table are build-once read-only constants; token streams and
//! parse configurations live for a single invocation.
//!
//! ## Example
//!
//! ```rust
//! use minic::Verdict;
//!
//! let verdict = minic::check("int x; int f(int a) { return a; }").unwrap();
//! assert_eq!(verdict, Verdict::Accepted);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod lexer;
pub mod parser;
pub mod utils;

pub use lexer::{Lexer, Token, TokenCategory, TokenStream};
pub use parser::{Parser, Symbol, Verdict};
pub use utils::errors::{LexError, MapError, MiniCError, MiniCResult};

/// Convenient re-exports of commonly used types.
pub mod prelude {
    //! The usual imports for driving the front end.

    pub use crate::lexer::{Lexer, Token, TokenCategory, TokenStream};
    pub use crate::parser::{map_stream, Parser, Symbol, Verdict};
    pub use crate::utils::errors::{LexError, MapError, MiniCError, MiniCResult};
}

/// Tokenize source text into a committed token stream.
pub fn tokenize(source: &str) -> MiniCResult<TokenStream> {
    Ok(Lexer::tokenize(source)?)
}

/// Run the full pipeline: lex, translate, parse.
///
/// Lexical and translation failures are errors; a syntactic rejection is a
/// normal [`Verdict`] carrying the diagnostic pair.
pub fn check(source: &str) -> MiniCResult<Verdict> {
    let stream = Lexer::tokenize(source)?;
    let verdict = parser::parse(&stream)?;
    Ok(verdict)
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
