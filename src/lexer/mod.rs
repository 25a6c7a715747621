//! Lexical analysis: DFA states, tokens, the tokenizer driver, and the
//! committed token stream.
//!
//! The driver consumes source text one line at a time and walks the
//! automaton in [`state`] one character at a time, emitting a token
//! whenever the automaton refuses to extend the current match (maximal
//! munch). Whitespace tokens are produced but never committed; the
//! negative-literal correction happens inside [`TokenStream::append`].

pub mod state;
pub mod stream;
pub mod token;

pub use state::LexerState;
pub use stream::TokenStream;
pub use token::{Token, TokenCategory};

use crate::utils::errors::{LexError, LexErrorKind};

/// The tokenizer driver.
///
/// Stateless between invocations; all per-run state lives in locals and in
/// the produced [`TokenStream`].
pub struct Lexer;

impl Lexer {
    /// Tokenize a whole source text into a committed token stream.
    ///
    /// Lines are 1-indexed in every diagnostic and in each token record.
    pub fn tokenize(source: &str) -> Result<TokenStream, LexError> {
        let mut stream = TokenStream::new();
        for (index, line) in source.lines().enumerate() {
            Self::lex_line(line, index + 1, &mut stream)?;
        }
        log::debug!("lexed {} token(s)", stream.len());
        Ok(stream)
    }

    /// Tokenize one line into `out`.
    ///
    /// A synthetic trailing space forces the automaton to flush whatever is
    /// still accumulating at end of line; a string literal or any other
    /// pending match left open at that point is a lexical error.
    fn lex_line(line: &str, line_no: usize, out: &mut TokenStream) -> Result<(), LexError> {
        let mut state = LexerState::Start;
        let mut lexeme = String::new();

        for ch in line.chars().chain(std::iter::once(' ')) {
            let next = state.transition(ch);
            log::trace!("line {}: {:?} --{:?}--> {:?}", line_no, state, ch, next);

            if next != LexerState::Rejected {
                state = next;
                lexeme.push(ch);
                continue;
            }

            // The automaton refused to extend: the accumulated text must be
            // a complete token, and `ch` restarts the next one.
            if !state.is_final() {
                return Err(Self::stuck_error(state, &lexeme, ch, line_no));
            }
            out.append(Token::new(
                state.category(),
                std::mem::take(&mut lexeme),
                line_no,
            ))?;

            state = LexerState::Start.transition(ch);
            if state == LexerState::Rejected {
                return Err(LexError::new(
                    format!("unexpected character '{}'", ch),
                    line_no,
                    LexErrorKind::RejectedInput,
                ));
            }
            lexeme.push(ch);
        }

        // After the synthetic space the automaton can only be mid-run of
        // whitespace or inside an open string literal.
        match state {
            LexerState::Whitespace => Ok(()),
            LexerState::StringBody => Err(LexError::new(
                format!("unterminated string literal {}", lexeme),
                line_no,
                LexErrorKind::UnterminatedString,
            )),
            _ => Err(LexError::new(
                format!("input \"{}\" not accepted", lexeme.trim_end()),
                line_no,
                LexErrorKind::IncompleteToken,
            )),
        }
    }

    fn stuck_error(state: LexerState, lexeme: &str, ch: char, line_no: usize) -> LexError {
        if state == LexerState::StringBody {
            // StringBody consumes every character, so it can only get stuck
            // at the flush; keep the message specific anyway.
            return LexError::new(
                format!("unterminated string literal {}", lexeme),
                line_no,
                LexErrorKind::UnterminatedString,
            );
        }
        let mut text = format!("{}{}", lexeme, ch);
        text.truncate(text.trim_end().len());
        LexError::new(
            format!("input \"{}\" not accepted", text),
            line_no,
            LexErrorKind::RejectedInput,
        )
    }
}
