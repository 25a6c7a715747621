//! The shift-reduce engine.
//!
//! A deterministic stack machine over the parsing table. The working
//! sentence is kept as two explicit regions instead of one list with a
//! moving splitter: a stack of reduced symbols (mirrored one-to-one by the
//! state stack above its bottom entry) and a cursor into the unconsumed
//! terminal suffix. SLR(1) guarantees a unique action per step as long as
//! the table is conflict-free, so there is no backtracking and no
//! speculative parsing; a missing table entry halts the whole parse.

use crate::parser::grammar;
use crate::parser::symbol::Symbol;
use crate::parser::table::{self, Action, ParserState, START_STATE};
use std::fmt;

/// The outcome of a parse.
///
/// Rejection is a value, not an error: it carries the stack-top state and
/// the lookahead at the point of failure for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The input derives from the start symbol.
    Accepted,
    /// No action existed for `(state, lookahead)`.
    Rejected {
        /// Stack top when the parse halted
        state: ParserState,
        /// The symbol with no applicable action
        lookahead: Symbol,
    },
}

impl Verdict {
    /// Whether the verdict is an acceptance.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted => write!(f, "The input string is ACCEPTED by the parser."),
            Verdict::Rejected { state, lookahead } => write!(
                f,
                "The input string has NOT been accepted by the parser, at stack top '{}' and next symbol '{}'.",
                state, lookahead
            ),
        }
    }
}

/// The shift-reduce parser.
///
/// Created fresh per invocation; the grammar and table it consults are
/// shared read-only constants.
pub struct Parser {
    /// Unconsumed terminal stream, ending with `$`
    terminals: Vec<Symbol>,
    /// Cursor into `terminals`: everything before it has been shifted
    cursor: usize,
    /// State stack; bottom is the start state
    states: Vec<ParserState>,
    /// Reduced prefix, mirrored one-to-one by `states` above its bottom
    reduced: Vec<Symbol>,
}

impl Parser {
    /// Create a parser over a terminal sequence.
    ///
    /// The sequence is expected to end with [`Symbol::Eof`], as produced by
    /// [`map_stream`](crate::parser::mapper::map_stream); a missing marker
    /// is appended.
    pub fn new(mut terminals: Vec<Symbol>) -> Self {
        if terminals.last() != Some(&Symbol::Eof) {
            terminals.push(Symbol::Eof);
        }
        Self {
            terminals,
            cursor: 0,
            states: Vec::new(),
            reduced: Vec::new(),
        }
    }

    /// Run the parse to an accept/reject verdict.
    pub fn parse(&mut self) -> Verdict {
        self.states.push(START_STATE);

        loop {
            let state = self.state();
            let lookahead = self.lookahead();
            self.trace_configuration();

            match table::action(state, lookahead) {
                None => return Verdict::Rejected { state, lookahead },

                Some(Action::Shift(next)) => {
                    log::debug!("shifting and going to state {}", next);
                    self.reduced.push(lookahead);
                    self.cursor += 1;
                    self.states.push(next);
                }

                Some(Action::Reduce(id)) => {
                    let rule = grammar::rule(id);
                    log::debug!("reducing using {}", rule);
                    for _ in 0..rule.body_len() {
                        self.states.pop();
                        self.reduced.pop();
                    }
                    self.reduced.push(rule.head);
                    if id == 1 {
                        return Verdict::Accepted;
                    }
                    match table::action(self.state(), rule.head) {
                        Some(Action::Goto(next)) => self.states.push(next),
                        _ => {
                            return Verdict::Rejected {
                                state: self.state(),
                                lookahead: rule.head,
                            }
                        }
                    }
                }

                // Goto entries live in non-terminal columns; a terminal
                // lookahead cannot reach one, but absence-style rejection
                // keeps the lookup total.
                Some(Action::Goto(_)) => return Verdict::Rejected { state, lookahead },
            }
        }
    }

    fn state(&self) -> ParserState {
        self.states.last().copied().unwrap_or(START_STATE)
    }

    fn lookahead(&self) -> Symbol {
        self.terminals.get(self.cursor).copied().unwrap_or(Symbol::Eof)
    }

    fn trace_configuration(&self) {
        if !log::log_enabled!(log::Level::Trace) {
            return;
        }
        let mut sentence = String::new();
        for sym in &self.reduced {
            sentence.push_str(sym.name());
            sentence.push(' ');
        }
        sentence.push('|');
        for sym in &self.terminals[self.cursor..] {
            sentence.push(' ');
            sentence.push_str(sym.name());
        }
        log::trace!("<{}> {}", self.state(), sentence);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Symbol::*;

    fn parse(terminals: Vec<Symbol>) -> Verdict {
        Parser::new(terminals).parse()
    }

    #[test]
    fn test_empty_program_is_accepted() {
        // CODE -> eps, then S' -> CODE
        assert_eq!(parse(vec![]), Verdict::Accepted);
        assert_eq!(parse(vec![Eof]), Verdict::Accepted);
    }

    #[test]
    fn test_variable_declaration() {
        // int x ;
        assert_eq!(parse(vec![Vtype, Id, Semi]), Verdict::Accepted);
    }

    #[test]
    fn test_declaration_with_initializer() {
        // int x = 5 ;
        assert_eq!(parse(vec![Vtype, Id, Assign, Num, Semi]), Verdict::Accepted);
        // int x = "s" ;
        assert_eq!(
            parse(vec![Vtype, Id, Assign, Literal, Semi]),
            Verdict::Accepted
        );
    }

    #[test]
    fn test_function_declaration() {
        // int f ( int a ) { return a ; }
        assert_eq!(
            parse(vec![
                Vtype, Id, LParen, Vtype, Id, RParen, LBrace, Return, Id, Semi, RBrace,
            ]),
            Verdict::Accepted
        );
    }

    #[test]
    fn test_function_with_several_arguments() {
        // int f ( int a , int b ) { return 0 ; }
        assert_eq!(
            parse(vec![
                Vtype, Id, LParen, Vtype, Id, Comma, Vtype, Id, RParen, LBrace, Return, Num, Semi,
                RBrace,
            ]),
            Verdict::Accepted
        );
    }

    #[test]
    fn test_expression_precedence_layers() {
        // int x = a + b * ( c - 1 ) ;
        assert_eq!(
            parse(vec![
                Vtype, Id, Assign, Id, AddSub, Id, MultDiv, LParen, Id, AddSub, Num, RParen, Semi,
            ]),
            Verdict::Accepted
        );
    }

    #[test]
    fn test_if_else_and_loops_in_function_body() {
        // int f ( ) {
        //   if ( a < 1 ) { x = 1 ; } else { x = 2 ; }
        //   while ( a < 1 ) { x = 1 ; }
        //   for ( i = 0 ; i < 9 ; i = i + 1 ) { x = 2 ; }
        //   return x ;
        // }
        let mut terminals = vec![Vtype, Id, LParen, RParen, LBrace];
        terminals.extend([
            If, LParen, Id, Comp, Num, RParen, LBrace, Id, Assign, Num, Semi, RBrace, Else,
            LBrace, Id, Assign, Num, Semi, RBrace,
        ]);
        terminals.extend([
            While, LParen, Id, Comp, Num, RParen, LBrace, Id, Assign, Num, Semi, RBrace,
        ]);
        terminals.extend([
            For, LParen, Id, Assign, Num, Semi, Id, Comp, Num, Semi, Id, Assign, Id, AddSub, Num,
            RParen, LBrace, Id, Assign, Num, Semi, RBrace,
        ]);
        terminals.extend([Return, Id, Semi, RBrace]);
        assert_eq!(parse(terminals), Verdict::Accepted);
    }

    #[test]
    fn test_missing_closing_brace_rejects_at_eof() {
        // int f ( int a ) { return a ;      <- no closing brace
        let verdict = parse(vec![
            Vtype, Id, LParen, Vtype, Id, RParen, LBrace, Return, Id, Semi,
        ]);
        match verdict {
            Verdict::Rejected { lookahead, .. } => assert_eq!(lookahead, Eof),
            Verdict::Accepted => panic!("expected rejection"),
        }
    }

    #[test]
    fn test_missing_semicolon_rejects_locally() {
        let verdict = parse(vec![Vtype, Id, Id, Semi]);
        match verdict {
            Verdict::Rejected { state, lookahead } => {
                assert_eq!(lookahead, Id);
                assert_eq!(state, ParserState(7));
            }
            Verdict::Accepted => panic!("expected rejection"),
        }
    }

    #[test]
    fn test_function_body_requires_trailing_return() {
        // int f ( ) { x = 1 ; }
        let verdict = parse(vec![
            Vtype, Id, LParen, RParen, LBrace, Id, Assign, Num, Semi, RBrace,
        ]);
        assert!(!verdict.is_accepted());
    }

    #[test]
    fn test_condition_allows_exactly_one_comparison() {
        // while ( a < b < c ) ... rejects on the second comp
        let verdict = parse(vec![
            Vtype, Id, LParen, RParen, LBrace, While, LParen, Id, Comp, Id, Comp, Id, RParen,
            LBrace, RBrace, Return, Num, Semi, RBrace,
        ]);
        assert!(!verdict.is_accepted());
    }

    #[test]
    fn test_determinism() {
        let terminals = vec![Vtype, Id, Assign, Num, Semi];
        assert_eq!(parse(terminals.clone()), parse(terminals));
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(
            format!("{}", Verdict::Accepted),
            "The input string is ACCEPTED by the parser."
        );
        let rejected = Verdict::Rejected {
            state: ParserState(45),
            lookahead: Eof,
        };
        let message = format!("{}", rejected);
        assert!(message.contains("'Q45'"));
        assert!(message.contains("'$'"));
    }
}
