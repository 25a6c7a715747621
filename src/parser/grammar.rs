//! The context-free production rules of the grammar.
//!
//! A fixed, immutable set of 33 rules. Rule 1 (`S' -> CODE`) is the start
//! production: reducing by it accepts the input.

use crate::parser::symbol::Symbol;
use std::fmt;

/// A production rule `head -> body`.
///
/// The head is always a non-terminal; an empty derivation is written as a
/// body holding just [`Symbol::Epsilon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Rule number as referenced by the parsing table (1-based)
    pub id: usize,
    /// Head non-terminal
    pub head: Symbol,
    /// Ordered body
    pub body: &'static [Symbol],
}

impl Rule {
    /// Number of symbols the body puts on the parse stack.
    ///
    /// An epsilon body derives nothing, so it pops nothing on reduce.
    pub fn body_len(&self) -> usize {
        if matches!(self.body, [Symbol::Epsilon]) {
            0
        } else {
            self.body.len()
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule{}: {} ->", self.id, self.head)?;
        for sym in self.body {
            write!(f, " {}", sym)?;
        }
        Ok(())
    }
}

use Symbol::*;

/// The grammar, in rule-number order.
pub const RULES: [Rule; 33] = [
    Rule { id: 1, head: Goal, body: &[Code] },
    Rule { id: 2, head: Code, body: &[VDecl, Code] },
    Rule { id: 3, head: Code, body: &[FDecl, Code] },
    Rule { id: 4, head: Code, body: &[Epsilon] },
    Rule { id: 5, head: VDecl, body: &[Vtype, Id, Semi] },
    Rule { id: 6, head: VDecl, body: &[Vtype, AssignStmt, Semi] },
    Rule { id: 7, head: AssignStmt, body: &[Id, Assign, Rhs] },
    Rule {
        id: 8,
        head: FDecl,
        body: &[Vtype, Id, LParen, Arg, RParen, LBrace, Block, ReturnStmt, RBrace],
    },
    Rule { id: 9, head: Arg, body: &[Vtype, Id, MoreArgs] },
    Rule { id: 10, head: Arg, body: &[Epsilon] },
    Rule { id: 11, head: MoreArgs, body: &[Comma, Vtype, Id, MoreArgs] },
    Rule { id: 12, head: MoreArgs, body: &[Epsilon] },
    Rule { id: 13, head: Block, body: &[Stmt, Block] },
    Rule { id: 14, head: Block, body: &[Epsilon] },
    Rule { id: 15, head: Stmt, body: &[VDecl] },
    Rule { id: 16, head: Stmt, body: &[AssignStmt, Semi] },
    Rule {
        id: 17,
        head: Stmt,
        body: &[If, LParen, Cond, RParen, LBrace, Block, RBrace, ElseClause],
    },
    Rule {
        id: 18,
        head: Stmt,
        body: &[While, LParen, Cond, RParen, LBrace, Block, RBrace],
    },
    Rule {
        id: 19,
        head: Stmt,
        body: &[
            For, LParen, AssignStmt, Semi, Cond, Semi, AssignStmt, RParen, LBrace, Block, RBrace,
        ],
    },
    Rule { id: 20, head: ElseClause, body: &[Else, LBrace, Block, RBrace] },
    Rule { id: 21, head: ElseClause, body: &[Epsilon] },
    Rule { id: 22, head: Rhs, body: &[Expr] },
    Rule { id: 23, head: Rhs, body: &[Literal] },
    Rule { id: 24, head: Expr, body: &[Term, AddSub, Expr] },
    Rule { id: 25, head: Expr, body: &[Term] },
    Rule { id: 26, head: Term, body: &[Factor, MultDiv, Term] },
    Rule { id: 27, head: Term, body: &[Factor] },
    Rule { id: 28, head: Factor, body: &[LParen, Expr, RParen] },
    Rule { id: 29, head: Factor, body: &[Id] },
    Rule { id: 30, head: Factor, body: &[Num] },
    Rule { id: 31, head: Factor, body: &[Float] },
    Rule { id: 32, head: Cond, body: &[Factor, Comp, Factor] },
    Rule { id: 33, head: ReturnStmt, body: &[Return, Factor, Semi] },
];

/// Look up a rule by its number.
///
/// Panics on an out-of-range number; the parsing table only ever refers to
/// rules 1..=33.
pub fn rule(id: usize) -> &'static Rule {
    &RULES[id - 1]
}
