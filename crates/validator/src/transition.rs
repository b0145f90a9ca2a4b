//! Grammar as data: for every token kind the grammar can accept, the set of
//! kinds that may follow it.

use core::fmt;

use lexer::token::TokenKind::{self, *};

/// Kinds acceptable at the current position. Order is display order only.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ExpectedSet(&'static [TokenKind]);

impl ExpectedSet {
    pub fn contains(&self, kind: TokenKind) -> bool {
        self.0.contains(&kind)
    }

    pub fn kinds(&self) -> &'static [TokenKind] {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ExpectedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, kind) in self.kinds().iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            f.write_str(kind.name())?;
        }

        Ok(())
    }
}

impl fmt::Debug for ExpectedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{self}}}")
    }
}

/// Statement-starting keywords.
pub const START: ExpectedSet = ExpectedSet(&[Select, Update, Delete, Insert]);

const AFTER_SELECT: ExpectedSet = ExpectedSet(&[SqlIdentifier, Star]);

const AFTER_STAR: ExpectedSet = ExpectedSet(&[Comma, From]);

// No END: a statement has to be closed with ';'. No '(' either, so
// INSERT takes VALUES directly after the table name.
const AFTER_IDENTIFIER: ExpectedSet = ExpectedSet(&[
    Comma,
    From,
    Where,
    Equals,
    Semicolon,
    And,
    Or,
    Join,
    RoundBracketsClose,
    Set,
    Values,
]);

const AFTER_VALUE: ExpectedSet = ExpectedSet(&[
    Comma,
    Where,
    Semicolon,
    And,
    Or,
    RoundBracketsClose,
]);

const AFTER_COMMA: ExpectedSet = ExpectedSet(&[
    SqlIdentifier,
    Star,
    Number,
    SingleQuotedValue,
    DoubleQuotedValue,
    RoundBracketsOpen,
]);

const AFTER_EQUALS: ExpectedSet = ExpectedSet(&[
    Number,
    SingleQuotedValue,
    DoubleQuotedValue,
    SqlIdentifier,
]);

const AFTER_BRACKET_OPEN: ExpectedSet = ExpectedSet(&[
    SqlIdentifier,
    Number,
    SingleQuotedValue,
    DoubleQuotedValue,
]);

const AFTER_BRACKET_CLOSE: ExpectedSet = ExpectedSet(&[Values, Comma, Semicolon]);

const IDENTIFIER: ExpectedSet = ExpectedSet(&[SqlIdentifier]);

const END: ExpectedSet = ExpectedSet(&[End]);

/// The set that becomes expected once `kind` has been accepted. `None` for
/// kinds the grammar never accepts anywhere.
pub fn next(kind: TokenKind) -> Option<ExpectedSet> {
    let set = match kind {
        Select => AFTER_SELECT,
        Update | From | Where | And | Or | Set | Into | Join => IDENTIFIER,
        Delete => ExpectedSet(&[From]),
        Insert => ExpectedSet(&[Into]),
        Values => ExpectedSet(&[RoundBracketsOpen]),
        Star => AFTER_STAR,
        SqlIdentifier => AFTER_IDENTIFIER,
        Number | SingleQuotedValue | DoubleQuotedValue => AFTER_VALUE,
        Comma => AFTER_COMMA,
        Equals => AFTER_EQUALS,
        RoundBracketsOpen => AFTER_BRACKET_OPEN,
        RoundBracketsClose => AFTER_BRACKET_CLOSE,
        Semicolon | End => END,
        Create | Table | Drop | If | Exists | Not | In | Returning => return None,
    };

    Some(set)
}
