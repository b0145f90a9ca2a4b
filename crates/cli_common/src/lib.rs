use core::fmt;

use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum ArenaError {
    #[error("Arena exhausted. Requested {requested} bytes, {remaining} remaining.")]
    Exhausted { requested: usize, remaining: usize },
}

#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum LexError {
    #[error("Could not store lexeme at offset {offset}: {source}")]
    Arena {
        offset: usize,
        #[source]
        source: ArenaError,
    },
}

/// Diagnostic class of a single validation error. None of these stop the
/// validator; they are recorded and the pass continues.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum ValidationErrorKind {
    /// The token kind is part of the grammar but not acceptable here.
    UnexpectedToken,
    /// The token kind never appears in the supported grammar.
    InvalidToken,
    /// Input ended while the statement still expected more tokens.
    IncompleteStatement,
}

impl ValidationErrorKind {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationErrorKind::UnexpectedToken => "unexpected token",
            ValidationErrorKind::InvalidToken => "invalid token",
            ValidationErrorKind::IncompleteStatement => "incomplete statement",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
