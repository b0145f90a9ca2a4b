use core::fmt;
use std::ops::Deref;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Statement keywords
    Select,
    From,
    Where,
    Update,
    Delete,
    Insert,
    Into,
    Values,
    Set,
    Join,
    And,
    Or,

    // Recognised, but never accepted by the grammar
    Create,
    Table,
    Drop,
    If,
    Exists,
    Not,
    In,
    Returning,

    // Punctuation
    Comma,
    Semicolon,
    Equals,
    Star,
    RoundBracketsOpen,
    RoundBracketsClose,

    // Literals and identifiers
    Number,
    SqlIdentifier,
    SingleQuotedValue,
    DoubleQuotedValue,

    End,
}

impl TokenKind {
    /// Upper-case label used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Select => "SELECT",
            TokenKind::From => "FROM",
            TokenKind::Where => "WHERE",
            TokenKind::Update => "UPDATE",
            TokenKind::Delete => "DELETE",
            TokenKind::Insert => "INSERT",
            TokenKind::Into => "INTO",
            TokenKind::Values => "VALUES",
            TokenKind::Set => "SET",
            TokenKind::Join => "JOIN",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Create => "CREATE",
            TokenKind::Table => "TABLE",
            TokenKind::Drop => "DROP",
            TokenKind::If => "IF",
            TokenKind::Exists => "EXISTS",
            TokenKind::Not => "NOT",
            TokenKind::In => "IN",
            TokenKind::Returning => "RETURNING",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Equals => "EQUALS",
            TokenKind::Star => "STAR",
            TokenKind::RoundBracketsOpen => "ROUND_BRACKETS_OPEN",
            TokenKind::RoundBracketsClose => "ROUND_BRACKETS_CLOSE",
            TokenKind::Number => "NUMBER",
            TokenKind::SqlIdentifier => "SQL_IDENTIFIER",
            TokenKind::SingleQuotedValue => "SINGLE_QUOTED_VALUE",
            TokenKind::DoubleQuotedValue => "DOUBLE_QUOTED_VALUE",
            TokenKind::End => "END",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme. The lexeme borrows from the arena it was lexed into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub lexeme: &'a str,
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    pub fn new(lexeme: &'a str, kind: TokenKind) -> Self {
        Token { lexeme, kind }
    }
}

/// Ordered tokens with a capacity fixed at creation. Pushing past the
/// capacity drops the token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenSequence<'a> {
    tokens: Vec<Token<'a>>,
    capacity: usize,
}

impl<'a> TokenSequence<'a> {
    pub fn with_capacity(capacity: usize) -> Self {
        TokenSequence {
            tokens: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a token. Returns false when the sequence is full and the token
    /// was dropped.
    pub fn push(&mut self, token: Token<'a>) -> bool {
        if self.tokens.len() >= self.capacity {
            log::trace!("Token sequence full, dropping {:?}", token);
            return false;
        }

        self.tokens.push(token);
        true
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}

impl<'a> Deref for TokenSequence<'a> {
    type Target = [Token<'a>];

    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}

impl<'s, 'a> IntoIterator for &'s TokenSequence<'a> {
    type Item = &'s Token<'a>;
    type IntoIter = std::slice::Iter<'s, Token<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod token_tests {
    use super::*;

    #[test]
    fn test_push_within_capacity() {
        let mut seq = TokenSequence::with_capacity(2);

        assert!(seq.push(Token::new(",", TokenKind::Comma)));
        assert!(seq.push(Token::new(";", TokenKind::Semicolon)));
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.kinds(), vec![TokenKind::Comma, TokenKind::Semicolon]);
    }

    #[test]
    fn test_push_past_capacity_is_dropped() {
        let mut seq = TokenSequence::with_capacity(1);

        assert!(seq.push(Token::new("a", TokenKind::SqlIdentifier)));
        assert!(!seq.push(Token::new("b", TokenKind::SqlIdentifier)));

        assert_eq!(seq.len(), 1);
        assert_eq!(seq.capacity(), 1);
        assert_eq!(seq[0].lexeme, "a");
    }

    #[test]
    fn test_zero_capacity() {
        let mut seq = TokenSequence::with_capacity(0);

        assert!(!seq.push(Token::new("*", TokenKind::Star)));
        assert!(seq.is_empty());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::RoundBracketsOpen.to_string(), "ROUND_BRACKETS_OPEN");
        assert_eq!(TokenKind::SqlIdentifier.name(), "SQL_IDENTIFIER");
        assert_eq!(TokenKind::End.name(), "END");
    }
}
