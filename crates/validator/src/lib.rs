use cli_common::ValidationErrorKind;
use lexer::token::{Token, TokenKind};
use transition::ExpectedSet;

pub mod transition;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ValidationError<'a> {
    /// `None` when the error is at end of input.
    pub token: Option<Token<'a>>,
    /// Index into the token sequence, or its length for end of input.
    pub position: usize,
    pub expected: ExpectedSet,
    pub kind: ValidationErrorKind,
}

impl ValidationError<'_> {
    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}

/// Outcome of a validation pass. `error_count` keeps counting once the
/// stored errors reach `error_capacity`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ValidationResult<'a> {
    error_count: usize,
    error_capacity: usize,
    errors: Vec<ValidationError<'a>>,
}

impl<'a> ValidationResult<'a> {
    pub fn with_capacity(error_capacity: usize) -> Self {
        ValidationResult {
            error_count: 0,
            error_capacity,
            errors: Vec::with_capacity(error_capacity),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error_count == 0
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn error_capacity(&self) -> usize {
        self.error_capacity
    }

    pub fn errors(&self) -> &[ValidationError<'a>] {
        &self.errors
    }

    /// Errors that were counted but not stored.
    pub fn dropped(&self) -> usize {
        self.error_count - self.errors.len()
    }

    fn record(&mut self, error: ValidationError<'a>) {
        if self.errors.len() < self.error_capacity {
            self.errors.push(error);
        }

        self.error_count += 1;
    }
}

pub struct Validator<'t, 'a> {
    tokens: &'t [Token<'a>],
    expected: ExpectedSet,
    result: ValidationResult<'a>,
}

/// Validate with room for every token's error plus the end of input.
pub fn validate<'a>(tokens: &[Token<'a>]) -> ValidationResult<'a> {
    validate_with_capacity(tokens, tokens.len() + 2)
}

pub fn validate_with_capacity<'a>(
    tokens: &[Token<'a>],
    error_capacity: usize,
) -> ValidationResult<'a> {
    Validator::new(tokens, error_capacity).validate()
}

impl<'t, 'a> Validator<'t, 'a> {
    pub fn new(tokens: &'t [Token<'a>], error_capacity: usize) -> Validator<'t, 'a> {
        Validator {
            tokens,
            expected: transition::START,
            result: ValidationResult::with_capacity(error_capacity),
        }
    }

    /// Visit every token once, then the end of input. A mismatch is recorded
    /// and the expected set stays where it was.
    pub fn validate(mut self) -> ValidationResult<'a> {
        if self.tokens.is_empty() {
            return self.result;
        }

        for (position, token) in self.tokens.iter().enumerate() {
            self.accept(position, *token);
        }

        self.accept_end();

        log::debug!(
            "Validated {} tokens, {} error(s)",
            self.tokens.len(),
            self.result.error_count()
        );

        self.result
    }

    fn accept(&mut self, position: usize, token: Token<'a>) {
        let Some(next) = transition::next(token.kind) else {
            self.mismatch(Some(token), position, ValidationErrorKind::InvalidToken);
            return;
        };

        if !self.expected.contains(token.kind) {
            self.mismatch(Some(token), position, ValidationErrorKind::UnexpectedToken);
            return;
        }

        log::trace!("Accepted {} at {}", token.kind, position);
        self.expected = next;
    }

    fn accept_end(&mut self) {
        let position = self.tokens.len();

        if self.expected.contains(TokenKind::End) {
            log::trace!("Accepted END at {}", position);
            return;
        }

        self.mismatch(None, position, ValidationErrorKind::IncompleteStatement);
    }

    fn mismatch(&mut self, token: Option<Token<'a>>, position: usize, kind: ValidationErrorKind) {
        log::debug!(
            "{} at {}: expected {}, got {:?}",
            kind,
            position,
            self.expected,
            token.map(|t| t.kind)
        );

        self.result.record(ValidationError {
            token,
            position,
            expected: self.expected,
            kind,
        });
    }
}
