use lexer::token::Token;
use tabled::{settings::Style, Table, Tabled};
use validator::{ValidationError, ValidationResult};

#[derive(Tabled)]
struct ErrorRow {
    position: usize,
    expected: String,
    got: String,
    message: &'static str,
}

impl From<&ValidationError<'_>> for ErrorRow {
    fn from(error: &ValidationError<'_>) -> Self {
        ErrorRow {
            position: error.position,
            expected: error.expected.to_string(),
            got: describe_token(error.token.as_ref()),
            message: error.message(),
        }
    }
}

#[derive(Tabled)]
struct TokenRow {
    index: usize,
    kind: &'static str,
    lexeme: String,
}

/// `KIND "lexeme"`, or `<EOF>` when there is no token.
pub fn describe_token(token: Option<&Token>) -> String {
    match token {
        None => String::from("<EOF>"),
        Some(t) if t.lexeme.is_empty() => t.kind.name().to_string(),
        Some(t) => format!("{} \"{}\"", t.kind, t.lexeme),
    }
}

pub fn render(result: &ValidationResult) -> String {
    if result.is_ok() {
        return String::from("validation: ok");
    }

    let count = result.error_count();
    let plural = if count == 1 { "" } else { "s" };
    let mut output = format!("validation failed ({count} error{plural})");

    if !result.errors().is_empty() {
        let rows = result.errors().iter().map(ErrorRow::from);
        let table = Table::new(rows).with(Style::modern()).to_string();

        output.push('\n');
        output.push_str(&table);
    }

    if result.dropped() > 0 {
        output.push_str(&format!("\n... {} more error(s) not shown", result.dropped()));
    }

    output
}

pub fn render_tokens(tokens: &[Token]) -> String {
    if tokens.is_empty() {
        return String::from("(no tokens)");
    }

    let rows = tokens.iter().enumerate().map(|(index, t)| TokenRow {
        index,
        kind: t.kind.name(),
        lexeme: t.lexeme.to_string(),
    });

    Table::new(rows).with(Style::modern()).to_string()
}
