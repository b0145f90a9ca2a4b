use crate::token::TokenKind;

static KEYWORDS: [(&str, TokenKind); 20] = [
    ("select", TokenKind::Select),
    ("from", TokenKind::From),
    ("where", TokenKind::Where),
    ("update", TokenKind::Update),
    ("delete", TokenKind::Delete),
    ("insert", TokenKind::Insert),
    ("into", TokenKind::Into),
    ("values", TokenKind::Values),
    ("set", TokenKind::Set),
    ("join", TokenKind::Join),
    ("and", TokenKind::And),
    ("or", TokenKind::Or),
    ("create", TokenKind::Create),
    ("table", TokenKind::Table),
    ("drop", TokenKind::Drop),
    ("if", TokenKind::If),
    ("exists", TokenKind::Exists),
    ("not", TokenKind::Not),
    ("in", TokenKind::In),
    ("returning", TokenKind::Returning),
];

/// Case-insensitive exact match against the keyword table.
/// "selecting" is not "select".
pub fn lookup(lexeme: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(spelling, _)| spelling.len() == lexeme.len() && spelling.eq_ignore_ascii_case(lexeme))
        .map(|(_, kind)| *kind)
}
