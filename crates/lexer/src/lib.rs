use cli_common::LexError;
use token::*;

pub mod arena;
pub mod keyword;
pub mod token;

pub use arena::Arena;

pub struct Lexer<'i, 'a> {
    buf: &'i str,
    bytes: &'i [u8],
    len: usize,
    pos: usize,
    arena: &'a Arena,
}

/// Tokenize `buf`, copying every lexeme into `arena`.
pub fn tokenize<'a>(buf: &str, arena: &'a Arena) -> Result<TokenSequence<'a>, LexError> {
    Lexer::new(buf, arena).lex()
}

fn is_whitespace(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\n' | b'\r')
}

fn is_run_separator(ch: u8) -> bool {
    is_whitespace(ch) || matches!(ch, b',' | b';' | b'(' | b')')
}

impl<'i, 'a> Lexer<'i, 'a> {
    pub fn new(buf: &'i str, arena: &'a Arena) -> Lexer<'i, 'a> {
        Lexer {
            buf,
            bytes: buf.as_bytes(),
            len: buf.len(),
            pos: 0,
            arena,
        }
    }

    pub fn lex(mut self) -> Result<TokenSequence<'a>, LexError> {
        // Every token starts on its own character, so the character count
        // bounds the token count. `self.len` is in bytes.
        let mut tokens = TokenSequence::with_capacity(self.buf.chars().count());

        while self.pos < self.len {
            let curr_ch = self.bytes[self.pos];

            let (kind, start, end) = match curr_ch {
                c if is_whitespace(c) => {
                    self.pos += 1;
                    continue;
                }
                b',' => self.single(TokenKind::Comma),
                b';' => self.single(TokenKind::Semicolon),
                b'=' => self.single(TokenKind::Equals),
                b'(' => self.single(TokenKind::RoundBracketsOpen),
                b')' => self.single(TokenKind::RoundBracketsClose),
                b'*' => self.single(TokenKind::Star),
                b'\'' => self.quoted(b'\'', TokenKind::SingleQuotedValue),
                b'"' => self.quoted(b'"', TokenKind::DoubleQuotedValue),
                c if c.is_ascii_alphabetic() || c == b'_' => self.run(TokenKind::SqlIdentifier),
                c if c.is_ascii_digit() => self.run(TokenKind::Number),
                _ => {
                    log::trace!("Skipping unrecognised byte {:#04x} at {}", curr_ch, self.pos);
                    self.pos += 1;
                    continue;
                }
            };

            let lexeme = self
                .arena
                .alloc_str(&self.buf[start..end])
                .map_err(|source| LexError::Arena {
                    offset: start,
                    source,
                })?;

            let kind = match kind {
                TokenKind::SqlIdentifier | TokenKind::Number => {
                    keyword::lookup(lexeme).unwrap_or(kind)
                }
                _ => kind,
            };

            log::trace!("{kind} {lexeme:?} at {start}");
            tokens.push(Token::new(lexeme, kind));
        }

        log::debug!(
            "Lexed {} tokens from {} bytes, arena {}/{} bytes",
            tokens.len(),
            self.len,
            self.arena.allocated(),
            self.arena.capacity()
        );

        Ok(tokens)
    }

    fn single(&mut self, kind: TokenKind) -> (TokenKind, usize, usize) {
        let start = self.pos;
        self.pos += 1;
        (kind, start, self.pos)
    }

    /// Lexeme excludes the quotes. An unterminated value runs to the end of
    /// the input.
    fn quoted(&mut self, quote: u8, kind: TokenKind) -> (TokenKind, usize, usize) {
        let start = self.pos + 1;
        let end = self.scan_to(start, quote);

        // Step over the closing quote, if there is one.
        self.pos = (end + 1).min(self.len);

        (kind, start, end)
    }

    fn run(&mut self, kind: TokenKind) -> (TokenKind, usize, usize) {
        let start = self.pos;
        let end = self.scan_until(start, is_run_separator);
        debug_assert!(end > start, "identifier or number run must not be empty");

        self.pos = end;

        (kind, start, end)
    }

    /// Given a start point and a byte to find, scan until the byte is found
    /// and return its offset, or the end of the input.
    fn scan_to(&self, start_offset: usize, ch: u8) -> usize {
        self.scan_until(start_offset, |c| c == ch)
    }

    /// Given the function end_func, scan the input until the func returns true,
    /// returning the index at that point.
    fn scan_until<F>(&self, start_offset: usize, end_func: F) -> usize
    where
        F: Fn(u8) -> bool,
    {
        let mut cursor = start_offset;

        while cursor < self.len && !end_func(self.bytes[cursor]) {
            cursor += 1;
        }

        cursor
    }
}
