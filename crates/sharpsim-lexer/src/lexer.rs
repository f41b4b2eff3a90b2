//! Line lexer: converts one trimmed source line into tokens.
//!
//! Features:
//! - Identifiers (Unicode letters allowed), `new`, `true`, `false`
//! - Numbers with an optional fraction and an ignored type suffix (`2.5f`)
//! - String, interpolated-string and character literals, kept raw
//! - Trailing `//` comments end the line; inline `/* */` comments are skipped
//! - Unknown characters become [`TokenKind::Other`] instead of errors

use sharpsim_types::{LexError, Span};

use crate::token::{Token, TokenKind};

/// Numeric type suffixes accepted (and ignored) after a number.
const NUMBER_SUFFIXES: &[char] = &['f', 'F', 'd', 'D', 'm', 'M', 'l', 'L'];

/// The line lexer.
pub struct Lexer<'src> {
    source: &'src str,
    /// Current byte offset into `source`.
    pos: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self { source, pos: 0 }
    }

    /// Lex the whole line.
    pub fn lex(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    // ─────────────────────────────────────────────────────────────
    // Character-level helpers
    // ─────────────────────────────────────────────────────────────

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.source[self.pos..].chars().nth(offset)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn token(&self, kind: TokenKind, start: usize) -> Token {
        Token::new(kind, Span::new(start, self.pos))
    }

    // ─────────────────────────────────────────────────────────────
    // Whitespace & comments
    // ─────────────────────────────────────────────────────────────

    /// Skip whitespace and inline block comments. Returns `false` once a
    /// line comment (or an unterminated block comment) ends the line.
    fn skip_trivia(&mut self) -> bool {
        loop {
            match (self.peek(), self.peek_at(1)) {
                (Some(c), _) if c.is_whitespace() => {
                    self.advance();
                }
                (Some('/'), Some('/')) => {
                    self.pos = self.source.len();
                    return false;
                }
                (Some('/'), Some('*')) => match self.source[self.pos + 2..].find("*/") {
                    Some(end) => self.pos += 2 + end + 2,
                    None => {
                        self.pos = self.source.len();
                        return false;
                    }
                },
                (None, _) => return false,
                _ => return true,
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Scanning
    // ─────────────────────────────────────────────────────────────

    fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        if !self.skip_trivia() {
            return Ok(None);
        }
        let start = self.pos;
        let Some(ch) = self.advance() else {
            return Ok(None);
        };

        let kind = match ch {
            '"' => TokenKind::StringLit(self.scan_quoted('"', start)?),
            '$' if self.peek() == Some('"') => {
                self.advance();
                TokenKind::InterpolatedString(self.scan_quoted('"', start)?)
            }
            '\'' => TokenKind::CharLit(self.scan_quoted('\'', start)?),
            c if c.is_ascii_digit() => self.scan_number(start),
            c if c.is_alphabetic() || c == '_' => self.scan_word(start),
            '.' => TokenKind::Dot,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '=' if self.eat('=') => TokenKind::EqEq,
            '=' if self.eat('>') => TokenKind::FatArrow,
            '=' => TokenKind::Eq,
            '+' if self.eat('+') => TokenKind::PlusPlus,
            '+' if self.eat('=') => TokenKind::PlusEq,
            '+' => TokenKind::Plus,
            '-' if self.eat('-') => TokenKind::MinusMinus,
            '-' if self.eat('=') => TokenKind::MinusEq,
            '-' => TokenKind::Minus,
            '*' if self.eat('=') => TokenKind::StarEq,
            '*' => TokenKind::Star,
            '/' if self.eat('=') => TokenKind::SlashEq,
            '/' => TokenKind::Slash,
            other => TokenKind::Other(other),
        };
        Ok(Some(self.token(kind, start)))
    }

    /// Scan up to the closing `quote`, skipping over backslash escapes.
    /// Returns the raw text between the quotes.
    fn scan_quoted(&mut self, quote: char, start: usize) -> Result<String, LexError> {
        let content_start = self.pos;
        loop {
            match self.advance() {
                Some('\\') => {
                    self.advance();
                }
                Some(c) if c == quote => {
                    let content_end = self.pos - quote.len_utf8();
                    return Ok(self.source[content_start..content_end].to_string());
                }
                Some(_) => {}
                None if quote == '"' => return Err(LexError::UnterminatedString(start)),
                None => return Err(LexError::UnterminatedChar(start)),
            }
        }
    }

    fn scan_number(&mut self, start: usize) -> TokenKind {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        if self.peek() == Some('.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }
        let digits_end = self.pos;
        if self.peek().is_some_and(|c| NUMBER_SUFFIXES.contains(&c)) {
            self.advance();
        }
        // Only ASCII digits and at most one '.' were consumed.
        let value = self.source[start..digits_end].parse().unwrap_or(f64::NAN);
        TokenKind::NumberLit(value)
    }

    fn scan_word(&mut self, start: usize) -> TokenKind {
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.advance();
        }
        let word = &self.source[start..self.pos];
        TokenKind::keyword(word).unwrap_or_else(|| TokenKind::Identifier(word.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .lex()
            .expect("lex failed")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_block_comment_inline_is_skipped() {
        assert_eq!(
            kinds("x /* note */ ++"),
            vec![TokenKind::Identifier("x".into()), TokenKind::PlusPlus]
        );
    }

    #[test]
    fn test_unterminated_block_comment_ends_line() {
        assert_eq!(
            kinds("x /* never closed"),
            vec![TokenKind::Identifier("x".into())]
        );
    }

    #[test]
    fn test_spans_cover_source() {
        let source = r#"string s = "hi";"#;
        let tokens = Lexer::new(source).lex().unwrap();
        let texts: Vec<&str> = tokens.iter().map(|t| t.span.slice(source)).collect();
        assert_eq!(texts, vec!["string", "s", "=", "\"hi\"", ";"]);
    }
}
