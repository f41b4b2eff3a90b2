//! Token types for the line lexer.
//!
//! Defines [`TokenKind`] covering every lexeme the classifier and the
//! arithmetic parser look at, and [`Token`], which pairs a kind with a
//! byte [`Span`] into the line.

use sharpsim_types::Span;
use std::fmt;

/// Words the lexer turns into dedicated tokens instead of
/// [`TokenKind::Identifier`].
pub const KEYWORDS: &[&str] = &["new", "true", "false"];

// ─────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────

/// A single token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// Byte range in the lexed line.
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// The identifier text, if this is an identifier.
    pub fn ident(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Identifier(name) => Some(name),
            _ => None,
        }
    }

    /// Returns `true` if this is the identifier `name`.
    pub fn is_ident(&self, name: &str) -> bool {
        self.ident() == Some(name)
    }
}

// ─────────────────────────────────────────────────────────────────────
// TokenKind
// ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ── Literals ──────────────────────────────────────────────
    /// `42`, `3.14`, `2.5f`
    NumberLit(f64),
    /// `"hello"`: raw text between the quotes, escapes untouched.
    StringLit(String),
    /// `$"Hi {name}"`: raw text between the quotes.
    InterpolatedString(String),
    /// `'a'`: raw text between the quotes.
    CharLit(String),
    True,
    False,

    // ── Names ─────────────────────────────────────────────────
    Identifier(String),
    /// `new`
    New,

    // ── Punctuation ───────────────────────────────────────────
    Dot,
    Comma,
    Semicolon,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,

    // ── Operators ─────────────────────────────────────────────
    /// `=`
    Eq,
    /// `==`
    EqEq,
    /// `=>`
    FatArrow,
    Plus,
    Minus,
    Star,
    Slash,
    PlusPlus,
    MinusMinus,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,

    /// Any other character (`<`, `%`, `&`, `?`, ...). Lets unsupported
    /// constructs lex cleanly so they can be classified as unrecognized.
    Other(char),
}

impl TokenKind {
    /// Look up a keyword by its source text.
    pub fn keyword(word: &str) -> Option<Self> {
        match word {
            "new" => Some(Self::New),
            "true" => Some(Self::True),
            "false" => Some(Self::False),
            _ => None,
        }
    }

    pub fn is_keyword(&self) -> bool {
        matches!(self, Self::New | Self::True | Self::False)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NumberLit(n) => write!(f, "{n}"),
            Self::StringLit(s) => write!(f, "\"{s}\""),
            Self::InterpolatedString(s) => write!(f, "$\"{s}\""),
            Self::CharLit(s) => write!(f, "'{s}'"),
            Self::True => f.write_str("true"),
            Self::False => f.write_str("false"),
            Self::Identifier(name) => f.write_str(name),
            Self::New => f.write_str("new"),
            Self::Dot => f.write_str("."),
            Self::Comma => f.write_str(","),
            Self::Semicolon => f.write_str(";"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::LBracket => f.write_str("["),
            Self::RBracket => f.write_str("]"),
            Self::LBrace => f.write_str("{"),
            Self::RBrace => f.write_str("}"),
            Self::Eq => f.write_str("="),
            Self::EqEq => f.write_str("=="),
            Self::FatArrow => f.write_str("=>"),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::PlusPlus => f.write_str("++"),
            Self::MinusMinus => f.write_str("--"),
            Self::PlusEq => f.write_str("+="),
            Self::MinusEq => f.write_str("-="),
            Self::StarEq => f.write_str("*="),
            Self::SlashEq => f.write_str("/="),
            Self::Other(c) => write!(f, "{c}"),
        }
    }
}
