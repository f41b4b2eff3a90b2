//! sharpsim lexer: converts one source line into a token stream.

pub mod lexer;
pub mod token;

pub use lexer::Lexer;
pub use token::{Token, TokenKind, KEYWORDS};
