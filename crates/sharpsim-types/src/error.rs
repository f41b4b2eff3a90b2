use thiserror::Error;

/// A line that could not be tokenized.
///
/// The driver treats such a line as unrecognized; lex errors never reach
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unterminated string literal starting at byte {0}")]
    UnterminatedString(usize),
    #[error("unterminated character literal starting at byte {0}")]
    UnterminatedChar(usize),
}
