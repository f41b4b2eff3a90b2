//! Shared types for the sharpsim engine.
//!
//! This crate defines the statement variants, runtime values, source spans,
//! lexer errors and the execution result shared by every stage.

mod error;
mod result;
mod span;
mod value;
pub mod ast;

pub use error::LexError;
pub use result::{ExecutionResult, SkippedLine, EMPTY_RUN_SENTINEL};
pub use span::{SourceFile, SourceLine, Span};
pub use value::{format_number, to_index, Value, NULL_TEXT};
