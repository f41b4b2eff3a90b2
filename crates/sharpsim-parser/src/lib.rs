//! sharpsim parser: classifies statement token runs and parses arithmetic.

mod classify;
mod parse_arith;
mod parser;

pub use classify::{classify, source_text, split_statements, CONSOLE_WRITERS, DECLARATION_TYPES};
pub use parse_arith::parse_arithmetic;
pub use parser::{balanced, matching_close, split_top_level, Parser, MAX_EXPR_DEPTH};
