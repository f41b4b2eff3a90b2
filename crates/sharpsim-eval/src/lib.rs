//! sharpsim engine: symbol table, expression evaluator, statement handlers
//! and the line driver.
//!
//! Runs a C#-style teaching snippet by classifying each statement and
//! applying it to a per-run [`SymbolTable`], collecting printed lines in an
//! [`OutputBuffer`]. Nothing is compiled; unsupported lines are skipped.

pub mod env;
pub mod error;
pub mod evaluator;
pub mod exec;
mod driver;
mod limits;
mod output;

pub use driver::{is_noise, run, Driver, RunReport};
pub use env::{PseudoArray, PseudoObject, SymbolTable};
pub use error::{SimError, SimResult};
pub use evaluator::Evaluator;
pub use exec::{canned_sentence, Executor, CANNED_METHODS};
pub use limits::Limits;
pub use output::{render_output, OutputBuffer};
