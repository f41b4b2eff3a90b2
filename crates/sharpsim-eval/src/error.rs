//! Run-level failures.
//!
//! Unknown names, bad indices and unresolvable expressions are not errors:
//! handlers no-op and the evaluator falls back to raw text. The only way a
//! run fails is by exceeding one of its [`Limits`](crate::Limits).

use thiserror::Error;

/// A run aborted by a resource limit. Partial output is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// More statements were executed than `Limits::max_statements`.
    #[error("statement limit of {limit} exceeded")]
    StatementLimit { limit: usize },
    /// More lines were printed than `Limits::max_output_lines`.
    #[error("output limit of {limit} lines exceeded")]
    OutputLimit { limit: usize },
    /// An array construction asked for more than `Limits::max_array_len` slots.
    #[error("array of length {len} exceeds the limit of {limit}")]
    ArrayTooLarge { len: usize, limit: usize },
}

/// Result alias for engine operations.
pub type SimResult<T> = Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            SimError::StatementLimit { limit: 3 }.to_string(),
            "statement limit of 3 exceeded"
        );
        assert_eq!(
            SimError::OutputLimit { limit: 10 }.to_string(),
            "output limit of 10 lines exceeded"
        );
        assert_eq!(
            SimError::ArrayTooLarge { len: 500, limit: 100 }.to_string(),
            "array of length 500 exceeds the limit of 100"
        );
    }
}
