use serde::{Deserialize, Serialize};

/// Per-run resource caps.
///
/// Missing fields fall back to the defaults when deserialized, so a config
/// file only needs to name the limits it changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Statements executed before the run is aborted.
    pub max_statements: usize,
    /// Lines the output buffer accepts.
    pub max_output_lines: usize,
    /// Largest array a construction may create.
    pub max_array_len: usize,
}

impl Limits {
    pub const DEFAULT_MAX_STATEMENTS: usize = 10_000;
    pub const DEFAULT_MAX_OUTPUT_LINES: usize = 10_000;
    pub const DEFAULT_MAX_ARRAY_LEN: usize = 100_000;
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_statements: Self::DEFAULT_MAX_STATEMENTS,
            max_output_lines: Self::DEFAULT_MAX_OUTPUT_LINES,
            max_array_len: Self::DEFAULT_MAX_ARRAY_LEN,
        }
    }
}
