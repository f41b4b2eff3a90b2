use serde::{Deserialize, Serialize};
use std::fmt;

/// Output shown when a run printed nothing.
pub const EMPTY_RUN_SENTINEL: &str = "// Code executed successfully (no output)";

/// What a caller gets back from one simulated run.
///
/// Serializes with the field names UI callers expect:
/// `{"success":true,"output":"...","executionTimeMs":503.2}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    pub success: bool,
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub execution_time_ms: f64,
}

impl ExecutionResult {
    /// A successful run.
    pub fn ok(output: impl Into<String>, execution_time_ms: f64) -> Self {
        Self {
            success: true,
            output: output.into(),
            error: None,
            execution_time_ms,
        }
    }

    /// A failed run. Any partial output is discarded.
    pub fn failed(error: impl Into<String>, execution_time_ms: f64) -> Self {
        Self {
            success: false,
            output: String::new(),
            error: Some(error.into()),
            execution_time_ms,
        }
    }
}

/// A statement the classifier did not recognize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    /// 1-based line number.
    pub line: u32,
    pub text: String,
}

impl fmt::Display for SkippedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.text)
    }
}
