use sharpsim_types::EMPTY_RUN_SENTINEL;

use crate::error::{SimError, SimResult};

/// Append-only console output of one run.
#[derive(Debug, Clone)]
pub struct OutputBuffer {
    lines: Vec<String>,
    max_lines: usize,
}

impl OutputBuffer {
    pub fn new(max_lines: usize) -> Self {
        Self {
            lines: Vec::new(),
            max_lines,
        }
    }

    /// Append one printed line.
    pub fn push(&mut self, line: impl Into<String>) -> SimResult<()> {
        if self.lines.len() >= self.max_lines {
            return Err(SimError::OutputLimit {
                limit: self.max_lines,
            });
        }
        self.lines.push(line.into());
        Ok(())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// Join printed lines with `\n`, or the empty-run sentinel if there are none.
pub fn render_output(lines: &[String]) -> String {
    if lines.is_empty() {
        EMPTY_RUN_SENTINEL.to_string()
    } else {
        lines.join("\n")
    }
}
