//! Execution driver: walks the source line by line.

use sharpsim_lexer::Lexer;
use sharpsim_parser::{classify, source_text, split_statements};
use sharpsim_types::{SkippedLine, SourceFile, SourceLine};
use tracing::{debug, trace, warn};

use crate::error::SimResult;
use crate::exec::Executor;
use crate::limits::Limits;
use crate::output::render_output;

/// Modifiers that may precede a class declaration or method signature.
const MODIFIERS: &[&str] = &[
    "public",
    "private",
    "protected",
    "internal",
    "static",
    "abstract",
    "sealed",
    "partial",
];

/// Keywords that open a method signature when they start a line.
const SIGNATURE_STARTS: &[&str] = &["public", "private", "protected", "internal", "static"];

/// What one run produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    /// Printed lines, in order.
    pub lines: Vec<String>,
    /// Statements that matched no supported shape.
    pub skipped: Vec<SkippedLine>,
    /// Statements executed.
    pub statements: usize,
}

impl RunReport {
    /// The console text: lines joined with `\n`, or the empty-run sentinel.
    pub fn output(&self) -> String {
        render_output(&self.lines)
    }
}

/// Runs source text under a fixed set of limits.
#[derive(Debug, Clone, Default)]
pub struct Driver {
    limits: Limits,
}

impl Driver {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn run(&self, source: &str) -> SimResult<RunReport> {
        let file = SourceFile::new(source);
        let _span = tracing::debug_span!("run", lines = file.line_count()).entered();

        let mut exec = Executor::new(self.limits);
        let mut skipped = Vec::new();
        for line in file.lines().filter(|line| !is_noise(line.text)) {
            self.run_line(&mut exec, line, &mut skipped)
                .inspect_err(|err| warn!(line = line.number, %err, "run aborted"))?;
        }

        debug!(
            statements = exec.executed(),
            printed = exec.output.len(),
            skipped = skipped.len(),
            "run finished"
        );
        Ok(RunReport {
            statements: exec.executed(),
            lines: exec.output.into_lines(),
            skipped,
        })
    }

    fn run_line(
        &self,
        exec: &mut Executor,
        line: SourceLine<'_>,
        skipped: &mut Vec<SkippedLine>,
    ) -> SimResult<()> {
        let tokens = match Lexer::new(line.text).lex() {
            Ok(tokens) => tokens,
            Err(err) => {
                debug!(line = line.number, %err, "skipping line that does not lex");
                skipped.push(SkippedLine {
                    line: line.number,
                    text: line.text.to_string(),
                });
                return Ok(());
            }
        };

        for run in split_statements(&tokens) {
            let statement = classify(run, line.text);
            if !statement.is_recognized() {
                let text = source_text(run, line.text);
                debug!(line = line.number, text, "skipping unrecognized statement");
                skipped.push(SkippedLine {
                    line: line.number,
                    text: text.to_string(),
                });
                continue;
            }
            trace!(line = line.number, kind = statement.kind(), "execute");
            exec.execute(&statement)?;
        }
        Ok(())
    }
}

/// Run `source` with the default limits.
pub fn run(source: &str) -> SimResult<RunReport> {
    Driver::default().run(source)
}

// ── Noise filter ──────────────────────────────────────────────────────────────

/// Lines that never produce output or state: blanks, comments, lone braces,
/// `using` / `namespace`, class declarations and method signatures.
pub fn is_noise(line: &str) -> bool {
    if line.is_empty()
        || line.starts_with("//")
        || line.starts_with("/*")
        || line.starts_with('*')
        || matches!(line, "{" | "}" | "};")
    {
        return true;
    }

    let first = line.split_whitespace().next().unwrap_or_default();
    if first == "using" || first == "namespace" {
        return true;
    }
    if is_class_declaration(line) {
        return true;
    }
    SIGNATURE_STARTS.contains(&first) && line.contains('(') && !line.contains('=')
}

fn is_class_declaration(line: &str) -> bool {
    line.split_whitespace()
        .find(|word| !MODIFIERS.contains(word))
        .is_some_and(|word| word == "class")
}
