//! sharpsim: simulated execution of C#-style teaching snippets.
//!
//! ```text
//! Source → Noise filter → Lexer → Classifier → Handlers → Output → ExecutionResult
//! ```
//!
//! [`simulate`] is the pure synchronous entry point. [`execute`] shapes the
//! outcome into an [`ExecutionResult`], and [`run_code`] (feature `async`,
//! on by default) awaits the configured latency first, the way an online
//! compiler would feel.

mod options;
pub mod reference;

pub use options::SimulatorOptions;
pub use sharpsim_eval::{Driver, Limits, RunReport, SimError};
pub use sharpsim_types::{ExecutionResult, SkippedLine, EMPTY_RUN_SENTINEL};

use std::time::Instant;
use tracing::info;

/// Simulate `source` with the default limits and return its console output.
///
/// A run that prints nothing yields [`EMPTY_RUN_SENTINEL`].
pub fn simulate(source: &str) -> Result<String, SimError> {
    Driver::default().run(source).map(|report| report.output())
}

/// Run `source` under `options.limits`, keeping skipped statements.
pub fn run_report(source: &str, options: &SimulatorOptions) -> Result<RunReport, SimError> {
    Driver::new(options.limits).run(source)
}

/// Turn a driver outcome into the caller-facing result.
pub fn shape_result(outcome: Result<RunReport, SimError>, execution_time_ms: f64) -> ExecutionResult {
    match outcome {
        Ok(report) => ExecutionResult::ok(report.output(), execution_time_ms),
        Err(err) => ExecutionResult::failed(err.to_string(), execution_time_ms),
    }
}

/// Run `source` without simulated latency.
pub fn execute(source: &str, options: &SimulatorOptions) -> ExecutionResult {
    let start = Instant::now();
    let outcome = run_report(source, options);
    let result = shape_result(outcome, elapsed_ms(start.elapsed()));
    info!(
        success = result.success,
        elapsed_ms = result.execution_time_ms,
        "execution complete"
    );
    result
}

/// Await the simulated latency, then run `source`.
///
/// The reported time covers the wait and the run.
#[cfg(feature = "async")]
pub async fn run_code(source: &str, options: &SimulatorOptions) -> ExecutionResult {
    run_code_with_skipped(source, options).await.0
}

/// [`run_code`], also returning the statements the run skipped.
///
/// A run that hit a limit reports no skipped statements.
#[cfg(feature = "async")]
pub async fn run_code_with_skipped(
    source: &str,
    options: &SimulatorOptions,
) -> (ExecutionResult, Vec<SkippedLine>) {
    let start = tokio::time::Instant::now();
    tokio::time::sleep(options.latency()).await;
    let (outcome, skipped) = match run_report(source, options) {
        Ok(mut report) => {
            let skipped = std::mem::take(&mut report.skipped);
            (Ok(report), skipped)
        }
        Err(err) => (Err(err), Vec::new()),
    };
    let result = shape_result(outcome, elapsed_ms(start.elapsed()));
    info!(
        success = result.success,
        elapsed_ms = result.execution_time_ms,
        skipped = skipped.len(),
        "execution complete"
    );
    (result, skipped)
}

fn elapsed_ms(elapsed: std::time::Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0
}
