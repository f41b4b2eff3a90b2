//! sharpsim as a WASM module for browser environments.
//!
//! This crate exposes the simulator via `wasm-bindgen`, suitable for running
//! in a browser Web Worker. The simulated latency is left to the page, which
//! already owns the event loop.
//!
//! # Usage (JavaScript)
//!
//! ```js
//! import init, { execute } from 'sharpsim-wasm';
//!
//! await init();
//!
//! const result = execute('Console.WriteLine("Hi");');
//! // { success: true, output: "Hi", executionTimeMs: 0.1 }
//! ```

use sharpsim::{ExecutionResult, SimulatorOptions};
use wasm_bindgen::prelude::*;

/// Simulate a snippet and return its console output.
///
/// If the run hits a limit, the error message is returned instead.
#[wasm_bindgen]
pub fn simulate(source: &str) -> String {
    sharpsim::simulate(source).unwrap_or_else(|err| err.to_string())
}

/// Simulate a snippet and return an `ExecutionResult` object:
/// `{ success, output, error?, executionTimeMs }`.
#[wasm_bindgen]
pub fn execute(source: &str) -> Result<JsValue, JsValue> {
    let result = timed_execute(source, &SimulatorOptions::immediate());
    serde_wasm_bindgen::to_value(&result).map_err(JsValue::from)
}

/// Like [`execute`], but with options given as JSON and the result returned
/// as a JSON string.
///
/// Unknown or missing option fields fall back to their defaults.
#[wasm_bindgen]
pub fn execute_json(source: &str, options_json: &str) -> String {
    let options = match serde_json::from_str::<SimulatorOptions>(options_json) {
        Ok(options) => options,
        Err(e) => {
            let failed = ExecutionResult::failed(format!("invalid options: {e}"), 0.0);
            return to_json(&failed);
        }
    };
    to_json(&timed_execute(source, &options))
}

/// Return the simulator version string.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Return the reference sheet of supported statement shapes.
#[wasm_bindgen]
pub fn reference() -> String {
    sharpsim::reference::supported_statements()
}

/// `std::time::Instant` is unavailable on `wasm32-unknown-unknown`, so the
/// run is timed with the JS clock.
fn timed_execute(source: &str, options: &SimulatorOptions) -> ExecutionResult {
    let start = js_sys::Date::now();
    let outcome = sharpsim::run_report(source, options);
    sharpsim::shape_result(outcome, js_sys::Date::now() - start)
}

fn to_json(result: &ExecutionResult) -> String {
    serde_json::to_string(result).unwrap_or_else(|e| {
        format!(
            r#"{{"success":false,"output":"","error":"Serialization error: {}","executionTimeMs":0}}"#,
            e
        )
    })
}
