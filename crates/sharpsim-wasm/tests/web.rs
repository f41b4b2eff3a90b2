//! Browser tests, run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn execute_json_reports_output() {
    let json = sharpsim_wasm::execute_json("int a = 2; Console.WriteLine(a * 21);", "{}");
    assert!(json.contains(r#""success":true"#));
    assert!(json.contains(r#""output":"42""#));
}

#[wasm_bindgen_test]
fn execute_returns_object() {
    let value = sharpsim_wasm::execute(r#"Console.WriteLine("Hi");"#).unwrap();
    assert!(value.is_object());
}
