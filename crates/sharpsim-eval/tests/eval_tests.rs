//! Integration tests for the sharpsim line driver.
//!
//! Tests key engine features:
//! - printing literals, variables and expressions
//! - bindings: declare, assign, compound assignment, increment
//! - pseudo-objects and canned methods
//! - pseudo-arrays
//! - noise filtering and skipped statements
//! - limits
//! - determinism

use sharpsim_eval::{run, Driver, Limits, RunReport, SimError};
use sharpsim_types::EMPTY_RUN_SENTINEL;
use std::time::{Duration, Instant};

// ══════════════════════════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════════════════════════

/// Run with default limits and return the rendered output.
fn output(source: &str) -> String {
    report(source).output()
}

fn report(source: &str) -> RunReport {
    run(source).expect("run failed")
}

fn limited(limits: Limits, source: &str) -> Result<RunReport, SimError> {
    Driver::new(limits).run(source)
}

// ══════════════════════════════════════════════════════════════════════════════
// Printing
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_literal_lines_join_with_newline() {
    let source = r#"
Console.WriteLine("Hello, World!");
Console.WriteLine("Welcome to C#");
"#;
    assert_eq!(output(source), "Hello, World!\nWelcome to C#");
}

#[test]
fn test_write_behaves_like_write_line() {
    assert_eq!(output(r#"Console.Write("a"); Console.Write("b");"#), "a\nb");
}

#[test]
fn test_empty_write_line_prints_blank_line() {
    let source = r#"
Console.WriteLine("top");
Console.WriteLine();
Console.WriteLine("bottom");
"#;
    assert_eq!(output(source), "top\n\nbottom");
}

#[test]
fn test_no_output_gives_sentinel() {
    assert_eq!(output("int x = 5;"), EMPTY_RUN_SENTINEL);
    assert_eq!(output(""), EMPTY_RUN_SENTINEL);
}

#[test]
fn test_arithmetic_output() {
    let source = r#"
int num1 = 15;
int num2 = 4;
Console.WriteLine(num1 + num2);
Console.WriteLine(num1 * num2);
Console.WriteLine(num1 - num2);
Console.WriteLine(num1 / num2);
"#;
    assert_eq!(output(source), "19\n60\n11\n3.75");
}

#[test]
fn test_interpolation() {
    let source = r#"
string name = "Ahmed";
int age = 20;
Console.WriteLine($"Name: {name}, Age: {age}");
"#;
    assert_eq!(output(source), "Name: Ahmed, Age: 20");
}

#[test]
fn test_concatenation() {
    let source = r#"
string first = "Sara";
int score = 90;
Console.WriteLine("Student: " + first + ", score " + score);
"#;
    assert_eq!(output(source), "Student: Sara, score 90");
}

#[test]
fn test_unresolvable_expression_prints_itself() {
    assert_eq!(output("Console.WriteLine(Math.Max(3, 7));"), "Math.Max(3, 7)");
}

#[test]
fn test_bool_declaration() {
    let source = r#"
bool isReady = true;
Console.WriteLine(isReady);
"#;
    assert_eq!(output(source), "true");
}

// ══════════════════════════════════════════════════════════════════════════════
// Bindings
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_copy_then_reassign_is_independent() {
    let source = r#"
int a = 5;
int b = a;
b = 10;
Console.WriteLine(a);
Console.WriteLine(b);
"#;
    assert_eq!(output(source), "5\n10");
}

#[test]
fn test_assign_to_undeclared_name_is_ignored() {
    let source = r#"
total = 5;
Console.WriteLine(total);
"#;
    assert_eq!(output(source), "total");
}

#[test]
fn test_redeclaration_overwrites() {
    assert_eq!(
        output("int x = 1; int x = 2; Console.WriteLine(x);"),
        "2"
    );
}

#[test]
fn test_compound_assignment_and_increment() {
    let source = r#"
int count = 10;
count += 5;
count -= 3;
count *= 2;
count /= 4;
count++;
++count;
count--;
Console.WriteLine(count);
"#;
    assert_eq!(output(source), "7");
}

#[test]
fn test_string_append() {
    let source = r#"
string msg = "Hello";
msg += ", World";
msg += "!";
Console.WriteLine(msg);
"#;
    assert_eq!(output(source), "Hello, World!");
}

#[test]
fn test_increment_of_string_is_noop() {
    let source = r#"
string s = "x";
s++;
Console.WriteLine(s);
"#;
    assert_eq!(output(source), "x");
}

// ══════════════════════════════════════════════════════════════════════════════
// Objects
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_objects_keep_independent_fields() {
    let source = r#"
Car car1 = new Car();
Car car2 = new Car();
car1.color = "Red";
car2.color = "Blue";
Console.WriteLine(car1.color);
Console.WriteLine(car2.color);
"#;
    assert_eq!(output(source), "Red\nBlue");
}

#[test]
fn test_field_on_unknown_object_is_ignored() {
    let source = r#"
ghost.color = "Red";
Console.WriteLine(ghost.color);
"#;
    assert_eq!(output(source), "ghost.color");
}

#[test]
fn test_canned_methods() {
    let source = r#"
Dog myDog = new Dog();
myDog.name = "Rex";
myDog.Run();
myDog.Speak();
myDog.sound = "Woof!";
myDog.Speak();
Player p = new Player();
p.Shoot();
p.Dance();
"#;
    assert_eq!(
        output(source),
        "Rex is running.\nRex speaks.\nWoof!\nPlayer is shooting."
    );
}

#[test]
fn test_method_on_unknown_object_is_ignored() {
    assert_eq!(output("nobody.Run();"), EMPTY_RUN_SENTINEL);
}

// ══════════════════════════════════════════════════════════════════════════════
// Arrays
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_array_round_trip() {
    let source = r#"
int[] numbers = new int[3];
numbers[1] = 20;
Console.WriteLine(numbers[1]);
"#;
    assert_eq!(output(source), "20");
}

#[test]
fn test_unset_slot_prints_null() {
    let source = r#"
string[] names = new string[2];
Console.WriteLine(names[0]);
"#;
    assert_eq!(output(source), "null");
}

#[test]
fn test_out_of_range_is_ignored() {
    let source = r#"
int[] n = new int[2];
n[5] = 1;
Console.WriteLine(n[5]);
Console.WriteLine("done");
"#;
    assert_eq!(output(source), "done");
}

#[test]
fn test_initializer_and_computed_index() {
    let source = r#"
int[] n = { 10, 20, 30 };
int i = 1;
n[i + 1] = n[0] + n[1];
Console.WriteLine(n[2]);
Console.WriteLine(n[i]);
"#;
    assert_eq!(output(source), "30\n20");
}

#[test]
fn test_new_array_initializer() {
    let source = r#"
string[] fruits = new string[] { "Apple", "Banana" };
Console.WriteLine(fruits[1]);
"#;
    assert_eq!(output(source), "Banana");
}

// ══════════════════════════════════════════════════════════════════════════════
// Noise & skipped statements
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_full_program_scaffolding_is_ignored() {
    let source = r#"
using System;

namespace Lessons
{
    /* Entry point
     * prints a greeting
     */
    class Program
    {
        static void Main(string[] args)
        {
            // greet
            Console.WriteLine("Hi");
        }
    }
}
"#;
    let report = report(source);
    assert_eq!(report.output(), "Hi");
    assert!(report.skipped.is_empty(), "{:?}", report.skipped);
}

#[test]
fn test_unrecognized_statements_are_recorded() {
    let source = r#"
int x = 1;
for (int i = 0; i < 3; i++)
Console.WriteLine(x);
x = x % 2; Console.WriteLine("end");
"#;
    let report = report(source);
    assert_eq!(report.output(), "1\nend");
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].line, 3);
    assert_eq!(report.skipped[0].text, "for (int i = 0; i < 3; i++)");
}

#[test]
fn test_assignment_with_unresolvable_value_stores_text() {
    let source = r#"
int x = 1;
x = x % 2;
Console.WriteLine(x);
"#;
    assert_eq!(output(source), "x % 2");
}

#[test]
fn test_unterminated_string_line_is_skipped() {
    let source = r#"
Console.WriteLine("broken);
Console.WriteLine("fine");
"#;
    let report = report(source);
    assert_eq!(report.output(), "fine");
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].line, 2);
}

#[test]
fn test_block_body_lines_still_run() {
    let source = r#"
if (true)
{
    Console.WriteLine("inside");
}
"#;
    assert_eq!(output(source), "inside");
}

#[test]
fn test_one_line_block_body_runs() {
    let report = report(r#"{ Console.WriteLine("Hi"); Console.WriteLine("there"); }"#);
    assert_eq!(report.output(), "Hi\nthere");
    assert!(report.skipped.is_empty(), "{:?}", report.skipped);
}

#[test]
fn test_braces_sharing_a_line_are_not_skipped_statements() {
    let source = "Console.WriteLine(\"a\"); } // end";
    let report = report(source);
    assert_eq!(report.output(), "a");
    assert!(report.skipped.is_empty(), "{:?}", report.skipped);
}

#[test]
fn test_deeply_nested_missing_index_prints_itself() {
    let nested = (0..40).fold("9".to_string(), |inner, _| format!("n[{inner}]"));
    let source = format!("int[] n = new int[2];\nConsole.WriteLine({nested} + 1);");
    let start = Instant::now();
    assert_eq!(output(&source), format!("{nested} + 1"));
    assert!(start.elapsed() < Duration::from_secs(2));
}

// ══════════════════════════════════════════════════════════════════════════════
// Limits
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_statement_limit() {
    let limits = Limits {
        max_statements: 3,
        ..Limits::default()
    };
    let source = "int a = 1;\na++;\na++;\na++;";
    assert_eq!(
        limited(limits, source),
        Err(SimError::StatementLimit { limit: 3 })
    );
}

#[test]
fn test_output_limit() {
    let limits = Limits {
        max_output_lines: 2,
        ..Limits::default()
    };
    let source = "Console.WriteLine(1); Console.WriteLine(2); Console.WriteLine(3);";
    assert_eq!(
        limited(limits, source),
        Err(SimError::OutputLimit { limit: 2 })
    );
}

#[test]
fn test_array_limit() {
    assert_eq!(
        run("int[] huge = new int[1000000];"),
        Err(SimError::ArrayTooLarge {
            len: 1_000_000,
            limit: Limits::DEFAULT_MAX_ARRAY_LEN,
        })
    );
}

#[test]
fn test_skipped_statements_do_not_use_budget() {
    let limits = Limits {
        max_statements: 1,
        ..Limits::default()
    };
    let source = "while (true)\nConsole.WriteLine(\"once\");";
    let report = limited(limits, source).unwrap();
    assert_eq!(report.output(), "once");
    assert_eq!(report.statements, 1);
}

#[test]
fn test_limits_from_partial_json() {
    let limits: Limits = serde_json::from_str(r#"{"max_statements": 5}"#).unwrap();
    assert_eq!(limits.max_statements, 5);
    assert_eq!(limits.max_output_lines, Limits::DEFAULT_MAX_OUTPUT_LINES);
}

// ══════════════════════════════════════════════════════════════════════════════
// Determinism
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_run_determinism_100_iterations() {
    let source = r#"
Car c = new Car();
c.name = "Bolt";
int[] laps = { 3, 4 };
int total = laps[0] + laps[1];
Console.WriteLine($"{c.name} ran {total} laps");
c.Run();
"#;
    let first = report(source);
    assert_eq!(first.output(), "Bolt ran 7 laps\nBolt is running.");
    for i in 0..100 {
        assert_eq!(first, report(source), "Determinism failure at iteration {i}");
    }
}
