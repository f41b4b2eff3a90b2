//! Machine-generated reference sheet of the supported subset.
//!
//! The type list, print methods and canned methods come from the tables the
//! classifier and handlers use, so the sheet cannot drift from the engine.

use sharpsim_eval::CANNED_METHODS;
use sharpsim_parser::{CONSOLE_WRITERS, DECLARATION_TYPES};

/// Build the reference sheet listing every recognized statement shape.
pub fn supported_statements() -> String {
    let mut out = String::with_capacity(2048);
    out.push_str(REFERENCE_PREAMBLE);

    out.push_str("PRINTING:\n");
    for writer in CONSOLE_WRITERS {
        out.push_str(&format!("  Console.{writer}(expr)\n"));
    }
    out.push_str("  Console.WriteLine()                    // blank line\n");
    out.push_str("  Console.WriteLine(arr[0])              // unset slot prints null\n\n");

    out.push_str(&format!(
        "DECLARATIONS: {}\n",
        DECLARATION_TYPES.join(", ")
    ));
    out.push_str("  int x = expr;\n\n");

    out.push_str(REFERENCE_BODY);

    out.push_str("CANNED METHODS (label = `name` field, else class name):\n");
    for method in CANNED_METHODS {
        let effect = match *method {
            "Run" => "prints \"<label> is running.\"",
            "Shoot" => "prints \"<label> is shooting.\"",
            "Speak" => "prints the `sound` field, else \"<label> speaks.\"",
            _ => "",
        };
        out.push_str(&format!("  obj.{method}()  {effect}\n"));
    }
    out.push('\n');

    out.push_str(REFERENCE_POSTAMBLE);
    out
}

const REFERENCE_PREAMBLE: &str = r#"sharpsim: simulated console output for C#-style teaching snippets.
Nothing is compiled. Each line is matched against the shapes below; other
lines are skipped silently. Several statements may share a line.

"#;

const REFERENCE_BODY: &str = r#"ASSIGNMENT:
  x = expr;                               // only if x was declared
  x += expr;  x -= expr;  x *= expr;  x /= expr;
  x++;  x--;  ++x;  --x;
  str += expr;                            // appends

OBJECTS:
  Car c = new Car(args);                  // args ignored; var allowed
  c.field = expr;

ARRAYS:
  int[] n = new int[3];
  int[] n = new int[] { 1, 2 };
  int[] n = { 1, 2 };
  n[i] = expr;                            // index may be an expression

"#;

const REFERENCE_POSTAMBLE: &str = r#"EXPRESSIONS (first rule that applies):
  "text"  'c'  true  false               // escapes are not processed
  $"Hi {name} {obj.field} {arr[0]}"       // unresolved {..} kept as written
  name  obj.field  arr[i]
  + - * / ( )  over numbers               // floating point, no truncation
  a + b                                   // concatenates unless both numbers
  anything else prints its own source text

IGNORED: using, namespace, class and method headers, braces, comments.
NOT SIMULATED: loops, branches, method bodies, casts, % and comparisons.
"#;
