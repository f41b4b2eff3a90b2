//! Statement variants produced by the classifier and the arithmetic tree
//! evaluated by the expression evaluator.

use std::fmt;

// ══════════════════════════════════════════════════════════════════════════════
// Expressions
// ══════════════════════════════════════════════════════════════════════════════

/// An unevaluated right-hand side, kept as source text.
///
/// The evaluator re-lexes the text on demand. An expression that does not
/// resolve prints this text unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    pub text: String,
}

impl Expr {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into().trim().to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The four arithmetic operators; also the operator of a compound assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithOp {
    /// Apply with IEEE-754 semantics (`x / 0` is an infinity, not an error).
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}

/// Parsed arithmetic after identifier substitution.
#[derive(Debug, Clone, PartialEq)]
pub enum ArithExpr {
    Number(f64),
    Neg(Box<ArithExpr>),
    Binary {
        left: Box<ArithExpr>,
        op: ArithOp,
        right: Box<ArithExpr>,
    },
}

impl ArithExpr {
    pub fn binary(left: ArithExpr, op: ArithOp, right: ArithExpr) -> Self {
        Self::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Fold the tree to a number.
    pub fn eval(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Neg(inner) => -inner.eval(),
            Self::Binary { left, op, right } => op.apply(left.eval(), right.eval()),
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Statements
// ══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncDecOp {
    Increment,
    Decrement,
}

impl IncDecOp {
    pub fn delta(self) -> f64 {
        match self {
            Self::Increment => 1.0,
            Self::Decrement => -1.0,
        }
    }
}

/// How a new array gets its slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayInit {
    /// `new int[N]`: N empty slots.
    Sized(Expr),
    /// `new int[] { a, b }` or `{ a, b }`: one slot per item.
    Items(Vec<Expr>),
}

/// One classified statement. Every recognized shape has its own variant
/// carrying only the pieces its handler needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `Console.WriteLine(expr)` / `Console.Write(expr)`; `None` for `()`.
    Print { expr: Option<Expr> },
    /// `Console.WriteLine(arr[2])`
    ArrayPrint { array: String, index: usize },
    /// `int x = expr;`
    Declare { name: String, expr: Expr },
    /// `x = expr;`
    Assign { name: String, expr: Expr },
    /// `x += expr;`
    CompoundAssign {
        name: String,
        op: ArithOp,
        expr: Expr,
    },
    /// `x++;` / `--x;`
    IncDec { name: String, op: IncDecOp },
    /// `Car c = new Car(...);`
    ObjectConstruct { name: String, class_name: String },
    /// `c.color = expr;`
    FieldAssign {
        object: String,
        field: String,
        expr: Expr,
    },
    /// `c.Run();`
    MethodCall { object: String, method: String },
    /// `int[] n = new int[3];`
    ArrayConstruct { name: String, init: ArrayInit },
    /// `n[i] = expr;`
    ArrayAssign {
        array: String,
        index: Expr,
        expr: Expr,
    },
    /// Anything outside the supported subset.
    Unrecognized,
}

impl Statement {
    /// Short variant name, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Print { .. } => "print",
            Self::ArrayPrint { .. } => "array_print",
            Self::Declare { .. } => "declare",
            Self::Assign { .. } => "assign",
            Self::CompoundAssign { .. } => "compound_assign",
            Self::IncDec { .. } => "inc_dec",
            Self::ObjectConstruct { .. } => "object_construct",
            Self::FieldAssign { .. } => "field_assign",
            Self::MethodCall { .. } => "method_call",
            Self::ArrayConstruct { .. } => "array_construct",
            Self::ArrayAssign { .. } => "array_assign",
            Self::Unrecognized => "unrecognized",
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized)
    }
}
