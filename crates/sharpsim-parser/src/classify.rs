//! Statement classifier.
//!
//! Maps the tokens of one statement to a [`Statement`] variant. Every shape
//! is anchored to the whole statement; the first shape that matches wins, in
//! this order:
//!
//! 1. `Console.WriteLine(arr[2])`
//! 2. `Console.WriteLine(expr)` / `Console.Write(expr)`
//! 3. `int[] n = new int[3]`, `new int[] { .. }`, `{ .. }`
//! 4. `Car c = new Car(..)`
//! 5. `int x = expr`
//! 6. `c.color = expr`
//! 7. `n[i] = expr`
//! 8. `x = expr`
//! 9. `x += expr`
//! 10. `x++` / `--x`
//! 11. `c.Run()`
//!
//! Anything else is [`Statement::Unrecognized`].

use sharpsim_lexer::token::{Token, TokenKind};
use sharpsim_types::ast::{ArithOp, ArrayInit, Expr, IncDecOp, Statement};
use sharpsim_types::to_index;

use crate::parser::{balanced, matching_close, split_top_level};

/// Type names accepted on the left of a scalar declaration.
pub const DECLARATION_TYPES: &[&str] = &["int", "string", "double", "float", "bool", "var"];

/// `Console` methods treated as a print.
pub const CONSOLE_WRITERS: &[&str] = &["WriteLine", "Write"];

/// Split a lexed line into statements at top-level `;`.
///
/// Block braces around the line are dropped first, so `{ a(); b(); }`
/// splits the same way as its lines would on their own. Empty runs (`;;`,
/// a trailing `;`) are dropped.
pub fn split_statements(tokens: &[Token]) -> Vec<&[Token]> {
    split_top_level(strip_block_braces(tokens), &TokenKind::Semicolon)
        .into_iter()
        .map(strip_leading_braces)
        .filter(|part| !part.is_empty())
        .collect()
}

fn is_brace(token: &Token) -> bool {
    matches!(token.kind, TokenKind::LBrace | TokenKind::RBrace)
}

fn strip_leading_braces(tokens: &[Token]) -> &[Token] {
    let start = tokens.iter().take_while(|t| is_brace(t)).count();
    &tokens[start..]
}

/// Drop leading braces, and trailing braces that follow a `;`. A brace
/// closing an initializer (`= { 1, 2 }`) is kept.
fn strip_block_braces(tokens: &[Token]) -> &[Token] {
    let mut tokens = strip_leading_braces(tokens);
    let body = tokens.len() - tokens.iter().rev().take_while(|t| is_brace(t)).count();
    if body < tokens.len()
        && body > 0
        && matches!(tokens[body - 1].kind, TokenKind::Semicolon)
    {
        tokens = &tokens[..body];
    }
    tokens
}

/// Classify one statement.
///
/// `line` is the text the tokens were lexed from; expression pieces are
/// recovered from it by span so they keep their original spelling.
pub fn classify(tokens: &[Token], line: &str) -> Statement {
    let tokens = strip_trailing_semicolons(tokens);
    classify_console(tokens, line)
        .or_else(|| classify_array_construct(tokens, line))
        .or_else(|| classify_object_construct(tokens))
        .or_else(|| classify_declare(tokens, line))
        .or_else(|| classify_field_assign(tokens, line))
        .or_else(|| classify_array_assign(tokens, line))
        .or_else(|| classify_assign(tokens, line))
        .or_else(|| classify_compound(tokens, line))
        .or_else(|| classify_inc_dec(tokens))
        .or_else(|| classify_method_call(tokens))
        .unwrap_or(Statement::Unrecognized)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn strip_trailing_semicolons(mut tokens: &[Token]) -> &[Token] {
    while let [rest @ .., last] = tokens {
        if !matches!(last.kind, TokenKind::Semicolon) {
            break;
        }
        tokens = rest;
    }
    tokens
}

/// The source text covered by a token run.
pub fn source_text<'l>(tokens: &[Token], line: &'l str) -> &'l str {
    match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => first.span.merge(last.span).slice(line),
        _ => "",
    }
}

/// A non-empty, bracket-balanced token run as an expression.
fn expr_of(tokens: &[Token], line: &str) -> Option<Expr> {
    (!tokens.is_empty() && balanced(tokens)).then(|| Expr::new(source_text(tokens, line)))
}

fn ident(token: &Token) -> Option<String> {
    token.ident().map(str::to_string)
}

/// `true` if the bracket opened at `open` closes on the last token.
fn closes_at_end(tokens: &[Token], open: usize) -> bool {
    matching_close(tokens, open) == Some(tokens.len() - 1)
}

/// Comma-separated initializer items. A single trailing comma is allowed.
fn list_items(tokens: &[Token], line: &str) -> Option<Vec<Expr>> {
    if tokens.is_empty() {
        return Some(Vec::new());
    }
    let mut parts = split_top_level(tokens, &TokenKind::Comma);
    if parts.len() > 1 && parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    parts.into_iter().map(|part| expr_of(part, line)).collect()
}

// ── Console ───────────────────────────────────────────────────────────────────

fn classify_console(tokens: &[Token], line: &str) -> Option<Statement> {
    let [console, dot, writer, open, .., _close] = tokens else {
        return None;
    };
    if !console.is_ident("Console")
        || !matches!(dot.kind, TokenKind::Dot)
        || !writer.ident().is_some_and(|w| CONSOLE_WRITERS.contains(&w))
        || !matches!(open.kind, TokenKind::LParen)
        || !closes_at_end(tokens, 3)
    {
        return None;
    }

    let args = &tokens[4..tokens.len() - 1];
    if args.is_empty() {
        return Some(Statement::Print { expr: None });
    }
    if let [array, lb, index, rb] = args {
        if let (Some(array), TokenKind::LBracket, TokenKind::NumberLit(n), TokenKind::RBracket) =
            (array.ident(), &lb.kind, &index.kind, &rb.kind)
        {
            if let Some(index) = to_index(*n) {
                return Some(Statement::ArrayPrint {
                    array: array.to_string(),
                    index,
                });
            }
        }
    }
    Some(Statement::Print {
        expr: Some(expr_of(args, line)?),
    })
}

// ── Construction ──────────────────────────────────────────────────────────────

fn classify_array_construct(tokens: &[Token], line: &str) -> Option<Statement> {
    let (name, value, typed) = match tokens {
        [ty, lb, rb, name, eq, value @ ..]
            if ty.ident().is_some()
                && matches!(lb.kind, TokenKind::LBracket)
                && matches!(rb.kind, TokenKind::RBracket)
                && matches!(eq.kind, TokenKind::Eq) =>
        {
            (ident(name)?, value, true)
        }
        [var, name, eq, value @ ..] if var.is_ident("var") && matches!(eq.kind, TokenKind::Eq) => {
            (ident(name)?, value, false)
        }
        _ => return None,
    };

    let init = match value {
        // new T[] { a, b }
        [new, ty, lb, rb, lbrace, .., _]
            if matches!(new.kind, TokenKind::New)
                && ty.ident().is_some()
                && matches!(lb.kind, TokenKind::LBracket)
                && matches!(rb.kind, TokenKind::RBracket)
                && matches!(lbrace.kind, TokenKind::LBrace)
                && closes_at_end(value, 4) =>
        {
            ArrayInit::Items(list_items(&value[5..value.len() - 1], line)?)
        }
        // new T[N]
        [new, ty, lb, .., _]
            if matches!(new.kind, TokenKind::New)
                && ty.ident().is_some()
                && matches!(lb.kind, TokenKind::LBracket)
                && closes_at_end(value, 2) =>
        {
            ArrayInit::Sized(expr_of(&value[3..value.len() - 1], line)?)
        }
        // { a, b }
        [lbrace, .., _] if typed && matches!(lbrace.kind, TokenKind::LBrace) && closes_at_end(value, 0) => {
            ArrayInit::Items(list_items(&value[1..value.len() - 1], line)?)
        }
        _ => return None,
    };
    Some(Statement::ArrayConstruct { name, init })
}

fn classify_object_construct(tokens: &[Token]) -> Option<Statement> {
    let [ty, name, eq, new, class, open, .., _close] = tokens else {
        return None;
    };
    let matched = ty.ident().is_some()
        && matches!(eq.kind, TokenKind::Eq)
        && matches!(new.kind, TokenKind::New)
        && matches!(open.kind, TokenKind::LParen)
        && closes_at_end(tokens, 5);
    if !matched {
        return None;
    }
    Some(Statement::ObjectConstruct {
        name: ident(name)?,
        class_name: ident(class)?,
    })
}

// ── Assignment ────────────────────────────────────────────────────────────────

fn classify_declare(tokens: &[Token], line: &str) -> Option<Statement> {
    let [ty, name, eq, value @ ..] = tokens else {
        return None;
    };
    if !ty.ident().is_some_and(|t| DECLARATION_TYPES.contains(&t))
        || !matches!(eq.kind, TokenKind::Eq)
        || value.first().is_some_and(|t| matches!(t.kind, TokenKind::LBrace))
        || split_top_level(value, &TokenKind::Comma).len() != 1
    {
        return None;
    }
    Some(Statement::Declare {
        name: ident(name)?,
        expr: expr_of(value, line)?,
    })
}

fn classify_field_assign(tokens: &[Token], line: &str) -> Option<Statement> {
    let [object, dot, field, eq, value @ ..] = tokens else {
        return None;
    };
    if !matches!(dot.kind, TokenKind::Dot) || !matches!(eq.kind, TokenKind::Eq) {
        return None;
    }
    Some(Statement::FieldAssign {
        object: ident(object)?,
        field: ident(field)?,
        expr: expr_of(value, line)?,
    })
}

fn classify_array_assign(tokens: &[Token], line: &str) -> Option<Statement> {
    let [array, lb, ..] = tokens else {
        return None;
    };
    if !matches!(lb.kind, TokenKind::LBracket) {
        return None;
    }
    let close = matching_close(tokens, 1)?;
    if !matches!(tokens.get(close + 1)?.kind, TokenKind::Eq) {
        return None;
    }
    Some(Statement::ArrayAssign {
        array: ident(array)?,
        index: expr_of(&tokens[2..close], line)?,
        expr: expr_of(&tokens[close + 2..], line)?,
    })
}

fn classify_assign(tokens: &[Token], line: &str) -> Option<Statement> {
    let [name, eq, value @ ..] = tokens else {
        return None;
    };
    if !matches!(eq.kind, TokenKind::Eq) || value.iter().any(|t| matches!(t.kind, TokenKind::New)) {
        return None;
    }
    Some(Statement::Assign {
        name: ident(name)?,
        expr: expr_of(value, line)?,
    })
}

fn classify_compound(tokens: &[Token], line: &str) -> Option<Statement> {
    let [name, op, value @ ..] = tokens else {
        return None;
    };
    let op = match op.kind {
        TokenKind::PlusEq => ArithOp::Add,
        TokenKind::MinusEq => ArithOp::Sub,
        TokenKind::StarEq => ArithOp::Mul,
        TokenKind::SlashEq => ArithOp::Div,
        _ => return None,
    };
    Some(Statement::CompoundAssign {
        name: ident(name)?,
        op,
        expr: expr_of(value, line)?,
    })
}

fn inc_dec_op(token: &Token) -> Option<IncDecOp> {
    match token.kind {
        TokenKind::PlusPlus => Some(IncDecOp::Increment),
        TokenKind::MinusMinus => Some(IncDecOp::Decrement),
        _ => None,
    }
}

fn classify_inc_dec(tokens: &[Token]) -> Option<Statement> {
    let (name, op) = match tokens {
        [name, op] if name.ident().is_some() => (name, inc_dec_op(op)?),
        [op, name] => (name, inc_dec_op(op)?),
        _ => return None,
    };
    Some(Statement::IncDec {
        name: ident(name)?,
        op,
    })
}

// ── Method calls ──────────────────────────────────────────────────────────────

fn classify_method_call(tokens: &[Token]) -> Option<Statement> {
    let [object, dot, method, open, .., _close] = tokens else {
        return None;
    };
    let matched = !object.is_ident("Console")
        && matches!(dot.kind, TokenKind::Dot)
        && matches!(open.kind, TokenKind::LParen)
        && closes_at_end(tokens, 3);
    if !matched {
        return None;
    }
    Some(Statement::MethodCall {
        object: ident(object)?,
        method: ident(method)?,
    })
}
