//! Expression evaluator.
//!
//! Resolves a right-hand side against the symbol table. Rules are tried in
//! order and the first that applies wins:
//!
//! 1. string, char and bool literals
//! 2. interpolated strings
//! 3. variable, field and array-element references
//! 4. arithmetic over numeric references
//! 5. `+` concatenation of independently resolved parts
//!
//! When nothing applies the expression evaluates to its own source text.
//! Every rule application counts against a per-expression step budget; an
//! expression that exhausts it also falls back to its source text.

use std::cell::Cell;

use sharpsim_lexer::{Lexer, Token, TokenKind};
use sharpsim_parser::{matching_close, parse_arithmetic, split_top_level, MAX_EXPR_DEPTH};
use sharpsim_types::ast::Expr;
use sharpsim_types::Value;

use crate::env::SymbolTable;

/// Rule applications allowed while resolving one expression.
pub const MAX_RESOLVE_STEPS: u32 = 4096;

/// Read-only view of the symbol table that turns expressions into values.
pub struct Evaluator<'a> {
    table: &'a SymbolTable,
    steps: Cell<u32>,
}

impl<'a> Evaluator<'a> {
    pub fn new(table: &'a SymbolTable) -> Self {
        Self {
            table,
            steps: Cell::new(0),
        }
    }

    /// Evaluate an expression, falling back to its raw text.
    pub fn evaluate(&self, expr: &Expr) -> Value {
        self.try_evaluate(expr.as_str())
            .unwrap_or_else(|| Value::from(expr.as_str()))
    }

    /// Evaluate source text, or `None` if no rule resolves it.
    pub fn try_evaluate(&self, text: &str) -> Option<Value> {
        let tokens = Lexer::new(text).lex().ok()?;
        self.steps.set(0);
        self.resolve(&tokens, text, 0)
    }

    /// `tokens` carry spans into `text`.
    fn resolve(&self, tokens: &[Token], text: &str, depth: u32) -> Option<Value> {
        let steps = self.steps.get().saturating_add(1);
        self.steps.set(steps);
        if tokens.is_empty() || depth > MAX_EXPR_DEPTH || steps > MAX_RESOLVE_STEPS {
            return None;
        }
        literal(tokens)
            .or_else(|| self.interpolated(tokens))
            .or_else(|| self.reference(tokens, text, depth))
            .or_else(|| self.arithmetic(tokens, text, depth))
            .or_else(|| self.concatenation(tokens, text, depth))
    }

    // ── Strings ───────────────────────────────────────────────────────────

    fn interpolated(&self, tokens: &[Token]) -> Option<Value> {
        match tokens {
            [Token {
                kind: TokenKind::InterpolatedString(raw),
                ..
            }] => Some(Value::Str(self.interpolate(raw))),
            _ => None,
        }
    }

    /// Replace each `{reference}` placeholder with its value. Placeholders
    /// that do not resolve are kept verbatim, braces included.
    fn interpolate(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len());
        let mut rest = raw;
        while let Some(open) = rest.find('{') {
            let Some(len) = rest[open..].find('}') else {
                break;
            };
            let close = open + len;
            out.push_str(&rest[..open]);
            match self.placeholder(&rest[open + 1..close]) {
                Some(value) => out.push_str(&value.to_string()),
                None => out.push_str(&rest[open..=close]),
            }
            rest = &rest[close + 1..];
        }
        out.push_str(rest);
        out
    }

    fn placeholder(&self, inner: &str) -> Option<Value> {
        let inner = inner.trim();
        let tokens = Lexer::new(inner).lex().ok()?;
        self.reference(&tokens, inner, 1)
    }

    // ── References ────────────────────────────────────────────────────────

    /// `name`, `object.field` or `array[index]`.
    fn reference(&self, tokens: &[Token], text: &str, depth: u32) -> Option<Value> {
        match tokens {
            [name] => self.table.get(name.ident()?).cloned(),
            [object, dot, field] if matches!(dot.kind, TokenKind::Dot) => self
                .table
                .object(object.ident()?)?
                .field(field.ident()?)
                .cloned(),
            [array, lb, index @ .., _]
                if matches!(lb.kind, TokenKind::LBracket)
                    && matching_close(tokens, 1) == Some(tokens.len() - 1) =>
            {
                let array = self.table.array(array.ident()?)?;
                let index = self.resolve(index, text, depth + 1)?.as_index()?;
                array.read(index)
            }
            _ => None,
        }
    }

    /// Index one past the reference starting at `start`.
    fn reference_end(tokens: &[Token], start: usize) -> Option<usize> {
        match tokens.get(start + 1).map(|t| &t.kind) {
            Some(TokenKind::Dot) => {
                tokens.get(start + 2)?.ident()?;
                Some(start + 3)
            }
            Some(TokenKind::LBracket) => Some(matching_close(tokens, start + 1)? + 1),
            _ => Some(start + 1),
        }
    }

    // ── Arithmetic ────────────────────────────────────────────────────────

    /// Substitute every reference with its numeric value, then parse.
    fn arithmetic(&self, tokens: &[Token], text: &str, depth: u32) -> Option<Value> {
        // A lone reference has already been tried as one.
        if tokens.first().and_then(Token::ident).is_some()
            && Self::reference_end(tokens, 0) == Some(tokens.len())
        {
            return None;
        }
        let mut substituted = Vec::with_capacity(tokens.len());
        let mut i = 0;
        while i < tokens.len() {
            let token = &tokens[i];
            if token.ident().is_none() {
                substituted.push(token.clone());
                i += 1;
                continue;
            }
            let end = Self::reference_end(tokens, i)?;
            let n = self
                .reference(&tokens[i..end], text, depth + 1)?
                .as_number()?;
            substituted.push(Token::new(TokenKind::NumberLit(n), token.span));
            i = end;
        }
        parse_arithmetic(&substituted).map(|expr| Value::Number(expr.eval()))
    }

    // ── Concatenation ─────────────────────────────────────────────────────

    /// Fold top-level `+` operands left to right: two numbers add, anything
    /// else concatenates.
    fn concatenation(&self, tokens: &[Token], text: &str, depth: u32) -> Option<Value> {
        let parts = split_top_level(tokens, &TokenKind::Plus);
        if parts.len() < 2 {
            return None;
        }
        let mut values = parts
            .into_iter()
            .map(|part| self.resolve(part, text, depth + 1));
        let first = values.next()??;
        values.try_fold(first, |acc, next| {
            Some(match (acc, next?) {
                (Value::Number(a), Value::Number(b)) => Value::Number(a + b),
                (acc, next) => Value::Str(format!("{acc}{next}")),
            })
        })
    }
}

fn literal(tokens: &[Token]) -> Option<Value> {
    let [token] = tokens else {
        return None;
    };
    match &token.kind {
        TokenKind::StringLit(s) | TokenKind::CharLit(s) => Some(Value::Str(s.clone())),
        TokenKind::True => Some(Value::Bool(true)),
        TokenKind::False => Some(Value::Bool(false)),
        _ => None,
    }
}
