//! Arithmetic parsing.
//!
//! The accepted language is deliberately tiny: numeric literals, unary
//! `-`/`+`, the four binary operators and parentheses. Identifiers must
//! already have been substituted with numbers by the caller.
//!
//! Precedence (lowest → highest):
//! 3. `+`, `-`
//! 2. `*`, `/`
//! 1. unary `-`, `+`

use sharpsim_lexer::token::{Token, TokenKind};
use sharpsim_types::ast::{ArithExpr, ArithOp};

use crate::parser::Parser;

/// Parse a complete token run as arithmetic.
///
/// Returns `None` if any token is outside the grammar, the tokens do not
/// form one expression, or nesting exceeds [`crate::MAX_EXPR_DEPTH`].
pub fn parse_arithmetic(tokens: &[Token]) -> Option<ArithExpr> {
    let mut parser = Parser::new(tokens);
    let expr = parser.parse_sum()?;
    parser.at_end().then_some(expr)
}

impl<'t> Parser<'t> {
    /// `Sum = Product { ("+" | "-") Product }`
    fn parse_sum(&mut self) -> Option<ArithExpr> {
        let mut left = self.parse_product()?;
        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Plus) => ArithOp::Add,
                Some(TokenKind::Minus) => ArithOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_product()?;
            left = ArithExpr::binary(left, op, right);
        }
        Some(left)
    }

    /// `Product = Unary { ("*" | "/") Unary }`
    fn parse_product(&mut self) -> Option<ArithExpr> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Star) => ArithOp::Mul,
                Some(TokenKind::Slash) => ArithOp::Div,
                _ => break,
            };
            self.advance();
            let right = self.parse_unary()?;
            left = ArithExpr::binary(left, op, right);
        }
        Some(left)
    }

    /// `Unary = ("-" | "+") Unary | Primary`
    fn parse_unary(&mut self) -> Option<ArithExpr> {
        if self.eat(&TokenKind::Minus) {
            self.enter()?;
            let inner = self.parse_unary();
            self.leave();
            return Some(ArithExpr::Neg(Box::new(inner?)));
        }
        if self.eat(&TokenKind::Plus) {
            self.enter()?;
            let inner = self.parse_unary();
            self.leave();
            return inner;
        }
        self.parse_primary()
    }

    /// `Primary = Number | "(" Sum ")"`
    fn parse_primary(&mut self) -> Option<ArithExpr> {
        match self.advance()?.kind {
            TokenKind::NumberLit(n) => Some(ArithExpr::Number(n)),
            TokenKind::LParen => {
                self.enter()?;
                let inner = self.parse_sum();
                self.leave();
                let inner = inner?;
                self.eat(&TokenKind::RParen).then_some(inner)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sharpsim_lexer::Lexer;

    fn eval(source: &str) -> Option<f64> {
        let tokens = Lexer::new(source).lex().ok()?;
        parse_arithmetic(&tokens).map(|e| e.eval())
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("2 + 3 * 4"), Some(14.0));
        assert_eq!(eval("(2 + 3) * 4"), Some(20.0));
        assert_eq!(eval("10 - 4 - 3"), Some(3.0));
        assert_eq!(eval("24 / 4 / 2"), Some(3.0));
    }

    #[test]
    fn test_unary() {
        assert_eq!(eval("-5"), Some(-5.0));
        assert_eq!(eval("10 - -3"), Some(13.0));
        assert_eq!(eval("+4"), Some(4.0));
        assert_eq!(eval("-(2 + 3)"), Some(-5.0));
    }

    #[test]
    fn test_division_keeps_fraction() {
        assert_eq!(eval("15 / 4"), Some(3.75));
    }

    #[test]
    fn test_rejects_identifiers_and_other_tokens() {
        assert_eq!(eval("a + 1"), None);
        assert_eq!(eval("5 % 2"), None);
        assert_eq!(eval("\"x\" + 1"), None);
        assert_eq!(eval("Math.Sqrt(16)"), None);
    }

    #[test]
    fn test_rejects_incomplete_input() {
        assert_eq!(eval(""), None);
        assert_eq!(eval("1 +"), None);
        assert_eq!(eval("(1 + 2"), None);
        assert_eq!(eval("1 + 2)"), None);
        assert_eq!(eval("1 2"), None);
    }

    #[test]
    fn test_nesting_limit() {
        let shallow = format!("{}1{}", "(".repeat(10), ")".repeat(10));
        assert_eq!(eval(&shallow), Some(1.0));
        let deep = format!("{}1{}", "(".repeat(40), ")".repeat(40));
        assert_eq!(eval(&deep), None);
        assert_eq!(eval("- - 1"), Some(1.0));
    }
}
