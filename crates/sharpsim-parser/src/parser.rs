//! Token cursor shared by the arithmetic parser.

use sharpsim_lexer::token::{Token, TokenKind};

/// Maximum parenthesis / unary nesting accepted by the arithmetic parser.
pub const MAX_EXPR_DEPTH: u32 = 32;

/// Cursor over a borrowed token slice.
///
/// Parse failures are reported as `None`; the evaluator turns them into
/// its raw-text fallback, so no error detail is collected.
pub struct Parser<'t> {
    /// The token stream.
    tokens: &'t [Token],
    /// Current index into `tokens`.
    pos: usize,
    /// Current expression nesting depth.
    pub(crate) depth: u32,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    // ── Token Cursor ──────────────────────────────────────────────────────────

    /// Returns the kind of the current token, or `None` at the end.
    pub(crate) fn peek_kind(&self) -> Option<&'t TokenKind> {
        self.tokens.get(self.pos).map(|t| &t.kind)
    }

    /// Advance the cursor by one and return the consumed token.
    pub(crate) fn advance(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Returns `true` once every token has been consumed.
    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Check if the current token matches the given kind exactly.
    pub(crate) fn check_exact(&self, kind: &TokenKind) -> bool {
        self.peek_kind() == Some(kind)
    }

    /// If the current token matches, advance and return `true`.
    pub(crate) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check_exact(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Enter one nesting level; `None` once [`MAX_EXPR_DEPTH`] is exceeded.
    pub(crate) fn enter(&mut self) -> Option<()> {
        self.depth += 1;
        (self.depth <= MAX_EXPR_DEPTH).then_some(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

// ── Token Runs ────────────────────────────────────────────────────────────────

fn depth_change(kind: &TokenKind) -> i32 {
    match kind {
        TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => 1,
        TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => -1,
        _ => 0,
    }
}

/// Returns `true` if every bracket in `tokens` is closed inside the run and
/// no closer appears before its opener.
pub fn balanced(tokens: &[Token]) -> bool {
    let mut depth = 0;
    for token in tokens {
        depth += depth_change(&token.kind);
        if depth < 0 {
            return false;
        }
    }
    depth == 0
}

/// Index of the bracket closing the one at `open`.
pub fn matching_close(tokens: &[Token], open: usize) -> Option<usize> {
    let mut depth = 0;
    for (i, token) in tokens.iter().enumerate().skip(open) {
        depth += depth_change(&token.kind);
        if depth == 0 {
            return Some(i);
        }
        if depth < 0 {
            return None;
        }
    }
    None
}

/// Split `tokens` at every `separator` that is not nested inside brackets.
///
/// Empty runs are kept, so `a,,b` yields three parts.
pub fn split_top_level<'t>(tokens: &'t [Token], separator: &TokenKind) -> Vec<&'t [Token]> {
    let mut parts = Vec::new();
    let mut depth = 0;
    let mut start = 0;
    for (i, token) in tokens.iter().enumerate() {
        if depth == 0 && &token.kind == separator {
            parts.push(&tokens[start..i]);
            start = i + 1;
            continue;
        }
        depth += depth_change(&token.kind);
    }
    parts.push(&tokens[start..]);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use sharpsim_lexer::Lexer;

    fn lex(source: &str) -> Vec<Token> {
        Lexer::new(source).lex().unwrap()
    }

    #[test]
    fn test_balanced() {
        assert!(balanced(&lex("f(a[1], {2})")));
        assert!(balanced(&lex("")));
        assert!(!balanced(&lex("a) + (b")));
        assert!(!balanced(&lex("(a")));
    }

    #[test]
    fn test_matching_close() {
        let tokens = lex("n[a[1]] = 2");
        assert_eq!(matching_close(&tokens, 1), Some(6));
        assert_eq!(matching_close(&lex("n[1"), 1), None);
    }

    #[test]
    fn test_split_top_level_ignores_nested_separators() {
        let tokens = lex("\"a\" + f(b + c) + d");
        let parts = split_top_level(&tokens, &TokenKind::Plus);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[1].len(), 6);
    }

    #[test]
    fn test_split_top_level_keeps_empty_parts() {
        let tokens = lex("1,,2");
        let parts = split_top_level(&tokens, &TokenKind::Comma);
        assert_eq!(parts.len(), 3);
        assert!(parts[1].is_empty());
    }
}
