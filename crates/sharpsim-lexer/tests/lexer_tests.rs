//! Lexer tests.
//!
//! Covers: keywords, punctuation and compound operators, numbers with
//! suffixes, raw string / interpolated / char literals, comments,
//! unknown characters, unterminated literals, and determinism.

use sharpsim_lexer::{Lexer, TokenKind};
use sharpsim_types::LexError;

// ─────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────

/// Lex a line and return just the token kinds.
fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::new(source)
        .lex()
        .expect("lex failed")
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

fn ident(name: &str) -> TokenKind {
    TokenKind::Identifier(name.to_string())
}

// ─────────────────────────────────────────────────────────────────────
// Keywords & identifiers
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_keywords() {
    assert_eq!(kinds("new"), vec![TokenKind::New]);
    assert_eq!(kinds("true"), vec![TokenKind::True]);
    assert_eq!(kinds("false"), vec![TokenKind::False]);
}

#[test]
fn test_type_names_are_identifiers() {
    for word in ["int", "string", "double", "bool", "var", "Console", "WriteLine"] {
        assert_eq!(kinds(word), vec![ident(word)], "'{word}'");
    }
}

#[test]
fn test_identifier_with_underscore_and_digits() {
    assert_eq!(kinds("_count2"), vec![ident("_count2")]);
    assert_eq!(kinds("newValue"), vec![ident("newValue")]);
}

#[test]
fn test_unicode_identifier() {
    assert_eq!(kinds("عدد"), vec![ident("عدد")]);
}

// ─────────────────────────────────────────────────────────────────────
// Operators & punctuation
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_console_call_shape() {
    assert_eq!(
        kinds("Console.WriteLine(x);"),
        vec![
            ident("Console"),
            TokenKind::Dot,
            ident("WriteLine"),
            TokenKind::LParen,
            ident("x"),
            TokenKind::RParen,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_compound_operators() {
    assert_eq!(
        kinds("+= -= *= /= ++ --"),
        vec![
            TokenKind::PlusEq,
            TokenKind::MinusEq,
            TokenKind::StarEq,
            TokenKind::SlashEq,
            TokenKind::PlusPlus,
            TokenKind::MinusMinus,
        ]
    );
}

#[test]
fn test_equality_is_not_assignment() {
    assert_eq!(kinds("a == b"), vec![ident("a"), TokenKind::EqEq, ident("b")]);
    assert_eq!(kinds("a = b"), vec![ident("a"), TokenKind::Eq, ident("b")]);
    assert_eq!(kinds("=>"), vec![TokenKind::FatArrow]);
}

#[test]
fn test_array_brackets_and_braces() {
    assert_eq!(
        kinds("int[] n = { 1 };"),
        vec![
            ident("int"),
            TokenKind::LBracket,
            TokenKind::RBracket,
            ident("n"),
            TokenKind::Eq,
            TokenKind::LBrace,
            TokenKind::NumberLit(1.0),
            TokenKind::RBrace,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_unknown_characters_become_other() {
    assert_eq!(
        kinds("i < 5 % 2"),
        vec![
            ident("i"),
            TokenKind::Other('<'),
            TokenKind::NumberLit(5.0),
            TokenKind::Other('%'),
            TokenKind::NumberLit(2.0),
        ]
    );
}

// ─────────────────────────────────────────────────────────────────────
// Numbers
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_integer_and_decimal() {
    assert_eq!(kinds("42"), vec![TokenKind::NumberLit(42.0)]);
    assert_eq!(kinds("3.14"), vec![TokenKind::NumberLit(3.14)]);
}

#[test]
fn test_number_suffix_is_ignored() {
    assert_eq!(kinds("2.5f"), vec![TokenKind::NumberLit(2.5)]);
    assert_eq!(kinds("10m"), vec![TokenKind::NumberLit(10.0)]);
    assert_eq!(kinds("7D"), vec![TokenKind::NumberLit(7.0)]);
}

#[test]
fn test_trailing_dot_is_member_access() {
    assert_eq!(
        kinds("5.ToString"),
        vec![TokenKind::NumberLit(5.0), TokenKind::Dot, ident("ToString")]
    );
}

#[test]
fn test_minus_is_separate_from_number() {
    assert_eq!(
        kinds("-3"),
        vec![TokenKind::Minus, TokenKind::NumberLit(3.0)]
    );
}

// ─────────────────────────────────────────────────────────────────────
// Literals
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_string_literal_is_raw() {
    assert_eq!(
        kinds(r#""Hello, World!""#),
        vec![TokenKind::StringLit("Hello, World!".into())]
    );
    assert_eq!(
        kinds(r#""a\nb""#),
        vec![TokenKind::StringLit(r"a\nb".into())]
    );
}

#[test]
fn test_escaped_quote_does_not_close_string() {
    assert_eq!(
        kinds(r#""say \"hi\"""#),
        vec![TokenKind::StringLit(r#"say \"hi\""#.into())]
    );
}

#[test]
fn test_string_may_contain_comment_markers() {
    assert_eq!(
        kinds(r#""http://x" // real comment"#),
        vec![TokenKind::StringLit("http://x".into())]
    );
}

#[test]
fn test_interpolated_string() {
    assert_eq!(
        kinds(r#"$"Name: {name}, Age: {age}""#),
        vec![TokenKind::InterpolatedString("Name: {name}, Age: {age}".into())]
    );
}

#[test]
fn test_dollar_without_quote_is_other() {
    assert_eq!(kinds("$x"), vec![TokenKind::Other('$'), ident("x")]);
}

#[test]
fn test_char_literal() {
    assert_eq!(kinds("'A'"), vec![TokenKind::CharLit("A".into())]);
    assert_eq!(kinds(r"'\''"), vec![TokenKind::CharLit(r"\'".into())]);
}

#[test]
fn test_non_ascii_string_content() {
    assert_eq!(
        kinds(r#""مرحبا""#),
        vec![TokenKind::StringLit("مرحبا".into())]
    );
}

// ─────────────────────────────────────────────────────────────────────
// Comments & errors
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_line_comment_only() {
    assert!(kinds("// just a note").is_empty());
}

#[test]
fn test_trailing_line_comment() {
    assert_eq!(
        kinds("x++; // bump"),
        vec![ident("x"), TokenKind::PlusPlus, TokenKind::Semicolon]
    );
}

#[test]
fn test_unterminated_string() {
    let err = Lexer::new(r#"Console.WriteLine("oops);"#).lex().unwrap_err();
    assert_eq!(err, LexError::UnterminatedString(18));
}

#[test]
fn test_unterminated_char() {
    let err = Lexer::new("'a").lex().unwrap_err();
    assert_eq!(err, LexError::UnterminatedChar(0));
}

#[test]
fn test_empty_line() {
    assert!(kinds("").is_empty());
    assert!(kinds("   \t ").is_empty());
}

// ─────────────────────────────────────────────────────────────────────
// Determinism
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_lexer_determinism_100_iterations() {
    let source = r#"Console.WriteLine($"Total: {total}" + x * (y - 2));"#;
    let first = kinds(source);
    for i in 0..100 {
        assert_eq!(first, kinds(source), "Determinism failure at iteration {i}");
    }
}
