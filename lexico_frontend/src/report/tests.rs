use super::*;
use crate::{
    analyze,
    error::{Diagnostic, SyntaxErrorMessage},
    lexer,
};
use insta::assert_snapshot;
use pretty_assertions::assert_eq as eq;

fn test(src: &str) -> String {
    eprintln!("Testing: {}", src);
    analyze(src)
}

#[test]
fn condition_without_colon() {
    let report = test("if x > 5\n  print(x)");
    assert_snapshot!("condition_without_colon", report);
}

#[test]
fn success_notice() {
    let report = test("x = 1\nprint(x)");
    eq!(
        report,
        "=== Tokens ===
Keywords (1):
  [2] print
Identifiers (2):
  [1] x
  [2] x
Operators (3):
  [1] =
  [2] (
  [2] )
Numbers (1):
  [1] 1
Strings (0):

=== Diagnostics ===
No lexical, syntax or semantic errors found.

=== Summary ===
Keywords: 1
Identifiers: 2
Operators: 3
Numbers: 1
Strings: 0
Unknown: 0
Total: 7
"
    );
}

#[test]
fn empty_source() {
    let report = test("");
    eq!(
        report,
        "=== Tokens ===
Keywords (0):
Identifiers (0):
Operators (0):
Numbers (0):
Strings (0):

=== Diagnostics ===
No lexical, syntax or semantic errors found.

=== Summary ===
Keywords: 0
Identifiers: 0
Operators: 0
Numbers: 0
Strings: 0
Unknown: 0
Total: 0
"
    );
}

#[test]
fn groups_in_fixed_order() {
    let report = test("y = 1 @ 2\nif y\n");
    assert!(!report.contains(SUCCESS_NOTICE));
    let lexical = report
        .find("Lexical errors (1):\n  Line 1: unrecognized token: '@'\n")
        .unwrap();
    let syntax = report
        .find(
            "Syntax errors (2):
  Line 2: missing ':' after condition
  Line 2: missing indentation after ':'
",
        )
        .unwrap();
    assert!(lexical < syntax);
    assert!(!report.contains("Semantic errors"));
    assert!(report.ends_with("Unknown: 1\nTotal: 7\n"));
}

#[test]
fn unknown_tokens_are_only_counted() {
    let report = test("a = $");
    let tokens_section = &report[..report.find("=== Diagnostics ===").unwrap()];
    assert!(!tokens_section.contains('$'));
    assert!(report.contains("Unknown: 1\n"));
}

#[test]
fn counts() {
    let tokens = lexer::lex("def f(a):\n    return 'a' + a\n@");
    let counts = TokenCounts::new(&tokens);
    eq!(counts.get(TokenKind::Keyword), 2);
    eq!(counts.get(TokenKind::Identifier), 3);
    eq!(counts.get(TokenKind::Operator), 4);
    eq!(counts.get(TokenKind::Number), 0);
    eq!(counts.get(TokenKind::String), 1);
    eq!(counts.get(TokenKind::Unknown), 1);
    eq!(counts.total(), 11);
}

#[test]
fn rendering_is_repeatable() {
    let src = "edad = 'x'\nif edad > 3\n    print(nombre)";
    eq!(test(src), test(src));
}

#[test]
fn diagnostics_render_like_display() {
    let diagnostic = Diagnostic::syntax(2, SyntaxErrorMessage::MissingColonAfterElse);
    eq!(diagnostic.to_string(), "Line 2: missing ':' after 'else'");
    let report = test("if x:\nelse\n    pass");
    assert!(report.contains(&format!("  {}\n", diagnostic)));
}
