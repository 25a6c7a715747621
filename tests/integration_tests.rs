//! Integration tests for the full lex-map-parse pipeline.

use minic::prelude::*;
use minic::{check, tokenize};

fn verdict(source: &str) -> Verdict {
    check(source).expect("pipeline failed")
}

#[test]
fn test_accepts_declarations_and_function() {
    // Exercises var-decl, func-decl, argument-list, and return rules.
    assert_eq!(verdict("int x; int f(int a) { return a; }"), Verdict::Accepted);
}

#[test]
fn test_accepts_empty_program() {
    assert_eq!(verdict(""), Verdict::Accepted);
    assert_eq!(verdict("\n\n"), Verdict::Accepted);
}

#[test]
fn test_accepts_full_program() {
    let source = r#"
int count;
float ratio = 0.5;

int main(int argc, char argv) {
    int i;
    count = 0;
    for (i = 0; i < 100; i = i + 1) {
        if (i < 50) {
            count = count + i * 2;
        } else {
            count = count - 1;
        }
        while (count > 10) {
            count = count / 2;
        }
    }
    return count;
}
"#;
    assert_eq!(verdict(source), Verdict::Accepted);
}

#[test]
fn test_accepts_string_initializer() {
    assert_eq!(verdict("char s = \"hello world\";"), Verdict::Accepted);
}

#[test]
fn test_rejects_missing_closing_brace_at_eof() {
    let outcome = verdict("int f(int a) { return a;");
    match outcome {
        Verdict::Rejected { lookahead, .. } => assert_eq!(lookahead, Symbol::Eof),
        Verdict::Accepted => panic!("expected rejection"),
    }
}

#[test]
fn test_rejects_top_level_statement() {
    assert!(!verdict("if (x < 1) { }").is_accepted());
}

#[test]
fn test_determinism_end_to_end() {
    let source = "int f(int a) { a = -3 + a; return a; }";
    let first = tokenize(source).unwrap();
    let second = tokenize(source).unwrap();
    assert_eq!(first, second);
    assert_eq!(verdict(source), verdict(source));
    assert_eq!(verdict(source), Verdict::Accepted);
}

#[test]
fn test_token_stream_has_no_whitespace() {
    let stream = tokenize("int   x\t;\n\nfloat y ;").unwrap();
    assert!(stream.iter().all(|t| t.category != TokenCategory::Whitespace));
    assert_eq!(stream.len(), 6);
}

#[test]
fn test_maximal_munch() {
    let kinds: Vec<TokenCategory> = tokenize("intx int in")
        .unwrap()
        .iter()
        .map(|t| t.category)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenCategory::Identifier,
            TokenCategory::VariableType,
            TokenCategory::Identifier,
        ]
    );
}

#[test]
fn test_negative_literal_merge_end_to_end() {
    let stream = tokenize("x = -5;").unwrap();
    let lexemes: Vec<&str> = stream.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(lexemes, vec!["x", "=", "-5", ";"]);

    let stream = tokenize("x - 5;").unwrap();
    let got: Vec<(TokenCategory, &str)> = stream
        .iter()
        .map(|t| (t.category, t.lexeme.as_str()))
        .collect();
    assert_eq!(
        got,
        vec![
            (TokenCategory::Identifier, "x"),
            (TokenCategory::ArithmeticOp, "-"),
            (TokenCategory::SignedIconst, "5"),
            (TokenCategory::Semi, ";"),
        ]
    );

    // Both parse: the grammar sees assign-num and id-addsub-num.
    assert_eq!(verdict("int y = -5;"), Verdict::Accepted);
    assert_eq!(verdict("int z = x - 5;"), Verdict::Accepted);
}

#[test]
fn test_string_literal_integrity() {
    let stream = tokenize("s = \"hello world\";").unwrap();
    assert_eq!(stream.get(2).unwrap().lexeme, "\"hello world\"");

    let err = tokenize("s = \"hello").unwrap_err();
    assert!(matches!(err, MiniCError::Lexical(_)));
}

#[test]
fn test_lexical_error_reports_line() {
    let err = match tokenize("int x;\nint ? y;") {
        Err(MiniCError::Lexical(e)) => e,
        other => panic!("expected a lexical error, got {:?}", other),
    };
    assert_eq!(err.line, 2);
}

#[test]
fn test_grammar_gap_is_surfaced_not_guessed() {
    // The lexer accepts bitwise operators and boolean literals; the
    // grammar has no terminals for them, so translation fails loudly.
    let stream = tokenize("x = 1 << 2;").unwrap();
    let err = minic::parser::parse(&stream).unwrap_err();
    assert_eq!(err.category, TokenCategory::BitwiseOp);

    let stream = tokenize("bool b = true;").unwrap();
    let err = minic::parser::parse(&stream).unwrap_err();
    assert_eq!(err.category, TokenCategory::BooleanString);
}

#[test]
fn test_handoff_round_trip_preserves_the_stream() {
    let source = "int f(int a) { a = -3; return a; }";
    let stream = tokenize(source).unwrap();

    let json = serde_json::to_string(stream.tokens()).unwrap();
    let tokens: Vec<Token> = serde_json::from_str(&json).unwrap();
    let rebuilt = TokenStream::from_tokens(tokens).unwrap();

    assert_eq!(stream, rebuilt);
    assert_eq!(
        minic::parser::parse(&rebuilt).unwrap(),
        minic::parser::parse(&stream).unwrap()
    );
}

#[test]
fn test_rejection_diagnostic_is_renderable() {
    let outcome = verdict("int x");
    let message = format!("{}", outcome);
    assert!(message.contains("NOT been accepted"));
    assert!(message.contains("next symbol"));
}

#[test]
fn test_mixed_numeric_forms() {
    assert_eq!(verdict("float a = 1.00;"), Verdict::Accepted);
    assert_eq!(verdict("float b = -0.5;"), Verdict::Accepted);
    // `01` lexes as two integer tokens, which the grammar then rejects.
    assert!(!verdict("int c = 01;").is_accepted());
    // A dangling fraction dot never reaches the parser.
    assert!(check("float d = 3.;").is_err());
}
