use logos::Logos;
use parsekit::Token;
use parsekit::prelude::*;
use test_case::test_case;

#[derive(Logos, Token, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t]+")]
enum Tok {
    #[token("let", priority = 5)]
    Let,
    #[token("+")]
    Plus,
    #[regex(r"\r?\n")]
    #[newline]
    LineBreak,
    #[regex("[a-z]+", |lex| lex.slice().to_string())]
    #[describe("identifier")]
    Ident(String),
    #[regex("[0-9]+", |lex| lex.slice().parse::<u32>().ok())]
    IntLiteral(u32),
}

#[test_case(Tok::Let, "'let'"; "token literal")]
#[test_case(Tok::Plus, "'+'"; "punctuation")]
#[test_case(Tok::LineBreak, "line_break"; "regex without description")]
#[test_case(Tok::Ident("x".into()), "identifier"; "explicit description")]
#[test_case(Tok::IntLiteral(3), "int_literal"; "tuple variant")]
fn test_describes_variants(token: Tok, expected: &str) {
    assert_eq!(token.describe(), expected);
}

#[test]
fn test_newline_variants() {
    assert!(Tok::LineBreak.is_newline());
    assert!(!Tok::Plus.is_newline());
}

#[test]
fn test_cursor_follows_newline_tokens() {
    let tokens: Vec<Tok> = Tok::lexer("let a\nlet b + 1\n")
        .collect::<Result<_, _>>()
        .unwrap();

    let binding = || token(Tok::Let).then(any_token());
    let parser = binding().skip(token(Tok::LineBreak)).and(binding());
    let (names, state) = run_prefix(&parser, &tokens, ()).unwrap();

    assert_eq!(names, (Tok::Ident("a".into()), Tok::Ident("b".into())));

    let cursor = state.cursor();
    assert_eq!(cursor.line(), 2);
    assert_eq!(cursor.column(), 3);
    assert_eq!(state.peek(), Some(&Tok::Plus));
}
