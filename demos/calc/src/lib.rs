#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! Calculator Example
//!
//! A small line-oriented calculator built on parsekit. Source text is lexed
//! with logos into [`Tok`]s, parsed by the combinator grammar in [`parse`]
//! and evaluated with checked arithmetic.
//!
//! # Format
//!
//! ```text
//! width = 12
//! height = width / 3; area = width * height
//! area - 1   # expression statements are reported
//! ```

use logos::Logos;
use parsekit::{ParseConfig, Token, run_with};
use thiserror::Error;

pub mod ast;
pub mod eval;
pub mod parse;

pub use ast::{BinOp, Expr, Program, Stmt};
pub use eval::Env;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("invalid token {text:?} at byte {offset}")]
    Lex { offset: usize, text: String },

    #[error(transparent)]
    Parse(#[from] parsekit::Error),

    #[error("division by zero")]
    DivisionByZero,

    #[error("arithmetic overflow")]
    Overflow,

    #[error("undefined variable `{0}`")]
    UndefinedVariable(String),
}

#[derive(Logos, Token, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t]+")]
#[logos(skip(r"#[^\n]*", allow_greedy = true))]
pub enum Tok {
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("=")]
    Assign,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semi,
    #[regex(r"\r?\n")]
    #[newline]
    #[describe("newline")]
    Newline,
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    #[describe("identifier")]
    Ident(String),
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    #[describe("integer")]
    Int(i64),
}

/// Lexes `source`, failing on the first unrecognised input.
pub fn lex(source: &str) -> Result<Vec<Tok>, CalcError> {
    Tok::lexer(source)
        .spanned()
        .map(|(token, span)| {
            token.map_err(|()| CalcError::Lex {
                offset: span.start,
                text: source[span].to_string(),
            })
        })
        .collect()
}

/// Nesting depth accepted for parentheses and unary minus.
pub const MAX_NESTING: usize = 64;

pub fn parse(source: &str) -> Result<Program, CalcError> {
    parse_with(
        source,
        ParseConfig::new().with_max_recursion_depth(MAX_NESTING),
    )
}

pub fn parse_with(source: &str, config: ParseConfig) -> Result<Program, CalcError> {
    let tokens = lex(source)?;
    Ok(run_with(config, &parse::program, &tokens, parse::Scope::new())?)
}

/// Parses and runs `source`, returning the value of every expression
/// statement in order.
pub fn evaluate(source: &str) -> Result<Vec<i64>, CalcError> {
    let program = parse(source)?;
    Env::default().run(&program)
}
