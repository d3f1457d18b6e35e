#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! Procedural macros for the parsekit parser-combinator engine.
//!
//! - [`Token`](derive@Token): implements `parsekit::Token` for a token enum,
//!   typically one that also derives `logos::Logos`
use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive_token;

/// Derives `parsekit::Token` for an enum.
///
/// Each variant is described in diagnostics by, in order of preference:
///
/// 1. a `#[describe("...")]` attribute
/// 2. the literal of a logos `#[token("...")]` attribute, quoted: `'+'`
/// 3. the variant name in snake_case: `IntLiteral` becomes `int_literal`
///
/// Variants marked `#[newline]` advance the cursor to the next line.
///
/// # Example
///
/// ```ignore
/// use logos::Logos;
/// use parsekit::Token;
///
/// #[derive(Logos, Token, Debug, Clone, PartialEq)]
/// #[logos(skip r"[ \t]+")]
/// enum Tok {
///     #[token("+")]
///     Plus,
///     #[regex(r"[0-9]+", |lex| lex.slice().parse().ok())]
///     #[describe("number")]
///     Number(i64),
///     #[token("\n")]
///     #[newline]
///     Newline,
/// }
///
/// assert_eq!(Tok::Plus.describe(), "'+'");
/// assert!(Tok::Newline.is_newline());
/// ```
#[proc_macro_derive(Token, attributes(describe, newline))]
pub fn derive_token(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive_token::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
